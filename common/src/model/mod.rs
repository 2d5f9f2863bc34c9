pub mod field;
pub mod image;
pub mod record;
