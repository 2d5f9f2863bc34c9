//! Read-only page regions. Each component receives only its slice of the
//! record payload as properties.

mod details;
mod gallery;
mod header;

pub use details::PropertyDetails;
pub use gallery::ListingGallery;
pub use header::ListingHeader;
