//! Shared model and logic for the listing lead page.
//!
//! Everything here is target independent so it can be unit-tested natively;
//! the `frontend` crate wires it to the browser.

pub mod config;
pub mod error;
pub mod form;
pub mod identifier;
pub mod model;
pub mod requests;
