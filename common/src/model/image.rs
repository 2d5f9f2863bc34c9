use serde::{Deserialize, Serialize};

/// A picture reference as served by the record endpoint, used both for the
/// header banner and for every gallery entry.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Image {
    /// Absolute or page-relative source URL.
    pub url: String,
    /// Alternative text rendered into the `alt` attribute.
    pub alt: String,
}
