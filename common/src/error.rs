use thiserror::Error;

/// Failures that abort the page initialization flow or a submission.
///
/// During page load every variant collapses into the same outcome: a
/// redirect to the static error page. The distinction only reaches the
/// developer console.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadError {
    /// The `expose` query parameter is absent or empty.
    #[error("no \"expose\" parameter found in the URL")]
    MissingParameter,
    /// The `expose` value is not valid base64 text.
    #[error("malformed record identifier: {0}")]
    MalformedIdentifier(String),
    /// Transport failure, non-JSON body or an envelope without `data`.
    #[error("record fetch failed: {0}")]
    Fetch(String),
    /// The inner `data` document does not match the record schema.
    #[error("malformed record payload: {0}")]
    MalformedPayload(String),
    /// The lead submission request never produced an HTTP response.
    #[error("submission failed: {0}")]
    Submit(String),
}
