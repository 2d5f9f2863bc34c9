//! Endpoints and navigation targets of the lead page.

use crate::identifier::RecordId;

/// Host serving the record and lead endpoints.
pub const DEFAULT_API_HOST: &str = "https://immocrm.pythonanywhere.com";

/// Where the page talks to and where it navigates.
///
/// Page targets are relative to the current document, like a plain link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadConfig {
    pub api_host: String,
    pub success_page: String,
    pub error_page: String,
    pub terms_page: String,
}

impl Default for LeadConfig {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            success_page: "success.html".to_string(),
            error_page: "error.html".to_string(),
            terms_page: "tc.html".to_string(),
        }
    }
}

impl LeadConfig {
    /// `GET` endpoint returning the record envelope.
    pub fn record_url(&self, id: &RecordId) -> String {
        format!("{}/api/record/{}/", self.host(), id)
    }

    /// `POST` endpoint accepting a submission payload.
    pub fn submit_url(&self) -> String {
        format!("{}/api/submit-web-to-lead/", self.host())
    }

    fn host(&self) -> &str {
        self.api_host.trim_end_matches('/')
    }
}
