//! Thin wrappers over the window location: reading the `expose` query
//! parameter and navigating to the static result pages.

use gloo_console::error;
use lead_common::error::LeadError;
use lead_common::identifier::{RecordId, EXPOSE_PARAM};
use web_sys::UrlSearchParams;

/// Raw `expose` value of the current page URL, if present.
pub fn expose_param() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get(EXPOSE_PARAM)
}

/// Resolves the record identifier from the current page URL.
pub fn current_record_id() -> Result<RecordId, LeadError> {
    RecordId::from_expose(expose_param().as_deref())
}

/// Replaces the current page with `target`, resolved against the page URL.
pub fn navigate_to(target: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(target) {
            error!(format!("navigation to {} failed", target), err);
        }
    }
}
