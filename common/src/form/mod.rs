//! Lead-capture form: generated layout, client-side validation and the
//! submission phase machine.

mod decision;
mod layout;
mod lead_form;
mod phase;

pub use decision::{decide_submit, SubmitDecision};
pub use layout::{FormControl, FormLayout, TERMS_CONTROL_ID};
pub use lead_form::{LeadForm, ValidationError, REQUIRED_FIELDS_MESSAGE};
pub use phase::{classify_status, PhaseEvent, SubmitOutcome, SubmitPhase, NETWORK_ERROR_MESSAGE};
