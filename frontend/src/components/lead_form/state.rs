use lead_common::form::{FormLayout, LeadForm, SubmitPhase};
use yew::prelude::*;

use super::props::LeadFormProps;

/// Runtime state of the lead form.
///
/// Fields are `pub` because they are accessed by `view` and `update`.
pub struct LeadFormComponent {
    /// Generated controls: descriptor inputs, terms checkbox, submit button.
    pub layout: FormLayout,

    /// Typed values and the set of fields flagged invalid.
    pub form: LeadForm,

    /// Where the current submit attempt stands. Drives the button state.
    pub phase: SubmitPhase,

    /// Inline message under the form; empty when there is nothing to report.
    pub error_message: String,

    /// Reference to the `<form>` node, used for native constraint validation.
    pub form_ref: NodeRef,
}

impl LeadFormComponent {
    pub fn new(props: &LeadFormProps) -> Self {
        Self {
            layout: FormLayout::from_fields(&props.fields, &props.config.terms_page),
            form: LeadForm::new(props.fields.clone()),
            phase: SubmitPhase::Idle,
            error_message: String::new(),
            form_ref: NodeRef::default(),
        }
    }
}
