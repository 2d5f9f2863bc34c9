//! Update function for the lead form component.
//!
//! Submission runs in order: re-resolve the identifier from the URL (abort
//! with a redirect to the error page if it no longer decodes), native
//! constraint validation, programmatic required-field validation, then a
//! single `POST` of the assembled payload. A 2xx answer navigates to the
//! success page, any other status to the error page. A transport failure
//! keeps the user on the page with an inline message.

use gloo_console::error;
use gloo_net::http::Request;
use lead_common::error::LeadError;
use lead_common::form::{
    classify_status, decide_submit, PhaseEvent, SubmitDecision, SubmitOutcome,
    NETWORK_ERROR_MESSAGE,
};
use lead_common::requests::SubmissionPayload;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use crate::browser::{current_record_id, navigate_to};

use super::messages::Msg;
use super::state::LeadFormComponent;

/// Central update function for the component.
///
/// Returns `true` to re-render the view, `false` when only side effects occur.
pub fn update(component: &mut LeadFormComponent, ctx: &Context<LeadFormComponent>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateField { name, value } => {
            component.form.set_value(&name, value);
            true
        }
        Msg::Submit => {
            let config = &ctx.props().config;
            let form_ref = component.form_ref.clone();
            let (phase, decision) = decide_submit(
                component.phase,
                current_record_id(),
                || {
                    form_ref
                        .cast::<HtmlFormElement>()
                        .map_or(true, |form| form.check_validity())
                },
                &mut component.form,
            );
            component.phase = phase;

            match decision {
                SubmitDecision::Abort(err) => {
                    error!(format!("submission aborted: {}", err));
                    navigate_to(&config.error_page);
                    false
                }
                SubmitDecision::Ignore => false,
                SubmitDecision::ReportNative => {
                    if let Some(form) = component.form_ref.cast::<HtmlFormElement>() {
                        form.report_validity();
                    }
                    false
                }
                SubmitDecision::ShowMessage(message) => {
                    component.error_message = message;
                    true
                }
                SubmitDecision::Post(payload) => {
                    component.error_message.clear();
                    post_submission(ctx, config.submit_url(), payload);
                    true
                }
            }
        }
        Msg::SubmitFinished(Ok(status)) => {
            let outcome = classify_status(status);
            component.phase = component.phase.on(PhaseEvent::Responded(outcome));
            if outcome == SubmitOutcome::Rejected {
                error!(format!("lead submission rejected with status {}", status));
            }
            navigate_to(outcome.destination(&ctx.props().config));
            component.phase = component.phase.on(PhaseEvent::Settled);
            true
        }
        Msg::SubmitFinished(Err(err)) => {
            error!(format!("Error: {}", err));
            component.phase = component.phase.on(PhaseEvent::NetworkFailed);
            component.error_message = NETWORK_ERROR_MESSAGE.to_string();
            component.phase = component.phase.on(PhaseEvent::Settled);
            true
        }
    }
}

/// Fires the `POST` and reports the status (or transport failure) back as
/// `Msg::SubmitFinished`. No retry, no timeout.
fn post_submission(ctx: &Context<LeadFormComponent>, url: String, payload: SubmissionPayload) {
    let link = ctx.link().clone();
    wasm_bindgen_futures::spawn_local(async move {
        let result = match Request::post(&url).json(&payload) {
            Ok(request) => request
                .send()
                .await
                .map(|response| response.status())
                .map_err(|e| LeadError::Submit(e.to_string())),
            Err(e) => Err(LeadError::Submit(e.to_string())),
        };
        link.send_message(Msg::SubmitFinished(result));
    });
}
