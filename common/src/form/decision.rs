use crate::error::LeadError;
use crate::identifier::RecordId;
use crate::requests::SubmissionPayload;

use super::lead_form::LeadForm;
use super::phase::{PhaseEvent, SubmitPhase};

/// What the form should do in response to a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// The identifier no longer resolves: leave for the error page, send
    /// nothing.
    Abort(LeadError),
    /// A request is already in flight.
    Ignore,
    /// Native constraint validation failed; surface the browser's UI.
    ReportNative,
    /// Programmatic validation failed; show the message inline.
    ShowMessage(String),
    /// Send exactly this payload.
    Post(SubmissionPayload),
}

/// Runs the submit checks in order: identifier, in-flight guard, native
/// validation, required fields. `natively_valid` is only consulted once the
/// first two checks passed.
pub fn decide_submit(
    phase: SubmitPhase,
    record_id: Result<RecordId, LeadError>,
    natively_valid: impl FnOnce() -> bool,
    form: &mut LeadForm,
) -> (SubmitPhase, SubmitDecision) {
    let record_id = match record_id {
        Ok(id) => id,
        Err(err) => return (phase, SubmitDecision::Abort(err)),
    };

    let validating = phase.on(PhaseEvent::Submit);
    if validating == phase {
        return (phase, SubmitDecision::Ignore);
    }

    if !natively_valid() {
        return (validating.on(PhaseEvent::Invalid), SubmitDecision::ReportNative);
    }

    match form.validate(&record_id) {
        Err(err) => (
            validating.on(PhaseEvent::Invalid),
            SubmitDecision::ShowMessage(err.to_string()),
        ),
        Ok(payload) => (validating.on(PhaseEvent::Valid), SubmitDecision::Post(payload)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::REQUIRED_FIELDS_MESSAGE;
    use crate::model::field::FieldDescriptor;

    fn email_form() -> LeadForm {
        LeadForm::new(vec![FieldDescriptor {
            name: "email".to_string(),
            label: "Email".to_string(),
            required: true,
        }])
    }

    fn id() -> Result<RecordId, LeadError> {
        RecordId::from_expose(Some("cmVjLTEyMw=="))
    }

    #[test]
    fn undecodable_identifier_aborts_before_any_validation() {
        let mut form = email_form();
        let (phase, decision) = decide_submit(
            SubmitPhase::Idle,
            RecordId::from_expose(Some("NA=")),
            || panic!("native validation must not run"),
            &mut form,
        );
        assert_eq!(phase, SubmitPhase::Idle);
        assert!(matches!(decision, SubmitDecision::Abort(LeadError::MalformedIdentifier(_))));
        assert!(!form.is_invalid("email"));
    }

    #[test]
    fn in_flight_submission_is_ignored() {
        let mut form = email_form();
        form.set_value("email", "ada@example.com".to_string());
        let (phase, decision) = decide_submit(
            SubmitPhase::Submitting,
            id(),
            || panic!("native validation must not run"),
            &mut form,
        );
        assert_eq!(phase, SubmitPhase::Submitting);
        assert_eq!(decision, SubmitDecision::Ignore);
    }

    #[test]
    fn native_failure_reports_and_returns_to_idle() {
        let mut form = email_form();
        form.set_value("email", "ada@example.com".to_string());
        let (phase, decision) = decide_submit(SubmitPhase::Idle, id(), || false, &mut form);
        assert_eq!(phase, SubmitPhase::Idle);
        assert_eq!(decision, SubmitDecision::ReportNative);
    }

    #[test]
    fn blank_required_field_never_posts() {
        let mut form = email_form();
        let (phase, decision) = decide_submit(SubmitPhase::Idle, id(), || true, &mut form);
        assert_eq!(phase, SubmitPhase::Idle);
        assert_eq!(
            decision,
            SubmitDecision::ShowMessage(REQUIRED_FIELDS_MESSAGE.to_string())
        );
        assert!(form.is_invalid("email"));
    }

    #[test]
    fn complete_form_posts_one_payload_with_identifier() {
        let mut form = email_form();
        form.set_value("email", " ada@example.com ".to_string());
        let (phase, decision) = decide_submit(SubmitPhase::Idle, id(), || true, &mut form);
        assert_eq!(phase, SubmitPhase::Submitting);
        match decision {
            SubmitDecision::Post(payload) => {
                assert_eq!(payload.id().as_str(), "rec-123");
                assert_eq!(payload.get("email"), Some("ada@example.com"));
                assert_eq!(payload.field_names().collect::<Vec<_>>(), ["email"]);
            }
            other => panic!("expected a post, got {other:?}"),
        }

        let (_, again) = decide_submit(phase, id(), || true, &mut form);
        assert_eq!(again, SubmitDecision::Ignore);
    }
}
