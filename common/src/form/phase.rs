use crate::config::LeadConfig;

/// Inline message shown when the submission request itself failed.
pub const NETWORK_ERROR_MESSAGE: &str =
    "An error occurred while submitting the form. Please try again.";

/// How the lead API answered a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Any 2xx status.
    Accepted,
    Rejected,
}

/// Maps a response status to an outcome. The body is never inspected.
pub fn classify_status(status: u16) -> SubmitOutcome {
    if (200..300).contains(&status) {
        SubmitOutcome::Accepted
    } else {
        SubmitOutcome::Rejected
    }
}

impl SubmitOutcome {
    /// Page to navigate to once the response arrived.
    pub fn destination(self, config: &LeadConfig) -> &str {
        match self {
            SubmitOutcome::Accepted => &config.success_page,
            SubmitOutcome::Rejected => &config.error_page,
        }
    }
}

/// Lifecycle of one submit attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseEvent {
    Submit,
    Invalid,
    Valid,
    Responded(SubmitOutcome),
    NetworkFailed,
    /// The outcome has been acted on; the form is usable again.
    Settled,
}

impl SubmitPhase {
    /// Applies `event`. Events that do not apply to the current phase leave
    /// it unchanged, so a second submit while a request is in flight is a
    /// no-op.
    pub fn on(self, event: PhaseEvent) -> SubmitPhase {
        use PhaseEvent::*;
        use SubmitPhase::*;

        match (self, event) {
            (Idle, Submit) => Validating,
            (Validating, Invalid) => Idle,
            (Validating, Valid) => Submitting,
            (Submitting, Responded(SubmitOutcome::Accepted)) => Succeeded,
            (Submitting, Responded(SubmitOutcome::Rejected)) => Failed,
            (Submitting, NetworkFailed) => Failed,
            (Succeeded | Failed, Settled) => Idle,
            (current, _) => current,
        }
    }

    /// The submit control is disabled while busy.
    pub fn is_busy(self) -> bool {
        self == SubmitPhase::Submitting
    }

    pub fn button_label(self) -> &'static str {
        if self.is_busy() {
            "Submitting..."
        } else {
            "Submit"
        }
    }
}
