use lead_common::error::LeadError;

pub enum Msg {
    UpdateField { name: String, value: String },
    Submit,
    /// Status code of the submission response, or the transport failure.
    SubmitFinished(Result<u16, LeadError>),
}
