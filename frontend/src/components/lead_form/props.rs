use lead_common::config::LeadConfig;
use lead_common::model::field::FieldDescriptor;
use yew::prelude::*;

/// Properties for the `LeadFormComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct LeadFormProps {
    /// Descriptors from the record payload, rendered in order.
    pub fields: Vec<FieldDescriptor>,
    /// Submit endpoint, terms link and result pages.
    pub config: LeadConfig,
}
