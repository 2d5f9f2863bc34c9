use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::identifier::RecordId;
use crate::model::field::FieldDescriptor;
use crate::requests::SubmissionPayload;

/// Inline message shown when a required field is blank.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Programmatic validation rejected the form. Recoverable: the user fixes
/// the listed fields and submits again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all required fields.")]
pub struct ValidationError {
    /// Names of required fields that were blank after trimming.
    pub missing: Vec<String>,
}

/// Values typed into the generated inputs plus the fields currently
/// flagged invalid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    fields: Vec<FieldDescriptor>,
    values: HashMap<String, String>,
    invalid: HashSet<String>,
}

impl LeadForm {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn set_value(&mut self, name: &str, value: String) {
        self.values.insert(name.to_string(), value);
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn is_invalid(&self, name: &str) -> bool {
        self.invalid.contains(name)
    }

    /// Checks every field, re-flagging the blank required ones, and builds
    /// the submission payload tagged with `id` when nothing is missing.
    pub fn validate(&mut self, id: &RecordId) -> Result<SubmissionPayload, ValidationError> {
        let mut payload = SubmissionPayload::new(id.clone());
        let mut missing = Vec::new();

        for field in &self.fields {
            let value = self.values.get(&field.name).map(String::as_str).unwrap_or("");
            if field.required && value.trim().is_empty() {
                self.invalid.insert(field.name.clone());
                missing.push(field.name.clone());
            } else {
                self.invalid.remove(&field.name);
                payload.insert(&field.name, value);
            }
        }

        if missing.is_empty() {
            Ok(payload)
        } else {
            Err(ValidationError { missing })
        }
    }
}
