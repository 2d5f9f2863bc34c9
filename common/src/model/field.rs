use serde::{Deserialize, Serialize};

/// Rows given to the textarea generated for a `message` field.
pub const TEXTAREA_ROWS: u32 = 4;

/// Server-specified definition of one lead-capture input.
///
/// The record payload carries a list of these under `fields`; the form is
/// generated from them in payload order.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Input name, also used as the element id and as the key of the
    /// submitted value.
    pub name: String,
    /// Human readable label shown above the input.
    pub label: String,
    /// Whether a blank value blocks submission.
    #[serde(default)]
    pub required: bool,
}

/// Which element is generated for a field descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    TextArea,
    Email,
    Text,
}

impl InputKind {
    /// The `type` attribute for `<input>` kinds, `None` for the textarea.
    pub fn html_type(self) -> Option<&'static str> {
        match self {
            InputKind::TextArea => None,
            InputKind::Email => Some("email"),
            InputKind::Text => Some("text"),
        }
    }
}

impl FieldDescriptor {
    pub fn input_kind(&self) -> InputKind {
        match self.name.as_str() {
            "message" => InputKind::TextArea,
            "email" => InputKind::Email,
            _ => InputKind::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            label: name.to_uppercase(),
            required: false,
        }
    }

    #[test]
    fn input_kind_follows_field_name() {
        assert_eq!(field("message").input_kind(), InputKind::TextArea);
        assert_eq!(field("email").input_kind(), InputKind::Email);
        assert_eq!(field("phone").input_kind(), InputKind::Text);
        assert_eq!(field("Email").input_kind(), InputKind::Text);
    }

    #[test]
    fn required_defaults_to_false() {
        let parsed: FieldDescriptor =
            serde_json::from_str(r#"{"name":"phone","label":"Phone"}"#).unwrap();
        assert!(!parsed.required);
    }
}
