use crate::model::field::FieldDescriptor;

/// Element id of the terms-acceptance checkbox.
pub const TERMS_CONTROL_ID: &str = "terms";

/// One generated control of the lead form, in render order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormControl {
    /// A labeled input derived from a field descriptor.
    Field(FieldDescriptor),
    /// Always-required terms checkbox linking to the terms page.
    Terms { href: String },
    Submit,
}

/// The complete control list of the form: one control per descriptor in
/// payload order, then the terms checkbox, then the submit button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormLayout {
    controls: Vec<FormControl>,
}

impl FormLayout {
    pub fn from_fields(fields: &[FieldDescriptor], terms_page: &str) -> Self {
        let controls = fields
            .iter()
            .cloned()
            .map(FormControl::Field)
            .chain([
                FormControl::Terms {
                    href: terms_page.to_string(),
                },
                FormControl::Submit,
            ])
            .collect();
        Self { controls }
    }

    pub fn controls(&self) -> &[FormControl] {
        &self.controls
    }

    /// Descriptor-backed controls only.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.controls.iter().filter_map(|control| match control {
            FormControl::Field(field) => Some(field),
            _ => None,
        })
    }
}
