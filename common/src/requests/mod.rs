use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::identifier::RecordId;

/// Key under which the record identifier travels in a submission.
pub const RECORD_ID_KEY: &str = "id";

/// Request body for `POST /api/submit-web-to-lead/`.
///
/// Serializes as one flat JSON object: every collected field name mapped to
/// its trimmed value, followed by the record identifier under `id`. A form
/// field that is itself named `id` is shadowed by the identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionPayload {
    id: RecordId,
    fields: Vec<(String, String)>,
}

impl SubmissionPayload {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            fields: Vec::new(),
        }
    }

    /// Records a field value, replacing an earlier value of the same name
    /// in place.
    pub fn insert(&mut self, name: &str, value: &str) {
        if name == RECORD_ID_KEY {
            return;
        }
        let value = value.trim().to_string();
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        if name == RECORD_ID_KEY {
            return Some(self.id.as_str());
        }
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Collected field names in form order, without `id`.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }
}

impl Serialize for SubmissionPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.serialize_entry(RECORD_ID_KEY, self.id.as_str())?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> RecordId {
        RecordId::decode("cmVjLTEyMw==").unwrap()
    }

    #[test]
    fn serializes_fields_then_identifier() {
        let mut payload = SubmissionPayload::new(id());
        payload.insert("name", "  Ada ");
        payload.insert("email", "ada@example.com");
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"name":"Ada","email":"ada@example.com","id":"rec-123"}"#
        );
    }

    #[test]
    fn identifier_shadows_a_field_named_id() {
        let mut payload = SubmissionPayload::new(id());
        payload.insert("id", "forged");
        assert_eq!(payload.get("id"), Some("rec-123"));
        assert_eq!(payload.field_names().count(), 0);
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"id":"rec-123"}"#);
    }

    #[test]
    fn repeated_names_keep_first_position_and_last_value() {
        let mut payload = SubmissionPayload::new(id());
        payload.insert("phone", "1");
        payload.insert("email", "a@b.c");
        payload.insert("phone", "2");
        let names: Vec<&str> = payload.field_names().collect();
        assert_eq!(names, ["phone", "email"]);
        assert_eq!(payload.get("phone"), Some("2"));
    }
}
