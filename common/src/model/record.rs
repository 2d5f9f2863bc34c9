//! Record payload returned by the record endpoint.
//!
//! The endpoint answers with an envelope `{ "data": "<json text>" }` whose
//! `data` string is itself a JSON document. Parsing is therefore two named
//! steps: [`RecordEnvelope::from_json`] for the outer body and
//! [`RecordEnvelope::decode_payload`] for the embedded document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LeadError;
use crate::model::field::FieldDescriptor;
use crate::model::image::Image;

/// Outer response body of `GET /api/record/{id}/`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordEnvelope {
    /// JSON-encoded [`RecordPayload`].
    pub data: String,
}

impl RecordEnvelope {
    /// Parses the raw response body. A non-JSON body or a missing `data`
    /// string is reported as [`LeadError::Fetch`].
    pub fn from_json(body: &str) -> Result<Self, LeadError> {
        serde_json::from_str(body).map_err(|e| LeadError::Fetch(e.to_string()))
    }

    /// Second decoding step: parses the embedded `data` document.
    pub fn decode_payload(&self) -> Result<RecordPayload, LeadError> {
        serde_json::from_str(&self.data).map_err(|e| LeadError::MalformedPayload(e.to_string()))
    }
}

/// Fully parsed description of one listing.
///
/// Every field is mandatory, so a payload missing e.g. `gallery` fails here
/// instead of half-rendering the page.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct RecordPayload {
    #[serde(rename = "headerImage")]
    pub header_image: Image,
    #[serde(rename = "companyName")]
    pub company_name: String,
    /// Label to value, kept in the order the API sent them.
    pub property_details: Map<String, Value>,
    pub gallery: Vec<Image>,
    pub fields: Vec<FieldDescriptor>,
}

/// One display row of the property detail list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDetail {
    pub label: String,
    pub value: String,
}

impl RecordPayload {
    /// Runs both decoding steps over a raw response body.
    pub fn from_envelope_json(body: &str) -> Result<Self, LeadError> {
        RecordEnvelope::from_json(body)?.decode_payload()
    }

    pub fn detail_rows(&self) -> Vec<PropertyDetail> {
        self.property_details
            .iter()
            .map(|(key, value)| PropertyDetail {
                label: humanize_label(key),
                value: display_value(value),
            })
            .collect()
    }
}

/// `living_area` -> `Living area`.
pub fn humanize_label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Text a template literal would produce for the value: `null` stays
/// `null`, arrays join their items with `,` (null items become empty) and
/// objects collapse to `[object Object]`.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INNER: &str = r#"{
        "headerImage": {"url": "https://cdn.example/header.jpg", "alt": "Front view"},
        "companyName": "Immo Nord",
        "property_details": {"price": "450 000 EUR", "living_area": 120, "garden": true, "notes": null},
        "gallery": [
            {"url": "https://cdn.example/1.jpg", "alt": "Kitchen"},
            {"url": "https://cdn.example/2.jpg", "alt": "Garden"}
        ],
        "fields": [{"name": "email", "label": "Email", "required": true}]
    }"#;

    fn envelope_body(inner: &str) -> String {
        serde_json::json!({ "data": inner }).to_string()
    }

    #[test]
    fn decodes_double_encoded_payload() {
        let payload = RecordPayload::from_envelope_json(&envelope_body(INNER)).unwrap();
        assert_eq!(payload.company_name, "Immo Nord");
        assert_eq!(payload.header_image.alt, "Front view");
        assert_eq!(payload.gallery.len(), 2);
        assert_eq!(payload.gallery[1].alt, "Garden");
        assert_eq!(payload.fields[0].name, "email");
    }

    #[test]
    fn detail_rows_keep_payload_order_and_humanize_labels() {
        let payload = RecordPayload::from_envelope_json(&envelope_body(INNER)).unwrap();
        let rows = payload.detail_rows();
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Price", "Living area", "Garden", "Notes"]);
        let values: Vec<&str> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, ["450 000 EUR", "120", "true", "null"]);
    }

    #[test]
    fn arrays_and_objects_render_like_template_literals() {
        let render = |json: &str| display_value(&serde_json::from_str(json).unwrap());
        assert_eq!(render(r#"["pool", "garage", 2]"#), "pool,garage,2");
        assert_eq!(render(r#"["a", null, ["b", "c"]]"#), "a,,b,c");
        assert_eq!(render("[]"), "");
        assert_eq!(render(r#"{"m2": 40}"#), "[object Object]");
        assert_eq!(render("1.5"), "1.5");
    }

    #[test]
    fn humanize_replaces_every_underscore() {
        assert_eq!(humanize_label("year_of_construction"), "Year of construction");
        assert_eq!(humanize_label("énergie"), "Énergie");
        assert_eq!(humanize_label(""), "");
    }

    #[test]
    fn non_json_body_is_a_fetch_error() {
        assert!(matches!(
            RecordPayload::from_envelope_json("<html>502</html>"),
            Err(LeadError::Fetch(_))
        ));
    }

    #[test]
    fn envelope_without_data_is_a_fetch_error() {
        assert!(matches!(
            RecordPayload::from_envelope_json(r#"{"detail":"Not found."}"#),
            Err(LeadError::Fetch(_))
        ));
    }

    #[test]
    fn missing_gallery_is_a_malformed_payload() {
        let inner = r#"{
            "headerImage": {"url": "h.jpg", "alt": ""},
            "companyName": "Immo Nord",
            "property_details": {},
            "fields": []
        }"#;
        let err = RecordPayload::from_envelope_json(&envelope_body(inner)).unwrap_err();
        match err {
            LeadError::MalformedPayload(reason) => assert!(reason.contains("gallery")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn data_that_is_not_json_text_is_a_malformed_payload() {
        assert!(matches!(
            RecordPayload::from_envelope_json(r#"{"data":"not json"}"#),
            Err(LeadError::MalformedPayload(_))
        ));
    }
}
