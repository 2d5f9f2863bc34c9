//! Record identifier carried in the `expose` query parameter.
//!
//! The parameter holds the identifier as base64 text. Decoding mirrors the
//! browser's `atob`: ASCII whitespace is ignored, padding is optional and
//! every decoded byte becomes one Latin-1 character.

use std::fmt;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use crate::error::LeadError;

/// Name of the query parameter holding the encoded identifier.
pub const EXPOSE_PARAM: &str = "expose";

const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Opaque key naming one listing on the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Resolves the identifier from the raw `expose` value, if any.
    ///
    /// An empty value is treated like a missing one.
    pub fn from_expose(expose: Option<&str>) -> Result<Self, LeadError> {
        match expose {
            Some(raw) if !raw.is_empty() => Self::decode(raw),
            _ => Err(LeadError::MissingParameter),
        }
    }

    /// Decodes base64 text into an identifier.
    pub fn decode(encoded: &str) -> Result<Self, LeadError> {
        let compact: String = encoded
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let unpadded = strip_padding(&compact)?;
        let bytes = FORGIVING
            .decode(unpadded.as_bytes())
            .map_err(|e| LeadError::MalformedIdentifier(e.to_string()))?;
        Ok(Self(bytes.into_iter().map(char::from).collect()))
    }

    /// Encodes the identifier back into `expose` form.
    ///
    /// Fails for characters outside Latin-1, which `decode` never produces.
    pub fn encode(&self) -> Result<String, LeadError> {
        let bytes = self
            .0
            .chars()
            .map(|c| u8::try_from(u32::from(c)))
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|_| {
                LeadError::MalformedIdentifier(format!("{:?} is not Latin-1 text", self.0))
            })?;
        Ok(FORGIVING.encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Padding is only accepted on a full quantum: up to two trailing `=` when
/// the length is a multiple of 4. What remains must be unpadded and must not
/// leave a single dangling character.
fn strip_padding(compact: &str) -> Result<&str, LeadError> {
    let unpadded = if compact.len() % 4 == 0 {
        compact
            .strip_suffix("==")
            .or_else(|| compact.strip_suffix('='))
            .unwrap_or(compact)
    } else {
        compact
    };
    if unpadded.contains('=') {
        return Err(LeadError::MalformedIdentifier(format!(
            "misplaced padding in {compact:?}"
        )));
    }
    if unpadded.len() % 4 == 1 {
        return Err(LeadError::MalformedIdentifier(format!(
            "invalid length {} for {compact:?}",
            unpadded.len()
        )));
    }
    Ok(unpadded)
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_padded_and_unpadded_values() {
        assert_eq!(RecordId::decode("NDI=").unwrap().as_str(), "42");
        assert_eq!(RecordId::decode("NDI").unwrap().as_str(), "42");
        assert_eq!(RecordId::decode("NA==").unwrap().as_str(), "4");
        assert_eq!(RecordId::decode("NA").unwrap().as_str(), "4");
        assert_eq!(RecordId::decode("cmVjLTEyMw==").unwrap().as_str(), "rec-123");
    }

    #[test]
    fn ignores_ascii_whitespace() {
        assert_eq!(RecordId::decode(" cmVj\nLTEy Mw== ").unwrap().as_str(), "rec-123");
    }

    #[test]
    fn missing_or_empty_parameter_is_rejected() {
        assert_eq!(RecordId::from_expose(None), Err(LeadError::MissingParameter));
        assert_eq!(RecordId::from_expose(Some("")), Err(LeadError::MissingParameter));
    }

    #[test]
    fn undecodable_values_are_malformed() {
        for raw in ["%%%", "abcde", "NDI=NDI=", "NA=", "NDI==", "N", "=NDI", "NA==="] {
            assert!(
                matches!(
                    RecordId::from_expose(Some(raw)),
                    Err(LeadError::MalformedIdentifier(_))
                ),
                "{raw} should not decode"
            );
        }
    }

    #[test]
    fn high_bytes_become_latin1_chars() {
        let id = RecordId::decode("6Q==").unwrap();
        assert_eq!(id.as_str(), "\u{e9}");
        assert_eq!(id.encode().unwrap(), "6Q==");
    }

    #[test]
    fn encode_inverts_decode() {
        let id = RecordId::decode("cmVjLTEyMw").unwrap();
        assert_eq!(id.encode().unwrap(), "cmVjLTEyMw==");
    }
}
