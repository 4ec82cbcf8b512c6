//! Response bodies and their text decoding

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base64 engine that accepts bodies with or without trailing padding.
///
/// Capture tools are inconsistent about padding, so both forms decode.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Transfer encoding applied to a captured body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyEncoding {
    /// Body text is stored as-is
    #[default]
    Identity,
    /// Body bytes are stored base64-encoded
    Base64,
}

impl BodyEncoding {
    /// Parse the capture format's encoding tag; anything but `base64` is identity
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(t) if t.eq_ignore_ascii_case("base64") => BodyEncoding::Base64,
            _ => BodyEncoding::Identity,
        }
    }
}

/// A body could not be turned into text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The body claimed base64 but did not decode
    #[error("invalid base64 body: {0}")]
    InvalidBase64(String),
}

/// Decode a raw captured body into text.
///
/// Identity bodies are returned unchanged. Base64 bodies are decoded and read as
/// UTF-8; bytes that are not valid UTF-8 fall back to a lossless single-byte
/// (Latin-1) reading so one odd body never fails a whole load.
pub fn decode_text(raw: &str, encoding: BodyEncoding) -> Result<String, DecodeError> {
    match encoding {
        BodyEncoding::Identity => Ok(raw.to_string()),
        BodyEncoding::Base64 => {
            let compact: String = raw.chars().filter(|c| !c.is_ascii_whitespace()).collect();
            let bytes = LENIENT_BASE64
                .decode(compact.as_bytes())
                .map_err(|e| DecodeError::InvalidBase64(e.to_string()))?;
            Ok(match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
            })
        }
    }
}

/// A response body with its decoded text computed once at construction
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseBody {
    mime_type: Option<String>,
    text: Option<String>,
    decode_error: Option<DecodeError>,
}

impl ResponseBody {
    /// Build a body and decode it.
    ///
    /// A decode failure leaves the body without text; the error stays available
    /// through [`ResponseBody::decode_error`] for the loader to report.
    pub fn new(raw: Option<String>, encoding: BodyEncoding, mime_type: Option<String>) -> Self {
        let (text, decode_error) = match raw.as_deref() {
            None => (None, None),
            Some(r) => match decode_text(r, encoding) {
                Ok(t) => (Some(t), None),
                Err(e) => (None, Some(e)),
            },
        };
        Self {
            mime_type,
            text,
            decode_error,
        }
    }

    /// An identity-encoded body, mostly useful for building corpora in tests
    pub fn from_text(text: impl Into<String>, mime_type: Option<&str>) -> Self {
        Self::new(
            Some(text.into()),
            BodyEncoding::Identity,
            mime_type.map(str::to_string),
        )
    }

    /// Decoded body text; `None` when absent, empty or undecodable
    pub fn decoded(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// Declared MIME type, if any
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    /// Decode failure recorded at construction
    pub fn decode_error(&self) -> Option<&DecodeError> {
        self.decode_error.as_ref()
    }

    /// Whether the decoded text contains `needle` (exact, case-sensitive)
    pub fn contains(&self, needle: &str) -> bool {
        self.decoded().is_some_and(|t| t.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;

    #[test]
    fn test_identity_is_unchanged() {
        assert_eq!(
            decode_text("{\"a\": 1}", BodyEncoding::Identity).unwrap(),
            "{\"a\": 1}"
        );
    }

    #[test]
    fn test_base64_utf8() {
        let encoded = STANDARD.encode("héllo");
        assert_eq!(decode_text(&encoded, BodyEncoding::Base64).unwrap(), "héllo");
    }

    #[test]
    fn test_base64_without_padding() {
        assert_eq!(decode_text("aGk", BodyEncoding::Base64).unwrap(), "hi");
    }

    #[test]
    fn test_base64_with_line_breaks() {
        assert_eq!(
            decode_text("aGVs\nbG8=", BodyEncoding::Base64).unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_base64_latin1_fallback() {
        let encoded = STANDARD.encode([0x66, 0xff, 0x6f]);
        assert_eq!(decode_text(&encoded, BodyEncoding::Base64).unwrap(), "f\u{ff}o");
    }

    #[test]
    fn test_invalid_base64_yields_no_body() {
        let body = ResponseBody::new(Some("***".to_string()), BodyEncoding::Base64, None);
        assert!(body.decoded().is_none());
        assert!(matches!(
            body.decode_error(),
            Some(DecodeError::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_decoding_is_idempotent() {
        let encoded = STANDARD.encode("token=abc");
        let body = ResponseBody::new(Some(encoded), BodyEncoding::Base64, None);
        assert_eq!(body.decoded(), body.decoded());
        assert_eq!(body.decoded(), Some("token=abc"));
    }

    #[test]
    fn test_encoding_tag() {
        assert_eq!(BodyEncoding::from_tag(Some("base64")), BodyEncoding::Base64);
        assert_eq!(BodyEncoding::from_tag(Some("BASE64")), BodyEncoding::Base64);
        assert_eq!(BodyEncoding::from_tag(None), BodyEncoding::Identity);
        assert_eq!(BodyEncoding::from_tag(Some("gzip")), BodyEncoding::Identity);
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        let body = ResponseBody::from_text("Token=ABC", None);
        assert!(body.contains("ABC"));
        assert!(!body.contains("abc"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use proptest::prelude::*;

    proptest! {
        /// Property: decoding a base64 body then re-encoding yields the original bytes
        #[test]
        fn test_base64_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let encoded = STANDARD.encode(&bytes);
            let text = decode_text(&encoded, BodyEncoding::Base64).unwrap();
            let back: Vec<u8> = if std::str::from_utf8(&bytes).is_ok() {
                text.into_bytes()
            } else {
                text.chars().map(|c| c as u32 as u8).collect()
            };
            prop_assert_eq!(back, bytes);
        }

        /// Property: identity decoding is the identity transform
        #[test]
        fn test_identity_round_trip(s in "\\PC{0,128}") {
            prop_assert_eq!(decode_text(&s, BodyEncoding::Identity).unwrap(), s);
        }
    }
}
