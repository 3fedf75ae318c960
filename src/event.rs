use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::ParseError;

/// One record as delivered by the streaming trigger. The `body` is the raw
/// event-hub payload, base64-encoded by the platform.
#[derive(Debug, Deserialize)]
pub struct HubRecord {
    pub body: String,
}

/// Decodes the record body into the UTF-8 JSON text it is expected to carry.
///
/// Both failure modes here (bad base64, bad UTF-8) propagate and fail the
/// invocation; neither is part of the handled missing-field case.
pub fn decode_body(record: &HubRecord) -> Result<String, ParseError> {
    let bytes = BASE64.decode(&record.body)?;
    Ok(String::from_utf8(bytes)?)
}

/// Extracts the `text` of the first tweet from a serialized tweet batch.
///
/// The batch must be a JSON array; a syntax error or a non-array top level
/// is `ParseError::Json` and propagates. An empty batch or a first element
/// without a `text` key is `ParseError::MissingField`, the one condition
/// the handler swallows. A `text` that is present but not a string is a
/// type error and propagates.
pub fn first_tweet_text(batch: &str) -> Result<String, ParseError> {
    let tweets: Vec<Value> = serde_json::from_str(batch)?;

    let first = tweets
        .first()
        .ok_or(ParseError::MissingField("tweet batch is empty"))?;
    let text = first
        .get("text")
        .ok_or(ParseError::MissingField("tweet has no \"text\" field"))?;

    match text.as_str() {
        Some(text) => Ok(text.to_string()),
        None => Err(ParseError::Type("\"text\" is not a string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(payload: &str) -> HubRecord {
        HubRecord {
            body: BASE64.encode(payload),
        }
    }

    #[test]
    fn decodes_base64_body_to_utf8_text() {
        let decoded = decode_body(&record(r#"[{"text": "hi"}]"#)).unwrap();
        assert_eq!(decoded, r#"[{"text": "hi"}]"#);
    }

    #[test]
    fn rejects_body_that_is_not_base64() {
        let bad = HubRecord {
            body: "not base64!!".to_string(),
        };
        assert!(matches!(decode_body(&bad), Err(ParseError::Decode(_))));
    }

    #[test]
    fn rejects_body_that_is_not_utf8() {
        let bad = HubRecord {
            body: BASE64.encode([0xff, 0xfe, 0xfd]),
        };
        assert!(matches!(decode_body(&bad), Err(ParseError::Utf8(_))));
    }

    #[test]
    fn extracts_text_of_first_tweet() {
        let text = first_tweet_text(r#"[{"text": "hello world"}, {"text": "second"}]"#).unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn empty_batch_is_the_handled_missing_field_case() {
        let err = first_tweet_text("[]").unwrap_err();
        assert!(err.is_handled());
    }

    #[test]
    fn tweet_without_text_key_is_the_handled_missing_field_case() {
        let err = first_tweet_text(r#"[{"not_text": "x"}]"#).unwrap_err();
        assert!(err.is_handled());
    }

    #[test]
    fn json_syntax_error_propagates() {
        let err = first_tweet_text(r#"[{"text": "#).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
        assert!(!err.is_handled());
    }

    #[test]
    fn non_array_top_level_propagates() {
        let err = first_tweet_text(r#"{"text": "hi"}"#).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn non_string_text_propagates() {
        let err = first_tweet_text(r#"[{"text": 42}]"#).unwrap_err();
        assert!(matches!(err, ParseError::Type(_)));
        assert!(!err.is_handled());
    }
}
