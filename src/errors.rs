use thiserror::Error;

/// Failure modes of the parse pipeline, from raw event bytes to extracted
/// tweet text.
///
/// Only `MissingField` is handled by the Lambda: it is logged and the
/// invocation returns no output. Every other variant propagates and fails
/// the invocation, leaving retries to the platform.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to decode event body: {0}")]
    Decode(String),

    #[error("Event body is not valid UTF-8: {0}")]
    Utf8(String),

    #[error("Failed to parse tweet batch JSON: {0}")]
    Json(String),

    #[error("Tweet field has unexpected type: {0}")]
    Type(&'static str),

    #[error("Missing expected field: {0}")]
    MissingField(&'static str),
}

impl ParseError {
    /// True for the single error kind the handler swallows (logged, no
    /// output) rather than failing the invocation.
    #[must_use]
    pub fn is_handled(&self) -> bool {
        matches!(self, ParseError::MissingField(_))
    }
}

impl From<base64::DecodeError> for ParseError {
    fn from(error: base64::DecodeError) -> Self {
        ParseError::Decode(error.to_string())
    }
}

impl From<std::string::FromUtf8Error> for ParseError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        ParseError::Utf8(error.to_string())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(error: serde_json::Error) -> Self {
        ParseError::Json(error.to_string())
    }
}
