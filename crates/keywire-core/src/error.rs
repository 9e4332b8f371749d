//! Shared error type across keywire crates.

use thiserror::Error;

/// Stable machine-readable decode-failure codes.
///
/// The envelope layer treats a decode failure as "this event is malformed or
/// unsupported" and logs one of these codes when it skips the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A required field is absent.
    FieldMissing,
    /// A field is present but holds the wrong JSON kind.
    MalformedValue,
}

impl ErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::FieldMissing => "FIELD_MISSING",
            ErrorCode::MalformedValue => "MALFORMED_VALUE",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, KeywireError>;

/// Unified error type for payload decoding.
///
/// No partial value is ever returned alongside an error; a decode either
/// yields a complete entity or one of these.
#[derive(Debug, Error)]
pub enum KeywireError {
    #[error("missing required field `{0}`")]
    FieldMissing(&'static str),
    #[error("malformed field `{field}`: expected {expected}")]
    MalformedValue {
        field: &'static str,
        expected: &'static str,
    },
}

impl KeywireError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            KeywireError::FieldMissing(_) => ErrorCode::FieldMissing,
            KeywireError::MalformedValue { .. } => ErrorCode::MalformedValue,
        }
    }
}
