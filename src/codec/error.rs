use thiserror::Error;

// ── Error type ───────────────────────────────────────────────────────────────

/// Root error for every codec operation.
///
/// Callers that only care whether a call failed can match on `CodecError`;
/// callers that need the reason match the variant (or use the `is_*` helpers).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The input does not have the expected shape, e.g. decode text that is
    /// not UTF-8.
    #[error("Type error: expected {expected}")]
    TypeMismatch { expected: &'static str },
    /// Well-typed input that the codec refuses.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CodecError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CodecError::Validation(_))
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, CodecError::TypeMismatch { .. })
    }

    /// The validation reason, if this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            CodecError::Validation(v) => Some(v),
            CodecError::TypeMismatch { .. } => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Input must not be empty")]
    Empty,
    /// `len` is in bytes for encode and in characters for decode.
    #[error("Input length {len} exceeds maximum of {max}")]
    TooLong { len: usize, max: usize },
    /// First out-of-alphabet character; `position` is a character index.
    #[error("Invalid base-58 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}
