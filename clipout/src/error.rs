//! Error types for clipboard writes

use compact_str::CompactString;
use thiserror::Error;

pub type ClipResult<T> = Result<T, ClipError>;

/// Failure modes for the write-only clipboard sink.
#[derive(Error, Debug, Clone)]
pub enum ClipError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(CompactString),

    #[error("Clipboard write failed: {0}")]
    WriteFailed(CompactString),

    #[error("Refusing to write empty text to clipboard")]
    EmptyPayload,
}

impl ClipError {
    /// Writes can always be retried by the user; nothing here is fatal.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        true
    }
}

impl From<arboard::Error> for ClipError {
    fn from(err: arboard::Error) -> Self {
        match err {
            arboard::Error::ClipboardNotSupported => {
                ClipError::Unavailable(CompactString::from(err.to_string()))
            }
            other => ClipError::WriteFailed(CompactString::from(other.to_string())),
        }
    }
}
