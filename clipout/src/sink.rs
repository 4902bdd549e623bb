//! Text sink over the OS clipboard.
//!
//! The handle is acquired on first use and kept for the session. On some
//! platforms (X11 in particular) dropping the handle drops the selection, so
//! the sink owns it for as long as the caller keeps the sink alive.

use crate::error::{ClipError, ClipResult};
use tracing::debug;

/// Write-only system clipboard handle.
#[derive(Default)]
pub struct TextSink {
    inner: Option<arboard::Clipboard>,
}

impl TextSink {
    pub fn new() -> Self {
        Self { inner: None }
    }

    /// Write a text blob to the system clipboard, replacing its contents.
    pub fn write_text(&mut self, text: &str) -> ClipResult<()> {
        if text.is_empty() {
            return Err(ClipError::EmptyPayload);
        }

        let clipboard: &mut arboard::Clipboard = self.ensure()?;
        clipboard.set_text(text.to_owned())?;

        debug!("wrote {} bytes to clipboard", text.len());
        Ok(())
    }

    fn ensure(&mut self) -> ClipResult<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }

        // Just populated above; the only early return is the error path.
        match self.inner.as_mut() {
            Some(clipboard) => Ok(clipboard),
            None => Err(ClipError::Unavailable("clipboard handle lost".into())),
        }
    }
}

impl std::fmt::Debug for TextSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextSink")
            .field("acquired", &self.inner.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_is_rejected_without_touching_clipboard() {
        let mut sink = TextSink::new();
        assert!(matches!(sink.write_text(""), Err(ClipError::EmptyPayload)));
    }

    #[test]
    fn arboard_errors_map_to_clip_errors() {
        let err: ClipError = arboard::Error::ClipboardNotSupported.into();
        assert!(matches!(err, ClipError::Unavailable(_)));
        assert!(err.is_recoverable());
    }
}
