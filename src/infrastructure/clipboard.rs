//! System clipboard access.
//!
//! The session driver only sees the [`Clipboard`] trait. [`SystemClipboard`]
//! opens the platform clipboard through `arboard` on first use, so a session
//! that never copies never touches the display server.

use crate::domain::{KbaseError, Result};

/// Write access to a clipboard.
pub trait Clipboard {
    /// Replaces the clipboard contents with `contents`.
    ///
    /// # Errors
    ///
    /// Returns [`KbaseError::Clipboard`] if the clipboard is unavailable or
    /// rejects the write.
    fn set(&mut self, contents: &str) -> Result<()>;
}

/// Platform clipboard using arboard, opened lazily.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Creates a handle without opening the clipboard yet.
    #[must_use]
    pub fn new() -> Self {
        Self { inner: None }
    }

    fn ensure(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| KbaseError::Clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| KbaseError::Clipboard("clipboard unavailable".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn set(&mut self, contents: &str) -> Result<()> {
        let clipboard = self.ensure()?;
        clipboard
            .set_text(contents.to_owned())
            .map_err(|e| KbaseError::Clipboard(e.to_string()))
    }
}
