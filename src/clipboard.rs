//! Clipboard access
//!
//! [`SystemClipboard`] talks to the OS clipboard through `arboard`;
//! [`MemoryClipboard`] keeps text in process for headless use and tests.

use anyhow::{anyhow, Result};

pub trait Clipboard {
    /// Current clipboard text, `None` when the clipboard holds no text
    fn get_text(&mut self) -> Result<Option<String>>;

    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The operating system clipboard
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner =
            arboard::Clipboard::new().map_err(|e| anyhow!("Clipboard unavailable: {}", e))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Result<Option<String>> {
        match self.inner.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(anyhow!("Failed to read clipboard: {}", e)),
        }
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text)
            .map_err(|e| anyhow!("Failed to write clipboard: {}", e))
    }
}

/// In-process clipboard
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Result<Option<String>> {
        Ok(self.text.clone())
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.text = Some(text.to_string());
        Ok(())
    }
}
