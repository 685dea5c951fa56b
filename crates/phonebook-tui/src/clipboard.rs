use anyhow::{Context as _, Result};

/// Write access to the system clipboard.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Clipboard backed by `arboard`. The handle is opened on first use and kept
/// for the lifetime of the app, since some platforms drop the selection when
/// the owning handle goes away.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().context("open system clipboard")?;
            self.inner = Some(clipboard);
        }
        if let Some(clipboard) = self.inner.as_mut() {
            clipboard
                .set_text(text.to_string())
                .context("write system clipboard")?;
        }
        Ok(())
    }
}
