/// Wraps the real system clipboard (`arboard`), falling back to an
/// in-process string when no system clipboard is reachable (e.g. a
/// headless CI run with no display server) so yank/paste still work
/// within a single session.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    fallback: Option<String>,
}

impl SystemClipboard {
    pub fn new() -> SystemClipboard {
        SystemClipboard {
            inner: arboard::Clipboard::new().ok(),
            fallback: None,
        }
    }

    pub fn get(&mut self) -> Option<String> {
        if let Some(clipboard) = self.inner.as_mut() {
            if let Ok(text) = clipboard.get_text() {
                return Some(text);
            }
        }
        self.fallback.clone()
    }

    pub fn set(&mut self, text: String) {
        if let Some(clipboard) = self.inner.as_mut() {
            let _ = clipboard.set_text(text.clone());
        }
        self.fallback = Some(text);
    }
}

impl Default for SystemClipboard {
    fn default() -> SystemClipboard {
        SystemClipboard::new()
    }
}
