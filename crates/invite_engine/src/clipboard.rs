use std::fmt::Display;
use std::sync::Mutex;

use crate::SinkError;

/// Destination for copied message text.
pub trait ClipboardSink: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), SinkError>;
}

/// System clipboard backed by `arboard`.
///
/// The handle is opened on first write and kept for the life of the sink. On X11 and
/// Wayland the copied text is served by that handle, so it must outlive the write.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), SinkError> {
        with_held(&self.handle, arboard::Clipboard::new, |clipboard| {
            clipboard.set_text(text.to_owned())
        })
    }
}

/// Runs `write` against the handle in `slot`, opening it first if needed.
///
/// A failed write drops the handle so the next call reopens it.
fn with_held<C, E: Display>(
    slot: &Mutex<Option<C>>,
    open: impl FnOnce() -> Result<C, E>,
    write: impl FnOnce(&mut C) -> Result<(), E>,
) -> Result<(), SinkError> {
    let mut slot = slot
        .lock()
        .map_err(|_| SinkError::Clipboard("clipboard handle lock poisoned".to_string()))?;
    let mut handle = match slot.take() {
        Some(handle) => handle,
        None => open().map_err(|e| SinkError::Clipboard(e.to_string()))?,
    };
    write(&mut handle).map_err(|e| SinkError::Clipboard(e.to_string()))?;
    *slot = Some(handle);
    Ok(())
}
