use invite_core::CopyTarget;
use thiserror::Error;

/// Failure reported by an external sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("share failed: {0}")]
    Share(String),
    #[error("could not open link: {0}")]
    Open(String),
    #[error("qr rendering failed: {0}")]
    Qr(String),
}

/// Error surfaced by a native share capability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("share dismissed by user")]
    Cancelled,
    #[error("{0}")]
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// User closed the share sheet; not an error.
    Dismissed,
    /// No native share capability; the text went to the clipboard.
    CopiedInstead,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ClipboardWritten { target: Option<CopyTarget> },
    ShareFinished(ShareOutcome),
    LinkOpened { url: String },
    CopyResetDue { ticket: u64 },
    Failed(SinkError),
}
