use std::time::Duration;

use crate::CopyTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write text to the clipboard. `target` names the row whose "copied"
    /// indicator should light once the write succeeds.
    WriteClipboard {
        target: Option<CopyTarget>,
        text: String,
    },
    /// Open a URL with the system handler (browser or messaging app).
    OpenExternal { url: String },
    /// Hand the message to the native share capability, or the clipboard when absent.
    NativeShare {
        title: String,
        text: String,
        url: String,
    },
    /// Schedule `Msg::CopyFeedbackExpired { ticket }` after `after`.
    ScheduleCopyReset { ticket: u64, after: Duration },
}
