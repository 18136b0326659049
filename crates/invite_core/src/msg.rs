use crate::{CopyTarget, Mode, ShareChannel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User switched between single and bulk mode.
    ModeSelected(Mode),
    /// User edited the single guest name input.
    NameChanged(String),
    /// User edited the bulk guest list (one name per line).
    BulkInputChanged(String),
    /// User submitted the single-mode form.
    GenerateSingle,
    /// User submitted the bulk-mode form.
    GenerateBulk,
    /// User picked a message preset; overwrites the message text.
    PresetSelected(String),
    /// User edited the message text directly.
    MessageEdited(String),
    /// User asked to copy or share the message for one row.
    DispatchRequested {
        target: CopyTarget,
        channel: ShareChannel,
    },
    /// Clipboard write for `target` finished successfully.
    CopyConfirmed(CopyTarget),
    /// Copy-feedback timer fired.
    CopyFeedbackExpired { ticket: u64 },
    /// An external sink rejected the operation.
    SinkFailed(String),
    /// UI/render tick.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
