//! Invite engine: sink execution (clipboard, share, opener), QR rendering and export.
mod clipboard;
mod engine;
mod export;
mod filename;
mod opener;
mod qr;
mod share;
mod sinks;
mod types;

pub use clipboard::{ClipboardSink, SystemClipboard};
pub use engine::{run_effect, EngineHandle};
pub use export::{ensure_output_dir, export_qr_codes, ExportError, QrExportSummary};
pub use filename::qr_filename;
pub use opener::{LinkOpener, SystemOpener};
pub use qr::{render_svg, render_terminal};
pub use share::{native_share, ShareSink};
pub use sinks::Sinks;
pub use types::{EngineEvent, ShareError, ShareOutcome, SharePayload, SinkError};
