use crate::{CopyTarget, Mode};

/// QR size in pixels for the single-mode result.
pub const SINGLE_QR_SIZE: u32 = 120;
/// QR size in pixels for each bulk row.
pub const BULK_QR_SIZE: u32 = 72;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub mode: Mode,
    pub base_url_configured: bool,
    pub name_input: String,
    pub bulk_input: String,
    pub single: Option<InviteRowView>,
    pub bulk: Vec<InviteRowView>,
    pub bulk_count: usize,
    pub presets: Vec<PresetView>,
    pub selected_preset_id: String,
    pub custom_message: String,
    pub last_error: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteRowView {
    pub target: CopyTarget,
    pub name: String,
    pub url: String,
    pub copied: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetView {
    pub id: &'static str,
    pub label: &'static str,
    pub badge: &'static str,
    pub selected: bool,
}
