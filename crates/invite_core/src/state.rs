use crate::link::{build_invite_url, build_invite_urls, trim_input, InviteEntry};
use crate::presets::{find_preset, MESSAGE_PRESETS, NO_MESSAGE_PRESET_ID};
use crate::view_model::{AppViewModel, InviteRowView, PresetView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Single,
    Bulk,
}

/// Row whose copy/share action was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Single,
    Bulk(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareChannel {
    /// Messaging deep link with the text pre-filled.
    DirectMessage,
    /// OS share sheet, falling back to the clipboard.
    SystemShare,
    Clipboard,
}

/// Selected preset plus the freely editable message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerState {
    pub selected_preset_id: String,
    pub custom_message: String,
}

impl Default for ComposerState {
    fn default() -> Self {
        Self {
            selected_preset_id: NO_MESSAGE_PRESET_ID.to_string(),
            custom_message: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    base_url: String,
    mode: Mode,
    name_input: String,
    single_invite: Option<InviteEntry>,
    bulk_input: String,
    bulk_invites: Vec<InviteEntry>,
    composer: ComposerState,
    copied: Option<CopyTarget>,
    copy_ticket: u64,
    last_error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with the externally configured invitation base address.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn composer(&self) -> &ComposerState {
        &self.composer
    }

    pub fn single_invite(&self) -> Option<&InviteEntry> {
        self.single_invite.as_ref()
    }

    pub fn bulk_invites(&self) -> &[InviteEntry] {
        &self.bulk_invites
    }

    pub fn copied(&self) -> Option<CopyTarget> {
        self.copied
    }

    pub fn view(&self) -> AppViewModel {
        let single = self
            .single_invite
            .as_ref()
            .map(|entry| self.row_view(CopyTarget::Single, entry));
        let bulk: Vec<InviteRowView> = self
            .bulk_invites
            .iter()
            .enumerate()
            .map(|(index, entry)| self.row_view(CopyTarget::Bulk(index), entry))
            .collect();
        let presets = MESSAGE_PRESETS
            .iter()
            .map(|preset| PresetView {
                id: preset.id,
                label: preset.label,
                badge: preset.badge,
                selected: preset.id == self.composer.selected_preset_id,
            })
            .collect();

        AppViewModel {
            mode: self.mode,
            base_url_configured: !self.base_url.is_empty(),
            name_input: self.name_input.clone(),
            bulk_input: self.bulk_input.clone(),
            single,
            bulk_count: bulk.len(),
            bulk,
            presets,
            selected_preset_id: self.composer.selected_preset_id.clone(),
            custom_message: self.composer.custom_message.clone(),
            last_error: self.last_error.clone(),
            dirty: self.dirty,
        }
    }

    fn row_view(&self, target: CopyTarget, entry: &InviteEntry) -> InviteRowView {
        InviteRowView {
            target,
            name: entry.name.clone(),
            url: entry.url.clone(),
            copied: self.copied == Some(target),
        }
    }

    /// Returns and clears the dirty flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.mode = mode;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_name_input(&mut self, text: String) {
        if self.name_input != text {
            self.name_input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_bulk_input(&mut self, text: String) {
        if self.bulk_input != text {
            self.bulk_input = text;
            self.mark_dirty();
        }
    }

    /// Rebuilds the single invite from the current name input.
    ///
    /// Returns false, leaving the previous result in place, when nothing can be built.
    pub(crate) fn generate_single(&mut self) -> bool {
        let Some(url) = build_invite_url(&self.base_url, &self.name_input) else {
            return false;
        };
        self.single_invite = Some(InviteEntry {
            name: trim_input(&self.name_input).to_string(),
            url,
        });
        self.after_generation();
        true
    }

    /// Replaces the bulk invites with one entry per non-blank input line.
    pub(crate) fn generate_bulk(&mut self) -> Option<usize> {
        if self.base_url.is_empty() || trim_input(&self.bulk_input).is_empty() {
            return None;
        }
        self.bulk_invites = build_invite_urls(&self.base_url, &self.bulk_input);
        self.after_generation();
        Some(self.bulk_invites.len())
    }

    fn after_generation(&mut self) {
        self.copied = None;
        self.last_error = None;
        self.mark_dirty();
    }

    pub(crate) fn select_preset(&mut self, id: String) {
        let text = find_preset(&id).map(|preset| preset.text).unwrap_or_default();
        self.composer.custom_message = text.to_string();
        self.composer.selected_preset_id = id;
        self.mark_dirty();
    }

    pub(crate) fn edit_message(&mut self, text: String) {
        if self.composer.custom_message != text {
            self.composer.custom_message = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn entry_for(&self, target: CopyTarget) -> Option<&InviteEntry> {
        match target {
            CopyTarget::Single => self.single_invite.as_ref(),
            CopyTarget::Bulk(index) => self.bulk_invites.get(index),
        }
    }

    /// Lights the copied indicator and returns the ticket of its reset timer.
    pub(crate) fn confirm_copy(&mut self, target: CopyTarget) -> Option<u64> {
        self.entry_for(target)?;
        self.copied = Some(target);
        self.copy_ticket += 1;
        self.mark_dirty();
        Some(self.copy_ticket)
    }

    pub(crate) fn expire_copy(&mut self, ticket: u64) {
        if ticket == self.copy_ticket && self.copied.is_some() {
            self.copied = None;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_error(&mut self, reason: String) {
        self.last_error = Some(reason);
        self.mark_dirty();
    }
}
