//! Invite core: link building, message composition and the pure form state machine.
mod compose;
mod effect;
mod link;
mod msg;
mod presets;
mod state;
mod update;
mod view_model;

pub use compose::{compose_message, FALLBACK_LABEL, LINK_TOKEN, NAME_TOKEN};
pub use effect::Effect;
pub use link::{
    build_invite_url, build_invite_urls, direct_message_url, encode_uri_component, trim_input,
    InviteEntry, DIRECT_MESSAGE_BASE, NAME_PARAM,
};
pub use msg::Msg;
pub use presets::{find_preset, MessagePreset, MESSAGE_PRESETS, NO_MESSAGE_PRESET_ID};
pub use state::{AppState, ComposerState, CopyTarget, Mode, ShareChannel};
pub use update::{dispatch, update, COPY_FEEDBACK, SHARE_TITLE};
pub use view_model::{AppViewModel, InviteRowView, PresetView, BULK_QR_SIZE, SINGLE_QR_SIZE};
