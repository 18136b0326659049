use std::time::Duration;

use invite_logging::{invite_debug, invite_info, invite_warn};

use crate::{
    compose_message, direct_message_url, AppState, CopyTarget, Effect, Msg, ShareChannel,
};

/// How long the "copied" indicator stays lit.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(1500);

/// Title passed to the native share sheet.
pub const SHARE_TITLE: &str = "Undangan Pernikahan";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ModeSelected(mode) => {
            state.set_mode(mode);
            Vec::new()
        }
        Msg::NameChanged(text) => {
            state.set_name_input(text);
            Vec::new()
        }
        Msg::BulkInputChanged(text) => {
            state.set_bulk_input(text);
            Vec::new()
        }
        Msg::GenerateSingle => {
            if !state.generate_single() {
                invite_debug!("single generation skipped: missing base url or blank name");
            }
            Vec::new()
        }
        Msg::GenerateBulk => {
            match state.generate_bulk() {
                Some(count) => invite_info!("generated {} bulk invites", count),
                None => invite_debug!("bulk generation skipped: missing base url or blank list"),
            }
            Vec::new()
        }
        Msg::PresetSelected(id) => {
            state.select_preset(id);
            Vec::new()
        }
        Msg::MessageEdited(text) => {
            state.edit_message(text);
            Vec::new()
        }
        Msg::DispatchRequested { target, channel } => dispatch(&state, target, channel)
            .into_iter()
            .collect(),
        Msg::CopyConfirmed(target) => match state.confirm_copy(target) {
            Some(ticket) => vec![Effect::ScheduleCopyReset {
                ticket,
                after: COPY_FEEDBACK,
            }],
            None => Vec::new(),
        },
        Msg::CopyFeedbackExpired { ticket } => {
            state.expire_copy(ticket);
            Vec::new()
        }
        Msg::SinkFailed(reason) => {
            invite_warn!("sink operation failed: {}", reason);
            state.set_error(reason);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Plans the side effect for one copy/share action.
///
/// The message is composed now, from the current template, so edits made
/// after generation apply without regenerating links.
pub fn dispatch(state: &AppState, target: CopyTarget, channel: ShareChannel) -> Option<Effect> {
    let entry = state.entry_for(target)?;
    let composer = state.composer();
    let text = compose_message(
        &entry.name,
        &entry.url,
        &composer.selected_preset_id,
        &composer.custom_message,
    );

    let effect = match channel {
        ShareChannel::DirectMessage => Effect::OpenExternal {
            url: direct_message_url(&text),
        },
        ShareChannel::SystemShare => Effect::NativeShare {
            title: SHARE_TITLE.to_string(),
            text,
            url: entry.url.clone(),
        },
        ShareChannel::Clipboard => Effect::WriteClipboard {
            target: Some(target),
            text,
        },
    };
    Some(effect)
}
