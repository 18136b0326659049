use crate::link::trim_input;
use crate::presets::NO_MESSAGE_PRESET_ID;

/// Placeholder replaced by the guest label.
pub const NAME_TOKEN: &str = "{NAMA}";
/// Placeholder replaced by the invitation URL.
pub const LINK_TOKEN: &str = "{LINK}";
/// Label used when the guest name is blank ("Sir/Madam").
pub const FALLBACK_LABEL: &str = "Bapak/Ibu";

/// Composes the shareable text for one guest.
///
/// The link-only form `Undangan untuk {label}:\n{url}` is used when the
/// sentinel preset is selected with no text, and also whenever the text has
/// been cleared. Substitution is plain replacement of every `{NAMA}` and then
/// every `{LINK}`; inserted values are not escaped.
pub fn compose_message(name: &str, url: &str, preset_id: &str, custom_text: &str) -> String {
    let label = match trim_input(name) {
        "" => FALLBACK_LABEL,
        trimmed => trimmed,
    };
    let template = trim_input(custom_text);

    if template.is_empty() && preset_id == NO_MESSAGE_PRESET_ID {
        return link_only(label, url);
    }

    let base = if template.is_empty() {
        invite_logging::invite_debug!(
            "preset {} has empty text; falling back to link-only message",
            preset_id
        );
        link_only(label, url)
    } else {
        template.to_owned()
    };

    // The fallback goes through substitution too, so a token inside the
    // label is expanded exactly like one typed into the template.
    base.replace(NAME_TOKEN, label).replace(LINK_TOKEN, url)
}

fn link_only(label: &str, url: &str) -> String {
    format!("Undangan untuk {label}:\n{url}")
}
