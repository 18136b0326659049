use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

/// Query parameter carrying the guest name on the invitation page.
pub const NAME_PARAM: &str = "nama";

/// Messaging deep link that accepts a pre-filled body in its `text` parameter.
pub const DIRECT_MESSAGE_BASE: &str = "https://wa.me/";

/// URI component encoding: everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A guest name paired with its personalized invitation URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InviteEntry {
    pub name: String,
    pub url: String,
}

/// Trims whitespace and byte-order marks from both ends of user input.
///
/// `str::trim` keeps U+FEFF, which text editors put at the start of saved files.
pub fn trim_input(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Builds `{base}?nama={encoded name}`.
///
/// Returns `None` when the base address is not configured or the name is blank.
pub fn build_invite_url(base_url: &str, raw_name: &str) -> Option<String> {
    let name = trim_input(raw_name);
    if base_url.is_empty() || name.is_empty() {
        return None;
    }
    Some(format!(
        "{base_url}?{NAME_PARAM}={}",
        encode_uri_component(name)
    ))
}

/// Builds one entry per non-blank line of `raw_names`, in input order.
///
/// Repeated names are kept. An unconfigured base address yields no entries.
pub fn build_invite_urls(base_url: &str, raw_names: &str) -> Vec<InviteEntry> {
    raw_names
        .lines()
        .map(trim_input)
        .filter(|line| !line.is_empty())
        .filter_map(|name| {
            build_invite_url(base_url, name).map(|url| InviteEntry {
                name: name.to_owned(),
                url,
            })
        })
        .collect()
}

/// Deep link that opens a chat with `text` pre-filled.
pub fn direct_message_url(text: &str) -> String {
    format!("{DIRECT_MESSAGE_BASE}?text={}", encode_uri_component(text))
}
