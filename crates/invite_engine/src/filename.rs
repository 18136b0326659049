use sha2::{Digest, Sha256};

/// Portable, deterministic QR image name: `{sanitized_guest}--{short_hash(url)}.svg`.
///
/// The hash keeps repeated guest names from overwriting each other when their
/// URLs differ, and gives identical entries the same file.
pub fn qr_filename(guest_name: &str, url: &str) -> String {
    let sanitized = sanitize_name(guest_name);
    let hash = short_hash(url);
    format!("{sanitized}--{hash}.svg")
}

fn sanitize_name(input: &str) -> String {
    let mut compacted = String::with_capacity(input.len());
    let mut prev_underscore = false;
    for c in input.chars() {
        let c = if is_forbidden(c) || c.is_whitespace() {
            '_'
        } else {
            c
        };
        if c == '_' {
            if !prev_underscore {
                compacted.push(c);
            }
            prev_underscore = true;
        } else {
            compacted.push(c);
            prev_underscore = false;
        }
    }
    let mut cleaned = compacted.trim_matches(&['_', '.'][..]).to_string();
    if cleaned.is_empty() {
        cleaned = "tamu".to_string();
    }
    if cleaned.chars().count() > 60 {
        cleaned = cleaned.chars().take(60).collect();
    }
    if is_reserved_windows_name(&cleaned) {
        cleaned.push('_');
    }
    cleaned
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '&' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}

fn short_hash(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}
