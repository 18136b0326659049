use invite_core::{build_invite_urls, compose_message, find_preset, NO_MESSAGE_PRESET_ID};
use pretty_assertions::assert_eq;

const URL: &str = "https://inv.example/?nama=Ayu";

#[test]
fn no_message_preset_with_empty_text_is_link_only() {
    assert_eq!(
        compose_message("Ayu", URL, NO_MESSAGE_PRESET_ID, ""),
        "Undangan untuk Ayu:\nhttps://inv.example/?nama=Ayu"
    );
    assert_eq!(
        compose_message("  Ayu ", URL, NO_MESSAGE_PRESET_ID, "  \n "),
        "Undangan untuk Ayu:\nhttps://inv.example/?nama=Ayu"
    );
}

#[test]
fn blank_name_uses_fallback_label() {
    assert_eq!(
        compose_message("   ", URL, NO_MESSAGE_PRESET_ID, ""),
        "Undangan untuk Bapak/Ibu:\nhttps://inv.example/?nama=Ayu"
    );
    assert_eq!(
        compose_message("", URL, "indo_formal", "Halo {NAMA}"),
        "Halo Bapak/Ibu"
    );
}

#[test]
fn custom_text_substitutes_both_tokens() {
    for preset in [NO_MESSAGE_PRESET_ID, "indo_formal", "bali_alus", "unknown"] {
        assert_eq!(
            compose_message("Ayu", URL, preset, "Halo {NAMA}, link: {LINK}"),
            "Halo Ayu, link: https://inv.example/?nama=Ayu"
        );
    }
}

#[test]
fn every_occurrence_is_replaced_and_text_is_trimmed() {
    assert_eq!(
        compose_message("Ayu", "u", "indo_formal", "\n {NAMA} {NAMA} {LINK}{LINK} \n"),
        "Ayu Ayu uu"
    );
}

#[test]
fn text_without_tokens_is_returned_as_is() {
    assert_eq!(
        compose_message("Ayu", URL, "indo_formal", "Sampai jumpa!"),
        "Sampai jumpa!"
    );
}

#[test]
fn cleared_preset_text_falls_back_to_link_only() {
    assert_eq!(
        compose_message("Made", URL, "bali_madya", ""),
        "Undangan untuk Made:\nhttps://inv.example/?nama=Ayu"
    );
}

#[test]
fn token_inside_name_is_inserted_verbatim() {
    // {NAMA} is replaced first, so a {LINK} carried in by the name is expanded.
    assert_eq!(
        compose_message("{LINK}", "u", "indo_formal", "Halo {NAMA}"),
        "Halo u"
    );
    assert_eq!(
        compose_message("{NAMA}", "u", "indo_formal", "Halo {NAMA}"),
        "Halo {NAMA}"
    );
}

#[test]
fn preset_text_renders_name_and_link() {
    let preset = find_preset("indo_formal").expect("preset");
    let message = compose_message("Ayu", URL, preset.id, preset.text);

    assert!(message.starts_with("Yth. Ayu,\n\n"));
    assert!(message.contains("Kehadiran Ayu akan"));
    assert!(message.contains(":\nhttps://inv.example/?nama=Ayu\n\n"));
    assert!(!message.contains("{NAMA}"));
    assert!(!message.contains("{LINK}"));
}

#[test]
fn bulk_link_only_messages() {
    let entries = build_invite_urls("https://inv.example/", "Ayu\nMade");
    let messages: Vec<String> = entries
        .iter()
        .map(|entry| compose_message(&entry.name, &entry.url, NO_MESSAGE_PRESET_ID, ""))
        .collect();

    assert_eq!(
        messages,
        vec![
            "Undangan untuk Ayu:\nhttps://inv.example/?nama=Ayu".to_string(),
            "Undangan untuk Made:\nhttps://inv.example/?nama=Made".to_string(),
        ]
    );
}

#[test]
fn byte_order_mark_only_name_uses_fallback_label() {
    assert_eq!(
        compose_message("\u{FEFF}", "https://inv.example/?nama=x", NO_MESSAGE_PRESET_ID, ""),
        "Undangan untuk Bapak/Ibu:\nhttps://inv.example/?nama=x"
    );
}
