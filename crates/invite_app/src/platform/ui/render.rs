use std::fmt::Write;

use invite_core::{AppViewModel, InviteRowView, Mode};
use invite_engine::render_terminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrDisplay {
    Terminal,
    Hidden,
}

const COPIED_BADGE: &str = " [Tersalin]";

pub fn render(view: &AppViewModel, qr: QrDisplay) -> String {
    let mut out = String::new();

    let mode_label = match view.mode {
        Mode::Single => "Single",
        Mode::Bulk => "Bulk",
    };
    let _ = writeln!(
        out,
        "Mode: {} | Preset: {}",
        mode_label,
        preset_label(view)
    );
    if !view.base_url_configured {
        let _ = writeln!(
            out,
            "Base URL belum diatur; gunakan --base-url atau BASE_UNDANGAN_URL."
        );
    }
    if let Some(error) = &view.last_error {
        let _ = writeln!(out, "Gagal: {error}");
    }

    match view.mode {
        Mode::Single => match &view.single {
            Some(row) => {
                let _ = writeln!(out, "Link & QR untuk {}", row.name);
                out.push_str(&render_row(row, qr));
            }
            None => {
                let _ = writeln!(out, "Belum ada link. Isi nama lalu generate.");
            }
        },
        Mode::Bulk => {
            if view.bulk.is_empty() {
                let _ = writeln!(out, "Belum ada daftar. Tambahkan nama lalu generate.");
            } else {
                let _ = writeln!(out, "Daftar undangan: {} tamu", view.bulk_count);
                for (position, row) in view.bulk.iter().enumerate() {
                    let _ = writeln!(out, "{:>3}. {}", position + 1, row.name);
                    out.push_str(&render_row(row, qr));
                }
            }
        }
    }
    out
}

fn render_row(row: &InviteRowView, qr: QrDisplay) -> String {
    let mut out = String::new();
    let badge = if row.copied { COPIED_BADGE } else { "" };
    let _ = writeln!(out, "     {}{}", row.url, badge);
    if qr == QrDisplay::Terminal {
        match render_terminal(&row.url) {
            Ok(block) => out.push_str(&block),
            Err(err) => {
                let _ = write!(out, "     (QR tidak tersedia: {err})");
            }
        }
        out.push('\n');
    }
    out
}

fn preset_label(view: &AppViewModel) -> &str {
    view.presets
        .iter()
        .find(|preset| preset.selected)
        .map(|preset| preset.label)
        .unwrap_or("Custom")
}

pub fn render_presets(view: &AppViewModel) -> String {
    let mut out = String::new();
    for preset in &view.presets {
        let marker = if preset.selected { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{} {:<12} {} ({})",
            marker, preset.id, preset.label, preset.badge
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use invite_core::{update, AppState, CopyTarget, Msg};

    fn bulk_view() -> AppViewModel {
        let mut state = AppState::with_base_url("https://inv.example/");
        for msg in [
            Msg::ModeSelected(Mode::Bulk),
            Msg::BulkInputChanged("Ayu\nMade".to_string()),
            Msg::GenerateBulk,
            Msg::CopyConfirmed(CopyTarget::Bulk(1)),
        ] {
            state = update(state, msg).0;
        }
        state.view()
    }

    #[test]
    fn bulk_render_lists_count_and_copied_badge() {
        let text = render(&bulk_view(), QrDisplay::Hidden);

        assert!(text.contains("Daftar undangan: 2 tamu"));
        assert!(text.contains("  1. Ayu\n     https://inv.example/?nama=Ayu\n"));
        assert!(text.contains("https://inv.example/?nama=Made [Tersalin]"));
    }

    #[test]
    fn missing_base_url_is_reported() {
        let text = render(&AppState::new().view(), QrDisplay::Hidden);
        assert!(text.contains("Base URL belum diatur"));
        assert!(text.contains("Mode: Single | Preset: Tanpa pesan"));
    }

    #[test]
    fn preset_listing_marks_selection() {
        let state = update(AppState::new(), Msg::PresetSelected("bali_madya".to_string())).0;
        let text = render_presets(&state.view());
        assert!(text.contains("* bali_madya"));
        assert!(text.contains("  none"));
    }
}
