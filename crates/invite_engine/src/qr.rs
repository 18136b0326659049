use qrcode::render::{svg, unicode};
use qrcode::QrCode;

use crate::SinkError;

fn encode(data: &str) -> Result<QrCode, SinkError> {
    QrCode::new(data.as_bytes()).map_err(|e| SinkError::Qr(e.to_string()))
}

/// Renders `data` as half-block text for a dark terminal background.
pub fn render_terminal(data: &str) -> Result<String, SinkError> {
    let code = encode(data)?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .quiet_zone(true)
        .build())
}

/// Renders `data` as an SVG document at least `size_px` wide and high.
pub fn render_svg(data: &str, size_px: u32) -> Result<String, SinkError> {
    let code = encode(data)?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(size_px, size_px)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_render_is_square_block_text() {
        let text = render_terminal("https://inv.example/?nama=Ayu").unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.len() > 10);
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|line| line.chars().count() == width));
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let data = "x".repeat(8000);
        assert!(matches!(render_terminal(&data), Err(SinkError::Qr(_))));
    }
}
