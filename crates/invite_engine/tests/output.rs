use invite_engine::{qr_filename, render_svg, render_terminal};
use pretty_assertions::assert_eq;

#[test]
fn filename_is_deterministic_and_safe() {
    let url = "https://inv.example/?nama=Made%20%26%20Ayu";
    let fname = qr_filename("Made & Ayu", url);
    assert!(fname.starts_with("Made_Ayu--"));
    assert!(fname.ends_with(".svg"));

    // Stable hash
    assert_eq!(fname, qr_filename("Made & Ayu", url));

    // Same name, different link, different file.
    assert_ne!(fname, qr_filename("Made & Ayu", "https://other.example/?nama=x"));

    // Reserved name patched
    assert!(qr_filename("AUX", url).starts_with("AUX_--"));
}

#[test]
fn svg_respects_minimum_size() {
    let svg = render_svg("https://inv.example/?nama=Ayu", 120).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("#000000"));
}

#[test]
fn same_input_renders_identically() {
    let data = "https://inv.example/?nama=Ayu";
    assert_eq!(render_terminal(data).unwrap(), render_terminal(data).unwrap());
}
