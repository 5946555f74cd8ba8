#![allow(clippy::unwrap_used)]

use super::*;

fn render(source: &str) -> String {
    let errors = leo_parse::parse_recovering(source.as_bytes()).errors;
    assert!(!errors.is_empty());
    let mut out = Vec::new();
    render_errors(
        &mut out,
        "<test>",
        source.as_bytes(),
        &errors,
        RenderOptions::default(),
    )
    .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn byte_to_char_ranges() {
    let source = "é + $".as_bytes();
    assert_eq!(char_range(source, 0..2), 0..1);
    assert_eq!(char_range(source, 5..6), 4..5);
    assert_eq!(char_range(source, 6..6), 5..5);
    assert_eq!(char_range(source, 10..12), 5..5);
}

#[test]
fn report_names_code_and_message() {
    let report = render("1 $ 2");
    assert!(report.contains("E0002"), "{report}");
    assert!(report.contains("invalid token '$': unknown character"), "{report}");
    assert!(report.contains("<test>"), "{report}");
}

#[test]
fn one_report_per_error() {
    let report = render("let = 1; let 2 = 3;");
    assert_eq!(report.matches("Error").count(), 2, "{report}");
}
