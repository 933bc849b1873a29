//! Library-level conversion tests

use ansihtml::{convert, convert_from, escape, linkify, LineConverter, Pipeline, StyleState};

use super::helpers::load_fixture;

#[test]
fn text_without_escapes_is_unchanged() {
    for text in ["", "plain", "a < b && c > d", "[31m no escape byte", "tab\tand unicode ✓"] {
        assert_eq!(convert(text), text);
    }
}

#[test]
fn red_then_plain() {
    assert_eq!(
        convert("\x1b[31mred\x1b[0m plain"),
        "<span style=\"color:rgb(187, 0, 0)\">red</span> plain"
    );
}

#[test]
fn bright_green() {
    assert_eq!(
        convert("\x1b[1;32mgreen\x1b[0m"),
        "<span style=\"color:rgb(0, 255, 0)\">green</span>"
    );
}

#[test]
fn background_only() {
    assert_eq!(
        convert("\x1b[41merr\x1b[0m"),
        "<span style=\"background-color:rgb(187, 0, 0)\">err</span>"
    );
}

#[test]
fn malformed_introducer_drops_marker() {
    assert_eq!(convert("a\x1b[bogus"), "abogus");
}

#[test]
fn escape_and_linkify_examples() {
    assert_eq!(escape("<b>&"), "&lt;b&gt;&amp;");
    assert_eq!(
        linkify("see http://x.test now"),
        "see <a href=\"http://x.test\">http://x.test</a> now"
    );
}

#[test]
fn conversion_is_idempotent_on_its_output() {
    for line in load_fixture("sample.log").lines() {
        let once = convert(line);
        assert_eq!(convert(&once), once);
    }
}

#[test]
fn escaping_before_conversion_keeps_markup_intact() {
    let raw = "\x1b[33m<warn>\x1b[0m & more";
    assert_eq!(
        convert(&escape(raw)),
        "<span style=\"color:rgb(187, 187, 0)\">&lt;warn&gt;</span> &amp; more"
    );
}

#[test]
fn state_can_be_handed_across_a_boundary() {
    let (_, state) = convert_from("\x1b[1;34mstart", StyleState::default());
    let wire = serde_json::to_string(&state).unwrap();
    let restored: StyleState = serde_json::from_str(&wire).unwrap();

    let mut converter = LineConverter::with_state(restored);
    assert_eq!(
        converter.convert_line("next"),
        "<span style=\"color:rgb(85, 85, 255)\">next</span>"
    );
}

#[test]
fn sample_log_renders() {
    let input = load_fixture("sample.log");
    let lines: Vec<&str> = input.lines().collect();
    let html = Pipeline::default().render_lines(&lines);

    insta::assert_snapshot!(html.join("\n"), @r#"
    2024-01-01 12:00:00 <span style="color:rgb(0, 187, 0)">INFO</span> server started on <a href="http://localhost:8080">http://localhost:8080</a>
    2024-01-01 12:00:01 <span style="color:rgb(255, 255, 85)">WARN</span> queue depth &gt; 100 &amp; rising
    2024-01-01 12:00:02 <span style="color:rgb(255, 255, 255);background-color:rgb(187, 0, 0)">ERROR</span> connection refused
    plain line
    "#);
}
