use unicode_width_approximation::{
    get_codepoint_width, get_string_width, graphemes, is_wide_char, is_zero_width,
    string_width_with, AmbiguousWidth, WidthOptions,
};

#[test]
fn ascii_strings() {
    assert_eq!(get_string_width(""), 0);
    assert_eq!(get_string_width("Hello"), 5);
    assert_eq!(get_string_width("Hello, World!"), 13);
    assert_eq!(get_string_width("abc123"), 6);
}

#[test]
fn cjk_strings() {
    assert_eq!(get_string_width("中文"), 4);
    assert_eq!(get_string_width("日本語"), 6);
    assert_eq!(get_string_width("한국어"), 6);
}

#[test]
fn mixed_strings() {
    assert_eq!(get_string_width("Hello, 世界"), 11);
    assert_eq!(
        get_string_width("Hello") + get_string_width(", ") + get_string_width("世界"),
        get_string_width("Hello, 世界")
    );
}

#[test]
fn emoji_strings() {
    assert_eq!(get_string_width("\u{1F431}"), 2);
    assert_eq!(get_string_width("\u{1F648}\u{1F649}\u{1F64A}"), 6);
    assert_eq!(get_string_width("\u{1F44B}\u{1F3FB}"), 2);
    assert_eq!(
        get_string_width("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}"),
        2
    );
    assert_eq!(get_string_width("\u{1F1E8}\u{1F1F3}"), 2);
}

#[test]
fn emoji_sequences_in_context() {
    // two flags, then a lone indicator
    assert_eq!(
        get_string_width("\u{1F1E8}\u{1F1F3}\u{1F1FA}\u{1F1F8}\u{1F1EF}"),
        6
    );
    assert_eq!(get_string_width("hi \u{1F44B}\u{1F3FD}!"), 6);
    assert_eq!(get_string_width("\u{2764}\u{FE0F}"), 2);
    assert_eq!(get_string_width("\u{2764}"), 1);
    assert_eq!(get_string_width("\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}"), 2);
    assert_eq!(get_string_width("\u{2764}\u{FE0E}"), 2);
}

#[test]
fn clusters_outside_the_emoji_rules_take_their_first_code_point() {
    assert_eq!(get_string_width("7\u{20E3}"), 1);
    assert_eq!(get_string_width("#\u{FE0F}\u{20E3}"), 1);
    assert_eq!(get_string_width("\u{600}1"), 0);
}

#[test]
fn any_joiner_makes_a_cluster_wide() {
    assert_eq!(get_string_width("a\u{200D}"), 2);
    assert_eq!(get_string_width("a\u{200D}b"), 3);
}

#[test]
fn combining_marks() {
    assert_eq!(get_string_width("\u{E9}"), 1);
    assert_eq!(get_string_width("e\u{301}"), 1);
    assert_eq!(get_string_width("a\u{308}"), 1);
    assert_eq!(get_string_width("e\u{301}\u{302}"), 1);
    assert_eq!(get_string_width("\u{E9}\u{302}"), 1);
    // nothing to attach to
    assert_eq!(get_string_width("\u{301}"), 0);
}

#[test]
fn control_characters() {
    assert_eq!(get_string_width("a\0b"), 2);
    assert_eq!(get_string_width("hello\n"), 5);
    assert_eq!(get_string_width("hello\tworld"), 10);
    assert_eq!(get_string_width("\r\n\u{7F}\u{85}"), 0);
}

#[test]
fn fullwidth_characters() {
    assert_eq!(get_string_width("ＡＢＣ"), 6);
}

#[test]
fn codepoint_widths() {
    assert_eq!(get_codepoint_width('a' as u32), 1);
    assert_eq!(get_codepoint_width(' ' as u32), 1);
    assert_eq!(get_codepoint_width(0x00), 0);
    assert_eq!(get_codepoint_width(0x0A), 0);
    assert_eq!(get_codepoint_width(0x0D), 0);
    assert_eq!(get_codepoint_width(0x1B), 0);
    assert_eq!(get_codepoint_width(0x4E00), 2);
    assert_eq!(get_codepoint_width(0x3042), 2);
    assert_eq!(get_codepoint_width(0xFF01), 2);
    assert_eq!(get_codepoint_width(0x1F600), 2);
    assert_eq!(get_codepoint_width(0x1F1FA), 2);
    assert_eq!(get_codepoint_width(0x200D), 0);
    assert_eq!(get_codepoint_width(0x200B), 0);
    assert_eq!(get_codepoint_width(0x0300), 0);
    assert_eq!(get_codepoint_width(0x00A9), 1);
    assert_eq!(get_codepoint_width(0x2764), 1);
}

#[test]
fn wide_and_zero_predicates() {
    assert!(is_wide_char(0x4E00));
    assert!(is_wide_char(0xFF21));
    assert!(!is_wide_char('A' as u32));
    assert!(is_zero_width(0x200D));
    assert!(is_zero_width(0x0300));
    assert!(is_zero_width(0x0A));
    assert!(!is_zero_width('A' as u32));
}

#[test]
fn codepoint_consistency() {
    for code in (0..=0x10FFFF).step_by(61).chain([0x110000, 0xFFFF_FFFF]) {
        let width = get_codepoint_width(code);
        assert!(width <= 2, "U+{:04X}", code);
        assert_eq!(is_wide_char(code), width == 2, "U+{:04X}", code);
        assert_eq!(is_zero_width(code), width == 0, "U+{:04X}", code);
    }
}

#[test]
fn segmentation_is_idempotent() {
    let text = "Hello, 世界 \u{1F468}\u{200D}\u{1F469} e\u{301} \u{1F1E8}\u{1F1F3}\r\n";
    let first: Vec<&str> = graphemes(text).collect();
    let second: Vec<&str> = graphemes(text).collect();
    assert_eq!(first, second);
    assert_eq!(first.concat(), text);
    assert_eq!(get_string_width(text), get_string_width(text));
}

#[test]
fn ambiguous_width_option() {
    let text = "\u{2460}\u{2461}"; // circled digits
    assert_eq!(get_string_width(text), 2);
    let cjk = WidthOptions::new().with_ambiguous(AmbiguousWidth::Wide);
    assert_eq!(string_width_with(text, &cjk), 4);
}
