use textfold::truncation::*;

#[test]
fn cut_before_separator_keeps_whole_word() {
    assert_eq!(truncate("Hello, world", 5, "..."), "Hello...");
}

#[test]
fn cut_inside_word_drops_partial_word() {
    assert_eq!(truncate("Hello, world", 10, "..."), "Hello...");
    assert_eq!(truncate("Hello world", 8, "..."), "Hello...");
}

#[test]
fn cut_after_separator_trims_it() {
    assert_eq!(truncate("Hello cruel world", 6, "..."), "Hello...");
}

#[test]
fn short_text_unchanged() {
    assert_eq!(truncate("Hi", 5, "..."), "Hi");
}

#[test]
fn exact_length_unchanged() {
    assert_eq!(truncate("Hello", 5, "..."), "Hello");
}

#[test]
fn never_lengthens() {
    // "Hello" + "..." is as long as the input
    assert_eq!(truncate("Hello wo", 6, "..."), "Hello wo");
    assert_eq!(truncate("Hello world", 5, " [more]"), "Hello world");
}

#[test]
fn single_long_word_collapses_to_marker() {
    assert_eq!(truncate("Supercalifragilistic", 5, "..."), "...");
}

#[test]
fn zero_length() {
    assert_eq!(truncate("Hello world", 0, "..."), "...");
}

#[test]
fn empty_text() {
    assert_eq!(truncate("", 0, "..."), "");
    assert_eq!(truncate("", 10, "..."), "");
}

#[test]
fn custom_marker() {
    assert_eq!(truncate("The quick brown fox", 12, "\u{2026}"), "The quick\u{2026}");
}

#[test]
fn default_marker_is_three_dots() {
    assert_eq!(DEFAULT_MARKER, "...");
}

#[test]
fn multibyte_words() {
    assert_eq!(truncate("caf\u{00E9} cr\u{00E8}me br\u{00FB}l\u{00E9}e", 7, "..."), "caf\u{00E9}...");
}

#[test]
fn hard_truncate_cuts_mid_word() {
    assert_eq!(truncate_hard("Hello world", 7, "..."), "Hello w...");
}

#[test]
fn hard_truncate_short_text_unchanged() {
    assert_eq!(truncate_hard("Hi", 5, "..."), "Hi");
}

#[test]
fn hard_truncate_respects_char_boundaries() {
    let text = "\u{00E9}".repeat(10);
    assert_eq!(truncate_hard(&text, 3, ""), "\u{00E9}".repeat(3));
}
