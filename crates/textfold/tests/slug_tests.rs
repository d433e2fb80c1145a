use textfold::slug::*;
use textfold::transliteration::*;

#[test]
fn slug_french_phrase() {
    assert_eq!(slugify("Un \u{00E9}t\u{00E9} \u{00E0} Paris"), "un-ete-a-paris");
}

#[test]
fn slug_punctuation_becomes_hyphens() {
    assert_eq!(slugify("Hello, World!"), "hello-world");
    assert_eq!(slugify("Fix bug #123"), "fix-bug-123");
}

#[test]
fn slug_collapses_separator_runs() {
    assert_eq!(slugify("  foo -- bar__baz  "), "foo-bar-baz");
}

#[test]
fn slug_trims_edge_hyphens() {
    assert_eq!(slugify("---already-a-slug---"), "already-a-slug");
}

#[test]
fn slug_uppercase_diacritics_fold() {
    assert_eq!(slugify("\u{00C9}COLE \u{017B}\u{00D3}\u{0141}W"), "ecole-zolw");
}

#[test]
fn slug_unknown_non_ascii_is_separator() {
    assert_eq!(slugify("caf\u{00E9}\u{2603}bar"), "cafe-bar");
    assert_eq!(slugify("\u{4F60}\u{597D}"), "");
}

#[test]
fn slug_is_idempotent() {
    let once = slugify("Un \u{00E9}t\u{00E9} \u{00E0} Paris");
    assert_eq!(slugify(&once), once);
}

#[test]
fn slug_empty() {
    assert_eq!(slugify(""), "");
}

#[test]
fn fold_known_characters() {
    assert_eq!(fold('\u{00E9}'), Some('e'));
    assert_eq!(fold('\u{0142}'), Some('l'));
    assert_eq!(fold('\u{0219}'), Some('s'));
}

#[test]
fn fold_unknown_character() {
    assert_eq!(fold('a'), None);
    assert_eq!(fold('\u{00DF}'), None);
    // Table is lowercase only
    assert_eq!(fold('\u{00C9}'), None);
}

#[test]
fn table_targets_are_ascii_lowercase() {
    assert_eq!(TABLE.len(), 55);
    for &(source, ascii) in TABLE {
        assert!(!source.is_ascii(), "{source} should be non-ASCII");
        assert!(ascii.is_ascii_lowercase(), "{source} folds to {ascii}");
    }
}

#[test]
fn transliterate_keeps_other_characters() {
    assert_eq!(transliterate("cr\u{00E8}me br\u{00FB}l\u{00E9}e!"), "creme brulee!");
    assert_eq!(transliterate("\u{00DF}"), "\u{00DF}");
}
