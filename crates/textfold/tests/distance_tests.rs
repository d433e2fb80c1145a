use textfold::distance::*;

#[test]
fn identical_texts_have_zero_distance() {
    assert_eq!(levenshtein("kitten", "kitten"), 0);
    assert_eq!(levenshtein("", ""), 0);
}

#[test]
fn empty_side_costs_the_other_length() {
    assert_eq!(levenshtein("", "abc"), 3);
    assert_eq!(levenshtein("abc", ""), 3);
}

#[test]
fn classic_kitten_sitting() {
    assert_eq!(levenshtein("kitten", "sitting"), 3);
}

#[test]
fn single_edits() {
    assert_eq!(levenshtein("abc", "abd"), 1); // substitution
    assert_eq!(levenshtein("abc", "abcd"), 1); // insertion
    assert_eq!(levenshtein("abcd", "acd"), 1); // deletion
}

#[test]
fn transposition_costs_two() {
    assert_eq!(levenshtein("ab", "ba"), 2);
}

#[test]
fn completely_different() {
    assert_eq!(levenshtein("abc", "xyz"), 3);
}

#[test]
fn counts_characters_not_bytes() {
    // Each e-acute is two bytes but one edit
    assert_eq!(levenshtein("caf\u{00E9}", "cafe"), 1);
    assert_eq!(levenshtein("\u{00E9}\u{00E9}", ""), 2);
}

#[test]
fn symmetric_when_lengths_differ() {
    assert_eq!(levenshtein("saturday", "sunday"), 3);
    assert_eq!(levenshtein("sunday", "saturday"), 3);
}
