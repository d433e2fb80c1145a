use std::cmp::Ordering;

use textfold::natural::*;

#[test]
fn tokenize_splits_digit_runs() {
    let tokens = tokenize("img12.png");
    assert_eq!(
        tokens,
        vec![Token::Text("img"), Token::Integer("12"), Token::Text(".png")]
    );
}

#[test]
fn tokenize_leading_fraction() {
    let tokens = tokenize("v1.5");
    assert_eq!(
        tokens,
        vec![Token::Text("v"), Token::Integer("1"), Token::Fraction(".5")]
    );
}

#[test]
fn tokenize_dot_inside_text_run() {
    let tokens = tokenize("a.5");
    assert_eq!(tokens, vec![Token::Text("a."), Token::Integer("5")]);
}

#[test]
fn tokenize_empty() {
    assert!(tokenize("").is_empty());
}

#[test]
fn tokenize_multibyte_text() {
    let tokens = tokenize("\u{00E9}t\u{00E9}2");
    assert_eq!(tokens, vec![Token::Text("\u{00E9}t\u{00E9}"), Token::Integer("2")]);
}

#[test]
fn numbers_compare_by_value() {
    assert_eq!(natural_cmp("file2", "file10"), Ordering::Less);
    assert_eq!(natural_cmp("file10", "file2"), Ordering::Greater);
}

#[test]
fn sorts_image_names() {
    let mut names = vec!["img12.png", "img10.png", "img2.png", "img1.png"];
    natural_sort(&mut names);
    assert_eq!(names, vec!["img1.png", "img2.png", "img10.png", "img12.png"]);
}

#[test]
fn sorts_owned_strings() {
    let mut names: Vec<String> = ["z11", "z2", "z1"].iter().map(|s| s.to_string()).collect();
    natural_sort(&mut names);
    assert_eq!(names, vec!["z1", "z2", "z11"]);
}

#[test]
fn equal_texts_are_equal() {
    assert_eq!(natural_cmp("abc10", "abc10"), Ordering::Equal);
    assert_eq!(natural_cmp("", ""), Ordering::Equal);
}

#[test]
fn empty_sorts_first() {
    assert_eq!(natural_cmp("", "a"), Ordering::Less);
    assert_eq!(natural_cmp("a", ""), Ordering::Greater);
}

#[test]
fn fewer_tokens_sort_first() {
    assert_eq!(natural_cmp("abc", "abc1"), Ordering::Less);
    assert_eq!(natural_cmp("a1", "a1b"), Ordering::Less);
}

#[test]
fn leading_zeros_fall_back_to_text_order() {
    // Same numeric value; the full-text comparison decides
    assert_eq!(natural_cmp("a01", "a1"), Ordering::Less);
    assert_eq!(natural_cmp("a1", "a01"), Ordering::Greater);
}

#[test]
fn numerically_equal_tokens_continue_to_next_token() {
    assert_eq!(natural_cmp("a01b", "a1c"), Ordering::Less);
    assert_eq!(natural_cmp("a01c", "a1b"), Ordering::Greater);
}

#[test]
fn fractions_compare_as_decimals() {
    assert_eq!(natural_cmp("v1.10", "v1.9"), Ordering::Less);
    assert_eq!(natural_cmp("v1.5", "v1.50"), Ordering::Less);
}

#[test]
fn very_long_digit_runs() {
    let a = format!("n{}", "9".repeat(40));
    let b = format!("n1{}", "0".repeat(40));
    assert_eq!(natural_cmp(&a, &b), Ordering::Less);
}

#[test]
fn text_tokens_compare_by_code_point() {
    assert_eq!(natural_cmp("B1", "a1"), Ordering::Less);
    assert_eq!(natural_cmp("a-1", "a_1"), Ordering::Less);
}

#[test]
fn text_below_digits_never_lands_between_numbers() {
    assert_eq!(natural_cmp("0", ".5"), Ordering::Less);
    assert_eq!(natural_cmp("/", "0"), Ordering::Less);
    assert_eq!(natural_cmp("/", ".5"), Ordering::Less);
}

#[test]
fn text_above_digits_sorts_after_numbers() {
    assert_eq!(natural_cmp("9", "a"), Ordering::Less);
    assert_eq!(natural_cmp(".9", "a"), Ordering::Less);
}

#[test]
fn sorts_mixed_punctuation_and_numbers() {
    let mut items = vec!["0", ".5", "/", "00", ".9", ".a", "1", ".05"];
    natural_sort(&mut items);
    assert_eq!(items, vec![".a", "/", "0", "00", ".05", ".5", ".9", "1"]);
}

#[test]
fn sorts_many_mixed_items() {
    let pool = ["0", ".5", "/", "00", ".9", ".a", "1", ".05"];
    let mut items: Vec<&str> = (0..64).map(|i| pool[(i * 5 + i / 8) % pool.len()]).collect();
    natural_sort(&mut items);
    assert!(items
        .windows(2)
        .all(|w| natural_cmp(w[0], w[1]) != Ordering::Greater));
}
