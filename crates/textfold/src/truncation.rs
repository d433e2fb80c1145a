use crate::tokenization::is_word_char;

/// Marker appended to truncated text when the caller has no preference.
pub const DEFAULT_MARKER: &str = "...";

/// Shorten `s` to at most `max_len` characters plus `marker`, never cutting
/// through a word.
///
/// Text that already fits is returned unchanged. When the cut lands inside a
/// word, the partial word is dropped along with any separators left dangling
/// before it. If the result would not be shorter than `s`, `s` is returned
/// as-is.
pub fn truncate(s: &str, max_len: usize, marker: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        return s.to_string();
    }

    let mut cut = max_len;
    // chars[max_len] exists since chars.len() > max_len.
    if is_word_char(chars[cut]) {
        while cut > 0 && is_word_char(chars[cut - 1]) {
            cut -= 1;
        }
    }
    while cut > 0 && !is_word_char(chars[cut - 1]) {
        cut -= 1;
    }

    if cut + marker.chars().count() >= chars.len() {
        return s.to_string();
    }

    let mut result: String = chars[..cut].iter().collect();
    result.push_str(marker);
    result
}

/// Cut `s` at exactly `max_len` characters and append `marker`, regardless of
/// word boundaries. Text that fits is returned unchanged.
pub fn truncate_hard(s: &str, max_len: usize, marker: &str) -> String {
    match s.char_indices().nth(max_len) {
        Some((byte_idx, _)) => format!("{}{}", &s[..byte_idx], marker),
        None => s.to_string(),
    }
}
