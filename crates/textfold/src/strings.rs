use std::fmt::Display;

/// Text form of any displayable value; `None` is the empty string.
pub fn to_text<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Non-overlapping occurrences of `needle`. An empty needle never matches.
pub fn count(s: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    s.matches(needle).count()
}

/// Whether `needle` occurs in `s`; the empty needle always does.
pub fn include(s: &str, needle: &str) -> bool {
    s.contains(needle)
}

pub fn contains(s: &str, needle: &str) -> bool {
    include(s, needle)
}

pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Remove `how_many` characters at character `index` and put `insert` in
/// their place. Out-of-range positions are clamped to the text.
pub fn splice(s: &str, index: usize, how_many: usize, insert: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let start = index.min(chars.len());
    let end = start.saturating_add(how_many).min(chars.len());

    let mut out: String = chars[..start].iter().collect();
    out.push_str(insert);
    out.extend(&chars[end..]);
    out
}

pub fn insert(s: &str, index: usize, text: &str) -> String {
    splice(s, index, 0, text)
}

/// Advance the last character to the next code point: `"a"` -> `"b"`.
pub fn succ(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next_back() {
        Some(last) => {
            let next = (last as u32 + 1..=char::MAX as u32)
                .find_map(char::from_u32)
                .unwrap_or(last);
            let mut out: String = chars.collect();
            out.push(next);
            out
        }
        None => String::new(),
    }
}

/// Backslash-escape regex metacharacters.
pub fn escape_regexp(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if ".*+?^=!:${}()|[]/\\".contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Text before the first `sep`, or all of `s` when absent.
pub fn str_left<'a>(s: &'a str, sep: &str) -> &'a str {
    if sep.is_empty() {
        return s;
    }
    s.find(sep).map_or(s, |pos| &s[..pos])
}

/// Text before the last `sep`, or all of `s` when absent.
pub fn str_left_back<'a>(s: &'a str, sep: &str) -> &'a str {
    if sep.is_empty() {
        return s;
    }
    s.rfind(sep).map_or(s, |pos| &s[..pos])
}

/// Text after the first `sep`, or all of `s` when absent.
pub fn str_right<'a>(s: &'a str, sep: &str) -> &'a str {
    if sep.is_empty() {
        return s;
    }
    s.find(sep).map_or(s, |pos| &s[pos + sep.len()..])
}

/// Text after the last `sep`, or all of `s` when absent.
pub fn str_right_back<'a>(s: &'a str, sep: &str) -> &'a str {
    if sep.is_empty() {
        return s;
    }
    s.rfind(sep).map_or(s, |pos| &s[pos + sep.len()..])
}

pub fn surround(s: &str, wrapper: &str) -> String {
    format!("{wrapper}{s}{wrapper}")
}

pub fn quote(s: &str, quote_char: char) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote_char);
    out.push_str(s);
    out.push(quote_char);
    out
}

pub fn q(s: &str, quote_char: char) -> String {
    quote(s, quote_char)
}

/// Drop a matching pair of `quote_char` around `s`, if present.
pub fn unquote(s: &str, quote_char: char) -> &str {
    s.strip_prefix(quote_char)
        .and_then(|inner| inner.strip_suffix(quote_char))
        .unwrap_or(s)
}

/// Join items as an English list: `a, b and c`.
///
/// With `serial`, lists of three or more get the separator's trimmed form
/// before the last separator too: `a, b, and c`.
pub fn to_sentence<S: AsRef<str>>(
    items: &[S],
    separator: &str,
    last_separator: &str,
    serial: bool,
) -> String {
    let Some((last, init)) = items.split_last() else {
        return String::new();
    };
    if init.is_empty() {
        return last.as_ref().to_string();
    }

    let last_separator = if serial && items.len() > 2 {
        format!("{}{}", separator.trim_end(), last_separator)
    } else {
        last_separator.to_string()
    };

    let head: Vec<&str> = init.iter().map(|item| item.as_ref()).collect();
    format!("{}{}{}", head.join(separator), last_separator, last.as_ref())
}

pub fn to_sentence_serial<S: AsRef<str>>(items: &[S], separator: &str, last_separator: &str) -> String {
    to_sentence(items, separator, last_separator, true)
}

pub const DEFAULT_TRUE_VALUES: &[&str] = &["true", "1"];
pub const DEFAULT_FALSE_VALUES: &[&str] = &["false", "0"];

/// Interpret text as a boolean, case-insensitively and ignoring surrounding
/// whitespace. `None` when it matches neither list.
pub fn to_boolean(s: &str, true_values: &[&str], false_values: &[&str]) -> Option<bool> {
    let down = s.trim().to_lowercase();
    let matches = |values: &[&str]| values.iter().any(|v| !v.is_empty() && v.to_lowercase() == down);

    if matches(true_values) {
        Some(true)
    } else if matches(false_values) {
        Some(false)
    } else {
        None
    }
}

pub fn to_bool(s: &str, true_values: &[&str], false_values: &[&str]) -> Option<bool> {
    to_boolean(s, true_values, false_values)
}
