use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tokenization::{is_lower, is_upper, is_word_char};

/// Target casing for [`to_style`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// `fooBarBaz`
    Camel,
    /// `foo_bar_baz`
    #[default]
    #[serde(alias = "snake")]
    Underscored,
    /// `foo-bar-baz`
    #[serde(alias = "kebab")]
    Dasherized,
    /// `Foo Bar-Baz`
    #[serde(alias = "title")]
    Titleized,
    /// `FooBarBaz`
    #[serde(alias = "class", alias = "pascal")]
    Classified,
    /// `Foo bar baz`
    #[serde(alias = "human", alias = "sentence")]
    Humanized,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown case style: {0}")]
pub struct ParseStyleError(pub String);

impl CaseStyle {
    pub const ALL: [CaseStyle; 6] = [
        CaseStyle::Camel,
        CaseStyle::Underscored,
        CaseStyle::Dasherized,
        CaseStyle::Titleized,
        CaseStyle::Classified,
        CaseStyle::Humanized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Underscored => "underscored",
            CaseStyle::Dasherized => "dasherized",
            CaseStyle::Titleized => "titleized",
            CaseStyle::Classified => "classified",
            CaseStyle::Humanized => "humanized",
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "camel" => Ok(CaseStyle::Camel),
            "underscored" | "snake" => Ok(CaseStyle::Underscored),
            "dasherized" | "kebab" => Ok(CaseStyle::Dasherized),
            "titleized" | "title" => Ok(CaseStyle::Titleized),
            "classified" | "class" | "pascal" => Ok(CaseStyle::Classified),
            "humanized" | "human" | "sentence" => Ok(CaseStyle::Humanized),
            _ => Err(ParseStyleError(s.to_string())),
        }
    }
}

/// Re-case `s` under `style`.
pub fn to_style(s: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::Camel => camelize(s),
        CaseStyle::Underscored => underscored(s),
        CaseStyle::Dasherized => dasherize(s),
        CaseStyle::Titleized => titleize(s),
        CaseStyle::Classified => classify(s),
        CaseStyle::Humanized => humanize(s),
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '_'
}

/// Extract words, splitting on whitespace, `-` and `_`, between a lowercase
/// letter or digit and an uppercase letter (`fooBar`), and before the last
/// capital of an uppercase run followed by lowercase (`XMLParser`).
pub fn split_words(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    for segment in s.split(is_separator).filter(|seg| !seg.is_empty()) {
        let chars: Vec<(usize, char)> = segment.char_indices().collect();
        let mut start = 0;
        for i in 1..chars.len() {
            let prev = chars[i - 1].1;
            let cur = chars[i].1;
            let lower_to_upper = is_upper(cur) && (is_lower(prev) || prev.is_numeric());
            let acronym_end = is_upper(prev)
                && is_upper(cur)
                && chars.get(i + 1).is_some_and(|&(_, next)| is_lower(next));
            if lower_to_upper || acronym_end {
                words.push(&segment[start..chars[i].0]);
                start = chars[i].0;
            }
        }
        words.push(&segment[start..]);
    }
    words
}

/// First character uppercased, the rest lowercased.
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// `already_camel_cased` -> `alreadyCamelCased`.
pub fn camelize(s: &str) -> String {
    let mut words = split_words(s).into_iter();
    let mut out = match words.next() {
        Some(first) => first.to_lowercase(),
        None => return String::new(),
    };
    for word in words {
        out.push_str(&capitalize_word(word));
    }
    out
}

fn join_lowercase(s: &str, separator: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

/// `alreadyCamelCased` -> `already_camel_cased`.
pub fn underscored(s: &str) -> String {
    join_lowercase(s, "_")
}

/// `alreadyCamelCased` -> `already-camel-cased`.
pub fn dasherize(s: &str) -> String {
    join_lowercase(s, "-")
}

/// Lowercase everything, then capitalize the first letter of each word.
/// Separators are kept as written.
pub fn titleize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if is_separator(c) {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Identifier-style name: non-word characters dropped, each word
/// capitalized, no separators. `some_class-name` -> `SomeClassName`.
pub fn classify(s: &str) -> String {
    let spaced: String = s
        .chars()
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .collect();
    split_words(&spaced).into_iter().map(capitalize_word).collect()
}

/// Readable label: `author_id` -> `Author`, `employeeSalary` ->
/// `Employee salary`.
pub fn humanize(s: &str) -> String {
    let snake = underscored(s);
    let trimmed = snake.strip_suffix("_id").unwrap_or(&snake);
    capitalize(&trimmed.replace('_', " "))
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character, leave the rest untouched.
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Invert the case of every cased character.
pub fn swap_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if is_upper(c) {
            out.extend(c.to_lowercase());
        } else if is_lower(c) {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
