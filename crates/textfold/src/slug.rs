use crate::casing::dasherize;
use crate::transliteration::fold;

/// Lowercase, ASCII-only, hyphen-separated identifier for URLs and paths.
///
/// Table diacritics are folded to ASCII, any other character that is not an
/// ASCII word character, whitespace or `-` becomes a hyphen, then runs of
/// separators collapse to single hyphens with none at either end.
/// `slugify(slugify(x)) == slugify(x)`.
pub fn slugify(s: &str) -> String {
    let folded: String = s
        .to_lowercase()
        .chars()
        .map(|c| {
            let c = fold(c).unwrap_or(c);
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c.is_whitespace() {
                c
            } else {
                '-'
            }
        })
        .collect();

    dasherize(&folded).trim_matches('-').to_string()
}
