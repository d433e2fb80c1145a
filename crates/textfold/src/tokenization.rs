/// True when `c` has distinct upper- and lowercase forms.
pub fn has_case(c: char) -> bool {
    !c.to_uppercase().eq(c.to_lowercase())
}

/// Uppercase: cased, and lowering it changes it.
pub fn is_upper(c: char) -> bool {
    !c.to_lowercase().eq(std::iter::once(c))
}

/// Lowercase: cased, and raising it changes it.
pub fn is_lower(c: char) -> bool {
    !c.to_uppercase().eq(std::iter::once(c))
}

/// Word characters are cased letters and alphanumerics; everything else
/// (whitespace, `-`, `_`, punctuation) separates words.
pub fn is_word_char(c: char) -> bool {
    has_case(c) || c.is_alphanumeric()
}

/// Split text into words: on whitespace runs by default, or on a literal
/// delimiter after trimming it from both ends. Blank text has no words.
pub fn words(s: &str, delimiter: Option<&str>) -> Vec<String> {
    if s.trim().is_empty() {
        return Vec::new();
    }
    match delimiter {
        Some(d) if !d.is_empty() => {
            let mut trimmed = s;
            while let Some(rest) = trimmed.strip_prefix(d) {
                trimmed = rest;
            }
            while let Some(rest) = trimmed.strip_suffix(d) {
                trimmed = rest;
            }
            trimmed.split(d).map(str::to_string).collect()
        }
        _ => s.split_whitespace().map(str::to_string).collect(),
    }
}

/// Each character as its own string.
pub fn chars(s: &str) -> Vec<String> {
    s.chars().map(String::from).collect()
}

/// Split on `\n`. Empty text is a single empty line.
pub fn lines(s: &str) -> Vec<String> {
    s.split('\n').map(str::to_string).collect()
}

/// Chunk text into pieces of `step` characters; the last piece may be
/// shorter. `step == 0` keeps the whole text as one piece.
pub fn chop(s: &str, step: usize) -> Vec<String> {
    if step == 0 {
        return vec![s.to_string()];
    }
    let chars: Vec<char> = s.chars().collect();
    chars.chunks(step).map(|chunk| chunk.iter().collect()).collect()
}
