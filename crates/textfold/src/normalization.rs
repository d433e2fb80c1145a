/// Trim and collapse every whitespace run to one space.
pub fn clean(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_space = false;
    for c in text.trim().chars() {
        if c.is_whitespace() {
            if !prev_space {
                result.push(' ');
                prev_space = true;
            }
        } else {
            result.push(c);
            prev_space = false;
        }
    }
    result
}

/// Empty or whitespace only.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

fn trim_set(chars: Option<&str>) -> impl Fn(char) -> bool + '_ {
    move |c| match chars {
        Some(set) if !set.is_empty() => set.contains(c),
        _ => c.is_whitespace(),
    }
}

/// Trim whitespace from both ends, or any character of `chars` when given.
pub fn trim<'a>(text: &'a str, chars: Option<&str>) -> &'a str {
    text.trim_matches(trim_set(chars))
}

/// Trim from the start only.
pub fn ltrim<'a>(text: &'a str, chars: Option<&str>) -> &'a str {
    text.trim_start_matches(trim_set(chars))
}

/// Trim from the end only.
pub fn rtrim<'a>(text: &'a str, chars: Option<&str>) -> &'a str {
    text.trim_end_matches(trim_set(chars))
}

pub fn strip<'a>(text: &'a str, chars: Option<&str>) -> &'a str {
    trim(text, chars)
}

pub fn lstrip<'a>(text: &'a str, chars: Option<&str>) -> &'a str {
    ltrim(text, chars)
}

pub fn rstrip<'a>(text: &'a str, chars: Option<&str>) -> &'a str {
    rtrim(text, chars)
}
