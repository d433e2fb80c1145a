use std::cmp::Ordering;

/// A maximal run extracted from a text for natural comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// A `.` immediately followed by digits, e.g. `.25`.
    Fraction(&'a str),
    /// A run of ASCII digits.
    Integer(&'a str),
    /// A run of anything else.
    Text(&'a str),
}

impl<'a> Token<'a> {
    /// The token's text as it appeared in the input.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Token::Fraction(s) | Token::Integer(s) | Token::Text(s) => s,
        }
    }

    /// Integer and fractional digit strings, if the token is numeric.
    fn numeric_parts(&self) -> Option<(&'a str, &'a str)> {
        match *self {
            Token::Integer(s) => Some((s, "")),
            Token::Fraction(s) => Some(("", &s[1..])),
            Token::Text(_) => None,
        }
    }
}

/// Split text into fraction, integer and non-digit tokens, left to right.
///
/// A fraction token is only recognized where a token begins, so `"v1.5"`
/// yields `v`, `1`, `.5` while `"a.5"` yields `a.`, `5`.
pub fn tokenize(s: &str) -> Vec<Token<'_>> {
    let bytes = s.as_bytes();
    let mut tokens = Vec::new();
    let mut start = 0;

    while start < bytes.len() {
        let is_fraction =
            bytes[start] == b'.' && bytes.get(start + 1).is_some_and(u8::is_ascii_digit);

        if is_fraction {
            let end = digit_run_end(bytes, start + 1);
            tokens.push(Token::Fraction(&s[start..end]));
            start = end;
        } else if bytes[start].is_ascii_digit() {
            let end = digit_run_end(bytes, start);
            tokens.push(Token::Integer(&s[start..end]));
            start = end;
        } else {
            // ASCII digits never occur inside a multi-byte sequence, so every
            // digit position is a char boundary.
            let end = bytes[start..]
                .iter()
                .position(u8::is_ascii_digit)
                .map_or(bytes.len(), |offset| start + offset);
            tokens.push(Token::Text(&s[start..end]));
            start = end;
        }
    }

    tokens
}

fn digit_run_end(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(bytes.len(), |offset| from + offset)
}

/// Compare two numeric tokens by value without a fixed-width parse.
fn numeric_cmp(a: (&str, &str), b: (&str, &str)) -> Ordering {
    let a_int = a.0.trim_start_matches('0');
    let b_int = b.0.trim_start_matches('0');
    let a_frac = a.1.trim_end_matches('0');
    let b_frac = b.1.trim_end_matches('0');

    a_int
        .len()
        .cmp(&b_int.len())
        .then_with(|| a_int.cmp(b_int))
        .then_with(|| a_frac.cmp(b_frac))
}

/// Text tokens below `'0'` sort before every number, other text tokens
/// after, so no text token can fall between two numbers.
fn class_rank(token: &Token<'_>) -> u8 {
    match token {
        Token::Text(s) if s.starts_with(|c: char| c < '0') => 0,
        Token::Text(_) => 2,
        Token::Integer(_) | Token::Fraction(_) => 1,
    }
}

/// Total preorder on tokens: class rank, then value for numbers, then code
/// points for text.
fn token_cmp(x: &Token<'_>, y: &Token<'_>) -> Ordering {
    class_rank(x).cmp(&class_rank(y)).then_with(|| {
        match (x.numeric_parts(), y.numeric_parts()) {
            (Some(xn), Some(yn)) => numeric_cmp(xn, yn),
            _ => x.as_str().cmp(y.as_str()),
        }
    })
}

/// Order two texts so that embedded numbers compare by value.
///
/// `"file2"` sorts before `"file10"`. Empty text sorts before anything else,
/// and distinct texts never compare equal.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    if a.is_empty() {
        return Ordering::Less;
    }
    if b.is_empty() {
        return Ordering::Greater;
    }

    let a_tokens = tokenize(a);
    let b_tokens = tokenize(b);

    for (x, y) in a_tokens.iter().zip(&b_tokens) {
        let ord = token_cmp(x, y);
        if ord != Ordering::Equal {
            return ord;
        }
    }

    a_tokens
        .len()
        .cmp(&b_tokens.len())
        .then_with(|| a.cmp(b))
}

/// Stable in-place sort in natural order.
pub fn natural_sort<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
}
