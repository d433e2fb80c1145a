/// `-?digits(.digits)?`
fn is_number_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(int) && frac.is_none_or(all_digits)
}

/// Parse a plain decimal number and round it to `decimals` places.
///
/// Empty text is `0.0`. Anything that is not `-?digits(.digits)?` once
/// trimmed yields `f64::NAN`, which callers must test for with `is_nan`.
pub fn to_number(s: &str, decimals: usize) -> f64 {
    if s.is_empty() {
        return 0.0;
    }
    let trimmed = s.trim();
    if !is_number_literal(trimmed) {
        return f64::NAN;
    }
    let Ok(value) = trimmed.parse::<f64>() else {
        return f64::NAN;
    };
    format!("{value:.decimals$}").parse().unwrap_or(f64::NAN)
}

/// Format `n` with `decimals` places and grouped thousands.
/// Non-finite input formats as an empty string.
pub fn number_format(n: f64, decimals: usize, decimal_sep: &str, thousands_sep: &str) -> String {
    if !n.is_finite() {
        return String::new();
    }

    let fixed = format!("{n:.decimals$}");
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (fixed.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };

    let mut out = String::from(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(thousands_sep);
        }
        out.push(c);
    }
    if let Some(frac) = frac_part {
        out.push_str(decimal_sep);
        out.push_str(frac);
    }
    out
}

/// Clamp a numeric parameter to a usable length: negative, NaN and infinite
/// values become 0, fractions are truncated.
pub fn to_positive(n: f64) -> usize {
    if !n.is_finite() || n <= 0.0 {
        return 0;
    }
    n as usize
}
