use serde::{Deserialize, Serialize};

/// `s` repeated `count` times, joined by `separator` when given.
pub fn repeat(s: &str, count: usize, separator: Option<&str>) -> String {
    match separator {
        Some(sep) => vec![s; count].join(sep),
        None => s.repeat(count),
    }
}

/// Which side of the text receives the fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PadSide {
    #[default]
    Left,
    Right,
    Both,
}

/// Pad `s` to `len` characters with the first character of `fill` (a space
/// when `fill` is empty). With [`PadSide::Both`] the odd character goes on
/// the left. Text already `len` long or longer is returned unchanged.
pub fn pad(s: &str, len: usize, fill: &str, side: PadSide) -> String {
    let fill = fill.chars().next().unwrap_or(' ');
    let missing = len.saturating_sub(s.chars().count());
    let fill_n = |n: usize| std::iter::repeat_n(fill, n).collect::<String>();

    match side {
        PadSide::Left => fill_n(missing) + s,
        PadSide::Right => format!("{}{}", s, fill_n(missing)),
        PadSide::Both => {
            let left = missing.div_ceil(2);
            format!("{}{}{}", fill_n(left), s, fill_n(missing - left))
        }
    }
}

pub fn lpad(s: &str, len: usize, fill: &str) -> String {
    pad(s, len, fill, PadSide::Left)
}

pub fn rpad(s: &str, len: usize, fill: &str) -> String {
    pad(s, len, fill, PadSide::Right)
}

pub fn lrpad(s: &str, len: usize, fill: &str) -> String {
    pad(s, len, fill, PadSide::Both)
}

pub fn rjust(s: &str, len: usize, fill: &str) -> String {
    lpad(s, len, fill)
}

pub fn ljust(s: &str, len: usize, fill: &str) -> String {
    rpad(s, len, fill)
}

pub fn center(s: &str, len: usize, fill: &str) -> String {
    lrpad(s, len, fill)
}
