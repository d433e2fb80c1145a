//! Locale-naive text normalization and comparison.
//!
//! Pure functions over `&str`: Levenshtein distance, natural ordering,
//! word-boundary truncation, case-style conversion, Latin transliteration and
//! slugs, plus the smaller helpers around them (trimming, padding, HTML
//! escaping, number parsing). Nothing holds state between calls.

pub mod casing;
pub mod distance;
pub mod html;
pub mod natural;
pub mod normalization;
pub mod numbers;
pub mod padding;
pub mod slug;
pub mod strings;
pub mod tokenization;
pub mod transliteration;
pub mod truncation;

pub use casing::{to_style, CaseStyle, ParseStyleError};
pub use distance::levenshtein;
pub use natural::{natural_cmp, natural_sort};
pub use slug::slugify;
pub use truncation::{truncate, DEFAULT_MARKER};
