/// Latin diacritics and their closest ASCII letter, consulted in order.
/// Lowercase only; callers lowercase before folding.
pub const TABLE: &[(char, char)] = &[
    ('ą', 'a'),
    ('à', 'a'),
    ('á', 'a'),
    ('ä', 'a'),
    ('â', 'a'),
    ('ã', 'a'),
    ('å', 'a'),
    ('æ', 'a'),
    ('ă', 'a'),
    ('ć', 'c'),
    ('č', 'c'),
    ('ĉ', 'c'),
    ('ę', 'e'),
    ('è', 'e'),
    ('é', 'e'),
    ('ë', 'e'),
    ('ê', 'e'),
    ('ĝ', 'g'),
    ('ĥ', 'h'),
    ('ì', 'i'),
    ('í', 'i'),
    ('ï', 'i'),
    ('î', 'i'),
    ('ĵ', 'j'),
    ('ł', 'l'),
    ('ľ', 'l'),
    ('ń', 'n'),
    ('ň', 'n'),
    ('ò', 'o'),
    ('ó', 'o'),
    ('ö', 'o'),
    ('ő', 'o'),
    ('ô', 'o'),
    ('õ', 'o'),
    ('ð', 'o'),
    ('ø', 'o'),
    ('ś', 's'),
    ('ș', 's'),
    ('š', 's'),
    ('ŝ', 's'),
    ('ť', 't'),
    ('ț', 't'),
    ('ŭ', 'u'),
    ('ù', 'u'),
    ('ú', 'u'),
    ('ü', 'u'),
    ('ű', 'u'),
    ('û', 'u'),
    ('ñ', 'n'),
    ('ÿ', 'y'),
    ('ý', 'y'),
    ('ç', 'c'),
    ('ż', 'z'),
    ('ź', 'z'),
    ('ž', 'z'),
];

/// ASCII fold for `c`, if the table has one.
pub fn fold(c: char) -> Option<char> {
    TABLE
        .iter()
        .find(|(source, _)| *source == c)
        .map(|&(_, ascii)| ascii)
}

/// Replace every table character with its fold; everything else is kept.
pub fn transliterate(s: &str) -> String {
    s.chars().map(|c| fold(c).unwrap_or(c)).collect()
}
