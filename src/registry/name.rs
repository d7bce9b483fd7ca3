//! Surah name normalization
//!
//! Names arrive from free-text form fields in many transliterations
//! ("An-Naba'", "an naba", "An-Nabaʾ"). Normalization folds them to one key:
//! - Lowercase
//! - Fold accented Latin letters to their base letter
//! - Drop combining marks, dashes, apostrophes, ayn/hamza signs and whitespace

/// Characters removed outright
const STRIPPED: &[char] = &[
    '-', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', // dashes
    '\'', '`', '\u{00B4}', '\u{2018}', '\u{2019}', '\u{02BB}', '\u{02BC}', // apostrophes
    '\u{02BE}', // Modifier letter right half ring (hamza)
    '\u{02BF}', // Modifier letter left half ring (ayn)
    '.', '_',
];

/// Accented transliteration letters folded to ASCII
const FOLDS: &[(char, char)] = &[
    ('ā', 'a'),
    ('á', 'a'),
    ('â', 'a'),
    ('à', 'a'),
    ('ī', 'i'),
    ('í', 'i'),
    ('î', 'i'),
    ('ū', 'u'),
    ('ú', 'u'),
    ('û', 'u'),
    ('ḥ', 'h'),
    ('ḫ', 'h'),
    ('ṣ', 's'),
    ('š', 's'),
    ('ḍ', 'd'),
    ('ṭ', 't'),
    ('ẓ', 'z'),
    ('ż', 'z'),
    ('ḏ', 'd'),
    ('ṯ', 't'),
    ('ġ', 'g'),
    ('ǧ', 'j'),
];

/// Combining diacritical marks block
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Normalize a surah name (or any form label) to its lookup key
pub fn normalize_name(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() || STRIPPED.contains(&c) || is_combining_mark(c) {
            continue;
        }
        match FOLDS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => result.push(*to),
            None => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize_name("An-Naba"), "annaba");
        assert_eq!(normalize_name("  an naba  "), "annaba");
        assert_eq!(normalize_name("An-Naba'"), "annaba");
        assert_eq!(normalize_name("AN-NABA"), "annaba");
    }

    #[test]
    fn test_normalize_apostrophes() {
        assert_eq!(normalize_name("An-Nazi'at"), "annaziat");
        assert_eq!(normalize_name("An-Nazi’at"), "annaziat");
        assert_eq!(normalize_name("An-Naziʿat"), "annaziat");
        assert_eq!(normalize_name("'Abasa"), "abasa");
    }

    #[test]
    fn test_normalize_diacritics() {
        assert_eq!(normalize_name("Al-Fātiḥah"), "alfatihah");
        assert_eq!(normalize_name("Ṭā Hā"), "taha");
        // Decomposed form: a + combining macron
        assert_eq!(normalize_name("Ya\u{0304}si\u{0304}n"), "yasin");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name(" - ' "), "");
    }
}
