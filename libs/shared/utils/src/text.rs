//! Text helpers shared by the interpreter and the local filters.
//!
//! Everything here works on "folded" text: lower-cased, NFD-decomposed and
//! stripped of combining marks, so `"Cardiólogo"` and `"cardiologo"` compare
//! equal.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Lower-case, strip diacritics and trim.
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Capitalize the first letter of every space-separated word.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether `word` occurs in `haystack` delimited by non-alphanumeric
/// characters (or the ends of the text). Both arguments are expected to be
/// folded already. Short place names such as `"ate"` would otherwise fire
/// inside ordinary words like `"atencion"`.
pub fn contains_word(haystack: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }

    haystack.match_indices(word).any(|(start, matched)| {
        let starts_word = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let ends_word = haystack[start + matched.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        starts_word && ends_word
    })
}
