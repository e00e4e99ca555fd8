// File: src/core/canonical.rs

/// Maps a word to its canonical key: every character lowercased, then
/// sorted by code point and concatenated.
///
/// Uses the full Unicode lowercase mapping, so a single character may expand
/// to several (e.g. 'İ'). The empty string maps to the empty string.
pub fn canonicalize(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// True when the word is present, non-empty and made only of letters.
///
/// "Letter" means the Unicode `Alphabetic` property as reported by
/// [`char::is_alphabetic`]. The rule does not depend on the locale, and
/// accented or non-Latin letters count. Digits, whitespace, apostrophes,
/// hyphens and other punctuation or symbols do not.
pub fn is_valid<'a>(word: impl Into<Option<&'a str>>) -> bool {
    match word.into() {
        Some(w) if !w.is_empty() => w.chars().all(char::is_alphabetic),
        _ => false,
    }
}
