/// Letters sorted by code point after case folding; equal keys mean anagrams.
pub type CanonicalKey = String;

/// Upper-case a single char, keeping it unchanged when its upper-case form
/// spans several chars so that folding never changes a word's length.
pub fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Fold a whole word with [`fold_char`].
pub fn fold_case(word: &str) -> String {
    word.chars().map(fold_char).collect()
}

/// Canonical anagram key of `letters`.
///
/// ```
/// assert_eq!(word_jumble::canonical_key("dog"), "DGO");
/// ```
pub fn canonical_key(letters: &str) -> CanonicalKey {
    let mut chars: Vec<char> = letters.chars().map(fold_char).collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}
