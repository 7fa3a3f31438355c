//! Signature derivation.
//!
//! A word's signature is its characters sorted by code point and joined back into a
//! string. Two words share a signature exactly when they are anagrams of each other,
//! so the signature is the key of the jumble dict.

/// Returns the canonical signature of `word`.
///
/// The empty word maps to the empty signature. No case folding or trimming is done:
/// `"Tea"` and `"eat"` have different signatures.
pub fn signature(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}
