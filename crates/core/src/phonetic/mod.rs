//! Dictionary-backed phonetic lookup structures.

pub mod classes;
pub mod index;
pub mod trie;

pub use classes::ClassIndex;
pub use index::PhoneticIndex;
pub use trie::PhonemeTrie;

/// Canonical form of an ARPABET symbol: letters only, uppercased.
///
/// Stress digits are dropped, so "AE1", "AE0" and "ae" all become "AE".
/// Dictionary phonemes and class-table phonemes both go through this.
pub fn strip_phoneme(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
