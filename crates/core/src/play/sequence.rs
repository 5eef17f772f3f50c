//! Normalized words to one flat phoneme sequence.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, WordplayError};
use crate::phonetic::PhoneticIndex;

/// Concatenate one randomly chosen pronunciation per word.
///
/// Fails on the first word missing from the dictionary; word boundaries are
/// not kept in the output.
pub fn sequence<S, R>(index: &PhoneticIndex, words: &[S], rng: &mut R) -> Result<Vec<String>>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut phonemes = Vec::new();
    for word in words {
        let word = word.as_ref();
        let variant = index
            .pronunciations(word)
            .and_then(|variants| variants.choose(rng))
            .ok_or_else(|| WordplayError::UnknownWord(word.to_string()))?;
        phonemes.extend(variant.iter().cloned());
    }
    Ok(phonemes)
}
