//! Class-aware random edits to a phoneme sequence.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::phonetic::PhoneticIndex;

/// Number of edits for a line of `num_words` words: one per
/// `words_per_mutation` words, never fewer than `min_mutations`.
pub fn mutation_count(num_words: usize, words_per_mutation: usize, min_mutations: usize) -> usize {
    (num_words / words_per_mutation.max(1)).max(min_mutations)
}

/// Apply `count` edits to a copy of `phonemes`.
///
/// Each edit picks a position in the current sequence. A phoneme whose class
/// has a single member is deleted; otherwise it is replaced by a random
/// member of its class, which may be itself. Unclassified phonemes are left
/// alone. The result is never longer than the input and at most `count`
/// shorter.
pub fn mutate<R>(index: &PhoneticIndex, phonemes: &[String], count: usize, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let mut mutated = phonemes.to_vec();
    for _ in 0..count {
        if mutated.is_empty() {
            break;
        }
        let idx = rng.gen_range(0..mutated.len());
        let Some(class) = index.class_of(&mutated[idx]) else {
            log::debug!("No class for phoneme {}, leaving it", mutated[idx]);
            continue;
        };
        match index.class_members(class) {
            Some([_]) => {
                mutated.remove(idx);
            }
            Some(members) => {
                if let Some(replacement) = members.choose(rng) {
                    mutated[idx] = replacement.clone();
                }
            }
            None => {}
        }
    }
    mutated
}
