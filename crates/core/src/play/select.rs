//! Choose one candidate word sequence.

use rand::seq::SliceRandom;
use rand::Rng;

/// Number of words in `candidate` that also appear in `original_words`.
pub fn score<W, S>(candidate: &[W], original_words: &[S]) -> usize
where
    W: AsRef<str>,
    S: AsRef<str>,
{
    candidate
        .iter()
        .filter(|w| original_words.iter().any(|o| o.as_ref() == w.as_ref()))
        .count()
}

/// Shuffle the candidates and return the first one with the highest score.
///
/// Shuffling first spreads ties across candidates instead of always favoring
/// search order. Returns `None` when there are no candidates.
pub fn select<W, S, R>(mut candidates: Vec<Vec<W>>, original_words: &[S], rng: &mut R) -> Option<Vec<W>>
where
    W: AsRef<str>,
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    candidates.shuffle(rng);

    let mut best: Option<(usize, Vec<W>)> = None;
    for candidate in candidates {
        let s = score(&candidate, original_words);
        if best.as_ref().map_or(true, |(best_score, _)| s > *best_score) {
            best = Some((s, candidate));
        }
    }
    best.map(|(_, candidate)| candidate)
}
