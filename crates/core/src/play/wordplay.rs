//! Retry loop tying the pipeline together.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::phonetic::PhoneticIndex;
use crate::types::PlayResult;

use super::decode::decode;
use super::mutate::{mutate, mutation_count};
use super::select::select;
use super::sequence::sequence;
use super::text::{normalize_words, split_tokens, stylize};

/// Tuning knobs for [`Wordplay`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordplayConfig {
    /// Hard cap on mutate/decode/select rounds per line
    pub max_attempts: usize,
    /// One phoneme edit per this many input words
    pub words_per_mutation: usize,
    /// Lower bound on phoneme edits per attempt
    pub min_mutations: usize,
    /// Stop the decoder after this many candidates (None = exhaustive)
    pub max_candidates: Option<usize>,
}

impl Default for WordplayConfig {
    fn default() -> Self {
        Self {
            max_attempts: 100,
            words_per_mutation: 5,
            min_mutations: 1,
            max_candidates: None,
        }
    }
}

/// A loaded dictionary plus settings; read-only, so one instance can serve
/// any number of lines (and threads).
#[derive(Debug, Clone)]
pub struct Wordplay {
    index: PhoneticIndex,
    config: WordplayConfig,
}

impl Wordplay {
    pub fn new(index: PhoneticIndex, config: WordplayConfig) -> Self {
        Self { index, config }
    }

    pub fn index(&self) -> &PhoneticIndex {
        &self.index
    }

    pub fn config(&self) -> &WordplayConfig {
        &self.config
    }

    /// Styled wordplay on `line`, or `None` if no different respelling was
    /// found.
    pub fn transform<R: Rng + ?Sized>(&self, line: &str, rng: &mut R) -> Option<String> {
        self.play(line, rng).map(|result| result.text)
    }

    /// Like [`Wordplay::transform`], but returns the intermediate phonemes
    /// and attempt count along with the text.
    ///
    /// Gives up immediately if any word is missing from the dictionary;
    /// otherwise makes up to `max_attempts` fresh mutations of the original
    /// phonemes and keeps the first selection that differs from the input.
    pub fn play<R: Rng + ?Sized>(&self, line: &str, rng: &mut R) -> Option<PlayResult> {
        let tokens = split_tokens(line);
        if tokens.is_empty() {
            return None;
        }
        let original_words = normalize_words(&tokens);
        let num_mutations = mutation_count(
            original_words.len(),
            self.config.words_per_mutation,
            self.config.min_mutations,
        );

        let phonemes = match sequence(&self.index, &original_words, rng) {
            Ok(phonemes) => phonemes,
            Err(e) => {
                log::debug!("Skipping line: {}", e);
                return None;
            }
        };

        for attempt in 1..=self.config.max_attempts {
            let mutated = mutate(&self.index, &phonemes, num_mutations, rng);
            let candidates = decode(
                self.index.trie(),
                &mutated,
                &original_words,
                rng,
                self.config.max_candidates,
            );
            let candidate_count = candidates.len();

            match select(candidates, &original_words, rng) {
                Some(words) if words != original_words => {
                    log::debug!(
                        "Attempt {}: accepted {:?} from {} candidates",
                        attempt,
                        words,
                        candidate_count
                    );
                    let words: Vec<String> = words.into_iter().map(str::to_string).collect();
                    let text = stylize(&words, &tokens).join(" ");
                    return Some(PlayResult {
                        text,
                        words,
                        original_words,
                        phonemes,
                        mutated_phonemes: mutated,
                        attempts: attempt,
                        candidate_count,
                    });
                }
                Some(_) => log::debug!("Attempt {}: respelled to the input", attempt),
                None => log::debug!("Attempt {}: no candidates for {:?}", attempt, mutated),
            }
        }

        log::debug!(
            "No wordplay for {:?} after {} attempts",
            line,
            self.config.max_attempts
        );
        None
    }
}
