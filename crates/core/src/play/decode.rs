//! Re-spell a phoneme sequence as sequences of dictionary words.
//!
//! Depth-first search over the phoneme trie. Every terminal node reached
//! along the way offers two branches: commit to a word there and restart at
//! the root, or keep walking so longer words (CAT inside CATALOG) get a
//! chance. A candidate is complete when the last phoneme lands on a terminal
//! node.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::phonetic::trie::{NodeId, PhonemeTrie};

/// Pick one word from a terminal node's word list.
///
/// Prefers the first listed word that appears in `original_words`, falling
/// back to a random one.
pub fn pick_word<'a, S, R>(words: &'a [String], original_words: &[S], rng: &mut R) -> Option<&'a str>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    words
        .iter()
        .find(|w| original_words.iter().any(|o| o.as_ref() == w.as_str()))
        .or_else(|| words.choose(rng))
        .map(String::as_str)
}

struct Search<'a, 'b, S, R: ?Sized> {
    trie: &'a PhonemeTrie,
    phonemes: &'b [String],
    original_words: &'b [S],
    rng: &'b mut R,
    limit: Option<usize>,
    words: Vec<&'a str>,
    found: Vec<Vec<&'a str>>,
}

impl<'a, 'b, S, R> Search<'a, 'b, S, R>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    fn full(&self) -> bool {
        self.limit.is_some_and(|max| self.found.len() >= max)
    }

    fn walk(&mut self, node: NodeId, pos: usize) {
        if self.full() {
            return;
        }
        let trie = self.trie;
        let Some(child) = trie.child(node, &self.phonemes[pos]) else {
            return;
        };
        let word = match trie.words_at(child) {
            Some(words) => pick_word(words, self.original_words, &mut *self.rng),
            None => None,
        };

        let next = pos + 1;
        if next == self.phonemes.len() {
            if let Some(word) = word {
                let mut candidate = Vec::with_capacity(self.words.len() + 1);
                candidate.extend_from_slice(&self.words);
                candidate.push(word);
                self.found.push(candidate);
            }
            return;
        }

        if let Some(word) = word {
            self.words.push(word);
            self.walk(PhonemeTrie::ROOT, next);
            self.words.pop();
        }
        self.walk(child, next);
    }
}

/// Every way to split `phonemes` into dictionary words, in search order.
///
/// Words are borrowed from the trie. `limit` caps the number of candidates collected; `None` searches
/// exhaustively. An empty sequence has no candidates.
pub fn decode<'a, S, R>(
    trie: &'a PhonemeTrie,
    phonemes: &[String],
    original_words: &[S],
    rng: &mut R,
    limit: Option<usize>,
) -> Vec<Vec<&'a str>>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    if phonemes.is_empty() {
        return Vec::new();
    }
    let mut search = Search {
        trie,
        phonemes,
        original_words,
        rng,
        limit,
        words: Vec::new(),
        found: Vec::new(),
    };
    search.walk(PhonemeTrie::ROOT, 0);
    search.found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetic::PhoneticIndex;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DICT: &str = "\
CAT  K AE1 T
CATALOG  K AE1 T AH0 L AO2 G
A  AH0
LOG  L AO1 G
RIGHT  R AY1 T
WRITE  R AY1 T
RITE  R AY1 T
";

    fn index() -> PhoneticIndex {
        PhoneticIndex::from_tables(DICT, "")
    }

    fn ph(s: &str) -> Vec<String> {
        s.split_whitespace().map(|p| p.to_string()).collect()
    }

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_pick_word_prefers_original() {
        let homophones = words("RIGHT WRITE RITE");
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(pick_word(&homophones, &["WRITE"], &mut rng), Some("WRITE"));
        }
    }

    #[test]
    fn test_pick_word_first_listed_original_wins() {
        let homophones = words("RIGHT WRITE RITE");
        let mut rng = StdRng::seed_from_u64(42);
        let original = ["RITE", "RIGHT"];
        assert_eq!(pick_word(&homophones, &original, &mut rng), Some("RIGHT"));
    }

    #[test]
    fn test_pick_word_random_fallback() {
        let homophones = words("RIGHT WRITE RITE");
        let mut rng = StdRng::seed_from_u64(42);
        let no_original: [&str; 0] = [];
        for _ in 0..10 {
            let word = pick_word(&homophones, &no_original, &mut rng).unwrap();
            assert!(homophones.iter().any(|w| w == word));
        }
    }

    #[test]
    fn test_pick_word_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(pick_word(&[], &["CAT"], &mut rng), None);
    }

    #[test]
    fn test_decode_single_word() {
        let index = index();
        let mut rng = StdRng::seed_from_u64(42);
        let found = decode(index.trie(), &ph("K AE T"), &["CAT"], &mut rng, None);
        assert_eq!(found, vec![words("CAT")]);
    }

    #[test]
    fn test_decode_explores_both_segmentations() {
        let index = index();
        let mut rng = StdRng::seed_from_u64(42);
        let found = decode(
            index.trie(),
            &ph("K AE T AH L AO G"),
            &["CATALOG"],
            &mut rng,
            None,
        );
        // Commit-first ordering: the split is found before the long word
        assert_eq!(found, vec![words("CAT A LOG"), words("CATALOG")]);
    }

    #[test]
    fn test_decode_concatenation_is_complete() {
        let index = index();
        let mut rng = StdRng::seed_from_u64(42);
        let original = words("LOG CAT A RIGHT");
        let mut phonemes = Vec::new();
        for word in &original {
            phonemes.extend(index.pronunciations(word).unwrap()[0].clone());
        }
        let found = decode(index.trie(), &phonemes, &original, &mut rng, None);
        assert!(found.iter().any(|c| *c == original), "{:?}", found);
    }

    #[test]
    fn test_decode_borrows_words_from_trie() {
        let index = index();
        let mut rng = StdRng::seed_from_u64(42);
        let found = decode(index.trie(), &ph("K AE T"), &["CAT"], &mut rng, None);
        let stored = &index.trie().words_for(&ph("K AE T")).unwrap()[0];
        assert!(std::ptr::eq(found[0][0], stored.as_str()));
    }

    #[test]
    fn test_decode_dead_end() {
        let index = index();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(decode(index.trie(), &ph("K AE Z"), &["CAT"], &mut rng, None).is_empty());
    }

    #[test]
    fn test_decode_non_terminal_end_discarded() {
        let index = index();
        let mut rng = StdRng::seed_from_u64(42);
        // K AE T AH is CAT + A, but K AE T AH L stops mid-word
        assert_eq!(
            decode(index.trie(), &ph("K AE T AH"), &["CAT"], &mut rng, None),
            vec![words("CAT A")]
        );
        assert!(decode(index.trie(), &ph("K AE T AH L"), &["CAT"], &mut rng, None).is_empty());
    }

    #[test]
    fn test_decode_empty_sequence() {
        let index = index();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(decode(index.trie(), &[], &["CAT"], &mut rng, None).is_empty());
    }

    #[test]
    fn test_decode_limit() {
        let index = index();
        let mut rng = StdRng::seed_from_u64(42);
        let found = decode(
            index.trie(),
            &ph("K AE T AH L AO G"),
            &["CATALOG"],
            &mut rng,
            Some(1),
        );
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_decode_homophone_prefers_original() {
        let index = index();
        let mut rng = StdRng::seed_from_u64(42);
        let found = decode(index.trie(), &ph("R AY T"), &["RITE"], &mut rng, None);
        assert_eq!(found, vec![words("RITE")]);
    }

    #[test]
    fn test_decode_seeded_is_deterministic() {
        let index = index();
        let phonemes = ph("R AY T R AY T");
        let no_original: [&str; 0] = [];
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            decode(index.trie(), &phonemes, &no_original, &mut rng, None)
        };
        assert_eq!(run(5), run(5));
    }
}
