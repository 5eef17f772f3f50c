//! PhoneticIndex: everything built from the pronouncing dictionary and the
//! phoneme class table.
//!
//! Dictionary format (CMU style): "WORD  PH1 PH2 PH3 ...", with alternate
//! pronunciations written "WORD(2)  PH1 PH2 ...". Lines that don't start with
//! an uppercase letter (comments, punctuation entries) are ignored.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Result, WordplayError};

use super::classes::ClassIndex;
use super::strip_phoneme;
use super::trie::PhonemeTrie;

/// Read-only lookup structures shared by every transform.
#[derive(Debug, Clone, Default)]
pub struct PhoneticIndex {
    pronunciations: HashMap<String, Vec<Vec<String>>>,
    trie: PhonemeTrie,
    classes: ClassIndex,
}

/// One parsed dictionary row.
fn parse_dict_line(line: &str) -> Option<(String, Vec<String>)> {
    if !line.starts_with(|c: char| c.is_ascii_uppercase()) {
        return None;
    }
    let mut terms = line.split_whitespace();
    let word_raw = terms.next()?;

    // WORD(2) -> WORD
    let word = word_raw
        .split('(')
        .next()
        .unwrap_or(word_raw)
        .to_uppercase();

    let phonemes: Vec<String> = terms
        .map(strip_phoneme)
        .filter(|p| !p.is_empty())
        .collect();

    if word.is_empty() || phonemes.is_empty() {
        return None;
    }
    Some((word, phonemes))
}

/// Read a table file, tolerating the Latin-1 bytes some cmudict releases carry.
fn read_table(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| WordplayError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

impl PhoneticIndex {
    /// Build from in-memory dictionary and class tables.
    pub fn from_tables(dict: &str, classes: &str) -> Self {
        Self::with_classes(dict, ClassIndex::parse(classes))
    }

    /// Build from an in-memory dictionary and an already parsed class index.
    pub fn with_classes(dict: &str, classes: ClassIndex) -> Self {
        let mut pronunciations: HashMap<String, Vec<Vec<String>>> = HashMap::new();
        let mut trie = PhonemeTrie::new();
        let mut skipped = 0usize;

        for line in dict.lines() {
            match parse_dict_line(line) {
                Some((word, phonemes)) => {
                    // Insert in row order so homophone lists follow the dictionary
                    trie.insert(&phonemes, &word);
                    pronunciations.entry(word).or_default().push(phonemes);
                }
                None => {
                    if line.starts_with(|c: char| c.is_ascii_uppercase()) {
                        skipped += 1;
                    }
                }
            }
        }

        if skipped > 0 {
            log::debug!("Skipped {} malformed dictionary rows", skipped);
        }

        let index = Self {
            pronunciations,
            trie,
            classes,
        };
        log::info!(
            "Built phonetic index: {} words, {} pronunciations, {} trie nodes, {} phoneme classes",
            index.word_count(),
            index.pronunciation_count(),
            index.trie.node_count(),
            index.classes.class_count(),
        );
        index
    }

    /// Load the dictionary at `dict_path` and the class table at
    /// `classes_path`, or the bundled ARPABET classes when no path is given.
    ///
    /// Fails if either file is unreadable.
    pub fn load(dict_path: &Path, classes_path: Option<&Path>) -> Result<Self> {
        let classes = match classes_path {
            Some(path) => ClassIndex::parse(&read_table(path)?),
            None => ClassIndex::arpabet(),
        };
        if classes.is_empty() {
            log::warn!("Phoneme class table is empty; mutations will leave phonemes unchanged");
        }
        let dict = read_table(dict_path)?;
        Ok(Self::with_classes(&dict, classes))
    }

    /// All pronunciation variants of a normalized word.
    pub fn pronunciations(&self, word: &str) -> Option<&[Vec<String>]> {
        self.pronunciations.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.pronunciations.contains_key(word)
    }

    pub fn class_of(&self, phoneme: &str) -> Option<&str> {
        self.classes.class_of(phoneme)
    }

    pub fn class_members(&self, class: &str) -> Option<&[String]> {
        self.classes.members(class)
    }

    pub fn trie(&self) -> &PhonemeTrie {
        &self.trie
    }

    pub fn classes(&self) -> &ClassIndex {
        &self.classes
    }

    pub fn word_count(&self) -> usize {
        self.pronunciations.len()
    }

    pub fn pronunciation_count(&self) -> usize {
        self.pronunciations.values().map(Vec::len).sum()
    }

    pub fn class_count(&self) -> usize {
        self.classes.class_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DICT: &str = "\
;;; comment line
!EXCLAMATION-POINT  EH2 K S K L AH0 M EY1 SH AH0 N P OY2 N T
CAT  K AE1 T
TOMATO  T AH0 M EY1 T OW2
TOMATO(1)  T AH0 M AA1 T OW2
READ  R IY1 D
RED  R EH1 D
READ(1)  R EH1 D
LONELY
";

    const PHONES: &str = "K stop\nT stop\nAE vowel\n";

    #[test]
    fn test_parse_dict_line() {
        let (word, phonemes) = parse_dict_line("CAT  K AE1 T").unwrap();
        assert_eq!(word, "CAT");
        assert_eq!(phonemes, vec!["K", "AE", "T"]);
    }

    #[test]
    fn test_parse_dict_line_variant_suffix() {
        let (word, _) = parse_dict_line("TOMATO(1)  T AH0 M AA1 T OW2").unwrap();
        assert_eq!(word, "TOMATO");
    }

    #[test]
    fn test_parse_dict_line_rejects() {
        assert!(parse_dict_line(";;; comment").is_none());
        assert!(parse_dict_line("!EXCLAMATION  EH2 K").is_none());
        assert!(parse_dict_line("lowercase  L OW1").is_none());
        assert!(parse_dict_line("LONELY").is_none());
        assert!(parse_dict_line("").is_none());
    }

    #[test]
    fn test_variants_collected_in_order() {
        let index = PhoneticIndex::from_tables(DICT, PHONES);
        let variants = index.pronunciations("TOMATO").unwrap();
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0], vec!["T", "AH", "M", "EY", "T", "OW"]);
        assert_eq!(variants[1], vec!["T", "AH", "M", "AA", "T", "OW"]);
    }

    #[test]
    fn test_counts() {
        let index = PhoneticIndex::from_tables(DICT, PHONES);
        // CAT, TOMATO, READ, RED
        assert_eq!(index.word_count(), 4);
        assert_eq!(index.pronunciation_count(), 6);
        assert_eq!(index.class_count(), 2);
        assert!(!index.contains("LONELY"));
        assert!(!index.contains("!EXCLAMATION-POINT"));
    }

    #[test]
    fn test_trie_holds_every_variant() {
        let index = PhoneticIndex::from_tables(DICT, PHONES);
        for word in ["CAT", "TOMATO", "READ", "RED"] {
            for variant in index.pronunciations(word).unwrap() {
                let words = index.trie().words_for(variant).unwrap();
                assert!(words.iter().any(|w| w == word), "{} missing", word);
            }
        }
    }

    #[test]
    fn test_homophones_follow_dictionary_order() {
        let index = PhoneticIndex::from_tables(DICT, PHONES);
        let r_eh_d: Vec<String> = vec!["R".into(), "EH".into(), "D".into()];
        assert_eq!(index.trie().words_for(&r_eh_d).unwrap(), ["RED", "READ"]);
    }

    #[test]
    fn test_class_lookup_through_index() {
        let index = PhoneticIndex::from_tables(DICT, PHONES);
        assert_eq!(index.class_of("K"), Some("stop"));
        assert_eq!(index.class_members("stop").unwrap(), ["K", "T"]);
        assert!(index.class_of("ZH").is_none());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = PhoneticIndex::load(Path::new("/definitely/not/here/cmudict"), None)
            .unwrap_err();
        assert!(matches!(err, WordplayError::Io { .. }));
    }
}
