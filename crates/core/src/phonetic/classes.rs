//! Phoneme classes: groups of phonemes that may stand in for each other.
//!
//! Table format: one row per phoneme, "PHONEME  CLASSNAME". The bundled
//! default is the CMU `cmudict.phones` table (vowel, stop, fricative, ...).

use std::collections::HashMap;

use super::strip_phoneme;

/// The CMU phone set with its manner classes.
const ARPABET_PHONES_DATA: &str = include_str!("cmudict.phones");

lazy_static::lazy_static! {
    static ref ARPABET_CLASSES: ClassIndex = ClassIndex::parse(ARPABET_PHONES_DATA);
}

/// Bidirectional phoneme/class mapping.
#[derive(Debug, Clone, Default)]
pub struct ClassIndex {
    phoneme_class: HashMap<String, String>,
    class_members: HashMap<String, Vec<String>>,
}

impl ClassIndex {
    /// Parse a class table. Rows that don't split into exactly two fields
    /// are skipped, as are repeat rows for an already-classified phoneme.
    pub fn parse(text: &str) -> Self {
        let mut index = ClassIndex::default();
        let mut skipped = 0usize;

        for line in text.lines() {
            let terms: Vec<&str> = line.split_whitespace().collect();
            if terms.len() != 2 {
                if !terms.is_empty() {
                    skipped += 1;
                }
                continue;
            }
            let phoneme = strip_phoneme(terms[0]);
            if phoneme.is_empty() || !index.insert(&phoneme, terms[1]) {
                skipped += 1;
            }
        }

        if skipped > 0 {
            log::debug!("Skipped {} malformed or duplicate class rows", skipped);
        }
        index
    }

    /// The bundled ARPABET class table.
    pub fn arpabet() -> Self {
        ARPABET_CLASSES.clone()
    }

    fn insert(&mut self, phoneme: &str, class: &str) -> bool {
        if self.phoneme_class.contains_key(phoneme) {
            return false;
        }
        self.phoneme_class
            .insert(phoneme.to_string(), class.to_string());
        self.class_members
            .entry(class.to_string())
            .or_default()
            .push(phoneme.to_string());
        true
    }

    /// Class label of `phoneme`, if it was listed.
    pub fn class_of(&self, phoneme: &str) -> Option<&str> {
        self.phoneme_class.get(phoneme).map(String::as_str)
    }

    /// Members of `class` in table order.
    pub fn members(&self, class: &str) -> Option<&[String]> {
        self.class_members.get(class).map(Vec::as_slice)
    }

    /// Members of the class `phoneme` belongs to (including `phoneme`).
    pub fn substitutes(&self, phoneme: &str) -> Option<&[String]> {
        self.class_of(phoneme).and_then(|class| self.members(class))
    }

    pub fn class_count(&self) -> usize {
        self.class_members.len()
    }

    pub fn phoneme_count(&self) -> usize {
        self.phoneme_class.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phoneme_class.is_empty()
    }
}
