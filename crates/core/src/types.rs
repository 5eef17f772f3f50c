use serde::{Deserialize, Serialize};

/// Outcome of one successful wordplay transform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayResult {
    /// Styled output line
    pub text: String,
    /// Selected dictionary words (normalized, unstyled)
    pub words: Vec<String>,
    /// Normalized input words
    pub original_words: Vec<String>,
    /// Phonemes of the input before mutation
    pub phonemes: Vec<String>,
    /// Phonemes that were decoded into `words`
    pub mutated_phonemes: Vec<String>,
    /// Attempts used, including the successful one
    pub attempts: usize,
    /// Candidates the decoder found on the successful attempt
    pub candidate_count: usize,
}

impl PlayResult {
    /// Serialize for JSON output.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "text": self.text,
            "words": self.words,
            "original": self.original_words,
            "phonemes": self.phonemes,
            "mutated": self.mutated_phonemes,
            "attempts": self.attempts,
            "candidates": self.candidate_count,
        })
    }
}
