//! Phoneme trie: paths are pronunciations, terminal nodes list the words
//! spelled by that exact path.

use std::collections::HashMap;

/// Index of a node in the trie arena.
pub type NodeId = usize;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<String, NodeId>,
    /// Words whose pronunciation ends here, in insertion order.
    words: Option<Vec<String>>,
}

/// Arena-backed trie keyed by phoneme.
#[derive(Debug, Clone)]
pub struct PhonemeTrie {
    nodes: Vec<TrieNode>,
}

impl Default for PhonemeTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PhonemeTrie {
    pub const ROOT: NodeId = 0;

    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Add `word` at the end of the `phonemes` path, creating edges as needed.
    ///
    /// Empty pronunciations are ignored. A word is listed once per node even
    /// if several of its variants lead there.
    pub fn insert(&mut self, phonemes: &[String], word: &str) {
        if phonemes.is_empty() {
            return;
        }
        let mut node = Self::ROOT;
        for phoneme in phonemes {
            node = match self.nodes[node].children.get(phoneme) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(phoneme.clone(), next);
                    next
                }
            };
        }
        let words = self.nodes[node].words.get_or_insert_with(Vec::new);
        if !words.iter().any(|w| w == word) {
            words.push(word.to_string());
        }
    }

    /// Follow the edge labelled `phoneme` out of `node`.
    pub fn child(&self, node: NodeId, phoneme: &str) -> Option<NodeId> {
        self.nodes.get(node)?.children.get(phoneme).copied()
    }

    /// Terminal word list of `node`, if any word ends there.
    pub fn words_at(&self, node: NodeId) -> Option<&[String]> {
        self.nodes.get(node)?.words.as_deref()
    }

    /// Walk the full `phonemes` path from the root.
    pub fn find(&self, phonemes: &[String]) -> Option<NodeId> {
        phonemes
            .iter()
            .try_fold(Self::ROOT, |node, phoneme| self.child(node, phoneme))
    }

    /// Words spelled by exactly `phonemes`.
    pub fn words_for(&self, phonemes: &[String]) -> Option<&[String]> {
        self.find(phonemes).and_then(|node| self.words_at(node))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
