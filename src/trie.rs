//! Prefix tree over the lowercase ASCII alphabet.
//!
//! Each node carries exactly 26 owned child slots addressed by
//! `char as usize - 'a' as usize`, plus an end-of-word flag. Characters
//! outside `a..=z` are rejected explicitly instead of being mapped to a
//! wild slot: `insert` fails before touching the tree, and queries simply
//! miss.

use crate::error::{DsaError, DsaResult};

const ALPHABET_LEN: usize = 26;
const EMPTY_CHILD: Option<Box<TrieNode>> = None;

#[derive(Debug, Clone)]
struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_LEN],
    is_end_of_word: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: [EMPTY_CHILD; ALPHABET_LEN],
            is_end_of_word: false,
        }
    }
}

/// Prefix tree storing lowercase words.
///
/// # Examples
///
/// ```
/// use dsakit::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("car").unwrap();
/// trie.insert("cat").unwrap();
/// trie.insert("dog").unwrap();
///
/// assert!(trie.contains("cat"));
/// assert!(!trie.contains("ca"));
/// assert!(trie.starts_with("ca"));
/// assert_eq!(trie.words_with_prefix("ca"), vec!["car", "cat"]);
/// ```
#[derive(Debug, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// Insert a word, creating one node per character.
    ///
    /// The whole word is validated up front, so a rejected character leaves
    /// the trie untouched. Re-inserting a stored word is a no-op.
    pub fn insert(&mut self, word: &str) -> DsaResult<()> {
        let slots = Self::slots_for(word)?;
        let mut current = &mut self.root;
        for slot in slots {
            current = current.children[slot].get_or_insert_with(|| Box::new(TrieNode::new()));
        }
        if !current.is_end_of_word {
            current.is_end_of_word = true;
            self.len += 1;
        }
        Ok(())
    }

    /// Returns true if the exact word was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.node_at(word)
            .map(|node| node.is_end_of_word)
            .unwrap_or(false)
    }

    /// Returns true if any stored word starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.node_at(prefix).is_some()
    }

    /// Collect every stored word beginning with `prefix`, in alphabetical
    /// order. An unknown or invalid prefix yields an empty list.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut words = Vec::new();
        if let Some(node) = self.node_at(prefix) {
            let mut buffer = prefix.to_string();
            Self::collect_words(node, &mut buffer, &mut words);
        }
        words
    }

    /// Collect every stored word, in alphabetical order.
    pub fn all_words(&self) -> Vec<String> {
        self.words_with_prefix("")
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no words are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every word.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.len = 0;
    }

    /// Map a character to its child-slot index, rejecting anything outside
    /// the lowercase alphabet.
    fn slot_for(c: char) -> DsaResult<usize> {
        if c.is_ascii_lowercase() {
            Ok(c as usize - 'a' as usize)
        } else {
            Err(DsaError::InvalidCharacter(c))
        }
    }

    /// Validate a whole word into slot indices.
    fn slots_for(word: &str) -> DsaResult<Vec<usize>> {
        word.chars().map(Self::slot_for).collect()
    }

    /// Walk the path spelled by `word`, if it exists.
    fn node_at(&self, word: &str) -> Option<&TrieNode> {
        let mut current = &self.root;
        for c in word.chars() {
            let slot = Self::slot_for(c).ok()?;
            current = current.children[slot].as_deref()?;
        }
        Some(current)
    }

    /// Depth-first collection in ascending slot order; `buffer` holds the
    /// path walked so far.
    fn collect_words(node: &TrieNode, buffer: &mut String, words: &mut Vec<String>) {
        if node.is_end_of_word {
            words.push(buffer.clone());
        }
        for (slot, child) in node.children.iter().enumerate() {
            if let Some(child) = child {
                buffer.push((b'a' + slot as u8) as char);
                Self::collect_words(child, buffer, words);
                buffer.pop();
            }
        }
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
