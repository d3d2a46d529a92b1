//! Hua Trie Implementation
//!
//! This module provides a character trie for word autocompletion. Words are
//! lowercased on the way in, stored once per distinct spelling, and returned
//! in lexicographic order by prefix.
//!
//! # Example
//!
//! ```
//! use hua_complete_lib::data_structures::hua_trie::HuaTrie;
//!
//! let mut trie = HuaTrie::new();
//! trie.add_word("Pikachu").unwrap();
//! trie.add_word("pikano").unwrap();
//!
//! assert!(trie.has_word("PIKACHU"));
//! assert_eq!(trie.get_prefix_matches("pika", None), vec!["pikachu", "pikano"]);
//! ```

mod config;
mod error;
mod node;

pub use config::{HuaTrieConfig, DEFAULT_MAX_WORD_LENGTH, MAX_WORD_LENGTH_LIMIT};
pub use error::HuaTrieError;
pub use node::TrieNode;

/// Result type for Hua Trie operations
pub type HuaTrieResult<T> = Result<T, HuaTrieError>;

/// Hua Trie is a prefix tree of lowercased words with sorted prefix lookup.
///
/// Key features:
/// * Case-insensitive insertion and lookup
/// * Shared storage for common prefixes
/// * Deterministic, lexicographically ordered prefix matches
/// * Optional bound on the number of matches returned
#[derive(Debug, Clone)]
pub struct HuaTrie {
    /// The root node of the trie, representing the empty string
    root: TrieNode,

    /// Number of distinct words stored
    word_count: usize,

    /// Configuration options
    config: HuaTrieConfig,
}

/// Lowercases input so that storage and comparison ignore case.
fn normalize(word: &str) -> String {
    word.to_lowercase()
}

impl HuaTrie {
    /// Creates a new empty `HuaTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(HuaTrieConfig::default())
    }

    /// Creates a new empty `HuaTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: HuaTrieConfig) -> Self {
        Self {
            root: TrieNode::root(),
            word_count: 0,
            config,
        }
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &HuaTrieConfig {
        &self.config
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts a word into the trie.
    ///
    /// The word is lowercased before it is stored. Inserting a word that is
    /// already present leaves the trie unchanged.
    ///
    /// Only words of at most `max_word_length` characters are accepted, and
    /// the length is counted after lowercasing. Some characters lowercase to
    /// more than one character (`'İ'` becomes `"i\u{307}"`), so a word at the
    /// limit can be rejected even though its original spelling fits.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The word is stored.
    /// * `Err(HuaTrieError::InvalidArgument)` - The word is empty.
    /// * `Err(HuaTrieError::WordTooLong)` - The word exceeds `max_word_length`.
    pub fn add_word<W>(&mut self, word: W) -> HuaTrieResult<()>
    where
        W: AsRef<str>,
    {
        self.insert_normalized(word.as_ref()).map(|_| ())
    }

    /// Inserts every word from `words`, stopping at the first rejected one.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - How many of the words were not already stored.
    /// * `Err(HuaTrieError)` - The first word that was rejected.
    pub fn add_words<I, W>(&mut self, words: I) -> HuaTrieResult<usize>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut added = 0;
        for word in words {
            if self.insert_normalized(word.as_ref())? {
                added += 1;
            }
        }
        Ok(added)
    }

    fn insert_normalized(&mut self, word: &str) -> HuaTrieResult<bool> {
        if word.is_empty() {
            return Err(HuaTrieError::InvalidArgument(
                "cannot insert an empty word".to_string(),
            ));
        }

        let word = normalize(word);
        let length = word.chars().count();
        if length > self.config.max_word_length() {
            return Err(HuaTrieError::WordTooLong {
                word,
                max_length: self.config.max_word_length(),
            });
        }

        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.ensure_child(c);
        }

        let is_new = node.set_completion(word.clone());
        if is_new {
            self.word_count += 1;
            tracing::debug!(word = %word, words = self.word_count, "Inserted word");
        }
        Ok(is_new)
    }

    /// Checks whether `word` was inserted, ignoring case.
    ///
    /// A prefix of a longer word only counts if it was inserted itself. The
    /// empty string is never stored, so it always returns `false`.
    pub fn has_word<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return false;
        }

        match self.resolve_prefix_node(word) {
            Ok(node) => node.is_terminal(),
            Err(_) => false,
        }
    }

    /// Walks from the root along the normalized `prefix`.
    fn resolve_prefix_node(&self, prefix: &str) -> HuaTrieResult<&TrieNode> {
        let prefix = normalize(prefix);
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node
                .child(c)
                .ok_or_else(|| HuaTrieError::NodeNotFound(prefix.clone()))?;
        }
        Ok(node)
    }

    /// Returns every stored word starting with `prefix`, ignoring case.
    ///
    /// Matches are in lexicographic order. A prefix that is itself a stored
    /// word is the first match. The empty prefix matches every word.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to complete.
    /// * `max_results` - Upper bound on the number of matches, `None` for all.
    ///
    /// # Returns
    ///
    /// The matching words, or an empty vector if nothing starts with `prefix`.
    pub fn get_prefix_matches<P>(&self, prefix: P, max_results: Option<usize>) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let node = match self.resolve_prefix_node(prefix) {
            Ok(node) => node,
            Err(err) => {
                tracing::trace!(%err, "No prefix node");
                return Vec::new();
            }
        };

        let matches = Self::collect_completions(node, max_results);
        tracing::trace!(prefix, matches = matches.len(), "Prefix lookup");
        matches
    }

    /// Pre-order walk that gathers completions until `limit` is reached.
    ///
    /// Children are pushed in reverse so the smallest character is visited
    /// first, which keeps the output sorted.
    fn collect_completions(node: &TrieNode, limit: Option<usize>) -> Vec<String> {
        let mut matches = Vec::new();
        let mut pending = vec![node];

        while let Some(node) = pending.pop() {
            if limit.is_some_and(|max| matches.len() >= max) {
                break;
            }
            if let Some(word) = node.completion() {
                matches.push(word.to_string());
            }
            pending.extend(node.children().rev().map(|(_, child)| child));
        }

        matches
    }

    /// Returns every stored word in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        self.get_prefix_matches("", None)
    }

    /// Returns the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns the number of nodes in the trie, root included.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }
}

impl Default for HuaTrie {
    fn default() -> Self {
        Self::new()
    }
}
