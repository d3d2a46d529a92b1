//! Node implementation for the Hua Trie.
//!
//! Each node stands for one character position in the set of stored words and
//! exclusively owns its children.

use std::collections::BTreeMap;

/// A node in the Hua Trie.
///
/// Children are kept in a `BTreeMap` so that iteration is always in ascending
/// character order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrieNode {
    /// Character this node represents, `None` only for the root
    label: Option<char>,

    /// Full normalized word ending at this node, if one was inserted
    completion: Option<String>,

    /// Map of characters to child nodes
    children: BTreeMap<char, TrieNode>,
}

impl TrieNode {
    /// Creates the unlabelled root node.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates an empty node labelled with `label`.
    pub fn with_label(label: char) -> Self {
        Self {
            label: Some(label),
            completion: None,
            children: BTreeMap::new(),
        }
    }

    /// Returns the character this node represents.
    pub fn label(&self) -> Option<char> {
        self.label
    }

    /// Returns the word completed at this node, if any.
    pub fn completion(&self) -> Option<&str> {
        self.completion.as_deref()
    }

    /// Whether an inserted word ends exactly at this node.
    pub fn is_terminal(&self) -> bool {
        self.completion.is_some()
    }

    /// Whether this node has any children.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the child for `character`, if present.
    pub fn child(&self, character: char) -> Option<&TrieNode> {
        self.children.get(&character)
    }

    /// Returns the child for `character`, creating an empty one if needed.
    ///
    /// An existing child and its subtree are returned untouched.
    pub fn ensure_child(&mut self, character: char) -> &mut TrieNode {
        self.children
            .entry(character)
            .or_insert_with(|| TrieNode::with_label(character))
    }

    /// Iterates over the children in ascending character order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(c, node)| (*c, node))
    }

    /// Marks this node as the end of `word`.
    ///
    /// Returns `true` if the node was not terminal before.
    pub(crate) fn set_completion(&mut self, word: String) -> bool {
        self.completion.replace(word).is_none()
    }

    /// Counts this node and every node below it.
    pub(crate) fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.values());
        }
        count
    }
}

impl Drop for TrieNode {
    // Iterative teardown; the derived drop would take one stack frame per level.
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
