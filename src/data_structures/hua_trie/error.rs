//! Error types for the Hua Trie.
//!
//! This module defines the error types that can occur during Hua Trie operations.

/// Errors that can occur in Hua Trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HuaTrieError {
    /// Error when an argument is rejected, such as an empty word.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error when a word exceeds the configured maximum length.
    #[error("Word '{word}' exceeds maximum length of {max_length}")]
    WordTooLong {
        /// The normalized word that was too long.
        word: String,
        /// The maximum allowed length in characters.
        max_length: usize,
    },

    /// Error when no node exists for a prefix.
    ///
    /// Only produced internally during traversal; the public lookups turn it
    /// into `false` or an empty result.
    #[error("Node not found for prefix: {0}")]
    NodeNotFound(String),
}
