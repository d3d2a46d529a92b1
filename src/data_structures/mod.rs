//! Data structures for Hua Complete.
//!
//! This module contains the word storage used for autocompletion.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Owned, acyclic structures with no interior mutability
//! - Deterministic iteration order

pub mod hua_trie;

// Re-export common data structures
pub use hua_trie::{HuaTrie, HuaTrieConfig, HuaTrieError, HuaTrieResult, TrieNode};
