//! Hua Complete Library
//!
//! This library contains the core components of Hua Complete: a
//! case-insensitive prefix trie for word autocompletion, the configuration
//! layer around it, and helpers for loading word lists.
//!
//! # Architecture
//!
//! - [`data_structures::hua_trie`] holds the trie itself and has no
//!   dependency on the rest of the crate.
//! - [`config`] loads and validates application settings.
//! - [`utils::word_list`] reads word lists and builds tries from them.
//! - [`error`] ties the layers together with a single error type.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod utils;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Hua Complete.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
