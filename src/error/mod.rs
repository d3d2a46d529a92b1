//! Error module for Hua Complete.
//!
//! This module provides the application-level error type. Each layer keeps
//! its own error enum and converts into [`HuaError`] with `?`.

use thiserror::Error;

use crate::data_structures::hua_trie::HuaTrieError;

pub mod config;

/// Result type alias used throughout Hua Complete.
pub type HuaResult<T> = Result<T, HuaError>;

/// Core error enum for Hua Complete.
#[derive(Error, Debug)]
pub enum HuaError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by the trie, such as rejected words.
    #[error("Trie error: {0}")]
    Trie(#[from] HuaTrieError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
