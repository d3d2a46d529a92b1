//! Test modules for Hua Complete.
//!
//! This module contains the crate-internal test suites:
//! - Unit tests for configuration and error handling
//! - Property-based tests for the trie using proptest
//! - Shared strategies and fixtures
//!
//! Tests against the public API only live in the top-level `tests/` directory.

pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_set_strategy, word_strategy, TestFixture};
