//! Test utilities and fixtures for Hua Complete.
//!
//! This module provides reusable strategies for property-based tests and a
//! fixture for tests that need files on disk.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use tempfile::TempDir;

/// Maximum number of words in a generated word set.
const MAX_WORD_SET_SIZE: usize = 40;

/// Generate a strategy for words over a small alphabet.
///
/// A narrow alphabet makes shared prefixes likely, so generated tries branch
/// at many depths. Mixed case exercises normalization.
pub fn word_strategy() -> BoxedStrategy<String> {
    "[abcABC]{1,8}".prop_map(|s| s).boxed()
}

/// Generate a strategy for lists of words, duplicates allowed.
pub fn word_set_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(word_strategy(), 0..MAX_WORD_SET_SIZE).boxed()
}

/// Test fixture for tests that read files.
///
/// The temporary directory is removed when the fixture is dropped.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
        })
    }

    /// Write `contents` to `name` inside the fixture directory.
    ///
    /// # Returns
    ///
    /// A result containing the path to the file or an error.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}
