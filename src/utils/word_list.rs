//! Word list loading.
//!
//! Word lists are either JSON arrays of strings (`.json` files) or plain text
//! with one word per line. In plain text, surrounding whitespace is trimmed
//! and blank lines and lines starting with `#` are skipped.

use std::fs;
use std::path::Path;

use crate::data_structures::hua_trie::{HuaTrie, HuaTrieConfig};
use crate::error::HuaResult;

/// Sample words used by the demo command.
pub const DEMO_WORDS: &[&str] = &[
    "pikachu",
    "pikachus",
    "pikano",
    "pikano",
    "squirtle",
    "alakazam",
    "charizard",
    "kadabra",
    "charmander",
];

/// Reads the words stored in `path`.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The words in file order, duplicates included.
/// * `Err(HuaError)` - If the file cannot be read or is not a valid JSON array.
pub fn load_words<P: AsRef<Path>>(path: P) -> HuaResult<Vec<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let words = if is_json {
        serde_json::from_str::<Vec<String>>(&contents)?
    } else {
        parse_lines(&contents)
    };

    tracing::info!(path = %path.display(), words = words.len(), "Loaded word list");
    Ok(words)
}

fn parse_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Builds a trie from `words`.
///
/// Words the trie rejects are logged and skipped, so one bad entry does not
/// discard the rest of the list.
pub fn build_trie<I, W>(words: I, config: HuaTrieConfig) -> HuaTrie
where
    I: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    let mut trie = HuaTrie::with_config(config);
    for word in words {
        let word = word.as_ref();
        if let Err(err) = trie.add_word(word) {
            tracing::warn!(word, %err, "Skipping word");
        }
    }
    trie
}
