//! Utilities shared by the library and the command-line tool.

pub mod word_list;

pub use word_list::{build_trie, load_words, DEMO_WORDS};
