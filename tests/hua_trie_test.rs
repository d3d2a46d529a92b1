//! Integration tests for the Hua Trie.
//! Exercises the public library API the way the command-line tool uses it.

use std::fs;

use hua_complete_lib::config::ConfigLoader;
use hua_complete_lib::data_structures::{HuaTrie, HuaTrieConfig, HuaTrieError, TrieNode};
use hua_complete_lib::utils::{build_trie, load_words, DEMO_WORDS};

/// Setup a trie holding the sample words
fn setup_demo_trie() -> HuaTrie {
    build_trie(DEMO_WORDS, HuaTrieConfig::default())
}

#[test]
fn test_demo_queries() {
    let trie = setup_demo_trie();

    assert_eq!(
        trie.get_prefix_matches("pika", None),
        vec!["pikachu", "pikachus", "pikano"]
    );
    assert_eq!(trie.get_prefix_matches("squ", None), vec!["squirtle"]);
    assert_eq!(
        trie.get_prefix_matches("pikachu", None),
        vec!["pikachu", "pikachus"]
    );
}

#[test]
fn test_all_words_sorted_and_distinct() {
    let trie = setup_demo_trie();

    let mut expected: Vec<String> = DEMO_WORDS.iter().map(|w| w.to_string()).collect();
    expected.sort();
    expected.dedup();

    assert_eq!(trie.words(), expected);
    assert_eq!(trie.get_prefix_matches("", None), expected);
    assert_eq!(trie.len(), expected.len());
}

#[test]
fn test_membership() {
    let mut trie = HuaTrie::new();
    trie.add_word("Kadabra").unwrap();

    assert!(trie.has_word("kadabra"));
    assert!(trie.has_word("KADABRA"));
    assert!(!trie.has_word("kad"));
    assert!(!trie.has_word("kadabras"));
    assert!(!trie.has_word(""));
}

#[test]
fn test_empty_word_rejected() {
    let mut trie = HuaTrie::new();
    assert!(matches!(
        trie.add_word(""),
        Err(HuaTrieError::InvalidArgument(_))
    ));
    assert!(trie.is_empty());
    assert!(trie.get_prefix_matches("", None).is_empty());
}

#[test]
fn test_tree_structure() {
    let mut trie = HuaTrie::new();
    trie.add_word("ab").unwrap();
    trie.add_word("ac").unwrap();

    let root: &TrieNode = trie.root();
    assert_eq!(root.label(), None);
    assert_eq!(root.completion(), None);

    let a = root.child('a').expect("node for 'a'");
    assert_eq!(a.label(), Some('a'));
    assert!(!a.is_terminal());

    let labels: Vec<char> = a.children().map(|(c, _)| c).collect();
    assert_eq!(labels, vec!['b', 'c']);
    assert_eq!(a.child('c').and_then(TrieNode::completion), Some("ac"));

    // root, a, b, c
    assert_eq!(trie.node_count(), 4);
}

#[test]
fn test_configured_trie_from_files() {
    let dir = tempfile::tempdir().unwrap();

    let config_path = dir.path().join("hua.toml");
    fs::write(&config_path, "[trie]\nmax_word_length = 9\n").unwrap();

    let words_path = dir.path().join("words.json");
    fs::write(&words_path, r#"["Charizard", "charmander", "char"]"#).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "HUA_INTEGRATION")
        .load()
        .unwrap();
    let words = load_words(&words_path).unwrap();
    let trie = build_trie(&words, config.trie.trie_config().unwrap());

    // "charmander" is longer than nine characters and is skipped
    assert_eq!(
        trie.get_prefix_matches("CHAR", None),
        vec!["char", "charizard"]
    );
    assert!(!trie.has_word("charmander"));
}
