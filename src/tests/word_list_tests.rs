//! Tests for loading word list files into a trie.

use crate::config::DictionaryConfig;
use crate::data_structures::niihau_trie::{LoaderOptions, NiihauTrie, WordListLoader};
use crate::tests::{word_list_strategy, TestFixture};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Test loading a file with the options derived from the dictionary config.
#[test]
fn test_load_file_with_config_options() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_word_list(&["# sample", "cat", "catalogue", "", "  car  ", "cat"])
        .unwrap();

    let config = DictionaryConfig::default();
    let loader = WordListLoader::new(LoaderOptions::from(&config));
    let mut trie = NiihauTrie::new();
    let stats = loader.load_path(&mut trie, &path).unwrap();

    assert_eq!(stats.lines, 6);
    assert_eq!(stats.inserted, 3);
    assert_eq!(stats.duplicates, 1);
    assert_eq!(stats.skipped, 2);
    assert_eq!(trie.starts_with("ca"), vec!["car", "cat", "catalogue"]);
}

/// Test that loading into a non-empty trie only counts new words.
#[test]
fn test_load_into_existing_trie() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_word_list(&["frog", "from"]).unwrap();

    let mut trie: NiihauTrie = ["frog"].iter().collect();
    let stats = WordListLoader::default().load_path(&mut trie, &path).unwrap();

    assert_eq!(stats.inserted, 1);
    assert_eq!(stats.duplicates, 1);
    assert_eq!(trie.len(), 2);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // Property: loading a written word list stores exactly its distinct words
    #[test]
    fn prop_loaded_file_matches_word_set(words in word_list_strategy()) {
        let fixture = TestFixture::new().unwrap();
        let path = fixture.create_word_list(&words).unwrap();

        let mut trie = NiihauTrie::new();
        let stats = WordListLoader::default().load_path(&mut trie, &path).unwrap();

        let distinct: BTreeSet<&String> = words.iter().collect();
        prop_assert_eq!(stats.lines, words.len());
        prop_assert_eq!(stats.inserted, distinct.len());
        prop_assert_eq!(stats.duplicates, words.len() - distinct.len());
        prop_assert_eq!(trie.len(), distinct.len());
        for word in &words {
            prop_assert!(trie.contains(word));
        }
    }
}
