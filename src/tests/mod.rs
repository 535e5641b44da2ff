//! Test modules for the Niihau dictionary.
//!
//! This module contains the crate-level test suites:
//! - Configuration loading and validation
//! - Error conversion and reporting
//! - Word list files feeding a trie
//! - Shared fixtures and proptest strategies
//!
//! Trie-internal unit and property tests live next to the trie in
//! `data_structures::niihau_trie`.

pub mod error_tests;
pub mod word_list_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_list_strategy, TestFixture};
