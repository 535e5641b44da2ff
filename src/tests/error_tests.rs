//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::data_structures::niihau_trie::NiihauTrieError;
use crate::error::config::ConfigError;
use crate::error::{
    get_error_reporting, set_error_reporter, ErrorContext, ErrorReporter, NiihauError,
    TracingErrorReporter,
};
use crate::tests::TestFixture;
use parking_lot::{const_mutex, Mutex};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = NiihauError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that component errors convert into the crate error.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let niihau_error = NiihauError::from(io_error);
    assert!(format!("{niihau_error}").contains("file not found"));

    let config_error = ConfigError::FileNotFound(PathBuf::from("niihau.toml"));
    let niihau_error = NiihauError::from(config_error);
    assert_eq!(
        niihau_error.to_string(),
        "Configuration error: Configuration file not found: niihau.toml"
    );

    let trie_error = NiihauTrieError::WordTooLong {
        line: 1,
        length: 5,
        max_len: 4,
    };
    let niihau_error: NiihauError = trie_error.into();
    assert!(matches!(niihau_error, NiihauError::WordList(_)));
    assert!(niihau_error.to_string().starts_with("Word list error: "));
}

/// Serializes tests that replace the global reporter.
static REPORTER_LOCK: Mutex<()> = const_mutex(());

/// Mock error reporter for testing.
#[derive(Debug)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn new() -> Self {
        Self {
            reported_count: AtomicUsize::new(0),
        }
    }

    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: &ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter works correctly.
#[test]
fn test_global_error_reporter() {
    let _guard = REPORTER_LOCK.lock();
    let reporter = Arc::new(MockErrorReporter::new());
    set_error_reporter(reporter.clone());

    let error = NiihauError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component");

    get_error_reporting().report(&context);

    assert_eq!(reporter.reported_count(), 1);
}

/// Test that the default tracing error reporter can be used.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = NiihauError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component");

    // Just make sure this doesn't panic
    reporter.report(&context);
}

/// Test that library initialization loads the configuration and installs the
/// tracing reporter in place of any previous one.
#[test]
fn test_init_loads_config_and_installs_reporter() {
    let _guard = REPORTER_LOCK.lock();
    let mock = Arc::new(MockErrorReporter::new());
    set_error_reporter(mock.clone());

    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("[dictionary]\nmax_word_len = 48\nstrict = true\n", ".toml")
        .unwrap();

    let config = crate::init(Some(config_path.as_path())).unwrap();
    assert_eq!(config.dictionary.max_word_len, 48);
    assert!(config.dictionary.strict);

    let context = ErrorContext::new(NiihauError::Custom("after init".to_string()), "init");
    get_error_reporting().report(&context);
    assert_eq!(mock.reported_count(), 0);
}

/// Test that initialization surfaces configuration failures as crate errors.
#[test]
fn test_init_missing_config_file() {
    let _guard = REPORTER_LOCK.lock();
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.temp_dir.path().join("absent.toml");

    let err = crate::init(Some(config_path.as_path())).unwrap_err();
    assert!(matches!(
        err,
        NiihauError::Config(ConfigError::FileNotFound(ref path)) if *path == config_path
    ));
}
