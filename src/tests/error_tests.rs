//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::config::ConfigError;
use crate::error::{
    get_error_reporting, set_error_reporter, BmSearchError, ErrorContext, ErrorReporter,
    ErrorReporting, TracingErrorReporter,
};
use crate::search::boyer_moore::BoyerMooreError;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = BmSearchError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = BmSearchError::Io(io_error);
    assert!(format!("{error}").contains("file not found"));

    let error: BmSearchError = BoyerMooreError::PatternTooLarge { len: 10, max: 4 }.into();
    assert!(matches!(error, BmSearchError::Pattern(_)));
    assert!(format!("{error}").contains("10"));

    let error: BmSearchError = ConfigError::ValidationError("bad level".to_string()).into();
    assert_eq!(
        format!("{error}"),
        "Configuration error: Configuration validation error: bad level"
    );
}

/// Counting error reporter for testing.
#[derive(Debug, Default)]
struct CountingErrorReporter {
    reported_count: AtomicUsize,
}

impl CountingErrorReporter {
    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for CountingErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that a dispatcher forwards to its reporter.
#[test]
fn test_error_reporting_forwards_to_reporter() {
    let reporter = Arc::new(CountingErrorReporter::default());
    let reporting = ErrorReporting::new(reporter.clone());

    reporting.report(ErrorContext::new(BmSearchError::Custom("one".to_string()), "a"));
    reporting.report(ErrorContext::new(BmSearchError::Custom("two".to_string()), "b"));

    assert_eq!(reporter.reported_count(), 2);
}

/// Test that the global error reporter works correctly.
///
/// This is the only test that touches the process-wide reporter.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(CountingErrorReporter::default());
    assert!(set_error_reporter(reporter.clone()));

    let context = ErrorContext::new(BmSearchError::Custom("test error".to_string()), "test_component");
    get_error_reporting().report(context);
    assert_eq!(reporter.reported_count(), 1);

    // A second reporter is refused and the first stays in place
    let other = Arc::new(CountingErrorReporter::default());
    assert!(!set_error_reporter(other.clone()));

    get_error_reporting().report(ErrorContext::new(BmSearchError::Custom("again".to_string()), "c"));
    assert_eq!(reporter.reported_count(), 2);
    assert_eq!(other.reported_count(), 0);
}

/// Test that the default tracing error reporter can be created.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = BmSearchError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component");

    // Just make sure this doesn't panic
    reporter.report(context);
}
