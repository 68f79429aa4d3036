//! Error module for bmsearch.
//!
//! Searching itself cannot fail: empty inputs simply produce no matches. The
//! errors here cover building matchers, loading configuration and the I/O
//! performed by the command line driver.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::search::boyer_moore::BoyerMooreError;

pub mod config;

/// Result type alias used throughout bmsearch.
pub type BmSearchResult<T> = Result<T, BmSearchError>;

/// Core error enum for bmsearch.
#[derive(Error, Debug)]
pub enum BmSearchError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors occurring while compiling a pattern.
    #[error("Pattern error: {0}")]
    Pattern(#[from] BoyerMooreError),

    /// IO errors that may occur while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors while emitting JSON output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: BmSearchError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    pub fn new<S: Into<String>>(error: BmSearchError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// An error reporter that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Dispatches error reports to a configured reporter.
#[derive(Debug, Default)]
pub struct ErrorReporting {
    reporter: Option<Arc<dyn ErrorReporter>>,
}

impl ErrorReporting {
    /// Creates a dispatcher that forwards to `reporter`.
    pub fn new(reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            reporter: Some(reporter),
        }
    }

    /// Report an error with context.
    pub fn report(&self, context: ErrorContext) {
        if let Some(reporter) = &self.reporter {
            reporter.report(context);
        } else {
            // Fallback to standard error output if no reporter is configured
            eprintln!("Error: {context}");
        }
    }
}

static ERROR_REPORTING: OnceCell<ErrorReporting> = OnceCell::new();

/// Get the process-wide error reporting instance.
///
/// Falls back to writing to standard error until a reporter is set.
pub fn get_error_reporting() -> &'static ErrorReporting {
    ERROR_REPORTING.get_or_init(ErrorReporting::default)
}

/// Set the process-wide error reporter.
///
/// Returns `false` if reporting was already initialized, in which case the
/// existing reporter stays in place.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) -> bool {
    let installed = ERROR_REPORTING.set(ErrorReporting::new(reporter)).is_ok();
    if !installed {
        tracing::warn!("Error reporter was already initialized, ignoring new reporter");
    }
    installed
}
