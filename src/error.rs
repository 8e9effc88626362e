//! Error types for `wikiforge`.
//!
//! One top-level enum aggregating configuration and I/O failures, plus
//! the Unix exit codes the CLI maps them to.

use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `wikiforge` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid topic table, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `wikiforge` operations.
///
/// Aggregates all domain-specific errors and provides a unified
/// interface for error handling and exit code mapping.
#[derive(Debug, Error)]
pub enum WikiforgeError {
    /// Topic table loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// One or more topics failed to scaffold
    #[error("{failed} of {total} topic(s) failed to scaffold")]
    PartialScaffold {
        /// Number of topics that failed
        failed: usize,
        /// Total number of topics processed
        total: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl WikiforgeError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Yaml(_) => ExitCode::CONFIG_ERROR,
            Self::Io(_) | Self::PartialScaffold { .. } => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Topic table loading and validation errors.
///
/// These cover failure modes in the static builtin table as well as
/// external YAML tables, all caught before any filesystem mutation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the topic table file
        path: std::path::PathBuf,
        /// Error message from the parser
        message: String,
    },

    /// Topic table validation failed
    #[error("invalid topic table: {} issue(s)", errors.len())]
    ValidationError {
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },

    /// Referenced topic table file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: std::path::PathBuf,
    },

    /// Topic table contains no topics
    #[error("topic table is empty: {path}")]
    EmptyTable {
        /// Path to the empty table file
        path: std::path::PathBuf,
    },
}

/// A single validation finding within a topic table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Location of the issue (topic slug or table index)
    pub path: String,
    /// Description of the problem
    pub message: String,
    /// Whether this blocks scaffolding or is advisory
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} at {}", self.severity, self.message, self.path)
    }
}

/// Severity of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Blocks scaffolding
    Error,
    /// Advisory only (promoted to an error in strict mode)
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `wikiforge` operations.
pub type Result<T> = std::result::Result<T, WikiforgeError>;

// ============================================================================
// Tests
// ============================================================================
