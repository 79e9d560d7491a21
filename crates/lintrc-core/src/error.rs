//! Error types for configuration construction

use thiserror::Error;

/// Main error type for configuration construction
#[derive(Debug, Error)]
pub enum LintrcError {
    /// Configuration assembly or serialization errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// A rule table literal names the same rule twice
    #[error("Duplicate rule '{rule}' in rule table")]
    DuplicateRule { rule: String },

    /// A rule table literal contains an empty rule name
    #[error("Empty rule name in rule table")]
    EmptyRuleName,

    /// The namespacer was given an empty plugin prefix
    #[error("Namespace prefix must not be empty")]
    EmptyNamespace,

    /// A source rule name already carries a plugin prefix
    #[error("Rule '{rule}' already contains a namespace separator")]
    AlreadyNamespaced { rule: String },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, LintrcError>;
