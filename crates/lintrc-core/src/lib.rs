//! lintrc core
//!
//! Programmatic construction of configuration objects for an
//! ESLint-compatible checking engine. This crate provides the rule model,
//! the plugin namespacing transform, environment-sensitive severity
//! selection, and a typed view of the engine's configuration schema.
//!
//! The engine itself is an external collaborator: it receives the assembled
//! configuration object and produces diagnostics; nothing here evaluates
//! rules.

pub mod config;
pub mod error;
pub mod preset;
pub mod rules;
pub mod severity;

// Re-export commonly used types
pub use config::{Extends, LintConfig, OverrideConfig, ParserOptions};
pub use error::{LintrcError, Result};
pub use preset::{recommended, typescript_override};
pub use rules::{
    NAMESPACE_SEPARATOR, NamespacedRules, RuleSpec, RuleTable, disable_rules, namespace_rules,
};
pub use severity::{Environment, Severity};

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lintrc=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
