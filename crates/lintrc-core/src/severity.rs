//! Severity levels and environment-sensitive severity selection

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Rule severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Disable the rule
    Off,
    /// Warning (doesn't fail the check run)
    Warn,
    /// Error (fails the check run)
    Error,
}

/// Execution environment a configuration is assembled for
///
/// A closed two-way choice: any indicator value other than `development`
/// selects `Production`, and an absent indicator defaults to `Development`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Process variable consulted by [`Environment::from_process`]
    pub const INDICATOR_VAR: &'static str = "NODE_ENV";

    /// Classify an explicit indicator value
    ///
    /// This is the injection point for deterministic assembly: callers that
    /// already hold the indicator pass it here instead of letting this crate
    /// touch ambient process state.
    pub fn from_indicator(indicator: Option<&str>) -> Self {
        match indicator {
            None | Some("development") => Self::Development,
            Some(_) => Self::Production,
        }
    }

    /// Read the indicator from the process environment
    ///
    /// Read once, at configuration-assembly time. No revalidation occurs
    /// later; the assembled tables are immutable.
    pub fn from_process() -> Self {
        Self::from_indicator(std::env::var(Self::INDICATOR_VAR).ok().as_deref())
    }

    /// Severity for rules that are relaxed during local development
    pub fn dev_severity(self) -> Severity {
        match self {
            Self::Development => Severity::Warn,
            Self::Production => Severity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serialization() {
        let severity = Severity::Error;
        let json = serde_json::to_string(&severity).unwrap();
        assert_eq!(json, r#""error""#);

        let severity = Severity::Off;
        let json = serde_json::to_string(&severity).unwrap();
        assert_eq!(json, r#""off""#);
    }

    #[test]
    fn test_indicator_unset_defaults_to_development() {
        let env = Environment::from_indicator(None);
        assert_eq!(env, Environment::Development);
        assert_eq!(env.dev_severity(), Severity::Warn);
    }

    #[test]
    fn test_indicator_development() {
        let env = Environment::from_indicator(Some("development"));
        assert_eq!(env, Environment::Development);
        assert_eq!(env.dev_severity(), Severity::Warn);
    }

    #[test]
    fn test_indicator_production() {
        let env = Environment::from_indicator(Some("production"));
        assert_eq!(env, Environment::Production);
        assert_eq!(env.dev_severity(), Severity::Error);
    }

    #[test]
    fn test_unrecognized_indicator_is_production() {
        // Closed two-way choice, not an open enumeration
        assert_eq!(
            Environment::from_indicator(Some("staging")),
            Environment::Production
        );
        assert_eq!(
            Environment::from_indicator(Some("")),
            Environment::Production
        );
    }
}
