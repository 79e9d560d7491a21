//! Typed model of the configuration object handed to the consuming engine
//!
//! Key names and nesting mirror the engine's schema exactly; serialization
//! must be drop-in compatible, so every field is renamed to the engine's
//! camelCase spelling and absent sections are omitted from the output.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LintrcError, Result};
use crate::rules::RuleTable;

/// Top-level configuration object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LintConfig {
    /// Stop the engine's upward config search at this file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<bool>,

    /// Environment flags enabling predefined globals (e.g. `browser`, `es6`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<IndexMap<String, bool>>,

    /// Shareable configurations to layer underneath this one
    #[schemars(description = "Base configuration name(s) to extend")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<Extends>,

    /// Per-glob configuration overlays
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Vec<OverrideConfig>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_options: Option<ParserOptions>,

    /// Plugin packages whose rules this configuration may reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<String>>,

    /// Settings shared with every rule; opaque to this crate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,

    /// Rule severity configuration
    #[schemars(description = "Rule name to [severity, ...options] mapping")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleTable>,
}

/// Configuration overlay applied to files matching a set of globs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverrideConfig {
    /// Glob patterns selecting the files this overlay applies to
    pub files: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_options: Option<ParserOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<Extends>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleTable>,
}

/// Parser configuration
///
/// One struct covers both the base parser options (`ecmaVersion`,
/// `sourceType`, `ecmaFeatures`) and the typed-language parser's project
/// options; the engine ignores fields its parser does not know.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParserOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecma_version: Option<u32>,

    /// `script` or `module`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,

    /// Language feature toggles (e.g. `jsx`); opaque to this crate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecma_features: Option<Value>,

    /// Path to the typed-language project manifest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tsconfig_root_dir: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_default_program: Option<bool>,
}

/// The engine accepts `extends` as either a single name or a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Extends {
    Single(String),
    Many(Vec<String>),
}

impl LintConfig {
    /// Serialize to the JSON value handed to the engine
    ///
    /// Key order follows construction order of the underlying tables.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| LintrcError::ConfigError {
            message: format!("Failed to serialize configuration: {e}"),
        })
    }

    /// Serialize to a compact JSON string
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| LintrcError::ConfigError {
            message: format!("Failed to serialize configuration: {e}"),
        })
    }

    /// Serialize to a pretty-printed JSON string
    pub fn to_json_string_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| LintrcError::ConfigError {
            message: format!("Failed to serialize configuration: {e}"),
        })
    }

    /// JSON Schema for the configuration surface this crate emits
    pub fn schema() -> schemars::Schema {
        schemars::schema_for!(LintConfig)
    }
}
