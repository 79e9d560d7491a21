//! Rule tables and the namespacing transform
//!
//! A [`RuleTable`] maps rule names to their configured severity and options.
//! The consuming engine expects each entry on the wire as
//! `[severity, ...options]`, so [`RuleSpec`] serializes to that array form.
//!
//! [`namespace_rules`] rewrites a table for a plugin overlay: every entry is
//! re-keyed under the plugin namespace while the original key is forced off,
//! so one canonical rule definition can be shared between a base
//! configuration and the overlay without duplication.

use std::borrow::Cow;

use indexmap::IndexMap;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LintrcError, Result};
use crate::severity::Severity;

/// Separator between a plugin namespace and a rule name
pub const NAMESPACE_SEPARATOR: char = '/';

/// A single rule configuration: severity plus opaque rule-specific options
///
/// Options are carried verbatim and never interpreted here; their semantics
/// belong to the rule implementation in the consuming engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSpec {
    /// Reaction level for violations of this rule
    pub severity: Severity,
    /// Rule-specific option payloads, in engine order
    pub options: Vec<Value>,
}

impl RuleSpec {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            options: Vec::new(),
        }
    }

    pub fn off() -> Self {
        Self::new(Severity::Off)
    }

    pub fn warn() -> Self {
        Self::new(Severity::Warn)
    }

    pub fn error() -> Self {
        Self::new(Severity::Error)
    }

    /// Append an option payload
    pub fn opt(mut self, option: Value) -> Self {
        self.options.push(option);
        self
    }
}

impl Serialize for RuleSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(1 + self.options.len()))?;
        seq.serialize_element(&self.severity)?;
        for option in &self.options {
            seq.serialize_element(option)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for RuleSpec {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        // The engine accepts either a bare severity string or the array form
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::String(_) => {
                let severity = serde_json::from_value(value).map_err(de::Error::custom)?;
                Ok(Self::new(severity))
            }
            Value::Array(items) => {
                let mut items = items.into_iter();
                let head = items
                    .next()
                    .ok_or_else(|| de::Error::custom("rule spec array must not be empty"))?;
                let severity = serde_json::from_value(head).map_err(de::Error::custom)?;
                Ok(Self {
                    severity,
                    options: items.collect(),
                })
            }
            other => Err(de::Error::custom(format!(
                "expected severity string or [severity, ...options] array, got {other}"
            ))),
        }
    }
}

impl JsonSchema for RuleSpec {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("RuleSpec")
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let severity = generator.subschema_for::<Severity>();
        json_schema!({
            "type": "array",
            "prefixItems": [severity],
            "minItems": 1
        })
    }
}

/// Order-preserving mapping from rule name to rule configuration
///
/// Immutable once configuration assembly is done; the engine may read it from
/// any number of parallel file checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct RuleTable(IndexMap<String, RuleSpec>);

impl RuleTable {
    /// Build a table from a rule literal, validating the keys
    ///
    /// Empty names and duplicate names are authoring defects and rejected
    /// outright rather than silently dropped or overwritten.
    pub fn from_entries<K, I>(entries: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, RuleSpec)>,
    {
        let mut table = IndexMap::new();
        for (name, spec) in entries {
            let name = name.into();
            if name.is_empty() {
                return Err(LintrcError::EmptyRuleName);
            }
            if table.insert(name.clone(), spec).is_some() {
                return Err(LintrcError::DuplicateRule { rule: name });
            }
        }
        Ok(Self(table))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&RuleSpec> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, RuleSpec> {
        self.0.iter()
    }

    /// Overlay another table onto this one
    ///
    /// Entries from `other` take precedence over existing entries with the
    /// same name; precedence here is explicit and intended, unlike the
    /// duplicate check in [`RuleTable::from_entries`].
    pub fn extend(&mut self, other: RuleTable) {
        self.0.extend(other.0);
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = (&'a String, &'a RuleSpec);
    type IntoIter = indexmap::map::Iter<'a, String, RuleSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Result of running a rule table through the namespacer
#[derive(Debug, Clone, PartialEq)]
pub struct NamespacedRules {
    /// Source entries re-keyed under the plugin namespace, specs unchanged
    pub namespaced: RuleTable,
    /// Source keys, each forced off
    pub disabled: RuleTable,
}

impl NamespacedRules {
    /// Single table in the shape an override block consumes
    ///
    /// For each source rule, the plugin-qualified entry is followed by the
    /// disabling entry for the base rule it replaces.
    pub fn merged(&self) -> RuleTable {
        let mut merged = IndexMap::with_capacity(self.namespaced.len() * 2);
        for ((ns_name, spec), (name, off)) in self.namespaced.iter().zip(self.disabled.iter()) {
            merged.insert(ns_name.clone(), spec.clone());
            merged.insert(name.clone(), off.clone());
        }
        RuleTable(merged)
    }
}

/// Replace every entry's configuration with the single-element `off` form
///
/// Pure and idempotent; the input table is untouched.
pub fn disable_rules(rules: &RuleTable) -> RuleTable {
    RuleTable(
        rules
            .iter()
            .map(|(name, _)| (name.clone(), RuleSpec::off()))
            .collect(),
    )
}

/// Rewrite a rule table for a plugin overlay
///
/// Produces a namespaced copy (`ns/name` keys, specs copied unchanged) and a
/// disabling copy (original keys, each `[off]`). Both outputs have exactly as
/// many entries as the input. Source names that already contain the
/// namespace separator are rejected; qualifying them twice is always a bug.
pub fn namespace_rules(rules: &RuleTable, ns: &str) -> Result<NamespacedRules> {
    if ns.is_empty() {
        return Err(LintrcError::EmptyNamespace);
    }
    let mut namespaced = IndexMap::with_capacity(rules.len());
    for (name, spec) in rules {
        if name.contains(NAMESPACE_SEPARATOR) {
            return Err(LintrcError::AlreadyNamespaced { rule: name.clone() });
        }
        namespaced.insert(format!("{ns}{NAMESPACE_SEPARATOR}{name}"), spec.clone());
    }
    tracing::debug!(namespace = ns, rules = rules.len(), "namespaced rule table");
    Ok(NamespacedRules {
        namespaced: RuleTable(namespaced),
        disabled: disable_rules(rules),
    })
}
