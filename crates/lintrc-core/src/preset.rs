//! The recommended configuration
//!
//! A browser ES2020 base with JSX and a react plugin, plus a typed-language
//! override that re-routes the shared base rules through the namespacer to
//! the `@typescript-eslint` plugin.

use indexmap::IndexMap;
use serde_json::json;

use crate::config::{Extends, LintConfig, OverrideConfig, ParserOptions};
use crate::error::Result;
use crate::rules::{RuleSpec, RuleTable, namespace_rules};
use crate::severity::Environment;

/// Namespace of the typed-language plugin
pub const TS_PLUGIN: &str = "@typescript-eslint";

/// Base rules shared with the typed-language override
///
/// Defined once; the override derives its plugin-qualified copies from this
/// table instead of duplicating the options.
pub fn ts_overlap_rules() -> Result<RuleTable> {
    RuleTable::from_entries([
        (
            "no-unused-expressions",
            RuleSpec::error().opt(json!({"allowShortCircuit": true, "allowTernary": true})),
        ),
        (
            "no-unused-vars",
            RuleSpec::error().opt(json!({"argsIgnorePattern": "^_"})),
        ),
        (
            "no-use-before-define",
            RuleSpec::error().opt(json!({"functions": false, "classes": false})),
        ),
        ("require-await", RuleSpec::error()),
        (
            "camelcase",
            RuleSpec::error().opt(json!({"ignoreDestructuring": true})),
        ),
        ("quotes", RuleSpec::error().opt(json!("backtick"))),
    ])
}

/// Rules for the react plugin; already plugin-qualified
pub fn react_rules() -> Result<RuleTable> {
    RuleTable::from_entries([
        ("react/jsx-uses-react", RuleSpec::error()),
        ("react/jsx-uses-vars", RuleSpec::error()),
    ])
}

/// The full base rule table
///
/// The console and debugger rules track the environment: tolerated as
/// warnings during development, hard errors everywhere else.
pub fn base_rules(env: Environment) -> Result<RuleTable> {
    let mut rules = RuleTable::from_entries([
        ("arrow-parens", RuleSpec::error()),
        (
            "comma-dangle",
            RuleSpec::error().opt(json!("always-multiline")),
        ),
        (
            "comma-spacing",
            RuleSpec::error().opt(json!({"before": false, "after": true})),
        ),
        ("eol-last", RuleSpec::error()),
        ("eqeqeq", RuleSpec::error()),
        (
            "key-spacing",
            RuleSpec::error()
                .opt(json!({"beforeColon": false, "afterColon": true, "mode": "minimum"})),
        ),
        ("keyword-spacing", RuleSpec::error()),
        ("linebreak-style", RuleSpec::error().opt(json!("unix"))),
        (
            "no-console",
            RuleSpec::new(env.dev_severity())
                .opt(json!({"allow": ["info", "warn", "error", "assert"]})),
        ),
        ("no-control-regex", RuleSpec::off()),
        ("no-debugger", RuleSpec::new(env.dev_severity())),
        ("no-multi-spaces", RuleSpec::error()),
        ("no-trailing-spaces", RuleSpec::error()),
        ("no-var", RuleSpec::error()),
        ("object-curly-spacing", RuleSpec::error().opt(json!("never"))),
        ("object-shorthand", RuleSpec::error().opt(json!("always"))),
        (
            "prefer-const",
            RuleSpec::error()
                .opt(json!({"destructuring": "all", "ignoreReadBeforeAssign": true})),
        ),
        ("semi", RuleSpec::error().opt(json!("always"))),
        ("sort-keys", RuleSpec::off()),
        (
            "space-before-blocks",
            RuleSpec::error().opt(json!("always")),
        ),
        (
            "space-before-function-paren",
            RuleSpec::error()
                .opt(json!({"anonymous": "never", "named": "never", "asyncArrow": "always"})),
        ),
    ])?;
    rules.extend(react_rules()?);
    rules.extend(ts_overlap_rules()?);
    Ok(rules)
}

/// Override block routing the shared rules to the typed-language plugin
///
/// The base rules conflict with their typed-language counterparts, so each
/// shared rule is replaced by its `@typescript-eslint/` version and the base
/// rule is switched off, plus a handful of plugin-specific adjustments.
pub fn typescript_override() -> Result<OverrideConfig> {
    let routed = namespace_rules(&ts_overlap_rules()?, TS_PLUGIN)?;
    let mut rules = routed.merged();
    rules.extend(RuleTable::from_entries([
        (
            "@typescript-eslint/array-type",
            RuleSpec::error().opt(json!({"default": "array-simple"})),
        ),
        // the recommended-requiring-type-checking defaults below are too noisy
        ("@typescript-eslint/ban-ts-ignore", RuleSpec::off()),
        ("@typescript-eslint/no-explicit-any", RuleSpec::off()),
        (
            "@typescript-eslint/explicit-function-return-type",
            RuleSpec::off(),
        ),
        ("@typescript-eslint/unbound-method", RuleSpec::off()),
        ("@typescript-eslint/no-empty-interface", RuleSpec::off()),
    ])?);

    Ok(OverrideConfig {
        files: vec!["**/*.ts".to_string(), "**/*.tsx".to_string()],
        parser: Some("@typescript-eslint/parser".to_string()),
        parser_options: Some(ParserOptions {
            project: Some("./tsconfig.json".to_string()),
            // resolved by the engine relative to the emitted config file
            tsconfig_root_dir: Some(".".to_string()),
            create_default_program: Some(true),
            ..Default::default()
        }),
        plugins: Some(vec![TS_PLUGIN.to_string()]),
        extends: Some(Extends::Many(vec![
            "eslint:recommended".to_string(),
            "plugin:@typescript-eslint/eslint-recommended".to_string(),
            "plugin:@typescript-eslint/recommended".to_string(),
            "plugin:@typescript-eslint/recommended-requiring-type-checking".to_string(),
            "prettier".to_string(),
            "prettier/@typescript-eslint".to_string(),
        ])),
        rules: Some(rules),
    })
}

/// Assemble the full recommended configuration for the given environment
pub fn recommended(env: Environment) -> Result<LintConfig> {
    tracing::debug!(?env, "assembling recommended configuration");

    let mut env_flags = IndexMap::new();
    env_flags.insert("browser".to_string(), true);
    env_flags.insert("es6".to_string(), true);

    Ok(LintConfig {
        root: Some(true),
        env: Some(env_flags),
        extends: Some(Extends::Single("eslint:recommended".to_string())),
        overrides: Some(vec![typescript_override()?]),
        parser_options: Some(ParserOptions {
            ecma_version: Some(2020),
            source_type: Some("module".to_string()),
            ecma_features: Some(json!({"jsx": true})),
            ..Default::default()
        }),
        plugins: Some(vec!["react".to_string()]),
        settings: Some(json!({"react": {"pragma": "h"}})),
        rules: Some(base_rules(env)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;

    #[test]
    fn test_base_rules_track_environment() {
        let dev = base_rules(Environment::Development).unwrap();
        assert_eq!(dev.get("no-console").unwrap().severity, Severity::Warn);
        assert_eq!(dev.get("no-debugger").unwrap().severity, Severity::Warn);

        let prod = base_rules(Environment::Production).unwrap();
        assert_eq!(prod.get("no-console").unwrap().severity, Severity::Error);
        assert_eq!(prod.get("no-debugger").unwrap().severity, Severity::Error);

        // everything else is environment-independent
        assert_eq!(dev.get("no-var"), prod.get("no-var"));
        assert_eq!(dev.len(), prod.len());
    }

    #[test]
    fn test_base_rules_include_shared_tables() {
        let rules = base_rules(Environment::Development).unwrap();
        assert!(rules.contains("react/jsx-uses-vars"));
        assert!(rules.contains("no-unused-vars"));
        assert!(rules.contains("quotes"));
    }

    #[test]
    fn test_override_disables_every_shared_base_rule() {
        let overlay = typescript_override().unwrap();
        let rules = overlay.rules.unwrap();
        for (name, spec) in &ts_overlap_rules().unwrap() {
            assert_eq!(
                rules.get(name).map(|s| s.severity),
                Some(Severity::Off),
                "base rule {name} must be off in the override"
            );
            assert_eq!(
                rules.get(&format!("{TS_PLUGIN}/{name}")),
                Some(spec),
                "plugin copy of {name} must keep the original spec"
            );
        }
    }

    #[test]
    fn test_override_parser_wiring() {
        let overlay = typescript_override().unwrap();
        assert_eq!(overlay.files, vec!["**/*.ts", "**/*.tsx"]);
        assert_eq!(
            overlay.parser.as_deref(),
            Some("@typescript-eslint/parser")
        );
        let opts = overlay.parser_options.unwrap();
        assert_eq!(opts.project.as_deref(), Some("./tsconfig.json"));
        assert_eq!(opts.create_default_program, Some(true));
    }

    #[test]
    fn test_recommended_is_deterministic() {
        let a = recommended(Environment::Production).unwrap();
        let b = recommended(Environment::Production).unwrap();
        assert_eq!(a, b);
    }
}
