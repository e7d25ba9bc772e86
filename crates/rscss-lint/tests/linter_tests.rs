//! Integration tests for configuration and the linter.

use rscss_css::Syntax;
use rscss_lint::rules::{class_format, no_descendant_combinator};
use rscss_lint::{Config, ConfigError, Keyword, LintError, Linter, PrimaryOption, RuleSetting};
use serde_json::json;

const RECOMMENDED_SCSS: &str = include_str!("fixtures/recommended.scss");

#[test]
fn test_recommended_config() {
    let config = Config::recommended();
    assert_eq!(
        config.rules.get(no_descendant_combinator::NAME),
        Some(&RuleSetting::Primary(PrimaryOption::Keyword(Keyword::Always)))
    );
    let class_format = config.rules.get(class_format::NAME).unwrap();
    assert!(class_format.primary().is_enabled());
    assert_eq!(
        class_format.secondary(),
        Some(&json!({ "componentWhitelist": ["btn", "container", "checkbox", "radio"] }))
    );
}

#[test]
fn test_recommended_linter() {
    let linter = Linter::recommended().unwrap();
    assert_eq!(
        linter.rule_names(),
        vec![class_format::NAME, no_descendant_combinator::NAME]
    );

    let diagnostics = linter.lint_source(RECOMMENDED_SCSS, Syntax::Scss).unwrap();
    let lines: Vec<_> = diagnostics.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "25:1  Invalid component name: '.searchForm'  (rscss/class-format)",
            "29:1  Descendant combinator not allowed: '.article-card .title'  (rscss/no-descendant-combinator)",
        ]
    );
}

#[test]
fn test_config_from_json() {
    let config = Config::from_json(
        r#"{
            "rules": {
                "rscss/no-descendant-combinator": "never",
                "rscss/class-format": [true, { "maxDepth": 1 }]
            }
        }"#,
    )
    .unwrap();

    let linter = Linter::from_config(&config).unwrap();
    assert_eq!(linter.rule_names(), vec![class_format::NAME]);

    let diagnostics = linter
        .lint_source(".my-component > .a > .b { } .x-y .z { }", Syntax::Css)
        .unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "Component too deep: '.my-component > .a > .b'"
    );
}

#[test]
fn test_rule_setting_shapes() {
    let config = Config::from_json(
        r#"{ "rules": {
            "a": true,
            "b": "always",
            "c": [false],
            "d": ["never", { "maxDepth": 2 }]
        } }"#,
    )
    .unwrap();
    assert!(config.rules["a"].primary().is_enabled());
    assert!(config.rules["b"].primary().is_enabled());
    assert!(!config.rules["c"].primary().is_enabled());
    assert!(config.rules["c"].secondary().is_none());
    assert!(!config.rules["d"].primary().is_enabled());
    assert!(config.rules["d"].secondary().is_some());

    assert!(Config::from_json(r#"{ "rules": { "a": "sometimes" } }"#).is_err());
    assert!(Config::from_json("{}").unwrap().rules.is_empty());
}

#[test]
fn test_unknown_rule_is_an_error() {
    let config = Config::default().with_rule("rscss/unknown", true);
    assert!(matches!(
        Linter::from_config(&config),
        Err(ConfigError::UnknownRule { name }) if name == "rscss/unknown"
    ));

    // Even when turned off
    let config = Config::default().with_rule("rscss/unknown", false);
    assert!(Linter::from_config(&config).is_err());
}

#[test]
fn test_parse_errors_abort_linting() {
    let linter = Linter::recommended().unwrap();
    assert!(matches!(
        linter.lint_source(".a {", Syntax::Css),
        Err(LintError::Parse(_))
    ));
    assert!(matches!(
        linter.lint_source(". a { }", Syntax::Css),
        Err(LintError::Selector(_))
    ));
}

#[test]
fn test_lint_is_repeatable() {
    let linter = Linter::recommended().unwrap();
    let first = linter.lint_source(RECOMMENDED_SCSS, Syntax::Scss).unwrap();
    let second = linter.lint_source(RECOMMENDED_SCSS, Syntax::Scss).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_config_round_trips_through_json() {
    let config = Config::recommended();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(Config::from_json(&json).unwrap(), config);
}
