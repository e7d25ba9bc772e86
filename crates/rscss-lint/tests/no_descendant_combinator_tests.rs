//! Integration tests for the `rscss/no-descendant-combinator` rule.

use rscss_css::Syntax;
use rscss_lint::rules::no_descendant_combinator::NAME;
use rscss_lint::{Config, Linter, RuleSetting};

const CHILD_CSS: &str = include_str!("fixtures/child.css");
const CHILD_SCSS: &str = include_str!("fixtures/child.scss");

/// Helper to build a linter running only this rule.
fn linter() -> Linter {
    let config = Config::default().with_rule(NAME, RuleSetting::from(true));
    Linter::from_config(&config).unwrap()
}

/// Helper to lint and keep only the messages.
fn messages(source: &str, syntax: Syntax) -> Vec<String> {
    linter()
        .lint_source(source, syntax)
        .unwrap()
        .into_iter()
        .map(|diagnostic| diagnostic.message)
        .collect()
}

#[test]
fn test_rejects_descendant_in_css() {
    assert_eq!(
        messages(CHILD_CSS, Syntax::Css),
        vec!["Descendant combinator not allowed: 'a.bad-component .xyz'"]
    );
}

#[test]
fn test_rejects_flattened_descendant_in_scss() {
    assert_eq!(
        messages(CHILD_SCSS, Syntax::Scss),
        vec!["Descendant combinator not allowed: '.component-name .badelement'"]
    );
}

#[test]
fn test_one_diagnostic_per_selector() {
    assert_eq!(
        messages(".a .b .c { }", Syntax::Css),
        vec!["Descendant combinator not allowed: '.a .b .c'"]
    );
}

#[test]
fn test_first_offending_selector_ends_the_rule() {
    assert_eq!(
        messages(".a .b, .c .d { }", Syntax::Css),
        vec!["Descendant combinator not allowed: '.a .b'"]
    );
}

#[test]
fn test_explicit_combinators_are_allowed() {
    for source in [
        ".a > .b { }",
        ".a + .b { }",
        ".a ~ .b { }",
        ".a /* note */ > .b { }",
        "  .a   >   .b { }",
        ".a:not(.b .c) { }",
    ] {
        assert!(messages(source, Syntax::Css).is_empty(), "for {source:?}");
    }
}

#[test]
fn test_diagnostic_points_at_rule() {
    let diagnostics = linter()
        .lint_source(CHILD_SCSS, Syntax::Scss)
        .unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].rule_name, NAME);
    assert_eq!(diagnostics[0].selector, ".badelement");
    assert_eq!(diagnostics[0].position.line, 11);
}
