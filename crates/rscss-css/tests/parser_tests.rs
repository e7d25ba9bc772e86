//! Integration tests for the stylesheet parser.

use rscss_css::{Node, ParseError, Position, Stylesheet, Syntax};

/// Helper to parse plain CSS.
fn parse_css(source: &str) -> Stylesheet {
    Stylesheet::parse(source, Syntax::Css).unwrap()
}

/// Helper to extract a rule or panic.
fn as_rule(node: &Node) -> &rscss_css::RuleNode {
    match node {
        Node::Rule(rule) => rule,
        other => panic!("expected a rule, got {other:?}"),
    }
}

#[test]
fn test_parse_simple_rule() {
    let sheet = parse_css(".search-form { color: red; }");
    assert_eq!(sheet.nodes.len(), 1);

    let rule = as_rule(&sheet.nodes[0]);
    assert_eq!(rule.selector, ".search-form");
    assert_eq!(rule.position, Position::new(1, 1));
    assert_eq!(rule.nodes.len(), 1);

    match &rule.nodes[0] {
        Node::Declaration(decl) => {
            assert_eq!(decl.property, "color");
            assert_eq!(decl.value, "red");
            assert!(!decl.important);
        }
        other => panic!("expected a declaration, got {other:?}"),
    }
}

#[test]
fn test_parse_selector_list_is_kept_raw() {
    let sheet = parse_css(".a > .b,\n.c .d { }");
    assert_eq!(as_rule(&sheet.nodes[0]).selector, ".a > .b,\n.c .d");
}

#[test]
fn test_parse_nested_rules() {
    let sheet = parse_css(".search-form { .field { } &:hover { } > .button { } }");
    let rule = as_rule(&sheet.nodes[0]);
    let selectors: Vec<_> = rule
        .nodes
        .iter()
        .map(|node| as_rule(node).selector.as_str())
        .collect();
    assert_eq!(selectors, vec![".field", "&:hover", "> .button"]);
    assert_eq!(sheet.nodes[0].children().len(), 3);
}

#[test]
fn test_parse_block_at_rule() {
    let sheet = parse_css("@media (min-width: 10px) { .a { } }");
    match &sheet.nodes[0] {
        Node::AtRule(at_rule) => {
            assert_eq!(at_rule.name, "media");
            assert_eq!(at_rule.params, "(min-width: 10px)");
            let nodes = at_rule.nodes.as_ref().unwrap();
            assert_eq!(as_rule(&nodes[0]).selector, ".a");
        }
        other => panic!("expected an at-rule, got {other:?}"),
    }
}

#[test]
fn test_parse_statement_at_rule() {
    let sheet = parse_css("@import \"base.css\";\n.a { }");
    assert_eq!(sheet.nodes.len(), 2);
    match &sheet.nodes[0] {
        Node::AtRule(at_rule) => {
            assert_eq!(at_rule.name, "import");
            assert_eq!(at_rule.params, "\"base.css\"");
            assert!(at_rule.nodes.is_none());
        }
        other => panic!("expected an at-rule, got {other:?}"),
    }
    assert!(sheet.nodes[0].children().is_empty());
    assert_eq!(sheet.nodes[1].position(), Position::new(2, 1));
}

#[test]
fn test_parse_block_comment() {
    let sheet = parse_css("/* header */\n.a { }");
    match &sheet.nodes[0] {
        Node::Comment(comment) => {
            assert_eq!(comment.text, "header");
            assert!(!comment.inline);
        }
        other => panic!("expected a comment, got {other:?}"),
    }
}

#[test]
fn test_parse_scss_line_comment() {
    let sheet = Stylesheet::parse("// note\n.a {\n  // inner\n  .b { }\n}", Syntax::Scss).unwrap();
    assert_eq!(sheet.nodes.len(), 2);
    match &sheet.nodes[0] {
        Node::Comment(comment) => {
            assert_eq!(comment.text, "note");
            assert!(comment.inline);
        }
        other => panic!("expected a comment, got {other:?}"),
    }
    let rule = as_rule(&sheet.nodes[1]);
    assert_eq!(rule.position, Position::new(2, 1));
    assert_eq!(as_rule(&rule.nodes[1]).position, Position::new(4, 3));
}

#[test]
fn test_parse_scss_interpolation_in_selector() {
    let sheet = Stylesheet::parse(".icon-#{$name} { }", Syntax::Scss).unwrap();
    assert_eq!(as_rule(&sheet.nodes[0]).selector, ".icon-#{$name}");
}

#[test]
fn test_parse_braces_inside_strings() {
    let sheet = parse_css("a[title=\"x{y\"] { content: \"}\"; }");
    let rule = as_rule(&sheet.nodes[0]);
    assert_eq!(rule.selector, "a[title=\"x{y\"]");
    assert_eq!(rule.nodes.len(), 1);
}

#[test]
fn test_parse_important() {
    let sheet = parse_css("a { color: red !important }");
    match &as_rule(&sheet.nodes[0]).nodes[0] {
        Node::Declaration(decl) => {
            assert_eq!(decl.value, "red");
            assert!(decl.important);
        }
        other => panic!("expected a declaration, got {other:?}"),
    }
}

#[test]
fn test_parse_positions() {
    let sheet = parse_css("\n  .a {\n    .b { }\n  }");
    let rule = as_rule(&sheet.nodes[0]);
    assert_eq!(rule.position, Position::new(2, 3));
    assert_eq!(rule.nodes[0].position(), Position::new(3, 5));
}

#[test]
fn test_parse_empty_stylesheet() {
    assert!(parse_css("").nodes.is_empty());
    assert!(parse_css("  ;; \n").nodes.is_empty());
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        Stylesheet::parse(".a {", Syntax::Css),
        Err(ParseError::UnclosedBlock {
            position: Position::new(1, 4),
        })
    );
    assert_eq!(
        Stylesheet::parse("}", Syntax::Css),
        Err(ParseError::UnexpectedClosingBrace {
            position: Position::new(1, 1),
        })
    );
    assert_eq!(
        Stylesheet::parse(".a { content: \"x }", Syntax::Css),
        Err(ParseError::UnclosedString {
            position: Position::new(1, 15),
        })
    );
    assert_eq!(
        Stylesheet::parse("/* open", Syntax::Css),
        Err(ParseError::UnclosedComment {
            position: Position::new(1, 1),
        })
    );
    assert_eq!(
        Stylesheet::parse("{ }", Syntax::Css),
        Err(ParseError::MissingSelector {
            position: Position::new(1, 1),
        })
    );
    assert_eq!(
        Stylesheet::parse("a { color red }", Syntax::Css),
        Err(ParseError::UnknownWord {
            word: "color".to_string(),
            position: Position::new(1, 5),
        })
    );
    assert!(matches!(
        Stylesheet::parse(".a:not(.b { }", Syntax::Css),
        Err(ParseError::UnclosedBracket { bracket: '(', .. })
    ));
}

#[test]
fn test_parse_error_display() {
    let err = Stylesheet::parse(".a {", Syntax::Css).unwrap_err();
    assert_eq!(err.to_string(), "1:4: unclosed block");
}

#[test]
fn test_syntax_from_path_and_str() {
    use std::path::Path;
    use std::str::FromStr;

    assert_eq!(Syntax::from_path(Path::new("a/b.scss")), Syntax::Scss);
    assert_eq!(Syntax::from_path(Path::new("a/b.SCSS")), Syntax::Scss);
    assert_eq!(Syntax::from_path(Path::new("a/b.css")), Syntax::Css);
    assert_eq!(Syntax::from_path(Path::new("noext")), Syntax::Css);
    assert_eq!(Syntax::from_str("scss").unwrap(), Syntax::Scss);
    assert_eq!(Syntax::Css.to_string(), "css");
}
