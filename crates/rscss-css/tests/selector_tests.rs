//! Integration tests for selector tokenization.

use rscss_css::selector::{
    Combinator, NodeKind, Selector, SelectorParseError, parse_selector_list,
};

/// Helper to parse a string that holds exactly one selector.
fn parse_one(raw: &str) -> Selector {
    let mut list = parse_selector_list(raw).unwrap();
    assert_eq!(list.selectors.len(), 1, "expected one selector in {raw:?}");
    list.selectors.remove(0)
}

/// Helper to list the kinds of a selector's nodes.
fn kinds(selector: &Selector) -> Vec<NodeKind> {
    selector.nodes.iter().map(|node| node.kind).collect()
}

#[test]
fn test_parse_class_selector() {
    let selector = parse_one(".foo-bar");
    assert_eq!(kinds(&selector), vec![NodeKind::Class]);
    assert_eq!(selector.nodes[0].value, "foo-bar");
    assert_eq!(selector.nodes[0].raw, ".foo-bar");
    assert!(selector.nodes[0].is_class());
}

#[test]
fn test_parse_child_combinator_keeps_padding() {
    // [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    let selector = parse_one(".foo-bar > .el");
    assert_eq!(
        kinds(&selector),
        vec![
            NodeKind::Class,
            NodeKind::Combinator(Combinator::Child),
            NodeKind::Class,
        ]
    );
    assert_eq!(selector.nodes[1].value, ">");
    assert_eq!(selector.nodes[1].raw, " > ");
    assert_eq!(selector.text(), ".foo-bar > .el");
}

#[test]
fn test_parse_descendant_combinator() {
    // [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    // "A descendant combinator is whitespace that separates two compound selectors."
    let selector = parse_one("a.foo-bar  .el");
    assert_eq!(
        kinds(&selector),
        vec![
            NodeKind::Tag,
            NodeKind::Class,
            NodeKind::Combinator(Combinator::Descendant),
            NodeKind::Class,
        ]
    );
    assert_eq!(selector.nodes[2].combinator(), Some(Combinator::Descendant));
    assert_eq!(selector.nodes[2].value, " ");
    assert_eq!(selector.text(), "a.foo-bar  .el");
}

#[test]
fn test_parse_sibling_combinators() {
    let selector = parse_one(".a ~ .b + .c");
    let combinators: Vec<_> = selector
        .nodes
        .iter()
        .filter_map(|node| node.combinator())
        .collect();
    assert_eq!(
        combinators,
        vec![Combinator::SubsequentSibling, Combinator::NextSibling]
    );
}

#[test]
fn test_parse_selector_list() {
    let list = parse_selector_list(".a, .b > .c").unwrap();
    assert_eq!(list.selectors.len(), 2);
    assert_eq!(list.selectors[0].text(), ".a");
    assert_eq!(list.selectors[1].text(), ".b > .c");
    // Leading whitespace of the second selector is not a combinator
    assert_eq!(list.selectors[1].nodes[0].kind, NodeKind::Class);
    assert_eq!(list.to_string(), ".a, .b > .c");
}

#[test]
fn test_parse_attribute_selector() {
    // [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    let selector = parse_one(r#"[aria-hidden="true"]"#);
    assert_eq!(kinds(&selector), vec![NodeKind::Attribute]);
    assert_eq!(selector.nodes[0].value, "aria-hidden");
    assert_eq!(selector.nodes[0].raw, r#"[aria-hidden="true"]"#);
}

#[test]
fn test_parse_attribute_value_with_brackets() {
    let selector = parse_one(r#"a[title="x]y"].link"#);
    assert_eq!(
        kinds(&selector),
        vec![NodeKind::Tag, NodeKind::Attribute, NodeKind::Class]
    );
}

#[test]
fn test_parse_pseudo_classes_and_elements() {
    let selector = parse_one("a:hover::before:after");
    assert_eq!(
        kinds(&selector),
        vec![
            NodeKind::Tag,
            NodeKind::PseudoClass,
            NodeKind::PseudoElement,
            NodeKind::PseudoElement,
        ]
    );
    assert_eq!(selector.nodes[1].value, ":hover");
    assert_eq!(selector.nodes[2].value, "::before");
}

#[test]
fn test_parse_functional_pseudo_class_is_opaque() {
    let selector = parse_one(".list > li:not(.a .b)");
    assert_eq!(
        kinds(&selector),
        vec![
            NodeKind::Class,
            NodeKind::Combinator(Combinator::Child),
            NodeKind::Tag,
            NodeKind::PseudoClass,
        ]
    );
    assert_eq!(selector.nodes[3].value, ":not");
    assert_eq!(selector.nodes[3].raw, ":not(.a .b)");
}

#[test]
fn test_parse_id_universal_and_nesting() {
    let selector = parse_one("#main > * &-item");
    assert_eq!(
        kinds(&selector),
        vec![
            NodeKind::Id,
            NodeKind::Combinator(Combinator::Child),
            NodeKind::Universal,
            NodeKind::Combinator(Combinator::Descendant),
            NodeKind::Nesting,
        ]
    );
    assert_eq!(selector.nodes[0].value, "main");
    assert_eq!(selector.nodes[4].value, "&-item");
}

#[test]
fn test_parse_leading_and_trailing_combinators() {
    let selector = parse_one("> .child");
    assert_eq!(
        kinds(&selector),
        vec![NodeKind::Combinator(Combinator::Child), NodeKind::Class]
    );
    assert_eq!(selector.text(), "> .child");

    let selector = parse_one(".parent +");
    assert_eq!(
        kinds(&selector),
        vec![NodeKind::Class, NodeKind::Combinator(Combinator::NextSibling)]
    );
}

#[test]
fn test_parse_comment_between_compounds() {
    let selector = parse_one(".a /* note */ .b");
    assert_eq!(
        kinds(&selector),
        vec![
            NodeKind::Class,
            NodeKind::Comment,
            NodeKind::Combinator(Combinator::Descendant),
            NodeKind::Class,
        ]
    );
    assert_eq!(selector.nodes[1].value, "note");
}

#[test]
fn test_parse_escaped_class_name() {
    let selector = parse_one(r".sm\:flex");
    assert_eq!(selector.nodes[0].value, "sm:flex");
    assert_eq!(selector.nodes[0].raw, r".sm\:flex");
}

#[test]
fn test_parse_scss_placeholder_and_interpolation() {
    let selector = parse_one("%button-base");
    assert_eq!(kinds(&selector), vec![NodeKind::Tag]);
    assert_eq!(selector.nodes[0].value, "%button-base");

    let selector = parse_one(".icon-#{$name}");
    assert_eq!(kinds(&selector), vec![NodeKind::Class]);
    assert_eq!(selector.nodes[0].value, "icon-#{$name}");
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        parse_selector_list(".a,,.b"),
        Err(SelectorParseError::Empty { .. })
    ));
    assert!(matches!(
        parse_selector_list("   "),
        Err(SelectorParseError::Empty { .. })
    ));
    assert!(matches!(
        parse_selector_list(". a"),
        Err(SelectorParseError::ExpectedName { prefix: '.', .. })
    ));
    assert!(matches!(
        parse_selector_list("[href"),
        Err(SelectorParseError::Unterminated { .. })
    ));
    assert!(matches!(
        parse_selector_list(".a > > .b"),
        Err(SelectorParseError::UnexpectedChar { found: '>', .. })
    ));
    assert!(matches!(
        parse_selector_list(".a { }"),
        Err(SelectorParseError::UnexpectedChar { found: '{', .. })
    ));
}

#[test]
fn test_error_message_names_the_selector() {
    let err = parse_selector_list(".a,").unwrap_err();
    assert_eq!(err.to_string(), "empty selector in '.a,'");
}
