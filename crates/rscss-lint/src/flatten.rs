//! Resolving nested rules to standalone selectors.
//!
//! A rule nested inside other rules contributes the selector it would have
//! if written at the top level. The nearest enclosing rule (or `@nest`
//! at-rule) supplies its comma-separated selectors. A `&` in the child is
//! replaced by each of them, and a child without `&` is appended to each
//! with a descendant space. Any other at-rule between the two is
//! transparent.

use rscss_common::warning::warn_once;
use rscss_css::{Node, RuleNode, SelectorList, SelectorParseError, parse_selector_list};

use crate::split::split_compact;

/// Resolve `selector` against its `ancestors`, ordered outermost first.
///
/// Returns one string per combination of ancestor selectors. The child
/// selector itself is not split on commas, so a child list such as
/// `.b, .c` resolves to `.a .b, .c`.
#[must_use]
pub fn resolve_nested_selector(selector: &str, ancestors: &[&Node]) -> Vec<String> {
    let Some((parent, outer)) = ancestors.split_last() else {
        return vec![top_level(selector)];
    };

    let Some(parent_selectors) = parent_selectors(parent) else {
        return resolve_nested_selector(selector, outer);
    };

    let has_nesting = selector.contains('&');
    parent_selectors
        .iter()
        .flat_map(|parent_selector| {
            if has_nesting {
                resolve_nested_selector(parent_selector, outer)
                    .into_iter()
                    .map(|resolved| selector.replace('&', &resolved))
                    .collect::<Vec<_>>()
            } else {
                resolve_nested_selector(&format!("{parent_selector} {selector}"), outer)
            }
        })
        .collect()
}

/// The first string [`resolve_nested_selector`] would return, built
/// without expanding the other ancestor combinations.
///
/// Returns `None` when an enclosing rule has no selectors.
#[must_use]
pub fn resolve_first_selector(selector: &str, ancestors: &[&Node]) -> Option<String> {
    let Some((parent, outer)) = ancestors.split_last() else {
        return Some(top_level(selector));
    };

    let Some(parent_selectors) = parent_selectors(parent) else {
        return resolve_first_selector(selector, outer);
    };
    let parent_selector = parent_selectors.first()?;

    if selector.contains('&') {
        resolve_first_selector(parent_selector, outer)
            .map(|resolved| selector.replace('&', &resolved))
    } else {
        resolve_first_selector(&format!("{parent_selector} {selector}"), outer)
    }
}

/// Flatten `rule` and call `f` with the parsed form of its first resolved
/// selector string.
///
/// # Errors
///
/// Returns the [`SelectorParseError`] if the resolved selector cannot be
/// tokenized.
pub fn flatten_rule<F, R>(rule: &RuleNode, ancestors: &[&Node], f: F) -> Result<R, SelectorParseError>
where
    F: FnOnce(SelectorList) -> R,
{
    let resolved = resolve_first_selector(&rule.selector, ancestors);
    let selectors = parse_selector_list(resolved.as_deref().unwrap_or(&rule.selector))?;
    Ok(f(selectors))
}

/// A selector with no enclosing rule resolves to itself.
fn top_level(selector: &str) -> String {
    if selector.contains('&') {
        let _ = warn_once(
            "flatten",
            &format!("nesting selector '&' outside of a rule: '{selector}'"),
        );
    }
    selector.to_string()
}

/// The selectors a nested rule resolves against, or `None` for an at-rule
/// that passes nesting through.
fn parent_selectors(parent: &Node) -> Option<Vec<String>> {
    match parent {
        Node::Rule(rule) => Some(selector_list(&rule.selector)),
        Node::AtRule(at_rule) if at_rule.name.eq_ignore_ascii_case("nest") => {
            Some(selector_list(&at_rule.params))
        }
        _ => None,
    }
}

/// Split a selector list on top-level commas, ignoring commas inside
/// strings, brackets and parentheses.
fn selector_list(raw: &str) -> Vec<String> {
    let chars: Vec<char> = raw.chars().collect();
    let mut quote: Option<char> = None;
    let mut depth = 0u32;
    let mut escaped = false;

    let runs = split_compact(&chars, |&c, _| {
        if escaped {
            escaped = false;
            return false;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, ',') => return depth == 0,
            _ => {}
        }
        false
    });

    runs.into_iter()
        .map(|run| run.iter().collect::<String>().trim().to_string())
        .filter(|selector| !selector.is_empty())
        .collect()
}
