//! Depth-first traversal of every selector in a stylesheet.

use rscss_css::{Node, RuleNode, Selector, SelectorParseError, Stylesheet};
use tracing::trace;

use crate::flatten::flatten_rule;

/// What the walker should do after a visitor call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Go on with the next selector of the same rule.
    Continue,
    /// Skip the remaining selectors of the current rule.
    ///
    /// Nested rules are still visited: each one is flattened on its own and
    /// validated independently of its ancestors.
    Stop,
}

/// Visit every selector of every rule in document order, parents before
/// children.
///
/// Each rule is flattened against its ancestors first, so `visitor` always
/// sees standalone selectors. At-rules are not visited themselves but their
/// contents are.
///
/// # Errors
///
/// Stops at the first error, either a selector that fails to parse or an
/// error returned by `visitor`.
pub fn walk_selectors<F, E>(stylesheet: &Stylesheet, mut visitor: F) -> Result<(), E>
where
    F: FnMut(&RuleNode, &Selector) -> Result<Flow, E>,
    E: From<SelectorParseError>,
{
    let mut ancestors = Vec::new();
    visit_nodes(&stylesheet.nodes, &mut ancestors, &mut visitor)
}

fn visit_nodes<'a, F, E>(
    nodes: &'a [Node],
    ancestors: &mut Vec<&'a Node>,
    visitor: &mut F,
) -> Result<(), E>
where
    F: FnMut(&RuleNode, &Selector) -> Result<Flow, E>,
    E: From<SelectorParseError>,
{
    for node in nodes {
        if let Node::Rule(rule) = node {
            visit_rule(rule, ancestors, visitor)?;
        }

        let children = node.children();
        if !children.is_empty() {
            ancestors.push(node);
            let result = visit_nodes(children, ancestors, visitor);
            let _ = ancestors.pop();
            result?;
        }
    }
    Ok(())
}

fn visit_rule<F, E>(rule: &RuleNode, ancestors: &[&Node], visitor: &mut F) -> Result<(), E>
where
    F: FnMut(&RuleNode, &Selector) -> Result<Flow, E>,
    E: From<SelectorParseError>,
{
    flatten_rule(rule, ancestors, |list| -> Result<(), E> {
        for selector in &list.selectors {
            trace!(rule = %rule.selector, selector = %selector.text(), "visit selector");
            if visitor(rule, selector)? == Flow::Stop {
                break;
            }
        }
        Ok(())
    })?
}
