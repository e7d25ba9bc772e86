//! Splitting a selector into depth levels.
//!
//! `.search-form > .field ~ .button.-primary` has two levels: the
//! component level `.search-form` and the element level `.button.-primary`.
//! Descendant and child combinators start a new level. Sibling combinators
//! do not, but only the compound after the last one is kept, so
//! `.a ~ .b ~ .c` is the level `.c`.

use std::fmt;

use rscss_css::{Combinator, Selector, SelectorNode};

use crate::split::{Segment, split_keeping};

/// One combinator-delimited position in a selector chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level<'a> {
    nodes: &'a [SelectorNode],
}

impl<'a> Level<'a> {
    /// Every token of this level (classes, tags, attributes, pseudos, comments).
    #[must_use]
    pub const fn nodes(&self) -> &'a [SelectorNode] {
        self.nodes
    }

    /// The class tokens of this level, in source order.
    #[must_use]
    pub fn classes(&self) -> Vec<&'a SelectorNode> {
        self.nodes.iter().filter(|node| node.is_class()).collect()
    }

    /// True if every token of this level is a class.
    #[must_use]
    pub fn is_all_classes(&self) -> bool {
        self.nodes.iter().all(SelectorNode::is_class)
    }

    /// The trimmed source text of this level.
    #[must_use]
    pub fn text(&self) -> String {
        self.to_string().trim().to_string()
    }
}

impl fmt::Display for Level<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes {
            f.write_str(&node.raw)?;
        }
        Ok(())
    }
}

/// Split `selector` into levels. Level 0 is the component level.
///
/// A leading or trailing descendant/child combinator yields an empty level
/// at that end.
#[must_use]
pub fn levels(selector: &Selector) -> Vec<Level<'_>> {
    split_keeping(&selector.nodes, |node, _| {
        matches!(
            node.combinator(),
            Some(Combinator::Descendant | Combinator::Child)
        )
    })
    .iter()
    .filter_map(Segment::run)
    .map(last_compound)
    .collect()
}

/// Drop everything up to the last combinator of `nodes`.
fn last_compound(nodes: &[SelectorNode]) -> Level<'_> {
    let last = split_keeping(nodes, |node, _| node.combinator().is_some())
        .last()
        .and_then(Segment::run)
        .unwrap_or_default();
    Level { nodes: last }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rscss_css::parse_selector_list;

    fn level_texts(raw: &str) -> Vec<String> {
        let list = parse_selector_list(raw).unwrap();
        levels(&list.selectors[0]).iter().map(Level::text).collect()
    }

    #[test]
    fn test_levels_split_on_child_and_descendant() {
        assert_eq!(level_texts(".a > .b .c"), vec![".a", ".b", ".c"]);
        assert_eq!(level_texts(".a.-x"), vec![".a.-x"]);
    }

    #[test]
    fn test_levels_keep_last_sibling_compound() {
        assert_eq!(level_texts(".a ~ .b + .c > .d"), vec![".c", ".d"]);
    }

    #[test]
    fn test_levels_with_leading_combinator() {
        assert_eq!(level_texts("> .a"), vec!["", ".a"]);
    }
}
