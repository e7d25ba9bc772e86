//! Stylesheet parser module.

/// Statement-level stylesheet parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
#[allow(clippy::module_inception)]
pub mod parser;

pub use parser::{
    AtRuleNode, Comment, Declaration, Node, ParseError, Position, RuleNode, Stylesheet,
    StylesheetParser, Syntax,
};
