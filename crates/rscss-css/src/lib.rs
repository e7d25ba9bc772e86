//! Stylesheet and selector parsing for the RSCSS linter.
//!
//! # Scope
//!
//! This crate implements the input side of the linter:
//! - **Stylesheet Parser** ([§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing))
//!   - Rules, at-rules, declarations and comments as a tree
//!   - Nested rules ([CSS Nesting](https://www.w3.org/TR/css-nesting-1/))
//!   - SCSS line comments and interpolation
//!   - Raw selector text and source positions for every node
//!
//! - **Selector Parser** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Selector lists split into flat token chains
//!   - Type, class, ID, universal, attribute, pseudo and nesting selectors
//!   - Combinators with their raw whitespace
//!
//! # Not Yet Implemented
//!
//! - Declaration value parsing (values are kept as text)
//! - Namespace prefixes in type and attribute selectors

/// Stylesheet parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod parser;
/// Selector tokenization per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

// Re-exports for convenience
pub use parser::{
    AtRuleNode, Comment, Declaration, Node, ParseError, Position, RuleNode, Stylesheet, Syntax,
};
pub use selector::{
    Combinator, NodeKind, Selector, SelectorList, SelectorNode, SelectorParseError,
    parse_selector_list,
};
