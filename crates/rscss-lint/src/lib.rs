//! RSCSS class naming rules.
//!
//! This crate checks stylesheets against the
//! [RSCSS](https://ricostacruz.com/rscss/) conventions:
//! - **`rscss/class-format`** - every class is a component
//!   (`.search-form`), an element (`.field`), a variant (`.-wide`) or a
//!   helper (`._pull-left`), with a limit on nesting depth
//! - **`rscss/no-descendant-combinator`** - compounds are joined with `>`,
//!   `+` or `~`, never plain whitespace
//!
//! # Pipeline
//!
//! 1. [`walk::walk_selectors`] visits every rule in document order
//! 2. [`flatten::flatten_rule`] resolves nested rules to standalone selectors
//! 3. [`parts::levels`] splits a selector into component and element levels
//! 4. [`validate`] classifies the classes of each level
//!
//! # Example
//!
//! ```ignore
//! use rscss_css::Syntax;
//! use rscss_lint::Linter;
//!
//! let linter = Linter::recommended()?;
//! for diagnostic in linter.lint_source(".badcomponent { }", Syntax::Css)? {
//!     println!("{diagnostic}");
//! }
//! ```

pub mod classify;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod flatten;
pub mod linter;
pub mod options;
pub mod parts;
pub mod rules;
pub mod split;
pub mod validate;
pub mod walk;

// Re-exports for convenience
pub use classify::{ClassPattern, ClassificationStyle, PatternSpec};
pub use config::{Config, Keyword, PrimaryOption, RuleSetting};
pub use diagnostic::Diagnostic;
pub use error::{ConfigError, LintError, PatternError};
pub use linter::Linter;
pub use options::{PatternOption, ResolvedOptions, SecondaryOptions};
pub use rules::{ClassFormat, NoDescendantCombinator, Rule};
pub use validate::{Stop, Violation};
pub use walk::Flow;
