//! Error types for rule activation and linting.

use rscss_css::{ParseError, SelectorParseError};
use thiserror::Error;

/// A class pattern that cannot be compiled.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern string is empty.
    #[error("pattern is empty")]
    Empty,

    /// The pattern carries a flag that makes repeated tests stateful.
    #[error("pattern '{pattern}' uses the repeat-match flag '{flag}'")]
    RepeatMatchFlag {
        /// The pattern as written.
        pattern: String,
        /// The offending flag (`g` or `y`).
        flag: char,
    },

    /// The pattern carries a flag that is not a regular expression flag.
    #[error("pattern '{pattern}' uses unknown flag '{flag}'")]
    UnknownFlag {
        /// The pattern as written.
        pattern: String,
        /// The offending flag.
        flag: char,
    },

    /// The regular expression itself does not compile.
    #[error("invalid pattern '{pattern}'")]
    Regex {
        /// The pattern as written.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}

/// Errors raised while activating rules from a configuration.
///
/// These are fatal: no stylesheet is checked with a configuration that
/// fails to resolve.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration names a rule that does not exist.
    #[error("unknown rule '{name}'")]
    UnknownRule {
        /// The rule name as written.
        name: String,
    },

    /// A rule's secondary options do not have the expected shape.
    #[error("invalid options for '{rule}'")]
    InvalidOptions {
        /// The rule the options belong to.
        rule: String,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// One of the class pattern options cannot be compiled.
    #[error("invalid '{option}' option")]
    Pattern {
        /// The option name (`component`, `element`, `variant` or `helper`).
        option: &'static str,
        /// The underlying pattern error.
        #[source]
        source: PatternError,
    },
}

impl ConfigError {
    /// Create an unknown rule error.
    pub fn unknown_rule(name: impl Into<String>) -> Self {
        Self::UnknownRule { name: name.into() }
    }

    /// Create an options error.
    pub fn invalid_options(rule: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidOptions {
            rule: rule.into(),
            source,
        }
    }
}

/// Errors that abort checking a stylesheet.
#[derive(Debug, Error)]
pub enum LintError {
    /// The stylesheet source does not parse.
    #[error("stylesheet parse error")]
    Parse(#[from] ParseError),

    /// A (flattened) rule selector does not parse.
    #[error("selector parse error")]
    Selector(#[from] SelectorParseError),
}
