//! Class name classification.
//!
//! Every class token is tested against four patterns: component, element,
//! variant and helper. Each may be one of the built-in naming styles or a
//! custom regular expression.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use strum_macros::{Display, EnumString};

use crate::error::PatternError;

/// A built-in naming style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ClassificationStyle {
    /// Two or more lowercase words joined by hyphens: `search-form`.
    Component,
    /// A single lowercase word: `field`.
    Element,
    /// One or more hyphen-prefixed lowercase segments: `-large-red`.
    Variant,
    /// An underscore-prefixed name: `_pull-left`.
    Helper,
    /// Capitalized words without separators: `SearchForm`.
    PascalCase,
    /// A lowercase word followed by capitalized words: `searchForm`.
    CamelCase,
}

impl ClassificationStyle {
    /// The regular expression for this style.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Component => r"^([a-z][a-z0-9]*)(-([a-z][a-z0-9]*))+$",
            Self::Element => r"^([a-z][a-z0-9]*)$",
            Self::Variant => r"^(-[a-z0-9]+)(-[a-z0-9]+)*$",
            Self::Helper => r"^_([a-z][a-z0-9\-]*)$",
            Self::PascalCase => r"^([A-Z][a-z0-9]*)+$",
            Self::CamelCase => r"^([a-z][a-z0-9]*)([A-Z][a-z0-9]*)+$",
        }
    }
}

/// How a class pattern option is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSpec {
    /// A built-in style by name.
    Style(ClassificationStyle),
    /// A custom regular expression, bare (`^[a-z]+$`) or as a literal with
    /// flags (`/^[a-z]+$/i`).
    Custom(String),
}

impl PatternSpec {
    /// Read an option string: a style name if it is one, a custom pattern
    /// otherwise.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        ClassificationStyle::from_str(value)
            .map_or_else(|_| Self::Custom(value.to_string()), Self::Style)
    }
}

impl From<ClassificationStyle> for PatternSpec {
    fn from(style: ClassificationStyle) -> Self {
        Self::Style(style)
    }
}

impl fmt::Display for PatternSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Style(style) => write!(f, "{style}"),
            Self::Custom(pattern) => f.write_str(pattern),
        }
    }
}

/// A compiled class pattern.
#[derive(Debug, Clone)]
pub struct ClassPattern {
    spec: PatternSpec,
    regex: Regex,
}

impl ClassPattern {
    /// Compile a pattern option.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] for an empty pattern, a `g` or `y` flag,
    /// an unknown flag, or a regular expression that does not compile.
    pub fn compile(spec: &PatternSpec) -> Result<Self, PatternError> {
        let source = match spec {
            PatternSpec::Style(style) => style.pattern().to_string(),
            PatternSpec::Custom(pattern) => custom_regex(pattern)?,
        };
        let regex = Regex::new(&source).map_err(|source| PatternError::Regex {
            pattern: spec.to_string(),
            source,
        })?;
        Ok(Self {
            spec: spec.clone(),
            regex,
        })
    }

    /// Compile a built-in style. Built-in patterns always compile.
    ///
    /// # Errors
    ///
    /// See [`ClassPattern::compile`].
    pub fn style(style: ClassificationStyle) -> Result<Self, PatternError> {
        Self::compile(&PatternSpec::Style(style))
    }

    /// Test a class name (without its leading `.`).
    #[must_use]
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// The option this pattern was compiled from.
    #[must_use]
    pub const fn spec(&self) -> &PatternSpec {
        &self.spec
    }
}

/// Turn a custom pattern option into regex source.
///
/// `/body/flags` literals have their flags mapped to an inline group.
/// Anything else is used as written.
fn custom_regex(pattern: &str) -> Result<String, PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }

    let literal = pattern
        .strip_prefix('/')
        .and_then(|rest| rest.rsplit_once('/'));
    let Some((body, flags)) = literal else {
        return Ok(pattern.to_string());
    };
    if body.is_empty() {
        return Err(PatternError::Empty);
    }

    let mut inline = String::new();
    for flag in flags.chars() {
        match flag {
            'g' | 'y' => {
                return Err(PatternError::RepeatMatchFlag {
                    pattern: pattern.to_string(),
                    flag,
                });
            }
            'i' | 'm' | 's' | 'x' => {
                if !inline.contains(flag) {
                    inline.push(flag);
                }
            }
            // Unicode matching is always on
            'u' => {}
            _ => {
                return Err(PatternError::UnknownFlag {
                    pattern: pattern.to_string(),
                    flag,
                });
            }
        }
    }

    if inline.is_empty() {
        Ok(body.to_string())
    } else {
        Ok(format!("(?{inline}){body}"))
    }
}
