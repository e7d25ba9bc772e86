//! Linter configuration.
//!
//! Configuration is JSON with one entry per rule:
//!
//! ```json
//! {
//!   "rules": {
//!     "rscss/no-descendant-combinator": "always",
//!     "rscss/class-format": [true, { "maxDepth": 2 }]
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strum_macros::{Display, EnumString};

use crate::rules::{class_format, no_descendant_combinator};

/// Classes commonly taken from Bootstrap and extended as components.
pub const BOOTSTRAP_COMPONENTS: [&str; 4] = ["btn", "container", "checkbox", "radio"];

/// Keyword form of the primary option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    /// Rule on.
    Always,
    /// Rule off.
    Never,
}

/// Whether a rule is on: `true`, `false`, `"always"` or `"never"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryOption {
    /// `true` or `false`.
    Enabled(bool),
    /// `"always"` or `"never"`.
    Keyword(Keyword),
}

impl PrimaryOption {
    /// True unless the option is `false` or `"never"`.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled(true) | Self::Keyword(Keyword::Always))
    }
}

/// One rule's entry: the primary option alone, or with secondary options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSetting {
    /// `true`
    Primary(PrimaryOption),
    /// `[true]`
    Single((PrimaryOption,)),
    /// `[true, { ... }]`
    WithOptions(PrimaryOption, Value),
}

impl RuleSetting {
    /// The primary option.
    #[must_use]
    pub const fn primary(&self) -> PrimaryOption {
        match self {
            Self::Primary(primary) | Self::Single((primary,)) | Self::WithOptions(primary, _) => {
                *primary
            }
        }
    }

    /// The secondary options, if any were given.
    #[must_use]
    pub const fn secondary(&self) -> Option<&Value> {
        match self {
            Self::WithOptions(_, value) => Some(value),
            Self::Primary(_) | Self::Single(_) => None,
        }
    }
}

impl From<bool> for RuleSetting {
    fn from(enabled: bool) -> Self {
        Self::Primary(PrimaryOption::Enabled(enabled))
    }
}

/// Rule settings keyed by rule name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Settings per rule. Rules run in name order.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleSetting>,
}

impl Config {
    /// The bundled preset: both rules on, with the Bootstrap component
    /// names whitelisted.
    #[must_use]
    pub fn recommended() -> Self {
        Self::default()
            .with_rule(
                no_descendant_combinator::NAME,
                RuleSetting::Primary(PrimaryOption::Keyword(Keyword::Always)),
            )
            .with_rule(
                class_format::NAME,
                RuleSetting::WithOptions(
                    PrimaryOption::Enabled(true),
                    json!({ "componentWhitelist": BOOTSTRAP_COMPONENTS }),
                ),
            )
    }

    /// Parse a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON or settings of the
    /// wrong shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the entry for `name`, replacing any previous one.
    #[must_use]
    pub fn with_rule(mut self, name: impl Into<String>, setting: impl Into<RuleSetting>) -> Self {
        let _ = self.rules.insert(name.into(), setting.into());
        self
    }
}
