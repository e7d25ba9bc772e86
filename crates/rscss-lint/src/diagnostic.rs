//! Diagnostics reported by rules.

use std::fmt;

use rscss_css::{Position, RuleNode};
use serde::Serialize;

/// One problem found in a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// The rule that reported it, e.g. `rscss/class-format`.
    pub rule_name: &'static str,
    /// The user-facing message.
    pub message: String,
    /// The selector of the offending rule, as written.
    pub selector: String,
    /// Where the offending rule starts.
    pub position: Position,
}

impl Diagnostic {
    /// Create a diagnostic pointing at `rule`.
    pub fn new(rule_name: &'static str, message: impl Into<String>, rule: &RuleNode) -> Self {
        Self {
            rule_name,
            message: message.into(),
            selector: rule.selector.clone(),
            position: rule.position,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}  ({})", self.position, self.message, self.rule_name)
    }
}
