//! Running the configured rules over a stylesheet.

use rscss_css::{Stylesheet, Syntax};
use tracing::debug;

use crate::config::Config;
use crate::diagnostic::Diagnostic;
use crate::error::{ConfigError, LintError};
use crate::rules::{self, Rule};

/// A set of activated rules.
pub struct Linter {
    rules: Vec<Box<dyn Rule>>,
}

impl Linter {
    /// Activate every rule enabled in `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an unknown rule name or options that
    /// do not resolve. Nothing is activated in that case.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let mut active = Vec::new();
        for (name, setting) in &config.rules {
            if let Some(rule) = rules::activate(name, setting)? {
                active.push(rule);
            }
        }

        let linter = Self { rules: active };
        debug!(rules = ?linter.rule_names(), "activated rules");
        Ok(linter)
    }

    /// Activate the bundled preset.
    ///
    /// # Errors
    ///
    /// See [`Linter::from_config`].
    pub fn recommended() -> Result<Self, ConfigError> {
        Self::from_config(&Config::recommended())
    }

    /// Names of the active rules, in the order they run.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Run every active rule over `stylesheet`.
    ///
    /// Diagnostics are grouped by rule, and in document order within a rule.
    ///
    /// # Errors
    ///
    /// Returns a [`LintError`] if a rule selector cannot be parsed.
    pub fn lint(&self, stylesheet: &Stylesheet) -> Result<Vec<Diagnostic>, LintError> {
        let mut diagnostics = Vec::new();
        for rule in &self.rules {
            diagnostics.extend(rule.check(stylesheet)?);
        }
        Ok(diagnostics)
    }

    /// Parse `source` and lint it.
    ///
    /// # Errors
    ///
    /// Returns a [`LintError`] if the source or a rule selector cannot be
    /// parsed.
    pub fn lint_source(&self, source: &str, syntax: Syntax) -> Result<Vec<Diagnostic>, LintError> {
        let stylesheet = Stylesheet::parse(source, syntax)?;
        self.lint(&stylesheet)
    }
}
