//! The lint rules and their activation from configuration.

use rscss_css::Stylesheet;

use crate::config::RuleSetting;
use crate::diagnostic::Diagnostic;
use crate::error::{ConfigError, LintError};
use crate::options::{ResolvedOptions, SecondaryOptions};

/// Class name format rule.
pub mod class_format;
/// Descendant combinator rule.
pub mod no_descendant_combinator;

pub use class_format::ClassFormat;
pub use no_descendant_combinator::NoDescendantCombinator;

/// Names of every rule, in the order they run.
pub const RULE_NAMES: [&str; 2] = [class_format::NAME, no_descendant_combinator::NAME];

/// A check over a whole stylesheet.
pub trait Rule {
    /// The rule name used in configuration and diagnostics.
    fn name(&self) -> &'static str;

    /// Check `stylesheet` and return every diagnostic in document order.
    ///
    /// # Errors
    ///
    /// Returns a [`LintError`] if a rule selector cannot be parsed.
    fn check(&self, stylesheet: &Stylesheet) -> Result<Vec<Diagnostic>, LintError>;
}

/// Build the rule called `name` from its configuration.
///
/// Returns `None` when the setting turns the rule off.
///
/// # Errors
///
/// Returns a [`ConfigError`] for an unknown rule name or secondary options
/// that do not resolve.
pub fn activate(name: &str, setting: &RuleSetting) -> Result<Option<Box<dyn Rule>>, ConfigError> {
    if !RULE_NAMES.contains(&name) {
        return Err(ConfigError::unknown_rule(name));
    }
    if !setting.primary().is_enabled() {
        return Ok(None);
    }

    let rule: Box<dyn Rule> = match name {
        class_format::NAME => {
            let secondary = match setting.secondary() {
                Some(value) => serde_json::from_value::<SecondaryOptions>(value.clone())
                    .map_err(|source| ConfigError::invalid_options(name, source))?,
                None => SecondaryOptions::default(),
            };
            Box::new(ClassFormat::new(ResolvedOptions::resolve(&secondary)?))
        }
        _ => Box::new(NoDescendantCombinator),
    };
    Ok(Some(rule))
}
