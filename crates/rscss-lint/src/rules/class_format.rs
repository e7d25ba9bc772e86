//! `rscss/class-format`: components, elements, variants and helpers.
//!
//! ```css
//! .search-form { }                   /* component */
//! .search-form > .field { }          /* element */
//! .search-form > .field.-wide { }    /* variant */
//! ._pull-left { }                    /* helper */
//! ```

use rscss_css::Stylesheet;
use tracing::debug;

use super::Rule;
use crate::diagnostic::Diagnostic;
use crate::error::{ConfigError, LintError};
use crate::options::{ResolvedOptions, SecondaryOptions};
use crate::validate::{Stop, validate_selector};
use crate::walk::{Flow, walk_selectors};

/// Rule name.
pub const NAME: &str = "rscss/class-format";

/// Checks class names against the component/element/variant/helper
/// convention and limits nesting depth.
#[derive(Debug, Clone)]
pub struct ClassFormat {
    options: ResolvedOptions,
}

impl ClassFormat {
    /// Create the rule with already resolved options.
    #[must_use]
    pub const fn new(options: ResolvedOptions) -> Self {
        Self { options }
    }

    /// Resolve `options` and create the rule.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a pattern option does not compile.
    pub fn from_options(options: &SecondaryOptions) -> Result<Self, ConfigError> {
        ResolvedOptions::resolve(options).map(Self::new)
    }

    /// The options this rule checks with.
    #[must_use]
    pub const fn options(&self) -> &ResolvedOptions {
        &self.options
    }
}

impl Rule for ClassFormat {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, stylesheet: &Stylesheet) -> Result<Vec<Diagnostic>, LintError> {
        let mut diagnostics = Vec::new();
        let mut visited = 0usize;

        walk_selectors(stylesheet, |rule, selector| -> Result<Flow, LintError> {
            visited += 1;
            match validate_selector(selector, &self.options) {
                Ok(()) => Ok(Flow::Continue),
                Err(Stop::Exempt) => Ok(Flow::Stop),
                Err(Stop::Reject(violation)) => {
                    diagnostics.push(Diagnostic::new(NAME, violation.to_string(), rule));
                    Ok(Flow::Stop)
                }
            }
        })?;

        debug!(
            rule = NAME,
            selectors = visited,
            diagnostics = diagnostics.len(),
            "checked stylesheet"
        );
        Ok(diagnostics)
    }
}
