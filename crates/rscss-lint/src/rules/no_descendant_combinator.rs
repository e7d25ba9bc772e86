//! `rscss/no-descendant-combinator`: only `>`, `+` and `~` between compounds.

use rscss_css::{Combinator, Stylesheet};
use tracing::debug;

use super::Rule;
use crate::diagnostic::Diagnostic;
use crate::error::LintError;
use crate::walk::{Flow, walk_selectors};

/// Rule name.
pub const NAME: &str = "rscss/no-descendant-combinator";

/// Rejects selectors that use the descendant (whitespace) combinator.
///
/// At most one diagnostic is reported per selector.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDescendantCombinator;

impl Rule for NoDescendantCombinator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, stylesheet: &Stylesheet) -> Result<Vec<Diagnostic>, LintError> {
        let mut diagnostics = Vec::new();

        walk_selectors(stylesheet, |rule, selector| -> Result<Flow, LintError> {
            let has_descendant = selector
                .nodes
                .iter()
                .any(|node| node.combinator() == Some(Combinator::Descendant));
            if !has_descendant {
                return Ok(Flow::Continue);
            }
            let message = format!("Descendant combinator not allowed: '{}'", selector.text());
            diagnostics.push(Diagnostic::new(NAME, message, rule));
            Ok(Flow::Stop)
        })?;

        debug!(rule = NAME, diagnostics = diagnostics.len(), "checked stylesheet");
        Ok(diagnostics)
    }
}
