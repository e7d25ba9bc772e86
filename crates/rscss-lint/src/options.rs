//! Secondary options of the class format rule.

use serde::{Deserialize, Serialize};

use crate::classify::{ClassPattern, ClassificationStyle, PatternSpec};
use crate::error::ConfigError;

/// Depth limit used when `maxDepth` is not given.
pub const DEFAULT_MAX_DEPTH: u32 = 3;

const fn default_max_depth() -> Option<u32> {
    Some(DEFAULT_MAX_DEPTH)
}

/// A class pattern option as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternOption {
    /// `true` keeps the default style, `false` turns the check off.
    Enabled(bool),
    /// A style name (`"pascal-case"`) or a custom pattern.
    Pattern(String),
}

/// Secondary options as written in configuration, with camelCase keys.
///
/// ```json
/// { "component": "pascal-case", "maxDepth": 4, "componentWhitelist": ["btn"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryOptions {
    /// Pattern for component names. Defaults to the `component` style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<PatternOption>,
    /// Pattern for element names. Defaults to the `element` style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<PatternOption>,
    /// Pattern for variant names. Defaults to the `variant` style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<PatternOption>,
    /// Pattern for helper names. Defaults to the `helper` style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper: Option<PatternOption>,
    /// Maximum number of element levels below the component. `null` turns
    /// the depth check off.
    #[serde(default = "default_max_depth")]
    pub max_depth: Option<u32>,
    /// Class names accepted as components whatever their shape.
    #[serde(default)]
    pub component_whitelist: Vec<String>,
}

impl Default for SecondaryOptions {
    fn default() -> Self {
        Self {
            component: None,
            element: None,
            variant: None,
            helper: None,
            max_depth: default_max_depth(),
            component_whitelist: Vec::new(),
        }
    }
}

/// Secondary options with every pattern compiled.
///
/// Built once when the rule is activated and only read afterwards.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    component: Option<ClassPattern>,
    element: Option<ClassPattern>,
    variant: Option<ClassPattern>,
    helper: Option<ClassPattern>,
    max_depth: Option<u32>,
    component_whitelist: Vec<String>,
}

impl ResolvedOptions {
    /// Compile `options`, filling in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pattern`] naming the first option whose
    /// pattern does not compile.
    pub fn resolve(options: &SecondaryOptions) -> Result<Self, ConfigError> {
        Ok(Self {
            component: resolve_pattern(
                "component",
                options.component.as_ref(),
                ClassificationStyle::Component,
            )?,
            element: resolve_pattern(
                "element",
                options.element.as_ref(),
                ClassificationStyle::Element,
            )?,
            variant: resolve_pattern(
                "variant",
                options.variant.as_ref(),
                ClassificationStyle::Variant,
            )?,
            helper: resolve_pattern("helper", options.helper.as_ref(), ClassificationStyle::Helper)?,
            max_depth: options.max_depth,
            component_whitelist: options.component_whitelist.clone(),
        })
    }

    /// The component pattern, if the component check is on.
    #[must_use]
    pub const fn component(&self) -> Option<&ClassPattern> {
        self.component.as_ref()
    }

    /// The element pattern, if the element check is on.
    #[must_use]
    pub const fn element(&self) -> Option<&ClassPattern> {
        self.element.as_ref()
    }

    /// The variant pattern, if variant checks are on.
    #[must_use]
    pub const fn variant(&self) -> Option<&ClassPattern> {
        self.variant.as_ref()
    }

    /// The helper pattern, if the helper check is on.
    #[must_use]
    pub const fn helper(&self) -> Option<&ClassPattern> {
        self.helper.as_ref()
    }

    /// The depth limit, if the depth check is on.
    #[must_use]
    pub const fn max_depth(&self) -> Option<u32> {
        self.max_depth
    }

    /// Whitelisted component names.
    #[must_use]
    pub fn component_whitelist(&self) -> &[String] {
        &self.component_whitelist
    }

    /// True if `name` is whitelisted or matches the component pattern.
    #[must_use]
    pub fn is_component(&self, name: &str) -> bool {
        self.component_whitelist.iter().any(|allowed| allowed == name)
            || self.component.as_ref().is_some_and(|pattern| pattern.is_match(name))
    }
}

fn resolve_pattern(
    option: &'static str,
    value: Option<&PatternOption>,
    default: ClassificationStyle,
) -> Result<Option<ClassPattern>, ConfigError> {
    let spec = match value {
        None | Some(PatternOption::Enabled(true)) => PatternSpec::Style(default),
        Some(PatternOption::Enabled(false)) => return Ok(None),
        Some(PatternOption::Pattern(pattern)) => PatternSpec::parse(pattern),
    };
    ClassPattern::compile(&spec)
        .map(Some)
        .map_err(|source| ConfigError::Pattern { option, source })
}
