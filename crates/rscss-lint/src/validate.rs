//! Class name validation for one selector.
//!
//! Checks run in a fixed order: helpers, then the component, then its
//! variants, then every element level, then the depth. The first failing
//! check ends validation of the selector with a single [`Violation`].

use std::fmt;

use rscss_css::{Selector, SelectorNode};
use strum_macros::AsRefStr;

use crate::options::ResolvedOptions;
use crate::parts::{Level, levels};

/// Why a selector breaks the naming convention.
///
/// `Display` renders the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum Violation {
    /// No class of the component level is a component name.
    InvalidComponentName(String),
    /// Helper classes mixed with other classes at the component level.
    InvalidHelperName(String),
    /// The first class of an element level is not an element name.
    InvalidElementName(String),
    /// An element level made only of variants.
    VariantWithoutElement(String),
    /// One class that should be a variant but is not.
    InvalidVariantName(String),
    /// Several classes that should be variants but are not.
    InvalidVariantNames(Vec<String>),
    /// More than one component name at the component level.
    TooManyComponents(String),
    /// More element levels than allowed.
    TooDeep(String),
}

impl Violation {
    /// `InvalidVariantName` for one class, `InvalidVariantNames` for more.
    #[must_use]
    pub fn invalid_variants(mut names: Vec<String>) -> Self {
        if names.len() == 1 {
            Self::InvalidVariantName(names.remove(0))
        } else {
            Self::InvalidVariantNames(names)
        }
    }

    /// Stable identifier of this kind of violation, e.g. `tooDeep`.
    #[must_use]
    pub fn id(&self) -> &str {
        self.as_ref()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidComponentName(s) => write!(f, "Invalid component name: '{}'", s.trim()),
            Self::InvalidHelperName(s) => write!(f, "Invalid helper name: '{}'", s.trim()),
            Self::InvalidElementName(s) => write!(f, "Invalid element name: '{}'", s.trim()),
            Self::VariantWithoutElement(s) => write!(f, "Variant has no element: '{}'", s.trim()),
            Self::InvalidVariantName(s) => write!(f, "Invalid variant name: '{}'", s.trim()),
            Self::InvalidVariantNames(names) => {
                write!(f, "Invalid variant names: {}", names.join(", "))
            }
            Self::TooManyComponents(s) => {
                write!(f, "Only one component name is allowed: '{}'", s.trim())
            }
            Self::TooDeep(s) => write!(f, "Component too deep: '{}'", s.trim()),
        }
    }
}

/// Why validation of a selector ended early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stop {
    /// The selector is outside the convention (no component classes, or
    /// helpers only). Nothing is reported.
    Exempt,
    /// The selector breaks the convention.
    Reject(Violation),
}

impl From<Violation> for Stop {
    fn from(violation: Violation) -> Self {
        Self::Reject(violation)
    }
}

/// Run every check on one flattened selector.
///
/// # Errors
///
/// [`Stop::Exempt`] when the component level has no classes or only
/// helpers, [`Stop::Reject`] with the first violation found.
pub fn validate_selector(selector: &Selector, options: &ResolvedOptions) -> Result<(), Stop> {
    let levels = levels(selector);
    let Some((component, elements)) = levels.split_first() else {
        return Err(Stop::Exempt);
    };
    if component.classes().is_empty() {
        return Err(Stop::Exempt);
    }

    validate_component(component, options)?;
    for level in elements {
        validate_element(level, options)?;
    }
    validate_depth(&levels, selector, options)
}

/// Check the component level.
///
/// # Errors
///
/// [`Stop::Exempt`] for a level without classes or with helpers only,
/// otherwise [`Stop::Reject`] for mixed helpers, a missing or repeated
/// component, or classes that are not variants.
pub fn validate_component(level: &Level<'_>, options: &ResolvedOptions) -> Result<(), Stop> {
    let classes = level.classes();
    if classes.is_empty() {
        return Err(Stop::Exempt);
    }
    let selector = joined_raw(&classes);

    if let Some(helper) = options.helper() {
        let helpers = classes.iter().filter(|c| helper.is_match(&c.value)).count();
        if helpers == classes.len() {
            return Err(Stop::Exempt);
        }
        if helpers > 0 {
            return Err(Violation::InvalidHelperName(selector).into());
        }
    }

    // With the component check off, the first class stands in for the component
    let component_index = if options.component().is_some() {
        let mut matches = classes
            .iter()
            .enumerate()
            .filter(|(_, c)| options.is_component(&c.value))
            .map(|(index, _)| index);
        let first = matches.next();
        if matches.next().is_some() {
            return Err(Violation::TooManyComponents(selector).into());
        }
        first.ok_or_else(|| Violation::InvalidComponentName(selector))?
    } else {
        0
    };

    if let Some(variant) = options.variant() {
        let invalid: Vec<String> = classes
            .iter()
            .enumerate()
            .filter(|&(index, c)| index != component_index && !variant.is_match(&c.value))
            .map(|(_, c)| c.raw.trim().to_string())
            .collect();
        if !invalid.is_empty() {
            return Err(Violation::invalid_variants(invalid).into());
        }
    }

    Ok(())
}

/// Check one element level (any level after the first).
///
/// # Errors
///
/// [`Stop::Reject`] for a level of variants only, a first class that is not
/// an element, or a later class that is not a variant.
pub fn validate_element(level: &Level<'_>, options: &ResolvedOptions) -> Result<(), Stop> {
    let classes = level.classes();
    let Some((first, rest)) = classes.split_first() else {
        return Ok(());
    };
    let is_all_classes = level.is_all_classes();
    let variant = options.variant();

    let only_variants =
        is_all_classes && variant.is_some_and(|v| classes.iter().all(|c| v.is_match(&c.value)));
    if only_variants {
        return Err(Violation::VariantWithoutElement(level.text()).into());
    }

    if let Some(element) = options.element() {
        // A variant may modify a tag directly: `a.-home`
        let is_tag_variant = !is_all_classes && variant.is_some_and(|v| v.is_match(&first.value));
        if !element.is_match(&first.value) && !is_tag_variant {
            return Err(Violation::InvalidElementName(first.raw.clone()).into());
        }
    }

    let bad_variant = variant.and_then(|v| rest.iter().find(|c| !v.is_match(&c.value)));
    if let Some(bad) = bad_variant {
        return Err(Violation::InvalidVariantName(bad.raw.clone()).into());
    }

    Ok(())
}

/// Check the number of element levels.
///
/// # Errors
///
/// [`Stop::Reject`] with the whole selector when it has more element
/// levels than the configured maximum.
pub fn validate_depth(
    levels: &[Level<'_>],
    selector: &Selector,
    options: &ResolvedOptions,
) -> Result<(), Stop> {
    let Some(max_depth) = options.max_depth() else {
        return Ok(());
    };
    let depth = levels.len().saturating_sub(1);
    if depth > max_depth as usize {
        return Err(Violation::TooDeep(selector.text()).into());
    }
    Ok(())
}

fn joined_raw(classes: &[&SelectorNode]) -> String {
    classes.iter().map(|c| c.raw.as_str()).collect()
}
