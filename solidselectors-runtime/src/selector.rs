//! Singular page selectors.

use crate::reservoir::IdReservoir;

/// Prefix used when the caller supplies none.
pub const DEFAULT_PREFIX: &str = "solid-selector";

/// Options accepted by [`create_selector`] and [`crate::create_live_selector`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorOptions {
    /// Prefix to prepend to the selector.
    pub prefix: Option<String>,
}

impl SelectorOptions {
    /// Options with no overrides (default prefix applies).
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with an explicit prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    pub(crate) fn prefix_or_default(&self) -> &str {
        self.prefix.as_deref().unwrap_or(DEFAULT_PREFIX)
    }
}

/// Creates a singular page selector: `"<prefix>:<id>"`.
///
/// Every call reserves a fresh id from the reservoir, so two calls never
/// return the same selector within one process.
pub fn create_selector(reservoir: &mut IdReservoir, options: Option<&SelectorOptions>) -> String {
    let prefix = options
        .map(SelectorOptions::prefix_or_default)
        .unwrap_or(DEFAULT_PREFIX);
    format!("{}:{}", prefix, reservoir.reserve())
}
