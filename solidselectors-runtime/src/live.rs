//! Live selector factories.
//!
//! A live selector keys many related elements (rows of a table, items of a
//! list) under one statically reserved namespace. The factory itself can be
//! minted at compile time; the keys are applied at run time.

use std::collections::HashSet;

use crate::error::{SelectorError, SelectorResult};
use crate::reservoir::IdReservoir;
use crate::selector::{SelectorOptions, DEFAULT_PREFIX};

/// A factory minting keyed selectors from one reserved namespace.
///
/// Distinct factories reserve distinct namespaces, so two factories yield
/// different selectors even for identical keys.
#[derive(Debug, Clone)]
pub struct LiveSelector {
    prefix: String,
    namespace: String,
    used_keys: HashSet<String>,
}

/// Creates a live selector factory: each produced selector is
/// `"<prefix>:<namespace>:<key>"`.
pub fn create_live_selector(
    reservoir: &mut IdReservoir,
    options: Option<&SelectorOptions>,
) -> LiveSelector {
    let prefix = options
        .map(SelectorOptions::prefix_or_default)
        .unwrap_or(DEFAULT_PREFIX);
    LiveSelector {
        prefix: prefix.to_string(),
        namespace: reservoir.reserve(),
        used_keys: HashSet::new(),
    }
}

impl LiveSelector {
    /// The namespace-qualified base, without a key: `"<prefix>:<namespace>"`.
    ///
    /// This is the value compile-time evaluation inlines for a factory
    /// created with statically-known options.
    pub fn base(&self) -> String {
        format!("{}:{}", self.prefix, self.namespace)
    }

    /// Selector for one key.
    pub fn key(&self, key: &str) -> String {
        format!("{}:{}:{}", self.prefix, self.namespace, key)
    }

    /// Like [`LiveSelector::key`], but errors on a missing/empty key or on
    /// a key already used through this factory.
    pub fn strict(&mut self, key: Option<&str>) -> SelectorResult<String> {
        let key = match key {
            Some(k) if !k.is_empty() => k,
            _ => return Err(SelectorError::MissingKey),
        };
        if !self.used_keys.insert(key.to_string()) {
            return Err(SelectorError::key_reused(key));
        }
        Ok(self.key(key))
    }
}
