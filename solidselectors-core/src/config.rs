//! Configuration loading from solidselectors.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Names the transform matches against: the source module identity and
/// the generation functions pulled from it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TransformConfig {
    /// Source-module name matched against import/require source literals.
    pub module_name: String,
    /// Name of the singular selector generation function.
    pub selector_fn: String,
    /// Name of the live selector factory function.
    pub live_selector_fn: String,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            module_name: "solidselectors".to_string(),
            selector_fn: "createSelector".to_string(),
            live_selector_fn: "createLiveSelector".to_string(),
        }
    }
}

/// Loads configuration from solidselectors.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<TransformConfig>> {
    let path = root.join("solidselectors.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid solidselectors.toml")?;
    Ok(Some(cfg))
}
