//! Kitchen configuration: seed, number of servings, and the starting tray.
//!
//! Every field is optional in the JSON file; a missing file or an empty
//! object gives the stock meal.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::condiments::{CondimentsTray, DEFAULT_CONDIMENTS};
use crate::error::EggsampleError;

/// Settings for one run of the kitchen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KitchenConfig {
    /// Shuffle seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// Meals served from the same tray
    pub servings: u32,
    /// Tray contents before the first serving
    pub condiments: Vec<String>,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            seed: None,
            servings: 1,
            condiments: DEFAULT_CONDIMENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl KitchenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize kitchen configuration to JSON")?;

        fs::write(&path, json).with_context(|| {
            format!("Failed to write kitchen configuration to {:?}", path.as_ref())
        })?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).with_context(|| {
            format!("Failed to read kitchen configuration from {:?}", path.as_ref())
        })?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse kitchen configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.servings == 0 {
            return Err(EggsampleError::config("servings must be at least 1"));
        }

        if let Some(pos) = self.condiments.iter().position(|c| c.trim().is_empty()) {
            return Err(EggsampleError::config(format!(
                "condiment #{} is blank",
                pos + 1
            )));
        }

        Ok(())
    }

    /// Fresh tray holding the configured condiments
    pub fn tray(&self) -> CondimentsTray {
        CondimentsTray::new(self.condiments.iter().cloned())
    }
}
