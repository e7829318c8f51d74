//! Export configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Settings that shape one export: which sections appear, how the report
/// looks, and how output files are named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Emit the Appearance section between Layout and Statistics.
    pub include_appearance: bool,
    /// Width of the `-` rule written above each section title.
    pub rule_width: usize,
    /// First directory offered when prompting for an output location.
    pub start_directory: PathBuf,
    pub settings_prefix: String,
    pub graph_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            include_appearance: false,
            rule_width: 120,
            start_directory: PathBuf::from("."),
            settings_prefix: "settings_".into(),
            graph_prefix: "graph_".into(),
        }
    }
}

impl ExportConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn with_appearance(mut self, include: bool) -> Self {
        self.include_appearance = include;
        self
    }

    pub fn with_start_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_directory = dir.into();
        self
    }

    fn validate(&self) -> Result<()> {
        if self.rule_width == 0 {
            return Err(Error::Config("rule_width must be at least 1".into()));
        }
        for prefix in [&self.settings_prefix, &self.graph_prefix] {
            if prefix.contains(['/', '\\']) {
                return Err(Error::Config(format!("file prefix '{prefix}' contains a path separator")));
            }
        }
        Ok(())
    }
}
