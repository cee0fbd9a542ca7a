use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::reference::{CategoryDefinition, ReferenceData};

const CONFIG_FILE: &str = "config.json";

/// Optional overrides for the compiled-in reference tables
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub categories: Option<Vec<CategoryDefinition>>,
    #[serde(default)]
    pub prefectures: Option<HashMap<String, String>>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse config file")
    }

    /// Replace whichever built-in tables the file provides
    pub fn apply(self, mut reference: ReferenceData) -> ReferenceData {
        if let Some(categories) = self.categories {
            reference.categories = categories;
        }
        if let Some(prefectures) = self.prefectures {
            reference.prefectures = prefectures;
        }
        reference
    }
}

/// Per-user config location, e.g. `~/.config/card-search/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "card-search").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Build the reference data for this run.
///
/// An explicit path must exist. The per-user default is optional; when it is
/// absent the built-in tables are used as-is.
pub fn load_reference(explicit: Option<&Path>) -> Result<ReferenceData> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                debug!("no config file; using built-in reference data");
                return Ok(ReferenceData::builtin());
            }
        },
    };

    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {:?}", path))?;
    let config = ConfigFile::parse(&text)
        .with_context(|| format!("Invalid config: {:?}", path))?;

    debug!(path = %path.display(), "loaded config");
    Ok(config.apply(ReferenceData::builtin()))
}
