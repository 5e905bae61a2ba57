//! Link registry: the named destinations the quick start cards point at.
//!
//! Defaults are compiled in. A JSON file can override any subset:
//!
//! ```json
//! { "external": { "pricing": "https://example.org/plans" } }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};

const CONFIG_DIR_NAME: &str = "doccards";
const CONFIG_FILE_NAME: &str = "links.json";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkRegistry {
    pub internal: InternalLinks,
    pub external: ExternalLinks,
}

/// Pages inside the documentation site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternalLinks {
    pub authentication: String,
    pub typescript_sdk: String,
}

impl Default for InternalLinks {
    fn default() -> Self {
        Self {
            authentication: "/authentication".to_string(),
            typescript_sdk: "/sdk/typescript".to_string(),
        }
    }
}

/// Pages hosted elsewhere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalLinks {
    pub api_reference: String,
    pub pricing: String,
}

impl Default for ExternalLinks {
    fn default() -> Self {
        Self {
            api_reference: "https://docs.example.com/api-reference".to_string(),
            pricing: "https://example.com/pricing".to_string(),
        }
    }
}

impl LinkRegistry {
    /// Parse a registry from JSON; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "Loaded link configuration");
        Ok(registry)
    }

    /// Resolve the registry the way binaries do.
    ///
    /// An explicit path must load. Without one, the per-user config file is
    /// used if present, otherwise the built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            Some(path) => {
                tracing::warn!(
                    path = %path.display(),
                    "No link configuration found, using defaults"
                );
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }
}

/// `<config dir>/doccards/links.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
