//! Project-level settings persisted in `.crypto-icons.json`.

use crate::error::{IconError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".crypto-icons.json";

pub const DEFAULT_DIRECTORY: &str = "./src/components/crypto-icons";
pub const DEFAULT_IMAGE_BASE_PATH: &str = "/images/crypto";
pub const DEFAULT_DARK_MODE_CLASS: &str = "dark";

/// Stored settings. Absent fields fall back to the defaults when resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base_path: Option<String>,
    /// CSS class that marks dark mode on the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode_class: Option<String>,
}

impl Config {
    /// An explicit directory wins, then the configured one, then the default.
    /// Relative paths are resolved against `project_root`.
    pub fn target_directory(&self, project_root: &Path, explicit: Option<&Path>) -> PathBuf {
        let dir = explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| {
                PathBuf::from(or_default(
                    self.default_directory.as_deref(),
                    DEFAULT_DIRECTORY,
                ))
            });
        normalize(&project_root.join(dir))
    }

    pub fn image_base_path(&self) -> &str {
        or_default(self.image_base_path.as_deref(), DEFAULT_IMAGE_BASE_PATH)
    }

    pub fn dark_mode_class(&self) -> &str {
        or_default(self.dark_mode_class.as_deref(), DEFAULT_DARK_MODE_CLASS)
    }
}

/// Stored value unless it is missing or blank
fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
}

/// Reads and writes the settings file of one project
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(project_root: &Path) -> Self {
        Self {
            path: project_root.join(CONFIG_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored settings.
    ///
    /// Never fails: a missing file yields the defaults, an unreadable or
    /// invalid one is logged and also yields the defaults.
    pub fn load(&self) -> Config {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Config::default(),
            Err(e) => {
                tracing::warn!(
                    "failed to read {}, using defaults: {e}",
                    self.path.display()
                );
                return Config::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(
                "failed to parse {}, using defaults: {e}",
                self.path.display()
            );
            Config::default()
        })
    }

    /// Overwrite the settings file with `config`
    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config).map_err(|source| IconError::Settings {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, format!("{json}\n"))?;
        tracing::debug!("saved settings to {}", self.path.display());
        Ok(())
    }
}

/// Drop `.` components and fold `..` so reported paths stay readable
fn normalize(path: &Path) -> PathBuf {
    use std::path::Component;

    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
