// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::{LunchBoundary, MultiSlotPolicy, SlotCatalog, resolver::DEFAULT_LOCATION};

/// The name of the Rollcall application.
pub const APP_NAME: &str = "rollcall";

/// Configuration for the schedule engine.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Path to the JSON file holding subject-slot records.
    #[serde(default)]
    pub records_path: Option<PathBuf>,

    /// Sessions starting at or before this `HHMM` time are listed as morning classes.
    #[serde(default)]
    pub lunch_boundary: LunchBoundary,

    /// How subjects claiming several slots on one day are shown.
    #[serde(default)]
    pub multi_slot: MultiSlotPolicy,

    /// Location shown for subjects without one.
    #[serde(default = "default_location")]
    pub default_location: String,

    /// Slot catalog, replacing the built-in institution table when present.
    #[serde(default)]
    pub catalog: SlotCatalog,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            records_path: None,
            lunch_boundary: LunchBoundary::default(),
            multi_slot: MultiSlotPolicy::default(),
            default_location: default_location(),
            catalog: SlotCatalog::default(),
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        if let Some(path) = &self.records_path {
            let expanded = expand_path(path)
                .map_err(|e| format!("Failed to expand records path: {e}"))?;
            self.records_path = Some(expanded);
        }

        if self.default_location.trim().is_empty() {
            tracing::warn!("empty default_location, falling back to {DEFAULT_LOCATION}");
            self.default_location = default_location();
        }

        if self.catalog.is_empty() {
            tracing::warn!("slot catalog has no entries, slot-code records will never resolve");
        }

        Ok(())
    }
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
