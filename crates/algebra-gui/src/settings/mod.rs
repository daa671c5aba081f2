//! Settings types for the comparison studio.
//!
//! This module defines all user-configurable settings:
//! - Display preferences (dark mode, striped rows)
//! - Table defaults (initial sort, alternate catalog file)

mod persistence;

pub use persistence::{SettingsError, load_settings, save_settings, settings_path};

use algebra_model::SortState;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub display: DisplaySettings,
    pub table: TableSettings,
}

/// Display preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Enable dark mode theme.
    pub dark_mode: bool,
    /// Alternate row backgrounds in the comparison table.
    pub striped_rows: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            striped_rows: true,
        }
    }
}

/// Table defaults applied at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    /// TOML catalog to show instead of the built-in structures.
    pub catalog_path: Option<PathBuf>,
    /// Sort applied when the window opens (source order when unset).
    pub initial_sort: Option<SortState>,
}
