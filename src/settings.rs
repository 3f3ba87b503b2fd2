//! Editor settings stored as JSON in the user config directory.
//!
//! Every field has a default, so partial files are fine. Out-of-range values
//! are pulled back into range on load rather than rejected.

use crate::constants::{
    CLICK_TOLERANCE, DEFAULT_GRID_DIVISIONS, DEFAULT_GRID_SIZE, DEFAULT_ZOOM, MARKER_RADIUS,
    MAX_ZOOM, MIN_ZOOM,
};
use crate::error::{SettingsError, SettingsResult};
use crate::types::Mode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const APP_DIR: &str = "micboard";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Side length of the ruled grid in meters
    pub grid_size_m: f64,
    /// Grid cells per axis
    pub grid_divisions: u32,
    /// Zoom on startup and after a view reset (pixels per meter)
    pub default_zoom: f64,
    pub default_mode: Mode,
    /// Marker radius in pixels, also the hit-test radius
    pub marker_radius_px: f64,
    /// Per-axis displacement below which a gesture is a click
    pub click_tolerance_px: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid_size_m: DEFAULT_GRID_SIZE,
            grid_divisions: DEFAULT_GRID_DIVISIONS,
            default_zoom: DEFAULT_ZOOM,
            default_mode: Mode::default(),
            marker_radius_px: MARKER_RADIUS,
            click_tolerance_px: CLICK_TOLERANCE,
        }
    }
}

/// Path of the settings file, if the platform has a config directory
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

impl EditorSettings {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        Ok(settings.sanitized())
    }

    /// Save to the default location
    pub fn save(&self) -> SettingsResult<()> {
        let path = default_settings_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Clamp every field into its usable range
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        self.default_zoom = if self.default_zoom.is_finite() {
            self.default_zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            defaults.default_zoom
        };
        self.grid_divisions = self.grid_divisions.max(1);
        if !(self.grid_size_m.is_finite() && self.grid_size_m > 0.0) {
            self.grid_size_m = defaults.grid_size_m;
        }
        if !(self.marker_radius_px.is_finite() && self.marker_radius_px > 0.0) {
            self.marker_radius_px = defaults.marker_radius_px;
        }
        if !(self.click_tolerance_px.is_finite() && self.click_tolerance_px > 0.0) {
            self.click_tolerance_px = defaults.click_tolerance_px;
        }
        self
    }
}
