//! Canvas configuration.
//!
//! Settings are stored as JSON. A missing file is not an error: the defaults
//! are used, mirroring how the canvas behaves before the user ever touched
//! its settings.

use crate::color::ThemeColors;
use crate::constants::{DEFAULT_DIMENSION_FONT_SIZE, DEFAULT_DRAG_THRESHOLD, DEFAULT_MARGIN_STEP};
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "design-canvas";
const CONFIG_FILE_NAME: &str = "layout.json";

/// Tunables of a design canvas instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Container border width around the frame, in pixels
    pub border_width: i32,
    /// Step margins snap to while the snap modifier is held
    pub margin_step: i32,
    /// Pointer travel needed before a drag-and-drop gesture starts
    pub drag_threshold: i32,
    /// Font size of the dimension readouts
    pub dimension_font_size: f64,
    /// Theme colors the frame palette is derived from
    pub theme: ThemeColors,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            border_width: 0,
            margin_step: DEFAULT_MARGIN_STEP,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            dimension_font_size: DEFAULT_DIMENSION_FONT_SIZE,
            theme: ThemeColors::default(),
        }
    }
}

/// Default location of the configuration file, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl LayoutConfig {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        match default_config_path() {
            Some(path) => Self::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load layout config from {}: {}", path.display(), e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No layout config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self) -> ConfigResult<()> {
        let path = default_config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.border_width < 0 {
            return Err(ConfigError::InvalidValue {
                field: "border_width",
                reason: format!("must not be negative, got {}", self.border_width),
            });
        }
        if self.margin_step <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "margin_step",
                reason: format!("must be positive, got {}", self.margin_step),
            });
        }
        if self.drag_threshold < 0 {
            return Err(ConfigError::InvalidValue {
                field: "drag_threshold",
                reason: format!("must not be negative, got {}", self.drag_threshold),
            });
        }
        if !(self.dimension_font_size > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "dimension_font_size",
                reason: format!("must be positive, got {}", self.dimension_font_size),
            });
        }
        Ok(())
    }
}
