//=========================================================================
// Config Overrides
//=========================================================================
//
// Optional TOML file layered over the built-in configuration:
//
// ```toml
// width = 480
// background_color = "#101010"
// renderer = "software"
//
// [scale]
// mode = "envelop"
// auto_center = "center_horizontally"
// ```
//
// Missing keys keep the built-in value. Parent and scene order are not
// part of the file format.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

//=== Internal Dependencies ===============================================

use super::{CenterMode, Color, RendererType, ScaleMode};
use crate::error::ConfigError;

//=== Overrides ===========================================================

/// Optional values overriding a [`super::GameConfig`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub renderer: Option<RendererType>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub background_color: Option<Color>,
    pub pixel_art: Option<bool>,
    pub auto_round: Option<bool>,
    pub fps: Option<u32>,
    pub scale: Option<ScaleOverrides>,
}

/// The `[scale]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaleOverrides {
    pub mode: Option<ScaleMode>,
    pub auto_center: Option<CenterMode>,
}

impl ConfigOverrides {
    /// Parses overrides from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses an overrides file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(target: "config", "Loading config overrides from {}", path.display());

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&text)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
