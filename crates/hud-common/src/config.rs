use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::errors::ConfigError;

/// Largest quad capacity representable with 16-bit indices
/// (`max_quads * 4` vertices must stay within `u16`).
pub const MAX_QUADS_LIMIT: usize = 16384;

fn default_max_quads() -> usize {
    512
}

/// The five colors the overlay shader resolves graph texels to.
///
/// Every entry is required; deserializing a table with a missing key fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayColors {
    pub graph0: Rgba,
    pub graph1: Rgba,
    pub graph2: Rgba,
    pub watermark: Rgba,
    pub background: Rgba,
}

impl Default for OverlayColors {
    fn default() -> Self {
        Self {
            graph0: Rgba::from_rgba(255, 176, 0, 255),
            graph1: Rgba::from_rgba(85, 175, 255, 255),
            graph2: Rgba::from_rgba(32, 255, 96, 255),
            watermark: Rgba::from_rgba(128, 128, 128, 255),
            background: Rgba::from_rgba(32, 32, 32, 160),
        }
    }
}

/// Construction-time settings for the overlay renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayConfig {
    pub colors: OverlayColors,
    /// Permanent quad capacity; scratch buffers never grow past it.
    #[serde(default = "default_max_quads")]
    pub max_quads: usize,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            colors: OverlayColors::default(),
            max_quads: default_max_quads(),
        }
    }
}

impl OverlayConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(s).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_quads == 0 {
            return Err(ConfigError::ValidationError(
                "max_quads must be positive".into(),
            ));
        }
        if self.max_quads > MAX_QUADS_LIMIT {
            return Err(ConfigError::ValidationError(format!(
                "max_quads {} exceeds the 16-bit index limit of {}",
                self.max_quads, MAX_QUADS_LIMIT
            )));
        }
        Ok(())
    }
}
