use std::path::Path;

use crate::error::ConfigError;

/// Bounding rectangle a consuming renderer hands to
/// [`Board::layout`](crate::board::Board::layout).
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            width: 480.0,
            height: 480.0,
        }
    }
}

/// Top-level board configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of nested rings; 3 is the classic nine-men's-morris board.
    pub ring_count: usize,
    pub layout: LayoutConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            ring_count: 3,
            layout: LayoutConfig::default(),
        }
    }
}

impl BoardConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: BoardConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(
                "config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ring_count < 1 {
            return Err(ConfigError::Validation("ring_count must be >= 1".into()));
        }
        if !self.layout.width.is_finite() || self.layout.width <= 0.0 {
            return Err(ConfigError::Validation(
                "layout.width must be a positive finite number".into(),
            ));
        }
        if !self.layout.height.is_finite() || self.layout.height <= 0.0 {
            return Err(ConfigError::Validation(
                "layout.height must be a positive finite number".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&BoardConfig::default()).expect("default config serializes")
    }
}
