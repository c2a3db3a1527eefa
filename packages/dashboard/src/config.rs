//! Dashboard configuration.
//!
//! Defaults are embedded from `config/dashboard.toml` at compile time.
//! A user file passed to [`DashboardConfig::load`] only needs the keys it
//! overrides; everything else keeps its default.

use std::path::Path;

use crime_map_spatial::{ClusterThresholds, DEFAULT_HEAT_INTENSITY};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration, embedded at compile time.
const DEFAULT_CONFIG_TOML: &str = include_str!("../config/dashboard.toml");

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Top-level dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub map: MapConfig,
    pub clusters: ClusterConfig,
    pub stats: StatsConfig,
    pub filters: FiltersConfig,
}

impl DashboardConfig {
    /// Parses the embedded default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the embedded file is malformed.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml(DEFAULT_CONFIG_TOML)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if `content` is not valid TOML or has
    /// mistyped keys.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        log::info!("Loaded dashboard config from {}", path.display());
        Ok(config)
    }
}

/// Base map and heat layer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Initial `[latitude, longitude]`.
    pub center: [f64; 2],
    pub zoom: u8,
    pub heat: HeatConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: [-3.7491, -73.2538],
            zoom: 13,
            heat: HeatConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatConfig {
    pub radius: u32,
    pub blur: u32,
    pub max_zoom: u8,
    /// Weight of each incident.
    pub intensity: f64,
    pub gradient: Vec<GradientStop>,
}

impl Default for HeatConfig {
    fn default() -> Self {
        Self {
            radius: 20,
            blur: 15,
            max_zoom: 17,
            intensity: DEFAULT_HEAT_INTENSITY,
            gradient: vec![
                GradientStop::new(0.2, "#ffffb2"),
                GradientStop::new(0.4, "#fecc5c"),
                GradientStop::new(0.6, "#fd8d3c"),
                GradientStop::new(0.8, "#f03b20"),
                GradientStop::new(1.0, "#bd0026"),
            ],
        }
    }
}

/// One color stop of the heat gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position in `0.0..=1.0`.
    pub stop: f64,
    pub color: String,
}

impl GradientStop {
    fn new(stop: f64, color: &str) -> Self {
        Self {
            stop,
            color: color.to_string(),
        }
    }
}

/// Marker clustering settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Pixel radius within which markers merge.
    pub max_radius: u32,
    pub small_max: usize,
    pub medium_max: usize,
}

impl ClusterConfig {
    #[must_use]
    pub const fn thresholds(&self) -> ClusterThresholds {
        ClusterThresholds {
            small_max: self.small_max,
            medium_max: self.medium_max,
        }
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        let thresholds = ClusterThresholds::default();
        Self {
            max_radius: 50,
            small_max: thresholds.small_max,
            medium_max: thresholds.medium_max,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Number of category groups shown in the stats panel.
    pub top_categories: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            top_categories: crime_map_analytics::DEFAULT_TOP_CATEGORIES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiltersConfig {
    /// Years offered by the year selector.
    pub years: Vec<String>,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            years: (2019..=2025).map(|year: u16| year.to_string()).collect(),
        }
    }
}
