use crate::constants::*;
use crate::error::{Result, ShapeGenError};
use log::warn;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

static CONFIG: OnceLock<Mutex<ShapeGenConfig>> = OnceLock::new();

/// Get a copy of the current configuration, loading from file if not already loaded.
///
/// A missing or broken file falls back to the built-in defaults.
pub fn get_config() -> ShapeGenConfig {
    let config_mutex = CONFIG.get_or_init(|| {
        let config = ShapeGenConfig::load_from_file(CONFIG_FILE).unwrap_or_else(|err| {
            warn!("Using default shape generator config: {}", err);
            ShapeGenConfig::default()
        });
        Mutex::new(config)
    });
    config_mutex
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

pub fn reload_config() -> Result<()> {
    reload_config_from_file(CONFIG_FILE)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShapeGenConfig {
    pub mesh: MeshConfig,
    pub shape: ShapeConfig,
    pub layers: LayerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Vertices along one cube face edge.
    pub resolution: u32,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_MESH_RESOLUTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    pub default_radius: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    /// Planet seed used for new shapes; 0 keeps the reference noise table.
    pub seed: u32,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            default_radius: DEFAULT_RADIUS,
            radius_min: RADIUS_MIN,
            radius_max: RADIUS_MAX,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerConfig {
    /// Upper bound of the octave slider; never above [`MAX_NOISE_LAYERS`].
    pub max_octaves: u32,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            max_octaves: MAX_NOISE_LAYERS,
        }
    }
}

impl ShapeGenConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ShapeGenError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: ShapeGenConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ShapeGenError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(())
    }

    /// Radius slider range, with the bounds put in order.
    pub fn radius_range(&self) -> RangeInclusive<f32> {
        let low = self.shape.radius_min.min(self.shape.radius_max);
        let high = self.shape.radius_min.max(self.shape.radius_max);
        low..=high
    }

    /// Octave slider range.
    pub fn octave_range(&self) -> RangeInclusive<u32> {
        1..=self.layers.max_octaves.clamp(1, MAX_NOISE_LAYERS)
    }

    pub fn mesh_resolution(&self) -> u32 {
        self.mesh
            .resolution
            .clamp(MIN_MESH_RESOLUTION, MAX_MESH_RESOLUTION)
    }
}

fn reload_config_from_file(path: impl AsRef<Path>) -> Result<()> {
    let new_config = ShapeGenConfig::load_from_file(path)?;

    let config_mutex = CONFIG.get_or_init(|| Mutex::new(new_config.clone()));
    *config_mutex
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = new_config;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: ShapeGenConfig = toml::from_str("[mesh]\nresolution = 32\n").unwrap();
        assert_eq!(config.mesh.resolution, 32);
        assert_eq!(config.shape, ShapeConfig::default());
        assert_eq!(config.layers.max_octaves, MAX_NOISE_LAYERS);
    }

    #[test]
    fn test_ranges_are_sanitised() {
        let mut config = ShapeGenConfig::default();
        config.shape.radius_min = 3.0;
        config.shape.radius_max = 0.5;
        config.layers.max_octaves = 50;
        config.mesh.resolution = 1;

        assert_eq!(config.radius_range(), 0.5..=3.0);
        assert_eq!(config.octave_range(), 1..=MAX_NOISE_LAYERS);
        assert_eq!(config.mesh_resolution(), MIN_MESH_RESOLUTION);
    }

    #[test]
    fn test_default_radius_range() {
        assert_eq!(ShapeGenConfig::default().radius_range(), 0.1..=3.0);
    }

    #[test]
    fn test_file_round_trip() {
        let file_name = format!("shapegen_config_{}.toml", std::process::id());
        let path = std::env::temp_dir().join(file_name);
        let mut config = ShapeGenConfig::default();
        config.mesh.resolution = 48;
        config.shape.seed = 12;

        config.save_to_file(&path).unwrap();
        let loaded = ShapeGenConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_get_config_never_panics() {
        let config = get_config();
        assert!(config.mesh_resolution() >= MIN_MESH_RESOLUTION);
    }
}
