use crate::error::{Result, ShapeGenError};
use crate::settings::NoiseSettings;
use crate::shape::ShapeGenerator;
use crate::shape_settings::{NoiseLayer, ShapeSettings};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A saved planet: radius, seed and the committed settings of every layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapePreset {
    pub radius: f32,
    #[serde(default)]
    pub seed: u32,
    #[serde(default)]
    pub layers: Vec<NoiseSettings>,
}

impl ShapePreset {
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ShapeGenError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let preset = Self::from_toml(&content)?;
        info!(
            "Loaded shape preset with {} layers from {}",
            preset.layers.len(),
            path.display()
        );
        Ok(preset)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|source| ShapeGenError::Io {
            path: path.display().to_string(),
            source,
        })?;
        info!("Saved shape preset to {}", path.display());
        Ok(())
    }
}

impl ShapeGenerator {
    /// Builds a generator whose pending radius already matches the preset,
    /// so the first poll does not overwrite it.
    pub fn from_preset(preset: &ShapePreset) -> Self {
        let settings = ShapeSettings::with_radius(preset.radius);
        let mut generator = ShapeGenerator::with_seed(settings, preset.seed);
        *generator.pending_radius_mut() = preset.radius;
        for settings in &preset.layers {
            let mut settings = settings.clone();
            settings.simple_mut().validate();
            generator.push_layer(NoiseLayer::from_settings(settings));
        }
        generator
    }

    /// Snapshot of the committed settings. Pending edits are not included.
    pub fn to_preset(&self) -> ShapePreset {
        let settings = self.settings();
        ShapePreset {
            radius: settings.radius,
            seed: self.seed(),
            layers: settings
                .noise_layers
                .iter()
                .map(|layer| layer.noise_settings().clone())
                .collect(),
        }
    }
}
