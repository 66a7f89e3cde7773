use bevy::prelude::Resource;
use shapegen::colour::ElevationGradient;
use shapegen::config::ShapeGenConfig;
use shapegen::settings::FilterType;
use shapegen::shape::ShapeGenerator;
use shapegen::shape_settings::ShapeSettings;

pub const DEFAULT_PRESET_PATH: &str = "planet_preset.toml";

/// The planet being edited and everything needed to turn it into a mesh.
#[derive(Resource)]
pub struct PlanetShape {
    pub generator: ShapeGenerator,
    pub gradient: ElevationGradient,
    pub resolution: u32,
    /// Set when something other than a settings commit alters the surface,
    /// such as a reseed or a new layer.
    pub needs_rebuild: bool,
}

impl PlanetShape {
    pub fn from_config(config: &ShapeGenConfig) -> Self {
        let range = config.radius_range();
        let radius = config.shape.default_radius.clamp(*range.start(), *range.end());
        let mut generator =
            ShapeGenerator::with_seed(ShapeSettings::with_radius(radius), config.shape.seed);
        *generator.pending_radius_mut() = radius;
        generator.add_layer(FilterType::Simple);

        Self {
            generator,
            gradient: ElevationGradient::default(),
            resolution: config.mesh_resolution(),
            needs_rebuild: false,
        }
    }
}

impl Default for PlanetShape {
    fn default() -> Self {
        Self::from_config(&shapegen::get_config())
    }
}

#[derive(Resource, Clone)]
pub struct PlanetEditorSettings {
    pub config: ShapeGenConfig,
    pub preset_path: String,
    pub auto_rotate: bool,
}

impl Default for PlanetEditorSettings {
    fn default() -> Self {
        Self {
            config: shapegen::get_config(),
            preset_path: DEFAULT_PRESET_PATH.to_string(),
            auto_rotate: true,
        }
    }
}
