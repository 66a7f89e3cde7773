pub use crate::colour::{ColourStop, ElevationGradient};
pub use crate::config::ShapeGenConfig;
pub use crate::edit::{Editable, LiveEdit};
pub use crate::error::ShapeGenError;
pub use crate::filter::{NoiseFilter, RidgedNoiseFilter, SimpleNoiseFilter};
pub use crate::mesh_data::MeshData;
pub use crate::min_max::MinMax;
pub use crate::noise::Noise;
pub use crate::preset::ShapePreset;
pub use crate::settings::{
    FilterType, LayerParams, NoiseSettings, RidgedNoiseSettings, SimpleNoiseSettings,
};
pub use crate::shape::ShapeGenerator;
pub use crate::shape_settings::{NoiseLayer, ShapeSettings};
