/// Upper bound on octaves per filter; more is invisible at planet scale.
pub const MAX_NOISE_LAYERS: u32 = 8;

pub const DEFAULT_RADIUS: f32 = 1.0;
pub const RADIUS_MIN: f32 = 0.1;
pub const RADIUS_MAX: f32 = 3.0;

/// Vertices along one edge of a cube face.
pub const DEFAULT_MESH_RESOLUTION: u32 = 64;
pub const MIN_MESH_RESOLUTION: u32 = 2;
pub const MAX_MESH_RESOLUTION: u32 = 256;

pub const CONFIG_FILE: &str = "shapegen_config.toml";
