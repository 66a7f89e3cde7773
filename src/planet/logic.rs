use crate::helpers::mesh::planet_mesh;
use crate::planet::resources::PlanetShape;
use bevy::prelude::Mesh;
use shapegen::config::ShapeGenConfig;
use shapegen::error::Result;
use shapegen::prelude::{MeshData, ShapeGenerator, ShapePreset};
use std::path::Path;

/// Samples the committed shape into a coloured Bevy mesh.
pub fn generate_planet_mesh(shape: &mut PlanetShape) -> Mesh {
    let data = MeshData::from_generator(&mut shape.generator, shape.resolution);
    let colours = data.colours(&shape.gradient, shape.generator.elevation_min_max());
    planet_mesh(data, colours)
}

/// Replaces the edited shape with the one stored at `path`. On failure the
/// current shape is left untouched.
pub fn load_preset_into(shape: &mut PlanetShape, path: impl AsRef<Path>) -> Result<()> {
    let preset = ShapePreset::load_from_file(path)?;
    shape.generator = ShapeGenerator::from_preset(&preset);
    shape.needs_rebuild = true;
    Ok(())
}

/// Applies a reloaded config to the edited shape.
///
/// The mesh resolution always follows the file. The seed and default radius
/// replace the current values only when the file changed them relative to
/// `previous`, so a reload does not undo a reseed or a radius edit made in
/// the editor.
pub fn apply_reloaded_config(
    shape: &mut PlanetShape,
    previous: &ShapeGenConfig,
    config: &ShapeGenConfig,
) {
    shape.resolution = config.mesh_resolution();
    if config.shape.seed != previous.shape.seed {
        shape.generator.reseed(config.shape.seed);
    }
    if config.shape.default_radius != previous.shape.default_radius {
        let range = config.radius_range();
        *shape.generator.pending_radius_mut() =
            config.shape.default_radius.clamp(*range.start(), *range.end());
    }
    shape.needs_rebuild = true;
}
