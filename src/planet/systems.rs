use crate::planet::components::PlanetEntity;
use crate::planet::events::*;
use crate::planet::logic::{apply_reloaded_config, generate_planet_mesh, load_preset_into};
use crate::planet::resources::*;
use bevy::asset::Assets;
use bevy::color::Color;
use bevy::pbr::{MeshMaterial3d, StandardMaterial};
use bevy::prelude::*;

const ROTATION_SPEED: f32 = 0.15;

pub fn spawn_planet(
    mut commands: Commands,
    mut shape: ResMut<PlanetShape>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh_handle = meshes.add(generate_planet_mesh(&mut shape));
    // Vertex colours carry the terrain, so the base colour stays white
    let material_handle = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 0.9,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh_handle),
        MeshMaterial3d(material_handle),
        Transform::default(),
        PlanetEntity,
    ));

    info!("Planet spawned with {} layers", shape.generator.layer_count());
}

/// Commits pending edits once per frame and rebuilds the mesh when the
/// shape actually changed.
pub fn regenerate_planet_on_change(
    mut commands: Commands,
    mut shape: ResMut<PlanetShape>,
    mut meshes: ResMut<Assets<Mesh>>,
    planet_entities: Query<Entity, With<PlanetEntity>>,
) {
    let changed = shape.generator.has_changed();
    if !changed && !shape.needs_rebuild {
        return;
    }
    shape.needs_rebuild = false;

    let mesh_handle = meshes.add(generate_planet_mesh(&mut shape));
    for entity in planet_entities.iter() {
        commands.entity(entity).insert(Mesh3d(mesh_handle.clone()));
    }

    let min_max = shape.generator.elevation_min_max();
    debug!(
        "Planet mesh rebuilt, elevation {:.4}..{:.4}",
        min_max.min, min_max.max
    );
}

pub fn handle_add_noise_layer(
    mut events: MessageReader<AddNoiseLayerEvent>,
    mut shape: ResMut<PlanetShape>,
) {
    for event in events.read() {
        let index = shape.generator.add_layer(event.filter_type);
        shape.needs_rebuild = true;
        info!("Added {} noise layer at index {}", event.filter_type, index);
    }
}

pub fn handle_generate_new_seed(
    mut events: MessageReader<GenerateNewSeedEvent>,
    mut shape: ResMut<PlanetShape>,
) {
    for _ in events.read() {
        let seed = shapegen::tools::generate_seed8();
        shape.generator.reseed(seed);
        shape.needs_rebuild = true;
        info!("Planet reseeded with {}", seed);
    }
}

pub fn handle_save_preset(
    mut events: MessageReader<SavePresetEvent>,
    shape: Res<PlanetShape>,
    settings: Res<PlanetEditorSettings>,
) {
    for _ in events.read() {
        if let Err(err) = shape.generator.to_preset().save_to_file(&settings.preset_path) {
            warn!("Failed to save preset: {}", err);
        }
    }
}

pub fn handle_load_preset(
    mut events: MessageReader<LoadPresetEvent>,
    mut shape: ResMut<PlanetShape>,
    settings: Res<PlanetEditorSettings>,
) {
    for _ in events.read() {
        if let Err(err) = load_preset_into(&mut shape, &settings.preset_path) {
            warn!("Failed to load preset: {}", err);
        }
    }
}

pub fn handle_reload_config(
    mut events: MessageReader<ReloadConfigEvent>,
    mut shape: ResMut<PlanetShape>,
    mut settings: ResMut<PlanetEditorSettings>,
) {
    for _ in events.read() {
        if let Err(err) = shapegen::reload_config() {
            warn!("Failed to reload config: {}", err);
            continue;
        }
        let config = shapegen::get_config();
        apply_reloaded_config(&mut shape, &settings.config, &config);
        settings.config = config;
        info!("Config reloaded");
    }
}

pub fn rotate_planet(
    time: Res<Time>,
    settings: Res<PlanetEditorSettings>,
    mut planet_q: Query<&mut Transform, With<PlanetEntity>>,
) {
    if !settings.auto_rotate {
        return;
    }
    for mut transform in &mut planet_q {
        transform.rotate_y(ROTATION_SPEED * time.delta_secs());
    }
}
