use crate::core::camera::components::{CameraFraming, MainCamera};
use crate::core::camera::logic::{approach, framing_distance};
use crate::planet::resources::PlanetShape;
use bevy::log::info;
use bevy::math::{EulerRot, Quat, Vec3};
use bevy::prelude::*;
use std::f32::consts::PI;

pub fn spawn_camera(mut commands: Commands, shape: Res<PlanetShape>) {
    let framing = CameraFraming::default();
    let distance = framing_distance(
        shape.generator.pending_radius(),
        PerspectiveProjection::default().fov,
        framing.margin,
    );

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 0.0, distance).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
        framing,
    ));

    commands.spawn((
        Transform::from_rotation(Quat::from_euler(EulerRot::ZYX, 0.0, 1.0, -PI / 4.)),
        DirectionalLight::default(),
    ));

    info!("Camera spawned");
}

/// Eases the camera in or out as the committed radius changes.
pub fn frame_planet(
    time: Res<Time>,
    shape: Res<PlanetShape>,
    mut camera_q: Query<(&mut Transform, &CameraFraming, &Projection), With<MainCamera>>,
) {
    let radius = shape.generator.settings().radius;
    let dt = time.delta_secs();

    for (mut transform, framing, projection) in &mut camera_q {
        let fov = match projection {
            Projection::Perspective(perspective) => perspective.fov,
            _ => PerspectiveProjection::default().fov,
        };
        let target = framing_distance(radius, fov, framing.margin);
        let current = transform.translation.length();
        if (current - target).abs() < 1e-4 {
            continue;
        }
        let next = approach(current, target, framing.lerp_speed, dt);
        transform.translation = transform.translation.normalize_or(Vec3::Z) * next;
    }
}
