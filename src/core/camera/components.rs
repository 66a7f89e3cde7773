use bevy::prelude::*;

#[derive(Component, Reflect)]
pub struct MainCamera;

/// Keeps the camera at a distance that fits the whole planet in view.
#[derive(Component, Reflect)]
pub struct CameraFraming {
    /// Padding around the planet, as a multiple of its radius.
    pub margin: f32,
    pub lerp_speed: f32,
}

impl Default for CameraFraming {
    fn default() -> Self {
        Self {
            margin: 1.35,
            lerp_speed: 3.0,
        }
    }
}
