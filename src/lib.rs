mod core;
mod helpers;
mod planet;

use crate::core::camera::CameraPlugin;
use crate::planet::PlanetPlugin;
use crate::planet::ui::ShapeEditorUIPlugin;

use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub struct PlanetEditorPlugin;

impl Plugin for PlanetEditorPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .add_plugins((PlanetPlugin, CameraPlugin, ShapeEditorUIPlugin));

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}
