mod systems;

use crate::planet::ui::systems::render_shape_editor_ui;
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct ShapeEditorUIPlugin;

impl Plugin for ShapeEditorUIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, render_shape_editor_ui);
    }
}
