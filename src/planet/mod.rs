pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
pub mod ui;
mod logic;

use crate::planet::events::*;
use crate::planet::resources::*;
use crate::planet::systems::*;
use bevy::prelude::*;

pub struct PlanetPlugin;

impl Plugin for PlanetPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AddNoiseLayerEvent>()
            .add_message::<GenerateNewSeedEvent>()
            .add_message::<SavePresetEvent>()
            .add_message::<LoadPresetEvent>()
            .add_message::<ReloadConfigEvent>()
            .init_resource::<PlanetShape>()
            .init_resource::<PlanetEditorSettings>()
            .add_systems(Startup, spawn_planet)
            .add_systems(
                Update,
                (
                    (
                        handle_add_noise_layer,
                        handle_generate_new_seed,
                        handle_load_preset,
                        handle_save_preset,
                        handle_reload_config,
                    ),
                    regenerate_planet_on_change,
                )
                    .chain(),
            )
            .add_systems(Update, rotate_planet);
    }
}
