use crate::planet::events::*;
use crate::planet::resources::{PlanetEditorSettings, PlanetShape};
use bevy::app::AppExit;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use shapegen::constants::{MAX_MESH_RESOLUTION, MIN_MESH_RESOLUTION};
use shapegen::settings::{FilterType, NoiseSettings};
use std::ops::RangeInclusive;

pub fn render_shape_editor_ui(
    mut contexts: EguiContexts,
    mut shape: ResMut<PlanetShape>,
    mut settings: ResMut<PlanetEditorSettings>,
    mut add_layer_events: MessageWriter<AddNoiseLayerEvent>,
    mut generate_new_seed_events: MessageWriter<GenerateNewSeedEvent>,
    mut save_preset_events: MessageWriter<SavePresetEvent>,
    mut load_preset_events: MessageWriter<LoadPresetEvent>,
    mut reload_config_events: MessageWriter<ReloadConfigEvent>,
    mut app_exit_events: MessageWriter<AppExit>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::right("shape_panel")
        .default_width(340.0)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Planet Shape");
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.label(format!("Seed: {}", shape.generator.seed()));
                    if ui.button("New Seed").clicked() {
                        generate_new_seed_events.write(GenerateNewSeedEvent);
                    }
                });

                let radius_range = settings.config.radius_range();
                ui.add(edit_slider(
                    shape.generator.pending_radius_mut(),
                    radius_range,
                    "Radius",
                ));

                let mut resolution = shape.resolution;
                let resolution_range = MIN_MESH_RESOLUTION..=MAX_MESH_RESOLUTION;
                if ui
                    .add(edit_slider(&mut resolution, resolution_range, "Resolution"))
                    .changed()
                {
                    shape.resolution = resolution;
                    shape.needs_rebuild = true;
                }

                ui.checkbox(&mut settings.auto_rotate, "Auto rotate");

                let min_max = *shape.generator.elevation_min_max();
                if !min_max.is_empty() {
                    ui.label(format!("Elevation: {:.3} .. {:.3}", min_max.min, min_max.max));
                }

                ui.add_space(10.0);
                ui.separator();
                ui.heading("Noise Layers");

                let octave_range = settings.config.octave_range();
                for index in 0..shape.generator.layer_count() {
                    if let Some(layer) = shape.generator.pending_layer_mut(index) {
                        render_noise_layer(ui, index, layer, octave_range.clone());
                    }
                }

                ui.add_space(5.0);
                ui.horizontal(|ui| {
                    for filter_type in FilterType::ALL {
                        if ui.button(format!("Add {} Layer", filter_type)).clicked() {
                            add_layer_events.write(AddNoiseLayerEvent { filter_type });
                        }
                    }
                });

                ui.add_space(10.0);
                ui.separator();
                ui.heading("Preset");

                ui.text_edit_singleline(&mut settings.preset_path);
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        save_preset_events.write(SavePresetEvent);
                    }
                    if ui.button("Load").clicked() {
                        load_preset_events.write(LoadPresetEvent);
                    }
                    if ui.button("Reload Config").clicked() {
                        reload_config_events.write(ReloadConfigEvent);
                    }
                });

                ui.add_space(20.0);
                if ui.button("Quit").clicked() {
                    app_exit_events.write(AppExit::Success);
                }
            });
        });
}

/// Slider that clamps what the user drags or types but leaves an
/// out-of-range value alone while merely drawing it, so loaded presets
/// are not rewritten by the panel.
fn edit_slider<'a, Num: egui::emath::Numeric>(
    value: &'a mut Num,
    range: RangeInclusive<Num>,
    text: &str,
) -> egui::Slider<'a> {
    egui::Slider::new(value, range)
        .clamping(egui::SliderClamping::Edits)
        .text(text)
}

/// Edits land in the layer's pending copy; they show up once the next
/// frame's poll commits them.
fn render_noise_layer(
    ui: &mut egui::Ui,
    index: usize,
    layer: &mut NoiseSettings,
    octave_range: RangeInclusive<u32>,
) {
    let title = format!("Layer {} ({})", index, layer.filter_type());
    egui::CollapsingHeader::new(title)
        .id_salt(("noise_layer", index))
        .default_open(index == 0)
        .show(ui, |ui| {
            ui.checkbox(&mut layer.enabled, "Enabled");
            // The first layer is the mask source, so it never masks itself
            if index > 0 {
                ui.checkbox(&mut layer.use_first_layer_as_mask, "Mask with first layer");
            }

            if let Some(ridged) = layer.ridged_mut() {
                ui.add(edit_slider(
                    &mut ridged.weight_multiplier,
                    0.0..=2.0,
                    "Weight multiplier",
                ));
            }

            let simple = layer.simple_mut();
            ui.add(edit_slider(&mut simple.strength, 0.0..=4.0, "Strength"));
            ui.add(edit_slider(&mut simple.num_layers, octave_range, "Octaves"));
            ui.add(edit_slider(&mut simple.base_roughness, 0.0..=8.0, "Base roughness"));
            ui.add(edit_slider(&mut simple.roughness, 0.0..=8.0, "Roughness"));
            ui.add(edit_slider(&mut simple.persistence, 0.0..=1.0, "Persistence"));
            ui.add(edit_slider(&mut simple.min_value, 0.0..=4.0, "Min value"));
            ui.horizontal(|ui| {
                ui.label("Center");
                ui.add(egui::DragValue::new(&mut simple.center.x).speed(0.05).prefix("x: "));
                ui.add(egui::DragValue::new(&mut simple.center.y).speed(0.05).prefix("y: "));
                ui.add(egui::DragValue::new(&mut simple.center.z).speed(0.05).prefix("z: "));
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(mut add_contents: impl FnMut(&mut egui::Ui)) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add_contents(ui));
        });
    }

    #[test]
    fn test_drawing_keeps_out_of_range_radius() {
        let mut radius = 5.0_f32;
        draw(|ui| {
            ui.add(edit_slider(&mut radius, 0.1..=3.0, "Radius"));
        });
        assert_eq!(radius, 5.0);
    }

    #[test]
    fn test_drawing_layer_keeps_out_of_range_values() {
        let mut layer = NoiseSettings::new(FilterType::Ridged);
        {
            let simple = layer.simple_mut();
            simple.min_value = -0.3;
            simple.persistence = 1.2;
            simple.num_layers = 8;
            simple.center = Vec3::new(0.5, -1.0, 2.0);
        }
        if let Some(ridged) = layer.ridged_mut() {
            ridged.weight_multiplier = 3.5;
        }
        let before = layer.clone();

        draw(|ui| render_noise_layer(ui, 0, &mut layer, 1..=4));

        assert_eq!(layer, before);
    }
}
