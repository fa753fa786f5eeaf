use crate::thermometer::components::{Seasonal, Thermometer};
use crate::thermometer::logic::apply_reloaded_config;
use crate::thermometer::resources::{PointerOverUi, SelectedThermometer, ThermometerSettings};
use crate::weather::events::ChangeSeason;
use crate::weather::resources::WeatherStation;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use thermometry::config::CONFIG_PATH;
use thermometry::season::Season;

/// Side panel with the season buttons, runtime toggles and a per-thermometer inspector.
pub fn render_control_panel(
    mut contexts: EguiContexts,
    mut settings: ResMut<ThermometerSettings>,
    station: Res<WeatherStation>,
    selected: Res<SelectedThermometer>,
    mut season_changes: MessageWriter<ChangeSeason>,
    mut pointer_over_ui: ResMut<PointerOverUi>,
    mut thermometers: Query<(Entity, NameOrEntity, &mut Thermometer, Option<&mut Seasonal>)>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut reload_requested = false;
    let mut save_requested = false;

    egui::SidePanel::right("weather_panel")
        .default_width(320.0)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Weather");
                ui.add_space(5.0);
                ui.label(station.reading.label());
                ui.horizontal(|ui| {
                    for season in Season::ALL {
                        if ui.button(season.name()).clicked() {
                            season_changes.write(ChangeSeason(season));
                        }
                    }
                });

                ui.add_space(10.0);
                ui.separator();
                ui.heading("Controls");
                ui.add_space(5.0);

                ui.checkbox(&mut settings.input.enable_key_input, "Keyboard control");
                ui.checkbox(&mut settings.input.use_select_mode, "Select mode");
                ui.label("Change speed");
                ui.add(
                    egui::Slider::new(&mut settings.input.change_speed, 1.0..=50.0)
                        .suffix(" °C/s"),
                );
                ui.checkbox(
                    &mut settings.selection.show_selection_effect,
                    "Selection highlight",
                );
                ui.checkbox(&mut settings.debug.show_debug_info, "Log readouts");
                ui.label("Seasonal animation");
                ui.add(
                    egui::Slider::new(&mut settings.animation.duration, 0.0..=10.0).suffix(" s"),
                );

                ui.horizontal(|ui| {
                    if ui.button("Reload config").clicked() {
                        reload_requested = true;
                    }
                    if ui.button("Save config").clicked() {
                        save_requested = true;
                    }
                });

                ui.add_space(10.0);
                ui.separator();
                ui.heading("Thermometers");
                ui.add_space(5.0);

                for (entity, name, mut thermometer, seasonal) in &mut thermometers {
                    let marker = if selected.is_selected(entity) { "▶ " } else { "" };
                    let kind = if seasonal.is_some() {
                        "seasonal"
                    } else {
                        "selectable"
                    };
                    ui.label(format!(
                        "{marker}{name} ({kind}) · {}",
                        thermometer.band().material_name()
                    ));

                    let range = thermometer.range;
                    let mut temperature = thermometer.temperature;
                    let slider =
                        egui::Slider::new(&mut temperature, range.min..=range.max).suffix(" °C");
                    if ui.add(slider).changed() {
                        thermometer.temperature = temperature;
                    }
                }
            });
        });

    pointer_over_ui.0 = ctx.is_pointer_over_area();

    if reload_requested {
        match thermometry::reload_config() {
            Ok(config) => {
                for (_, _, mut thermometer, mut seasonal) in &mut thermometers {
                    apply_reloaded_config(&mut thermometer, seasonal.as_deref_mut(), &config);
                }
                settings.0 = config;
                info!("Thermometry config reloaded");
            }
            Err(err) => warn!("Config reload failed: {err}"),
        }
    }

    if save_requested {
        match settings.save_to_file(CONFIG_PATH) {
            Ok(()) => info!("Thermometry config saved to {CONFIG_PATH}"),
            Err(err) => warn!("Config save failed: {err}"),
        }
    }
}
