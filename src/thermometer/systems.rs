// Per-frame thermometer systems

use super::components::*;
use super::logic::*;
use super::resources::*;
use crate::core::camera::components::MainCamera;
use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use thermometry::mapping::bar_layout;

/// Find the bar and frame children of newly spawned thermometers and report what is missing.
pub fn link_thermometer_parts(
    mut commands: Commands,
    new_thermometers: Query<
        (Entity, NameOrEntity, &Thermometer, Option<&Children>),
        Without<ThermometerParts>,
    >,
    bars: Query<(), With<TempBar>>,
    frames: Query<&MeshMaterial3d<StandardMaterial>, With<TempFrame>>,
    materials: Res<Assets<StandardMaterial>>,
) {
    for (entity, name, thermometer, children) in &new_thermometers {
        let mut parts = ThermometerParts::default();
        let children = children.map(|c| c.to_vec()).unwrap_or_default();
        for child in children {
            if bars.contains(child) {
                parts.bar = Some(child);
            }
            if let Ok(material) = frames.get(child) {
                parts.frame = Some(child);
                parts.original_frame_color = materials.get(&material.0).map(|m| m.base_color);
            }
        }

        if parts.bar.is_none() {
            error!("[{name}] TempBar not found, the bar will not be updated");
        }
        if parts.frame.is_none() {
            warn!("[{name}] TempFrame not found, selection highlight disabled");
        }

        let range = thermometer.range;
        info!(
            "[{name}] thermometer ready at {:.1}°C, range {:.1}..{:.1}°C",
            thermometer.temperature, range.min, range.max
        );
        debug!(
            "[{name}] bands: cold {:.1}..{:.1}, mild {:.1}..{:.1}, hot {:.1}..{:.1}",
            range.min,
            range.cold_threshold(),
            range.cold_threshold(),
            range.warm_threshold(),
            range.warm_threshold(),
            range.max
        );

        commands
            .entity(entity)
            .insert((parts, DebugReadout::default()));
    }
}

/// Re-derive bar scale, position and material from the temperature every frame.
pub fn update_temperature_display(
    settings: Res<ThermometerSettings>,
    band_materials: Option<Res<ThermometerMaterials>>,
    thermometers: Query<(&Thermometer, &ThermometerParts)>,
    mut bars: Query<(&mut Transform, &mut MeshMaterial3d<StandardMaterial>), With<TempBar>>,
) {
    let pivot = settings.display.bar_pivot_offset;
    for (thermometer, parts) in &thermometers {
        let Some(bar) = parts.bar else {
            continue;
        };
        let Ok((mut transform, mut material)) = bars.get_mut(bar) else {
            continue;
        };

        let layout = bar_layout(
            thermometer.temperature,
            &thermometer.range,
            &thermometer.heights,
            pivot,
        );
        apply_bar_layout(&mut transform, &layout);

        if let Some(band_materials) = band_materials.as_ref() {
            let handle = band_materials.for_band(layout.band);
            if material.0 != *handle {
                material.0 = handle.clone();
            }
        }
    }
}

pub fn log_thermometer_readouts(
    time: Res<Time>,
    settings: Res<ThermometerSettings>,
    selected: Res<SelectedThermometer>,
    mut thermometers: Query<(Entity, NameOrEntity, &Thermometer, &mut DebugReadout)>,
) {
    if !settings.debug.show_debug_info {
        return;
    }
    let now = time.elapsed_secs();
    for (entity, name, thermometer, mut readout) in &mut thermometers {
        if now < readout.next_at {
            continue;
        }
        let layout = bar_layout(
            thermometer.temperature,
            &thermometer.range,
            &thermometer.heights,
            settings.display.bar_pivot_offset,
        );
        let tag = if selected.is_selected(entity) {
            " [selected]"
        } else {
            ""
        };
        info!(
            "[{name}]{tag} temperature: {:.1}°C, height: {:.2}, material: {}",
            thermometer.temperature,
            layout.height,
            layout.band.material_name()
        );
        readout.next_at = now + settings.debug.log_interval;
    }
}

/// Left click picks the thermometer under the cursor. Empty space clears the selection.
pub fn handle_mouse_selection(
    mouse: Res<ButtonInput<MouseButton>>,
    settings: Res<ThermometerSettings>,
    pointer_over_ui: Res<PointerOverUi>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    interactions: Query<&Interaction>,
    mut ray_cast: MeshRayCast,
    parents: Query<&ChildOf>,
    selectable: Query<(NameOrEntity, &Thermometer), With<Selectable>>,
    names: Query<NameOrEntity>,
    mut selected: ResMut<SelectedThermometer>,
) {
    if !settings.input.use_select_mode || !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    if pointer_over_ui.0 || interactions.iter().any(|i| *i != Interaction::None) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    let target = match ray_cast
        .cast_ray(ray, &MeshRayCastSettings::default())
        .first()
    {
        Some((hit, _)) => std::iter::once(*hit)
            .chain(parents.iter_ancestors(*hit))
            .find(|entity| selectable.contains(*entity))
            .map_or(ClickTarget::Other, ClickTarget::Thermometer),
        None => ClickTarget::Nothing,
    };

    match apply_click(&mut selected, target) {
        SelectionChange::Selected { entity, previous } => {
            if let Some(previous) = previous.and_then(|e| names.get(e).ok()) {
                info!("[{previous}] deselected");
            }
            if let Ok((name, thermometer)) = selectable.get(entity) {
                info!(
                    "[{name}] selected, current temperature {:.1}°C",
                    thermometer.temperature
                );
            }
        }
        SelectionChange::Cleared(_) => info!("Selection cleared"),
        SelectionChange::Unchanged => {}
    }
}

pub fn handle_cancel_key(
    keys: Res<ButtonInput<KeyCode>>,
    settings: Res<ThermometerSettings>,
    mut selected: ResMut<SelectedThermometer>,
) {
    if settings.input.use_select_mode && keys.just_pressed(KeyCode::Escape) {
        selected.clear();
        info!("Escape: selection cleared");
    }
}

/// Arrow keys, number presets and reset. In select mode only the selected thermometer reacts.
pub fn handle_key_input(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    settings: Res<ThermometerSettings>,
    selected: Res<SelectedThermometer>,
    mut thermometers: Query<(Entity, NameOrEntity, &mut Thermometer), With<Selectable>>,
) {
    if !settings.input.enable_key_input {
        return;
    }
    let key_commands = KeyCommands::read(&keys);
    if key_commands.is_idle() {
        return;
    }

    let delta = time.delta_secs();
    for (entity, name, mut thermometer) in &mut thermometers {
        if settings.input.use_select_mode && !selected.is_selected(entity) {
            continue;
        }
        apply_key_commands(
            &mut thermometer,
            &key_commands,
            settings.input.change_speed,
            delta,
        );

        if key_commands.up_started {
            debug!("[{name}] warming... {:.1}°C", thermometer.temperature);
        }
        if key_commands.down_started {
            debug!("[{name}] cooling... {:.1}°C", thermometer.temperature);
        }
        if key_commands.reset {
            info!("[{name}] temperature reset to {:.1}°C", thermometer.temperature);
        }
    }
}

/// Pulse the frame color and object scale of the selected thermometer, restore the others.
///
/// With the effect switched off every thermometer is restored, including the selected one.
pub fn update_selection_visual(
    time: Res<Time>,
    settings: Res<ThermometerSettings>,
    selected: Res<SelectedThermometer>,
    mut thermometers: Query<(Entity, &mut Transform, &ThermometerParts), With<Selectable>>,
    frames: Query<&MeshMaterial3d<StandardMaterial>, With<TempFrame>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let show_effect = settings.selection.show_selection_effect;
    let pulse_config = settings.selection.pulse;
    let pulse = pulse_config.pulse(time.elapsed_secs());
    let selected_color = settings.selected_color();

    for (entity, mut transform, parts) in &mut thermometers {
        let (Some(frame), Some(original)) = (parts.frame, parts.original_frame_color) else {
            continue;
        };
        let Ok(frame_material) = frames.get(frame) else {
            continue;
        };

        let (color, scale) = if show_effect && selected.is_selected(entity) {
            (
                highlight_color(original, selected_color, pulse_config.color_weight(pulse)),
                pulse_config.scale(pulse),
            )
        } else {
            (original, 1.0)
        };

        let needs_update = materials
            .get(&frame_material.0)
            .is_some_and(|material| material.base_color != color);
        if needs_update {
            if let Some(material) = materials.get_mut(&frame_material.0) {
                material.base_color = color;
            }
        }

        let scale = Vec3::splat(scale);
        if transform.scale != scale {
            transform.scale = scale;
        }
    }
}

/// Step every running seasonal animation and drop the ones that have settled.
pub fn advance_seasonal_tweens(
    time: Res<Time>,
    mut thermometers: Query<(&mut Thermometer, &mut Seasonal)>,
) {
    let now = time.elapsed_secs();
    for (mut thermometer, mut seasonal) in &mut thermometers {
        let Some(tween) = seasonal.tween else {
            continue;
        };
        thermometer.set_clamped(tween.sample(now));
        if tween.is_finished(now) {
            seasonal.tween = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use thermometry::animation::TemperatureTween;
    use thermometry::ThermometryConfig;
    use thermometry::prelude::{HeightRange, TemperatureRange};

    fn test_app() -> App {
        let mut app = App::new();
        app.insert_resource(ThermometerSettings::default())
            .init_resource::<SelectedThermometer>()
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<Time>();
        app
    }

    fn spawn_selectable(app: &mut App, temperature: f32) -> Entity {
        app.world_mut()
            .spawn((
                Thermometer::new(temperature, TemperatureRange::default(), HeightRange::default()),
                Selectable,
            ))
            .id()
    }

    fn app_with_materials() -> App {
        let mut app = test_app();
        app.init_resource::<Assets<StandardMaterial>>();
        app
    }

    fn insert_band_materials(app: &mut App) -> ThermometerMaterials {
        let band_materials = {
            let mut materials = app.world_mut().resource_mut::<Assets<StandardMaterial>>();
            ThermometerMaterials {
                cold: materials.add(Color::srgb(0.0, 0.0, 1.0)),
                mild: materials.add(Color::srgb(0.0, 1.0, 0.0)),
                hot: materials.add(Color::srgb(1.0, 0.0, 0.0)),
            }
        };
        app.insert_resource(band_materials.clone());
        band_materials
    }

    fn spawn_with_bar(
        app: &mut App,
        temperature: f32,
        material: Handle<StandardMaterial>,
    ) -> (Entity, Entity) {
        let root = spawn_selectable(app, temperature);
        let bar = app
            .world_mut()
            .spawn((
                TempBar,
                Transform::default(),
                MeshMaterial3d(material),
                ChildOf(root),
            ))
            .id();
        (root, bar)
    }

    fn spawn_with_frame(app: &mut App, original: Color) -> (Entity, Handle<StandardMaterial>) {
        let frame_material = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(original);
        let root = spawn_selectable(app, 25.0);
        app.world_mut().entity_mut(root).insert(Transform::default());
        app.world_mut().spawn((
            TempFrame,
            MeshMaterial3d(frame_material.clone()),
            ChildOf(root),
        ));
        (root, frame_material)
    }

    fn frame_color(app: &App, handle: &Handle<StandardMaterial>) -> Color {
        app.world()
            .resource::<Assets<StandardMaterial>>()
            .get(handle)
            .unwrap()
            .base_color
    }

    #[test]
    fn test_bar_material_follows_band() {
        let mut app = app_with_materials();
        let bands = insert_band_materials(&mut app);
        app.add_systems(
            Update,
            (link_thermometer_parts, update_temperature_display).chain(),
        );
        let (root, bar) = spawn_with_bar(&mut app, 0.0, bands.hot.clone());

        for (temperature, expected) in [
            (0.0, &bands.cold),
            (15.0, &bands.mild),
            (30.0, &bands.hot),
            (6.0, &bands.cold),
        ] {
            app.world_mut().get_mut::<Thermometer>(root).unwrap().temperature = temperature;
            app.update();
            let material = app.world().get::<MeshMaterial3d<StandardMaterial>>(bar).unwrap();
            assert_eq!(&material.0, expected, "at {temperature}°C");
        }
    }

    #[test]
    fn test_bar_transform_is_stable_across_frames() {
        let mut app = app_with_materials();
        let bands = insert_band_materials(&mut app);
        app.add_systems(
            Update,
            (link_thermometer_parts, update_temperature_display).chain(),
        );
        let (_, bar) = spawn_with_bar(&mut app, 15.0, bands.mild.clone());

        app.update();
        let first = *app.world().get::<Transform>(bar).unwrap();
        let layout = bar_layout(
            15.0,
            &TemperatureRange::default(),
            &HeightRange::default(),
            ThermometerSettings::default().display.bar_pivot_offset,
        );
        assert!((first.scale.y - layout.height).abs() < 1e-5);
        assert!((first.translation.y - layout.y_offset).abs() < 1e-5);

        app.update();
        assert_eq!(*app.world().get::<Transform>(bar).unwrap(), first);
    }

    #[test]
    fn test_thermometer_without_bar_is_skipped() {
        let mut app = app_with_materials();
        insert_band_materials(&mut app);
        app.add_systems(
            Update,
            (link_thermometer_parts, update_temperature_display).chain(),
        );
        let root = spawn_selectable(&mut app, 25.0);

        app.update();
        app.update();

        let parts = app.world().get::<ThermometerParts>(root).unwrap();
        assert!(parts.bar.is_none());
        assert!(parts.frame.is_none());
        assert_eq!(app.world().get::<Thermometer>(root).unwrap().temperature, 25.0);
    }

    #[test]
    fn test_selected_frame_pulses_and_restores_on_deselect() {
        let mut app = app_with_materials();
        app.add_systems(
            Update,
            (link_thermometer_parts, update_selection_visual).chain(),
        );
        let original = Color::srgba(0.8, 0.8, 0.9, 0.3);
        let (root, frame) = spawn_with_frame(&mut app, original);
        app.world_mut().resource_mut::<SelectedThermometer>().select(root);
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(250));

        app.update();

        // Halfway up the pulse at 0.25 s with the default speed of 2.
        let scale = app.world().get::<Transform>(root).unwrap().scale;
        assert!((scale.x - 1.025).abs() < 1e-5);
        assert!((scale.y - 1.025).abs() < 1e-5);
        assert_ne!(frame_color(&app, &frame), original);

        app.world_mut().resource_mut::<SelectedThermometer>().clear();
        app.update();

        assert_eq!(app.world().get::<Transform>(root).unwrap().scale, Vec3::ONE);
        assert_eq!(frame_color(&app, &frame), original);
    }

    #[test]
    fn test_disabling_effect_restores_selected_thermometer() {
        let mut app = app_with_materials();
        app.add_systems(
            Update,
            (link_thermometer_parts, update_selection_visual).chain(),
        );
        let original = Color::srgb(0.5, 0.5, 0.5);
        let (root, frame) = spawn_with_frame(&mut app, original);
        app.world_mut().resource_mut::<SelectedThermometer>().select(root);
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(400));
        app.update();
        assert_ne!(app.world().get::<Transform>(root).unwrap().scale, Vec3::ONE);

        app.world_mut()
            .resource_mut::<ThermometerSettings>()
            .selection
            .show_selection_effect = false;
        app.update();

        assert!(app.world().resource::<SelectedThermometer>().is_selected(root));
        assert_eq!(app.world().get::<Transform>(root).unwrap().scale, Vec3::ONE);
        assert_eq!(frame_color(&app, &frame), original);
    }

    #[test]
    fn test_preset_only_reaches_selected_thermometer() {
        let mut app = test_app();
        app.add_systems(Update, handle_key_input);
        let a = spawn_selectable(&mut app, 25.0);
        let b = spawn_selectable(&mut app, 25.0);
        app.world_mut().resource_mut::<SelectedThermometer>().select(b);
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Digit2);

        app.update();

        let world = app.world();
        assert_eq!(world.get::<Thermometer>(a).unwrap().temperature, 25.0);
        assert_eq!(world.get::<Thermometer>(b).unwrap().temperature, 10.0);
    }

    #[test]
    fn test_without_select_mode_all_thermometers_react() {
        let mut app = test_app();
        app.world_mut()
            .resource_mut::<ThermometerSettings>()
            .input
            .use_select_mode = false;
        app.add_systems(Update, handle_key_input);
        let a = spawn_selectable(&mut app, 25.0);
        let b = spawn_selectable(&mut app, 5.0);
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyR);

        app.update();

        let world = app.world();
        assert_eq!(world.get::<Thermometer>(a).unwrap().temperature, 20.0);
        assert_eq!(world.get::<Thermometer>(b).unwrap().temperature, 20.0);
    }

    #[test]
    fn test_disabled_key_input_is_ignored() {
        let mut app = test_app();
        {
            let mut settings = app.world_mut().resource_mut::<ThermometerSettings>();
            settings.input.enable_key_input = false;
            settings.input.use_select_mode = false;
        }
        app.add_systems(Update, handle_key_input);
        let a = spawn_selectable(&mut app, 25.0);
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Digit1);

        app.update();

        assert_eq!(app.world().get::<Thermometer>(a).unwrap().temperature, 25.0);
    }

    #[test]
    fn test_escape_clears_selection() {
        let mut app = test_app();
        app.add_systems(Update, handle_cancel_key);
        let a = spawn_selectable(&mut app, 25.0);
        app.world_mut().resource_mut::<SelectedThermometer>().select(a);
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Escape);

        app.update();

        assert_eq!(app.world().resource::<SelectedThermometer>().get(), None);
    }

    #[test]
    fn test_tween_settles_on_target() {
        let mut app = test_app();
        app.add_systems(Update, advance_seasonal_tweens);
        let entity = app
            .world_mut()
            .spawn((
                Thermometer::new(0.0, TemperatureRange::default(), HeightRange::default()),
                Seasonal {
                    tween: Some(TemperatureTween::new(0.0, 31.337, 0.0, 2.0)),
                },
            ))
            .id();

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(1));
        app.update();
        let halfway = app.world().get::<Thermometer>(entity).unwrap().temperature;
        assert!((halfway - 15.6685).abs() < 1e-3);
        assert!(app.world().get::<Seasonal>(entity).unwrap().tween.is_some());

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(2));
        app.update();
        assert_eq!(
            app.world().get::<Thermometer>(entity).unwrap().temperature,
            31.337
        );
        assert!(app.world().get::<Seasonal>(entity).unwrap().tween.is_none());
    }

    #[test]
    fn test_reload_keeps_running_tween_in_new_range() {
        let mut app = test_app();
        app.add_systems(Update, advance_seasonal_tweens);
        let entity = app
            .world_mut()
            .spawn((
                Thermometer::new(25.0, TemperatureRange::default(), HeightRange::default()),
                Seasonal {
                    tween: Some(TemperatureTween::new(25.0, 35.0, 0.0, 2.0)),
                },
            ))
            .id();
        let mut config = ThermometryConfig::default();
        config.range = TemperatureRange { min: 0.0, max: 20.0 };

        let mut query = app
            .world_mut()
            .query::<(&mut Thermometer, &mut Seasonal)>();
        let (mut thermometer, mut seasonal) = query.get_mut(app.world_mut(), entity).unwrap();
        apply_reloaded_config(&mut thermometer, Some(&mut *seasonal), &config);

        for _ in 0..3 {
            app.world_mut()
                .resource_mut::<Time>()
                .advance_by(Duration::from_secs(1));
            app.update();
            let temperature = app.world().get::<Thermometer>(entity).unwrap().temperature;
            assert!((0.0..=20.0).contains(&temperature), "{temperature}°C escaped the range");
        }
        assert!(app.world().get::<Seasonal>(entity).unwrap().tween.is_none());
    }
}
