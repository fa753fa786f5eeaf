use crate::thermometer::components::*;
use crate::thermometer::resources::{ThermometerMaterials, ThermometerSettings};
use crate::weather::resources::WeatherStation;
use bevy::prelude::*;

const SELECTABLE_ROW: [f32; 3] = [-4.0, 0.0, 4.0];
const SELECTABLE_ROW_Z: f32 = 2.0;
const SEASONAL_COUNT: usize = 7;
const SEASONAL_SPACING: f32 = 2.5;
const SEASONAL_ROW_Z: f32 = -4.0;

/// Frame cylinder centered so its bottom sits at the bar pivot.
const FRAME_RADIUS: f32 = 0.45;
const FRAME_HEIGHT: f32 = 4.6;
const FRAME_CENTER_Y: f32 = 1.15;

struct ThermometerMeshes {
    frame: Handle<Mesh>,
    bar: Handle<Mesh>,
    base: Handle<Mesh>,
    base_material: Handle<StandardMaterial>,
}

pub fn create_band_materials(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(ThermometerMaterials {
        cold: materials.add(StandardMaterial {
            base_color: Color::srgb(0.2, 0.45, 1.0),
            ..default()
        }),
        mild: materials.add(StandardMaterial {
            base_color: Color::srgb(0.2, 0.8, 0.3),
            ..default()
        }),
        hot: materials.add(StandardMaterial {
            base_color: Color::srgb(0.9, 0.15, 0.1),
            ..default()
        }),
    });
}

pub fn spawn_thermometers(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    band_materials: Res<ThermometerMaterials>,
    settings: Res<ThermometerSettings>,
    mut station: ResMut<WeatherStation>,
) {
    let shared = ThermometerMeshes {
        frame: meshes.add(Cylinder::new(FRAME_RADIUS, FRAME_HEIGHT)),
        bar: meshes.add(Cuboid::new(0.3, 1.0, 0.3)),
        base: meshes.add(Cuboid::new(1.1, 0.2, 1.1)),
        base_material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.35, 0.38),
            ..default()
        }),
    };

    for (index, x) in SELECTABLE_ROW.into_iter().enumerate() {
        let entity = spawn_thermometer(
            &mut commands,
            &shared,
            &mut materials,
            &band_materials,
            &settings,
            format!("Thermometer {}", index + 1),
            Vec3::new(x, 0.0, SELECTABLE_ROW_Z),
        );
        commands.entity(entity).insert(Selectable);
    }

    let row_start = -SEASONAL_SPACING * (SEASONAL_COUNT - 1) as f32 / 2.0;
    for index in 0..SEASONAL_COUNT {
        let x = row_start + index as f32 * SEASONAL_SPACING;
        let entity = spawn_thermometer(
            &mut commands,
            &shared,
            &mut materials,
            &band_materials,
            &settings,
            format!("Station {}", index + 1),
            Vec3::new(x, 0.0, SEASONAL_ROW_Z),
        );
        commands.entity(entity).insert(Seasonal::default());
        station.register(entity);
    }

    info!(
        "Spawned {} selectable and {} seasonal thermometers",
        SELECTABLE_ROW.len(),
        SEASONAL_COUNT
    );
}

fn spawn_thermometer(
    commands: &mut Commands,
    shared: &ThermometerMeshes,
    materials: &mut Assets<StandardMaterial>,
    band_materials: &ThermometerMaterials,
    settings: &ThermometerSettings,
    name: String,
    translation: Vec3,
) -> Entity {
    let thermometer = Thermometer::new(
        settings.display.initial_temperature,
        settings.range,
        settings.display.heights,
    );
    let bar_material = band_materials.for_band(thermometer.band()).clone();
    // Each frame gets its own material so the highlight tints only one thermometer.
    let frame_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.85, 0.9, 1.0, 0.3),
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 0.1,
        ..default()
    });
    let base_y = FRAME_CENTER_Y - FRAME_HEIGHT / 2.0 - 0.1;

    commands
        .spawn((
            Name::new(name),
            Transform::from_translation(translation),
            Visibility::default(),
            thermometer,
        ))
        .with_children(|parent| {
            parent.spawn((
                Name::new("TempBar"),
                TempBar,
                Mesh3d(shared.bar.clone()),
                MeshMaterial3d(bar_material),
                Transform::default(),
            ));
            parent.spawn((
                Name::new("TempFrame"),
                TempFrame,
                Mesh3d(shared.frame.clone()),
                MeshMaterial3d(frame_material),
                Transform::from_xyz(0.0, FRAME_CENTER_Y, 0.0),
            ));
            parent.spawn((
                Mesh3d(shared.base.clone()),
                MeshMaterial3d(shared.base_material.clone()),
                Transform::from_xyz(0.0, base_y, 0.0),
            ));
        })
        .id()
}
