mod systems;

use crate::scene::systems::*;
use bevy::prelude::*;

/// Spawns the thermometers and their shared materials.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (create_band_materials, spawn_thermometers).chain());
    }
}
