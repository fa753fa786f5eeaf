mod hud;
mod panel;

use crate::ui::hud::spawn_hud;
use crate::ui::panel::render_control_panel;
use bevy::prelude::*;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .add_systems(Startup, spawn_hud)
            .add_systems(EguiPrimaryContextPass, render_control_panel);
    }
}
