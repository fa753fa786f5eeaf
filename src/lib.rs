mod core;
pub mod scene;
pub mod thermometer;
pub mod ui;
pub mod weather;

use crate::core::camera::CameraPlugin;
use crate::scene::ScenePlugin;
use crate::thermometer::ThermometerPlugin;
use crate::ui::UIPlugin;
use crate::weather::WeatherPlugin;

use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;

pub struct ThermometerScenePlugin;

impl Plugin for ThermometerScenePlugin {
    fn build(&self, app: &mut App) {
        // Thermometer settings must exist before the weather station reads them.
        app.add_plugins((
            CameraPlugin,
            ThermometerPlugin,
            WeatherPlugin,
            ScenePlugin,
            UIPlugin,
        ));

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}
