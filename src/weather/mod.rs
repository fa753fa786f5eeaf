pub mod components;
pub mod events;
mod logic;
pub mod resources;
pub mod systems;

use crate::thermometer::ThermometerSystems;
use crate::thermometer::resources::ThermometerSettings;
use crate::weather::events::ChangeSeason;
use crate::weather::resources::*;
use crate::weather::systems::*;
use bevy::prelude::*;
use thermometry::aggregate::WeatherReading;

pub struct WeatherPlugin;

impl Plugin for WeatherPlugin {
    fn build(&self, app: &mut App) {
        let reading = app
            .world()
            .get_resource::<ThermometerSettings>()
            .map(|settings| WeatherReading {
                average_temperature: settings.weather.initial_average,
                location: settings.weather.city.clone(),
            })
            .unwrap_or_default();

        app.add_message::<ChangeSeason>()
            .insert_resource(WeatherStation::new(reading))
            .init_resource::<WeatherRng>()
            .add_systems(PostStartup, check_weather_setup)
            .add_systems(
                Update,
                (apply_season_change, update_weather_label)
                    .chain()
                    .before(ThermometerSystems::Animate),
            );
    }
}
