use super::components::WeatherLabel;
use super::events::ChangeSeason;
use super::logic::collect_reading;
use super::resources::*;
use crate::thermometer::components::{Seasonal, Thermometer};
use crate::thermometer::resources::ThermometerSettings;
use bevy::prelude::*;

pub fn check_weather_setup(station: Res<WeatherStation>, labels: Query<(), With<WeatherLabel>>) {
    if labels.is_empty() {
        error!("Weather label is not connected, the average temperature will not be shown");
    }
    if station.thermometers.is_empty() {
        error!("No thermometers registered with the weather station, season changes do nothing");
    } else {
        info!(
            "Weather station tracking {} thermometers",
            station.thermometers.len()
        );
    }
}

/// Run the seasonal operation on every registered thermometer and average the targets.
pub fn apply_season_change(
    mut season_changes: MessageReader<ChangeSeason>,
    mut station: ResMut<WeatherStation>,
    settings: Res<ThermometerSettings>,
    time: Res<Time>,
    mut rng: ResMut<WeatherRng>,
    mut thermometers: Query<(&Thermometer, &mut Seasonal)>,
) {
    for ChangeSeason(season) in season_changes.read() {
        if station.thermometers.is_empty() {
            continue;
        }

        let now = time.elapsed_secs();
        let duration = settings.animation.duration;
        let mut targets = Vec::with_capacity(station.thermometers.len());
        for &entity in &station.thermometers {
            let Ok((thermometer, mut seasonal)) = thermometers.get_mut(entity) else {
                warn!("Registered thermometer {entity} is gone, skipping it");
                continue;
            };
            targets.push(seasonal.set_temperature_for(
                thermometer,
                *season,
                &mut rng.0,
                now,
                duration,
            ));
        }

        let Some(reading) = collect_reading(&targets, *season, &settings.weather.city) else {
            continue;
        };
        info!("{} → {}", season.name(), reading.label());
        station.reading = reading;
    }
}

pub fn update_weather_label(
    station: Res<WeatherStation>,
    mut labels: Query<&mut Text, With<WeatherLabel>>,
) {
    if !station.is_changed() {
        return;
    }
    let label = station.reading.label();
    for mut text in &mut labels {
        text.0 = label.clone();
    }
}
