use bevy::prelude::*;

/// Text node that shows the aggregate weather reading.
#[derive(Component)]
pub struct WeatherLabel;
