use thermometry::aggregate::{WeatherReading, average};
use thermometry::season::Season;

/// Build the reading for a season from the targets the thermometers returned.
///
/// Returns `None` when there were no targets, in which case the previous reading stays.
pub fn collect_reading(targets: &[f32], season: Season, city: &str) -> Option<WeatherReading> {
    let average_temperature = average(targets)?;
    Some(WeatherReading {
        average_temperature,
        location: season.location_label(city),
    })
}
