use crate::constants::{DEFAULT_AVERAGE_TEMP, DEFAULT_CITY};

/// Arithmetic mean, `None` when there is nothing to average.
pub fn average(values: &[f32]) -> Option<f32> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f32>() / values.len() as f32)
}

/// Aggregate shown on the weather label.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub average_temperature: f32,
    pub location: String,
}

impl Default for WeatherReading {
    fn default() -> Self {
        Self {
            average_temperature: DEFAULT_AVERAGE_TEMP,
            location: DEFAULT_CITY.to_string(),
        }
    }
}

impl WeatherReading {
    pub fn label(&self) -> String {
        format!(
            "{} average temperature: {:.1}°C",
            self.location, self.average_temperature
        )
    }
}
