use crate::mapping::Band;
use serde::{Deserialize, Serialize};

/// Closed temperature interval a thermometer can display, in Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemperatureRange {
    pub min: f32,
    pub max: f32,
}

impl Default for TemperatureRange {
    fn default() -> Self {
        Self {
            min: crate::constants::DEFAULT_MIN_TEMP,
            max: crate::constants::DEFAULT_MAX_TEMP,
        }
    }
}

impl TemperatureRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    pub fn clamp(&self, temperature: f32) -> f32 {
        temperature.clamp(self.min, self.max)
    }

    /// Position of `temperature` inside the range as a value in `[0, 1]`.
    ///
    /// Out of range values are clamped instead of rejected. A range with zero span maps
    /// everything to `0`.
    pub fn normalize(&self, temperature: f32) -> f32 {
        let span = self.span();
        if span == 0.0 {
            return 0.0;
        }
        ((temperature - self.min) / span).clamp(0.0, 1.0)
    }

    /// Upper (exclusive) edge of the cold band.
    pub fn cold_threshold(&self) -> f32 {
        self.min + self.span() / 3.0
    }

    /// Upper (exclusive) edge of the mild band.
    pub fn warm_threshold(&self) -> f32 {
        self.min + 2.0 * self.span() / 3.0
    }

    /// Half-open `[low, high)` bounds of a band.
    pub fn band_bounds(&self, band: Band) -> (f32, f32) {
        match band {
            Band::Cold => (self.min, self.cold_threshold()),
            Band::Mild => (self.cold_threshold(), self.warm_threshold()),
            Band::Hot => (self.warm_threshold(), self.max),
        }
    }
}
