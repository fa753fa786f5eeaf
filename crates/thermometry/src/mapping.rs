// Temperature to bar geometry and material band (engine-agnostic)

use crate::range::TemperatureRange;
use serde::{Deserialize, Serialize};

/// One of the three equal slices of a [`TemperatureRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Cold,
    Mild,
    Hot,
}

impl Band {
    /// Band containing `temperature`. A value exactly on a threshold belongs to the warmer band.
    pub fn of(temperature: f32, range: &TemperatureRange) -> Self {
        if temperature < range.cold_threshold() {
            Band::Cold
        } else if temperature < range.warm_threshold() {
            Band::Mild
        } else {
            Band::Hot
        }
    }

    pub fn material_name(&self) -> &'static str {
        match self {
            Band::Cold => "Mat_Cold",
            Band::Mild => "Mat_Warm",
            Band::Hot => "Mat_Hot",
        }
    }
}

/// Vertical scale limits of the fill bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeightRange {
    pub min: f32,
    pub max: f32,
}

impl Default for HeightRange {
    fn default() -> Self {
        Self {
            min: crate::constants::DEFAULT_MIN_HEIGHT,
            max: crate::constants::DEFAULT_MAX_HEIGHT,
        }
    }
}

impl HeightRange {
    pub fn lerp(&self, t: f32) -> f32 {
        self.min + t * (self.max - self.min)
    }
}

/// Everything needed to draw the fill bar for one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    /// Y scale of the bar.
    pub height: f32,
    /// Local Y position of the bar so it grows up from the bottom of the frame.
    pub y_offset: f32,
    pub band: Band,
}

/// Map a temperature to bar height, vertical offset and material band.
///
/// # Arguments
/// * `temperature` - Current reading, may be slightly outside `range`
/// * `pivot_offset` - Distance from the bar's pivot to the frame bottom (0.85 for the stock model)
pub fn bar_layout(
    temperature: f32,
    range: &TemperatureRange,
    heights: &HeightRange,
    pivot_offset: f32,
) -> BarLayout {
    let t = range.normalize(temperature);
    let height = heights.lerp(t);

    BarLayout {
        height,
        y_offset: height / 2.0 - pivot_offset,
        band: Band::of(temperature, range),
    }
}
