// Keyboard adjustment rules, independent of how keys are polled

use crate::constants::{PRESET_TEMPS, RESET_TEMP};
use crate::range::TemperatureRange;

/// Direction of a held temperature key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjust {
    Up,
    Down,
}

/// Apply one frame of a held adjustment key and clamp to the range.
pub fn hold(
    temperature: f32,
    direction: Adjust,
    speed: f32,
    delta_time: f32,
    range: &TemperatureRange,
) -> f32 {
    let step = speed * delta_time;
    let next = match direction {
        Adjust::Up => temperature + step,
        Adjust::Down => temperature - step,
    };
    range.clamp(next)
}

/// Preset bound to number key `index + 1`, clamped into the range.
pub fn preset(index: usize, range: &TemperatureRange) -> Option<f32> {
    PRESET_TEMPS.get(index).map(|&t| range.clamp(t))
}

pub fn reset(range: &TemperatureRange) -> f32 {
    range.clamp(RESET_TEMP)
}
