// Pulsing highlight for the selected thermometer

use serde::{Deserialize, Serialize};

/// Triangle wave that bounces `t` between `0` and `length`.
pub fn ping_pong(t: f32, length: f32) -> f32 {
    if length <= 0.0 {
        return 0.0;
    }
    let period = length * 2.0;
    let phase = t.rem_euclid(period);
    length - (phase - length).abs()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionPulse {
    /// Multiplier applied to elapsed seconds before the ping-pong.
    pub speed: f32,
    /// How far the frame color moves towards the selection color at the top of the pulse.
    pub color_blend: f32,
    /// Extra uniform scale at the top of the pulse.
    pub scale_amplitude: f32,
}

impl Default for SelectionPulse {
    fn default() -> Self {
        Self {
            speed: 2.0,
            color_blend: 0.7,
            scale_amplitude: 0.05,
        }
    }
}

impl SelectionPulse {
    /// Pulse value in `[0, 1]` for the given elapsed time.
    pub fn pulse(&self, elapsed: f32) -> f32 {
        ping_pong(elapsed * self.speed, 1.0)
    }

    pub fn color_weight(&self, pulse: f32) -> f32 {
        pulse * self.color_blend
    }

    pub fn scale(&self, pulse: f32) -> f32 {
        1.0 + pulse * self.scale_amplitude
    }
}
