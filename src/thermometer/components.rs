use bevy::prelude::*;
use thermometry::prelude::*;

/// A thermometer whose bar follows `temperature`.
#[derive(Component, Debug, Clone)]
pub struct Thermometer {
    pub temperature: f32,
    pub range: TemperatureRange,
    pub heights: HeightRange,
}

impl Thermometer {
    pub fn new(temperature: f32, range: TemperatureRange, heights: HeightRange) -> Self {
        Self {
            temperature,
            range,
            heights,
        }
    }

    /// Set the temperature, clamped to the thermometer's range.
    pub fn set_clamped(&mut self, temperature: f32) {
        self.temperature = self.range.clamp(temperature);
    }

    pub fn band(&self) -> Band {
        Band::of(self.temperature, &self.range)
    }
}

/// Thermometer that can be picked with the mouse and driven by the keyboard.
#[derive(Component, Debug, Default)]
pub struct Selectable;

/// Thermometer driven by seasonal changes. Holds the running animation, if any.
#[derive(Component, Debug, Default)]
pub struct Seasonal {
    pub tween: Option<TemperatureTween>,
}

impl Seasonal {
    /// Draw a target for `season`, start animating towards it and return the target.
    ///
    /// Any animation in flight is replaced. The returned value is the target, not the
    /// thermometer's current temperature.
    pub fn set_temperature_for<R: rand::Rng + ?Sized>(
        &mut self,
        thermometer: &Thermometer,
        season: Season,
        rng: &mut R,
        now: f32,
        duration: f32,
    ) -> f32 {
        let target = season.draw_target(rng, &thermometer.range);
        self.tween = Some(TemperatureTween::new(
            thermometer.temperature,
            target,
            now,
            duration,
        ));
        target
    }
}

/// The fill bar child whose scale and material follow the temperature.
#[derive(Component)]
pub struct TempBar;

/// The glass frame child, tinted while the thermometer is selected.
#[derive(Component)]
pub struct TempFrame;

/// Children found at startup. `None` means the child was missing and its visual is skipped.
#[derive(Component, Debug, Default)]
pub struct ThermometerParts {
    pub bar: Option<Entity>,
    pub frame: Option<Entity>,
    pub original_frame_color: Option<Color>,
}

/// Elapsed time of the next periodic debug readout.
#[derive(Component, Debug, Default)]
pub struct DebugReadout {
    pub next_at: f32,
}
