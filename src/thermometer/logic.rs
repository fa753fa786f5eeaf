use super::components::{Seasonal, Thermometer};
use super::resources::SelectedThermometer;
use bevy::color::Mix;
use bevy::input::ButtonInput;
use bevy::prelude::{Color, Entity, KeyCode, Transform};
use thermometry::input::{self, Adjust};
use thermometry::ThermometryConfig;
use thermometry::mapping::BarLayout;

const PRESET_KEYS: [KeyCode; 5] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
];

/// What a left click hit in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Thermometer(Entity),
    /// Some other geometry. Leaves the selection alone.
    Other,
    Nothing,
}

/// Outcome of a click, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Selected {
        entity: Entity,
        previous: Option<Entity>,
    },
    Cleared(Entity),
    Unchanged,
}

pub fn apply_click(selected: &mut SelectedThermometer, target: ClickTarget) -> SelectionChange {
    match target {
        ClickTarget::Thermometer(entity) => {
            let previous = selected.select(entity);
            SelectionChange::Selected { entity, previous }
        }
        ClickTarget::Nothing => match selected.clear() {
            Some(entity) => SelectionChange::Cleared(entity),
            None => SelectionChange::Unchanged,
        },
        ClickTarget::Other => SelectionChange::Unchanged,
    }
}

/// Keyboard state relevant to temperature control for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KeyCommands {
    pub up: bool,
    pub down: bool,
    pub up_started: bool,
    pub down_started: bool,
    pub preset: Option<usize>,
    pub reset: bool,
}

impl KeyCommands {
    pub fn read(keys: &ButtonInput<KeyCode>) -> Self {
        Self {
            up: keys.pressed(KeyCode::ArrowUp),
            down: keys.pressed(KeyCode::ArrowDown),
            up_started: keys.just_pressed(KeyCode::ArrowUp),
            down_started: keys.just_pressed(KeyCode::ArrowDown),
            preset: PRESET_KEYS.iter().rposition(|&key| keys.just_pressed(key)),
            reset: keys.just_pressed(KeyCode::KeyR),
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.up && !self.down && self.preset.is_none() && !self.reset
    }
}

/// Apply one frame of keyboard commands. Holding both arrows cancels out; a preset or
/// reset pressed in the same frame wins over the arrows, and reset wins over a preset.
pub fn apply_key_commands(
    thermometer: &mut Thermometer,
    commands: &KeyCommands,
    speed: f32,
    delta_time: f32,
) {
    let range = thermometer.range;
    if commands.up {
        thermometer.temperature =
            input::hold(thermometer.temperature, Adjust::Up, speed, delta_time, &range);
    }
    if commands.down {
        thermometer.temperature =
            input::hold(thermometer.temperature, Adjust::Down, speed, delta_time, &range);
    }
    if let Some(preset) = commands.preset.and_then(|index| input::preset(index, &range)) {
        thermometer.temperature = preset;
    }
    if commands.reset {
        thermometer.temperature = input::reset(&range);
    }
}

/// Write the bar layout into the bar's local transform. Only Y is touched.
pub fn apply_bar_layout(transform: &mut Transform, layout: &BarLayout) {
    transform.scale.y = layout.height;
    transform.translation.y = layout.y_offset;
}

/// Move a thermometer onto a reloaded range and heights.
///
/// The temperature and any running seasonal animation are pulled into the new range.
pub fn apply_reloaded_config(
    thermometer: &mut Thermometer,
    seasonal: Option<&mut Seasonal>,
    config: &ThermometryConfig,
) {
    thermometer.range = config.range;
    thermometer.heights = config.display.heights;
    let temperature = thermometer.temperature;
    thermometer.set_clamped(temperature);
    if let Some(tween) = seasonal.and_then(|seasonal| seasonal.tween.as_mut()) {
        tween.clamp_to(&config.range);
    }
}

pub fn highlight_color(original: Color, selected: Color, weight: f32) -> Color {
    original.mix(&selected, weight)
}
