/// Distance from the bar's pivot to the bottom of the frame in the stock thermometer model.
pub const BAR_PIVOT_OFFSET: f32 = 0.85;

pub const DEFAULT_MIN_TEMP: f32 = -10.0;
pub const DEFAULT_MAX_TEMP: f32 = 40.0;
pub const DEFAULT_MIN_HEIGHT: f32 = 0.1;
pub const DEFAULT_MAX_HEIGHT: f32 = 4.0;
pub const DEFAULT_INITIAL_TEMP: f32 = 25.0;

pub const RESET_TEMP: f32 = 20.0;
/// Temperatures bound to the number keys 1 through 5.
pub const PRESET_TEMPS: [f32; 5] = [0.0, 10.0, 20.0, 30.0, 40.0];

pub const DEFAULT_CITY: &str = "Seoul";
pub const DEFAULT_AVERAGE_TEMP: f32 = 25.0;
