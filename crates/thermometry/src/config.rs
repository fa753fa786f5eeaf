use crate::constants::*;
use crate::highlight::SelectionPulse;
use crate::mapping::HeightRange;
use crate::range::TemperatureRange;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

pub const CONFIG_PATH: &str = "thermometry_config.toml";

static CONFIG: OnceLock<Mutex<ThermometryConfig>> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid temperature range: min {min} must be below max {max}")]
    InvalidRange { min: f32, max: f32 },
}

/// Get a copy of the current configuration, loading it on first use.
///
/// A missing or broken file falls back to defaults; use [`ThermometryConfig::load_from_file`]
/// to see the error.
pub fn get_config() -> ThermometryConfig {
    let config_mutex = CONFIG.get_or_init(|| {
        Mutex::new(ThermometryConfig::load_or_default(CONFIG_PATH).unwrap_or_default())
    });
    match config_mutex.lock() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Re-read the config file and replace the cached copy.
pub fn reload_config() -> Result<ThermometryConfig, ConfigError> {
    let new_config = ThermometryConfig::load_or_default(CONFIG_PATH)?;
    let config_mutex = CONFIG.get_or_init(|| Mutex::new(new_config.clone()));
    match config_mutex.lock() {
        Ok(mut config) => *config = new_config.clone(),
        Err(poisoned) => *poisoned.into_inner() = new_config.clone(),
    }
    Ok(new_config)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermometryConfig {
    pub range: TemperatureRange,
    pub display: DisplayConfig,
    pub input: InputConfig,
    pub selection: SelectionConfig,
    pub animation: AnimationConfig,
    pub weather: WeatherConfig,
    pub debug: DebugConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub heights: HeightRange,
    pub bar_pivot_offset: f32,
    pub initial_temperature: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            heights: HeightRange::default(),
            bar_pivot_offset: BAR_PIVOT_OFFSET,
            initial_temperature: DEFAULT_INITIAL_TEMP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub enable_key_input: bool,
    /// Degrees per second while an arrow key is held.
    pub change_speed: f32,
    /// Only the selected thermometer reacts to the keyboard.
    pub use_select_mode: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            enable_key_input: true,
            change_speed: 10.0,
            use_select_mode: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub show_selection_effect: bool,
    /// sRGB, alpha last.
    pub selected_color: [f32; 4],
    pub pulse: SelectionPulse,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            show_selection_effect: true,
            selected_color: [1.0, 0.92, 0.016, 1.0],
            pulse: SelectionPulse::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Seconds a seasonal change takes to reach its target.
    pub duration: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { duration: 2.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub city: String,
    pub initial_average: f32,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY.to_string(),
            initial_average: DEFAULT_AVERAGE_TEMP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    pub show_debug_info: bool,
    /// Seconds between periodic readouts of each thermometer.
    pub log_interval: f32,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_debug_info: true,
            log_interval: 1.0,
        }
    }
}

impl ThermometryConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: ThermometryConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Like [`Self::load_from_file`] but a missing file is not an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = self.range.min < self.range.max;
        if !ordered {
            return Err(ConfigError::InvalidRange {
                min: self.range.min,
                max: self.range.max,
            });
        }
        Ok(())
    }
}
