pub mod aggregate;
pub mod animation;
pub mod config;
pub mod constants;
pub mod highlight;
pub mod input;
pub mod mapping;
pub mod range;
pub mod season;

pub use config::{ConfigError, ThermometryConfig, get_config, reload_config};

pub mod prelude {
    pub use crate::aggregate::{WeatherReading, average};
    pub use crate::animation::TemperatureTween;
    pub use crate::highlight::SelectionPulse;
    pub use crate::mapping::{Band, BarLayout, HeightRange, bar_layout};
    pub use crate::range::TemperatureRange;
    pub use crate::season::Season;
}
