use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thermometry::aggregate::WeatherReading;

/// Seasonal thermometers averaged into the city reading, and the last reading.
#[derive(Resource, Debug, Default)]
pub struct WeatherStation {
    pub thermometers: Vec<Entity>,
    pub reading: WeatherReading,
}

impl WeatherStation {
    pub fn new(reading: WeatherReading) -> Self {
        Self {
            thermometers: Vec::new(),
            reading,
        }
    }

    pub fn register(&mut self, entity: Entity) {
        if !self.thermometers.contains(&entity) {
            self.thermometers.push(entity);
        }
    }
}

/// Source of the random seasonal targets.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct WeatherRng(pub StdRng);

impl Default for WeatherRng {
    fn default() -> Self {
        Self(StdRng::from_os_rng())
    }
}
