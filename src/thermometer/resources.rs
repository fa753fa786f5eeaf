use bevy::prelude::*;
use thermometry::ThermometryConfig;
use thermometry::mapping::Band;

/// Runtime copy of the thermometry config. The egui panel edits the toggles in place.
#[derive(Resource, Debug, Clone, Default, Deref, DerefMut)]
pub struct ThermometerSettings(pub ThermometryConfig);

impl ThermometerSettings {
    /// Read `thermometry_config.toml`, falling back to defaults when it is broken.
    pub fn load() -> Self {
        match thermometry::reload_config() {
            Ok(config) => {
                info!("Thermometry config loaded");
                Self(config)
            }
            Err(err) => {
                warn!("{err}, using default thermometry config");
                Self(thermometry::get_config())
            }
        }
    }

    pub fn selected_color(&self) -> Color {
        let [r, g, b, a] = self.selection.selected_color;
        Color::srgba(r, g, b, a)
    }
}

/// Owner of the single selection slot shared by all selectable thermometers.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectedThermometer(Option<Entity>);

impl SelectedThermometer {
    pub fn get(&self) -> Option<Entity> {
        self.0
    }

    pub fn is_selected(&self, entity: Entity) -> bool {
        self.0 == Some(entity)
    }

    /// Put `entity` in the slot and return the previous holder if it was a different entity.
    pub fn select(&mut self, entity: Entity) -> Option<Entity> {
        let previous = self.0.replace(entity);
        previous.filter(|&previous| previous != entity)
    }

    /// Empty the slot and return whoever held it.
    pub fn clear(&mut self) -> Option<Entity> {
        self.0.take()
    }
}

/// Materials for the three temperature bands.
#[derive(Resource, Debug, Clone)]
pub struct ThermometerMaterials {
    pub cold: Handle<StandardMaterial>,
    pub mild: Handle<StandardMaterial>,
    pub hot: Handle<StandardMaterial>,
}

impl ThermometerMaterials {
    pub fn for_band(&self, band: Band) -> &Handle<StandardMaterial> {
        match band {
            Band::Cold => &self.cold,
            Band::Mild => &self.mild,
            Band::Hot => &self.hot,
        }
    }
}

/// Set while the pointer is over an interface panel so scene clicks are ignored.
#[derive(Resource, Debug, Default)]
pub struct PointerOverUi(pub bool);
