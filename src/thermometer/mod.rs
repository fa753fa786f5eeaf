pub mod components;
pub mod logic;
pub mod resources;
pub mod systems;

use crate::thermometer::resources::*;
use crate::thermometer::systems::*;
use bevy::prelude::*;

/// Ordering of the per-frame thermometer work.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThermometerSystems {
    /// Mouse and keyboard.
    Input,
    /// Seasonal animations.
    Animate,
    /// Bar, material and highlight.
    Display,
}

pub struct ThermometerPlugin;

impl Plugin for ThermometerPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ThermometerSettings::load())
            .init_resource::<SelectedThermometer>()
            .init_resource::<PointerOverUi>()
            .configure_sets(
                Update,
                (
                    ThermometerSystems::Input,
                    ThermometerSystems::Animate,
                    ThermometerSystems::Display,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (handle_mouse_selection, handle_cancel_key, handle_key_input)
                    .chain()
                    .in_set(ThermometerSystems::Input),
            )
            .add_systems(
                Update,
                advance_seasonal_tweens.in_set(ThermometerSystems::Animate),
            )
            .add_systems(
                Update,
                (
                    link_thermometer_parts,
                    update_temperature_display,
                    update_selection_visual,
                    log_thermometer_readouts,
                )
                    .chain()
                    .in_set(ThermometerSystems::Display),
            );
    }
}
