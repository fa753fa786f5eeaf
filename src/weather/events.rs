use bevy::prelude::*;
use thermometry::season::Season;

/// Request to move every registered seasonal thermometer to a new season.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeSeason(pub Season);
