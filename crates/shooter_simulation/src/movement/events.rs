//! Movement events

use bevy::prelude::*;

/// Event: кнопка приседа (toggle)
///
/// Генерируется input слоем, обрабатывается `process_toggle_crouch`.
/// В воздухе игнорируется.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleCrouchIntent {
    pub shooter: Entity,
}
