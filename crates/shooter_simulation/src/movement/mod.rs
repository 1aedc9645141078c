//! Movement domain — присед
//!
//! Содержит:
//! - Crouch (toggle на земле → скорость, трение, высота капсулы)
//! - ToggleCrouchIntent (event)
//!
//! Перемещение, прыжок и гравитация — зона движка, сюда приходят только
//! `MotionSignals`.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

// Re-export all components and events
pub use components::*;
pub use events::*;
pub use systems::*;

use crate::schedules::ShooterSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ToggleCrouchIntent>()
            .add_systems(FixedUpdate, process_toggle_crouch.in_set(ShooterSet::Intents));
    }
}
