//! Animation domain — выходы для анимационного runtime
//!
//! Содержит:
//! - AnimProperties + OffsetState (скорость, strafe offset, флаги, aim offset state)
//! - TurnInPlace (root yaw offset стоящего персонажа, кривые "Turning"/"Rotation")
//! - Lean (наклон от скорости поворота)
//!
//! Всё — чистые выходы: gameplay их не читает.

use bevy::prelude::*;

pub mod lean;
pub mod properties;
pub mod systems;
pub mod turn_in_place;


pub use lean::Lean;
pub use properties::{AnimProperties, CharacterFlags, OffsetState};
pub use systems::*;
pub use turn_in_place::{TurnInPlace, TurnInputs};

use crate::schedules::ShooterSet;

/// Animation plugin
///
/// Порядок: properties → turn in place (читает speed/in_air) → lean
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (update_anim_properties, update_turn_in_place, update_lean)
                .chain()
                .in_set(ShooterSet::Animation),
        );
    }
}
