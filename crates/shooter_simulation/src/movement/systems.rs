//! Movement systems

use bevy::prelude::*;

use super::components::Crouch;
use super::events::ToggleCrouchIntent;
use crate::components::MotionSignals;
use crate::config::ShooterConfig;

/// Process crouch toggle intents
pub fn process_toggle_crouch(
    mut intents: EventReader<ToggleCrouchIntent>,
    mut shooters: Query<(&mut Crouch, &MotionSignals)>,
    config: Res<ShooterConfig>,
) {
    for intent in intents.read() {
        let Ok((mut crouch, signals)) = shooters.get_mut(intent.shooter) else {
            continue;
        };

        if !crouch.toggle(signals.in_air) {
            continue;
        }

        crate::log(&format!(
            "{:?}: crouch {} (max speed {:.1}, capsule {:.2})",
            intent.shooter,
            if crouch.is_crouching() { "ON" } else { "OFF" },
            crouch.max_walk_speed(&config.movement),
            crouch.capsule_half_height(&config.movement),
        ));
    }
}
