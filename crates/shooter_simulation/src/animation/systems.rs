//! Animation systems (ShooterSet::Animation, после всех gameplay изменений tick'а)

use bevy::prelude::*;

use super::lean::Lean;
use super::properties::{AnimProperties, CharacterFlags};
use super::turn_in_place::{TurnInPlace, TurnInputs};
use crate::combat::{CombatCycle, CombatState};
use crate::components::{AnimCurves, MotionSignals};
use crate::config::ShooterConfig;
use crate::movement::Crouch;
use crate::shooting::Aiming;

pub fn update_anim_properties(
    mut shooters: Query<(&mut AnimProperties, &MotionSignals, &Aiming, &CombatCycle, &Crouch)>,
) {
    for (mut props, signals, aiming, cycle, crouch) in shooters.iter_mut() {
        let flags = CharacterFlags {
            aiming: aiming.is_aiming(),
            reloading: cycle.state() == CombatState::Reloading,
            crouching: crouch.is_crouching(),
        };
        props.update(signals, flags);
    }
}

pub fn update_turn_in_place(
    config: Res<ShooterConfig>,
    mut shooters: Query<(&mut TurnInPlace, &AnimProperties, &MotionSignals, &AnimCurves)>,
) {
    for (mut turn, props, signals, curves) in shooters.iter_mut() {
        let inputs = TurnInputs {
            speed: props.speed,
            in_air: props.in_air,
            yaw: signals.yaw,
            aim_pitch: signals.aim_pitch,
            turning_curve: curves.get(AnimCurves::TURNING),
            rotation_curve: curves.get(AnimCurves::ROTATION),
        };
        turn.update(inputs, config.animation.max_root_yaw_offset);
    }
}

pub fn update_lean(time: Res<Time<Fixed>>, config: Res<ShooterConfig>, mut shooters: Query<(&mut Lean, &MotionSignals)>) {
    let dt = time.delta_secs();
    for (mut lean, signals) in shooters.iter_mut() {
        lean.update(
            signals.yaw,
            dt,
            config.animation.lean_interp_speed,
            config.animation.max_lean_yaw_delta,
        );
    }
}
