//! Shooting systems
//!
//! # Systems
//!
//! **Intents:**
//! - `process_toggle_aim` — вход/выход из прицеливания
//!
//! **Timers:**
//! - `handle_crosshair_timers` — закрыть shot window
//!
//! **Tick** (порядок как в character tick):
//! - `update_camera_zoom` → `update_look_rates` → `update_crosshair_spread`

use bevy::prelude::*;

use super::components::{Aiming, LookRates, ToggleAimIntent};
use super::crosshair::{CrosshairSpread, SpreadInputs};
use super::zoom::CameraZoom;
use crate::components::MotionSignals;
use crate::config::ShooterConfig;
use crate::equipment::EquippedWeapon;
use crate::schedules::{TimerFired, TimerKind};

// ============================================================================
// Aim
// ============================================================================

/// Process aim toggle intents
pub fn process_toggle_aim(
    mut intents: EventReader<ToggleAimIntent>,
    mut shooters: Query<(&mut Aiming, &EquippedWeapon)>,
) {
    for intent in intents.read() {
        let Ok((mut aiming, equipped)) = shooters.get_mut(intent.shooter) else {
            continue;
        };

        let was_aiming = aiming.is_aiming();
        let now_aiming = aiming.toggle(equipped.get().is_some());

        if was_aiming != now_aiming {
            crate::log(&format!(
                "🎯 {:?}: aiming {}",
                intent.shooter,
                if now_aiming { "ON" } else { "OFF" }
            ));
        }
    }
}

// ============================================================================
// Timers
// ============================================================================

/// Shot window истёк → crosshair перестаёт расширяться от стрельбы
pub fn handle_crosshair_timers(mut fired: EventReader<TimerFired>, mut spreads: Query<&mut CrosshairSpread>) {
    for timer in fired.read() {
        if timer.kind != TimerKind::CrosshairShotWindow {
            continue;
        }
        // Owner despawned → пропуск
        if let Ok(mut spread) = spreads.get_mut(timer.owner) {
            spread.on_shot_timer(timer.handle);
        }
    }
}

// ============================================================================
// Tick
// ============================================================================

pub fn update_camera_zoom(time: Res<Time<Fixed>>, mut shooters: Query<(&mut CameraZoom, &Aiming)>) {
    let dt = time.delta_secs();
    for (mut zoom, aiming) in shooters.iter_mut() {
        zoom.advance(aiming.is_aiming(), dt);
    }
}

pub fn update_look_rates(config: Res<ShooterConfig>, mut shooters: Query<(&mut LookRates, &Aiming)>) {
    for (mut rates, aiming) in shooters.iter_mut() {
        let target = LookRates::for_aiming(aiming.is_aiming(), &config.look);
        // set_if_neq: Changed<LookRates> только при реальной смене режима
        rates.set_if_neq(target);
    }
}

pub fn update_crosshair_spread(
    time: Res<Time<Fixed>>,
    config: Res<ShooterConfig>,
    mut shooters: Query<(&mut CrosshairSpread, &MotionSignals, &Aiming)>,
) {
    let dt = time.delta_secs();
    for (mut spread, signals, aiming) in shooters.iter_mut() {
        let inputs = SpreadInputs::from_signals(signals, aiming.is_aiming());
        spread.advance(inputs, dt, &config.crosshair);
    }
}
