//! Shooting domain — прицеливание, crosshair, camera zoom
//!
//! Содержит:
//! - Aiming + ToggleAimIntent (прицел только с оружием)
//! - LookRates (gamepad/mouse чувствительность hip vs aiming)
//! - CrosshairSpread (velocity / air / aim / shooting факторы → multiplier)
//! - CameraZoom (FOV interpolation)
//!
//! Сам выстрел живёт в combat domain: он вызывает `CrosshairSpread::start_shot`.

use bevy::prelude::*;

pub mod components;
pub mod crosshair;
pub mod systems;
pub mod zoom;

pub use components::*;
pub use crosshair::{CrosshairSpread, SpreadInputs};
pub use systems::*;
pub use zoom::CameraZoom;

use crate::schedules::{advance_scheduler, ShooterSet};

/// Shooting plugin
pub struct ShootingPlugin;

impl Plugin for ShootingPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ToggleAimIntent>()
            .add_systems(FixedUpdate, process_toggle_aim.in_set(ShooterSet::Intents))
            .add_systems(
                FixedUpdate,
                handle_crosshair_timers
                    .after(advance_scheduler)
                    .in_set(ShooterSet::Timers),
            )
            .add_systems(
                FixedUpdate,
                (update_camera_zoom, update_look_rates, update_crosshair_spread)
                    .chain()
                    .in_set(ShooterSet::Tick),
            );
    }
}
