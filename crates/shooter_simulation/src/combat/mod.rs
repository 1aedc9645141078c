//! Combat system module — огонь, cooldown, reload
//!
//! ECS ответственность:
//! - Weapon (магазин + тип патронов), CarriedAmmo (ledger персонажа)
//! - CombatCycle: Unoccupied → FireTimerInProgress → (refire | reload) → Unoccupied
//! - Events: WeaponFired, MontageRequest, ReloadFinished
//!
//! Анимационный runtime:
//! - играет montage по MontageRequest
//! - шлёт AnimNotify (FinishReloading / GrabClip / ReleaseClip)
//!
//! Переходы — чистые методы `CombatCycle` (см. cycle.rs), системы только
//! собирают данные из мира и отправляют cues.

use bevy::prelude::*;

pub mod ammo;
pub mod cycle;
pub mod events;
pub mod systems;
pub mod weapon;

#[cfg(test)]
mod cycle_tests;

// Re-export основных типов
pub use ammo::CarriedAmmo;
pub use cycle::{grab_clip, release_clip, CombatCtx, CombatCue, CombatCycle, CombatState, ReloadTransfer};
pub use events::*;
pub use systems::*;
pub use weapon::{AmmoType, ClipBone, Weapon, WeaponSpec, WeaponType};

use crate::schedules::{advance_scheduler, ShooterSet};

/// Combat Plugin
///
/// Порядок выполнения:
/// 1. Intents: fire → reload → anim notifies
/// 2. Timers: handle_auto_fire_timers (после advance_scheduler)
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<FireButtonIntent>()
            .add_event::<ReloadIntent>()
            .add_event::<AnimNotify>()
            .add_event::<MontageRequest>()
            .add_event::<WeaponFired>()
            .add_event::<ReloadFinished>();

        app.add_systems(
            FixedUpdate,
            (process_fire_intents, process_reload_intents, process_anim_notifies)
                .chain()
                .in_set(ShooterSet::Intents),
        )
        .add_systems(
            FixedUpdate,
            handle_auto_fire_timers
                .after(advance_scheduler)
                .in_set(ShooterSet::Timers),
        );
    }
}
