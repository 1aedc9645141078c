//! Combat systems: intents / notifies / timers → CombatCycle → events
//!
//! # Systems
//!
//! **Intents** (ShooterSet::Intents, по порядку):
//! - `process_fire_intents` — нажатие/отпускание огня
//! - `process_reload_intents` — ручной reload
//! - `process_anim_notifies` — FinishReloading / GrabClip / ReleaseClip
//!
//! **Timers:**
//! - `handle_auto_fire_timers` — конец cooldown → refire / auto reload

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::ammo::CarriedAmmo;
use super::cycle::{grab_clip, release_clip, CombatCtx, CombatCue, CombatCycle, CombatState};
use super::events::{AnimNotify, AnimNotifyKind, FireButtonIntent, MontageRequest, ReloadFinished, ReloadIntent, WeaponFired};
use super::weapon::{ClipBone, Weapon};
use crate::components::{AimRay, CrosshairHit, HandAnchor};
use crate::config::ShooterConfig;
use crate::equipment::EquippedWeapon;
use crate::schedules::{Scheduler, TimerFired, TimerKind};
use crate::shooting::CrosshairSpread;

/// Куда уходят побочные эффекты combat переходов
///
/// Владеет Scheduler: сначала переход (CombatCtx), потом dispatch его cues.
#[derive(SystemParam)]
pub struct CombatOutputs<'w, 's> {
    scheduler: ResMut<'w, Scheduler>,
    config: Res<'w, ShooterConfig>,
    spreads: Query<'w, 's, &'static mut CrosshairSpread>,
    aims: Query<'w, 's, (Option<&'static AimRay>, &'static CrosshairHit)>,
    fired_events: EventWriter<'w, WeaponFired>,
    montage_events: EventWriter<'w, MontageRequest>,
}

impl CombatOutputs<'_, '_> {
    /// Выполнить переход для `owner` и отправить накопленные cues
    pub fn transition<R>(&mut self, owner: Entity, apply: impl FnOnce(&mut CombatCtx) -> R) -> R {
        let mut ctx = CombatCtx::new(owner, &mut self.scheduler, self.config.combat.auto_fire_period);
        let result = apply(&mut ctx);
        let cues = std::mem::take(&mut ctx.cues);

        for cue in cues {
            self.dispatch(owner, cue);
        }
        result
    }

    fn dispatch(&mut self, owner: Entity, cue: CombatCue) {
        match cue {
            CombatCue::Fired { weapon, ammo_left } => {
                let (beam_end, hit_entity) = self.beam_end(owner);
                self.fired_events.write(WeaponFired {
                    shooter: owner,
                    weapon,
                    beam_end,
                    hit: hit_entity.is_some(),
                    hit_entity,
                    ammo_left,
                });

                if let Ok(mut spread) = self.spreads.get_mut(owner) {
                    spread.start_shot(owner, &mut self.scheduler, self.config.crosshair.shot_window);
                }

                crate::log(&format!("🔫 {:?}: fired {:?} (ammo left {})", owner, weapon, ammo_left));
            }
            CombatCue::PlayMontage { montage, section } => {
                self.montage_events.write(MontageRequest {
                    shooter: owner,
                    montage,
                    section,
                });
            }
        }
    }

    /// Конец луча: попадание crosshair trace, иначе конец aim ray
    fn beam_end(&self, owner: Entity) -> (Option<Vec3>, Option<Entity>) {
        let Ok((aim_ray, crosshair_hit)) = self.aims.get(owner) else {
            return (None, None);
        };

        if let Some(hit) = crosshair_hit.0 {
            return (Some(hit.location), Some(hit.entity));
        }

        let end = aim_ray.map(|ray| ray.point_at(self.config.trace.trace_distance));
        (end, None)
    }
}

// ============================================================================
// Intents
// ============================================================================

/// Fire button: нажатие → попытка выстрела, отпускание → refire прекращается
pub fn process_fire_intents(
    mut intents: EventReader<FireButtonIntent>,
    mut shooters: Query<(&mut CombatCycle, &EquippedWeapon)>,
    mut weapons: Query<&mut Weapon>,
    mut outputs: CombatOutputs,
) {
    for intent in intents.read() {
        let Ok((mut cycle, equipped)) = shooters.get_mut(intent.shooter) else {
            continue;
        };

        if !intent.pressed {
            cycle.release_fire();
            continue;
        }

        let weapon = equipped
            .get()
            .and_then(|entity| weapons.get_mut(entity).ok().map(|weapon| (entity, weapon.into_inner())));

        outputs.transition(intent.shooter, |ctx| cycle.press_fire(weapon, ctx));
    }
}

pub fn process_reload_intents(
    mut intents: EventReader<ReloadIntent>,
    mut shooters: Query<(&mut CombatCycle, &EquippedWeapon, &CarriedAmmo)>,
    weapons: Query<&Weapon>,
    mut outputs: CombatOutputs,
) {
    for intent in intents.read() {
        let Ok((mut cycle, equipped, ledger)) = shooters.get_mut(intent.shooter) else {
            continue;
        };

        let weapon = equipped
            .get()
            .and_then(|entity| weapons.get(entity).ok().map(|weapon| (entity, weapon)));

        let started = outputs.transition(intent.shooter, |ctx| cycle.reload_weapon(weapon, ledger, ctx));
        if started {
            crate::log(&format!("🔄 {:?}: reloading", intent.shooter));
        }
    }
}

/// Notifies из reload montage
pub fn process_anim_notifies(
    mut notifies: EventReader<AnimNotify>,
    mut shooters: Query<(&mut CombatCycle, &EquippedWeapon, &mut CarriedAmmo, Option<&mut HandAnchor>)>,
    mut weapons: Query<(&mut Weapon, Option<&ClipBone>)>,
    mut reload_events: EventWriter<ReloadFinished>,
) {
    for notify in notifies.read() {
        let Ok((mut cycle, equipped, mut ledger, hand)) = shooters.get_mut(notify.shooter) else {
            continue;
        };

        let weapon_entity = equipped.get();
        let weapon = weapon_entity.and_then(|entity| weapons.get_mut(entity).ok());

        match notify.kind {
            AnimNotifyKind::FinishReloading => {
                let was_reloading = cycle.state() == CombatState::Reloading;
                let weapon = weapon.map(|(weapon, _)| weapon.into_inner());
                let transfer = cycle.finish_reloading(weapon, &mut ledger);
                if was_reloading {
                    if let Some(mut hand) = hand {
                        hand.holding_clip = false;
                    }
                }
                let Some(transfer) = transfer else {
                    continue;
                };
                let Some(weapon_entity) = weapon_entity else {
                    continue;
                };

                crate::log(&format!(
                    "🔄 {:?}: reload finished, +{} ({:?}), carried {}",
                    notify.shooter, transfer.loaded, transfer.ammo_type, transfer.carried_left
                ));
                reload_events.write(ReloadFinished {
                    shooter: notify.shooter,
                    weapon: weapon_entity,
                    ammo_type: transfer.ammo_type,
                    loaded: transfer.loaded,
                    carried_left: transfer.carried_left,
                });
            }
            AnimNotifyKind::GrabClip => {
                let (weapon, clip_bone) = match weapon {
                    Some((weapon, clip_bone)) => (Some(weapon.into_inner()), clip_bone),
                    None => (None, None),
                };
                grab_clip(&cycle, weapon, clip_bone, hand.map(Mut::into_inner));
            }
            AnimNotifyKind::ReleaseClip => {
                let weapon = weapon.map(|(weapon, _)| weapon.into_inner());
                release_clip(weapon, hand.map(Mut::into_inner));
            }
        }
    }
}

// ============================================================================
// Timers
// ============================================================================

/// Auto-fire cooldown истёк
pub fn handle_auto_fire_timers(
    mut fired: EventReader<TimerFired>,
    mut shooters: Query<(&mut CombatCycle, &EquippedWeapon, &CarriedAmmo)>,
    mut weapons: Query<&mut Weapon>,
    mut outputs: CombatOutputs,
) {
    for timer in fired.read() {
        if timer.kind != TimerKind::AutoFireReset {
            continue;
        }
        // Owner despawned → пропуск
        let Ok((mut cycle, equipped, ledger)) = shooters.get_mut(timer.owner) else {
            continue;
        };

        let weapon = equipped
            .get()
            .and_then(|entity| weapons.get_mut(entity).ok().map(|weapon| (entity, weapon.into_inner())));

        outputs.transition(timer.owner, |ctx| cycle.on_fire_timer(timer.handle, weapon, ledger, ctx));
    }
}
