//! Combat cycle: fire → cooldown → (refire | reload) → Unoccupied
//!
//! Чистая логика без ECS queries: системы собирают `CombatCtx`, вызывают
//! методы `CombatCycle`, потом превращают накопленные `CombatCue` в events.

use bevy::prelude::*;

use super::ammo::CarriedAmmo;
use super::events::{Montage, HIP_FIRE_SECTION};
use super::weapon::{AmmoType, ClipBone, Weapon};
use crate::components::HandAnchor;
use crate::schedules::{Scheduler, TimerHandle, TimerKind};

/// Состояние боевого цикла персонажа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum CombatState {
    #[default]
    Unoccupied,
    /// Cooldown после выстрела
    FireTimerInProgress,
    /// Играет reload montage, ждём FinishReloading
    Reloading,
}

/// Побочный эффект перехода, который система превратит в event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatCue {
    /// Выстрел: beam/FX + crosshair shot window
    Fired { weapon: Entity, ammo_left: u32 },
    PlayMontage { montage: Montage, section: String },
}

/// Контекст одного перехода: владелец, таймеры, накопленные cues
pub struct CombatCtx<'a> {
    pub owner: Entity,
    pub scheduler: &'a mut Scheduler,
    pub auto_fire_period: f32,
    pub cues: Vec<CombatCue>,
}

impl<'a> CombatCtx<'a> {
    pub fn new(owner: Entity, scheduler: &'a mut Scheduler, auto_fire_period: f32) -> Self {
        Self {
            owner,
            scheduler,
            auto_fire_period,
            cues: Vec::new(),
        }
    }
}

/// Результат завершённого reload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadTransfer {
    pub ammo_type: AmmoType,
    pub loaded: u32,
    pub carried_left: u32,
}

/// Боевой цикл персонажа
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct CombatCycle {
    state: CombatState,
    fire_button_held: bool,
    fire_timer: Option<TimerHandle>,
}

impl CombatCycle {
    pub fn state(&self) -> CombatState {
        self.state
    }

    pub fn fire_button_held(&self) -> bool {
        self.fire_button_held
    }

    pub fn fire_timer(&self) -> Option<TimerHandle> {
        self.fire_timer
    }

    /// Кнопка огня нажата: запомнить удержание и попытаться выстрелить
    pub fn press_fire(&mut self, weapon: Option<(Entity, &mut Weapon)>, ctx: &mut CombatCtx) -> bool {
        self.fire_button_held = true;
        self.fire_weapon(weapon, ctx)
    }

    pub fn release_fire(&mut self) {
        self.fire_button_held = false;
    }

    /// Выстрел: только Unoccupied + есть оружие с патронами
    pub fn fire_weapon(&mut self, weapon: Option<(Entity, &mut Weapon)>, ctx: &mut CombatCtx) -> bool {
        let Some((weapon_entity, weapon)) = weapon else {
            return false;
        };
        if self.state != CombatState::Unoccupied || !weapon.has_ammo() {
            return false;
        }

        weapon.decrement_ammo();
        ctx.cues.push(CombatCue::Fired {
            weapon: weapon_entity,
            ammo_left: weapon.ammo(),
        });
        ctx.cues.push(CombatCue::PlayMontage {
            montage: Montage::HipFire,
            section: HIP_FIRE_SECTION.to_string(),
        });

        self.start_fire_timer(ctx);
        true
    }

    fn start_fire_timer(&mut self, ctx: &mut CombatCtx) {
        self.state = CombatState::FireTimerInProgress;

        if let Some(previous) = self.fire_timer.take() {
            ctx.scheduler.cancel(previous);
        }
        self.fire_timer = Some(ctx.scheduler.schedule_once(
            ctx.owner,
            TimerKind::AutoFireReset,
            ctx.auto_fire_period,
        ));
    }

    /// Cooldown истёк: → Unoccupied, затем refire (если держат) или reload (если пусто).
    ///
    /// Возвращает false для устаревшего handle (ничего не меняется).
    pub fn on_fire_timer(
        &mut self,
        handle: TimerHandle,
        weapon: Option<(Entity, &mut Weapon)>,
        ledger: &CarriedAmmo,
        ctx: &mut CombatCtx,
    ) -> bool {
        if self.fire_timer != Some(handle) {
            return false;
        }
        self.fire_timer = None;
        self.state = CombatState::Unoccupied;

        let has_ammo = weapon.as_ref().is_some_and(|(_, weapon)| weapon.has_ammo());
        if has_ammo {
            if self.fire_button_held {
                self.fire_weapon(weapon, ctx);
            }
        } else {
            self.reload_weapon(weapon.map(|(entity, weapon)| (entity, &*weapon)), ledger, ctx);
        }

        true
    }

    /// Запрос reload: только Unoccupied + есть оружие + ledger[ammo_type] > 0
    pub fn reload_weapon(
        &mut self,
        weapon: Option<(Entity, &Weapon)>,
        ledger: &CarriedAmmo,
        ctx: &mut CombatCtx,
    ) -> bool {
        if self.state != CombatState::Unoccupied {
            return false;
        }
        let Some((_, weapon)) = weapon else {
            return false;
        };
        if !ledger.has(weapon.ammo_type()) {
            return false;
        }

        self.state = CombatState::Reloading;
        ctx.cues.push(CombatCue::PlayMontage {
            montage: Montage::Reload,
            section: weapon.reload_section().to_string(),
        });
        true
    }

    /// FinishReloading notify: переложить `min(empty space, carried)` в магазин.
    ///
    /// Вне Reloading — игнорируется (None). Без оружия — только → Unoccupied.
    /// Магазин после reload всегда на месте: `moving_clip` сбрасывается.
    pub fn finish_reloading(&mut self, weapon: Option<&mut Weapon>, ledger: &mut CarriedAmmo) -> Option<ReloadTransfer> {
        if self.state != CombatState::Reloading {
            return None;
        }
        self.state = CombatState::Unoccupied;

        let weapon = weapon?;
        // ReleaseClip мог не прийти (montage прервали)
        weapon.set_moving_clip(false);
        let ammo_type = weapon.ammo_type();
        let carried = ledger.get(ammo_type);

        let loaded = weapon.magazine_empty_space().min(carried);
        weapon.reload_ammo(loaded);
        ledger.set(ammo_type, carried - loaded);

        Some(ReloadTransfer {
            ammo_type,
            loaded,
            carried_left: carried - loaded,
        })
    }
}

/// GrabClip: рука берёт магазин (только во время Reloading)
///
/// Без оружия или без hand anchor — пропуск. Transform кости магазина
/// берётся из `ClipBone`, если runtime его выставил.
pub fn grab_clip(
    cycle: &CombatCycle,
    weapon: Option<&mut Weapon>,
    clip_bone: Option<&ClipBone>,
    hand: Option<&mut HandAnchor>,
) -> bool {
    if cycle.state() != CombatState::Reloading {
        return false;
    }
    let (Some(weapon), Some(hand)) = (weapon, hand) else {
        return false;
    };

    if let Some(clip_bone) = clip_bone {
        hand.clip_transform = clip_bone.transform;
    }
    hand.holding_clip = true;
    weapon.set_moving_clip(true);
    true
}

/// ReleaseClip: магазин вставлен
pub fn release_clip(weapon: Option<&mut Weapon>, hand: Option<&mut HandAnchor>) {
    if let Some(weapon) = weapon {
        weapon.set_moving_clip(false);
    }
    if let Some(hand) = hand {
        hand.holding_clip = false;
    }
}
