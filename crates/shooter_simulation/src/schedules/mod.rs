//! System sets и one-shot таймеры симуляции
//!
//! # Архитектура
//!
//! **FixedUpdate (60 Hz)**, sets выполняются строго по порядку:
//!   ├─ Overlaps   — OverlapBegin/End → item state + nearby counter
//!   ├─ Equipment  — spawn loadout, auto pickup, drop, select
//!   ├─ Intents    — aim/crouch toggle, fire button, reload, anim notifies
//!   ├─ Timers     — Scheduler advance → TimerFired handlers
//!   ├─ Tick       — camera zoom, look rates, crosshair spread, item trace
//!   ├─ Animation  — anim properties, turn-in-place, lean
//!   └─ PhysicsSync — interaction profiles → rapier components
//!
//! # Таймеры
//!
//! `Scheduler` — детерминистичная замена engine timer manager:
//! - `schedule_once(owner, kind, delay)` → `TimerHandle`
//! - `cancel(handle)` / `cancel_owner(entity)`
//! - сработавшие таймеры превращаются в `TimerFired` events
//!
//! Владелец хранит `Option<TimerHandle>` и игнорирует срабатывание чужого
//! (устаревшего) handle.

use bevy::prelude::*;

pub mod timer_systems;


pub use timer_systems::{advance_scheduler, prune_despawned_timer_owners};

/// Порядок фаз внутри FixedUpdate
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShooterSet {
    Overlaps,
    Equipment,
    Intents,
    Timers,
    Tick,
    Animation,
    PhysicsSync,
}

/// Остаток времени, ниже которого таймер считается истёкшим
///
/// f32 накопление 1/60 не даёт ровно 0 (0.1 - 6 * 1/60 ≈ 1e-8).
const TIMER_EPSILON: f32 = 1.0e-5;

/// Handle one-shot таймера (монотонный id, никогда не переиспользуется)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Назначение таймера (кто обрабатывает TimerFired)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum TimerKind {
    /// Cooldown между выстрелами (owner = character)
    AutoFireReset,
    /// Окно "только что выстрелил" для crosshair (owner = character)
    CrosshairShotWindow,
    /// Брошенное оружие успокоилось (owner = item)
    WeaponSettle,
}

/// Event: таймер истёк
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TimerFired {
    pub handle: TimerHandle,
    pub owner: Entity,
    pub kind: TimerKind,
}

#[derive(Debug, Clone)]
struct PendingTimer {
    handle: TimerHandle,
    owner: Entity,
    kind: TimerKind,
    remaining: f32,
}

/// Активные one-shot таймеры (Resource)
#[derive(Resource, Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    pending: Vec<PendingTimer>,
}

impl Scheduler {
    /// Запланировать таймер. `delay <= 0` срабатывает на ближайшем advance.
    pub fn schedule_once(&mut self, owner: Entity, kind: TimerKind, delay: f32) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);

        self.pending.push(PendingTimer {
            handle,
            owner,
            kind,
            remaining: delay.max(0.0),
        });

        handle
    }

    /// Отменить таймер. Возвращает false если он уже сработал/отменён.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.handle != handle);
        self.pending.len() != before
    }

    /// Отменить все таймеры владельца (despawn)
    pub fn cancel_owner(&mut self, owner: Entity) -> usize {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.owner != owner);
        before - self.pending.len()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|timer| timer.handle == handle)
    }

    /// Оставшееся время таймера (None если неактивен)
    pub fn remaining(&self, handle: TimerHandle) -> Option<f32> {
        self.pending
            .iter()
            .find(|timer| timer.handle == handle)
            .map(|timer| timer.remaining)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Продвинуть время на `delta`, вернуть истёкшие таймеры.
    ///
    /// Порядок: раньше истёкший первым, при равенстве — раньше запланированный.
    pub fn advance(&mut self, delta: f32) -> Vec<TimerFired> {
        let mut expired = Vec::new();

        self.pending.retain_mut(|timer| {
            timer.remaining -= delta;
            if timer.remaining <= TIMER_EPSILON {
                expired.push(timer.clone());
                false
            } else {
                true
            }
        });

        expired.sort_by(|a, b| {
            a.remaining
                .total_cmp(&b.remaining)
                .then(a.handle.cmp(&b.handle))
        });

        expired
            .into_iter()
            .map(|timer| TimerFired {
                handle: timer.handle,
                owner: timer.owner,
                kind: timer.kind,
            })
            .collect()
    }
}
