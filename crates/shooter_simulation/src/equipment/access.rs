//! EquipmentAccess — equip/drop операции над миром
//!
//! Один SystemParam на все системы equipment domain: auto pickup, drop,
//! select и spawn стартового оружия идут через одни и те же `equip` /
//! `drop_equipped`, поэтому переходы Item state всегда одинаковые.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::components::EquippedWeapon;
use super::events::{WeaponDropped, WeaponEquipped};
use crate::combat::Weapon;
use crate::components::Attachment;
use crate::config::ShooterConfig;
use crate::item_system::{compute_throw, throw_impulse, Item, ItemState, ItemTrace, ThrowState};
use crate::schedules::{Scheduler, TimerKind};
use crate::DeterministicRng;

#[derive(SystemParam)]
pub struct EquipmentAccess<'w, 's> {
    commands: Commands<'w, 's>,
    weapons: Query<
        'w,
        's,
        (
            &'static mut Item,
            &'static mut ThrowState,
            &'static mut Transform,
            &'static mut Weapon,
        ),
    >,
    traces: Query<'w, 's, &'static mut ItemTrace>,
    scheduler: ResMut<'w, Scheduler>,
    rng: ResMut<'w, DeterministicRng>,
    config: Res<'w, ShooterConfig>,
    equipped_events: EventWriter<'w, WeaponEquipped>,
    dropped_events: EventWriter<'w, WeaponDropped>,
}

impl EquipmentAccess<'_, '_> {
    /// Можно ли экипировать: это оружие и оно ни у кого не в руках
    pub fn is_equippable(&self, entity: Entity) -> bool {
        self.weapons
            .get(entity)
            .is_ok_and(|(item, ..)| item.state() != ItemState::Equipped)
    }

    /// Предмет под crosshair (если trace включён)
    pub fn trace_hit_item(&self, shooter: Entity) -> Option<Entity> {
        self.traces.get(shooter).ok()?.trace_hit_item()
    }

    /// Equip: attach к RightHandSocket, → Equipped, слот = weapon.
    ///
    /// Слот должен быть пуст (swap сначала делает drop).
    pub fn equip(&mut self, shooter: Entity, slot: &mut EquippedWeapon, weapon: Entity) -> bool {
        if slot.0.is_some() {
            return false;
        }
        let Ok((mut item, mut throw, ..)) = self.weapons.get_mut(weapon) else {
            return false;
        };
        if item.state() == ItemState::Equipped {
            return false;
        }

        // Volumes сейчас отключатся и OverlapEnd может не прийти: снимаем предмет со счётчика сами
        if item.state() == ItemState::Pickup {
            if let Ok(mut trace) = self.traces.get_mut(shooter) {
                trace.add_overlapped_item_count(-1);
            }
        }

        if let Some(settle) = throw.settle_timer.take() {
            self.scheduler.cancel(settle);
        }
        throw.falling = false;

        item.set_state(ItemState::Equipped);
        slot.0 = Some(weapon);

        if let Ok(mut entity) = self.commands.get_entity(weapon) {
            entity.insert(Attachment::weapon(shooter));
        }

        crate::log(&format!("✅ {:?}: equipped '{}' ({:?})", shooter, item.name(), weapon));
        self.equipped_events.write(WeaponEquipped { shooter, weapon });
        true
    }

    /// Drop: detach (world transform сохраняется), → Falling + бросок, слот пуст.
    ///
    /// Возвращает брошенное оружие. Пустой слот — no-op.
    pub fn drop_equipped(&mut self, shooter: Entity, slot: &mut EquippedWeapon) -> Option<Entity> {
        let weapon = slot.0.take()?;

        let Ok((mut item, mut throw, mut transform, mut weapon_state)) = self.weapons.get_mut(weapon) else {
            // Оружие despawned — слот просто очищаем
            return None;
        };

        let (rotation, impulse) = compute_throw(&transform, &self.config.throw, &mut self.rng);
        transform.rotation = rotation;

        // Брошенное посреди reload оружие не держит магазин в руке
        weapon_state.set_moving_clip(false);

        item.set_state(ItemState::Falling);
        throw.falling = true;
        if let Some(previous) = throw.settle_timer.take() {
            self.scheduler.cancel(previous);
        }
        throw.settle_timer = Some(self.scheduler.schedule_once(
            weapon,
            TimerKind::WeaponSettle,
            self.config.throw.settle_time,
        ));

        if let Ok(mut entity) = self.commands.get_entity(weapon) {
            entity.remove::<Attachment>().insert(throw_impulse(impulse));
        }

        crate::log(&format!("🗑️ {:?}: dropped '{}' ({:?})", shooter, item.name(), weapon));
        self.dropped_events.write(WeaponDropped {
            shooter,
            weapon,
            impulse,
        });
        Some(weapon)
    }
}
