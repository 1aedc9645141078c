//! Equipment system implementations
//!
//! # Systems (ShooterSet::Equipment, по порядку)
//!
//! - `init_spawned_shooters` — ledger/zoom из config, стартовое оружие
//! - `forget_left_pickups` — вышли из pickup volume → очередь пуста
//! - `process_auto_pickups` — AutoPickupRequested → очередь / equip
//! - `process_drop_intents` — drop, затем оружие из очереди
//! - `process_select_intents` — swap на trace hit оружие

use bevy::prelude::*;

use super::access::EquipmentAccess;
use super::components::{DefaultWeapon, EquippedWeapon, PickupQueue};
use super::events::{DropWeaponIntent, SelectItemIntent, WeaponEquipped};
use crate::combat::CarriedAmmo;
use crate::components::{Attachment, Shooter};
use crate::config::ShooterConfig;
use crate::item_system::{
    spawn_world_item, AutoPickupRequested, ItemShape, ItemState, OverlapEnd, VolumeKind,
};
use crate::shooting::CameraZoom;

// ============================================================================
// Spawn
// ============================================================================

/// Новый Shooter: значения из config + стартовое оружие сразу в руке
///
/// Ledger и zoom перезаписываются только если их не задали при spawn
/// (остался placeholder из required components).
pub fn init_spawned_shooters(
    mut commands: Commands,
    config: Res<ShooterConfig>,
    mut shooters: Query<
        (
            Entity,
            &mut CarriedAmmo,
            &mut CameraZoom,
            &mut EquippedWeapon,
            Option<&DefaultWeapon>,
            &Transform,
        ),
        Added<Shooter>,
    >,
    mut equipped_events: EventWriter<WeaponEquipped>,
) {
    for (shooter, mut ledger, mut zoom, mut slot, default_weapon, transform) in shooters.iter_mut() {
        if ledger.is_pending_config() {
            *ledger = CarriedAmmo::from_config(&config.combat);
        }
        if zoom.is_pending_config() {
            *zoom = CameraZoom::from_config(&config.camera);
        }

        let Some(DefaultWeapon(spec)) = default_weapon else {
            continue;
        };
        if slot.get().is_some() {
            continue;
        }

        let (mut item, weapon) = spec.bundle();
        item.set_state(ItemState::Equipped);

        let weapon_entity = spawn_world_item(
            &mut commands,
            (item, weapon, Attachment::weapon(shooter)),
            *transform,
            ItemShape::default(),
        );
        slot.0 = Some(weapon_entity);

        crate::log(&format!(
            "✅ {:?}: spawned default weapon '{}' ({:?})",
            shooter, spec.name, weapon_entity
        ));
        equipped_events.write(WeaponEquipped {
            shooter,
            weapon: weapon_entity,
        });
    }
}

// ============================================================================
// Auto pickup
// ============================================================================

/// Вышли из pickup volume запомненного предмета → забыть его
pub fn forget_left_pickups(mut overlaps: EventReader<OverlapEnd>, mut queues: Query<&mut PickupQueue>) {
    for overlap in overlaps.read() {
        if overlap.volume != VolumeKind::Pickup {
            continue;
        }
        let Ok(mut queue) = queues.get_mut(overlap.other) else {
            continue;
        };
        if queue.pending == Some(overlap.item) {
            queue.pending = None;
        }
    }
}

/// AutoPickupRequested → запомнить предмет; без оружия в руках — сразу equip
pub fn process_auto_pickups(
    mut requests: EventReader<AutoPickupRequested>,
    mut shooters: Query<(&mut EquippedWeapon, &mut PickupQueue)>,
    mut access: EquipmentAccess,
) {
    for request in requests.read() {
        let Ok((mut slot, mut queue)) = shooters.get_mut(request.shooter) else {
            continue;
        };

        queue.pending = Some(request.item);

        if slot.get().is_none() && access.is_equippable(request.item) {
            queue.pending = None;
            access.equip(request.shooter, &mut slot, request.item);
        }
    }
}

// ============================================================================
// Drop / Select
// ============================================================================

/// Drop: бросить оружие, затем взять оружие из очереди (если есть)
pub fn process_drop_intents(
    mut intents: EventReader<DropWeaponIntent>,
    mut shooters: Query<(&mut EquippedWeapon, &mut PickupQueue)>,
    mut access: EquipmentAccess,
) {
    for intent in intents.read() {
        let Ok((mut slot, mut queue)) = shooters.get_mut(intent.shooter) else {
            continue;
        };

        if access.drop_equipped(intent.shooter, &mut slot).is_none() {
            continue; // Нечего бросать
        }

        if let Some(pending) = queue.pending {
            if access.is_equippable(pending) {
                queue.pending = None;
                access.equip(intent.shooter, &mut slot, pending);
            }
        }
    }
}

/// Select: swap на оружие под прицелом
///
/// Swap = drop (без оружия из очереди) + equip цели. Не-оружие игнорируется.
pub fn process_select_intents(
    mut intents: EventReader<SelectItemIntent>,
    mut shooters: Query<(&mut EquippedWeapon, &mut PickupQueue)>,
    mut access: EquipmentAccess,
) {
    for intent in intents.read() {
        let Ok((mut slot, mut queue)) = shooters.get_mut(intent.shooter) else {
            continue;
        };
        let Some(target) = access.trace_hit_item(intent.shooter) else {
            continue;
        };
        if !access.is_equippable(target) {
            continue;
        }

        access.drop_equipped(intent.shooter, &mut slot);
        if queue.pending == Some(target) {
            queue.pending = None;
        }
        access.equip(intent.shooter, &mut slot, target);
    }
}
