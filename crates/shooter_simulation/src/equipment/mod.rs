//! Equipment module — владение оружием
//!
//! # Architecture
//!
//! **Events → Systems flow:**
//! - Input слой шлёт intents (drop, select), item system — AutoPickupRequested
//! - Системы меняют `EquippedWeapon` / `PickupQueue` через `EquipmentAccess`
//! - Item state (Equipped/Falling) → physics sync в ShooterSet::PhysicsSync
//!
//! **Weapon lifecycle:**
//! - Equip → Attachment (RightHandSocket) + Item → Equipped
//! - Drop → detach + Item → Falling + throw impulse + settle timer
//! - Swap → Drop + Equip(target)

use bevy::prelude::*;

pub mod access;
pub mod components;
pub mod events;
pub mod systems;

// Re-exports
pub use access::EquipmentAccess;
pub use components::*;
pub use events::*;
pub use systems::*;

use crate::schedules::ShooterSet;

/// Equipment plugin
pub struct EquipmentPlugin;

impl Plugin for EquipmentPlugin {
    fn build(&self, app: &mut App) {
        app
            // Events
            .add_event::<DropWeaponIntent>()
            .add_event::<SelectItemIntent>()
            .add_event::<WeaponEquipped>()
            .add_event::<WeaponDropped>()
            .add_systems(
                FixedUpdate,
                (
                    init_spawned_shooters,
                    forget_left_pickups,
                    process_auto_pickups,
                    process_drop_intents,
                    process_select_intents,
                )
                    .chain()
                    .in_set(ShooterSet::Equipment),
            );
    }
}
