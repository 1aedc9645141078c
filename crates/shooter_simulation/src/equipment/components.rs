//! Equipment components: слот оружия, очередь auto pickup, стартовое оружие

use bevy::prelude::*;

use crate::combat::WeaponSpec;

/// Экипированное оружие персонажа (максимум одно)
///
/// Меняется только через `EquipmentAccess::equip` / `drop_equipped`.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct EquippedWeapon(pub(crate) Option<Entity>);

impl EquippedWeapon {
    pub fn get(&self) -> Option<Entity> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

/// Предмет, в pickup volume которого стоит персонаж
///
/// Запоминается при AutoPickupRequested; экипируется после drop, если это оружие.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct PickupQueue {
    pub pending: Option<Entity>,
}

/// Стартовое оружие: спавнится и экипируется при появлении Shooter
#[derive(Component, Debug, Clone, PartialEq)]
pub struct DefaultWeapon(pub WeaponSpec);

impl Default for DefaultWeapon {
    fn default() -> Self {
        Self(WeaponSpec::submachine_gun())
    }
}
