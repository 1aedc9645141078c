//! Weapon: магазин + тип патронов поверх Item

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::item_system::{Item, ThrowState};

/// Тип патронов (ключ carried ammo ledger)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect, Serialize, Deserialize)]
pub enum AmmoType {
    NineMm,
    AssaultRifle,
}

impl AmmoType {
    pub const ALL: [AmmoType; 2] = [AmmoType::NineMm, AmmoType::AssaultRifle];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum WeaponType {
    SubmachineGun,
    AssaultRifle,
    Pistol,
}

/// Оружие (на том же entity что и Item)
///
/// Инвариант: `0 <= ammo <= magazine_capacity`, `magazine_capacity > 0`.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
#[require(Item, ThrowState)]
pub struct Weapon {
    ammo: u32,
    magazine_capacity: u32,
    weapon_type: WeaponType,
    ammo_type: AmmoType,
    /// Секция reload montage для этого оружия
    reload_section: String,
    /// Кость магазина на skeleton оружия
    clip_bone: String,
    /// true только пока рука держит магазин (GrabClip → ReleaseClip)
    moving_clip: bool,
}

impl Weapon {
    pub fn new(spec: &WeaponSpec) -> Self {
        assert!(spec.magazine_capacity > 0, "Weapon magazine capacity must be positive");

        Self {
            ammo: spec.ammo.min(spec.magazine_capacity),
            magazine_capacity: spec.magazine_capacity,
            weapon_type: spec.weapon_type,
            ammo_type: spec.ammo_type,
            reload_section: spec.reload_section.clone(),
            clip_bone: spec.clip_bone.clone(),
            moving_clip: false,
        }
    }

    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    pub fn has_ammo(&self) -> bool {
        self.ammo > 0
    }

    pub fn magazine_capacity(&self) -> u32 {
        self.magazine_capacity
    }

    /// Сколько патронов влезет в магазин
    pub fn magazine_empty_space(&self) -> u32 {
        self.magazine_capacity - self.ammo
    }

    pub fn weapon_type(&self) -> WeaponType {
        self.weapon_type
    }

    pub fn ammo_type(&self) -> AmmoType {
        self.ammo_type
    }

    pub fn reload_section(&self) -> &str {
        &self.reload_section
    }

    pub fn clip_bone(&self) -> &str {
        &self.clip_bone
    }

    pub fn is_moving_clip(&self) -> bool {
        self.moving_clip
    }

    pub fn set_moving_clip(&mut self, moving: bool) {
        self.moving_clip = moving;
    }

    /// Минус патрон; на пустом магазине остаётся 0
    pub fn decrement_ammo(&mut self) {
        self.ammo = self.ammo.saturating_sub(1);
    }

    /// Зарядить `amount` патронов.
    ///
    /// # Panics
    /// Если `ammo + amount > magazine_capacity` (ошибка вызывающего кода).
    pub fn reload_ammo(&mut self, amount: u32) {
        assert!(
            self.ammo + amount <= self.magazine_capacity,
            "Attempted to reload with more than magazine capacity!"
        );
        self.ammo += amount;
    }
}

/// Текущий transform кости магазина (пишет анимационный runtime)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ClipBone {
    pub transform: Transform,
}

/// Описание оружия для spawn (loadout, world placement)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponSpec {
    pub name: String,
    pub weapon_type: WeaponType,
    pub ammo_type: AmmoType,
    pub ammo: u32,
    pub magazine_capacity: u32,
    pub reload_section: String,
    pub clip_bone: String,
}

impl WeaponSpec {
    /// SMG (9mm, 30 патронов)
    pub fn submachine_gun() -> Self {
        Self {
            name: "Submachine Gun".into(),
            weapon_type: WeaponType::SubmachineGun,
            ammo_type: AmmoType::NineMm,
            ammo: 30,
            magazine_capacity: 30,
            reload_section: "Reload SMG".into(),
            clip_bone: "smg_clip".into(),
        }
    }

    /// Assault rifle (AR ammo, 30 патронов)
    pub fn assault_rifle() -> Self {
        Self {
            name: "Assault Rifle".into(),
            weapon_type: WeaponType::AssaultRifle,
            ammo_type: AmmoType::AssaultRifle,
            ammo: 30,
            magazine_capacity: 30,
            reload_section: "Reload AR".into(),
            clip_bone: "ar_clip".into(),
        }
    }

    /// Pistol (9mm, 12 патронов)
    pub fn pistol() -> Self {
        Self {
            name: "Pistol".into(),
            weapon_type: WeaponType::Pistol,
            ammo_type: AmmoType::NineMm,
            ammo: 12,
            magazine_capacity: 12,
            reload_section: "Reload Pistol".into(),
            clip_bone: "pistol_clip".into(),
        }
    }

    pub fn with_ammo(mut self, ammo: u32) -> Self {
        self.ammo = ammo;
        self
    }

    /// Item + Weapon для spawn
    pub fn bundle(&self) -> (Item, Weapon) {
        (Item::new(self.name.clone()), Weapon::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrement_ammo_stops_at_zero() {
        let mut weapon = Weapon::new(&WeaponSpec::pistol().with_ammo(1));

        weapon.decrement_ammo();
        assert_eq!(weapon.ammo(), 0);
        assert!(!weapon.has_ammo());

        weapon.decrement_ammo();
        assert_eq!(weapon.ammo(), 0);
    }

    #[test]
    fn test_reload_to_full() {
        let mut weapon = Weapon::new(&WeaponSpec::submachine_gun().with_ammo(10));
        assert_eq!(weapon.magazine_empty_space(), 20);

        weapon.reload_ammo(20);
        assert_eq!(weapon.ammo(), 30);
    }

    #[test]
    #[should_panic(expected = "Attempted to reload with more than magazine capacity!")]
    fn test_reload_overflow_panics() {
        let mut weapon = Weapon::new(&WeaponSpec::assault_rifle().with_ammo(25));
        weapon.reload_ammo(6);
    }

    #[test]
    fn test_spec_ammo_clamped_to_capacity() {
        let weapon = Weapon::new(&WeaponSpec::pistol().with_ammo(99));
        assert_eq!(weapon.ammo(), 12);
    }

    #[test]
    fn test_presets_use_matching_ammo() {
        assert_eq!(WeaponSpec::submachine_gun().ammo_type, AmmoType::NineMm);
        assert_eq!(WeaponSpec::assault_rifle().ammo_type, AmmoType::AssaultRifle);
        assert_eq!(WeaponSpec::pistol().ammo_type, AmmoType::NineMm);
    }
}
