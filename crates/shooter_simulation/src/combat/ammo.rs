//! Carried ammo ledger: патроны персонажа вне магазинов

use bevy::prelude::*;

use super::weapon::AmmoType;
use crate::config::CombatConfig;

/// Ammo type → количество (по записи на каждый известный тип)
///
/// Меняется только при завершении reload.
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct CarriedAmmo {
    nine_mm: u32,
    assault_rifle: u32,
    /// Вставлен как required component Shooter'а: значения возьмутся из config
    pending_config: bool,
}

impl Default for CarriedAmmo {
    fn default() -> Self {
        Self::from_config(&CombatConfig::default())
    }
}

impl CarriedAmmo {
    pub fn new(nine_mm: u32, assault_rifle: u32) -> Self {
        Self {
            nine_mm,
            assault_rifle,
            pending_config: false,
        }
    }

    /// Placeholder до применения `ShooterConfig` (см. `init_spawned_shooters`)
    pub fn pending_config() -> Self {
        Self {
            pending_config: true,
            ..Self::default()
        }
    }

    pub fn is_pending_config(&self) -> bool {
        self.pending_config
    }

    pub fn from_config(config: &CombatConfig) -> Self {
        Self::new(config.starting_9mm_ammo, config.starting_ar_ammo)
    }

    pub fn get(&self, ammo_type: AmmoType) -> u32 {
        match ammo_type {
            AmmoType::NineMm => self.nine_mm,
            AmmoType::AssaultRifle => self.assault_rifle,
        }
    }

    pub fn has(&self, ammo_type: AmmoType) -> bool {
        self.get(ammo_type) > 0
    }

    pub fn set(&mut self, ammo_type: AmmoType, amount: u32) {
        match ammo_type {
            AmmoType::NineMm => self.nine_mm = amount,
            AmmoType::AssaultRifle => self.assault_rifle = amount,
        }
    }

    pub fn total(&self) -> u32 {
        AmmoType::ALL.iter().map(|ammo_type| self.get(*ammo_type)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ledger() {
        let ledger = CarriedAmmo::default();
        assert_eq!(ledger.get(AmmoType::NineMm), 85);
        assert_eq!(ledger.get(AmmoType::AssaultRifle), 120);
        assert_eq!(ledger.total(), 205);
    }

    #[test]
    fn test_only_placeholder_waits_for_config() {
        assert!(CarriedAmmo::pending_config().is_pending_config());
        assert!(!CarriedAmmo::default().is_pending_config());
        assert!(!CarriedAmmo::new(85, 120).is_pending_config());
    }

    #[test]
    fn test_set_only_touches_one_type() {
        let mut ledger = CarriedAmmo::new(5, 7);
        ledger.set(AmmoType::NineMm, 0);

        assert!(!ledger.has(AmmoType::NineMm));
        assert!(ledger.has(AmmoType::AssaultRifle));
        assert_eq!(ledger.get(AmmoType::AssaultRifle), 7);
    }
}
