//! Equipment events
//!
//! # Flow
//!
//! **Intents** (input слой):
//! - `DropWeaponIntent` → бросить текущее оружие, затем подобрать оружие из PickupQueue
//! - `SelectItemIntent` → swap на оружие под прицелом (trace hit item)
//!
//! **Outputs** (FX/UI/анимация):
//! - `WeaponEquipped` — оружие в руке (equip sound, HUD)
//! - `WeaponDropped` — оружие брошено (impulse уже посчитан)

use bevy::prelude::*;

/// Кнопка "бросить оружие"
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropWeaponIntent {
    pub shooter: Entity,
}

/// Кнопка "взять" (select): swap на предмет под crosshair
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectItemIntent {
    pub shooter: Entity,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponEquipped {
    pub shooter: Entity,
    pub weapon: Entity,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct WeaponDropped {
    pub shooter: Entity,
    pub weapon: Entity,
    /// Импульс броска (world space)
    pub impulse: Vec3,
}
