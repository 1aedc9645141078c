//! Combat events: input intents, animation notifies, FX/montage outputs

use bevy::prelude::*;

use super::weapon::AmmoType;

/// Hip fire montage секция, с которой начинается выстрел
pub const HIP_FIRE_SECTION: &str = "StartFire";

/// Intent: кнопка огня нажата/отпущена
///
/// Нажатие сразу пытается выстрелить; удержание проверяется по истечении cooldown.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireButtonIntent {
    pub shooter: Entity,
    pub pressed: bool,
}

/// Intent: игрок хочет перезарядиться
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadIntent {
    pub shooter: Entity,
}

/// Notify из анимационного runtime (reload montage)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimNotifyKind {
    /// Конец reload montage → перекладываем патроны
    FinishReloading,
    /// Левая рука берёт магазин
    GrabClip,
    /// Магазин вставлен обратно
    ReleaseClip,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimNotify {
    pub shooter: Entity,
    pub kind: AnimNotifyKind,
}

/// Какой montage проигрывать
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Montage {
    HipFire,
    Reload,
}

/// Event: проиграть montage с секции (для анимационного runtime)
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct MontageRequest {
    pub shooter: Entity,
    pub montage: Montage,
    pub section: String,
}

/// Event: выстрел произошёл (fire sound, muzzle flash, beam, impact)
///
/// `beam_end` — точка попадания crosshair trace, либо конец aim ray.
/// `None` только если у персонажа нет AimRay.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct WeaponFired {
    pub shooter: Entity,
    pub weapon: Entity,
    pub beam_end: Option<Vec3>,
    /// Было ли блокирующее попадание (спавнить impact FX)
    pub hit: bool,
    /// Во что попали (если попали)
    pub hit_entity: Option<Entity>,
    pub ammo_left: u32,
}

/// Event: reload завершён, патроны переложены из ledger в магазин
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadFinished {
    pub shooter: Entity,
    pub weapon: Entity,
    pub ammo_type: AmmoType,
    pub loaded: u32,
    pub carried_left: u32,
}
