//! Базовые компоненты персонажа: Shooter + входные сигналы от движка

use bevy::prelude::*;

use crate::animation::{AnimProperties, Lean, TurnInPlace};
use crate::combat::{CarriedAmmo, CombatCycle};
use crate::equipment::{EquippedWeapon, PickupQueue};
use crate::item_system::ItemTrace;
use crate::movement::Crouch;
use crate::shooting::{Aiming, CameraZoom, CrosshairSpread, LookRates};

/// Shooter — персонаж, который подбирает предметы и стреляет
///
/// Всё состояние interaction/combat слоя добавляется через Required Components.
/// Значения из `ShooterConfig` применяются при spawn (`init_spawned_shooters`)
/// только к ledger/zoom, которые не задали явно.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(
    Transform,
    MotionSignals,
    CrosshairHit,
    AnimCurves,
    CombatCycle,
    CarriedAmmo = CarriedAmmo::pending_config(),
    EquippedWeapon,
    PickupQueue,
    ItemTrace,
    Aiming,
    CrosshairSpread,
    CameraZoom = CameraZoom::pending_config(),
    LookRates,
    Crouch,
    AnimProperties,
    TurnInPlace,
    Lean
)]
pub struct Shooter;

/// Сигналы движения, которые движок пишет каждый tick
///
/// Углы в градусах. `velocity` — world space, Y вверх.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MotionSignals {
    pub velocity: Vec3,
    pub in_air: bool,
    /// Есть ли ненулевой movement input
    pub moving_input: bool,
    /// Текущее ускорение movement компонента
    pub acceleration: Vec3,
    /// Yaw тела персонажа (actor rotation)
    pub yaw: f32,
    /// Yaw/pitch направления прицела (control rotation)
    pub aim_yaw: f32,
    pub aim_pitch: f32,
}

impl MotionSignals {
    /// Горизонтальная скорость (Y игнорируется)
    pub fn horizontal_speed(&self) -> f32 {
        Vec2::new(self.velocity.x, self.velocity.z).length()
    }

    pub fn is_accelerating(&self) -> bool {
        self.acceleration.length_squared() > 0.0
    }
}

/// Луч из центра экрана (deproject crosshair), world space
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AimRay {
    pub origin: Vec3,
    /// Нормализованное направление
    pub direction: Vec3,
}

impl AimRay {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

/// Блокирующее попадание ray cast'а
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct RayHit {
    pub location: Vec3,
    /// Entity в которую попали (item уже разрешён из его volume)
    pub entity: Entity,
}

/// Результат crosshair trace за текущий tick (пишет physics адаптер)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CrosshairHit(pub Option<RayHit>);

/// Именованные curve samples анимационного runtime ("Turning", "Rotation")
///
/// Отсутствующая кривая = 0.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct AnimCurves {
    samples: Vec<(String, f32)>,
}

impl AnimCurves {
    pub const TURNING: &'static str = "Turning";
    pub const ROTATION: &'static str = "Rotation";

    pub fn get(&self, name: &str) -> f32 {
        self.samples
            .iter()
            .find(|(curve, _)| curve == name)
            .map(|(_, value)| *value)
            .unwrap_or(0.0)
    }

    pub fn set(&mut self, name: &str, value: f32) {
        match self.samples.iter_mut().find(|(curve, _)| curve == name) {
            Some((_, sample)) => *sample = value,
            None => self.samples.push((name.to_string(), value)),
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

/// Left-hand anchor (socket "Hand_L"), к которому цепляется магазин при reload
///
/// Опциональный: без него GrabClip пропускается.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct HandAnchor {
    /// Transform магазина в момент захвата
    pub clip_transform: Transform,
    pub holding_clip: bool,
}

impl Default for HandAnchor {
    fn default() -> Self {
        Self {
            clip_transform: Transform::IDENTITY,
            holding_clip: false,
        }
    }
}

impl HandAnchor {
    pub const SOCKET: &'static str = "Hand_L";
}
