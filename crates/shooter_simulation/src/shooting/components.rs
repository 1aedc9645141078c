//! Aiming + look rates
//!
//! Flow:
//! 1. Игрок жмёт aim → ToggleAimIntent event
//! 2. process_toggle_aim: старт только с экипированным оружием, повтор — выход
//! 3. Camera zoom / crosshair / look rates читают `Aiming`

use bevy::prelude::*;

use crate::config::LookConfig;

/// Прицеливается ли персонаж
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Aiming {
    aiming: bool,
}

impl Aiming {
    pub fn is_aiming(&self) -> bool {
        self.aiming
    }

    /// Toggle: начать можно только с оружием, закончить — всегда
    ///
    /// Возвращает новое значение.
    pub fn toggle(&mut self, has_weapon: bool) -> bool {
        if self.aiming {
            self.aiming = false;
        } else if has_weapon {
            self.aiming = true;
        }
        self.aiming
    }
}

/// Event: Toggle aim (кнопка прицеливания)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleAimIntent {
    pub shooter: Entity,
}

/// Скорости поворота камеры (gamepad, deg/sec) + множители мыши
///
/// Пересчитываются каждый tick от `Aiming`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct LookRates {
    pub turn_rate: f32,
    pub look_up_rate: f32,
    pub mouse_turn_scale: f32,
    pub mouse_look_up_scale: f32,
}

impl Default for LookRates {
    fn default() -> Self {
        Self::hip(&LookConfig::default())
    }
}

impl LookRates {
    pub fn hip(config: &LookConfig) -> Self {
        Self {
            turn_rate: config.hip_turn_rate,
            look_up_rate: config.hip_look_up_rate,
            mouse_turn_scale: config.mouse_hip_turn_rate,
            mouse_look_up_scale: config.mouse_hip_look_up_rate,
        }
    }

    pub fn aiming(config: &LookConfig) -> Self {
        Self {
            turn_rate: config.aiming_turn_rate,
            look_up_rate: config.aiming_look_up_rate,
            mouse_turn_scale: config.mouse_aiming_turn_rate,
            mouse_look_up_scale: config.mouse_aiming_look_up_rate,
        }
    }

    pub fn for_aiming(aiming: bool, config: &LookConfig) -> Self {
        if aiming {
            Self::aiming(config)
        } else {
            Self::hip(config)
        }
    }

    /// Yaw delta (deg) от gamepad оси [-1, 1] за `dt`
    pub fn turn_at_rate(&self, axis: f32, dt: f32) -> f32 {
        axis * self.turn_rate * dt
    }

    /// Pitch delta (deg) от gamepad оси [-1, 1] за `dt`
    pub fn look_up_at_rate(&self, axis: f32, dt: f32) -> f32 {
        axis * self.look_up_rate * dt
    }

    /// Yaw input от мыши (масштабирован)
    pub fn mouse_turn(&self, value: f32) -> f32 {
        value * self.mouse_turn_scale
    }

    pub fn mouse_look_up(&self, value: f32) -> f32 {
        value * self.mouse_look_up_scale
    }
}
