//! Crouch state + производные параметры movement компонента

use bevy::prelude::*;

use crate::config::MovementConfig;

/// Присед персонажа
///
/// Сам movement компонент живёт в движке: он читает `max_walk_speed`,
/// `ground_friction` и `capsule_half_height` после каждого toggle.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Crouch {
    crouching: bool,
}

impl Crouch {
    pub fn is_crouching(&self) -> bool {
        self.crouching
    }

    /// Toggle только на земле. Возвращает true если состояние изменилось.
    pub fn toggle(&mut self, in_air: bool) -> bool {
        if in_air {
            return false;
        }
        self.crouching = !self.crouching;
        true
    }

    /// m/s
    pub fn max_walk_speed(&self, config: &MovementConfig) -> f32 {
        if self.crouching {
            config.crouch_movement_speed
        } else {
            config.base_movement_speed
        }
    }

    pub fn ground_friction(&self, config: &MovementConfig) -> f32 {
        if self.crouching {
            config.crouching_ground_friction
        } else {
            config.base_ground_friction
        }
    }

    /// Целевая половина высоты капсулы (m)
    pub fn capsule_half_height(&self, config: &MovementConfig) -> f32 {
        if self.crouching {
            config.crouching_capsule_half_height
        } else {
            config.standing_capsule_half_height
        }
    }
}
