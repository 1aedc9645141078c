//! Animation properties: то, что анимационный runtime читает каждый tick

use bevy::prelude::*;

use crate::components::MotionSignals;
use crate::shared::{normalized_delta_yaw, yaw_from_direction};

/// Какой aim offset blend space использовать
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum OffsetState {
    Aiming,
    #[default]
    Hip,
    Reloading,
    InAir,
}

impl OffsetState {
    /// Приоритет: Reloading > InAir > Aiming > Hip
    pub fn resolve(reloading: bool, in_air: bool, aiming: bool) -> Self {
        if reloading {
            Self::Reloading
        } else if in_air {
            Self::InAir
        } else if aiming {
            Self::Aiming
        } else {
            Self::Hip
        }
    }
}

/// Флаги персонажа, которые сэмплирует состояние персонажа
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterFlags {
    pub aiming: bool,
    pub reloading: bool,
    pub crouching: bool,
}

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AnimProperties {
    /// Горизонтальная скорость
    pub speed: f32,
    pub in_air: bool,
    pub accelerating: bool,
    /// Направление движения относительно прицела (strafe blend)
    pub movement_offset_yaw: f32,
    /// Последний offset при ненулевой скорости (для jog stop анимаций)
    pub last_movement_offset_yaw: f32,
    pub aiming: bool,
    pub reloading: bool,
    pub crouching: bool,
    pub offset_state: OffsetState,
}

impl AnimProperties {
    pub fn update(&mut self, signals: &MotionSignals, flags: CharacterFlags) {
        self.reloading = flags.reloading;
        self.crouching = flags.crouching;
        self.aiming = flags.aiming;

        self.speed = signals.horizontal_speed();
        self.in_air = signals.in_air;
        self.accelerating = signals.is_accelerating();

        let movement_yaw = yaw_from_direction(signals.velocity);
        self.movement_offset_yaw = normalized_delta_yaw(movement_yaw, signals.aim_yaw);

        if signals.velocity.length_squared() > 0.0 {
            self.last_movement_offset_yaw = self.movement_offset_yaw;
        }

        self.offset_state = OffsetState::resolve(flags.reloading, signals.in_air, flags.aiming);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_state_priority() {
        assert_eq!(OffsetState::resolve(true, true, true), OffsetState::Reloading);
        assert_eq!(OffsetState::resolve(false, true, true), OffsetState::InAir);
        assert_eq!(OffsetState::resolve(false, false, true), OffsetState::Aiming);
        assert_eq!(OffsetState::resolve(false, false, false), OffsetState::Hip);
    }

    #[test]
    fn test_strafe_offset_relative_to_aim() {
        let mut props = AnimProperties::default();

        // Бежим вправо (+X → yaw -90), смотрим вперёд (yaw 0)
        let signals = MotionSignals {
            velocity: Vec3::new(4.0, 0.0, 0.0),
            acceleration: Vec3::new(1.0, 0.0, 0.0),
            ..default()
        };
        props.update(&signals, CharacterFlags::default());

        assert_eq!(props.speed, 4.0);
        assert!(props.accelerating);
        assert!((props.movement_offset_yaw - (-90.0)).abs() < 1e-4);
        assert!((props.last_movement_offset_yaw - (-90.0)).abs() < 1e-4);
    }

    #[test]
    fn test_last_offset_kept_when_stopped() {
        let mut props = AnimProperties::default();
        props.update(
            &MotionSignals {
                velocity: Vec3::new(4.0, 0.0, 0.0),
                ..default()
            },
            CharacterFlags::default(),
        );

        props.update(
            &MotionSignals {
                aim_yaw: 30.0,
                ..default()
            },
            CharacterFlags::default(),
        );

        assert_eq!(props.speed, 0.0);
        assert!((props.movement_offset_yaw - (-30.0)).abs() < 1e-4);
        assert!((props.last_movement_offset_yaw - (-90.0)).abs() < 1e-4);
    }

    #[test]
    fn test_flags_copied() {
        let mut props = AnimProperties::default();
        props.update(
            &MotionSignals::default(),
            CharacterFlags {
                aiming: true,
                reloading: false,
                crouching: true,
            },
        );

        assert!(props.aiming);
        assert!(props.crouching);
        assert_eq!(props.offset_state, OffsetState::Aiming);
    }
}
