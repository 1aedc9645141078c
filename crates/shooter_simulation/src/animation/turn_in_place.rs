//! Turn-in-place: root yaw offset для стоящего персонажа
//!
//! Пока персонаж стоит, поворот тела копится в `root_yaw_offset` (ноги остаются
//! на месте). Анимация поворота ("Turning" > 0) съедает offset через дельту
//! кривой "Rotation". Offset никогда не выходит за ±max.

use bevy::prelude::*;

use crate::shared::normalize_axis;

/// Входы одного tick'а
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TurnInputs {
    /// Горизонтальная скорость
    pub speed: f32,
    pub in_air: bool,
    /// Yaw тела (градусы)
    pub yaw: f32,
    pub aim_pitch: f32,
    /// Кривая "Turning": > 0 пока играет поворот на месте
    pub turning_curve: f32,
    /// Кривая "Rotation": накопленный поворот root motion
    pub rotation_curve: f32,
}

#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct TurnInPlace {
    character_yaw: f32,
    character_yaw_last_frame: f32,
    root_yaw_offset: f32,
    rotation_curve: f32,
    rotation_curve_last_frame: f32,
    pitch: f32,
    turning: bool,
    /// Первый tick только запоминает yaw (иначе spawn с yaw ≠ 0 даёт скачок)
    primed: bool,
}

impl TurnInPlace {
    pub fn root_yaw_offset(&self) -> f32 {
        self.root_yaw_offset
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn is_turning(&self) -> bool {
        self.turning
    }

    pub fn character_yaw(&self) -> f32 {
        self.character_yaw
    }

    pub fn update(&mut self, inputs: TurnInputs, max_offset: f32) {
        self.pitch = inputs.aim_pitch;

        if inputs.speed > 0.0 || inputs.in_air || !self.primed {
            self.reset(inputs.yaw);
            return;
        }

        self.character_yaw_last_frame = self.character_yaw;
        self.character_yaw = inputs.yaw;
        let yaw_delta = self.character_yaw - self.character_yaw_last_frame;

        self.root_yaw_offset = normalize_axis(self.root_yaw_offset - yaw_delta);

        self.turning = inputs.turning_curve > 0.0;
        if self.turning {
            self.rotation_curve = inputs.rotation_curve;
            let delta_rotation = self.rotation_curve - self.rotation_curve_last_frame;

            // offset > 0 → поворот влево, < 0 → вправо
            if self.root_yaw_offset > 0.0 {
                self.root_yaw_offset -= delta_rotation;
            } else {
                self.root_yaw_offset += delta_rotation;
            }

            self.rotation_curve_last_frame = self.rotation_curve;
        }

        // Излишек сверх ±max возвращается назад на каждом tick'е
        let excess = self.root_yaw_offset.abs() - max_offset;
        if excess > 0.0 {
            if self.root_yaw_offset > 0.0 {
                self.root_yaw_offset -= excess;
            } else {
                self.root_yaw_offset += excess;
            }
        }
    }

    /// Движение или прыжок: offset не нужен
    fn reset(&mut self, yaw: f32) {
        self.root_yaw_offset = 0.0;
        self.character_yaw = yaw;
        self.character_yaw_last_frame = yaw;
        self.rotation_curve = 0.0;
        self.rotation_curve_last_frame = 0.0;
        self.turning = false;
        self.primed = true;
    }
}
