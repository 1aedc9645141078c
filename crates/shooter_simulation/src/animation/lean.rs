//! Lean: наклон корпуса от скорости поворота (deg/sec), сглаженный

use bevy::prelude::*;

use crate::shared::{finterp_to, normalized_delta_yaw};

#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Lean {
    character_yaw: f32,
    character_yaw_last_frame: f32,
    lean_yaw_delta: f32,
    primed: bool,
}

impl Lean {
    pub fn yaw_delta(&self) -> f32 {
        self.lean_yaw_delta
    }

    /// `target = delta_yaw / dt`, затем finterp_to и clamp ±max.
    ///
    /// `dt <= 0` — tick пропускается целиком (деление на ноль).
    pub fn update(&mut self, yaw: f32, dt: f32, interp_speed: f32, max_delta: f32) {
        if dt <= 0.0 {
            return;
        }
        if !self.primed {
            self.character_yaw = yaw;
            self.primed = true;
        }

        self.character_yaw_last_frame = self.character_yaw;
        self.character_yaw = yaw;

        let delta_yaw = normalized_delta_yaw(self.character_yaw, self.character_yaw_last_frame);
        let target = delta_yaw / dt;

        let interp = finterp_to(self.lean_yaw_delta, target, dt, interp_speed);
        self.lean_yaw_delta = interp.clamp(-max_delta, max_delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_lean_follows_turn_rate() {
        let mut lean = Lean::default();
        lean.update(0.0, DT, 10.0, 90.0);
        assert_eq!(lean.yaw_delta(), 0.0);

        // 0.5° за tick = 30°/sec, шаг 10/60 от цели
        lean.update(0.5, DT, 10.0, 90.0);
        assert!((lean.yaw_delta() - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_lean_clamped() {
        let mut lean = Lean::default();
        lean.update(0.0, DT, 10.0, 90.0);

        // 45° за tick = 2700°/sec → interp 450 → clamp 90
        lean.update(45.0, DT, 10.0, 90.0);
        assert_eq!(lean.yaw_delta(), 90.0);

        lean.update(0.0, DT, 10.0, 90.0);
        assert_eq!(lean.yaw_delta(), -90.0);
    }

    #[test]
    fn test_lean_uses_shortest_delta_across_wrap() {
        let mut lean = Lean::default();
        lean.update(179.0, DT, 10.0, 90.0);
        lean.update(-179.0, DT, 10.0, 90.0);

        // +2° (не -358°)
        assert!(lean.yaw_delta() > 0.0);
    }

    #[test]
    fn test_zero_dt_skipped() {
        let mut lean = Lean::default();
        lean.update(0.0, DT, 10.0, 90.0);
        lean.update(30.0, 0.0, 10.0, 90.0);

        assert_eq!(lean.yaw_delta(), 0.0);
    }
}
