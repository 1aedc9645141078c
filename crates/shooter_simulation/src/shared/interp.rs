//! Интерполяция и угловая арифметика (градусы)
//!
//! Все "пружины" симуляции (crosshair spread, zoom, lean) двигаются через
//! `finterp_to`: шаг пропорционален оставшейся дистанции, без overshoot.

use bevy::prelude::*;

/// Квадрат дистанции, ниже которого считаем что цель достигнута
const INTERP_SNAP_DISTANCE_SQ: f32 = 1.0e-8;

/// Экспоненциальное приближение `current` к `target`.
///
/// - `speed <= 0` → сразу `target`
/// - почти достигли цели → `target`
/// - иначе `current + (target - current) * clamp(dt * speed, 0, 1)`
pub fn finterp_to(current: f32, target: f32, dt: f32, speed: f32) -> f32 {
    if speed <= 0.0 {
        return target;
    }

    let dist = target - current;
    if dist * dist < INTERP_SNAP_DISTANCE_SQ {
        return target;
    }

    let step = (dt * speed).clamp(0.0, 1.0);
    current + dist * step
}

/// Нормализует угол в (-180, 180]
pub fn normalize_axis(angle: f32) -> f32 {
    let mut angle = angle % 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    if angle > 180.0 {
        angle -= 360.0;
    }
    angle
}

/// Кратчайшая разница yaw `a - b`, нормализованная в (-180, 180]
pub fn normalized_delta_yaw(a: f32, b: f32) -> f32 {
    normalize_axis(a - b)
}

/// Yaw (градусы) горизонтального направления.
///
/// Конвенция Bevy: Y вверх, forward = -Z, положительный yaw — поворот
/// против часовой вокруг +Y (как у `Transform::rotate_y`).
/// Нулевой горизонтальный вектор → 0.
pub fn yaw_from_direction(direction: Vec3) -> f32 {
    let horizontal = Vec2::new(direction.x, direction.z);
    if horizontal.length_squared() < INTERP_SNAP_DISTANCE_SQ {
        return 0.0;
    }
    (-direction.x).atan2(-direction.z).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finterp_to_moves_proportionally() {
        // 0 → 10, dt * speed = 0.5 → половина пути
        assert_eq!(finterp_to(0.0, 10.0, 0.05, 10.0), 5.0);
    }

    #[test]
    fn test_finterp_to_never_overshoots() {
        // dt * speed > 1 → клампится к 1, ровно target
        assert_eq!(finterp_to(0.0, 10.0, 1.0, 35.0), 10.0);
        assert_eq!(finterp_to(4.0, -2.0, 0.5, 100.0), -2.0);
    }

    #[test]
    fn test_finterp_to_non_positive_speed_snaps() {
        assert_eq!(finterp_to(3.0, 7.0, 0.016, 0.0), 7.0);
        assert_eq!(finterp_to(3.0, 7.0, 0.016, -5.0), 7.0);
    }

    #[test]
    fn test_finterp_to_snaps_when_close() {
        assert_eq!(finterp_to(1.0, 1.00005, 0.016, 1.0), 1.00005);
    }

    #[test]
    fn test_finterp_to_zero_dt_holds() {
        assert_eq!(finterp_to(2.0, 8.0, 0.0, 10.0), 2.0);
    }

    #[test]
    fn test_normalize_axis_range() {
        assert_eq!(normalize_axis(0.0), 0.0);
        assert_eq!(normalize_axis(180.0), 180.0);
        assert_eq!(normalize_axis(-180.0), 180.0);
        assert_eq!(normalize_axis(190.0), -170.0);
        assert_eq!(normalize_axis(-190.0), 170.0);
        assert_eq!(normalize_axis(720.0 + 45.0), 45.0);
    }

    #[test]
    fn test_normalized_delta_yaw_wraps() {
        // 170 → -170: кратчайший путь +20, а не -340
        assert_eq!(normalized_delta_yaw(-170.0, 170.0), 20.0);
        assert_eq!(normalized_delta_yaw(170.0, -170.0), -20.0);
    }

    #[test]
    fn test_yaw_from_direction_matches_bevy_rotation() {
        assert!(yaw_from_direction(Vec3::NEG_Z).abs() < 1e-4);
        assert!((yaw_from_direction(Vec3::NEG_X) - 90.0).abs() < 1e-4);

        let turned = Quat::from_rotation_y(30f32.to_radians()) * Vec3::NEG_Z;
        assert!((yaw_from_direction(turned) - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_yaw_from_zero_direction_is_zero() {
        assert_eq!(yaw_from_direction(Vec3::ZERO), 0.0);
        assert_eq!(yaw_from_direction(Vec3::Y * 5.0), 0.0);
    }
}
