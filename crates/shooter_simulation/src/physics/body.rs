//! Rapier тело shooter'а (capsule), чтобы volumes предметов его видели

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::config::MovementConfig;
use crate::shared::collision_layers::CHARACTER_GROUPS;

/// Радиус capsule (m)
pub const SHOOTER_CAPSULE_RADIUS: f32 = 0.34;

/// Половина цилиндрической части: half height без полусферы
pub fn capsule_half_segment(half_height: f32) -> f32 {
    (half_height - SHOOTER_CAPSULE_RADIUS).max(0.0)
}

/// Kinematic capsule: движок двигает Transform, rapier только ловит overlaps
pub fn shooter_body(config: &MovementConfig) -> impl Bundle {
    (
        RigidBody::KinematicPositionBased,
        Collider::capsule_y(
            capsule_half_segment(config.standing_capsule_half_height),
            SHOOTER_CAPSULE_RADIUS,
        ),
        CHARACTER_GROUPS,
        ActiveEvents::COLLISION_EVENTS,
        ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_STATIC | ActiveCollisionTypes::KINEMATIC_KINEMATIC,
    )
}
