//! Physics bridge — rapier ↔ item/combat domains
//!
//! - overlaps: CollisionEvent на sensor volumes → OverlapBegin/OverlapEnd
//! - crosshair_trace: AimRay → CrosshairHit (visibility channel)
//! - body: capsule shooter'а
//!
//! Plugin отдельный: требует RapierPhysicsPlugin (headless тесты его не
//! подключают и пишут overlap events / CrosshairHit сами).

use bevy::prelude::*;

pub mod body;
pub mod crosshair_trace;
pub mod overlaps;

// Re-export основных типов
pub use body::{capsule_half_segment, shooter_body, SHOOTER_CAPSULE_RADIUS};
pub use crosshair_trace::{cast_crosshair_rays, resolve_hit_entity};
pub use overlaps::{translate_collision, translate_collision_events, OverlapChange};

use crate::schedules::ShooterSet;

/// Physics bridge plugin
///
/// Оба system'а в начале tick'а: читают результаты прошлого physics step.
pub struct PhysicsBridgePlugin;

impl Plugin for PhysicsBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (translate_collision_events, cast_crosshair_rays)
                .chain()
                .in_set(ShooterSet::Overlaps)
                .before(crate::item_system::handle_overlap_begin),
        );
    }
}
