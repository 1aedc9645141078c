//! Crosshair trace: AimRay → rapier ray cast → CrosshairHit
//!
//! Попадание в pickup volume разрешается в сам предмет, чтобы item trace и
//! beam видели Item entity.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{AimRay, CrosshairHit, RayHit};
use crate::config::ShooterConfig;
use crate::item_system::InteractionVolume;
use crate::shared::collision_layers::CROSSHAIR_TRACE_GROUPS;

/// Collider entity → логический entity (volume → его item)
pub fn resolve_hit_entity(collider: Entity, volume: Option<&InteractionVolume>) -> Entity {
    volume.map_or(collider, |volume| volume.item)
}

/// Система: ray cast из центра экрана для каждого shooter'а с AimRay
///
/// Без rapier context (headless) не делает ничего: CrosshairHit тогда
/// выставляет тот, кто управляет симуляцией.
pub fn cast_crosshair_rays(
    rapier_context: ReadRapierContext,
    config: Res<ShooterConfig>,
    mut shooters: Query<(Entity, &AimRay, &mut CrosshairHit)>,
    volumes: Query<&InteractionVolume>,
) {
    let Ok(context) = rapier_context.single() else {
        return;
    };

    let max_distance = config.trace.trace_distance;

    for (shooter, aim_ray, mut crosshair_hit) in shooters.iter_mut() {
        let filter = QueryFilter::new()
            .groups(CROSSHAIR_TRACE_GROUPS)
            .exclude_collider(shooter);

        let hit = context
            .cast_ray(aim_ray.origin, aim_ray.direction, max_distance, true, filter)
            .map(|(collider, toi)| RayHit {
                location: aim_ray.point_at(toi),
                entity: resolve_hit_entity(collider, volumes.get(collider).ok()),
            });

        crosshair_hit.set_if_neq(CrosshairHit(hit));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item_system::VolumeKind;

    #[test]
    fn test_volume_hit_resolves_to_item() {
        let item = Entity::from_raw(5);
        let volume = InteractionVolume {
            item,
            kind: VolumeKind::Pickup,
        };

        assert_eq!(resolve_hit_entity(Entity::from_raw(6), Some(&volume)), item);
        assert_eq!(resolve_hit_entity(Entity::from_raw(7), None), Entity::from_raw(7));
    }
}
