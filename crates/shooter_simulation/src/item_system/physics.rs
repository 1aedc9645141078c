//! Item physics: interaction profile → rapier components, бросок, spawn
//!
//! Только вставка/удаление компонентов: работает и без RapierPhysicsPlugin
//! (headless тесты), а с ним rapier подхватывает изменения на следующем step.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::Rng;

use super::components::{InteractionVolume, Item, ItemVolumes, VolumeKind, VolumeResponse};
use crate::config::ThrowConfig;
use crate::shared::collision_layers::{
    DETECTION_VOLUME_GROUPS, FALLING_MESH_GROUPS, IGNORE_ALL_GROUPS, PICKUP_VOLUME_GROUPS,
};
use crate::DeterministicRng;

/// Размеры collider'ов предмета (метры)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemShape {
    pub mesh_half_extents: Vec3,
    pub detection_radius: f32,
    pub pickup_half_extents: Vec3,
}

impl Default for ItemShape {
    fn default() -> Self {
        Self {
            mesh_half_extents: Vec3::new(0.05, 0.12, 0.35),
            detection_radius: 1.5,
            pickup_half_extents: Vec3::new(0.25, 0.2, 0.45),
        }
    }
}

/// Заспавнить мировой предмет с mesh collider + двумя sensor volumes
///
/// `bundle` должен содержать `Item` (и, для оружия, `Weapon`), но не `Transform`.
pub fn spawn_world_item<B: Bundle>(commands: &mut Commands, bundle: B, transform: Transform, shape: ItemShape) -> Entity {
    let item = commands
        .spawn((
            bundle,
            transform,
            RigidBody::KinematicPositionBased,
            Collider::cuboid(shape.mesh_half_extents.x, shape.mesh_half_extents.y, shape.mesh_half_extents.z),
            IGNORE_ALL_GROUPS,
        ))
        .id();

    let detection = commands
        .spawn((
            Transform::IDENTITY,
            Collider::ball(shape.detection_radius),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
            DETECTION_VOLUME_GROUPS,
            InteractionVolume {
                item,
                kind: VolumeKind::Detection,
            },
        ))
        .id();

    let pickup = commands
        .spawn((
            Transform::IDENTITY,
            Collider::cuboid(shape.pickup_half_extents.x, shape.pickup_half_extents.y, shape.pickup_half_extents.z),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
            IGNORE_ALL_GROUPS,
            ColliderDisabled,
            InteractionVolume {
                item,
                kind: VolumeKind::Pickup,
            },
        ))
        .id();

    commands
        .entity(item)
        .add_children(&[detection, pickup])
        .insert(ItemVolumes { detection, pickup });

    item
}

/// Система: Changed<Item> → rapier компоненты mesh'а и volumes
pub fn sync_item_physics(
    mut commands: Commands,
    items: Query<(Entity, &Item, Option<&ItemVolumes>), Changed<Item>>,
) {
    for (entity, item, volumes) in items.iter() {
        let profile = item.profile();

        if let Ok(mut body) = commands.get_entity(entity) {
            if profile.mesh.simulate_physics {
                body.insert((RigidBody::Dynamic, GravityScale(1.0), FALLING_MESH_GROUPS))
                    .remove::<ColliderDisabled>();
            } else {
                // Kinematic: экипированное оружие двигает socket, лежащее стоит
                body.insert((
                    RigidBody::KinematicPositionBased,
                    GravityScale(0.0),
                    IGNORE_ALL_GROUPS,
                    ColliderDisabled,
                ));
            }
        }

        let Some(volumes) = volumes else {
            continue;
        };

        for (kind, response) in [
            (VolumeKind::Detection, profile.detection),
            (VolumeKind::Pickup, profile.pickup),
        ] {
            let Ok(mut volume) = commands.get_entity(volumes.get(kind)) else {
                continue;
            };

            match response {
                VolumeResponse::Disabled => {
                    volume.insert((IGNORE_ALL_GROUPS, ColliderDisabled));
                }
                VolumeResponse::OverlapOnly => {
                    volume.insert(DETECTION_VOLUME_GROUPS).remove::<ColliderDisabled>();
                }
                VolumeResponse::OverlapBlockVisibility => {
                    volume.insert(PICKUP_VOLUME_GROUPS).remove::<ColliderDisabled>();
                }
            }
        }
    }
}

/// Rotation → только yaw (предмет ложится "ровно" перед броском)
pub fn flatten_to_yaw(rotation: Quat) -> Quat {
    let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
    Quat::from_rotation_y(yaw)
}

/// Направление броска: right вектор, наклонённый вокруг forward, затем
/// повёрнутый вокруг up на `random_yaw_degrees`
pub fn throw_direction(rotation: Quat, tilt_degrees: f32, random_yaw_degrees: f32) -> Vec3 {
    let forward = rotation * Vec3::NEG_Z;
    let right = rotation * Vec3::X;

    let tilted = Quat::from_axis_angle(forward, tilt_degrees.to_radians()) * right;
    Quat::from_rotation_y(random_yaw_degrees.to_radians()) * tilted
}

/// Посчитать бросок: выровненный transform + импульс
///
/// Случайный разброс берётся из `DeterministicRng` (воспроизводимо по seed).
pub fn compute_throw(transform: &Transform, config: &ThrowConfig, rng: &mut DeterministicRng) -> (Quat, Vec3) {
    let flattened = flatten_to_yaw(transform.rotation);

    let max_yaw = config.max_random_yaw_degrees.abs();
    let random_yaw = if max_yaw > 0.0 {
        rng.rng.gen_range(-max_yaw..=max_yaw)
    } else {
        0.0
    };

    let direction = throw_direction(flattened, config.tilt_degrees, random_yaw);
    (flattened, direction * config.impulse_strength)
}

/// Импульс для вставки на брошенный предмет (rapier применит на ближайшем step)
pub fn throw_impulse(impulse: Vec3) -> ExternalImpulse {
    ExternalImpulse {
        impulse,
        torque_impulse: Vec3::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_keeps_only_yaw() {
        let rotation = Quat::from_euler(EulerRot::YXZ, 0.7, 0.4, -0.3);
        let flattened = flatten_to_yaw(rotation);

        let (yaw, pitch, roll) = flattened.to_euler(EulerRot::YXZ);
        assert!((yaw - 0.7).abs() < 1e-4);
        assert!(pitch.abs() < 1e-4);
        assert!(roll.abs() < 1e-4);
    }

    #[test]
    fn test_throw_without_tilt_goes_right() {
        let direction = throw_direction(Quat::IDENTITY, 0.0, 0.0);
        assert!((direction - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_throw_tilt_is_about_forward_axis() {
        let direction = throw_direction(Quat::IDENTITY, -10.0, 0.0);

        // Наклон вокруг forward (-Z) не меняет z-компоненту
        assert!(direction.z.abs() < 1e-5);
        assert!((direction.length() - 1.0).abs() < 1e-5);
        assert!((direction.y - 10f32.to_radians().sin()).abs() < 1e-5);
    }

    #[test]
    fn test_throw_is_deterministic_per_seed() {
        let config = ThrowConfig::default();
        let transform = Transform::from_rotation(Quat::from_rotation_y(1.2));

        let mut rng_a = DeterministicRng::new(7);
        let mut rng_b = DeterministicRng::new(7);

        assert_eq!(
            compute_throw(&transform, &config, &mut rng_a),
            compute_throw(&transform, &config, &mut rng_b)
        );
    }

    #[test]
    fn test_throw_jitter_stays_in_range() {
        let config = ThrowConfig::default();
        let transform = Transform::IDENTITY;
        let mut rng = DeterministicRng::new(42);
        let base = throw_direction(Quat::IDENTITY, config.tilt_degrees, 0.0);

        for _ in 0..50 {
            let (_, impulse) = compute_throw(&transform, &config, &mut rng);
            assert!((impulse.length() - config.impulse_strength).abs() < 1e-3);

            let horizontal_angle = Vec2::new(base.x, base.z)
                .angle_to(Vec2::new(impulse.x, impulse.z))
                .to_degrees()
                .abs();
            assert!(horizontal_angle <= config.max_random_yaw_degrees + 1e-3);
        }
    }
}
