//! Collision Groups Constants
//!
//! Rapier collision groups — centralised constants для item/character/trace.
//!
//! ## Архитектура:
//! - **Memberships:** в каких группах находится collider
//! - **Filters:** с какими группами collider взаимодействует
//! - Пара взаимодействует только если membership одного пересекается с filter другого (в обе стороны)
//!
//! ## Группы:
//! - GROUP_1: Environment (static world)
//! - GROUP_2: Characters (capsule shooter'а)
//! - GROUP_3: Items (mesh + interaction volumes)
//! - GROUP_4: Visibility trace channel (crosshair ray cast)

use bevy_rapier3d::prelude::{CollisionGroups, Group};

/// Environment (static world: стены, пол)
pub const GROUP_ENVIRONMENT: Group = Group::GROUP_1;

/// Characters (shooter capsule)
pub const GROUP_CHARACTERS: Group = Group::GROUP_2;

/// Items (weapon mesh + detection/pickup volumes)
pub const GROUP_ITEMS: Group = Group::GROUP_3;

/// Visibility channel: volumes, которые "блокируют" crosshair trace
pub const GROUP_VISIBILITY: Group = Group::GROUP_4;

/// Capsule персонажа: триггерит volumes предметов, виден crosshair trace
pub const CHARACTER_GROUPS: CollisionGroups = CollisionGroups::new(GROUP_CHARACTERS, Group::ALL);

/// Падающий mesh: коллизия только со static world
pub const FALLING_MESH_GROUPS: CollisionGroups = CollisionGroups::new(GROUP_ITEMS, GROUP_ENVIRONMENT);

/// Detection sphere: overlap только с персонажами, trace не видит
pub const DETECTION_VOLUME_GROUPS: CollisionGroups = CollisionGroups::new(GROUP_ITEMS, GROUP_CHARACTERS);

/// Pickup box в состоянии Pickup: overlap с персонажами + блокирует visibility trace
pub const PICKUP_VOLUME_GROUPS: CollisionGroups = CollisionGroups::new(
    GROUP_ITEMS.union(GROUP_VISIBILITY),
    GROUP_CHARACTERS.union(GROUP_VISIBILITY),
);

/// Ничего не пересекает (выключенный collider)
pub const IGNORE_ALL_GROUPS: CollisionGroups = CollisionGroups::new(Group::NONE, Group::NONE);

/// Crosshair ray: видит world, персонажей и volumes с visibility
pub const CROSSHAIR_TRACE_GROUPS: CollisionGroups = CollisionGroups::new(
    GROUP_VISIBILITY,
    GROUP_VISIBILITY.union(GROUP_ENVIRONMENT).union(GROUP_CHARACTERS),
);

#[cfg(test)]
mod tests {
    use super::*;

    fn interacts(a: CollisionGroups, b: CollisionGroups) -> bool {
        a.memberships.intersects(b.filters) && b.memberships.intersects(a.filters)
    }

    #[test]
    fn test_trace_sees_pickup_box_but_not_detection_sphere() {
        assert!(interacts(CROSSHAIR_TRACE_GROUPS, PICKUP_VOLUME_GROUPS));
        assert!(!interacts(CROSSHAIR_TRACE_GROUPS, DETECTION_VOLUME_GROUPS));
        assert!(!interacts(CROSSHAIR_TRACE_GROUPS, IGNORE_ALL_GROUPS));
    }

    #[test]
    fn test_falling_mesh_ignores_characters() {
        let character = CHARACTER_GROUPS;
        let world = CollisionGroups::new(GROUP_ENVIRONMENT, Group::ALL);

        assert!(!interacts(FALLING_MESH_GROUPS, character));
        assert!(interacts(FALLING_MESH_GROUPS, world));
    }

    #[test]
    fn test_character_triggers_volumes_and_blocks_trace() {
        assert!(interacts(CHARACTER_GROUPS, DETECTION_VOLUME_GROUPS));
        assert!(interacts(CHARACTER_GROUPS, PICKUP_VOLUME_GROUPS));
        assert!(interacts(CHARACTER_GROUPS, CROSSHAIR_TRACE_GROUPS));
    }
}
