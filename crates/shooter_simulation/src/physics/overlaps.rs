//! Rapier CollisionEvent → OverlapBegin / OverlapEnd
//!
//! Sensor volumes предметов несут `InteractionVolume`; вторая сторона пары
//! передаётся как есть (item handlers сами проверяют, shooter ли это).

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::item_system::{InteractionVolume, OverlapBegin, OverlapEnd};

/// Результат перевода одного collision event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapChange {
    Begin(OverlapBegin),
    End(OverlapEnd),
}

/// Перевести collision event, если одна из сторон — volume предмета
pub fn translate_collision(
    event: &CollisionEvent,
    volume_of: impl Fn(Entity) -> Option<InteractionVolume>,
) -> Option<OverlapChange> {
    let (a, b, started) = match event {
        CollisionEvent::Started(a, b, _) => (*a, *b, true),
        CollisionEvent::Stopped(a, b, _) => (*a, *b, false),
    };

    let (volume, other) = match (volume_of(a), volume_of(b)) {
        (Some(volume), _) => (volume, b),
        (None, Some(volume)) => (volume, a),
        (None, None) => return None,
    };

    // Свой же mesh (item body) не считается
    if other == volume.item {
        return None;
    }

    Some(if started {
        OverlapChange::Begin(OverlapBegin {
            item: volume.item,
            volume: volume.kind,
            other,
        })
    } else {
        OverlapChange::End(OverlapEnd {
            item: volume.item,
            volume: volume.kind,
            other,
        })
    })
}

/// Система: rapier collision events → overlap events предметов
pub fn translate_collision_events(
    mut collisions: EventReader<CollisionEvent>,
    volumes: Query<&InteractionVolume>,
    mut begin_events: EventWriter<OverlapBegin>,
    mut end_events: EventWriter<OverlapEnd>,
) {
    for collision in collisions.read() {
        match translate_collision(collision, |entity| volumes.get(entity).ok().copied()) {
            Some(OverlapChange::Begin(begin)) => {
                begin_events.write(begin);
            }
            Some(OverlapChange::End(end)) => {
                end_events.write(end);
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item_system::VolumeKind;
    use bevy_rapier3d::rapier::geometry::CollisionEventFlags;

    const ITEM: Entity = Entity::from_raw(10);
    const DETECTION: Entity = Entity::from_raw(11);
    const SHOOTER: Entity = Entity::from_raw(1);

    fn lookup(entity: Entity) -> Option<InteractionVolume> {
        (entity == DETECTION).then_some(InteractionVolume {
            item: ITEM,
            kind: VolumeKind::Detection,
        })
    }

    #[test]
    fn test_started_becomes_begin_in_either_order() {
        for event in [
            CollisionEvent::Started(DETECTION, SHOOTER, CollisionEventFlags::SENSOR),
            CollisionEvent::Started(SHOOTER, DETECTION, CollisionEventFlags::SENSOR),
        ] {
            assert_eq!(
                translate_collision(&event, lookup),
                Some(OverlapChange::Begin(OverlapBegin {
                    item: ITEM,
                    volume: VolumeKind::Detection,
                    other: SHOOTER,
                }))
            );
        }
    }

    #[test]
    fn test_stopped_becomes_end() {
        let event = CollisionEvent::Stopped(SHOOTER, DETECTION, CollisionEventFlags::SENSOR);
        assert!(matches!(
            translate_collision(&event, lookup),
            Some(OverlapChange::End(OverlapEnd { other, .. })) if other == SHOOTER
        ));
    }

    #[test]
    fn test_non_volume_pairs_ignored() {
        let event = CollisionEvent::Started(SHOOTER, Entity::from_raw(99), CollisionEventFlags::empty());
        assert_eq!(translate_collision(&event, lookup), None);

        let own_body = CollisionEvent::Started(DETECTION, ITEM, CollisionEventFlags::SENSOR);
        assert_eq!(translate_collision(&own_body, lookup), None);
    }
}
