//! Item events: overlaps (от physics адаптера) + запросы к персонажу

use bevy::prelude::*;

use super::components::VolumeKind;

/// Event: кто-то вошёл в volume предмета
///
/// `other` — entity collider'а (character или что угодно ещё).
/// Handlers сами проверяют, shooter ли это.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapBegin {
    pub item: Entity,
    pub volume: VolumeKind,
    pub other: Entity,
}

/// Event: кто-то вышел из volume предмета
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapEnd {
    pub item: Entity,
    pub volume: VolumeKind,
    pub other: Entity,
}

/// Event: shooter упёрся в pickup box → персонаж решает, брать ли
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoPickupRequested {
    pub shooter: Entity,
    pub item: Entity,
}
