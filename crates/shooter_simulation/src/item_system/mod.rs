//! Item system — мировые предметы и их pickup lifecycle
//!
//! Содержит:
//! - Item + ItemState + InteractionProfile (state machine: Idle/Pickup/Equipped/Falling)
//! - OverlapBegin/OverlapEnd (от physics адаптера) → state transitions
//! - ItemTrace (nearby counter + crosshair trace → pickup widgets)
//! - physics: profile → rapier components, бросок, spawn_world_item
//!
//! Персонаж решает сам, что делать с AutoPickupRequested (equipment domain).

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod physics;
pub mod systems;
pub mod trace;

pub use components::*;
pub use events::*;
pub use physics::{compute_throw, spawn_world_item, sync_item_physics, throw_impulse, ItemShape};
pub use systems::*;
pub use trace::{ItemTrace, WidgetChanges};

use crate::schedules::{advance_scheduler, ShooterSet};

/// Item Plugin
///
/// Порядок выполнения:
/// 1. Overlaps: handle_overlap_begin → handle_overlap_end
/// 2. Timers: handle_settle_timers (после advance_scheduler)
/// 3. Tick: trace_for_items
/// 4. PhysicsSync: hide_widgets_on_state_change → sync_item_physics
pub struct ItemPlugin;

impl Plugin for ItemPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<OverlapBegin>()
            .add_event::<OverlapEnd>()
            .add_event::<AutoPickupRequested>();

        app.add_systems(
            FixedUpdate,
            (handle_overlap_begin, handle_overlap_end)
                .chain()
                .in_set(ShooterSet::Overlaps),
        )
        .add_systems(
            FixedUpdate,
            handle_settle_timers
                .after(advance_scheduler)
                .in_set(ShooterSet::Timers),
        )
        .add_systems(FixedUpdate, trace_for_items.in_set(ShooterSet::Tick))
        .add_systems(
            FixedUpdate,
            (hide_widgets_on_state_change, sync_item_physics)
                .chain()
                .in_set(ShooterSet::PhysicsSync),
        );
    }
}
