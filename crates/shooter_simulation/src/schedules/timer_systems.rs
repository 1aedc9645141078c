//! Timer systems
//!
//! `advance_scheduler` запускается первым в `ShooterSet::Timers`, handlers
//! доменов (combat, crosshair, item settle) читают `TimerFired` сразу после.

use bevy::prelude::*;

use super::{Scheduler, TimerFired};
use crate::combat::CombatCycle;
use crate::item_system::Item;

/// System: продвинуть таймеры на fixed delta и отправить TimerFired
pub fn advance_scheduler(
    time: Res<Time<Fixed>>,
    mut scheduler: ResMut<Scheduler>,
    mut fired_events: EventWriter<TimerFired>,
) {
    let delta = time.delta_secs();
    if delta <= 0.0 {
        return;
    }

    let fired = scheduler.advance(delta);
    if !fired.is_empty() {
        fired_events.write_batch(fired);
    }
}

/// System: отменить таймеры despawned владельцев
///
/// Владельцы таймеров — characters (CombatCycle) и items.
pub fn prune_despawned_timer_owners(
    mut scheduler: ResMut<Scheduler>,
    mut removed_cycles: RemovedComponents<CombatCycle>,
    mut removed_items: RemovedComponents<Item>,
) {
    for entity in removed_cycles.read().chain(removed_items.read()) {
        let cancelled = scheduler.cancel_owner(entity);
        if cancelled > 0 {
            crate::log(&format!(
                "Scheduler: cancelled {} timer(s) of despawned {:?}",
                cancelled, entity
            ));
        }
    }
}
