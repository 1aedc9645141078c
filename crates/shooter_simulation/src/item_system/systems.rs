//! Item systems: overlaps → state, crosshair trace → widgets, settle timer

use bevy::prelude::*;

use super::components::{Item, ItemState, PickupWidget, ThrowState, VolumeKind};
use super::events::{AutoPickupRequested, OverlapBegin, OverlapEnd};
use super::trace::{ItemTrace, WidgetChanges};
use crate::components::{CrosshairHit, Shooter};
use crate::schedules::{TimerFired, TimerKind};

/// Система: overlap begin → Idle→Pickup / auto pickup request
///
/// - Detection volume + Idle + shooter → Pickup, nearby counter +1
/// - Pickup volume + Pickup + shooter → AutoPickupRequested (решает персонаж)
pub fn handle_overlap_begin(
    mut overlaps: EventReader<OverlapBegin>,
    mut items: Query<&mut Item>,
    mut shooters: Query<&mut ItemTrace, With<Shooter>>,
    mut pickup_requests: EventWriter<AutoPickupRequested>,
) {
    for overlap in overlaps.read() {
        let Ok(mut item) = items.get_mut(overlap.item) else {
            continue;
        };
        let Ok(mut trace) = shooters.get_mut(overlap.other) else {
            continue; // Не shooter (стена, другой item)
        };

        match (overlap.volume, item.state()) {
            (VolumeKind::Detection, ItemState::Idle) => {
                trace.add_overlapped_item_count(1);
                item.set_state(ItemState::Pickup);
                crate::log(&format!(
                    "Item {:?} '{}': Idle → Pickup (shooter {:?} nearby)",
                    overlap.item,
                    item.name(),
                    overlap.other
                ));
            }
            (VolumeKind::Pickup, ItemState::Pickup) => {
                pickup_requests.write(AutoPickupRequested {
                    shooter: overlap.other,
                    item: overlap.item,
                });
            }
            _ => {}
        }
    }
}

/// Система: overlap end detection volume → Pickup→Idle, counter −1
pub fn handle_overlap_end(
    mut overlaps: EventReader<OverlapEnd>,
    mut items: Query<(&mut Item, &mut PickupWidget)>,
    mut shooters: Query<&mut ItemTrace, With<Shooter>>,
) {
    for overlap in overlaps.read() {
        if overlap.volume != VolumeKind::Detection {
            continue;
        }

        let Ok((mut item, mut widget)) = items.get_mut(overlap.item) else {
            continue;
        };
        if item.state() != ItemState::Pickup {
            continue;
        }
        let Ok(mut trace) = shooters.get_mut(overlap.other) else {
            continue;
        };

        trace.add_overlapped_item_count(-1);
        widget.visible = false;
        item.set_state(ItemState::Idle);

        crate::log(&format!(
            "Item {:?} '{}': Pickup → Idle (shooter {:?} left)",
            overlap.item,
            item.name(),
            overlap.other
        ));
    }
}

/// Система: state change → прятать widget где profile этого требует
pub fn hide_widgets_on_state_change(mut items: Query<(&Item, &mut PickupWidget), Changed<Item>>) {
    for (item, mut widget) in items.iter_mut() {
        if item.profile().hide_widget && widget.visible {
            widget.visible = false;
        }
    }
}

/// Система: crosshair hit → trace-hit item + pickup widgets
///
/// Пока рядом нет предметов (counter == 0), trace выключен.
pub fn trace_for_items(
    mut shooters: Query<(&mut ItemTrace, &CrosshairHit)>,
    mut widgets: Query<&mut PickupWidget, With<Item>>,
) {
    for (mut trace, crosshair_hit) in shooters.iter_mut() {
        let changes = if trace.should_trace() {
            // Промах (небо) — ничего не меняем, widget остаётся
            let Some(hit) = crosshair_hit.0 else {
                continue;
            };
            let hit_item = widgets.contains(hit.entity).then_some(hit.entity);
            trace.observe_hit(hit_item)
        } else {
            trace.stop_tracing()
        };

        apply_widget_changes(changes, &mut widgets);
    }
}

fn apply_widget_changes(changes: WidgetChanges, widgets: &mut Query<&mut PickupWidget, With<Item>>) {
    if let Some(hidden) = changes.hide {
        if let Ok(mut widget) = widgets.get_mut(hidden) {
            widget.visible = false;
        }
    }
    if let Some(shown) = changes.show {
        if let Ok(mut widget) = widgets.get_mut(shown) {
            widget.visible = true;
        }
    }
}

/// Система: settle timer брошенного предмета → Falling→Idle
pub fn handle_settle_timers(
    mut timers: EventReader<TimerFired>,
    mut items: Query<(&mut Item, &mut ThrowState)>,
) {
    for fired in timers.read() {
        if fired.kind != TimerKind::WeaponSettle {
            continue;
        }

        let Ok((mut item, mut throw)) = items.get_mut(fired.owner) else {
            continue; // Item despawned
        };
        if throw.settle_timer != Some(fired.handle) {
            continue; // Устаревший handle (предмет успели подобрать)
        }

        throw.settle_timer = None;
        throw.falling = false;

        if item.state() == ItemState::Falling {
            item.set_state(ItemState::Idle);
            crate::log(&format!("Item {:?} '{}': settled → Idle", fired.owner, item.name()));
        }
    }
}
