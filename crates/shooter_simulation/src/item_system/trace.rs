//! Item trace: какие предметы рядом и на какой смотрит crosshair

use bevy::prelude::*;

/// Изменения видимости pickup widgets после одного trace шага
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetChanges {
    pub show: Option<Entity>,
    pub hide: Option<Entity>,
}

/// Nearby-item counter + результат crosshair trace (на shooter'е)
///
/// Trace включён только пока рядом есть хотя бы один предмет в Pickup.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct ItemTrace {
    overlapped_item_count: i32,
    should_trace: bool,
    trace_hit_item: Option<Entity>,
    last_trace_item: Option<Entity>,
}

impl ItemTrace {
    pub fn overlapped_item_count(&self) -> i32 {
        self.overlapped_item_count
    }

    pub fn should_trace(&self) -> bool {
        self.should_trace
    }

    /// Предмет под crosshair (только пока trace включён)
    pub fn trace_hit_item(&self) -> Option<Entity> {
        self.trace_hit_item
    }

    /// `count += amount`; `count <= 0` → trace выключен и count = 0
    pub fn add_overlapped_item_count(&mut self, amount: i32) {
        let count = self.overlapped_item_count + amount;
        if count <= 0 {
            self.overlapped_item_count = 0;
            self.should_trace = false;
        } else {
            self.overlapped_item_count = count;
            self.should_trace = true;
        }
    }

    /// Trace попал во что-то блокирующее; `hit_item` — Some если это Item
    pub fn observe_hit(&mut self, hit_item: Option<Entity>) -> WidgetChanges {
        let mut changes = WidgetChanges {
            show: hit_item,
            hide: None,
        };

        if let Some(last) = self.last_trace_item {
            if Some(last) != hit_item {
                changes.hide = Some(last);
            }
        }

        self.trace_hit_item = hit_item;
        self.last_trace_item = hit_item;
        changes
    }

    /// Trace выключен: спрятать последний widget, забыть цель
    pub fn stop_tracing(&mut self) -> WidgetChanges {
        let changes = WidgetChanges {
            show: None,
            hide: self.last_trace_item.take(),
        };
        self.trace_hit_item = None;
        changes
    }
}
