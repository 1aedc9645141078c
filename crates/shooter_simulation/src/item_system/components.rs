//! Item компоненты: pickup state machine + interaction profiles

use bevy::prelude::*;

use crate::schedules::TimerHandle;

/// Lifecycle state мирового предмета
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum ItemState {
    /// Лежит в мире, ждёт пока кто-то подойдёт
    #[default]
    Idle,
    /// Рядом shooter: можно подобрать (виден trace'у)
    Pickup,
    /// В руке персонажа
    Equipped,
    /// Брошен, летит с физикой до settle timer
    Falling,
}

/// Отклик collider'а на остальной мир
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum VolumeResponse {
    /// Collider выключен
    Disabled,
    /// Только overlap события (sensor), trace не видит
    OverlapOnly,
    /// Overlap + блокирует visibility trace
    OverlapBlockVisibility,
}

/// Физика mesh'а предмета
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct MeshProfile {
    pub visible: bool,
    /// Dynamic rigid body + gravity
    pub simulate_physics: bool,
    /// Коллизия только со static world
    pub collide_with_world: bool,
}

/// Полный interaction profile — выводится из ItemState, никогда не задаётся отдельно
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct InteractionProfile {
    pub mesh: MeshProfile,
    /// Большая сфера: "рядом ли shooter"
    pub detection: VolumeResponse,
    /// Малый box: auto pickup + цель для crosshair trace
    pub pickup: VolumeResponse,
    /// Принудительно спрятать pickup widget при входе в состояние
    pub hide_widget: bool,
}

impl InteractionProfile {
    pub fn for_state(state: ItemState) -> Self {
        let resting_mesh = MeshProfile {
            visible: true,
            simulate_physics: false,
            collide_with_world: false,
        };

        match state {
            ItemState::Idle => Self {
                mesh: resting_mesh,
                detection: VolumeResponse::OverlapOnly,
                pickup: VolumeResponse::Disabled,
                hide_widget: true,
            },
            ItemState::Pickup => Self {
                mesh: resting_mesh,
                detection: VolumeResponse::OverlapOnly,
                pickup: VolumeResponse::OverlapBlockVisibility,
                hide_widget: false,
            },
            ItemState::Equipped => Self {
                mesh: resting_mesh,
                detection: VolumeResponse::Disabled,
                pickup: VolumeResponse::Disabled,
                hide_widget: true,
            },
            ItemState::Falling => Self {
                mesh: MeshProfile {
                    visible: true,
                    simulate_physics: true,
                    collide_with_world: true,
                },
                detection: VolumeResponse::Disabled,
                pickup: VolumeResponse::Disabled,
                hide_widget: false,
            },
        }
    }
}

/// Мировой предмет (Pickup State Machine)
///
/// Инвариант: `profile == InteractionProfile::for_state(state)` всегда.
/// Поэтому поля приватные, единственный мутатор — `set_state`.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
#[require(PickupWidget, Transform)]
pub struct Item {
    name: String,
    count: u32,
    state: ItemState,
    profile: InteractionProfile,
}

impl Default for Item {
    fn default() -> Self {
        Self::new("Default")
    }
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: 1,
            state: ItemState::Idle,
            profile: InteractionProfile::for_state(ItemState::Idle),
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn state(&self) -> ItemState {
        self.state
    }

    pub fn profile(&self) -> &InteractionProfile {
        &self.profile
    }

    /// Перевести в новое состояние (profile пересчитывается атомарно)
    pub fn set_state(&mut self, state: ItemState) {
        self.profile = InteractionProfile::for_state(state);
        self.state = state;
    }
}

/// Floating widget "нажми чтобы подобрать" над предметом
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct PickupWidget {
    pub visible: bool,
}

/// Бросок: падает ли предмет и handle settle таймера
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ThrowState {
    pub falling: bool,
    pub settle_timer: Option<TimerHandle>,
}

/// Какой из двух volumes предмета
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum VolumeKind {
    /// Сфера обнаружения (Idle ↔ Pickup)
    Detection,
    /// Box подбора (auto pickup, crosshair trace)
    Pickup,
}

/// Sensor collider предмета (child entity)
///
/// Физический адаптер переводит overlap events этих collider'ов в
/// `OverlapBegin`/`OverlapEnd` с `item` и `kind`.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct InteractionVolume {
    pub item: Entity,
    pub kind: VolumeKind,
}

/// Ссылки item → его volumes (для physics sync)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ItemVolumes {
    pub detection: Entity,
    pub pickup: Entity,
}

impl ItemVolumes {
    pub fn get(&self, kind: VolumeKind) -> Entity {
        match kind {
            VolumeKind::Detection => self.detection,
            VolumeKind::Pickup => self.pickup,
        }
    }
}
