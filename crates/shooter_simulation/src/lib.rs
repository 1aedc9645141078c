//! Shooter Simulation Core
//!
//! ECS-симуляция на Bevy 0.16: interaction + combat слой персонажа шутера.
//!
//! HYBRID ARCHITECTURE:
//! - ECS = правила (pickup lifecycle, combat cycle, crosshair, turn-in-place)
//! - Движок = рендер, анимации, звук, FX, ввод
//! - Rapier = overlaps, ray cast, бросок (через physics bridge)
//!
//! Всё gameplay идёт в `FixedUpdate` (60Hz) по chained `ShooterSet`.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod animation;
pub mod combat;
pub mod components;
pub mod config;
pub mod equipment;
pub mod item_system;
pub mod logger;
pub mod movement;
pub mod physics;
pub mod schedules;
pub mod shared;
pub mod shooting;

// Re-export базовых типов для удобства
pub use animation::{AnimProperties, AnimationPlugin, Lean, OffsetState, TurnInPlace};
pub use combat::{AmmoType, CarriedAmmo, CombatCycle, CombatPlugin, CombatState, Weapon, WeaponSpec};
pub use components::*;
pub use config::{ConfigError, ShooterConfig};
pub use equipment::{DefaultWeapon, EquipmentPlugin, EquippedWeapon, PickupQueue};
pub use item_system::{Item, ItemPlugin, ItemState};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, LogLevel};
pub use movement::{Crouch, MovementPlugin};
pub use physics::PhysicsBridgePlugin;
pub use schedules::{Scheduler, ShooterSet, TimerFired};
pub use shooting::{Aiming, CameraZoom, CrosshairSpread, ShootingPlugin};

use schedules::{advance_scheduler, prune_despawned_timer_owners};

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Physics bridge не входит: он требует `RapierPhysicsPlugin`, добавляется
/// отдельно через `PhysicsBridgePlugin`.
#[derive(Default)]
pub struct SimulationPlugin {
    pub config: ShooterConfig,
}

impl SimulationPlugin {
    pub fn with_config(config: ShooterConfig) -> Self {
        Self { config }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Seed мог задать create_headless_app
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .insert_resource(self.config.clone())
            .init_resource::<Scheduler>()
            .add_event::<TimerFired>()
            .configure_sets(
                FixedUpdate,
                (
                    ShooterSet::Overlaps,
                    ShooterSet::Equipment,
                    ShooterSet::Intents,
                    ShooterSet::Timers,
                    ShooterSet::Tick,
                    ShooterSet::Animation,
                    ShooterSet::PhysicsSync,
                )
                    .chain(),
            )
            // Сначала отменяем таймеры despawned владельцев, потом продвигаем
            .add_systems(
                FixedUpdate,
                (prune_despawned_timer_owners, advance_scheduler)
                    .chain()
                    .in_set(ShooterSet::Timers),
            )
            // Подсистемы
            .add_plugins((
                ItemPlugin,
                EquipmentPlugin,
                CombatPlugin,
                ShootingPlugin,
                MovementPlugin,
                AnimationPlugin,
            ));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Один fixed tick напрямую, без real time (тесты, replay)
///
/// `Time<Fixed>` продвигается ровно на timestep, затем выполняется `FixedUpdate`.
pub fn advance_fixed_tick(app: &mut App) {
    let world = app.world_mut();
    let timestep = world.resource::<Time<Fixed>>().timestep();
    world.resource_mut::<Time<Fixed>>().advance_by(timestep);
    world.run_schedule(FixedUpdate);
}

/// Snapshot компонента `T` по всем entities для сравнения детерминизма
pub fn world_snapshot<T>(world: &mut World) -> Vec<u8>
where
    T: Component + std::fmt::Debug,
{
    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Порядок итерации archetype'ов не гарантирован
    entities.sort_by_key(|(entity, _)| *entity);

    let mut snapshot = Vec::new();
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.to_bits().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
