//! Тесты детерминизма
//!
//! Одинаковый seed + одинаковый сценарий → идентичный мир (броски используют
//! DeterministicRng, таймеры двигает только fixed tick).

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::ExternalImpulse;
use shooter_simulation::combat::FireButtonIntent;
use shooter_simulation::equipment::DropWeaponIntent;
use shooter_simulation::item_system::{spawn_world_item, ItemShape, OverlapBegin, VolumeKind};
use shooter_simulation::*;

/// Сценарий: стрельба, подбор винтовки в очередь, два броска
fn run_scenario(seed: u64, ticks: u32) -> Vec<u8> {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin::default());

    let shooter = app
        .world_mut()
        .spawn((Shooter, DefaultWeapon::default(), Transform::from_xyz(1.0, 0.0, 2.0)))
        .id();
    let rifle = spawn_world_item(
        &mut app.world_mut().commands(),
        WeaponSpec::assault_rifle().bundle(),
        Transform::from_xyz(1.0, 0.0, 1.0),
        ItemShape::default(),
    );
    app.world_mut().flush();

    for tick in 0..ticks {
        match tick {
            5 => {
                app.world_mut().send_event(OverlapBegin {
                    item: rifle,
                    volume: VolumeKind::Detection,
                    other: shooter,
                });
            }
            6 => {
                app.world_mut().send_event(OverlapBegin {
                    item: rifle,
                    volume: VolumeKind::Pickup,
                    other: shooter,
                });
            }
            10 => {
                app.world_mut().send_event(FireButtonIntent { shooter, pressed: true });
            }
            60 => {
                app.world_mut().send_event(FireButtonIntent { shooter, pressed: false });
            }
            // SMG → винтовка из очереди, потом бросаем и её
            80 | 120 => {
                app.world_mut().send_event(DropWeaponIntent { shooter });
            }
            _ => {}
        }
        advance_fixed_tick(&mut app);
    }

    let world = app.world_mut();
    let mut snapshot = world_snapshot::<Weapon>(world);
    snapshot.extend(world_snapshot::<Item>(world));
    snapshot.extend(world_snapshot::<Transform>(world));
    snapshot.extend(world_snapshot::<ExternalImpulse>(world));
    snapshot
}

#[test]
fn test_same_seed_gives_identical_world() {
    const SEED: u64 = 12345;

    let snapshots: Vec<_> = (0..3).map(|_| run_scenario(SEED, 150)).collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0 (seed {})",
            i, SEED
        );
    }
}

#[test]
fn test_different_seed_changes_throw() {
    let first = run_scenario(1, 150);
    let second = run_scenario(2, 150);

    // Random yaw броска зависит от seed
    assert_ne!(first, second);
}

#[test]
fn test_fixed_update_driven_by_app_update() {
    let mut app = create_headless_app(42);
    app.add_plugins(SimulationPlugin::default());
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1.0 / 60.0)));

    let shooter = app.world_mut().spawn((Shooter, DefaultWeapon::default())).id();

    for _ in 0..60 {
        app.update();
    }

    // Хотя бы один fixed tick прошёл: стартовое оружие в руке
    let weapon = app
        .world()
        .get::<EquippedWeapon>(shooter)
        .and_then(|slot| slot.get())
        .expect("default weapon equipped");
    assert_eq!(app.world().get::<Item>(weapon).unwrap().state(), ItemState::Equipped);
}
