//! Headless симуляция shooter'а
//!
//! Без rapier: overlap events и fire input пишем вручную, чтобы прогнать
//! весь цикл pickup → fire → auto reload → drop/swap.
//!
//! Usage: `shooter_simulation [path/to/shooter.toml]`

use std::path::Path;

use bevy::prelude::*;
use shooter_simulation::combat::FireButtonIntent;
use shooter_simulation::equipment::DropWeaponIntent;
use shooter_simulation::item_system::{spawn_world_item, ItemShape, OverlapBegin, VolumeKind};
use shooter_simulation::*;

fn load_config() -> ShooterConfig {
    let Some(path) = std::env::args().nth(1) else {
        return ShooterConfig::default();
    };

    match ShooterConfig::from_file(Path::new(&path)) {
        Ok(config) => {
            log_info(&format!("Loaded config from {}", path));
            config
        }
        Err(err) => {
            log_error(&format!("{}; falling back to defaults", err));
            ShooterConfig::default()
        }
    }
}

fn main() {
    let seed = 42;
    let mut app = create_headless_app(seed);
    set_log_level(LogLevel::Info);
    log_info(&format!("Starting shooter headless simulation (seed: {})", seed));

    let config = load_config();
    app.add_plugins(SimulationPlugin::with_config(config));

    let shooter = app
        .world_mut()
        .spawn((Shooter, DefaultWeapon::default(), Transform::default()))
        .id();

    let rifle = spawn_world_item(
        &mut app.world_mut().commands(),
        WeaponSpec::assault_rifle().bundle(),
        Transform::from_xyz(0.0, 0.0, -1.0),
        ItemShape::default(),
    );
    app.world_mut().flush();

    for tick in 0..600u32 {
        match tick {
            // Подходим к винтовке: detection, потом pickup box (SMG в руках → в очередь)
            10 => {
                app.world_mut().send_event(OverlapBegin {
                    item: rifle,
                    volume: VolumeKind::Detection,
                    other: shooter,
                });
            }
            11 => {
                app.world_mut().send_event(OverlapBegin {
                    item: rifle,
                    volume: VolumeKind::Pickup,
                    other: shooter,
                });
            }
            20 => {
                app.world_mut().send_event(FireButtonIntent { shooter, pressed: true });
            }
            // 30 выстрелов по 6 tick'ов + auto reload
            220 => {
                app.world_mut().send_event(FireButtonIntent { shooter, pressed: false });
            }
            // Бросаем SMG → винтовка из очереди в руки
            300 => {
                app.world_mut().send_event(DropWeaponIntent { shooter });
            }
            _ => {}
        }

        advance_fixed_tick(&mut app);

        if tick % 100 == 0 {
            let world = app.world();
            let state = world.get::<CombatCycle>(shooter).map(|cycle| cycle.state());
            let equipped = world.get::<EquippedWeapon>(shooter).and_then(|slot| slot.get());
            let ammo = equipped.and_then(|weapon| world.get::<Weapon>(weapon)).map(|weapon| weapon.ammo());
            log_info(&format!(
                "Tick {}: combat {:?}, weapon {:?}, ammo {:?}",
                tick, state, equipped, ammo
            ));
        }
    }

    let world = app.world();
    let rifle_state = world.get::<Item>(rifle).map(|item| item.state());
    log_info(&format!("Simulation complete! Rifle state: {:?}", rifle_state));
}
