//! Tests for combat cycle (fire / cooldown / reload).

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::combat::cycle::{grab_clip, release_clip, CombatCtx, CombatCue, CombatCycle, CombatState};
    use crate::combat::events::{Montage, HIP_FIRE_SECTION};
    use crate::combat::{AmmoType, CarriedAmmo, ClipBone, Weapon, WeaponSpec};
    use crate::components::HandAnchor;
    use crate::schedules::{Scheduler, TimerKind};

    const AUTO_FIRE_PERIOD: f32 = 0.1;
    const DT: f32 = 1.0 / 60.0;

    fn shooter() -> Entity {
        Entity::from_raw(1)
    }

    fn weapon_entity() -> Entity {
        Entity::from_raw(2)
    }

    fn smg(ammo: u32) -> Weapon {
        Weapon::new(&WeaponSpec::submachine_gun().with_ammo(ammo))
    }

    /// Прогнать scheduler до срабатывания cooldown таймера
    fn expire_fire_timer(
        cycle: &mut CombatCycle,
        weapon: Option<&mut Weapon>,
        ledger: &CarriedAmmo,
        scheduler: &mut Scheduler,
    ) -> Vec<CombatCue> {
        let mut fired = Vec::new();
        for _ in 0..60 {
            fired = scheduler.advance(DT);
            if !fired.is_empty() {
                break;
            }
        }
        let timer = fired
            .iter()
            .find(|fired| fired.kind == TimerKind::AutoFireReset)
            .expect("fire timer should expire");

        let mut ctx = CombatCtx::new(shooter(), scheduler, AUTO_FIRE_PERIOD);
        assert!(cycle.on_fire_timer(timer.handle, weapon.map(|w| (weapon_entity(), w)), ledger, &mut ctx));
        ctx.cues
    }

    #[test]
    fn test_fire_decrements_and_starts_cooldown() {
        let mut scheduler = Scheduler::default();
        let mut cycle = CombatCycle::default();
        let mut weapon = smg(30);

        let mut ctx = CombatCtx::new(shooter(), &mut scheduler, AUTO_FIRE_PERIOD);
        assert!(cycle.press_fire(Some((weapon_entity(), &mut weapon)), &mut ctx));

        assert_eq!(
            ctx.cues,
            vec![
                CombatCue::Fired {
                    weapon: weapon_entity(),
                    ammo_left: 29,
                },
                CombatCue::PlayMontage {
                    montage: Montage::HipFire,
                    section: HIP_FIRE_SECTION.to_string(),
                },
            ]
        );
        assert_eq!(weapon.ammo(), 29);
        assert_eq!(cycle.state(), CombatState::FireTimerInProgress);
        assert!(cycle.fire_timer().is_some());
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn test_fire_without_weapon_is_noop() {
        let mut scheduler = Scheduler::default();
        let mut cycle = CombatCycle::default();

        let mut ctx = CombatCtx::new(shooter(), &mut scheduler, AUTO_FIRE_PERIOD);
        assert!(!cycle.press_fire(None, &mut ctx));
        assert!(ctx.cues.is_empty());
        assert_eq!(cycle.state(), CombatState::Unoccupied);
        assert!(cycle.fire_button_held());
    }

    #[test]
    fn test_fire_with_empty_magazine_is_noop() {
        let mut scheduler = Scheduler::default();
        let mut cycle = CombatCycle::default();
        let mut weapon = smg(0);

        let mut ctx = CombatCtx::new(shooter(), &mut scheduler, AUTO_FIRE_PERIOD);
        assert!(!cycle.press_fire(Some((weapon_entity(), &mut weapon)), &mut ctx));
        assert!(ctx.cues.is_empty());
        assert_eq!(cycle.state(), CombatState::Unoccupied);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_fire_during_cooldown_is_rejected() {
        let mut scheduler = Scheduler::default();
        let mut cycle = CombatCycle::default();
        let mut weapon = smg(30);

        let mut ctx = CombatCtx::new(shooter(), &mut scheduler, AUTO_FIRE_PERIOD);
        cycle.press_fire(Some((weapon_entity(), &mut weapon)), &mut ctx);
        assert!(!cycle.fire_weapon(Some((weapon_entity(), &mut weapon)), &mut ctx));

        assert_eq!(weapon.ammo(), 29);
    }

    #[test]
    fn test_held_fire_refires_on_cooldown_expiry() {
        let mut scheduler = Scheduler::default();
        let mut cycle = CombatCycle::default();
        let mut weapon = smg(30);
        let ledger = CarriedAmmo::default();

        let mut ctx = CombatCtx::new(shooter(), &mut scheduler, AUTO_FIRE_PERIOD);
        cycle.press_fire(Some((weapon_entity(), &mut weapon)), &mut ctx);

        let cues = expire_fire_timer(&mut cycle, Some(&mut weapon), &ledger, &mut scheduler);

        assert!(cues.contains(&CombatCue::Fired {
            weapon: weapon_entity(),
            ammo_left: 28,
        }));
        assert_eq!(weapon.ammo(), 28);
        assert_eq!(cycle.state(), CombatState::FireTimerInProgress);
    }

    #[test]
    fn test_released_fire_returns_to_unoccupied() {
        let mut scheduler = Scheduler::default();
        let mut cycle = CombatCycle::default();
        let mut weapon = smg(30);
        let ledger = CarriedAmmo::default();

        let mut ctx = CombatCtx::new(shooter(), &mut scheduler, AUTO_FIRE_PERIOD);
        cycle.press_fire(Some((weapon_entity(), &mut weapon)), &mut ctx);
        cycle.release_fire();

        let cues = expire_fire_timer(&mut cycle, Some(&mut weapon), &ledger, &mut scheduler);

        assert!(cues.is_empty());
        assert_eq!(weapon.ammo(), 29);
        assert_eq!(cycle.state(), CombatState::Unoccupied);
        assert!(cycle.fire_timer().is_none());
    }

    #[test]
    fn test_last_round_triggers_auto_reload() {
        let mut scheduler = Scheduler::default();
        let mut cycle = CombatCycle::default();
        let mut weapon = smg(1);
        let ledger = CarriedAmmo::new(85, 120);

        let mut ctx = CombatCtx::new(shooter(), &mut scheduler, AUTO_FIRE_PERIOD);
        cycle.press_fire(Some((weapon_entity(), &mut weapon)), &mut ctx);
        assert_eq!(weapon.ammo(), 0);

        let cues = expire_fire_timer(&mut cycle, Some(&mut weapon), &ledger, &mut scheduler);

        assert_eq!(cycle.state(), CombatState::Reloading);
        assert_eq!(
            cues,
            vec![CombatCue::PlayMontage {
                montage: Montage::Reload,
                section: "Reload SMG".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_magazine_without_carried_ammo_stays_unoccupied() {
        let mut scheduler = Scheduler::default();
        let mut cycle = CombatCycle::default();
        let mut weapon = smg(1);
        let ledger = CarriedAmmo::new(0, 120);

        let mut ctx = CombatCtx::new(shooter(), &mut scheduler, AUTO_FIRE_PERIOD);
        cycle.press_fire(Some((weapon_entity(), &mut weapon)), &mut ctx);

        let cues = expire_fire_timer(&mut cycle, Some(&mut weapon), &ledger, &mut scheduler);

        assert!(cues.is_empty());
        assert_eq!(cycle.state(), CombatState::Unoccupied);
    }

    #[test]
    fn test_stale_fire_timer_is_ignored() {
        let mut scheduler = Scheduler::default();
        let mut cycle = CombatCycle::default();
        let mut weapon = smg(30);
        let ledger = CarriedAmmo::default();

        let mut ctx = CombatCtx::new(shooter(), &mut scheduler, AUTO_FIRE_PERIOD);
        cycle.press_fire(Some((weapon_entity(), &mut weapon)), &mut ctx);
        let stale = scheduler.schedule_once(shooter(), TimerKind::AutoFireReset, 0.0);

        let mut ctx = CombatCtx::new(shooter(), &mut scheduler, AUTO_FIRE_PERIOD);
        assert!(!cycle.on_fire_timer(stale, Some((weapon_entity(), &mut weapon)), &ledger, &mut ctx));
        assert_eq!(cycle.state(), CombatState::FireTimerInProgress);
    }

    #[test]
    fn test_reload_requires_unoccupied_and_carried_ammo() {
        let mut scheduler = Scheduler::default();
        let weapon = Weapon::new(&WeaponSpec::assault_rifle().with_ammo(10));

        // Нет патронов этого типа
        let mut cycle = CombatCycle::default();
        let mut ctx = CombatCtx::new(shooter(), &mut scheduler, AUTO_FIRE_PERIOD);
        assert!(!cycle.reload_weapon(Some((weapon_entity(), &weapon)), &CarriedAmmo::new(85, 0), &mut ctx));
        assert_eq!(cycle.state(), CombatState::Unoccupied);

        // Нет оружия
        assert!(!cycle.reload_weapon(None, &CarriedAmmo::default(), &mut ctx));

        // Ok → Reloading, повторный запрос отклонён
        assert!(cycle.reload_weapon(Some((weapon_entity(), &weapon)), &CarriedAmmo::default(), &mut ctx));
        assert_eq!(cycle.state(), CombatState::Reloading);
        assert!(!cycle.reload_weapon(Some((weapon_entity(), &weapon)), &CarriedAmmo::default(), &mut ctx));
        assert_eq!(ctx.cues.len(), 1);
    }

    #[test]
    fn test_finish_reloading_fills_magazine() {
        // 30 capacity, 10 в магазине, 50 carried → 30 / 40
        let mut scheduler = Scheduler::default();
        let mut cycle = CombatCycle::default();
        let mut weapon = Weapon::new(&WeaponSpec::assault_rifle().with_ammo(10));
        let mut ledger = CarriedAmmo::new(0, 50);

        let mut ctx = CombatCtx::new(shooter(), &mut scheduler, AUTO_FIRE_PERIOD);
        cycle.reload_weapon(Some((weapon_entity(), &weapon)), &ledger, &mut ctx);

        let transfer = cycle.finish_reloading(Some(&mut weapon), &mut ledger).unwrap();

        assert_eq!(weapon.ammo(), 30);
        assert_eq!(ledger.get(AmmoType::AssaultRifle), 30);
        assert_eq!(transfer.loaded, 20);
        assert_eq!(transfer.carried_left, 30);
        assert_eq!(cycle.state(), CombatState::Unoccupied);
    }

    #[test]
    fn test_finish_reloading_with_short_supply() {
        // 30 capacity, 0 в магазине, 5 carried → 5 / 0
        let mut scheduler = Scheduler::default();
        let mut cycle = CombatCycle::default();
        let mut weapon = smg(0);
        let mut ledger = CarriedAmmo::new(5, 120);

        let mut ctx = CombatCtx::new(shooter(), &mut scheduler, AUTO_FIRE_PERIOD);
        cycle.reload_weapon(Some((weapon_entity(), &weapon)), &ledger, &mut ctx);
        cycle.finish_reloading(Some(&mut weapon), &mut ledger);

        assert_eq!(weapon.ammo(), 5);
        assert_eq!(ledger.get(AmmoType::NineMm), 0);
        // Другой тип не тронут
        assert_eq!(ledger.get(AmmoType::AssaultRifle), 120);
    }

    #[test]
    fn test_reload_conserves_total_ammo() {
        let mut scheduler = Scheduler::default();

        for (loaded, carried) in [(0, 0), (0, 5), (10, 50), (29, 1), (30, 7), (12, 200)] {
            let mut cycle = CombatCycle::default();
            let mut weapon = smg(loaded);
            let mut ledger = CarriedAmmo::new(carried, 0);
            let before = weapon.ammo() + ledger.get(AmmoType::NineMm);

            let mut ctx = CombatCtx::new(shooter(), &mut scheduler, AUTO_FIRE_PERIOD);
            cycle.reload_weapon(Some((weapon_entity(), &weapon)), &ledger, &mut ctx);
            cycle.finish_reloading(Some(&mut weapon), &mut ledger);

            assert_eq!(weapon.ammo() + ledger.get(AmmoType::NineMm), before);
            assert!(weapon.ammo() <= weapon.magazine_capacity());
        }
    }

    #[test]
    fn test_finish_reloading_outside_reload_is_ignored() {
        let mut cycle = CombatCycle::default();
        let mut weapon = smg(10);
        let mut ledger = CarriedAmmo::default();

        assert!(cycle.finish_reloading(Some(&mut weapon), &mut ledger).is_none());
        assert_eq!(weapon.ammo(), 10);
        assert_eq!(ledger, CarriedAmmo::default());
    }

    #[test]
    fn test_finish_reloading_without_weapon_still_unblocks() {
        let mut scheduler = Scheduler::default();
        let mut cycle = CombatCycle::default();
        let weapon = smg(0);
        let mut ledger = CarriedAmmo::default();

        let mut ctx = CombatCtx::new(shooter(), &mut scheduler, AUTO_FIRE_PERIOD);
        cycle.reload_weapon(Some((weapon_entity(), &weapon)), &ledger, &mut ctx);

        // Оружие выбросили посреди reload
        assert!(cycle.finish_reloading(None, &mut ledger).is_none());
        assert_eq!(cycle.state(), CombatState::Unoccupied);
    }

    #[test]
    fn test_clip_grab_and_release() {
        let mut scheduler = Scheduler::default();
        let mut cycle = CombatCycle::default();
        let mut weapon = smg(0);
        let mut hand = HandAnchor::default();
        let clip = ClipBone {
            transform: Transform::from_xyz(0.1, 0.2, 0.3),
        };

        // Вне reload — пропуск
        assert!(!grab_clip(&cycle, Some(&mut weapon), Some(&clip), Some(&mut hand)));

        let mut ctx = CombatCtx::new(shooter(), &mut scheduler, AUTO_FIRE_PERIOD);
        cycle.reload_weapon(Some((weapon_entity(), &weapon)), &CarriedAmmo::default(), &mut ctx);

        assert!(grab_clip(&cycle, Some(&mut weapon), Some(&clip), Some(&mut hand)));
        assert!(weapon.is_moving_clip());
        assert!(hand.holding_clip);
        assert_eq!(hand.clip_transform, clip.transform);

        release_clip(Some(&mut weapon), Some(&mut hand));
        assert!(!weapon.is_moving_clip());
        assert!(!hand.holding_clip);
    }

    #[test]
    fn test_finish_reloading_puts_clip_back() {
        let mut scheduler = Scheduler::default();
        let mut cycle = CombatCycle::default();
        let mut weapon = smg(0);
        let mut hand = HandAnchor::default();
        let mut ledger = CarriedAmmo::default();

        let mut ctx = CombatCtx::new(shooter(), &mut scheduler, AUTO_FIRE_PERIOD);
        cycle.reload_weapon(Some((weapon_entity(), &weapon)), &ledger, &mut ctx);
        assert!(grab_clip(&cycle, Some(&mut weapon), None, Some(&mut hand)));

        // ReleaseClip пропущен: FinishReloading сам возвращает магазин
        cycle.finish_reloading(Some(&mut weapon), &mut ledger);
        assert!(!weapon.is_moving_clip());
        assert_eq!(weapon.ammo(), 30);
    }

    #[test]
    fn test_clip_grab_without_hand_anchor_is_skipped() {
        let mut scheduler = Scheduler::default();
        let mut cycle = CombatCycle::default();
        let mut weapon = smg(0);

        let mut ctx = CombatCtx::new(shooter(), &mut scheduler, AUTO_FIRE_PERIOD);
        cycle.reload_weapon(Some((weapon_entity(), &weapon)), &CarriedAmmo::default(), &mut ctx);

        assert!(!grab_clip(&cycle, Some(&mut weapon), None, None));
        assert!(!weapon.is_moving_clip());
    }
}
