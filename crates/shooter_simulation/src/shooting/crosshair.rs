//! Crosshair spread: четыре интерполируемых фактора → multiplier
//!
//! `multiplier = 1 + velocity + in_air - aim + shooting`

use bevy::prelude::*;

use crate::components::MotionSignals;
use crate::config::CrosshairConfig;
use crate::schedules::{Scheduler, TimerHandle, TimerKind};
use crate::shared::finterp_to;

/// Что влияет на разброс в этом tick'е
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpreadInputs {
    pub moving: bool,
    pub in_air: bool,
    pub aiming: bool,
}

impl SpreadInputs {
    /// "Moving" = есть movement input (скольжение без input'а не считается)
    pub fn from_signals(signals: &MotionSignals, aiming: bool) -> Self {
        Self {
            moving: signals.moving_input,
            in_air: signals.in_air,
            aiming,
        }
    }
}

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CrosshairSpread {
    velocity_factor: f32,
    in_air_factor: f32,
    aim_factor: f32,
    shooting_factor: f32,
    multiplier: f32,
    /// Окно "только что выстрелил" (0.05 sec после каждого выстрела)
    firing_bullet: bool,
    shot_timer: Option<TimerHandle>,
}

impl Default for CrosshairSpread {
    fn default() -> Self {
        Self {
            velocity_factor: 0.0,
            in_air_factor: 0.0,
            aim_factor: 0.0,
            shooting_factor: 0.0,
            multiplier: 1.0,
            firing_bullet: false,
            shot_timer: None,
        }
    }
}

impl CrosshairSpread {
    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    pub fn is_firing_bullet(&self) -> bool {
        self.firing_bullet
    }

    pub fn velocity_factor(&self) -> f32 {
        self.velocity_factor
    }

    pub fn in_air_factor(&self) -> f32 {
        self.in_air_factor
    }

    pub fn aim_factor(&self) -> f32 {
        self.aim_factor
    }

    pub fn shooting_factor(&self) -> f32 {
        self.shooting_factor
    }

    /// Один tick интерполяции всех факторов
    pub fn advance(&mut self, inputs: SpreadInputs, dt: f32, config: &CrosshairConfig) {
        let velocity_target = if inputs.moving { config.moving_spread } else { 0.0 };
        self.velocity_factor = finterp_to(self.velocity_factor, velocity_target, dt, config.velocity_interp_speed);

        // В воздухе раскрывается медленнее, чем схлопывается при приземлении
        self.in_air_factor = if inputs.in_air {
            finterp_to(self.in_air_factor, config.in_air_spread, dt, config.in_air_rise_speed)
        } else {
            finterp_to(self.in_air_factor, 0.0, dt, config.in_air_fall_speed)
        };

        let aim_target = if inputs.aiming { config.aim_tightening } else { 0.0 };
        self.aim_factor = finterp_to(self.aim_factor, aim_target, dt, config.aim_interp_speed);

        self.shooting_factor = if self.firing_bullet {
            finterp_to(self.shooting_factor, config.shooting_spread, dt, config.shooting_rise_speed)
        } else {
            finterp_to(self.shooting_factor, 0.0, dt, config.shooting_fall_speed)
        };

        self.multiplier = 1.0 + self.velocity_factor + self.in_air_factor - self.aim_factor + self.shooting_factor;
    }

    /// Выстрел: открыть shot window (предыдущий таймер заменяется)
    pub fn start_shot(&mut self, owner: Entity, scheduler: &mut Scheduler, window: f32) {
        self.firing_bullet = true;

        if let Some(previous) = self.shot_timer.take() {
            scheduler.cancel(previous);
        }
        self.shot_timer = Some(scheduler.schedule_once(owner, TimerKind::CrosshairShotWindow, window));
    }

    /// Shot window истёк. Чужой/устаревший handle игнорируется.
    pub fn on_shot_timer(&mut self, handle: TimerHandle) -> bool {
        if self.shot_timer != Some(handle) {
            return false;
        }
        self.shot_timer = None;
        self.firing_bullet = false;
        true
    }
}
