//! Tuning конфиг симуляции (shooter.toml)
//!
//! Все секции опциональны: отсутствующие поля берут значения по умолчанию.
//! Дистанции и скорости — в метрах (Bevy world units), углы — в градусах.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Ошибки загрузки конфига
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Корневой конфиг (Resource)
#[derive(Resource, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShooterConfig {
    pub combat: CombatConfig,
    pub crosshair: CrosshairConfig,
    pub camera: CameraConfig,
    pub look: LookConfig,
    pub movement: MovementConfig,
    pub animation: AnimationConfig,
    pub throw: ThrowConfig,
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Cooldown между выстрелами (sec)
    pub auto_fire_period: f32,
    pub starting_9mm_ammo: u32,
    pub starting_ar_ammo: u32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            auto_fire_period: 0.1,
            starting_9mm_ammo: 85,
            starting_ar_ammo: 120,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairConfig {
    pub moving_spread: f32,
    pub velocity_interp_speed: f32,
    pub in_air_spread: f32,
    pub in_air_rise_speed: f32,
    pub in_air_fall_speed: f32,
    /// Сужение при прицеливании (вычитается из multiplier)
    pub aim_tightening: f32,
    pub aim_interp_speed: f32,
    pub shooting_spread: f32,
    pub shooting_rise_speed: f32,
    pub shooting_fall_speed: f32,
    /// Длина окна "только что выстрелил" (sec)
    pub shot_window: f32,
}

impl Default for CrosshairConfig {
    fn default() -> Self {
        Self {
            moving_spread: 1.5,
            velocity_interp_speed: 20.0,
            in_air_spread: 2.25,
            in_air_rise_speed: 20.0,
            in_air_fall_speed: 30.0,
            aim_tightening: 0.6,
            aim_interp_speed: 30.0,
            shooting_spread: 0.3,
            shooting_rise_speed: 60.0,
            shooting_fall_speed: 5.0,
            shot_window: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub default_fov: f32,
    pub zoomed_fov: f32,
    pub zoom_interp_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            default_fov: 90.0,
            zoomed_fov: 35.0,
            zoom_interp_speed: 35.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    /// Gamepad rates (deg/sec)
    pub hip_turn_rate: f32,
    pub hip_look_up_rate: f32,
    pub aiming_turn_rate: f32,
    pub aiming_look_up_rate: f32,
    /// Mouse sensitivity scale
    pub mouse_hip_turn_rate: f32,
    pub mouse_hip_look_up_rate: f32,
    pub mouse_aiming_turn_rate: f32,
    pub mouse_aiming_look_up_rate: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            hip_turn_rate: 90.0,
            hip_look_up_rate: 90.0,
            aiming_turn_rate: 20.0,
            aiming_look_up_rate: 20.0,
            mouse_hip_turn_rate: 1.0,
            mouse_hip_look_up_rate: 1.0,
            mouse_aiming_turn_rate: 0.2,
            mouse_aiming_look_up_rate: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub base_movement_speed: f32,
    pub crouch_movement_speed: f32,
    pub standing_capsule_half_height: f32,
    pub crouching_capsule_half_height: f32,
    pub base_ground_friction: f32,
    pub crouching_ground_friction: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            base_movement_speed: 6.5,
            crouch_movement_speed: 3.0,
            standing_capsule_half_height: 0.88,
            crouching_capsule_half_height: 0.44,
            base_ground_friction: 2.0,
            crouching_ground_friction: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub lean_interp_speed: f32,
    pub max_root_yaw_offset: f32,
    pub max_lean_yaw_delta: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            lean_interp_speed: 10.0,
            max_root_yaw_offset: 90.0,
            max_lean_yaw_delta: 90.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrowConfig {
    /// Модуль импульса при броске (N·s)
    pub impulse_strength: f32,
    /// Через сколько упавшее оружие снова станет Idle (sec)
    pub settle_time: f32,
    /// Наклон направления броска вокруг forward оси
    pub tilt_degrees: f32,
    /// Случайный разброс вокруг up оси: [-max, max]
    pub max_random_yaw_degrees: f32,
}

impl Default for ThrowConfig {
    fn default() -> Self {
        Self {
            impulse_strength: 20.0,
            settle_time: 3.0,
            tilt_degrees: -10.0,
            max_random_yaw_degrees: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Длина crosshair ray (beam end при промахе)
    pub trace_distance: f32,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self { trace_distance: 500.0 }
    }
}

impl ShooterConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: ShooterConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("combat.auto_fire_period", self.combat.auto_fire_period)?;
        positive("crosshair.shot_window", self.crosshair.shot_window)?;
        positive("throw.settle_time", self.throw.settle_time)?;
        positive("trace.trace_distance", self.trace.trace_distance)?;

        let rates = [
            ("crosshair.velocity_interp_speed", self.crosshair.velocity_interp_speed),
            ("crosshair.in_air_rise_speed", self.crosshair.in_air_rise_speed),
            ("crosshair.in_air_fall_speed", self.crosshair.in_air_fall_speed),
            ("crosshair.aim_interp_speed", self.crosshair.aim_interp_speed),
            ("crosshair.shooting_rise_speed", self.crosshair.shooting_rise_speed),
            ("crosshair.shooting_fall_speed", self.crosshair.shooting_fall_speed),
            ("camera.zoom_interp_speed", self.camera.zoom_interp_speed),
            ("animation.lean_interp_speed", self.animation.lean_interp_speed),
        ];
        for (field, value) in rates {
            non_negative(field, value)?;
        }

        if self.camera.zoomed_fov >= self.camera.default_fov {
            return Err(ConfigError::Invalid {
                field: "camera.zoomed_fov",
                reason: format!(
                    "zoomed FOV {} must be narrower than default FOV {}",
                    self.camera.zoomed_fov, self.camera.default_fov
                ),
            });
        }

        non_negative("animation.max_root_yaw_offset", self.animation.max_root_yaw_offset)?;
        non_negative("animation.max_lean_yaw_delta", self.animation.max_lean_yaw_delta)?;

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be > 0, got {}", value),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be >= 0, got {}", value),
        })
    }
}
