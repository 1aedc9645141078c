//! Camera zoom: FOV плавно идёт к zoomed (aiming) или default

use bevy::prelude::*;

use crate::config::CameraConfig;
use crate::shared::finterp_to;

#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CameraZoom {
    pub default_fov: f32,
    pub zoomed_fov: f32,
    pub interp_speed: f32,
    current_fov: f32,
    /// Required component Shooter'а: FOV возьмутся из config при spawn
    pending_config: bool,
}

impl Default for CameraZoom {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl CameraZoom {
    /// Старт без зума (current = default)
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            default_fov: config.default_fov,
            zoomed_fov: config.zoomed_fov,
            interp_speed: config.zoom_interp_speed,
            current_fov: config.default_fov,
            pending_config: false,
        }
    }

    /// Placeholder до применения `ShooterConfig`
    pub fn pending_config() -> Self {
        Self {
            pending_config: true,
            ..Self::default()
        }
    }

    pub fn is_pending_config(&self) -> bool {
        self.pending_config
    }

    pub fn fov(&self) -> f32 {
        self.current_fov
    }

    pub fn advance(&mut self, aiming: bool, dt: f32) {
        let target = if aiming { self.zoomed_fov } else { self.default_fov };
        self.current_fov = finterp_to(self.current_fov, target, dt, self.interp_speed);
    }
}
