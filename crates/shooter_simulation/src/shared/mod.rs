//! Shared domain — cross-cutting утилиты
//!
//! Содержит:
//! - Interpolation (finterp_to, normalize_axis, normalized_delta_yaw)
//! - Collision groups (rapier memberships/filters для items и trace)

pub mod collision_layers;
pub mod interp;

pub use interp::*;
