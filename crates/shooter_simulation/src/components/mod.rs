//! ECS Components персонажа
//!
//! Организация:
//! - actor: Shooter marker + сигналы движка (MotionSignals, AimRay, CrosshairHit, AnimCurves, HandAnchor)
//! - attachment: item → socket персонажа (Attachment)
//!
//! Доменные компоненты (CombatCycle, CrosshairSpread, TurnInPlace, ...) живут в своих модулях.

pub mod actor;
pub mod attachment;

// Re-exports для удобного импорта
pub use actor::*;
pub use attachment::*;
