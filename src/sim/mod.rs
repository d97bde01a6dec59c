//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` = one 60 Hz frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use difficulty::{LevelConfig, ai_speed, configure_level, enemy_count, player_speed};
pub use state::{
    ActivePowerUps, AiAgent, Bullet, FailReason, LevelSession, Player, PowerUp, PowerUpKind,
    TickOutcome,
};
pub use tick::{TickInput, tick};
