//! Retro Shooter - a top-down arena shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, per-tick step, collisions)
//! - `session`: Title/level/outcome state machine that drives the sim
//! - `save`: Level-progress persistence
//! - `presenter`: Rendering and input collaborator traits

pub mod presenter;
pub mod save;
pub mod session;
pub mod sim;

pub use save::{SaveData, SaveFile};
pub use session::{Session, SessionInput, SessionStatus};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_HZ: u64 = 60;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player and AI agents are square sprites of the same size
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const AI_SIZE: f32 = 50.0;

    /// Bullet speeds (pixels per tick)
    pub const BULLET_SPEED: f32 = 7.0;
    pub const AI_BULLET_SPEED: f32 = 5.0;
    /// Bullet collision box side length (centered on the bullet position)
    pub const BULLET_HITBOX: f32 = 10.0;
    /// Bullets are drawn as circles of this radius
    pub const BULLET_DRAW_RADIUS: f32 = 6.0;

    /// Powerup drop side length
    pub const POWERUP_SIZE: f32 = 20.0;
    /// Powerup effect duration (7 seconds)
    pub const POWERUP_DURATION_TICKS: u64 = 7 * TICK_HZ;
    /// Chance a destroyed AI drops a powerup
    pub const POWERUP_DROP_CHANCE: f64 = 0.3;

    /// Minimum ticks between player shots (0.25 seconds)
    pub const SHOT_COOLDOWN_TICKS: u64 = TICK_HZ / 4;
    /// Per-AI, per-tick shot chance is 1 in this
    pub const AI_FIRE_CHANCE: u32 = 80;

    /// Kills required to clear a level
    pub const KILL_GOAL: u32 = 10;
    /// Clearing this level wins the game
    pub const FINAL_LEVEL: u32 = 10;

    /// AI respawn row and horizontal range after being hit
    pub const AI_RESPAWN_Y: f32 = 50.0;
    pub const AI_RESPAWN_X_MIN: f32 = 50.0;
    pub const AI_RESPAWN_X_MAX: f32 = ARENA_WIDTH - AI_SIZE;

    /// Player start position (top-left corner)
    pub const PLAYER_START_X: f32 = ARENA_WIDTH / 2.0;
    pub const PLAYER_START_Y: f32 = ARENA_HEIGHT - 80.0;
}
