//! Game state and core simulation types
//!
//! Entity records are plain data; the per-level mutable state lives in
//! [`LevelSession`], which also owns the seeded RNG so every random draw
//! in a level is reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::difficulty::LevelConfig;
use crate::consts::*;

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
}

impl Player {
    pub fn at_start() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::square(self.pos, PLAYER_SIZE)
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }
}

/// A hunter agent. Never destroyed - relocated to the top row when hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiAgent {
    /// Top-left corner
    pub pos: Vec2,
}

impl AiAgent {
    /// Spawn at a random position on the top row
    pub fn spawn_top(rng: &mut impl Rng) -> Self {
        Self {
            pos: random_top_position(rng),
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::square(self.pos, AI_SIZE)
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }
}

/// Random top-row position used for AI spawns and respawns
pub fn random_top_position(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.random_range(AI_RESPAWN_X_MIN..=AI_RESPAWN_X_MAX),
        AI_RESPAWN_Y,
    )
}

/// A projectile, player- or AI-owned depending on which list it sits in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    /// Center position
    pub pos: Vec2,
    /// Displacement applied each tick
    pub vel: Vec2,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// 10x10 collision box centered on the bullet
    pub fn hitbox(&self) -> Aabb {
        Aabb::centered_square(self.pos, BULLET_HITBOX)
    }
}

/// Transient powerup effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    /// Blocks AI bullets
    Shield,
    /// 1.5x player movement speed
    Speed,
    /// Fire 8 bullets in all compass directions at once
    Multishot,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::Shield,
        PowerUpKind::Speed,
        PowerUpKind::Multishot,
    ];

    /// Draw color (RGB)
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            PowerUpKind::Shield => (0, 255, 255),
            PowerUpKind::Speed => (255, 255, 0),
            PowerUpKind::Multishot => (255, 0, 255),
        }
    }

    /// How long the effect lasts once picked up
    pub fn duration_ticks(&self) -> u64 {
        POWERUP_DURATION_TICKS
    }

    /// HUD label
    pub fn label(&self) -> &'static str {
        match self {
            PowerUpKind::Shield => "shield",
            PowerUpKind::Speed => "speed",
            PowerUpKind::Multishot => "multishot",
        }
    }
}

/// A powerup drop waiting to be collected
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    /// Top-left corner
    pub pos: Vec2,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, pos: Vec2) -> Self {
        Self { kind, pos }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::square(self.pos, POWERUP_SIZE)
    }
}

/// Per-kind absolute expiry ticks. Re-pickup overwrites, never stacks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActivePowerUps {
    shield_until: Option<u64>,
    speed_until: Option<u64>,
    multishot_until: Option<u64>,
}

impl ActivePowerUps {
    fn slot(&self, kind: PowerUpKind) -> Option<u64> {
        match kind {
            PowerUpKind::Shield => self.shield_until,
            PowerUpKind::Speed => self.speed_until,
            PowerUpKind::Multishot => self.multishot_until,
        }
    }

    fn slot_mut(&mut self, kind: PowerUpKind) -> &mut Option<u64> {
        match kind {
            PowerUpKind::Shield => &mut self.shield_until,
            PowerUpKind::Speed => &mut self.speed_until,
            PowerUpKind::Multishot => &mut self.multishot_until,
        }
    }

    /// Start (or restart) an effect at tick `now`
    pub fn activate(&mut self, kind: PowerUpKind, now: u64) {
        *self.slot_mut(kind) = Some(now + kind.duration_ticks());
    }

    pub fn is_active(&self, kind: PowerUpKind, now: u64) -> bool {
        self.slot(kind).is_some_and(|until| now < until)
    }

    /// Ticks left on an active effect, for the HUD countdown
    pub fn remaining_ticks(&self, kind: PowerUpKind, now: u64) -> Option<u64> {
        self.slot(kind)
            .filter(|&until| now < until)
            .map(|until| until - now)
    }
}

/// Why a level was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailReason {
    /// Time budget ran out short of the kill goal
    Timeout,
    /// Hit by an AI bullet without an active shield
    Killed,
    /// An AI closed to contact
    Captured,
}

impl FailReason {
    /// Message shown on the game-over card
    pub fn message(&self) -> &'static str {
        match self {
            FailReason::Timeout => "You failed the objective",
            FailReason::Killed => "You were killed",
            FailReason::Captured => "You were captured",
        }
    }
}

/// Result of one simulation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Won,
    Failed(FailReason),
}

/// All mutable state for one level attempt.
///
/// Owned exclusively by the session state machine and handed `&mut` into
/// [`super::tick`] once per frame. Everything here is rebuilt from
/// scratch when a level starts.
#[derive(Debug, Clone)]
pub struct LevelSession {
    /// Level number (1-10)
    pub level: u32,
    /// Difficulty knobs for this level
    pub config: LevelConfig,
    /// Seed this session's RNG started from
    pub seed: u64,
    /// AIs destroyed so far this level
    pub kills: u32,
    /// Ticks since the level started
    pub ticks: u64,
    /// Tick of the last player shot, for the fire cooldown
    pub last_shot_tick: Option<u64>,
    pub player: Player,
    pub ais: Vec<AiAgent>,
    pub player_bullets: Vec<Bullet>,
    pub ai_bullets: Vec<Bullet>,
    pub powerups: Vec<PowerUp>,
    pub active: ActivePowerUps,
    /// All randomness for the level flows through this
    pub rng: Pcg32,
}

impl LevelSession {
    /// Start a level: fresh collections, player at the start position,
    /// enemies on the top row.
    pub fn new(level: u32, config: LevelConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ais = (0..config.enemy_count)
            .map(|_| AiAgent::spawn_top(&mut rng))
            .collect();
        Self {
            level,
            config,
            seed,
            kills: 0,
            ticks: 0,
            last_shot_tick: None,
            player: Player::at_start(),
            ais,
            player_bullets: Vec::new(),
            ai_bullets: Vec::new(),
            powerups: Vec::new(),
            active: ActivePowerUps::default(),
            rng,
        }
    }

    /// Whole seconds elapsed this level
    pub fn elapsed_secs(&self) -> i32 {
        (self.ticks / TICK_HZ) as i32
    }

    /// Seconds left on the budget; negative once overdrawn
    pub fn time_remaining(&self) -> i32 {
        self.config.time_budget - self.elapsed_secs()
    }

    /// Whether the player can fire this tick
    pub fn cooldown_ready(&self) -> bool {
        self.last_shot_tick
            .is_none_or(|last| self.ticks - last >= SHOT_COOLDOWN_TICKS)
    }
}
