//! Fixed timestep simulation tick
//!
//! Advances one level by exactly one 60 Hz tick. The step order below is
//! load-bearing: outcome checks run before any mutation, the player acts
//! before the AIs, and player bullets resolve before AI bullets so a kill
//! and a death cannot land on the same tick out of order.

use glam::Vec2;
use rand::Rng;

use super::collision::point_in_arena;
use super::state::{
    Bullet, FailReason, LevelSession, PowerUp, PowerUpKind, TickOutcome, random_top_position,
};
use crate::consts::*;

/// Pressed-key set for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Movement keys (WASD in the reference frontend)
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    /// Directional fire keys (arrows in the reference frontend)
    pub fire_up: bool,
    pub fire_down: bool,
    pub fire_left: bool,
    pub fire_right: bool,
}

impl TickInput {
    pub fn any_fire(&self) -> bool {
        self.fire_up || self.fire_down || self.fire_left || self.fire_right
    }

    /// Single-shot direction with fixed priority: up, down, left, right
    pub fn fire_direction(&self) -> Option<Vec2> {
        if self.fire_up {
            Some(Vec2::new(0.0, -1.0))
        } else if self.fire_down {
            Some(Vec2::new(0.0, 1.0))
        } else if self.fire_left {
            Some(Vec2::new(-1.0, 0.0))
        } else if self.fire_right {
            Some(Vec2::new(1.0, 0.0))
        } else {
            None
        }
    }
}

/// Multishot spread: compass directions plus diagonals, 7 px/tick per axis
/// (diagonals are deliberately not normalized, as in the original game)
const MULTISHOT_DIRS: [Vec2; 8] = [
    Vec2::new(0.0, -1.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(-1.0, -1.0),
    Vec2::new(1.0, -1.0),
    Vec2::new(-1.0, 1.0),
    Vec2::new(1.0, 1.0),
];

/// Advance the level by one tick
pub fn tick(session: &mut LevelSession, input: &TickInput) -> TickOutcome {
    // 1. Win check first: a cleared level wins even with the clock at zero
    if session.kills >= session.config.kill_goal {
        return TickOutcome::Won;
    }

    // 2. Out of time short of the goal
    if session.time_remaining() <= 0 {
        return TickOutcome::Failed(FailReason::Timeout);
    }

    session.ticks += 1;
    let now = session.ticks;

    // 3. Effect flags for this tick
    let shield_active = session.active.is_active(PowerUpKind::Shield, now);
    let speed_active = session.active.is_active(PowerUpKind::Speed, now);
    let multishot_active = session.active.is_active(PowerUpKind::Multishot, now);

    // 4. Player movement, clamped to the arena
    let speed = session.config.player_speed * if speed_active { 1.5 } else { 1.0 };
    let pos = &mut session.player.pos;
    if input.move_up {
        pos.y -= speed;
    }
    if input.move_down {
        pos.y += speed;
    }
    if input.move_left {
        pos.x -= speed;
    }
    if input.move_right {
        pos.x += speed;
    }
    pos.x = pos.x.clamp(0.0, ARENA_WIDTH - PLAYER_SIZE);
    pos.y = pos.y.clamp(0.0, ARENA_HEIGHT - PLAYER_SIZE);

    // 5. Fire control. The cooldown stamp is only consumed when a shot
    // actually leaves the ship.
    if session.cooldown_ready() {
        let origin = session.player.center();
        if multishot_active {
            if input.any_fire() {
                session.last_shot_tick = Some(now);
                for dir in MULTISHOT_DIRS {
                    session
                        .player_bullets
                        .push(Bullet::new(origin, dir * BULLET_SPEED));
                }
            }
        } else if let Some(dir) = input.fire_direction() {
            session.last_shot_tick = Some(now);
            session
                .player_bullets
                .push(Bullet::new(origin, dir * BULLET_SPEED));
        }
    }

    // 6. AIs seek the player and occasionally snipe at it
    let player_center = session.player.center();
    for i in 0..session.ais.len() {
        let to_player = player_center - session.ais[i].center();
        let dist = to_player.length();
        if dist != 0.0 {
            session.ais[i].pos += to_player / dist * session.config.ai_speed;
        }
        if session.rng.random_ratio(1, AI_FIRE_CHANCE) {
            let origin = session.ais[i].center();
            let aim = player_center - origin;
            let aim_dist = aim.length();
            if aim_dist != 0.0 {
                session
                    .ai_bullets
                    .push(Bullet::new(origin, aim / aim_dist * AI_BULLET_SPEED));
            }
        }
    }

    // 7. Player bullets: advance, cull, then resolve hits in AI list
    // order. A hit relocates the AI immediately, so later bullets this
    // tick see the new position and cannot double-count the kill.
    let mut i = 0;
    while i < session.player_bullets.len() {
        let bullet = &mut session.player_bullets[i];
        bullet.pos += bullet.vel;
        let hitbox = bullet.hitbox();
        if !point_in_arena(bullet.pos, ARENA_WIDTH, ARENA_HEIGHT) {
            session.player_bullets.remove(i);
            continue;
        }
        let mut hit = false;
        for ai in session.ais.iter_mut() {
            if hitbox.intersects(&ai.rect()) {
                session.kills += 1;
                if session.rng.random_bool(POWERUP_DROP_CHANCE) {
                    let kind = PowerUpKind::ALL
                        [session.rng.random_range(0..PowerUpKind::ALL.len())];
                    session.powerups.push(PowerUp::new(kind, ai.pos));
                }
                ai.pos = random_top_position(&mut session.rng);
                hit = true;
                break;
            }
        }
        if hit {
            session.player_bullets.remove(i);
        } else {
            i += 1;
        }
    }

    // 8. AI bullets: a touch is lethal unless the shield eats it
    let player_rect = session.player.rect();
    let mut i = 0;
    while i < session.ai_bullets.len() {
        let bullet = &mut session.ai_bullets[i];
        bullet.pos += bullet.vel;
        let hitbox = bullet.hitbox();
        let bullet_pos = bullet.pos;
        if hitbox.intersects(&player_rect) {
            if !shield_active {
                return TickOutcome::Failed(FailReason::Killed);
            }
            session.ai_bullets.remove(i);
            continue;
        }
        if !point_in_arena(bullet_pos, ARENA_WIDTH, ARENA_HEIGHT) {
            session.ai_bullets.remove(i);
            continue;
        }
        i += 1;
    }

    // 9. Contact with an AI is capture, shield or not
    for ai in &session.ais {
        if ai.rect().intersects(&player_rect) {
            return TickOutcome::Failed(FailReason::Captured);
        }
    }

    // 10. Powerup pickup: consume the drop, restart its effect clock
    let mut i = 0;
    while i < session.powerups.len() {
        if session.powerups[i].rect().intersects(&player_rect) {
            let kind = session.powerups[i].kind;
            session.active.activate(kind, now);
            session.powerups.remove(i);
        } else {
            i += 1;
        }
    }

    TickOutcome::Continue
}
