//! Presentation and input collaborator traits
//!
//! The core never draws or polls hardware itself: a frontend implements
//! [`Presenter`] and [`InputSource`] and the session hands it read-only
//! view data at defined points. Presenters must not mutate core state,
//! which the borrowed view types enforce.

use crate::consts::TICK_HZ;
use crate::session::SessionInput;
use crate::sim::{AiAgent, Bullet, FailReason, LevelSession, Player, PowerUp, PowerUpKind};

/// Title-screen menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// Resume the saved level (shown only when a save exists)
    Continue,
    /// Delete the save and start at level 1
    NewGame,
    Quit,
}

impl MenuOption {
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Continue => "CONTINUE",
            MenuOption::NewGame => "NEW GAME",
            MenuOption::Quit => "QUIT",
        }
    }
}

/// HUD numbers for the in-level overlay
#[derive(Debug, Clone, PartialEq)]
pub struct HudView {
    pub kills: u32,
    pub kill_goal: u32,
    /// Seconds left, clamped at zero for display
    pub time_left_secs: i32,
    /// Active effects and their remaining whole seconds
    pub active_powerups: Vec<(PowerUpKind, u64)>,
}

/// One frame of drawable state, borrowed from the live session
#[derive(Debug)]
pub struct FrameView<'a> {
    pub player: &'a Player,
    pub ais: &'a [AiAgent],
    pub player_bullets: &'a [Bullet],
    pub ai_bullets: &'a [Bullet],
    pub powerups: &'a [PowerUp],
    pub hud: HudView,
}

impl<'a> FrameView<'a> {
    pub fn from_session(session: &'a LevelSession) -> Self {
        let active_powerups = PowerUpKind::ALL
            .iter()
            .filter_map(|&kind| {
                session
                    .active
                    .remaining_ticks(kind, session.ticks)
                    .map(|ticks| (kind, ticks / TICK_HZ))
            })
            .collect();
        Self {
            player: &session.player,
            ais: &session.ais,
            player_bullets: &session.player_bullets,
            ai_bullets: &session.ai_bullets,
            powerups: &session.powerups,
            hud: HudView {
                kills: session.kills,
                kill_goal: session.config.kill_goal,
                time_left_secs: session.time_remaining().max(0),
                active_powerups,
            },
        }
    }
}

/// End-of-run cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeView {
    /// Level lost; carries the reason shown under "GAME OVER"
    GameOver(FailReason),
    /// All ten levels cleared
    Victory,
}

/// Drawing collaborator. Called at defined points by the session; must
/// not mutate core state.
pub trait Presenter {
    fn draw_frame(&mut self, frame: &FrameView<'_>);
    fn render_menu(&mut self, options: &[MenuOption], selected: usize);
    fn render_level_intro(&mut self, level: u32);
    fn render_outcome(&mut self, outcome: &OutcomeView);
}

/// Input collaborator: the currently-held key set, polled once per tick.
/// Menu navigation and confirm are expected to be press events (reported
/// once per keypress), matching the original's event handling.
pub trait InputSource {
    fn poll(&mut self) -> SessionInput;
}
