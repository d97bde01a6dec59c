//! Session state machine
//!
//! Sequences title -> level intro -> play -> outcome across the ten
//! levels, owns the save file, and drives the presenter. The frontend
//! calls [`Session::advance`] once per 60 Hz frame with the polled input;
//! frame pacing itself belongs to the frontend.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::{FINAL_LEVEL, TICK_HZ};
use crate::presenter::{FrameView, MenuOption, OutcomeView, Presenter};
use crate::save::SaveFile;
use crate::sim::{self, FailReason, LevelSession, TickInput, TickOutcome};

/// Level intro card duration (2 seconds)
pub const LEVEL_INTRO_TICKS: u32 = 2 * TICK_HZ as u32;
/// Game over card duration (3 seconds)
pub const GAME_OVER_TICKS: u32 = 3 * TICK_HZ as u32;
/// Victory card duration (4 seconds)
pub const VICTORY_TICKS: u32 = 4 * TICK_HZ as u32;

/// One frame's worth of input for the whole session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionInput {
    /// Held gameplay keys, forwarded into the simulation
    pub play: TickInput,
    /// Menu navigation (press events)
    pub menu_up: bool,
    pub menu_down: bool,
    pub confirm: bool,
    /// Quit request, honored at tick boundaries
    pub quit: bool,
}

/// Whether the outer loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Exit,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Title,
    LevelIntro { remaining: u32 },
    Playing,
    Outcome { view: OutcomeView, remaining: u32 },
}

/// The game session: current phase, level progression, persistence.
pub struct Session {
    seed: u64,
    /// Budget coin-flips; level sims carry their own derived RNGs
    rng: Pcg32,
    save: SaveFile,
    phase: Phase,
    /// Menu entries computed when the title screen is entered
    options: Vec<MenuOption>,
    selected: usize,
    level: u32,
    /// Previous level's time budget, feeding the scaler's recurrence
    time_budget: i32,
    level_state: Option<LevelSession>,
}

impl Session {
    pub fn new(seed: u64, save: SaveFile) -> Self {
        let mut session = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            save,
            phase: Phase::Title,
            options: Vec::new(),
            selected: 0,
            level: 1,
            time_budget: 30,
            level_state: None,
        };
        session.enter_title();
        session
    }

    /// Level currently being attempted (or shown at the title)
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Live simulation state while a level is underway
    pub fn level_state(&self) -> Option<&LevelSession> {
        self.level_state.as_ref()
    }

    pub fn at_title(&self) -> bool {
        matches!(self.phase, Phase::Title)
    }

    /// Run one frame of the state machine
    pub fn advance(&mut self, input: &SessionInput, presenter: &mut dyn Presenter) -> SessionStatus {
        // Quit only lands between ticks; saves are already on disk
        if input.quit {
            log::info!("Quit requested");
            return SessionStatus::Exit;
        }

        match self.phase {
            Phase::Title => {
                let len = self.options.len();
                if input.menu_up {
                    self.selected = (self.selected + len - 1) % len;
                }
                if input.menu_down {
                    self.selected = (self.selected + 1) % len;
                }
                if input.confirm {
                    match self.options[self.selected] {
                        MenuOption::Continue => {
                            let level = self.save.load().map_or(1, |data| data.level);
                            self.start_run(level);
                        }
                        MenuOption::NewGame => {
                            self.save.clear();
                            self.start_run(1);
                        }
                        MenuOption::Quit => return SessionStatus::Exit,
                    }
                } else {
                    presenter.render_menu(&self.options, self.selected);
                }
                SessionStatus::Running
            }

            Phase::LevelIntro { remaining } => {
                presenter.render_level_intro(self.level);
                self.phase = if remaining <= 1 {
                    Phase::Playing
                } else {
                    Phase::LevelIntro {
                        remaining: remaining - 1,
                    }
                };
                SessionStatus::Running
            }

            Phase::Playing => {
                let Some(state) = self.level_state.as_mut() else {
                    self.enter_title();
                    return SessionStatus::Running;
                };
                match sim::tick(state, &input.play) {
                    TickOutcome::Continue => {
                        presenter.draw_frame(&FrameView::from_session(state));
                    }
                    TickOutcome::Won => self.handle_win(),
                    TickOutcome::Failed(reason) => self.handle_failure(reason),
                }
                SessionStatus::Running
            }

            Phase::Outcome { view, remaining } => {
                presenter.render_outcome(&view);
                if remaining <= 1 {
                    self.enter_title();
                } else {
                    self.phase = Phase::Outcome {
                        view,
                        remaining: remaining - 1,
                    };
                }
                SessionStatus::Running
            }
        }
    }

    /// Back to the title screen; menu entries reflect the save on disk
    fn enter_title(&mut self) {
        self.level_state = None;
        self.selected = 0;
        self.options = if self.save.exists() {
            vec![MenuOption::Continue, MenuOption::NewGame, MenuOption::Quit]
        } else {
            vec![MenuOption::NewGame, MenuOption::Quit]
        };
        self.phase = Phase::Title;
    }

    /// Begin a run at the given level. The budget recurrence restarts
    /// from the 30s baseline whenever a run is entered from the title.
    fn start_run(&mut self, level: u32) {
        self.level = level;
        self.time_budget = 30;
        self.start_level();
    }

    /// Configure and enter the current level
    fn start_level(&mut self) {
        let config = sim::configure_level(self.level, self.time_budget, &mut self.rng);
        self.time_budget = config.time_budget;
        let level_seed = (self.level as u64)
            .wrapping_mul(2654435761)
            .wrapping_add(self.seed);
        log::info!(
            "Level {} start: {}s budget, {} enemies, ai speed {:.2}",
            self.level,
            config.time_budget,
            config.enemy_count,
            config.ai_speed
        );
        self.level_state = Some(LevelSession::new(self.level, config, level_seed));
        self.phase = Phase::LevelIntro {
            remaining: LEVEL_INTRO_TICKS,
        };
    }

    fn handle_win(&mut self) {
        if self.level >= FINAL_LEVEL {
            log::info!("Level {} cleared - full victory", self.level);
            self.save.clear();
            self.level_state = None;
            self.phase = Phase::Outcome {
                view: OutcomeView::Victory,
                remaining: VICTORY_TICKS,
            };
        } else {
            log::info!("Level {} cleared", self.level);
            // No save write on intermediate wins
            self.level += 1;
            self.start_level();
        }
    }

    fn handle_failure(&mut self, reason: FailReason) {
        log::info!("Level {} failed: {}", self.level, reason.message());
        self.save.write(self.level);
        self.level_state = None;
        self.phase = Phase::Outcome {
            view: OutcomeView::GameOver(reason),
            remaining: GAME_OVER_TICKS,
        };
    }
}
