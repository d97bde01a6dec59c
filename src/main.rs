//! Retro Shooter entry point
//!
//! A windowed build wires real `Presenter`/`InputSource` implementations
//! to `Session::advance` at 60 Hz. Until one is connected, this binary
//! runs the full session headlessly with a scripted pilot, which doubles
//! as a smoke check of the core loop.

use retro_shooter::consts::TICK_HZ;
use retro_shooter::presenter::{FrameView, InputSource, MenuOption, OutcomeView, Presenter};
use retro_shooter::save::SaveFile;
use retro_shooter::session::{Session, SessionInput, SessionStatus};
use retro_shooter::sim::TickInput;

/// Presenter that logs milestones instead of drawing
#[derive(Default)]
struct HeadlessPresenter {
    frames: u64,
    last_intro: Option<u32>,
    last_outcome: Option<OutcomeView>,
}

impl Presenter for HeadlessPresenter {
    fn draw_frame(&mut self, frame: &FrameView<'_>) {
        self.frames += 1;
        if self.frames % (5 * TICK_HZ) == 0 {
            log::info!(
                "t={}s kills {}/{} time left {}s",
                self.frames / TICK_HZ,
                frame.hud.kills,
                frame.hud.kill_goal,
                frame.hud.time_left_secs
            );
        }
    }

    fn render_menu(&mut self, _options: &[MenuOption], _selected: usize) {}

    fn render_level_intro(&mut self, level: u32) {
        if self.last_intro != Some(level) {
            self.last_intro = Some(level);
            log::info!("LEVEL {level}");
        }
    }

    fn render_outcome(&mut self, outcome: &OutcomeView) {
        if self.last_outcome != Some(*outcome) {
            self.last_outcome = Some(*outcome);
            match outcome {
                OutcomeView::GameOver(reason) => log::info!("GAME OVER: {}", reason.message()),
                OutcomeView::Victory => log::info!("YOU WIN!"),
            }
        }
    }
}

/// Scripted pilot: starts a new game, then strafes while firing up
struct ScriptedInput {
    frame: u64,
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> SessionInput {
        self.frame += 1;
        if self.frame == 1 {
            return SessionInput {
                confirm: true,
                ..Default::default()
            };
        }
        let strafe_left = (self.frame / TICK_HZ) % 2 == 0;
        SessionInput {
            play: TickInput {
                fire_up: true,
                move_left: strafe_left,
                move_right: !strafe_left,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Retro Shooter (native) starting...");
    log::info!("No windowed frontend connected - running a scripted headless session");

    let mut session = Session::new(0xC0FFEE, SaveFile::new());
    let mut presenter = HeadlessPresenter::default();
    let mut input = ScriptedInput { frame: 0 };

    // One simulated minute, no frame pacing needed headlessly
    for _ in 0..60 * TICK_HZ {
        if session.advance(&input.poll(), &mut presenter) == SessionStatus::Exit {
            break;
        }
    }

    println!(
        "Headless session stopped at level {} after {} drawn frames",
        session.level(),
        presenter.frames
    );
}
