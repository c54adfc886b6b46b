//! Dodge the Roar entry point
//!
//! Loads settings and sprites, sets up the terminal, and runs the fixed-rate
//! game loop until collision-plus-keypress or a quit request.

use std::io::{self, stdout};
use std::path::Path;
use std::process::ExitCode;

use crossterm::{cursor, execute, terminal};

use dodge_the_roar::Settings;
use dodge_the_roar::assets::Assets;
use dodge_the_roar::consts::TICK_RATE;
use dodge_the_roar::platform::{FrameClock, poll_input};
use dodge_the_roar::render::terminal::TerminalRenderer;
use dodge_the_roar::render::{DrawRequest, Frame, GAME_OVER_MESSAGE};
use dodge_the_roar::sim::{GamePhase, GameState, TickInput, tick};

fn main() -> ExitCode {
    env_logger::init();

    let settings = Settings::load(Path::new(Settings::FILE_NAME));

    // Assets are the one fatal startup failure: never reach the loop without
    // them.
    let assets = match Assets::load(&Assets::dir()) {
        Ok(assets) => assets,
        Err(e) => {
            log::error!("cannot start: {e}");
            eprintln!("cannot start: {e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("Dodge the Roar starting at {TICK_RATE} ticks/s");

    match run(assets, &settings) {
        Ok(score) => {
            log::info!("run ended with score {score}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("terminal failure: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Terminal setup/teardown around the game loop.
fn run(assets: Assets, settings: &Settings) -> io::Result<u32> {
    terminal::enable_raw_mode()?;
    execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = game_loop(assets, settings);

    // Restore the terminal even when the loop failed
    let restore = execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)
        .and_then(|_| terminal::disable_raw_mode());
    match result {
        Ok(score) => restore.map(|_| score),
        Err(e) => Err(e),
    }
}

/// One tick per iteration: poll input, advance the simulation, hand the
/// frame snapshot to the compositor. Returns the final score.
fn game_loop(assets: Assets, settings: &Settings) -> io::Result<u32> {
    let mut renderer = TerminalRenderer::new(stdout(), assets, settings.color, settings.show_score);
    let mut state = GameState::new();
    let mut clock = FrameClock::new(TICK_RATE);

    loop {
        clock.wait();

        // Quit observed at the top of a tick ends the loop before the next
        // state transform
        let input = poll_input()?;
        if input.quit {
            return Ok(state.score);
        }

        match state.phase {
            GamePhase::Playing => {
                tick(&mut state, &TickInput { jump: input.jump });

                if state.phase == GamePhase::GameOver {
                    renderer.draw(&DrawRequest::GameOver {
                        message: GAME_OVER_MESSAGE,
                    })?;
                    state.acknowledge_game_over();
                    log::info!("game over: final score {}", state.score);
                } else {
                    renderer.draw(&DrawRequest::Scene(Frame::capture(&state)))?;
                }
            }
            GamePhase::Waiting => {
                if input.any_key {
                    return Ok(state.score);
                }
            }
            // tick() never leaves the state here across iterations
            GamePhase::GameOver => state.acknowledge_game_over(),
        }
    }
}
