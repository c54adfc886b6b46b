//! Platform layer: frame pacing and terminal input
//!
//! The simulation consumes exactly four things from here: "wait for the next
//! tick", "is jump pressed", "was quit requested", and the fixed screen
//! dimensions (in `consts`). Everything is polled at the top of each tick;
//! nothing blocks mid-tick.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// Input observed since the previous tick
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformInput {
    /// Jump key (space) pressed
    pub jump: bool,
    /// Quit requested (q, Esc, Ctrl-C, or terminal close)
    pub quit: bool,
    /// Any key pressed; only consulted in the `Waiting` phase
    pub any_key: bool,
}

/// Drain all pending terminal events without blocking.
pub fn poll_input() -> io::Result<PlatformInput> {
    let mut input = PlatformInput::default();
    while event::poll(Duration::ZERO)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                input.any_key = true;
                match key.code {
                    KeyCode::Char(' ') | KeyCode::Up => input.jump = true,
                    KeyCode::Char('q') | KeyCode::Esc => input.quit = true,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        input.quit = true;
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
    Ok(input)
}

/// Fixed-rate pacing for the game loop.
///
/// Deadline-based rather than sleep-per-frame so a slow tick does not
/// accumulate drift; a badly overrun deadline resets instead of bursting.
pub struct FrameClock {
    period: Duration,
    deadline: Instant,
}

impl FrameClock {
    pub fn new(ticks_per_second: u32) -> Self {
        let period = Duration::from_secs(1) / ticks_per_second;
        Self {
            period,
            deadline: Instant::now() + period,
        }
    }

    /// Block until the next tick boundary. This is the loop's only blocking
    /// point.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.deadline {
            std::thread::sleep(self.deadline - now);
        }
        let next = self.deadline + self.period;
        self.deadline = if next > Instant::now() {
            next
        } else {
            Instant::now() + self.period
        };
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }
}
