//! Game loop - fixed-timestep update and draw

use std::time::Duration;

use rand::Rng;
use tokio::time::{sleep, Instant};
use tracing::{debug, info};

use crate::config::CATCH_UP_FACTOR;
use crate::error::GameError;
use crate::input::InputSource;
use crate::render::{draw, Renderer};
use crate::state::{Control, GameState};

/// What the loop should do at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Run one update and draw
    Frame,
    /// Sleep this long before asking again
    Wait(Duration),
}

/// Fixed-timestep pacing with a bounded catch-up
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    period: Duration,
    last_frame: Instant,
}

impl FrameScheduler {
    /// The first frame is due one `period` after `start`
    pub fn new(period: Duration, start: Instant) -> Self {
        Self {
            period,
            last_frame: start,
        }
    }

    /// Decide whether a frame is due at `now`, committing it if so.
    ///
    /// A due frame moves the marker forward by one period. When the loop has
    /// fallen more than [`CATCH_UP_FACTOR`] periods behind, the marker snaps to
    /// `now` and the missed frames are dropped.
    pub fn poll(&mut self, now: Instant) -> Tick {
        let elapsed = now.saturating_duration_since(self.last_frame);
        if elapsed < self.period {
            return Tick::Wait(self.period - elapsed);
        }

        if elapsed > self.period * CATCH_UP_FACTOR {
            debug!("Frame loop {:?} behind, skipping ahead", elapsed - self.period);
            self.last_frame = now;
        } else {
            self.last_frame += self.period;
        }
        Tick::Frame
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn last_frame(&self) -> Instant {
        self.last_frame
    }
}

/// Run the game until the player quits or a fatal error occurs
pub async fn run<R, I, D>(
    state: &mut GameState<R>,
    input: &mut I,
    renderer: &mut D,
) -> Result<(), GameError>
where
    R: Rng,
    I: InputSource + ?Sized,
    D: Renderer + ?Sized,
{
    let mut scheduler = FrameScheduler::new(state.config().frame_period, Instant::now());
    info!("Game loop started (frame every {:?})", scheduler.period());

    loop {
        match scheduler.poll(Instant::now()) {
            Tick::Frame => {
                if state.update(input)? == Control::Quit {
                    info!("Player quit at length {}", state.snake().len());
                    return Ok(());
                }
                draw(state, renderer)?;
            }
            Tick::Wait(remaining) => sleep(remaining).await,
        }
    }
}
