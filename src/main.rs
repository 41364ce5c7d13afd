//! Snake in the terminal
//!
//! Arrow keys steer, any key restarts after a crash, Esc or Q quits.

use std::fs::File;
use std::process::ExitCode;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ring_snake::config::{DEFAULT_LOG_FILTER, LOG_FILE};
use ring_snake::term::{TerminalCanvas, TerminalGuard, TerminalInput};
use ring_snake::{run, GameConfig, GameError, GameState};

/// Initialize logging into the log file; the terminal belongs to the game
fn init_tracing() {
    let file = match File::create(LOG_FILE) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled, cannot open {}: {}", LOG_FILE, e);
            return;
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
}

async fn play() -> Result<(), GameError> {
    let config = GameConfig::default();
    let mut state = GameState::new(config, StdRng::from_entropy())?;

    let _terminal = TerminalGuard::enter()?;
    let mut canvas = TerminalCanvas::stdout(&config);
    let mut input = TerminalInput;

    run(&mut state, &mut input, &mut canvas).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    info!("Starting ring-snake");

    match play().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal: {}", e);
            eprintln!("ring-snake: {}", e);
            ExitCode::FAILURE
        }
    }
}
