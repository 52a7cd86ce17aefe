//! SuperPong desktop frontend
//!
//! Opens the window, wires winit input, the wgpu renderer and the system
//! clock into the core game loop, and runs until the player quits.

mod camera;
mod clock;
mod error;
mod input;
mod renderer;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pong_core::{clock_seed, game_loop, Config, GameRng, GameState, Params};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clock::SystemClock;
use input::WinitInput;
use renderer::text::ScoreFont;
use renderer::GpuRenderer;

/// Two-paddle ball game with computer opponents
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TrueType font used for the score
    #[arg(long, default_value = Params::FONT_FILE)]
    font: PathBuf,

    /// Seed for ball launches and bounces; defaults to the wall clock
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks the control toggle stays armed after T is pressed
    #[arg(long)]
    toggle_timeout: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    info!("This is {}", Params::TITLE);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %failure_message(&err), "SuperPong failed");
            ExitCode::FAILURE
        }
    }
}

/// The error and every cause under it, outermost first
fn failure_message(err: &anyhow::Error) -> String {
    format!("{err:#}")
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut input = WinitInput::new()?;
    let window = input.create_window(Params::TITLE, Params::SCREEN_WIDTH, Params::SCREEN_HEIGHT)?;

    let font = ScoreFont::load(&args.font, Params::FONT_SIZE)?;
    let mut renderer = pollster::block_on(GpuRenderer::new(
        window,
        Params::SCREEN_WIDTH,
        Params::SCREEN_HEIGHT,
        font,
    ))?;
    let mut clock = SystemClock::new();

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!(seed, font = %args.font.display(), "starting match");

    let config = Config::new().with_toggle_timeout(args.toggle_timeout);
    let mut state = GameState::new(config, GameRng::new(seed));

    game_loop::run(&mut state, &mut input, &mut renderer, &mut clock)?;

    let (left, right) = state.scores();
    info!(ticks = state.tick, left, right, "goodbye");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["superpong"]);
        assert_eq!(args.font, PathBuf::from("PressStart2P-vaV7.ttf"));
        assert_eq!(args.seed, None);
        assert_eq!(args.toggle_timeout, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_failure_message_includes_causes() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = anyhow::Error::new(missing).context("loading score font");
        assert_eq!(failure_message(&err), "loading score font: no such file");
    }

    #[test]
    fn test_seed_and_timeout_flags() {
        let args = Args::parse_from(["superpong", "--seed", "42", "--toggle-timeout", "120"]);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.toggle_timeout, Some(120));
    }
}
