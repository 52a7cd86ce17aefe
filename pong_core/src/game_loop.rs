//! Fixed-rate driver: input, update, render, then sleep out the rest of the tick.

use tracing::{error, info, warn};

use crate::error::RenderError;
use crate::platform::{Clock, InputSource, Renderer};
use crate::render::render_frame;
use crate::systems::handle_input;
use crate::{update, GameState, Params};

/// Where the loop stands after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Run one tick and return whether the loop should continue.
///
/// The tick always runs to completion: a quit during input skips the
/// update but the frame is still drawn and paced.
pub fn tick<I, R, C>(
    state: &mut GameState,
    input: &mut I,
    renderer: &mut R,
    clock: &mut C,
) -> Result<LoopState, RenderError>
where
    I: InputSource + ?Sized,
    R: Renderer + ?Sized,
    C: Clock + ?Sized,
{
    let frame_start = clock.now_ms();

    state.events.clear();
    handle_input(state, input);

    if state.running {
        update(state);
    }

    if let Err(err) = render_frame(state, renderer) {
        if !err.is_recoverable() {
            return Err(err);
        }
        warn!(error = %err, tick = state.tick, "frame dropped");
    }

    let frame_time = clock.now_ms().saturating_sub(frame_start);
    if frame_time < Params::FRAME_DELAY_MS {
        clock.sleep_ms(Params::FRAME_DELAY_MS - frame_time);
    }

    Ok(if state.running {
        LoopState::Running
    } else {
        LoopState::Stopped
    })
}

/// Tick until the game is stopped or the renderer fails for good
pub fn run<I, R, C>(
    state: &mut GameState,
    input: &mut I,
    renderer: &mut R,
    clock: &mut C,
) -> Result<(), RenderError>
where
    I: InputSource + ?Sized,
    R: Renderer + ?Sized,
    C: Clock + ?Sized,
{
    info!("game loop started");
    while state.running {
        match tick(state, input, renderer, clock) {
            Ok(LoopState::Running) => {}
            Ok(LoopState::Stopped) => break,
            Err(err) => {
                error!(error = %err, tick = state.tick, "renderer failed, stopping");
                return Err(err);
            }
        }
    }
    let (left, right) = state.scores();
    info!(ticks = state.tick, left, right, "game loop stopped");
    Ok(())
}
