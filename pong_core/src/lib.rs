pub mod components;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod params;
pub mod platform;
pub mod render;
pub mod resources;
pub mod snapshot;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;
pub use state::*;

use systems::*;
use tracing::debug;

/// Run one headless update, clearing last tick's events first
pub fn step(state: &mut GameState) {
    state.events.clear();
    update(state);
}

/// Advance the simulation one tick: computer paddles pick a velocity,
/// paddles move and clamp, then the ball moves, bounces and scores
pub fn update(state: &mut GameState) {
    state.tick += 1;

    for player in state.players.iter_mut() {
        control_paddle(player, &state.ball, &state.config);
        update_paddle(&mut player.paddle, &state.config);
    }

    advance_ball(
        &mut state.ball,
        &mut state.players,
        &state.config,
        &mut state.rng,
        &mut state.events,
    );

    if state.tick % Params::TICKS_PER_SECOND == 0 {
        let (left, right) = state.scores();
        debug!(
            tick = state.tick,
            left,
            right,
            ball_x = state.ball.pos.x,
            ball_y = state.ball.pos.y,
            "game running"
        );
    }
}
