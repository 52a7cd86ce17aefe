use tracing::{debug, info};

use crate::platform::{InputEvent, InputSource, PaddleKey};
use crate::{ControlMode, GameState, Side};

/// Drain this tick's key presses into `state`, then set human paddle
/// velocities from the held keys
pub fn handle_input<I: InputSource + ?Sized>(state: &mut GameState, input: &mut I) {
    if state
        .control_toggle
        .expire(state.tick, state.config.toggle_timeout_ticks)
    {
        debug!(tick = state.tick, "control toggle expired");
    }

    for event in input.poll_events() {
        apply_event(state, event);
    }

    let speed = state.config.paddle_speed;
    for player in state.players.iter_mut() {
        if player.control == ControlMode::Human {
            let up = input.is_held(player.side, PaddleKey::Up);
            let down = input.is_held(player.side, PaddleKey::Down);
            player.paddle.vy = held_velocity(up, down, speed);
        }
    }
}

/// Apply one discrete key press
pub fn apply_event(state: &mut GameState, event: InputEvent) {
    match event {
        InputEvent::CloseRequested | InputEvent::Escape => {
            info!(?event, "quit requested");
            state.stop();
        }
        InputEvent::TakeControl => {
            state.control_toggle.arm(state.tick);
        }
        InputEvent::SelectSide(side) => {
            if state.control_toggle.is_armed() {
                let mode = state.toggle_control(side);
                state.control_toggle.disarm();
                state.events.control_toggled = Some(side);
                info!(?side, ?mode, "player control changed");
            }
        }
    }
}

/// Velocity for a human paddle: up is negative. Both keys cancel out.
pub fn held_velocity(up: bool, down: bool, speed: f32) -> f32 {
    match (up, down) {
        (true, false) => -speed,
        (false, true) => speed,
        _ => 0.0,
    }
}

/// Keys held for each side, for driving `handle_input` without a keyboard
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pub events: Vec<InputEvent>,
    pub held: Vec<(Side, PaddleKey)>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn hold(&mut self, side: Side, key: PaddleKey) {
        if !self.held.contains(&(side, key)) {
            self.held.push((side, key));
        }
    }

    pub fn release(&mut self, side: Side, key: PaddleKey) {
        self.held.retain(|held| *held != (side, key));
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    fn is_held(&self, side: Side, key: PaddleKey) -> bool {
        self.held.contains(&(side, key))
    }
}
