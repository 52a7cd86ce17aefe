use serde::{Deserialize, Serialize};

use crate::Side;

/// Random number generator shared by ball launches and paddle bounces
#[derive(Debug, Clone)]
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

/// Seconds since the Unix epoch, or 0 if the clock is before it
pub fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub control_toggled: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.control_toggled = None;
    }
}

/// State of the "take control" key sequence (`T` then a side selector)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlToggle {
    #[default]
    Disarmed,
    Armed {
        since_tick: u64,
    },
}

impl ControlToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, tick: u64) {
        *self = ControlToggle::Armed { since_tick: tick };
    }

    pub fn disarm(&mut self) {
        *self = ControlToggle::Disarmed;
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, ControlToggle::Armed { .. })
    }

    /// Disarm if the toggle has been open longer than `timeout` ticks.
    /// Returns true if it expired.
    pub fn expire(&mut self, now: u64, timeout: Option<u64>) -> bool {
        match (*self, timeout) {
            (ControlToggle::Armed { since_tick }, Some(limit))
                if now.saturating_sub(since_tick) > limit =>
            {
                self.disarm();
                true
            }
            _ => false,
        }
    }
}
