use crate::{Params, Side};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub launch_angle_deg: i32,
    pub bounce_jitter_x: f32,
    pub bounce_jitter_y: f32,
    /// Ticks an armed control toggle stays open. `None` keeps it open until used.
    pub toggle_timeout_ticks: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            launch_angle_deg: Params::LAUNCH_ANGLE_DEG,
            bounce_jitter_x: Params::BOUNCE_JITTER_X,
            bounce_jitter_y: Params::BOUNCE_JITTER_Y,
            toggle_timeout_ticks: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_toggle_timeout(mut self, ticks: Option<u64>) -> Self {
        self.toggle_timeout_ticks = ticks;
        self
    }

    /// Get the fixed X position (left edge) of a side's paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.screen_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Starting Y (top edge) for a paddle, vertically centered
    pub fn paddle_start_y(&self) -> f32 {
        self.screen_height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp paddle Y (top edge) to screen bounds
    pub fn clamp_paddle_y(&self, y: f32, height: f32) -> f32 {
        y.clamp(0.0, self.screen_height - height)
    }

    /// Top-left corner the ball is placed at after every point
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.screen_width / 2.0 - self.ball_size / 2.0,
            self.screen_height / 2.0 - self.ball_size / 2.0,
        )
    }
}
