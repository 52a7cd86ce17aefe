use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Config, GameRng};

/// Which side of the screen a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// True if a ball with horizontal velocity `vx` is travelling toward this side
    pub fn is_approached_by(self, vx: f32) -> bool {
        match self {
            Side::Left => vx < 0.0,
            Side::Right => vx > 0.0,
        }
    }
}

/// Who drives a player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlMode {
    Human,
    BasicAi,
}

impl ControlMode {
    /// Flip between keyboard and computer control
    pub fn toggled(self) -> Self {
        match self {
            ControlMode::Human => ControlMode::BasicAi,
            ControlMode::BasicAi => ControlMode::Human,
        }
    }
}

/// Paddle - `x`/`y` is the top-left corner, `x` never changes after spawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            x: config.paddle_x(side),
            y: config.paddle_start_y(),
            vy: 0.0,
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Ball - square, `pos` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    /// A fresh ball at the center of the screen with a random launch
    /// angle and direction at the configured speed
    pub fn launch(config: &Config, rng: &mut GameRng) -> Self {
        use rand::Rng;
        let spread = config.launch_angle_deg;
        let degrees = if spread > 0 {
            rng.0.gen_range(-spread..spread) as f32
        } else {
            0.0
        };
        let angle = degrees.to_radians();
        let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };

        Self {
            pos: config.ball_spawn(),
            vel: Vec2::new(
                config.ball_speed * angle.cos() * dir,
                config.ball_speed * angle.sin(),
            ),
            size: config.ball_size,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }

    /// Axis-aligned overlap test against a paddle
    pub fn overlaps(&self, paddle: &Paddle) -> bool {
        self.pos.x < paddle.x + paddle.width
            && self.pos.x + self.size > paddle.x
            && self.pos.y < paddle.y + paddle.height
            && self.pos.y + self.size > paddle.y
    }
}

/// Player - one paddle, a control mode and a score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub paddle: Paddle,
    pub control: ControlMode,
    pub side: Side,
    pub score: u32,
}

impl Player {
    pub fn new(side: Side, control: ControlMode, config: &Config) -> Self {
        Self {
            paddle: Paddle::new(side, config),
            control,
            side,
            score: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_starts_at_center_with_fixed_speed() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        for _ in 0..200 {
            let ball = Ball::launch(&config, &mut rng);
            assert_eq!(ball.pos, Vec2::new(316.0, 236.0));
            assert!((ball.vel.length() - config.ball_speed).abs() < 1e-3);
            assert_eq!(ball.size, 8.0);
        }
    }

    #[test]
    fn test_launch_angle_within_thirty_degrees() {
        let config = Config::new();
        let mut rng = GameRng::new(99);
        let max_vy = config.ball_speed * 30f32.to_radians().sin();
        let mut saw_left = false;
        let mut saw_right = false;
        for _ in 0..500 {
            let ball = Ball::launch(&config, &mut rng);
            assert!(ball.vel.y.abs() <= max_vy + 1e-3, "vy {} too steep", ball.vel.y);
            saw_left |= ball.vel.x < 0.0;
            saw_right |= ball.vel.x > 0.0;
        }
        assert!(saw_left && saw_right, "Both launch directions should occur");
    }

    #[test]
    fn test_ball_overlaps_paddle() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Left, &config);
        let touching = Ball::new(Vec2::new(25.0, 230.0), Vec2::ZERO, 8.0);
        let clear = Ball::new(Vec2::new(30.0, 230.0), Vec2::ZERO, 8.0);
        let below = Ball::new(Vec2::new(25.0, 265.0), Vec2::ZERO, 8.0);
        assert!(touching.overlaps(&paddle));
        assert!(!clear.overlaps(&paddle), "Edges touching is not an overlap");
        assert!(!below.overlaps(&paddle));
    }

    #[test]
    fn test_zero_launch_spread_fires_horizontally() {
        let mut config = Config::new();
        config.launch_angle_deg = 0;
        let mut rng = GameRng::new(3);
        for _ in 0..20 {
            let ball = Ball::launch(&config, &mut rng);
            assert_eq!(ball.vel.y, 0.0);
            assert_eq!(ball.vel.x.abs(), config.ball_speed);
        }
    }

    #[test]
    fn test_control_mode_toggle() {
        assert_eq!(ControlMode::Human.toggled(), ControlMode::BasicAi);
        assert_eq!(ControlMode::BasicAi.toggled(), ControlMode::Human);
    }

    #[test]
    fn test_side_approach() {
        assert!(Side::Left.is_approached_by(-1.0));
        assert!(!Side::Left.is_approached_by(1.0));
        assert!(Side::Right.is_approached_by(1.0));
        assert!(!Side::Right.is_approached_by(0.0));
    }
}
