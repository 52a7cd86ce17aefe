use crate::{Ball, Config, ControlMode, Player};

/// Set the paddle's velocity for whoever controls it this tick.
///
/// Human paddles were already set by input handling.
pub fn control_paddle(player: &mut Player, ball: &Ball, config: &Config) {
    match player.control {
        ControlMode::Human => {}
        ControlMode::BasicAi => player.paddle.vy = basic_ai_velocity(player, ball, config),
    }
}

/// Paddle velocity chosen by the basic computer player.
///
/// Strategy:
/// 1. Track the ball's center, with a dead zone of a quarter paddle height
///    so the paddle doesn't jitter around a ball it is already level with.
/// 2. If the ball is heading our way, extrapolate it in a straight line to
///    our paddle's x (no bounces) and chase that point when it falls
///    outside the paddle. This overrides step 1.
pub fn basic_ai_velocity(player: &Player, ball: &Ball, config: &Config) -> f32 {
    let paddle = &player.paddle;
    let speed = config.paddle_speed;

    let distance = ball.center_y() - paddle.center_y();
    let mut vy = if distance.abs() > paddle.height / 4.0 {
        speed.copysign(distance)
    } else {
        0.0
    };

    if player.side.is_approached_by(ball.vel.x) {
        let predicted_y = predict_intercept_y(ball, paddle.x);
        if predicted_y < paddle.y {
            vy = -speed;
        } else if predicted_y > paddle.bottom() {
            vy = speed;
        }
    }

    vy
}

/// Ball y once it has travelled horizontally to `x`, ignoring wall bounces.
/// Only meaningful for a ball with non-zero horizontal velocity.
pub fn predict_intercept_y(ball: &Ball, x: f32) -> f32 {
    let time_to_reach = ((x - ball.pos.x) / ball.vel.x).abs();
    ball.pos.y + ball.vel.y * time_to_reach
}
