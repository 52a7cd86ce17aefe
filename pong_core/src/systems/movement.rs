use crate::{Ball, Config, Paddle};

/// Apply paddle velocity and clamp to screen bounds
pub fn update_paddle(paddle: &mut Paddle, config: &Config) {
    paddle.y += paddle.vy;
    paddle.y = config.clamp_paddle_y(paddle.y, paddle.height);
}

/// Move ball one tick along its velocity
pub fn move_ball(ball: &mut Ball) {
    ball.pos += ball.vel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    #[test]
    fn test_paddle_moves_by_velocity() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Left, &config);
        paddle.vy = config.paddle_speed;
        update_paddle(&mut paddle, &config);
        assert_eq!(paddle.y, 221.0);
    }

    #[test]
    fn test_paddle_stays_on_screen() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Right, &config);
        for vy in [-500.0, -6.0, 0.0, 6.0, 500.0, -3.5, 1e6, -1e6] {
            paddle.vy = vy;
            for _ in 0..100 {
                update_paddle(&mut paddle, &config);
                assert!(paddle.y >= 0.0, "y {} above screen", paddle.y);
                assert!(
                    paddle.y <= config.screen_height - paddle.height,
                    "y {} below screen",
                    paddle.y
                );
            }
        }
    }

    #[test]
    fn test_move_ball() {
        let mut ball = Ball::new(glam::Vec2::new(100.0, 100.0), glam::Vec2::new(-18.0, 3.0), 8.0);
        move_ball(&mut ball);
        assert_eq!(ball.pos, glam::Vec2::new(82.0, 103.0));
    }
}
