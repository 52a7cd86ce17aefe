use tracing::debug;

use crate::{Ball, Config, Events, GameRng, Player, Side};

/// Check if the ball left the field; award the point and relaunch the ball
pub fn check_scoring(
    ball: &mut Ball,
    players: &mut [Player; 2],
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let scorer = if ball.pos.x <= 0.0 {
        Side::Right
    } else if ball.pos.x >= config.screen_width - ball.size {
        Side::Left
    } else {
        return;
    };

    let player = &mut players[scorer.index()];
    player.score += 1;
    match scorer {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }

    *ball = Ball::launch(config, rng);

    debug!(
        side = ?scorer,
        left = players[Side::Left.index()].score,
        right = players[Side::Right.index()].score,
        "point scored"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ControlMode;
    use glam::Vec2;

    fn setup() -> ([Player; 2], Config, Events, GameRng) {
        let config = Config::new();
        let players = [
            Player::new(Side::Left, ControlMode::BasicAi, &config),
            Player::new(Side::Right, ControlMode::BasicAi, &config),
        ];
        (players, config, Events::new(), GameRng::new(12345))
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut players, config, mut events, mut rng) = setup();
        let mut ball = Ball::new(Vec2::new(-0.1, 200.0), Vec2::new(-18.0, 0.0), 8.0);

        check_scoring(&mut ball, &mut players, &config, &mut rng, &mut events);

        assert_eq!(players[1].score, 1, "Right player should score");
        assert_eq!(players[0].score, 0, "Left player should not score");
        assert!(events.right_scored, "Should trigger right_scored event");
        assert!(!events.left_scored);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut players, config, mut events, mut rng) = setup();
        let mut ball = Ball::new(Vec2::new(632.0, 200.0), Vec2::new(18.0, 0.0), 8.0);

        check_scoring(&mut ball, &mut players, &config, &mut rng, &mut events);

        assert_eq!(players[0].score, 1, "Left player should score");
        assert_eq!(players[1].score, 0, "Right player should not score");
        assert!(events.left_scored);
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut players, config, mut events, mut rng) = setup();
        let mut ball = Ball::new(Vec2::new(0.0, 50.0), Vec2::new(-18.0, 5.0), 8.0);

        check_scoring(&mut ball, &mut players, &config, &mut rng, &mut events);

        assert_eq!(ball.pos, config.ball_spawn(), "Ball should reset to center");
        assert!((ball.vel.length() - config.ball_speed).abs() < 1e-3);
        assert_eq!(ball.size, config.ball_size);
    }

    #[test]
    fn test_right_score_three_becomes_four() {
        let (mut players, config, mut events, mut rng) = setup();
        players[1].score = 3;
        let mut ball = Ball::new(Vec2::new(-4.0, 300.0), Vec2::new(-18.0, 1.0), 8.0);

        check_scoring(&mut ball, &mut players, &config, &mut rng, &mut events);

        assert_eq!(players[1].score, 4);
        assert_eq!(ball.pos, Vec2::new(316.0, 236.0));
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut players, config, mut events, mut rng) = setup();
        let mut ball = Ball::new(Vec2::new(316.0, 236.0), Vec2::new(18.0, 4.0), 8.0);

        check_scoring(&mut ball, &mut players, &config, &mut rng, &mut events);

        assert_eq!(players[0].score, 0, "No score when ball in bounds");
        assert_eq!(players[1].score, 0, "No score when ball in bounds");
        assert!(!events.left_scored && !events.right_scored, "No scoring events");
        assert_eq!(ball.vel, Vec2::new(18.0, 4.0), "Ball untouched");
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut players, config, mut events, mut rng) = setup();

        for _ in 0..2 {
            let mut ball = Ball::new(Vec2::new(640.0, 200.0), Vec2::new(18.0, 0.0), 8.0);
            check_scoring(&mut ball, &mut players, &config, &mut rng, &mut events);
            events.clear();
        }

        assert_eq!(players[0].score, 2, "Scores should accumulate");
        assert_eq!(players[1].score, 0);
    }
}
