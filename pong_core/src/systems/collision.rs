use rand::Rng;

use crate::systems::{check_scoring, move_ball};
use crate::{Ball, Config, Events, GameRng, Player, Side};

/// Advance the ball one tick: integrate, guard against tunneling,
/// bounce off walls and paddles, then award a point if it left the field
pub fn advance_ball(
    ball: &mut Ball,
    players: &mut [Player; 2],
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    move_ball(ball);
    apply_tunneling_guard(ball, players);
    bounce_off_walls(ball, config, events);
    bounce_off_paddles(ball, players, config, rng, events);
    check_scoring(ball, players, config, rng, events);
}

/// Keep the ball on the inner side of the paddle it is travelling away from.
///
/// A ball moving right is never left of the left paddle's right edge, and a
/// ball moving left (or not moving horizontally) is never right of the right
/// paddle's left edge. A ball that just bounced can't re-enter the paddle it
/// left, so it can't collide with it twice.
pub fn apply_tunneling_guard(ball: &mut Ball, players: &[Player; 2]) {
    let left = &players[Side::Left.index()].paddle;
    let right = &players[Side::Right.index()].paddle;

    if ball.vel.x > 0.0 {
        let edge = left.x + left.width;
        if ball.pos.x < edge {
            ball.pos.x = edge;
        }
    } else {
        let edge = right.x - ball.size;
        if ball.pos.x > edge {
            ball.pos.x = edge;
        }
    }
}

/// Reflect vertical velocity at the top and bottom of the screen.
/// Position is left as is; the ball may sit past the wall for one tick.
pub fn bounce_off_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    if ball.pos.y <= 0.0 || ball.pos.y >= config.screen_height - ball.size {
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
}

/// Reflect horizontal velocity off any overlapping paddle, with a small
/// random kick on both axes so rallies don't repeat
pub fn bounce_off_paddles(
    ball: &mut Ball,
    players: &[Player; 2],
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    for player in players.iter() {
        if ball.overlaps(&player.paddle) {
            let jitter_x = jitter(rng, config.bounce_jitter_x);
            let jitter_y = jitter(rng, config.bounce_jitter_y);
            ball.vel.x = -ball.vel.x + jitter_x;
            ball.vel.y += jitter_y;
            events.ball_hit_paddle = true;
        }
    }
}

/// Uniform in [-amplitude, amplitude); no jitter for a zero amplitude
fn jitter(rng: &mut GameRng, amplitude: f32) -> f32 {
    if amplitude > 0.0 {
        rng.0.gen_range(-amplitude..amplitude)
    } else {
        0.0
    }
}
