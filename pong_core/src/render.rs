use tracing::warn;

use crate::error::RenderError;
use crate::platform::{Color, Rect, Renderer};
use crate::{GameState, Params};

/// Score line as shown above the field
pub fn score_text(state: &GameState) -> String {
    let (left, right) = state.scores();
    format!("{left}  {right}")
}

/// Draw one frame: background, paddles, ball, score.
///
/// A score that fails to render is logged and left out of the frame.
/// Other errors are returned for the caller to classify.
pub fn render_frame<R: Renderer + ?Sized>(
    state: &GameState,
    renderer: &mut R,
) -> Result<(), RenderError> {
    renderer.clear(Color::BLACK);

    for player in state.players.iter() {
        let paddle = &player.paddle;
        renderer.fill_rect(
            Rect::new(paddle.x, paddle.y, paddle.width, paddle.height),
            Color::WHITE,
        );
    }

    let ball = &state.ball;
    renderer.fill_rect(
        Rect::new(ball.pos.x, ball.pos.y, ball.size, ball.size),
        Color::RED,
    );

    if let Err(err) = draw_score(state, renderer) {
        if !err.is_recoverable() {
            return Err(err);
        }
        warn!(error = %err, tick = state.tick, "score rendering failed, skipping");
    }

    renderer.present()
}

fn draw_score<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R) -> Result<(), RenderError> {
    let text = score_text(state);
    let (width, _height) = renderer.measure_text(&text)?;
    let x = ((state.config.screen_width - width) / 2.0).floor();
    renderer.draw_text(&text, x, Params::SCORE_TEXT_Y, Color::WHITE)
}
