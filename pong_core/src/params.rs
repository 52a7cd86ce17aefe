/// Game tuning parameters for SuperPong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    pub const TITLE: &'static str = "SuperPong 0.0.2";

    // Screen
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 50.0;
    pub const PADDLE_MARGIN: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 6.0; // units per tick

    // Ball
    pub const BALL_SIZE: f32 = 8.0;
    pub const BALL_SPEED: f32 = 18.0; // units per tick
    pub const LAUNCH_ANGLE_DEG: i32 = 30; // launch within [-30, 30) degrees of horizontal

    // Paddle bounce variation
    pub const BOUNCE_JITTER_X: f32 = 0.5;
    pub const BOUNCE_JITTER_Y: f32 = 1.0;

    // Score text
    pub const FONT_FILE: &'static str = "PressStart2P-vaV7.ttf";
    pub const FONT_SIZE: f32 = 24.0;
    pub const SCORE_TEXT_Y: f32 = 20.0;

    // Loop
    pub const TICKS_PER_SECOND: u64 = 60;
    pub const FRAME_DELAY_MS: u64 = 1000 / Self::TICKS_PER_SECOND;
}
