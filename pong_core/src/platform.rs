//! Collaborators the game loop drives: keyboard, drawing and the clock.
//!
//! Window creation and teardown belong to whoever implements these; the
//! core only polls, draws and sleeps through them.

use crate::error::RenderError;
use crate::Side;

/// Discrete key presses and window signals, drained once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The window was closed
    CloseRequested,
    Escape,
    /// Arm the control toggle
    TakeControl,
    /// Side selector, flips that player's control mode while the toggle is armed
    SelectSide(Side),
}

/// Held paddle keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleKey {
    Up,
    Down,
}

pub trait InputSource {
    /// Key presses since the last call
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Whether a side's up or down key is held right now
    fn is_held(&self, side: Side, key: PaddleKey) -> bool;
}

/// RGBA color, 0-255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Screen-space rectangle; `x`/`y` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

pub trait Renderer {
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Width and height `text` would occupy when drawn
    fn measure_text(&mut self, text: &str) -> Result<(f32, f32), RenderError>;

    /// Draw `text` with its top-left corner at `(x, y)`
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color) -> Result<(), RenderError>;

    /// Show everything drawn since the last `clear`
    fn present(&mut self) -> Result<(), RenderError>;
}

pub trait Clock {
    /// Monotonic milliseconds
    fn now_ms(&self) -> u64;

    fn sleep_ms(&mut self, ms: u64);
}
