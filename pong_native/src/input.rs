//! Keyboard input handling

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use pong_core::platform::{InputEvent, InputSource, PaddleKey};
use pong_core::Side;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::error::StartupError;

/// Discrete action for a key press, if the key has one
pub fn map_key_press(code: KeyCode) -> Option<InputEvent> {
    match code {
        KeyCode::Escape => Some(InputEvent::Escape),
        KeyCode::KeyT => Some(InputEvent::TakeControl),
        KeyCode::Digit0 => Some(InputEvent::SelectSide(Side::Left)),
        KeyCode::Digit1 => Some(InputEvent::SelectSide(Side::Right)),
        _ => None,
    }
}

/// Physical key that moves a side's paddle
pub fn paddle_key_code(side: Side, key: PaddleKey) -> KeyCode {
    match (side, key) {
        (Side::Left, PaddleKey::Up) => KeyCode::KeyW,
        (Side::Left, PaddleKey::Down) => KeyCode::KeyS,
        (Side::Right, PaddleKey::Up) => KeyCode::ArrowUp,
        (Side::Right, PaddleKey::Down) => KeyCode::ArrowDown,
    }
}

/// Window events collected between polls
#[derive(Debug, Default)]
struct KeyboardState {
    pressed: Vec<InputEvent>,
    held: HashSet<KeyCode>,
}

impl KeyboardState {
    fn key(&mut self, code: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.held.insert(code);
                if let Some(event) = map_key_press(code) {
                    self.pressed.push(event);
                }
            }
            ElementState::Released => {
                self.held.remove(&code);
            }
        }
    }
}

impl ApplicationHandler for KeyboardState {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.pressed.push(InputEvent::CloseRequested),
            // Releases are never delivered to an unfocused window
            WindowEvent::Focused(false) => self.held.clear(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => self.key(code, state),
            _ => {}
        }
    }
}

/// Keyboard and window-close polling over a winit event loop.
///
/// The event loop is pumped once per tick instead of being run, so the
/// game loop keeps control of timing.
pub struct WinitInput {
    event_loop: EventLoop<()>,
    keyboard: KeyboardState,
}

impl WinitInput {
    pub fn new() -> Result<Self, StartupError> {
        Ok(Self {
            event_loop: EventLoop::new()?,
            keyboard: KeyboardState::default(),
        })
    }

    /// Open the fixed-size, non-resizable game window
    pub fn create_window(
        &self,
        title: &str,
        width: f32,
        height: f32,
    ) -> Result<Arc<Window>, StartupError> {
        let attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(false);

        #[allow(deprecated)]
        let window = self.event_loop.create_window(attributes)?;
        Ok(Arc::new(window))
    }
}

impl InputSource for WinitInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.keyboard);
        if let PumpStatus::Exit(_) = status {
            self.keyboard.pressed.push(InputEvent::CloseRequested);
        }
        std::mem::take(&mut self.keyboard.pressed)
    }

    fn is_held(&self, side: Side, key: PaddleKey) -> bool {
        self.keyboard.held.contains(&paddle_key_code(side, key))
    }
}
