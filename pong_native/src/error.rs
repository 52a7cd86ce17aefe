use std::path::PathBuf;

use thiserror::Error;

/// Anything that stops the game before the first tick
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("event loop creation failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("surface creation failed: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible graphics adapter found")]
    NoAdapter,

    #[error("device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface supports no texture formats")]
    NoSurfaceFormat,

    #[error("failed to read font {}: {source}", path.display())]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a usable font", path.display())]
    FontParse { path: PathBuf },
}
