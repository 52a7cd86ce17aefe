use thiserror::Error;

/// Failures reported by a [`crate::platform::Renderer`]
#[derive(Debug, Error)]
pub enum RenderError {
    /// Rasterising text failed; the frame is still usable without it
    #[error("text rendering failed: {0}")]
    Text(String),

    /// The surface could not provide a frame (lost, outdated, timed out)
    #[error("surface unavailable: {0}")]
    Surface(String),

    /// The device can't continue
    #[error("renderer failed: {0}")]
    Fatal(String),
}

impl RenderError {
    /// Recoverable errors cost a frame (or part of one), not the game
    pub fn is_recoverable(&self) -> bool {
        match self {
            RenderError::Text(_) | RenderError::Surface(_) => true,
            RenderError::Fatal(_) => false,
        }
    }
}

/// Failures encoding or decoding a [`crate::Snapshot`]
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec error: {0}")]
    Codec(#[from] postcard::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_classification() {
        assert!(RenderError::Text("no glyph".into()).is_recoverable());
        assert!(RenderError::Surface("lost".into()).is_recoverable());
        assert!(!RenderError::Fatal("out of memory".into()).is_recoverable());
    }
}
