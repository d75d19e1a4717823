use thiserror::Error;

/// Errors raised while building or resizing a scene.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("viewport must be non-empty and finite, got {width}x{height}")]
    DegenerateViewport { width: f32, height: f32 },
    #[error("invalid scene config: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f32 },
}
