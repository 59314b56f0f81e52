use thiserror::Error;

/// Failures while setting up the rendering context.
///
/// All of them are detected once, during [`Renderer`](crate::Renderer) construction. Drawing itself
/// never fails.
#[derive(Debug, Error)]
pub enum RendererError {
    /// No adapter, device or surface could be obtained.
    #[error("rendering context unavailable: {0}")]
    ContextUnavailable(String),
    #[error("shader failed to compile: {0}")]
    ShaderCompileFailed(String),
    /// The vertex layout the pipeline expects does not match the shader inputs.
    #[error("vertex attribute lookup failed: {0}")]
    AttributeLookupFailed(String),
    /// The color uniform binding does not match the shader.
    #[error("uniform lookup failed: {0}")]
    UniformLookupFailed(String),
    #[error("buffer creation failed: {0}")]
    BufferCreationFailed(String),
}

impl RendererError {
    pub(crate) fn context(error: impl std::fmt::Display) -> Self {
        Self::ContextUnavailable(error.to_string())
    }
}
