//! Rendering primitives and the collaborator interfaces they draw through
//!
//! The crate does not own a rendering context. Shader programs and GPU-side
//! models are supplied by the host application through the [`Shader`],
//! [`Model`] and [`ModelFactory`] traits; this module provides the primitives
//! that drive them and the [`MeshCache`] that lets identical geometry be
//! generated once per process.

pub mod shader;
pub mod model;
pub mod mesh_cache;
pub mod primitives;

#[cfg(test)]
pub(crate) mod test_support;

pub use shader::Shader;
pub use model::{Model, ModelFactory};
pub use mesh_cache::{CacheStats, GeometryKey, MeshCache};
pub use primitives::{
    AxisAlignedBox, Colorable, Drawable, Mesh, PrimitiveResources, Vertex,
};

use thiserror::Error;

/// Rendering system errors
///
/// Every variant originates in a collaborator (shader, model, factory). The
/// primitives never translate or retry these; they are propagated to the
/// caller of `draw` / `set_color` unchanged.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The shader program could not be bound or a uniform upload failed
    #[error("Shader operation failed: {0}")]
    ShaderFailed(String),

    /// The model factory could not create a model from the supplied geometry
    #[error("Model creation failed: {0}")]
    ModelCreationFailed(String),

    /// Issuing the draw call failed
    #[error("Draw failed: {0}")]
    DrawFailed(String),

    /// Backend-specific error occurred
    #[error("Backend error: {0}")]
    BackendError(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
