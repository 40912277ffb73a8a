//! Shader program abstraction
//!
//! Compiling, binding and uniform upload are owned by the host application's
//! backend. Primitives only pass a `&mut dyn Shader` through to their model,
//! which decides which uniforms it needs.

use crate::foundation::math::{Mat4, Vec4};
use crate::render::RenderResult;

/// Uniform name conventionally used for the model-to-world matrix
pub const MODEL_MATRIX_UNIFORM: &str = "model_mat";

/// Uniform name conventionally used for a flat material color
pub const COLOR_UNIFORM: &str = "material_color";

/// A bound (or bindable) GPU program
///
/// Implementations report an unbound or invalid program by returning
/// [`RenderError::ShaderFailed`](crate::render::RenderError::ShaderFailed).
pub trait Shader {
    /// Make this program current for subsequent draw calls
    fn bind(&mut self) -> RenderResult<()>;

    /// Upload a 4x4 matrix uniform
    fn set_uniform_mat4(&mut self, name: &str, value: &Mat4) -> RenderResult<()>;

    /// Upload a 4-component vector uniform
    fn set_uniform_vec4(&mut self, name: &str, value: &Vec4) -> RenderResult<()>;
}
