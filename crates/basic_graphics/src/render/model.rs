//! Renderable model abstraction
//!
//! A model is the GPU-side counterpart of a [`Mesh`]: vertex/index buffers
//! plus whatever material state the backend keeps. The host application
//! implements [`ModelFactory`] to upload geometry and hand back an owned
//! model that primitives cache and draw.

use std::sync::Arc;

use crate::foundation::math::{Mat4, Vec4};
use crate::render::primitives::Mesh;
use crate::render::shader::Shader;
use crate::render::RenderResult;

/// Uploaded geometry that can issue its own draw call
pub trait Model: Send {
    /// Draw the model with `shader`, placing it with `transform`
    fn draw(&self, shader: &mut dyn Shader, transform: &Mat4) -> RenderResult<()>;

    /// Color the model currently renders with
    fn color(&self) -> Vec4;

    /// Update the material color without re-uploading geometry
    ///
    /// Returns `false` when the backend bakes color into vertex data and the
    /// model has to be recreated instead. The default implementation cannot
    /// update in place.
    fn try_update_color(&mut self, _color: &Vec4) -> bool {
        false
    }
}

/// Creates models from CPU geometry
///
/// Shared between threads; implementations guard their own GPU upload path.
pub trait ModelFactory: Send + Sync {
    /// Upload `geometry` and return a model rendering it with `color`
    fn create_model(&self, geometry: Arc<Mesh>, color: &Vec4) -> RenderResult<Box<dyn Model>>;
}
