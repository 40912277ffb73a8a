//! # Basic Graphics
//!
//! Renderable geometric primitives for a real-time 3D renderer.
//!
//! ## Features
//!
//! - **Axis-aligned boxes**: exact point containment and lazy model creation
//! - **Shared geometry**: an injectable, thread-safe cache generates each mesh once
//! - **Backend agnostic**: shaders and GPU models are supplied through traits
//! - **Configuration**: primitive settings loadable from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use basic_graphics::prelude::*;
//!
//! fn draw_box(
//!     factory: Arc<dyn ModelFactory>,
//!     shader: &mut dyn Shader,
//! ) -> Result<(), RenderError> {
//!     let resources = Arc::new(PrimitiveResources::with_factory(factory));
//!     let mut cube = AxisAlignedBox::new(
//!         Vec3::new(-0.5, -0.5, -0.5),
//!         Vec3::new(0.5, 0.5, 0.5),
//!         Vec4::new(1.0, 0.0, 0.0, 1.0),
//!         resources,
//!     );
//!
//!     assert!(cube.contains(&Vec3::zeros()));
//!     cube.draw(shader, &Mat4::identity())?;
//!     cube.set_color(Vec4::new(0.0, 1.0, 0.0, 1.0));
//!     cube.draw(shader, &Mat4::identity())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod render;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, PrimitiveSettings},
        foundation::math::{Mat4, Mat4Ext, Vec3, Vec4},
        render::{
            AxisAlignedBox, Colorable, Drawable, Mesh, MeshCache, Model, ModelFactory,
            PrimitiveResources, RenderError, RenderResult, Shader, Vertex,
        },
    };
}
