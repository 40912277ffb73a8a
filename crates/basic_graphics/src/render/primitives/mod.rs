//! Renderable geometric primitives
//!
//! Primitives generate their CPU geometry through the shared [`MeshCache`],
//! turn it into a backend model through the application's [`ModelFactory`],
//! and draw through whatever [`Shader`] the caller passes in. The
//! [`Drawable`] and [`Colorable`] traits are the contract every primitive
//! shape satisfies.

pub mod mesh;
pub mod axis_aligned_box;

pub use mesh::{Mesh, Vertex};
pub use axis_aligned_box::AxisAlignedBox;

use std::sync::Arc;

use crate::config::PrimitiveSettings;
use crate::foundation::math::{Mat4, Vec4};
use crate::render::{MeshCache, ModelFactory, RenderResult, Shader};

/// Something that can submit itself for drawing
pub trait Drawable {
    /// Draw with `shader`, placed in the world by `model_matrix`
    ///
    /// Collaborator failures are returned unchanged.
    fn draw(&mut self, shader: &mut dyn Shader, model_matrix: &Mat4) -> RenderResult<()>;
}

/// Something with a mutable flat color
pub trait Colorable {
    /// Current RGBA color
    fn color(&self) -> Vec4;

    /// Replace the RGBA color; takes effect on the next draw at the latest
    fn set_color(&mut self, color: Vec4);
}

/// Services primitives need to build their models
///
/// Owned by the application and shared by every primitive it creates, so the
/// geometry cache is an explicit dependency rather than process-global state.
#[derive(Clone)]
pub struct PrimitiveResources {
    mesh_cache: Arc<MeshCache>,
    model_factory: Arc<dyn ModelFactory>,
    settings: PrimitiveSettings,
}

impl PrimitiveResources {
    /// Bundle an existing cache with a model factory
    pub fn new(mesh_cache: Arc<MeshCache>, model_factory: Arc<dyn ModelFactory>) -> Self {
        Self::with_settings(mesh_cache, model_factory, PrimitiveSettings::default())
    }

    /// Bundle a cache and factory with explicit settings
    ///
    /// Generates the unit cube up front when `settings.preload_unit_cube` is set.
    pub fn with_settings(
        mesh_cache: Arc<MeshCache>,
        model_factory: Arc<dyn ModelFactory>,
        settings: PrimitiveSettings,
    ) -> Self {
        if settings.preload_unit_cube {
            mesh_cache.unit_cube();
        }
        Self {
            mesh_cache,
            model_factory,
            settings,
        }
    }

    /// Use `model_factory` with a fresh, empty mesh cache
    pub fn with_factory(model_factory: Arc<dyn ModelFactory>) -> Self {
        Self::new(Arc::new(MeshCache::new()), model_factory)
    }

    /// Shared geometry cache
    pub fn mesh_cache(&self) -> &Arc<MeshCache> {
        &self.mesh_cache
    }

    /// Factory used to upload geometry
    pub fn model_factory(&self) -> &Arc<dyn ModelFactory> {
        &self.model_factory
    }

    /// Settings for primitives sharing these resources
    pub fn settings(&self) -> &PrimitiveSettings {
        &self.settings
    }
}

impl std::fmt::Debug for PrimitiveResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrimitiveResources")
            .field("mesh_cache", &self.mesh_cache)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::MockFactory;
    use crate::render::GeometryKey;

    #[test]
    fn test_default_settings() {
        let resources = PrimitiveResources::with_factory(Arc::new(MockFactory::updatable()));
        assert_eq!(*resources.settings(), PrimitiveSettings::default());
        assert!(resources.mesh_cache().is_empty());
    }

    #[test]
    fn test_preload_unit_cube() {
        let cache = Arc::new(MeshCache::new());
        let settings = PrimitiveSettings {
            preload_unit_cube: true,
            ..PrimitiveSettings::default()
        };
        let resources = PrimitiveResources::with_settings(
            cache.clone(),
            Arc::new(MockFactory::updatable()),
            settings,
        );

        assert!(cache.is_cached(&GeometryKey::unit_cube()));
        assert!(resources.settings().preload_unit_cube);
    }
}
