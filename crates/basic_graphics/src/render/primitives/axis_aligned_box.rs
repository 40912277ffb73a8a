//! Axis-aligned box primitive
//!
//! A box is defined by a minimum and maximum corner in its own model frame.
//! Boxes with volume draw the same canonical unit cube from the [`MeshCache`];
//! a fixed local transform computed at construction stretches that cube onto
//! `[min, max]`, so boxes of any size share one piece of geometry.
//!
//! A flat box (zero extent on some axis) cannot be reached by scaling the unit
//! cube without a singular transform, which collapses its normals. Those boxes
//! get geometry generated at their exact bounds and an identity local
//! transform instead.
//!
//! # Frames
//! `draw` takes a `model_matrix` mapping the box's model frame into the world
//! and submits `model_matrix * local_transform`. `contains` expects positions
//! in that same model frame and compares them directly against `min`/`max`,
//! so it never inverts `local_transform`. Use `contains_world` for world-space
//! positions.
//!
//! [`MeshCache`]: crate::render::MeshCache

use std::sync::Arc;

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3, Vec4};
use crate::render::primitives::{Colorable, Drawable, PrimitiveResources};
use crate::render::{Model, RenderResult, Shader};

/// Renderable axis-aligned box with a lazily created model
///
/// `min` must be component-wise less than or equal to `max`. This is not
/// checked; an inverted box contains no points and renders mirrored.
pub struct AxisAlignedBox {
    min: Vec3,
    max: Vec3,
    color: Vec4,
    /// Maps the generated geometry onto `[min, max]`
    local_transform: Mat4,
    /// Zero extent on some axis; geometry is generated at the exact bounds
    flat: bool,
    /// Built on first draw, dropped with the box
    model: Option<Box<dyn Model>>,
    resources: Arc<PrimitiveResources>,
}

impl AxisAlignedBox {
    /// Create a box spanning `min` to `max`
    ///
    /// e.g. a 1x1x1 cube centered on the origin is `min = (-0.5, -0.5, -0.5)`,
    /// `max = (0.5, 0.5, 0.5)`. No geometry is generated until the first draw.
    pub fn new(min: Vec3, max: Vec3, color: Vec4, resources: Arc<PrimitiveResources>) -> Self {
        if !(utils::is_finite(&min) && utils::is_finite(&max)) {
            log::warn!("Box created with non-finite extents: min={:?}, max={:?}", min, max);
        } else if !utils::all_le(&min, &max) {
            log::warn!("Box created with inverted extents: min={:?}, max={:?}", min, max);
        }

        let flat = (max - min).iter().any(|&extent| extent == 0.0);
        let local_transform = if flat {
            Mat4::identity()
        } else {
            Mat4::from_bounds(&min, &max)
        };

        Self {
            min,
            max,
            color,
            local_transform,
            flat,
            model: None,
            resources,
        }
    }

    /// Create a box with the default color from the resources' settings
    pub fn with_default_color(min: Vec3, max: Vec3, resources: Arc<PrimitiveResources>) -> Self {
        let color = resources.settings().default_color();
        Self::new(min, max, color, resources)
    }

    /// Minimum corner in the model frame
    pub fn min(&self) -> &Vec3 {
        &self.min
    }

    /// Maximum corner in the model frame
    pub fn max(&self) -> &Vec3 {
        &self.max
    }

    /// Center of the box in the model frame
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths along each axis
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Fixed transform placing the generated geometry onto this box's extents
    ///
    /// Identity for flat boxes, whose geometry is already at `[min, max]`.
    pub fn local_transform(&self) -> &Mat4 {
        &self.local_transform
    }

    /// The cached model, if one has been built
    pub fn model(&self) -> Option<&dyn Model> {
        self.model.as_deref()
    }

    /// Return the cached model, building it first if needed
    pub fn ensure_model(&mut self) -> RenderResult<&dyn Model> {
        let model = match self.model.take() {
            Some(model) => model,
            None => self.build_model()?,
        };
        Ok(&**self.model.insert(model))
    }

    /// Drop the cached model so the next draw rebuilds it
    pub fn invalidate_model(&mut self) {
        self.model = None;
    }

    /// True if `position` lies within `[min, max]` on every axis
    ///
    /// `position` is in the box's model frame. Bounds are inclusive and
    /// compared exactly, with no epsilon; NaN components never match.
    pub fn contains(&self, position: &Vec3) -> bool {
        utils::all_le(&self.min, position) && utils::all_le(position, &self.max)
    }

    /// True if the world-space `position` lies inside the box placed by `model_matrix`
    ///
    /// Returns false when `model_matrix` is not invertible. The inverse is
    /// computed in floating point, so points exactly on a face may fall either
    /// side of it once the matrix is not a pure translation.
    pub fn contains_world(&self, position: &Vec3, model_matrix: &Mat4) -> bool {
        match model_matrix.try_inverse() {
            Some(world_to_model) => self.contains(&world_to_model.transform_position(position)),
            None => false,
        }
    }

    fn build_model(&self) -> RenderResult<Box<dyn Model>> {
        // Cache lock is released before the factory uploads anything
        let cache = self.resources.mesh_cache();
        let geometry = if self.flat {
            cache.box_geometry(&self.min, &self.max)
        } else {
            cache.unit_cube()
        };
        log::debug!(
            "Building box model: min={:?}, max={:?}, color={:?}",
            self.min,
            self.max,
            self.color
        );
        self.resources.model_factory().create_model(geometry, &self.color)
    }
}

impl Drawable for AxisAlignedBox {
    fn draw(&mut self, shader: &mut dyn Shader, model_matrix: &Mat4) -> RenderResult<()> {
        let transform = model_matrix * self.local_transform;
        let model = self.ensure_model()?;
        log::trace!("Drawing box model");
        model.draw(shader, &transform)
    }
}

impl Colorable for AxisAlignedBox {
    fn color(&self) -> Vec4 {
        self.color
    }

    fn set_color(&mut self, color: Vec4) {
        self.color = color;

        let stale = self
            .model
            .as_mut()
            .is_some_and(|model| !model.try_update_color(&color));
        if stale {
            log::debug!("Model cannot update color in place, rebuilding on next draw");
            self.model = None;
        }
    }
}

impl std::fmt::Debug for AxisAlignedBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AxisAlignedBox")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("color", &self.color)
            .field("flat", &self.flat)
            .field("has_model", &self.model.is_some())
            .finish_non_exhaustive()
    }
}
