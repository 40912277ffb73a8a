//! Math utilities and types
//!
//! Thin aliases over `nalgebra` used by every primitive, plus the few helpers
//! the box primitive needs for placing canonical geometry and answering
//! containment queries.

pub use nalgebra::{
    Vector3, Vector4,
    Matrix4,
};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type, also used for RGBA colors
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Extension trait for Mat4 with additional convenience methods
pub trait Mat4Ext {
    /// Create the matrix mapping the unit cube `[-0.5, 0.5]^3` onto `[min, max]`
    ///
    /// Equivalent to `translation(center) * non_uniform_scale(max - min)`.
    /// The result is singular whenever an extent is zero on some axis.
    fn from_bounds(min: &Vec3, max: &Vec3) -> Mat4;

    /// Transform a position (w = 1), dropping the homogeneous coordinate
    fn transform_position(&self, position: &Vec3) -> Vec3;
}

impl Mat4Ext for Mat4 {
    fn from_bounds(min: &Vec3, max: &Vec3) -> Mat4 {
        let center = (min + max) * 0.5;
        let size = max - min;
        Mat4::new_translation(&center) * Mat4::new_nonuniform_scaling(&size)
    }

    fn transform_position(&self, position: &Vec3) -> Vec3 {
        self.transform_point(&Point3::from(*position)).coords
    }
}

/// Math utility functions
pub mod utils {
    use super::Vec3;

    /// True if every component of `a` is less than or equal to the matching component of `b`
    ///
    /// Exact comparison; any NaN component makes the result false.
    pub fn all_le(a: &Vec3, b: &Vec3) -> bool {
        a.x <= b.x && a.y <= b.y && a.z <= b.z
    }

    /// True if every component is finite
    pub fn is_finite(v: &Vec3) -> bool {
        v.iter().all(|c| c.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_from_bounds_maps_unit_cube_corners() {
        let min = Vec3::new(1.0, -2.0, 0.0);
        let max = Vec3::new(3.0, 2.0, 0.5);
        let m = Mat4::from_bounds(&min, &max);

        let lo = m.transform_position(&Vec3::new(-0.5, -0.5, -0.5));
        let hi = m.transform_position(&Vec3::new(0.5, 0.5, 0.5));
        let center = m.transform_position(&Vec3::zeros());
        assert_relative_eq!(lo, min, epsilon = EPSILON);
        assert_relative_eq!(hi, max, epsilon = EPSILON);
        assert_relative_eq!(center, Vec3::new(2.0, 0.0, 0.25), epsilon = EPSILON);
    }

    #[test]
    fn test_from_bounds_flat_box_is_singular() {
        let m = Mat4::from_bounds(&Vec3::new(0.0, 0.0, 0.0), &Vec3::new(1.0, 0.0, 1.0));
        assert!(m.try_inverse().is_none());
    }

    #[test]
    fn test_all_le() {
        let a = Vec3::new(0.0, 1.0, 2.0);
        assert!(utils::all_le(&a, &a));
        assert!(utils::all_le(&a, &Vec3::new(0.0, 1.5, 2.0)));
        assert!(!utils::all_le(&a, &Vec3::new(-0.1, 1.0, 2.0)));
        assert!(!utils::all_le(&Vec3::new(f32::NAN, 0.0, 0.0), &a));
    }

    #[test]
    fn test_is_finite() {
        assert!(utils::is_finite(&Vec3::new(1.0, 2.0, 3.0)));
        assert!(!utils::is_finite(&Vec3::new(f32::INFINITY, 2.0, 3.0)));
    }
}
