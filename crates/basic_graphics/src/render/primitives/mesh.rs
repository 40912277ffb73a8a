//! Mesh representation for primitive geometry
//!
//! Pure CPU-side data: a flat vertex array and a triangle index list, laid out
//! so a backend can upload it without conversion. No backend types appear
//! here; models created by a [`ModelFactory`](crate::render::ModelFactory)
//! own the GPU copies.

use bytemuck::{Pod, Zeroable};

use crate::foundation::math::Vec3;

/// 3D vertex data structure for rendering
///
/// Represents a single vertex with position, normal, and texture coordinate data.
///
/// # Memory Layout
/// `#[repr(C)]` with only `f32` fields, so the struct has no padding and can be
/// reinterpreted as bytes for GPU buffer uploads.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in 3D space
    pub position: [f32; 3],

    /// Normal vector
    pub normal: [f32; 3],

    /// Texture coordinates
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }
}

/// 3D mesh containing vertices and indices for rendering
///
/// Triangles are listed with counter-clockwise winding when viewed from the
/// side their normals point to.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex data
    pub vertices: Vec<Vertex>,

    /// Index data for triangles
    pub indices: Vec<u32>,
}

/// Texture coordinates shared by every box face, in corner order
const FACE_TEX_COORDS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

impl Mesh {
    /// Create a new mesh
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Create an axis-aligned box spanning `min` to `max`
    ///
    /// Each face gets its own four vertices so normals stay flat and texture
    /// coordinates run `(0,0)` to `(1,1)` across the face: 24 vertices and
    /// 36 indices (12 triangles) in total.
    ///
    /// # Coordinate System
    /// Right-handed, Y-up. Faces are emitted in the order +Z, -Z, +X, -X, +Y, -Y.
    pub fn axis_aligned_box(min: &Vec3, max: &Vec3) -> Self {
        let (x0, y0, z0) = (min.x, min.y, min.z);
        let (x1, y1, z1) = (max.x, max.y, max.z);

        // (outward normal, corners counter-clockwise seen from outside)
        let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
            // Front (+Z)
            ([0.0, 0.0, 1.0], [[x0, y0, z1], [x1, y0, z1], [x1, y1, z1], [x0, y1, z1]]),
            // Back (-Z)
            ([0.0, 0.0, -1.0], [[x1, y0, z0], [x0, y0, z0], [x0, y1, z0], [x1, y1, z0]]),
            // Right (+X)
            ([1.0, 0.0, 0.0], [[x1, y0, z1], [x1, y0, z0], [x1, y1, z0], [x1, y1, z1]]),
            // Left (-X)
            ([-1.0, 0.0, 0.0], [[x0, y0, z0], [x0, y0, z1], [x0, y1, z1], [x0, y1, z0]]),
            // Top (+Y)
            ([0.0, 1.0, 0.0], [[x0, y1, z1], [x1, y1, z1], [x1, y1, z0], [x0, y1, z0]]),
            // Bottom (-Y)
            ([0.0, -1.0, 0.0], [[x0, y0, z0], [x1, y0, z0], [x1, y0, z1], [x0, y0, z1]]),
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (normal, corners) in faces {
            let base = vertices.len() as u32;
            for (corner, tex_coord) in corners.into_iter().zip(FACE_TEX_COORDS) {
                vertices.push(Vertex::new(corner, normal, tex_coord));
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
        }

        Self::new(vertices, indices)
    }

    /// Create the canonical unit cube spanning `[-0.5, 0.5]` on every axis
    ///
    /// Primitives share this geometry and place it with a local transform, see
    /// [`Mat4Ext::from_bounds`](crate::foundation::math::Mat4Ext::from_bounds).
    pub fn unit_cube() -> Self {
        Self::axis_aligned_box(&Vec3::new(-0.5, -0.5, -0.5), &Vec3::new(0.5, 0.5, 0.5))
    }

    /// Number of triangles described by the index list
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Smallest box enclosing every vertex, or `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.vertices.iter().map(|v| Vec3::from(v.position));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.inf(&p), hi.sup(&p))))
    }

    /// True if every index refers to an existing vertex and the list forms whole triangles
    pub fn is_well_formed(&self) -> bool {
        let count = self.vertices.len();
        self.indices.len() % 3 == 0 && self.indices.iter().all(|&i| (i as usize) < count)
    }

    /// Vertex data reinterpreted as bytes, ready for a vertex buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data reinterpreted as bytes, ready for an index buffer upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
