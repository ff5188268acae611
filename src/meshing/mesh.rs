//! # Mesh Module
//!
//! The abstract triangle mesh produced for each chunk: vertex positions, UV
//! coordinates, and a triangle index list. This is where the core's contract
//! ends; GPU upload, normal/bounds recomputation, and any post-hoc vertex
//! welding belong to the rendering collaborator.

use cgmath::{Point2, Point3, Vector3};

use super::atlas;
use crate::voxels::block::{BlockSide, BlockType};

/// A renderable triangle mesh for one chunk.
///
/// The three arrays are parallel per vertex (`positions` and `uvs` always have
/// the same length), and `triangles` holds vertex indices with stride 3, each
/// triple winding counter-clockwise on the front face. Vertex positions are
/// chunk-local, already scaled by the block scale; the renderer places the
/// chunk at its world origin.
///
/// A mesh is produced fresh on every rebuild and the previous mesh is
/// discarded wholesale, so `PartialEq` compares rebuilds by content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChunkMesh {
    /// Vertex positions in chunk-local space.
    pub positions: Vec<Point3<f32>>,

    /// One UV coordinate per vertex.
    pub uvs: Vec<Point2<f32>>,

    /// Triangle index list, stride 3, counter-clockwise front faces.
    pub triangles: Vec<u32>,
}

impl ChunkMesh {
    /// Creates a new, empty mesh.
    pub fn new() -> Self {
        ChunkMesh::default()
    }

    /// Appends one block face as a quad (4 vertices, 2 triangles).
    ///
    /// The four corners come from [`BlockSide::corner_offsets`] in
    /// (bottom-left, top-left, bottom-right, top-right) order and the two
    /// triangles split the quad as `(v0, v1, v2)` and `(v1, v3, v2)` over the
    /// last four appended vertices. That exact split is what keeps the winding
    /// outward-facing across all six sides.
    ///
    /// # Arguments
    /// * `block` - The block type, used for the atlas UV lookup; must not be `AIR`
    /// * `side` - Which face of the block to emit
    /// * `local` - The block's chunk-local coordinate
    /// * `scale` - World-space size of one block edge
    pub fn push_face(
        &mut self,
        block: BlockType,
        side: BlockSide,
        local: Point3<i32>,
        scale: f32,
    ) {
        for corner in side.corner_offsets() {
            let cell: Vector3<i32> = corner + Vector3::new(local.x, local.y, local.z);
            self.positions.push(Point3::new(
                cell.x as f32 * scale,
                cell.y as f32 * scale,
                cell.z as f32 * scale,
            ));
        }
        self.uvs.extend(atlas::face_uvs(block, side));

        let n = self.positions.len() as u32;
        self.triangles
            .extend([n - 4, n - 3, n - 2, n - 3, n - 1, n - 2]);
    }

    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Number of quads (block faces) in the mesh.
    pub fn face_count(&self) -> usize {
        self.positions.len() / 4
    }

    /// Returns `true` if the mesh contains no geometry.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
