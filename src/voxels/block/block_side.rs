//! # Block Side Module
//!
//! This module defines the six faces/sides of a voxel block, their outward
//! normals, and the unit-cube corner offsets used when a face is emitted as a
//! quad.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// The variant order is the order in which the mesher tests neighbors and
/// emits quads: [RIGHT, LEFT, FRONT, BACK, TOP, BOTTOM].
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The right face (facing positive X)
    RIGHT = 0,

    /// The left face (facing negative X)
    LEFT = 1,

    /// The front face (facing positive Z)
    FRONT = 2,

    /// The back face (facing negative Z)
    BACK = 3,

    /// The top face (facing positive Y)
    TOP = 4,

    /// The bottom face (facing negative Y)
    BOTTOM = 5,
}

impl BlockSide {
    /// Returns an array containing all six block faces in a consistent order.
    ///
    /// This is the order in which the mesher walks the neighbors of a block,
    /// so mesh output is deterministic.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::RIGHT,
            BlockSide::LEFT,
            BlockSide::FRONT,
            BlockSide::BACK,
            BlockSide::TOP,
            BlockSide::BOTTOM,
        ]
    }

    /// Returns the unit offset from a block to the neighbor this face looks at.
    pub fn normal(self) -> Vector3<i32> {
        match self {
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::FRONT => Vector3::new(0, 0, 1),
            BlockSide::BACK => Vector3::new(0, 0, -1),
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
        }
    }

    /// Returns the four unit-cube corner offsets of this face.
    ///
    /// The corners are ordered (bottom-left, top-left, bottom-right,
    /// top-right) relative to the face, so that splitting the quad into
    /// triangles `(v0, v1, v2)` and `(v1, v3, v2)` gives counter-clockwise,
    /// outward-facing winding on every side. The tables must not be reordered;
    /// the winding of the whole mesh depends on them.
    pub fn corner_offsets(self) -> [Vector3<i32>; 4] {
        match self {
            BlockSide::RIGHT => [
                Vector3::new(1, 0, 0),
                Vector3::new(1, 1, 0),
                Vector3::new(1, 0, 1),
                Vector3::new(1, 1, 1),
            ],
            BlockSide::LEFT => [
                Vector3::new(0, 0, 0),
                Vector3::new(0, 0, 1),
                Vector3::new(0, 1, 0),
                Vector3::new(0, 1, 1),
            ],
            BlockSide::FRONT => [
                Vector3::new(0, 0, 1),
                Vector3::new(1, 0, 1),
                Vector3::new(0, 1, 1),
                Vector3::new(1, 1, 1),
            ],
            BlockSide::BACK => [
                Vector3::new(0, 0, 0),
                Vector3::new(0, 1, 0),
                Vector3::new(1, 0, 0),
                Vector3::new(1, 1, 0),
            ],
            BlockSide::TOP => [
                Vector3::new(0, 1, 0),
                Vector3::new(0, 1, 1),
                Vector3::new(1, 1, 0),
                Vector3::new(1, 1, 1),
            ],
            BlockSide::BOTTOM => [
                Vector3::new(0, 0, 0),
                Vector3::new(1, 0, 0),
                Vector3::new(0, 0, 1),
                Vector3::new(1, 0, 1),
            ],
        }
    }
}
