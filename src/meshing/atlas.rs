//! # Texture Atlas Module
//!
//! Maps `(BlockType, BlockSide)` to a cell of a fixed texture atlas and
//! produces the four UV coordinates for an emitted quad.
//!
//! Policy: `DIRT` maps its top, bottom, and side faces to three distinct atlas
//! cells; every other solid type maps all six faces to a single cell, so face
//! direction is irrelevant for them.

use cgmath::{Point2, Vector3};

use crate::voxels::block::{BlockSide, BlockType};

/// Number of cells along each axis of the square texture atlas.
pub const ATLAS_CELLS: u32 = 4;

/// Atlas cell column/row for a block face.
///
/// The outer dispatch is by block type; `DIRT` is the only type that looks at
/// the face direction.
fn cell_for(block: BlockType, side: BlockSide) -> (u32, u32) {
    match block {
        BlockType::DIRT => match side {
            BlockSide::TOP => (0, 0),
            BlockSide::BOTTOM => (2, 0),
            _ => (1, 0),
        },
        BlockType::STONE => (3, 0),
        BlockType::AIR => unreachable!("air blocks are never meshed"),
    }
}

/// Returns the four UV coordinates for one face of a block.
///
/// The UVs are in the same (bottom-left, top-left, bottom-right, top-right)
/// order as [`BlockSide::corner_offsets`], so callers can zip the two arrays
/// directly. The in-cell axes are chosen from the face plane: ±x faces use
/// (z, y), ±z faces use (x, y), and ±y faces use (x, z).
///
/// # Arguments
/// * `block` - The block type being meshed; must not be `AIR`
/// * `side` - The face direction of the quad
pub fn face_uvs(block: BlockType, side: BlockSide) -> [Point2<f32>; 4] {
    let (col, row) = cell_for(block, side);
    let corners = side.corner_offsets();
    corners.map(|corner| corner_uv(side, corner, col, row))
}

fn corner_uv(side: BlockSide, corner: Vector3<i32>, col: u32, row: u32) -> Point2<f32> {
    let (u, v) = match side {
        BlockSide::RIGHT | BlockSide::LEFT => (corner.z, corner.y),
        BlockSide::FRONT | BlockSide::BACK => (corner.x, corner.y),
        BlockSide::TOP | BlockSide::BOTTOM => (corner.x, corner.z),
    };

    let cells = ATLAS_CELLS as f32;
    Point2::new(
        (col as f32 + u as f32) / cells,
        (row as f32 + v as f32) / cells,
    )
}
