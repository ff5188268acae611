//! # Chunk Meshing Module
//!
//! Converts a chunk's block grid into a [`ChunkMesh`] by per-block, per-face
//! visibility testing: a face is emitted only when the neighboring cell is
//! air. Neighbors inside the chunk are read from the local grid; neighbors
//! across a chunk boundary are resolved through an injected
//! [`BlockResolver`], which keeps the mesher testable in isolation without a
//! real world behind it.
//!
//! Meshing is a pure function of the chunk and its neighbors: every call
//! recomputes the full mesh and the previous mesh is irrelevant. There is no
//! greedy merging and no incremental update; a single block edit remeshes the
//! whole chunk.

use cgmath::{Point2, Point3};
use log::trace;

use super::mesh::ChunkMesh;
use crate::voxels::block::{BlockSide, BlockType};
use crate::voxels::chunk::ChunkData;

/// Neighbor-lookup capability handed to the mesher.
///
/// Implementations resolve a block in an arbitrary chunk by chunk-grid
/// coordinate and in-range local coordinate. Returning `None` means the chunk
/// is not loaded; by policy the mesher treats that as air, so the boundary
/// faces of the loaded region always render.
pub trait BlockResolver {
    /// Looks up a block in the chunk at `chunk`, or `None` if that chunk is
    /// not loaded. `local` is always within the chunk grid when called by the
    /// mesher.
    fn block_in_chunk(&self, chunk: Point2<i32>, local: Point3<i32>) -> Option<BlockType>;
}

/// A resolver with no loaded chunks: every cross-chunk lookup is air.
///
/// Useful for meshing a chunk in isolation.
pub struct NoNeighbors;

impl BlockResolver for NoNeighbors {
    fn block_in_chunk(&self, _chunk: Point2<i32>, _local: Point3<i32>) -> Option<BlockType> {
        None
    }
}

/// Builds the full mesh for one chunk.
///
/// Iterates every local block coordinate (y outer, then x, then z); air
/// blocks emit nothing, and each solid block emits one quad per face whose
/// resolved neighbor is air.
///
/// # Arguments
/// * `chunk` - The chunk to mesh
/// * `neighbors` - Cross-chunk lookup for blocks outside `chunk`'s grid
/// * `block_scale` - World-space size of one block edge
pub fn build_chunk_mesh(
    chunk: &ChunkData,
    neighbors: &impl BlockResolver,
    block_scale: f32,
) -> ChunkMesh {
    let mut mesh = ChunkMesh::new();

    for y in 0..chunk.height() as i32 {
        for x in 0..chunk.width() as i32 {
            for z in 0..chunk.width() as i32 {
                let local = Point3::new(x, y, z);
                let block = chunk.block_at(local);
                if block.is_air() {
                    continue;
                }

                for side in BlockSide::all() {
                    if neighbor_block(chunk, neighbors, local + side.normal()).is_air() {
                        mesh.push_face(block, side, local, block_scale);
                    }
                }
            }
        }
    }

    trace!(
        "meshed chunk {:?}: {} faces, {} vertices",
        chunk.position,
        mesh.face_count(),
        mesh.vertex_count()
    );

    mesh
}

/// Resolves the block at a possibly out-of-chunk local coordinate.
///
/// Vertical coordinates outside `[0, height)` are air. Horizontal coordinates
/// outside `[0, width)` wrap into the adjacent chunk: the local coordinate
/// wraps by the chunk width on the crossed axis and the chunk-grid coordinate
/// shifts by ±1 on that axis before querying the resolver.
fn neighbor_block(
    chunk: &ChunkData,
    neighbors: &impl BlockResolver,
    position: Point3<i32>,
) -> BlockType {
    if position.y < 0 || position.y >= chunk.height() as i32 {
        return BlockType::AIR;
    }

    if chunk.contains_local(position) {
        return chunk.block_at(position);
    }

    let width = chunk.width() as i32;
    let neighbor_chunk = Point2::new(
        chunk.position.x + position.x.div_euclid(width),
        chunk.position.y + position.z.div_euclid(width),
    );
    let neighbor_local = Point3::new(
        position.x.rem_euclid(width),
        position.y,
        position.z.rem_euclid(width),
    );

    // An unloaded neighbor chunk is air by policy, never an error.
    neighbors
        .block_in_chunk(neighbor_chunk, neighbor_local)
        .unwrap_or(BlockType::AIR)
}
