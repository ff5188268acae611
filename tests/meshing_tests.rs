//! Integration tests for face-culling meshing correctness.
//! These validate quad counts, culling of hidden faces, boundary resolution,
//! and outward-facing winding.

use std::collections::HashMap;

use cgmath::{InnerSpace, Point2, Point3, Vector3};
use voxel_world::meshing::{build_chunk_mesh, BlockResolver, ChunkMesh, NoNeighbors};
use voxel_world::voxels::{BlockType, ChunkData};

const WIDTH: usize = 10;
const HEIGHT: usize = 32;
const SCALE: f32 = 0.5;

fn empty_chunk(position: Point2<i32>) -> ChunkData {
    ChunkData::new(position, WIDTH, HEIGHT)
}

/// A neighbor resolver backed by a plain chunk map, standing in for the world.
struct MapResolver(HashMap<Point2<i32>, ChunkData>);

impl BlockResolver for MapResolver {
    fn block_in_chunk(&self, chunk: Point2<i32>, local: Point3<i32>) -> Option<BlockType> {
        self.0.get(&chunk).map(|chunk| chunk.block_at(local))
    }
}

#[test]
fn all_air_chunk_produces_empty_mesh() {
    let chunk = empty_chunk(Point2::new(0, 0));
    let mesh = build_chunk_mesh(&chunk, &NoNeighbors, SCALE);

    assert!(mesh.is_empty());
    assert_eq!(mesh.vertex_count(), 0);
    assert_eq!(mesh.triangles.len(), 0);
    assert_eq!(mesh.uvs.len(), 0);
}

#[test]
fn single_block_emits_six_quads() {
    let mut chunk = empty_chunk(Point2::new(0, 0));
    chunk.set_block(Point3::new(5, 10, 5), BlockType::DIRT);

    let mesh = build_chunk_mesh(&chunk, &NoNeighbors, SCALE);

    assert_eq!(mesh.face_count(), 6, "isolated block should emit 6 quads");
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.triangles.len(), 36);
    assert_eq!(
        mesh.uvs.len(),
        mesh.positions.len(),
        "uvs must stay parallel to positions"
    );
}

#[test]
fn meshing_is_deterministic() {
    let mut chunk = empty_chunk(Point2::new(2, -3));
    chunk.set_block(Point3::new(0, 0, 0), BlockType::DIRT);
    chunk.set_block(Point3::new(3, 7, 9), BlockType::STONE);
    chunk.set_block(Point3::new(9, 31, 0), BlockType::DIRT);

    let first = build_chunk_mesh(&chunk, &NoNeighbors, SCALE);
    let second = build_chunk_mesh(&chunk, &NoNeighbors, SCALE);

    assert_eq!(first, second);
}

#[test]
fn stacked_blocks_cull_the_shared_face() {
    let mut chunk = empty_chunk(Point2::new(0, 0));
    chunk.set_block(Point3::new(5, 10, 5), BlockType::DIRT);
    chunk.set_block(Point3::new(5, 11, 5), BlockType::DIRT);

    let mesh = build_chunk_mesh(&chunk, &NoNeighbors, SCALE);

    // 12 faces for two isolated blocks, minus the touching top/bottom pair.
    assert_eq!(mesh.face_count(), 10);

    // No quad may lie in the shared horizontal plane between the two blocks.
    let shared_plane = 11.0 * SCALE;
    for quad in mesh.positions.chunks(4) {
        assert!(
            !quad.iter().all(|v| v.y == shared_plane),
            "found a quad in the culled interior plane y = {shared_plane}"
        );
    }
}

#[test]
fn chunk_edge_block_is_visible_without_neighbors() {
    // All lateral out-of-chunk lookups resolve to air, so a corner block still
    // shows every face.
    let mut chunk = empty_chunk(Point2::new(0, 0));
    chunk.set_block(Point3::new(0, 5, 0), BlockType::STONE);

    let mesh = build_chunk_mesh(&chunk, &NoNeighbors, SCALE);
    assert_eq!(mesh.face_count(), 6);
}

#[test]
fn floor_block_keeps_bottom_face() {
    // y = -1 is below the world; the bottom face renders.
    let mut chunk = empty_chunk(Point2::new(0, 0));
    chunk.set_block(Point3::new(4, 0, 4), BlockType::DIRT);

    let mesh = build_chunk_mesh(&chunk, &NoNeighbors, SCALE);
    assert_eq!(mesh.face_count(), 6);
}

#[test]
fn adjacent_chunks_cull_the_shared_boundary_face() {
    let mut left = empty_chunk(Point2::new(0, 0));
    left.set_block(Point3::new(WIDTH as i32 - 1, 5, 3), BlockType::DIRT);
    let mut right = empty_chunk(Point2::new(1, 0));
    right.set_block(Point3::new(0, 5, 3), BlockType::DIRT);

    let mut chunks = HashMap::new();
    chunks.insert(left.position, left);
    chunks.insert(right.position, right);
    let resolver = MapResolver(chunks);

    let left_mesh = build_chunk_mesh(&resolver.0[&Point2::new(0, 0)], &resolver, SCALE);
    let right_mesh = build_chunk_mesh(&resolver.0[&Point2::new(1, 0)], &resolver, SCALE);

    assert_eq!(
        left_mesh.face_count(),
        5,
        "+x face at the boundary should be culled by the neighbor's block"
    );
    assert_eq!(
        right_mesh.face_count(),
        5,
        "-x face at the boundary should be culled by the neighbor's block"
    );
}

#[test]
fn absent_neighbor_chunk_resolves_to_air() {
    // Same block layout as above, but the right chunk is not loaded: the
    // boundary face must render instead of erroring.
    let mut left = empty_chunk(Point2::new(0, 0));
    left.set_block(Point3::new(WIDTH as i32 - 1, 5, 3), BlockType::DIRT);

    let mut chunks = HashMap::new();
    chunks.insert(left.position, left);
    let resolver = MapResolver(chunks);

    let mesh = build_chunk_mesh(&resolver.0[&Point2::new(0, 0)], &resolver, SCALE);
    assert_eq!(mesh.face_count(), 6);
}

#[test]
fn positions_are_scaled_by_block_scale() {
    let mut chunk = empty_chunk(Point2::new(0, 0));
    chunk.set_block(Point3::new(0, 0, 0), BlockType::DIRT);

    let mesh = build_chunk_mesh(&chunk, &NoNeighbors, SCALE);
    for vertex in &mesh.positions {
        for component in [vertex.x, vertex.y, vertex.z] {
            assert!(
                component == 0.0 || component == SCALE,
                "unit-cube corner {component} not scaled to the block scale"
            );
        }
    }
}

#[test]
fn every_triangle_winds_outward() {
    let mut chunk = empty_chunk(Point2::new(0, 0));
    chunk.set_block(Point3::new(5, 10, 5), BlockType::DIRT);

    let mesh = build_chunk_mesh(&chunk, &NoNeighbors, SCALE);
    let block_center = Point3::new(5.5 * SCALE, 10.5 * SCALE, 5.5 * SCALE);

    for triangle in mesh.triangles.chunks(3) {
        let a = mesh.positions[triangle[0] as usize];
        let b = mesh.positions[triangle[1] as usize];
        let c = mesh.positions[triangle[2] as usize];

        let normal = (b - a).cross(c - a);
        let center = Point3::new(
            (a.x + b.x + c.x) / 3.0,
            (a.y + b.y + c.y) / 3.0,
            (a.z + b.z + c.z) / 3.0,
        );
        let outward: Vector3<f32> = center - block_center;

        assert!(
            normal.dot(outward) > 0.0,
            "triangle {triangle:?} does not face outward"
        );
    }
}

#[test]
fn dirt_top_and_side_faces_use_distinct_atlas_cells() {
    let mut chunk = empty_chunk(Point2::new(0, 0));
    chunk.set_block(Point3::new(5, 10, 5), BlockType::DIRT);
    let dirt_mesh = build_chunk_mesh(&chunk, &NoNeighbors, SCALE);

    chunk.set_block(Point3::new(5, 10, 5), BlockType::STONE);
    let stone_mesh = build_chunk_mesh(&chunk, &NoNeighbors, SCALE);

    // One atlas column per quad, identified by the quad's smallest u.
    let cells = |mesh: &ChunkMesh| {
        let mut cells: Vec<u32> = mesh
            .uvs
            .chunks(4)
            .map(|quad| {
                let min_u = quad.iter().map(|uv| uv.x).fold(f32::INFINITY, f32::min);
                (min_u * 4.0).round() as u32
            })
            .collect();
        cells.sort_unstable();
        cells.dedup();
        cells
    };

    assert_eq!(
        cells(&dirt_mesh).len(),
        3,
        "dirt should sample three distinct atlas columns (top, side, bottom)"
    );
    assert_eq!(
        cells(&stone_mesh).len(),
        1,
        "stone should sample a single atlas column on every face"
    );
}
