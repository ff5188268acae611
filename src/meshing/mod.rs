//! # Meshing
//!
//! This module turns chunk block data into renderable triangle meshes.
//!
//! ## Components
//!
//! * **Mesh**: the abstract output — vertex positions, UVs, and a triangle
//!   index list, with no rendering-API specifics
//! * **Mesher**: the face-culling algorithm that walks every block and emits a
//!   quad for each face adjacent to air
//! * **Atlas**: the fixed `(block type, face)` → texture-cell UV lookup
//!
//! ## Data Flow
//!
//! 1. The world (or a test) hands the mesher a chunk plus a neighbor resolver
//! 2. The mesher reads local blocks directly and boundary blocks through the
//!    resolver
//! 3. The produced [`ChunkMesh`] replaces the chunk's previous mesh wholesale

pub mod atlas;
pub mod mesh;
pub mod mesher;

pub use mesh::ChunkMesh;
pub use mesher::{build_chunk_mesh, BlockResolver, NoNeighbors};
