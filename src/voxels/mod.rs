//! # Voxel Core
//!
//! This module contains the voxel data model: block types, chunk storage,
//! terrain generation, and the world that ties them together.
//!
//! ## Architecture
//!
//! * **Block**: the typed voxel cell and the six faces used for culling
//! * **Chunk**: a dense, fixed-size grid of blocks, the unit of loading and
//!   meshing
//! * **Terrain**: the pure noise function that fills new chunks
//! * **World**: the chunk map, initial load, and block edit routing
//!
//! ## Data Flow
//!
//! 1. The world generates every chunk of the load region through the terrain
//!    generator
//! 2. Block reads and edits arrive as world-space coordinates and are routed
//!    to the owning chunk
//! 3. Each edit triggers a full mesh rebuild of that chunk via
//!    [`crate::meshing`]

pub mod block;
pub mod chunk;
pub mod terrain;
pub mod world;

pub use block::{BlockSide, BlockType};
pub use chunk::ChunkData;
pub use terrain::TerrainGenerator;
pub use world::{block_containing_point, World, WorldError};
