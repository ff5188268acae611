#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel World
//!
//! The engineering core of a voxel-world engine: a 3D grid of typed blocks
//! partitioned into fixed-size chunks, each chunk converted on demand into a
//! renderable triangle mesh by culling faces that are never visible.
//!
//! ## Key Modules
//!
//! * [`config`] - Injected engine constants (chunk dimensions, block scale,
//!   load region, terrain parameters)
//! * [`voxels`] - Block types, chunk storage, terrain generation, and the
//!   world that owns them
//! * [`meshing`] - The face-culling mesher and its abstract mesh output
//!
//! ## Scope
//!
//! The core exposes block read/write and mesh-rebuild operations and stops at
//! the abstract mesh (positions, UVs, triangle indices). Camera control,
//! input handling, raycasting, physics, and GPU upload are external
//! collaborators: the interaction layer calls [`voxels::World::set_block`] /
//! [`voxels::World::get_block`] with integer block coordinates, and the
//! renderer consumes [`meshing::ChunkMesh`] values.
//!
//! ## Usage
//!
//! ```no_run
//! use cgmath::Point3;
//! use voxel_world::config::EngineConfig;
//! use voxel_world::voxels::{BlockType, World};
//!
//! let mut world = World::new(EngineConfig::default());
//! world.load_all();
//!
//! world.set_block(Point3::new(4, 20, 4), BlockType::STONE).unwrap();
//! assert_eq!(world.get_block(Point3::new(4, 20, 4)), BlockType::STONE);
//! ```

pub mod config;
pub mod meshing;
pub mod voxels;

pub use config::EngineConfig;
pub use meshing::ChunkMesh;
pub use voxels::{BlockSide, BlockType, ChunkData, World, WorldError};
