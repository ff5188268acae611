//! # Voxel World Demo Entry Point
//!
//! Loads the configured world, reports mesh statistics, and exercises the
//! block-edit path once. The real consumers of the core are the rendering and
//! interaction collaborators; this binary only demonstrates the contract.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release [config.json]
//! ```

use cgmath::Point3;
use log::{error, info};

use voxel_world::config::EngineConfig;
use voxel_world::voxels::{BlockType, World};

fn main() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = match std::env::args().nth(1) {
        Some(path) => match EngineConfig::from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("could not load config from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    let mut world = World::new(config);
    world.load_all();

    let (vertices, triangles) = world
        .chunk_positions()
        .filter_map(|position| world.mesh_at(position))
        .fold((0, 0), |(v, t), mesh| {
            (v + mesh.vertex_count(), t + mesh.triangle_count())
        });
    info!(
        "world ready: {} chunks, {} vertices, {} triangles",
        world.loaded_chunks(),
        vertices,
        triangles
    );

    // One place/remove round trip through the edit path.
    let block = Point3::new(4, 20, 4);
    for block_type in [BlockType::STONE, BlockType::AIR] {
        if let Err(e) = world.set_block(block, block_type) {
            error!("edit failed: {e}");
            std::process::exit(1);
        }
        info!("block {:?} is now {:?}", block, world.get_block(block));
    }
}
