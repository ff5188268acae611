//! Integration tests for the Perlin column-height terrain function.

use voxel_world::config::EngineConfig;
use voxel_world::voxels::{BlockType, TerrainGenerator};

fn column<'a>(
    blocks: &'a [BlockType],
    config: &EngineConfig,
    x: usize,
    z: usize,
) -> impl Iterator<Item = BlockType> + 'a {
    let height = config.chunk_height;
    let width = config.chunk_width;
    (0..height).map(move |y| blocks[(x * height + y) * width + z])
}

#[test]
fn generation_is_deterministic() {
    let config = EngineConfig::default();
    let generator = TerrainGenerator::new(&config);

    assert_eq!(generator.generate(5.0, 5.0), generator.generate(5.0, 5.0));

    // A second generator with the same config samples the same noise field.
    let other = TerrainGenerator::new(&config);
    assert_eq!(generator.generate(-7.5, 12.5), other.generate(-7.5, 12.5));
}

#[test]
fn grid_has_exact_chunk_dimensions() {
    let config = EngineConfig::default();
    let generator = TerrainGenerator::new(&config);

    let blocks = generator.generate(0.0, 0.0);
    assert_eq!(
        blocks.len(),
        config.chunk_width * config.chunk_height * config.chunk_width
    );
}

#[test]
fn column_fill_counts_stay_in_the_reference_band() {
    // height = noise * 5 + 10 with noise remapped to [0, 1], so every column
    // holds between 10 and 15 solid blocks.
    let config = EngineConfig::default();
    let generator = TerrainGenerator::new(&config);

    for offsets in [(0.0, 0.0), (5.0, 0.0), (123.0, -456.0), (-2.5, 97.5)] {
        let blocks = generator.generate(offsets.0, offsets.1);
        for x in 0..config.chunk_width {
            for z in 0..config.chunk_width {
                let filled = column(&blocks, &config, x, z)
                    .filter(|block| block.is_solid())
                    .count();
                assert!(
                    (10..=15).contains(&filled),
                    "column ({x},{z}) at offsets {offsets:?} has {filled} solid blocks"
                );
            }
        }
    }
}

#[test]
fn columns_are_solid_below_the_surface_and_air_above() {
    let config = EngineConfig::default();
    let generator = TerrainGenerator::new(&config);
    let blocks = generator.generate(25.0, 25.0);

    for x in 0..config.chunk_width {
        for z in 0..config.chunk_width {
            let cells: Vec<BlockType> = column(&blocks, &config, x, z).collect();
            let surface = cells.iter().filter(|block| block.is_solid()).count();

            for (y, block) in cells.iter().enumerate() {
                let expected = if y < surface {
                    BlockType::DIRT
                } else {
                    BlockType::AIR
                };
                assert_eq!(
                    *block, expected,
                    "column ({x},{z}) cell y={y} breaks the contiguous fill"
                );
            }
        }
    }
}

#[test]
fn offsets_shift_the_sampled_noise_window() {
    // Offsets are continuous world-space values, so a generator queried at
    // offset `width` reproduces the columns a neighbor samples at matching
    // world coordinates: column (x, z) at offset w equals column (x + w, z)
    // at offset 0 whenever both are in range.
    let config = EngineConfig::default();
    let generator = TerrainGenerator::new(&config);

    let base = generator.generate(0.0, 0.0);
    let shifted = generator.generate(4.0, 0.0);

    for x in 0..config.chunk_width - 4 {
        for z in 0..config.chunk_width {
            let from_base: Vec<BlockType> = column(&base, &config, x + 4, z).collect();
            let from_shifted: Vec<BlockType> = column(&shifted, &config, x, z).collect();
            assert_eq!(
                from_base, from_shifted,
                "column ({x},{z}) does not line up across the offset shift"
            );
        }
    }
}
