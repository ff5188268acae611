//! # Block Module
//!
//! This module provides the core block-related functionality for the voxel
//! world: the block type tag and the six block faces used for culling.

pub mod block_side;
pub mod block_type;

pub use block_side::BlockSide;
pub use block_type::BlockType;
