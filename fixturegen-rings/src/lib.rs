//! Fixturegen Rings - Ring fixtures from block designs
//!
//! This crate builds fixtures for solo ring events, where several rings run
//! in parallel each round:
//! - Precomputed balanced block designs for 5 and 6 rings
//! - Splitting a roster into blocks
//! - Interleaving block rounds into one schedule
//! - Greedy referee assignment
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: generate_ring_grid (orchestration)
//! - Level 2: assemble, assign_referees (phases)
//! - Level 3: partition_block_sizes, block instantiation (steps)
//! - Level 4: block tables, configuration

mod assembler;
mod blocks;
mod config;
mod partition;
mod referee;

pub use assembler::{generate_ring_grid, RingFixture, RingOutcome, RingRejection};
pub use blocks::{block, block_sizes, is_supported_ring_count, Block, SUPPORTED_RINGS};
pub use config::{RingConfig, DEFAULT_RINGS};
pub use partition::{nice_multiple, partition_block_sizes};
pub use referee::{assign_referees, can_referee, RefereeCount, RefereeReport};
