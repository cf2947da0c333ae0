//! Block-id to atlas-tile mapping and its TOML config.
#![forbid(unsafe_code)]

pub mod config;
pub mod registry;

pub use config::{BlockDef, BlocksConfig};
pub use registry::{MAX_BLOCK_ID, TileIndex, TileRegistry};
