//! Data-file loading for part reliability configurations.
//!
//! Part configs are authored in RON, JSON, or TOML data files: each block
//! names a part, carries the configuration query that decides whether the
//! block applies, and defines the part's reliability curve and failure set.
//! The [`loader`] deserializes and resolves them into `shakedown-api` types;
//! [`loader::select_part_config`] picks the block that matches a given part.

pub mod loader;
pub mod schema;

pub use loader::{
    ConfigLoadError, FailureConfig, Format, PartConfig, load_part_configs, parse_part_configs,
    select_part_config,
};
