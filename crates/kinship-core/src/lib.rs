//! Kinship Core: shared types, parent resolution, errors, and config traits.
//!
//! This crate has no internal Kinship dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`types`]: person records as received and after resolution
//! - [`resolver`]: name-based mother/father resolution
//! - [`config`]: the [`ConfigManager`] trait implemented by binaries
//! - [`error`]: Error types and Result alias

pub mod config;
pub mod error;
pub mod resolver;
pub mod types;

mod proptests;

// Re-export key types at crate root for convenience
pub use config::ConfigManager;
pub use error::{Error, Result};
pub use resolver::{ParentIndex, ResolutionStats, find_by_slug, resolve, resolve_with_stats};
pub use types::{EnrichedPerson, Person, Sex};
