//! Authoritative board state and move validation for the queens puzzle.
//!
//! [`PuzzleEngine`] is the sole owner and arbiter of board state: it
//! validates moves, detects conflict-free placements, and counts the
//! solutions it has observed. External collaborators (a viewer polling
//! snapshots, an agent adapter forwarding actions) depend on this crate;
//! it depends on nothing but `queens-core`.
//!
//! Single-caller deployments use [`PuzzleEngine`] directly — `&mut self`
//! mutators make aliased mutation unrepresentable. Multi-caller
//! deployments wrap it in a [`SharedEngine`], the single mutual-exclusion
//! boundary per engine instance.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod metrics;
pub mod shared;
pub mod snapshot;

pub use config::{ConfigError, EngineConfig};
pub use engine::{is_conflict_free, PuzzleEngine};
pub use metrics::EngineMetrics;
pub use shared::{EngineError, SharedEngine};
pub use snapshot::BoardSnapshot;
