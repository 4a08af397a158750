//! Queens: an N-queens puzzle engine with an agent-facing action protocol.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the queens sub-crates. For most users, adding `queens` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use queens::prelude::*;
//!
//! // A 4-queens board, every queen starting at row 0.
//! let engine = SharedEngine::new(EngineConfig::new(4)).unwrap();
//! let mut adapter = AgentAdapter::new(engine.clone());
//!
//! // Agents claim columns in registration order.
//! for name in ["a", "b", "c", "d"] {
//!     adapter.register(name).unwrap();
//! }
//!
//! // Walk the board to the canonical solution [1, 3, 0, 2].
//! adapter.act("a", "down").unwrap();
//! for _ in 0..3 {
//!     adapter.act("b", "down").unwrap();
//! }
//! adapter.act("d", "down").unwrap();
//! adapter.act("d", "down").unwrap();
//!
//! assert_eq!(adapter.finished("a"), Ok(true));
//! assert_eq!(engine.solution_count(), Ok(1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `queens-core` | IDs, directions, move errors |
//! | [`engine`] | `queens-engine` | The puzzle engine, snapshots, shared handle |
//! | [`adapter`] | `queens-adapter` | Agent registry and action translation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`queens-core`).
///
/// Contains [`types::Column`], [`types::Direction`], [`types::Revision`],
/// and the move error taxonomy.
pub use queens_core as types;

/// The puzzle engine (`queens-engine`).
///
/// [`engine::PuzzleEngine`] for single-caller use,
/// [`engine::SharedEngine`] for concurrent callers, and
/// [`engine::BoardSnapshot`] for read-only polling consumers.
pub use queens_engine as engine;

/// Agent registration and action translation (`queens-adapter`).
///
/// [`adapter::AgentAdapter`] maps external agent names to columns and
/// forwards their actions into the engine.
pub use queens_adapter as adapter;

/// Common imports for typical usage.
///
/// ```rust
/// use queens::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use queens_core::{Column, Direction, MoveError, Revision, Rows};

    // Engine
    pub use queens_engine::{
        BoardSnapshot, ConfigError, EngineConfig, EngineError, EngineMetrics, PuzzleEngine,
        SharedEngine,
    };

    // Adapter
    pub use queens_adapter::{AdapterError, AgentAdapter, AgentRegistry, Perception, QueenView};
}
