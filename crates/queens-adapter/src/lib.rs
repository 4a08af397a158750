//! Agent registration and action translation for the queens engine.
//!
//! This crate is the bridge between an external multi-agent platform
//! and the engine's narrow contract. It maps agent names to fixed
//! column slots in registration order, translates direction tokens into
//! engine moves, and surfaces engine refusals as descriptive failures
//! the calling platform can report back to its agents.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adapter;
pub mod error;
pub mod registry;

pub use adapter::{AgentAdapter, Perception, QueenView};
pub use error::AdapterError;
pub use registry::AgentRegistry;
