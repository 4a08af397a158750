//! Test fixtures for queens development.
//!
//! Internal dev-dependency crate; not published.

#![forbid(unsafe_code)]

mod fixtures;

pub use fixtures::{descend, engine, engine_with_rows, CANONICAL_FOUR};
