//! Core types for the queens puzzle engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the engine and the agent adapter:
//! the [`Column`] identity type, movement [`Direction`]s, the board row
//! storage type, and the move error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod id;

pub use direction::Direction;
pub use error::MoveError;
pub use id::{Column, Revision, Rows};
