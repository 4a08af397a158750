//! Adapter-level failure taxonomy.
//!
//! Everything here is reported synchronously to the calling platform as
//! "request rejected with a descriptive reason". The engine is never
//! left in a partial state by any of these paths.

use std::error::Error;
use std::fmt;

use queens_core::{Column, Direction};
use queens_engine::EngineError;

/// Reasons an agent request is rejected by the adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdapterError {
    /// The named agent never registered with this adapter.
    NotRegistered {
        /// The unknown agent name.
        name: String,
    },
    /// Every column already has a registered agent.
    BoardFull {
        /// Number of columns on the board.
        capacity: u32,
    },
    /// The direction token is not `"up"` or `"down"`.
    InvalidDirection {
        /// The token as received.
        token: String,
    },
    /// The engine refused the move at a board boundary.
    ///
    /// This is a game-rule outcome surfaced as an adapter failure so
    /// the calling agent learns its action had no effect.
    MoveRefused {
        /// The agent's column.
        column: Column,
        /// The attempted direction.
        direction: Direction,
    },
    /// The engine itself reported a fault.
    Engine(EngineError),
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRegistered { name } => write!(f, "agent '{name}' is not registered"),
            Self::BoardFull { capacity } => {
                write!(f, "all {capacity} columns already have a registered agent")
            }
            Self::InvalidDirection { token } => {
                write!(f, "not a valid move direction: '{token}'")
            }
            Self::MoveRefused { column, direction } => {
                write!(f, "could not move queen {column} {direction}")
            }
            Self::Engine(e) => write!(f, "engine: {e}"),
        }
    }
}

impl Error for AdapterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EngineError> for AdapterError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_descriptive() {
        let err = AdapterError::NotRegistered {
            name: "alice".into(),
        };
        assert!(err.to_string().contains("alice"));

        let err = AdapterError::InvalidDirection {
            token: "sideways".into(),
        };
        assert!(err.to_string().contains("sideways"));

        let err = AdapterError::MoveRefused {
            column: Column(2),
            direction: Direction::Up,
        };
        let msg = err.to_string();
        assert!(msg.contains("queen 2"));
        assert!(msg.contains("up"));
    }

    #[test]
    fn engine_fault_is_chained_as_source() {
        let err = AdapterError::Engine(EngineError::Poisoned);
        assert!(err.source().is_some());
    }
}
