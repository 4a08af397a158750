//! The agent-facing action surface.
//!
//! [`AgentAdapter`] translates platform requests (register, act,
//! perceive, finished) into engine operations. Every operation except
//! registration requires the caller to be a registered agent: the world
//! is closed to outsiders once columns are assigned.

use std::thread;
use std::time::Duration;

use queens_core::{Column, Direction};
use queens_engine::SharedEngine;

use crate::error::AdapterError;
use crate::registry::AgentRegistry;

/// One agent's view of the board, in column order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueenView {
    /// The column this entry describes.
    pub column: Column,
    /// Name of the agent controlling the column, if one has registered.
    pub agent: Option<String>,
    /// Current row of the column's queen.
    pub row: u32,
}

/// What a perceiving agent learns: its own identity plus every queen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Perception {
    /// The perceiving agent's own column.
    pub own_column: Column,
    /// Every column's controller and position, in column order.
    pub queens: Vec<QueenView>,
}

/// Adapter between an external agent platform and one [`SharedEngine`].
///
/// Holds the name-to-column registry and the move-delay policy. The
/// delay is applied after each move attempt, before control returns to
/// the agent — it exists so an external animation can finish, and it is
/// adapter policy, never engine behavior. Default is zero.
#[derive(Debug)]
pub struct AgentAdapter {
    engine: SharedEngine,
    registry: AgentRegistry,
    move_delay: Duration,
}

impl AgentAdapter {
    /// An adapter for `engine` with an empty registry and no move delay.
    pub fn new(engine: SharedEngine) -> Self {
        let registry = AgentRegistry::new(engine.queens());
        Self {
            engine,
            registry,
            move_delay: Duration::ZERO,
        }
    }

    /// Register an agent, assigning the next free column.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::BoardFull`] when every column is taken.
    pub fn register(&mut self, name: &str) -> Result<Column, AdapterError> {
        self.registry.register(name)
    }

    /// Perform a vertical move for a registered agent.
    ///
    /// The direction arrives as the wire token (`"up"` or `"down"`).
    /// After the engine accepts or refuses the move, the configured
    /// move delay elapses before the outcome is reported.
    ///
    /// # Errors
    ///
    /// [`AdapterError::NotRegistered`] for unknown agents,
    /// [`AdapterError::InvalidDirection`] for unknown tokens,
    /// [`AdapterError::MoveRefused`] when the move would leave the
    /// board, and [`AdapterError::Engine`] for engine faults.
    pub fn act(&self, name: &str, direction_token: &str) -> Result<(), AdapterError> {
        let column = self.resolve(name)?;
        let direction =
            Direction::from_token(direction_token).ok_or_else(|| AdapterError::InvalidDirection {
                token: direction_token.to_string(),
            })?;
        let moved = self.engine.move_queen(column, direction)?;
        if !self.move_delay.is_zero() {
            thread::sleep(self.move_delay);
        }
        if moved {
            Ok(())
        } else {
            Err(AdapterError::MoveRefused { column, direction })
        }
    }

    /// The board as seen by a registered agent.
    ///
    /// Taken from one consistent snapshot, so no queen is ever observed
    /// mid-move.
    ///
    /// # Errors
    ///
    /// [`AdapterError::NotRegistered`] for unknown agents,
    /// [`AdapterError::Engine`] for engine faults.
    pub fn perceive(&self, name: &str) -> Result<Perception, AdapterError> {
        let own_column = self.resolve(name)?;
        let snapshot = self.engine.snapshot()?;
        let queens = snapshot
            .rows()
            .iter()
            .enumerate()
            .map(|(i, &row)| {
                let column = Column(i as u32);
                QueenView {
                    column,
                    agent: self.registry.name_of(column).map(str::to_string),
                    row,
                }
            })
            .collect();
        Ok(Perception { own_column, queens })
    }

    /// Ask the engine whether the current configuration is a solution.
    ///
    /// Forwards to the counting check: every call that reports `true`
    /// also increments the engine's solution counter, including
    /// repeated calls against an unchanged board.
    ///
    /// # Errors
    ///
    /// [`AdapterError::NotRegistered`] for unknown agents,
    /// [`AdapterError::Engine`] for engine faults.
    pub fn finished(&self, name: &str) -> Result<bool, AdapterError> {
        self.resolve(name)?;
        Ok(self.engine.check_solution()?)
    }

    /// Set the post-move delay. Requires a registered agent, like every
    /// other adapter operation.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::NotRegistered`] for unknown agents.
    pub fn set_move_delay(&mut self, name: &str, delay: Duration) -> Result<(), AdapterError> {
        self.resolve(name)?;
        self.move_delay = delay;
        Ok(())
    }

    /// The currently configured post-move delay.
    pub fn move_delay(&self) -> Duration {
        self.move_delay
    }

    /// Number of agents registered so far.
    pub fn registered(&self) -> usize {
        self.registry.len()
    }

    /// The engine handle this adapter forwards to.
    pub fn engine(&self) -> &SharedEngine {
        &self.engine
    }

    fn resolve(&self, name: &str) -> Result<Column, AdapterError> {
        self.registry
            .column_of(name)
            .ok_or_else(|| AdapterError::NotRegistered {
                name: name.to_string(),
            })
    }
}
