//! Ordered agent-name registry.
//!
//! Columns are handed out in registration order: the first agent to
//! register controls column 0, the next column 1, and so on. The
//! mapping is closed-world and monotonic — a column is never released
//! or reassigned for the life of the registry.

use indexmap::IndexMap;
use queens_core::Column;

use crate::error::AdapterError;

/// Stable mapping from external agent names to fixed column slots.
///
/// Backed by an insertion-ordered map, so the entry at index `i` always
/// holds column `i`. Capacity is the board size; registration is
/// rejected once every column is taken.
#[derive(Clone, Debug)]
pub struct AgentRegistry {
    agents: IndexMap<String, Column>,
    capacity: u32,
}

impl AgentRegistry {
    /// An empty registry with one slot per board column.
    pub fn new(capacity: u32) -> Self {
        Self {
            agents: IndexMap::with_capacity(capacity as usize),
            capacity,
        }
    }

    /// Register `name`, assigning the next free column.
    ///
    /// Registering an already-known name is idempotent and returns the
    /// column assigned on first contact.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::BoardFull`] when all columns are taken.
    pub fn register(&mut self, name: &str) -> Result<Column, AdapterError> {
        if let Some(&column) = self.agents.get(name) {
            return Ok(column);
        }
        if self.agents.len() as u32 >= self.capacity {
            return Err(AdapterError::BoardFull {
                capacity: self.capacity,
            });
        }
        let column = Column(self.agents.len() as u32);
        self.agents.insert(name.to_string(), column);
        Ok(column)
    }

    /// The column assigned to `name`, if registered.
    pub fn column_of(&self, name: &str) -> Option<Column> {
        self.agents.get(name).copied()
    }

    /// The agent name controlling `column`, if any has registered.
    pub fn name_of(&self, column: Column) -> Option<&str> {
        // Entry order is registration order, which is column order.
        self.agents
            .get_index(column.0 as usize)
            .map(|(name, _)| name.as_str())
    }

    /// Number of registered agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether no agent has registered yet.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Whether every column has a registered agent.
    pub fn is_full(&self) -> bool {
        self.agents.len() as u32 >= self.capacity
    }

    /// Total number of column slots.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_registered_gets_column_zero() {
        let mut r = AgentRegistry::new(3);
        assert_eq!(r.register("alice"), Ok(Column(0)));
        assert_eq!(r.register("bob"), Ok(Column(1)));
        assert_eq!(r.register("carol"), Ok(Column(2)));
    }

    #[test]
    fn re_registration_is_idempotent() {
        let mut r = AgentRegistry::new(2);
        assert_eq!(r.register("alice"), Ok(Column(0)));
        assert_eq!(r.register("alice"), Ok(Column(0)));
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn registration_rejected_once_full() {
        let mut r = AgentRegistry::new(1);
        r.register("alice").unwrap();
        match r.register("bob") {
            Err(AdapterError::BoardFull { capacity: 1 }) => {}
            other => panic!("expected BoardFull, got {other:?}"),
        }
        // The known agent still resolves after a rejected registration.
        assert_eq!(r.register("alice"), Ok(Column(0)));
    }

    #[test]
    fn name_lookup_by_column() {
        let mut r = AgentRegistry::new(3);
        r.register("alice").unwrap();
        r.register("bob").unwrap();
        assert_eq!(r.name_of(Column(0)), Some("alice"));
        assert_eq!(r.name_of(Column(1)), Some("bob"));
        assert_eq!(r.name_of(Column(2)), None);
    }

    #[test]
    fn column_lookup_by_name() {
        let mut r = AgentRegistry::new(2);
        r.register("alice").unwrap();
        assert_eq!(r.column_of("alice"), Some(Column(0)));
        assert_eq!(r.column_of("mallory"), None);
    }
}
