//! Engine configuration and validation.
//!
//! [`EngineConfig`] is the constructor input for
//! [`PuzzleEngine`](crate::PuzzleEngine). Board size is the only
//! externally supplied configuration value and is fixed for the life of
//! the engine.

use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EngineConfig::validate()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Board size is zero. The engine is not created.
    InvalidSize {
        /// The configured size that was rejected.
        configured: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { configured } => {
                write!(f, "board must hold at least one queen, got {configured}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── EngineConfig ───────────────────────────────────────────────────

/// Configuration for constructing a [`PuzzleEngine`](crate::PuzzleEngine).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of queens, one per column. Must be at least 1.
    pub queens: u32,
}

impl EngineConfig {
    /// A config for an `n`-queens board.
    pub fn new(queens: u32) -> Self {
        Self { queens }
    }

    /// Validate all structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSize`] when `queens` is zero.
    /// (Negative sizes are unrepresentable: the field is unsigned.)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queens == 0 {
            return Err(ConfigError::InvalidSize { configured: 0 });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_positive_size_succeeds() {
        assert!(EngineConfig::new(1).validate().is_ok());
        assert!(EngineConfig::new(8).validate().is_ok());
    }

    #[test]
    fn validate_zero_size_fails() {
        match EngineConfig::new(0).validate() {
            Err(ConfigError::InvalidSize { configured: 0 }) => {}
            other => panic!("expected InvalidSize, got {other:?}"),
        }
    }

    #[test]
    fn invalid_size_display() {
        let err = ConfigError::InvalidSize { configured: 0 };
        assert!(err.to_string().contains("at least one queen"));
    }
}
