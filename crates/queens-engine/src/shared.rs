//! Shared engine handle for concurrent callers.
//!
//! [`SharedEngine`] wraps a [`PuzzleEngine`] behind one mutex per engine
//! instance. The whole board is a single indivisible resource: a
//! counting check reads all columns atomically with respect to any
//! in-flight move, so per-column locking would not be sound. Reads
//! through [`snapshot()`](SharedEngine::snapshot) always observe a
//! consistent board, never a partially-applied move.

use std::error::Error;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use queens_core::{Column, Direction, MoveError, Revision};

use crate::config::{ConfigError, EngineConfig};
use crate::engine::PuzzleEngine;
use crate::metrics::EngineMetrics;
use crate::snapshot::BoardSnapshot;

// Compile-time assertion: SharedEngine is Send + Sync, so it can be
// handed to adapter threads and viewer threads alike.
const _: () = {
    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send_sync::<SharedEngine>();
    }
};

// ── EngineError ────────────────────────────────────────────────────

/// Errors from operations on a [`SharedEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// The move addressed a column not on the board.
    Move(MoveError),
    /// A previous caller panicked while holding the engine lock.
    Poisoned,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(e) => write!(f, "{e}"),
            Self::Poisoned => write!(f, "engine lock poisoned by a panicked caller"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Move(e) => Some(e),
            Self::Poisoned => None,
        }
    }
}

impl From<MoveError> for EngineError {
    fn from(e: MoveError) -> Self {
        Self::Move(e)
    }
}

// ── SharedEngine ───────────────────────────────────────────────────

/// Clonable handle serializing all engine operations behind one mutex.
///
/// Every operation takes the lock for its full duration, giving
/// concurrent requesters exactly-once, consistent mutation semantics.
/// Cloning the handle shares the same underlying engine.
#[derive(Clone, Debug)]
pub struct SharedEngine {
    inner: Arc<Mutex<PuzzleEngine>>,
    queens: u32,
}

impl SharedEngine {
    /// Create a shared engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSize`] when the configured board
    /// size is zero.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self::from(PuzzleEngine::new(config)?))
    }

    /// Number of queens on the board. Fixed at construction, so this
    /// reads without taking the lock.
    pub fn queens(&self) -> u32 {
        self.queens
    }

    /// Move the queen in `column`; see
    /// [`PuzzleEngine::move_queen()`](crate::PuzzleEngine::move_queen).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Move`] for an out-of-range column and
    /// [`EngineError::Poisoned`] when the lock is poisoned.
    pub fn move_queen(&self, column: Column, direction: Direction) -> Result<bool, EngineError> {
        Ok(self.lock()?.move_queen(column, direction)?)
    }

    /// Counting solution check; see
    /// [`PuzzleEngine::check_solution()`](crate::PuzzleEngine::check_solution).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Poisoned`] when the lock is poisoned.
    pub fn check_solution(&self) -> Result<bool, EngineError> {
        Ok(self.lock()?.check_solution())
    }

    /// Pure solution predicate; never increments the counter.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Poisoned`] when the lock is poisoned.
    pub fn peek_solution(&self) -> Result<bool, EngineError> {
        Ok(self.lock()?.peek_solution())
    }

    /// An owned, consistent copy of the current board state.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Poisoned`] when the lock is poisoned.
    pub fn snapshot(&self) -> Result<BoardSnapshot, EngineError> {
        Ok(self.lock()?.snapshot())
    }

    /// Current cumulative solution counter value.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Poisoned`] when the lock is poisoned.
    pub fn solution_count(&self) -> Result<u64, EngineError> {
        Ok(self.lock()?.solution_count())
    }

    /// Current board revision.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Poisoned`] when the lock is poisoned.
    pub fn revision(&self) -> Result<Revision, EngineError> {
        Ok(self.lock()?.revision())
    }

    /// A copy of the cumulative engine counters.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Poisoned`] when the lock is poisoned.
    pub fn metrics(&self) -> Result<EngineMetrics, EngineError> {
        Ok(self.lock()?.metrics().clone())
    }

    /// Reset the board; see [`PuzzleEngine::reset()`](crate::PuzzleEngine::reset).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Poisoned`] when the lock is poisoned.
    pub fn reset(&self) -> Result<(), EngineError> {
        self.lock()?.reset();
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, PuzzleEngine>, EngineError> {
        self.inner.lock().map_err(|_| EngineError::Poisoned)
    }
}

impl From<PuzzleEngine> for SharedEngine {
    fn from(engine: PuzzleEngine) -> Self {
        let queens = engine.queens();
        Self {
            inner: Arc::new(Mutex::new(engine)),
            queens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn shared(n: u32) -> SharedEngine {
        SharedEngine::new(EngineConfig::new(n)).unwrap()
    }

    #[test]
    fn clones_share_one_board() {
        let a = shared(4);
        let b = a.clone();
        a.move_queen(Column(0), Direction::Down).unwrap();
        assert_eq!(b.snapshot().unwrap().rows(), &[1, 0, 0, 0]);
    }

    #[test]
    fn queens_reads_without_locking() {
        let e = shared(6);
        assert_eq!(e.queens(), 6);
    }

    #[test]
    fn errors_pass_through_the_handle() {
        let e = shared(4);
        match e.move_queen(Column(9), Direction::Up) {
            Err(EngineError::Move(MoveError::ColumnOutOfRange { .. })) => {}
            other => panic!("expected Move(ColumnOutOfRange), got {other:?}"),
        }
    }

    #[test]
    fn concurrent_movers_touch_only_their_columns() {
        let e = shared(8);
        let mut handles = Vec::new();
        for column in 0..8u32 {
            let e = e.clone();
            handles.push(thread::spawn(move || {
                // Each thread walks its own queen to its column index.
                for _ in 0..column {
                    assert_eq!(e.move_queen(Column(column), Direction::Down), Ok(true));
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(e.snapshot().unwrap().rows(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn snapshots_under_concurrent_moves_stay_in_range() {
        let e = shared(4);
        let mover = {
            let e = e.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    let _ = e.move_queen(Column(1), Direction::Down);
                    let _ = e.move_queen(Column(1), Direction::Up);
                }
            })
        };
        for _ in 0..200 {
            let snap = e.snapshot().unwrap();
            assert_eq!(snap.queens(), 4);
            assert!(snap.rows().iter().all(|&r| r < 4));
        }
        mover.join().unwrap();
    }

    #[test]
    fn counting_semantics_survive_the_handle() {
        let e = shared(1);
        let checker = {
            let e = e.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(e.check_solution(), Ok(true));
                }
            })
        };
        checker.join().unwrap();
        assert_eq!(e.solution_count(), Ok(100));
    }

    #[test]
    fn poisoned_lock_is_reported_not_propagated() {
        let e = shared(4);
        let poisoner = {
            let e = e.clone();
            thread::spawn(move || {
                let _guard = e.lock().expect("lock not yet poisoned");
                panic!("poison the engine lock");
            })
        };
        assert!(poisoner.join().is_err());
        assert_eq!(e.check_solution(), Err(EngineError::Poisoned));
        assert_eq!(e.snapshot(), Err(EngineError::Poisoned));
    }
}
