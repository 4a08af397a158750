//! The puzzle engine: board ownership, move validation, solution counting.
//!
//! [`PuzzleEngine`] holds one row value per column and refuses any
//! transition that would leave the board. Column order is never
//! rearranged: the column index is the durable identity of the agent
//! controlling that queen.

use queens_core::{Column, Direction, MoveError, Revision, Rows};
use smallvec::smallvec;

use crate::config::{ConfigError, EngineConfig};
use crate::metrics::EngineMetrics;
use crate::snapshot::BoardSnapshot;

/// Whether `rows` is a conflict-free placement.
///
/// Scans all column pairs `(i, j)` with `i < j`: a pair conflicts when
/// the rows are equal (same row) or the row delta equals the column
/// delta in magnitude (same diagonal). Short-circuits on the first
/// conflict found. O(N²).
pub fn is_conflict_free(rows: &[u32]) -> bool {
    for i in 0..rows.len() {
        for j in (i + 1)..rows.len() {
            if rows[i] == rows[j] || rows[i].abs_diff(rows[j]) == (j - i) as u32 {
                return false;
            }
        }
    }
    true
}

/// Sole owner and arbiter of board state.
///
/// Created from an [`EngineConfig`] via [`new()`](PuzzleEngine::new);
/// a value of this type is always initialized — construction fails
/// rather than producing an engine without a board. All N positions
/// start at row 0 and the solution counter at 0.
///
/// # Ownership model
///
/// Mutating operations take `&mut self` and reads take `&self`, so a
/// single-threaded caller cannot observe a half-applied move. For
/// concurrent callers, wrap the engine in a
/// [`SharedEngine`](crate::SharedEngine).
#[derive(Clone, Debug)]
pub struct PuzzleEngine {
    rows: Rows,
    solution_count: u64,
    revision: Revision,
    metrics: EngineMetrics,
}

impl PuzzleEngine {
    /// Create an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSize`] when the configured board
    /// size is zero. No engine is produced on failure.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            rows: smallvec![0; config.queens as usize],
            solution_count: 0,
            revision: Revision::default(),
            metrics: EngineMetrics::default(),
        })
    }

    /// Number of queens (and columns) on the board.
    pub fn queens(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Move the queen in `column` one row up or down.
    ///
    /// Returns `Ok(true)` and applies the single-cell mutation when the
    /// move stays on the board. Returns `Ok(false)` with no mutation
    /// when the move would leave the `[0, N-1]` range — a boundary
    /// refusal is a normal game outcome, not a fault. `Up` decrements
    /// the row when the current value is at least 1; `Down` increments
    /// it when the current value is below N-1.
    ///
    /// Each call is atomic: the mutation, if any, is immediately
    /// visible to subsequent reads.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::ColumnOutOfRange`] when `column` is not on
    /// this board. The board is left unchanged.
    pub fn move_queen(&mut self, column: Column, direction: Direction) -> Result<bool, MoveError> {
        let queens = self.queens();
        if column.0 >= queens {
            self.metrics.invalid_column_rejections += 1;
            return Err(MoveError::ColumnOutOfRange { column, queens });
        }
        let index = column.0 as usize;
        let row = self.rows[index];
        let moved = match direction {
            Direction::Up if row >= 1 => {
                self.rows[index] = row - 1;
                true
            }
            Direction::Down if row < queens - 1 => {
                self.rows[index] = row + 1;
                true
            }
            _ => false,
        };
        if moved {
            self.revision = self.revision.next();
            self.metrics.moves_applied += 1;
        } else {
            self.metrics.moves_refused += 1;
        }
        Ok(moved)
    }

    /// Check whether the current configuration is a solution, counting it.
    ///
    /// Every call that returns `true` increments the solution counter by
    /// exactly 1, including repeated calls against an unchanged
    /// conflict-free board — the counter is deliberately not
    /// deduplicated. Callers that only want to display solved/unsolved
    /// should use [`peek_solution()`](PuzzleEngine::peek_solution).
    pub fn check_solution(&mut self) -> bool {
        self.metrics.solution_checks += 1;
        if is_conflict_free(&self.rows) {
            self.solution_count += 1;
            self.metrics.solutions_observed += 1;
            true
        } else {
            false
        }
    }

    /// Whether the current configuration is a solution, without counting.
    ///
    /// Same conflict logic as [`check_solution()`](PuzzleEngine::check_solution)
    /// but free of side effects, for read-only consumers.
    pub fn peek_solution(&self) -> bool {
        is_conflict_free(&self.rows)
    }

    /// The current row values, one per column, in column order.
    ///
    /// The borrow is immutable; engine state cannot be mutated through it.
    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    /// An owned, consistent copy of the current board state.
    ///
    /// For consumers (a viewer on its own polling cadence) that must
    /// outlive the borrow of [`rows()`](PuzzleEngine::rows).
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(self.rows.clone(), self.solution_count, self.revision)
    }

    /// Cumulative number of counting checks that found a solution.
    pub fn solution_count(&self) -> u64 {
        self.solution_count
    }

    /// Board change counter. Bumped on every applied move and on reset.
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Cumulative engine counters.
    pub fn metrics(&self) -> &EngineMetrics {
        &self.metrics
    }

    /// Return every queen to row 0 and zero the solution counter.
    ///
    /// Board size is kept. Metrics are zeroed along with the counter;
    /// the revision is bumped so pollers see the change.
    pub fn reset(&mut self) {
        self.rows.fill(0);
        self.solution_count = 0;
        self.metrics = EngineMetrics::default();
        self.revision = self.revision.next();
    }
}
