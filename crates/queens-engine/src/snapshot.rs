//! Owned, read-only board snapshots for polling consumers.

use queens_core::{Revision, Rows};

use crate::engine::is_conflict_free;

/// A consistent copy of engine state at one point in time.
///
/// Produced by [`PuzzleEngine::snapshot()`](crate::PuzzleEngine::snapshot)
/// and [`SharedEngine::snapshot()`](crate::SharedEngine::snapshot). A
/// snapshot never shows a partially-applied move: it is taken while the
/// engine is not mid-mutation (enforced by `&self` borrows or by the
/// shared handle's lock). Viewers size their grid from
/// [`queens()`](BoardSnapshot::queens) once at startup and poll fresh
/// snapshots at their own cadence, comparing
/// [`revision()`](BoardSnapshot::revision) to skip redraws.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSnapshot {
    rows: Rows,
    solution_count: u64,
    revision: Revision,
}

impl BoardSnapshot {
    pub(crate) fn new(rows: Rows, solution_count: u64, revision: Revision) -> Self {
        Self {
            rows,
            solution_count,
            revision,
        }
    }

    /// Row values, one per column, in column order.
    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    /// Number of queens (and columns) on the board.
    pub fn queens(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Solution counter value at snapshot time.
    pub fn solution_count(&self) -> u64 {
        self.solution_count
    }

    /// Board revision at snapshot time.
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Whether the captured configuration is conflict-free.
    ///
    /// Pure view over the copied rows; the engine's counter is not
    /// involved.
    pub fn is_solution(&self) -> bool {
        is_conflict_free(&self.rows)
    }
}

#[cfg(test)]
mod tests {
    use queens_test_utils::{engine_with_rows, CANONICAL_FOUR};

    #[test]
    fn snapshot_reports_solved_without_counting() {
        let e = engine_with_rows(&CANONICAL_FOUR);
        let snap = e.snapshot();
        assert!(snap.is_solution());
        assert_eq!(snap.solution_count(), 0);
        assert_eq!(e.solution_count(), 0);
    }

    #[test]
    fn snapshot_sizes_viewer_grid() {
        let e = engine_with_rows(&[0, 2, 4, 1, 3]);
        let snap = e.snapshot();
        assert_eq!(snap.queens(), 5);
        assert_eq!(snap.rows().len(), 5);
    }
}
