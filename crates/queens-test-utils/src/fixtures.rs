//! Reusable board fixtures.
//!
//! All fixtures drive the engine exclusively through its public move
//! API, so a fixture reaching a target configuration also exercises the
//! move path it was built from.

use queens_core::{Column, Direction};
use queens_engine::{EngineConfig, PuzzleEngine};

/// The canonical 4-queens solution, in column order.
pub const CANONICAL_FOUR: [u32; 4] = [1, 3, 0, 2];

/// A fresh `n`-queens engine with every queen at row 0.
///
/// # Panics
///
/// Panics if `n` is zero; fixtures are for valid boards only.
pub fn engine(n: u32) -> PuzzleEngine {
    PuzzleEngine::new(EngineConfig::new(n)).expect("fixture board size must be positive")
}

/// Move the queen in `column` down `steps` rows.
///
/// # Panics
///
/// Panics if any step is refused or the column is invalid — a fixture
/// that walks off the board is a bug in the test.
pub fn descend(engine: &mut PuzzleEngine, column: Column, steps: u32) {
    for _ in 0..steps {
        let moved = engine
            .move_queen(column, Direction::Down)
            .expect("fixture column must be on the board");
        assert!(moved, "fixture walked queen {column} off the board");
    }
}

/// An engine holding exactly `rows`, reached through the move API.
///
/// Board size is `rows.len()`; each queen starts at row 0 and descends
/// to its target row.
///
/// # Panics
///
/// Panics if `rows` is empty or any value is out of range for the board.
pub fn engine_with_rows(rows: &[u32]) -> PuzzleEngine {
    let mut e = engine(rows.len() as u32);
    for (i, &row) in rows.iter().enumerate() {
        descend(&mut e, Column(i as u32), row);
    }
    e
}
