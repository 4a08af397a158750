//! Cumulative engine counters.
//!
//! [`EngineMetrics`] is the engine's observability surface: plain
//! counters maintained inline by the operations themselves, read via
//! [`PuzzleEngine::metrics()`](crate::PuzzleEngine::metrics) and zeroed
//! by [`reset()`](crate::PuzzleEngine::reset).

/// Counters accumulated over the life of an engine (or since reset).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineMetrics {
    /// Moves that were applied to the board.
    pub moves_applied: u64,
    /// Moves refused at a board boundary (the `Ok(false)` outcome).
    pub moves_refused: u64,
    /// Move requests rejected for addressing a column not on the board.
    pub invalid_column_rejections: u64,
    /// Counting solution checks performed, successful or not.
    pub solution_checks: u64,
    /// Counting checks that found a solution. Tracks the solution
    /// counter exactly while no reset intervenes.
    pub solutions_observed: u64,
}
