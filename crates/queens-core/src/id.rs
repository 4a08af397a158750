//! Strongly-typed identifiers and the [`Rows`] storage type.

use smallvec::SmallVec;
use std::fmt;

/// Identifies one column of the board.
///
/// Columns are numbered left to right from 0 and are fixed for the life
/// of an engine. The column index doubles as the durable identity of the
/// agent controlling that queen: the adapter assigns columns in
/// registration order and never reassigns them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Column(pub u32);

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Column {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing board change counter.
///
/// Incremented on every successful move and on reset, letting pollers
/// (a viewer redrawing on an interval) detect that the board changed
/// without diffing row values. The solution counter is not part of the
/// revision; it tracks board geometry only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Revision(pub u64);

impl Revision {
    /// The next revision after this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Revision {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Row values for a board, one per column, in column order.
///
/// Uses `SmallVec<[u32; 8]>` to avoid heap allocation for the classic
/// eight-queens board and anything smaller. Larger boards spill to the
/// heap transparently.
pub type Rows = SmallVec<[u32; 8]>;
