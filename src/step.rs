//! The unit of progress emitted by every sort engine.

use serde::{Deserialize, Serialize};

/// Target ordering for a finished array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Returns true when `a` has to be placed strictly before `b`.
    ///
    /// Equal values never precede each other, so no engine ever moves a tie.
    #[inline]
    pub fn precedes(self, a: u32, b: u32) -> bool {
        match self {
            Direction::Ascending => a < b,
            Direction::Descending => a > b,
        }
    }

    /// Check that `values` is totally ordered in this direction.
    pub fn is_ordered(self, values: &[u32]) -> bool {
        values.windows(2).all(|w| !self.precedes(w[1], w[0]))
    }

    pub fn is_ascending(self) -> bool {
        self == Direction::Ascending
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

impl From<bool> for Direction {
    fn from(ascending: bool) -> Self {
        if ascending {
            Direction::Ascending
        } else {
            Direction::Descending
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Ascending => write!(f, "Ascending"),
            Direction::Descending => write!(f, "Descending"),
        }
    }
}

/// A snapshot of an engine's sequence after one micro-operation.
///
/// `array` is an owned copy, so a consumer holding step K never observes the
/// mutations that produce step K+1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub array: Vec<u32>,
    /// Positions involved in the current comparison or move (0 to 2 entries).
    pub comparing: Vec<usize>,
    /// Positions known to hold their final value.
    pub sorted: Vec<usize>,
}

impl Step {
    pub fn new(array: &[u32], comparing: Vec<usize>, sorted: Vec<usize>) -> Self {
        Self {
            array: array.to_vec(),
            comparing,
            sorted,
        }
    }

    /// Step with an empty sorted set, as quick and merge sort emit.
    pub fn unsorted(array: &[u32], comparing: Vec<usize>) -> Self {
        Self::new(array, comparing, Vec::new())
    }

    /// Sorted set covering the prefix `[0, end)`.
    pub fn prefix(end: usize) -> Vec<usize> {
        (0..end).collect()
    }
}

/// Collects a `comparing` set from signed loop indices.
///
/// Negative values are the "before the range" sentinels some algorithms carry
/// and are dropped. A repeated index is kept once.
pub(crate) fn indices(raw: &[isize]) -> Vec<usize> {
    let mut out: Vec<usize> = Vec::with_capacity(raw.len());
    for &idx in raw {
        if idx >= 0 && !out.contains(&(idx as usize)) {
            out.push(idx as usize);
        }
    }
    out
}
