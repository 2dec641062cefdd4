//! Step-emitting sort engines.
//!
//! Every engine is an iterator over [`Step`]s that owns a private copy of the
//! input and keeps its loop counters as resumption state, so a driver can
//! pull one step at a time at whatever pace it likes.
//!
//! Available algorithms:
//! - [`BubbleSort`]: adjacent swaps, suffix becomes final pass by pass
//! - [`InsertionSort`]: shifts the key left into the sorted prefix
//! - [`SelectionSort`]: scans for the extreme, one swap per pass
//! - [`QuickSort`]: Lomuto partition, pivot is the last element
//! - [`MergeSort`]: top-down halving, buffered merges

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

use std::iter::FusedIterator;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::step::{Direction, Step};

/// Available sorting algorithms, in the order the controls list them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
    Selection,
    Quick,
    Merge,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::Merge,
    ];

    /// Lowercase identifier, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
        }
    }

    pub fn complexity(self) -> &'static str {
        match self {
            Algorithm::Bubble => "O(n²) - Simple but slow",
            Algorithm::Insertion => "O(n²) - Good for small data",
            Algorithm::Selection => "O(n²) - Minimal swaps",
            Algorithm::Quick => "O(n log n) - Fast average",
            Algorithm::Merge => "O(n log n) - Stable sort",
        }
    }

    /// Start a fresh engine over `values`.
    pub fn steps(self, values: Vec<u32>, direction: Direction) -> SortSteps {
        match self {
            Algorithm::Bubble => SortSteps::Bubble(BubbleSort::new(values, direction)),
            Algorithm::Insertion => SortSteps::Insertion(InsertionSort::new(values, direction)),
            Algorithm::Selection => SortSteps::Selection(SelectionSort::new(values, direction)),
            Algorithm::Quick => SortSteps::Quick(QuickSort::new(values, direction)),
            Algorithm::Merge => SortSteps::Merge(MergeSort::new(values, direction)),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm `{0}` (expected bubble, insertion, selection, quick or merge)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Shorthand for `algorithm.steps(values, ascending.into())`.
pub fn sort_steps(algorithm: Algorithm, values: Vec<u32>, ascending: bool) -> SortSteps {
    algorithm.steps(values, Direction::from(ascending))
}

/// One running engine of any kind.
pub enum SortSteps {
    Bubble(BubbleSort),
    Insertion(InsertionSort),
    Selection(SelectionSort),
    Quick(QuickSort),
    Merge(MergeSort),
}

impl SortSteps {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            SortSteps::Bubble(_) => Algorithm::Bubble,
            SortSteps::Insertion(_) => Algorithm::Insertion,
            SortSteps::Selection(_) => Algorithm::Selection,
            SortSteps::Quick(_) => Algorithm::Quick,
            SortSteps::Merge(_) => Algorithm::Merge,
        }
    }
}

impl Iterator for SortSteps {
    type Item = Step;

    #[inline]
    fn next(&mut self) -> Option<Step> {
        match self {
            SortSteps::Bubble(engine) => engine.next(),
            SortSteps::Insertion(engine) => engine.next(),
            SortSteps::Selection(engine) => engine.next(),
            SortSteps::Quick(engine) => engine.next(),
            SortSteps::Merge(engine) => engine.next(),
        }
    }
}

impl FusedIterator for SortSteps {}
