use std::iter::FusedIterator;

use crate::step::{Direction, Step};

/// Bubble sort, one step per adjacent comparison.
///
/// After outer pass `i` the last `i + 1` positions hold their final values,
/// and every step of that pass reports them as sorted.
pub struct BubbleSort {
    values: Vec<u32>,
    direction: Direction,
    i: usize,
    j: usize,
}

impl BubbleSort {
    pub fn new(values: Vec<u32>, direction: Direction) -> Self {
        Self {
            values,
            direction,
            i: 0,
            j: 0,
        }
    }

    fn suffix(&self) -> Vec<usize> {
        let n = self.values.len();
        (0..=self.i).map(|k| n - 1 - k).collect()
    }
}

impl Iterator for BubbleSort {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let n = self.values.len();
        if n < 2 || self.i >= n - 1 {
            return None;
        }

        let j = self.j;
        if self.direction.precedes(self.values[j + 1], self.values[j]) {
            self.values.swap(j, j + 1);
        }
        let step = Step::new(&self.values, vec![j, j + 1], self.suffix());

        self.j += 1;
        if self.j >= n - 1 - self.i {
            self.i += 1;
            self.j = 0;
        }
        Some(step)
    }
}

impl FusedIterator for BubbleSort {}
