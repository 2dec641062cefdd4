use std::iter::FusedIterator;

use crate::step::{Direction, Step};

/// Selection sort, one step per scan iteration plus one step per swap.
///
/// The scan tracks the running minimum (ascending) or maximum (descending).
pub struct SelectionSort {
    values: Vec<u32>,
    direction: Direction,
    i: usize,
    j: usize,
    extreme: usize,
}

impl SelectionSort {
    pub fn new(values: Vec<u32>, direction: Direction) -> Self {
        Self {
            values,
            direction,
            i: 0,
            j: 1,
            extreme: 0,
        }
    }
}

impl Iterator for SelectionSort {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let n = self.values.len();
        if n < 2 || self.i >= n - 1 {
            return None;
        }

        let i = self.i;
        if self.j < n {
            let j = self.j;
            if self.direction.precedes(self.values[j], self.values[self.extreme]) {
                self.extreme = j;
            }
            self.j += 1;
            let comparing = if self.extreme == i {
                vec![i]
            } else {
                vec![i, self.extreme]
            };
            return Some(Step::new(&self.values, comparing, Step::prefix(i)));
        }

        self.values.swap(i, self.extreme);
        let step = Step::new(&self.values, vec![i], Step::prefix(i + 1));
        self.i += 1;
        self.j = self.i + 1;
        self.extreme = self.i;
        Some(step)
    }
}

impl FusedIterator for SelectionSort {}
