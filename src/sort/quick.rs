use std::iter::FusedIterator;

use crate::step::{indices, Direction, Step};

/// In-progress Lomuto partition of `[low, high]` with the pivot at `high`.
struct Partition {
    low: usize,
    high: usize,
    pivot: u32,
    // Last index of the "before pivot" region; starts at low - 1.
    boundary: isize,
    scan: usize,
}

/// Quicksort with Lomuto partitioning.
///
/// Recursion is replaced by a stack of pending ranges. The right range is
/// pushed before the left one so the left side is fully sorted first, exactly
/// as the recursive form would visit them. This engine never reports any index
/// as sorted.
pub struct QuickSort {
    values: Vec<u32>,
    direction: Direction,
    pending: Vec<(usize, usize)>,
    active: Option<Partition>,
}

impl QuickSort {
    pub fn new(values: Vec<u32>, direction: Direction) -> Self {
        let mut pending = Vec::new();
        if values.len() > 1 {
            pending.push((0, values.len() - 1));
        }
        Self {
            values,
            direction,
            pending,
            active: None,
        }
    }

    fn schedule(&mut self, low: usize, pivot: usize, high: usize) {
        if pivot + 1 < high {
            self.pending.push((pivot + 1, high));
        }
        if pivot > low + 1 {
            self.pending.push((low, pivot - 1));
        }
    }
}

impl Iterator for QuickSort {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let mut part = match self.active.take() {
            Some(part) => part,
            None => {
                let (low, high) = self.pending.pop()?;
                Partition {
                    low,
                    high,
                    pivot: self.values[high],
                    boundary: low as isize - 1,
                    scan: low,
                }
            }
        };

        if part.scan < part.high {
            let j = part.scan;
            if self.direction.precedes(self.values[j], part.pivot) {
                part.boundary += 1;
                self.values.swap(part.boundary as usize, j);
            }
            part.scan += 1;
            let step = Step::unsorted(&self.values, indices(&[part.boundary, j as isize]));
            self.active = Some(part);
            return Some(step);
        }

        let pivot_index = (part.boundary + 1) as usize;
        self.values.swap(pivot_index, part.high);
        let step = Step::unsorted(
            &self.values,
            indices(&[pivot_index as isize, part.high as isize]),
        );
        self.schedule(part.low, pivot_index, part.high);
        Some(step)
    }
}

impl FusedIterator for QuickSort {}
