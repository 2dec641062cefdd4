use std::iter::FusedIterator;

use crate::step::{Direction, Step};

/// A merge of `[left, mid]` and `[mid + 1, right]` that is partway through.
struct Merge {
    left_run: Vec<u32>,
    right_run: Vec<u32>,
    i: usize,
    j: usize,
    k: usize,
}

/// Top-down merge sort, one step per element written during a merge.
///
/// Which ranges get merged, and in what order, depends only on the length,
/// so the whole post-order schedule is computed up front and the split phase
/// emits nothing. This engine never reports any index as sorted.
pub struct MergeSort {
    values: Vec<u32>,
    direction: Direction,
    schedule: std::vec::IntoIter<(usize, usize, usize)>,
    active: Option<Merge>,
}

impl MergeSort {
    pub fn new(values: Vec<u32>, direction: Direction) -> Self {
        let mut schedule = Vec::new();
        if values.len() > 1 {
            plan(0, values.len() - 1, &mut schedule);
        }
        Self {
            values,
            direction,
            schedule: schedule.into_iter(),
            active: None,
        }
    }

    fn start(&self, (left, mid, right): (usize, usize, usize)) -> Merge {
        Merge {
            left_run: self.values[left..=mid].to_vec(),
            right_run: self.values[mid + 1..=right].to_vec(),
            i: 0,
            j: 0,
            k: left,
        }
    }
}

/// Post-order list of `(left, mid, right)` merges for the range `[left, right]`.
fn plan(left: usize, right: usize, out: &mut Vec<(usize, usize, usize)>) {
    if left < right {
        let mid = (left + right) / 2;
        plan(left, mid, out);
        plan(mid + 1, right, out);
        out.push((left, mid, right));
    }
}

impl Iterator for MergeSort {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let mut merge = match self.active.take() {
            Some(merge) => merge,
            None => {
                let range = self.schedule.next()?;
                self.start(range)
            }
        };

        let take_left = match (merge.left_run.get(merge.i), merge.right_run.get(merge.j)) {
            (Some(&l), Some(&r)) => !self.direction.precedes(r, l),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            // A merge is dropped as soon as its last element is written.
            (None, None) => return None,
        };

        let k = merge.k;
        if take_left {
            self.values[k] = merge.left_run[merge.i];
            merge.i += 1;
        } else {
            self.values[k] = merge.right_run[merge.j];
            merge.j += 1;
        }
        merge.k += 1;

        let step = Step::unsorted(&self.values, vec![k]);
        if merge.i < merge.left_run.len() || merge.j < merge.right_run.len() {
            self.active = Some(merge);
        }
        Some(step)
    }
}

impl FusedIterator for MergeSort {}
