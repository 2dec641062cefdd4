use std::iter::FusedIterator;

use crate::step::{indices, Direction, Step};

/// Insertion sort, one step per shift plus one step per placement.
pub struct InsertionSort {
    values: Vec<u32>,
    direction: Direction,
    i: usize,
    // Scan position for the key being inserted; -1 means "before index 0".
    j: isize,
    key: Option<u32>,
}

impl InsertionSort {
    pub fn new(values: Vec<u32>, direction: Direction) -> Self {
        Self {
            values,
            direction,
            i: 1,
            j: 0,
            key: None,
        }
    }
}

impl Iterator for InsertionSort {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.i >= self.values.len() {
            return None;
        }

        let i = self.i;
        let key = match self.key {
            Some(key) => key,
            None => {
                let key = self.values[i];
                self.key = Some(key);
                self.j = i as isize - 1;
                key
            }
        };

        if self.j >= 0 && self.direction.precedes(key, self.values[self.j as usize]) {
            let j = self.j as usize;
            self.values[j + 1] = self.values[j];
            self.j -= 1;
            return Some(Step::new(
                &self.values,
                indices(&[self.j, i as isize]),
                Step::prefix(i),
            ));
        }

        let slot = (self.j + 1) as usize;
        self.values[slot] = key;
        self.key = None;
        self.i += 1;
        Some(Step::new(&self.values, vec![slot], Step::prefix(i + 1)))
    }
}

impl FusedIterator for InsertionSort {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_input_places_without_shifting() {
        let steps: Vec<Step> = InsertionSort::new(vec![1, 2, 3], Direction::Ascending).collect();
        assert_eq!(steps.len(), 2);
        for (n, step) in steps.iter().enumerate() {
            let i = n + 1;
            assert_eq!(step.array, vec![1, 2, 3]);
            assert_eq!(step.comparing, vec![i]);
            assert_eq!(step.sorted, Step::prefix(i + 1));
        }
    }

    #[test]
    fn shift_to_front_drops_negative_index() {
        let steps: Vec<Step> = InsertionSort::new(vec![4, 1], Direction::Ascending).collect();
        assert_eq!(steps.len(), 2);

        // Shift: 4 moves right, scan runs off the front.
        assert_eq!(steps[0].array, vec![4, 4]);
        assert_eq!(steps[0].comparing, vec![1]);
        assert_eq!(steps[0].sorted, vec![0]);

        // Placement at the front.
        assert_eq!(steps[1].array, vec![1, 4]);
        assert_eq!(steps[1].comparing, vec![0]);
        assert_eq!(steps[1].sorted, vec![0, 1]);
    }

    #[test]
    fn shift_reports_scan_and_outer_index() {
        let steps: Vec<Step> = InsertionSort::new(vec![1, 5, 3], Direction::Ascending).collect();
        // i=1: place. i=2: one shift then place.
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[1].array, vec![1, 5, 5]);
        assert_eq!(steps[1].comparing, vec![0, 2]);
        assert_eq!(steps[2].array, vec![1, 3, 5]);
        assert_eq!(steps[2].comparing, vec![1]);
    }

    #[test]
    fn descending_order() {
        let last = InsertionSort::new(vec![3, 9, 1, 9], Direction::Descending).last();
        assert_eq!(last.map(|s| s.array), Some(vec![9, 9, 3, 1]));
    }
}
