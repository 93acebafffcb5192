use std::collections::HashMap;

use super::DigitStore;

/// sparse positional digit storage
///
/// keys count from 0 at the least-significant digit, so `push_head` writes
/// key `len()` and both traversal views walk the index range
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MapStore(HashMap<usize, u8>);

impl std::fmt::Debug for MapStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter_from_head()).finish()
    }
}

impl FromIterator<u8> for MapStore {
    /// the iter should contain the digits most-significant-first
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut store = Self::default();
        let digits = iter.into_iter().collect::<Vec<_>>();
        for digit in digits.into_iter().rev() {
            store.push_head(digit);
        }
        store
    }
}

impl MapStore {
    fn digit(&self, position: usize) -> u8 {
        *self
            .0
            .get(&position)
            .unwrap_or_else(|| unreachable!("positions 0..len are always filled"))
    }
}

impl DigitStore for MapStore {
    fn push_head(&mut self, digit: u8) {
        super::assert_digit(digit);
        let position = self.0.len();
        self.0.insert(position, digit);
    }

    fn iter_from_tail(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.0.len()).map(|position| self.digit(position))
    }
    fn iter_from_head(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.0.len()).rev().map(|position| self.digit(position))
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_head_takes_next_position() {
        let mut store = MapStore::default();
        for digit in [2, 4, 3] {
            store.push_head(digit);
        }
        assert_eq!(store.iter_from_head().collect::<Vec<_>>(), [3, 4, 2]);
        assert_eq!(store.iter_from_tail().collect::<Vec<_>>(), [2, 4, 3]);
    }

    #[test]
    fn views_restart() {
        let store = MapStore::from_iter([9, 0, 1]);
        assert_eq!(store.iter_from_head().count(), 3);
        assert_eq!(store.iter_from_head().collect::<Vec<_>>(), [9, 0, 1]);
    }
}
