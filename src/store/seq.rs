use super::DigitStore;

/// contiguous digit storage, most-significant digit at index 0
#[derive(Clone, Default, PartialEq, Eq, Hash, derive_more::From)]
pub struct SeqStore(Vec<u8>);

impl std::fmt::Debug for SeqStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl FromIterator<u8> for SeqStore {
    /// the iter should contain the digits most-significant-first
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl DigitStore for SeqStore {
    fn push_head(&mut self, digit: u8) {
        super::assert_digit(digit);
        // shifts every digit one slot, which is fine for a reference backend
        self.0.insert(0, digit);
    }

    fn iter_from_tail(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().rev().copied()
    }
    fn iter_from_head(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_head_prepends() {
        let mut store = SeqStore::default();
        for digit in [2, 4, 3] {
            store.push_head(digit);
        }
        assert_eq!(store, SeqStore::from(vec![3, 4, 2]));
    }

    #[test]
    fn both_views_agree() {
        let store = SeqStore::from(vec![1, 0, 5]);
        assert_eq!(store.iter_from_head().collect::<Vec<_>>(), [1, 0, 5]);
        assert_eq!(store.iter_from_tail().collect::<Vec<_>>(), [5, 0, 1]);
    }
}
