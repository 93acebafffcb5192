// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use std::fmt::Debug;

pub mod linked;
pub mod map;
pub mod seq;

pub use linked::LinkedStore;
pub use map::MapStore;
pub use seq::SeqStore;

/// storage contract for the decimal digits of one non-negative magnitude
///
/// digits are single decimal values 0..=9, kept most-significant-first when
/// read head-to-tail. A freshly `Default`ed store holds no digits and is used
/// as the accumulator while an operation builds its result, one `push_head`
/// at a time. A store representing the value zero holds exactly one digit 0.
///
/// `Clone` doubles as deep copy: two clones never share digit nodes.
pub trait DigitStore: Clone + Debug + Default {
    /// prepends a higher-order digit
    fn push_head(&mut self, digit: u8);

    /// digits least-significant-first, for carry/borrow propagation
    fn iter_from_tail(&self) -> impl Iterator<Item = u8> + '_;
    /// digits most-significant-first, for comparison and formatting
    fn iter_from_head(&self) -> impl Iterator<Item = u8> + '_;

    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[inline]
pub(crate) fn assert_digit(digit: u8) {
    debug_assert!(digit < 10, "{digit} is no decimal digit");
}
