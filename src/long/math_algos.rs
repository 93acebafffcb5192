#![allow(clippy::wildcard_imports)]
use super::*;
use itertools::Itertools;

pub mod cmp {
    use super::*;

    /// orders two magnitudes, ignoring any sign
    ///
    /// more digits win first, only equal lengths are compared digit by digit
    /// from the most-significant end. Relies on neither operand carrying
    /// leading zeros.
    pub fn magnitudes<S: DigitStore>(lhs: &S, rhs: &S) -> std::cmp::Ordering {
        lhs.len()
            .cmp(&rhs.len())
            .then_with(|| lhs.iter_from_head().cmp(rhs.iter_from_head()))
    }
}

pub mod add {
    use super::*;

    /// calculates `|lhs| + |rhs|` as a fresh magnitude
    ///
    /// walks both stores least-significant-first, missing digits count as 0.
    /// Result digits go through `push_head`, so the store ends up
    /// most-significant-first without a reversal pass.
    pub fn magnitudes<S: DigitStore>(lhs: &S, rhs: &S) -> S {
        let mut out = S::default();
        let mut carry = 0;
        for pair in lhs.iter_from_tail().zip_longest(rhs.iter_from_tail()) {
            let (lhs_digit, rhs_digit) = pair.or_default();
            let sum = lhs_digit + rhs_digit + carry;
            out.push_head(sum % 10);
            carry = sum / 10;
        }
        if carry > 0 {
            out.push_head(carry);
        }
        out
    }
}

pub mod sub {
    use super::*;

    /// calculates `|lhs| - |rhs|` as a fresh magnitude
    ///
    /// the caller must have established `|lhs| >= |rhs|`; the dispatch in
    /// `Long::sub` guarantees this. Equal magnitudes short-circuit to the
    /// canonical zero.
    ///
    /// zero digits are not emitted right away but counted, and only flushed
    /// once a higher nonzero digit shows up. A zero run above the highest
    /// nonzero digit is thereby dropped, which keeps the no-leading-zero
    /// invariant without a separate strip pass.
    pub fn magnitudes_lhs_bigger<S: DigitStore>(lhs: &S, rhs: &S) -> S {
        let mut out = S::default();
        if cmp::magnitudes(lhs, rhs).is_eq() {
            out.push_head(0);
            return out;
        }
        let mut borrow = 0;
        let mut zero_run = 0;
        for pair in lhs.iter_from_tail().zip_longest(rhs.iter_from_tail()) {
            let (lhs_digit, rhs_digit) = pair.or_default();
            let cur = i8::try_from(lhs_digit).unwrap_or_else(|_| unreachable!())
                - i8::try_from(rhs_digit).unwrap_or_else(|_| unreachable!())
                + borrow;
            let digit = cur.rem_euclid(10) as u8;
            borrow = cur.div_euclid(10);
            if digit == 0 {
                zero_run += 1;
            } else {
                for _ in 0..zero_run {
                    out.push_head(0);
                }
                zero_run = 0;
                out.push_head(digit);
            }
        }
        debug_assert_eq!(borrow, 0, "minuend was smaller than subtrahend");
        out
    }
}
