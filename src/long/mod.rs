// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use itertools::Either;
use std::{
    fmt::Debug,
    ops::{Add, AddAssign, Neg, RangeInclusive, Sub, SubAssign},
};

use crate::{
    long::primitive::{INum, Primitive, UNum},
    store::DigitStore,
    util,
};

pub mod math_algos;
mod primitive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum Sign {
    Negative = -1,
    Positive = 1,
}
impl Sign {
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Positive => Self::Negative,
        }
    }
}
impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

/// a signed arbitrary-precision decimal integer over the digit store `S`
///
/// the store keeps the digits of the absolute value, most-significant-first
/// head-to-tail, with no leading zero unless the value is zero itself (then
/// exactly one digit 0). Canonical zero is never negative.
///
/// all arithmetic lives in [`math_algos`] against the [`DigitStore`]
/// contract, so the three backends share one implementation. Binary
/// operations only accept the same backend on both sides, mixing store
/// types does not type-check.
#[derive(Clone)]
pub struct Long<S> {
    sign: Sign,
    magnitude: S,
}

impl<S: DigitStore> Debug for Long<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Long {{ {} {:?} }}",
            if self.sign.is_positive() { '+' } else { '-' },
            self.magnitude
        )
    }
}
impl<S: DigitStore> std::fmt::Display for Long<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self
            .magnitude
            .iter_from_head()
            .map(|digit| {
                char::from_digit(u32::from(digit), 10).unwrap_or_else(|| unreachable!())
            })
            .collect::<String>();
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl<P: Primitive, S: DigitStore> From<P> for Long<S> {
    fn from(value: P) -> Self {
        match value.select_sign() {
            Either::Left(pos) => Self::from_le_digits(pos.le_decimal(), Sign::Positive),
            Either::Right(neg) => Self::from_le_digits(
                INum::abs(neg).le_decimal(),
                if INum::is_negative(neg) {
                    Sign::Negative
                } else {
                    Sign::Positive
                },
            ),
        }
    }
}

impl<S: DigitStore> Long<S> {
    pub fn zero() -> Self {
        Self::from(0u8)
    }
    /// an empty number with no digits yet, only used while building results
    pub(crate) fn accumulator() -> Self {
        Self {
            sign: Sign::Positive,
            magnitude: S::default(),
        }
    }
    /// consumes digits least-significant-first; a hypothetical negative zero
    /// is canonicalized to positive
    fn from_le_digits(digits: impl Iterator<Item = u8>, sign: Sign) -> Self {
        let mut num = Self::accumulator();
        for digit in digits {
            num.magnitude.push_head(digit);
        }
        num.sign = if num.is_zero() { Sign::Positive } else { sign };
        num
    }
    fn positive(magnitude: S) -> Self {
        Self {
            sign: Sign::Positive,
            magnitude,
        }
    }

    /// generate a new random number with at least `digits.start()` and at
    /// most `digits.end()` decimal digits; the leading digit of a
    /// multi-digit number is never zero
    pub fn new_random(digits: RangeInclusive<usize>, mut rng: impl rand::RngCore) -> Self {
        assert!(*digits.start() > 0, "need at least one digit");
        let len = *digits.start()
            + util::rng::next_bound(digits.end() - digits.start(), &mut rng, None);

        let mut num = Self::accumulator();
        for position in 0..len {
            let digit = if position == len - 1 && len > 1 {
                1 + util::rng::next_bound(8, &mut rng, None) as u8
            } else {
                util::rng::next_bound(9, &mut rng, None) as u8
            };
            num.magnitude.push_head(digit);
        }
        if !num.is_zero() && rng.next_u32() % 2 == 1 {
            num.sign = Sign::Negative;
        }
        num
    }

    pub const fn sign(&self) -> Sign {
        self.sign
    }
    pub const fn magnitude(&self) -> &S {
        &self.magnitude
    }
    #[cfg(test)]
    pub(crate) fn magnitude_mut(&mut self) -> &mut S {
        &mut self.magnitude
    }

    pub const fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }
    pub fn is_positive(&self) -> bool {
        self.sign.is_positive() && !self.is_zero()
    }
    pub fn is_zero(&self) -> bool {
        self.magnitude.iter_from_head().all(|digit| digit == 0)
    }

    /// `|lhs| - |rhs|` with the sign following the bigger magnitude
    fn sub_magnitudes(lhs: &Self, rhs: &Self) -> Self {
        match math_algos::cmp::magnitudes(&lhs.magnitude, &rhs.magnitude) {
            std::cmp::Ordering::Less => -Self::positive(math_algos::sub::magnitudes_lhs_bigger(
                &rhs.magnitude,
                &lhs.magnitude,
            )),
            std::cmp::Ordering::Equal | std::cmp::Ordering::Greater => {
                Self::positive(math_algos::sub::magnitudes_lhs_bigger(
                    &lhs.magnitude,
                    &rhs.magnitude,
                ))
            }
        }
    }
}

impl<S: DigitStore> Neg for &Long<S> {
    type Output = Long<S>;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}
impl<S: DigitStore> Neg for Long<S> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        // negative zero stays unobservable
        if !self.is_zero() {
            self.sign = self.sign.negate();
        }
        self
    }
}

impl<S: DigitStore> Add for &Long<S> {
    type Output = Long<S>;

    fn add(self, rhs: Self) -> Self::Output {
        match (self.sign, rhs.sign) {
            (Sign::Positive, Sign::Positive) => {
                Long::positive(math_algos::add::magnitudes(&self.magnitude, &rhs.magnitude))
            }
            (Sign::Positive, Sign::Negative) => Long::sub_magnitudes(self, rhs),
            (Sign::Negative, Sign::Positive) => Long::sub_magnitudes(rhs, self),
            (Sign::Negative, Sign::Negative) => {
                -Long::positive(math_algos::add::magnitudes(&self.magnitude, &rhs.magnitude))
            }
        }
    }
}
impl<S: DigitStore> Sub for &Long<S> {
    type Output = Long<S>;

    fn sub(self, rhs: Self) -> Self::Output {
        match (self.sign, rhs.sign) {
            (Sign::Positive, Sign::Positive) => Long::sub_magnitudes(self, rhs),
            (Sign::Positive, Sign::Negative) => {
                Long::positive(math_algos::add::magnitudes(&self.magnitude, &rhs.magnitude))
            }
            (Sign::Negative, Sign::Positive) => {
                -Long::positive(math_algos::add::magnitudes(&self.magnitude, &rhs.magnitude))
            }
            (Sign::Negative, Sign::Negative) => -Long::sub_magnitudes(self, rhs),
        }
    }
}

macro_rules! implOpCombos {
    ($($trait:tt)::*, $func:tt, $assign_trait:ident, $assign_func:tt) => {
        impl<S: DigitStore> $($trait)::* for Long<S> {
            type Output = Self;
            fn $func(self, rhs: Self) -> Self::Output {
                $($trait)::*::$func(&self, &rhs)
            }
        }
        impl<S: DigitStore> $($trait)::*<&Self> for Long<S> {
            type Output = Self;
            fn $func(self, rhs: &Self) -> Self::Output {
                $($trait)::*::$func(&self, rhs)
            }
        }
        impl<S: DigitStore> $($trait)::*<Long<S>> for &Long<S> {
            type Output = Long<S>;
            fn $func(self, rhs: Long<S>) -> Self::Output {
                $($trait)::*::$func(self, &rhs)
            }
        }
        impl<S: DigitStore> $assign_trait<&Self> for Long<S> {
            fn $assign_func(&mut self, rhs: &Self) {
                *self = $($trait)::*::$func(&*self, rhs);
            }
        }
        impl<S: DigitStore> $assign_trait for Long<S> {
            fn $assign_func(&mut self, rhs: Self) {
                *self = $($trait)::*::$func(&*self, &rhs);
            }
        }
    };
}
implOpCombos!(Add, add, AddAssign, add_assign);
implOpCombos!(Sub, sub, SubAssign, sub_assign);

impl<S: DigitStore> PartialEq for Long<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}
impl<S: DigitStore> Eq for Long<S> {}
impl<S: DigitStore> PartialOrd for Long<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<S: DigitStore> Ord for Long<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => std::cmp::Ordering::Greater,
            (Sign::Negative, Sign::Positive) => std::cmp::Ordering::Less,
            (Sign::Positive, Sign::Positive) => {
                math_algos::cmp::magnitudes(&self.magnitude, &other.magnitude)
            }
            (Sign::Negative, Sign::Negative) => {
                math_algos::cmp::magnitudes(&self.magnitude, &other.magnitude).reverse()
            }
        }
    }
}
