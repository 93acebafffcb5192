use itertools::Either;

pub trait Primitive: Copy + Eq + Ord {
    const ZERO: Self;
    const ONE: Self;

    type Pos: UNum<Neg = Self::Neg>;
    type Neg: INum<Pos = Self::Pos>;

    fn select_sign(self) -> Either<Self::Pos, Self::Neg>;
}
pub trait UNum: Primitive {
    /// the decimal digits of `self`, least-significant-first
    ///
    /// zero decomposes to a single digit 0, never to nothing
    fn le_decimal(self) -> impl Iterator<Item = u8>;

    #[allow(dead_code)]
    fn try_neg(self) -> Option<Self::Neg>;
}
pub trait INum: Primitive {
    fn is_negative(self) -> bool;
    fn abs(self) -> Self::Pos;
}

macro_rules! implPrim {
    ($pos_type: tt, $neg_type: tt) => {
        impl Primitive for $pos_type {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            type Pos = $pos_type;
            type Neg = $neg_type;

            fn select_sign(self) -> Either<Self::Pos, Self::Neg> {
                Either::Left(self)
            }
        }
        impl Primitive for $neg_type {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            type Pos = $pos_type;
            type Neg = $neg_type;

            fn select_sign(self) -> Either<Self::Pos, Self::Neg> {
                Either::Right(self)
            }
        }
        impl UNum for $pos_type {
            fn le_decimal(self) -> impl Iterator<Item = u8> {
                std::iter::successors(Some(self), |&rest| {
                    let rest = rest / 10;
                    (rest > 0).then_some(rest)
                })
                .map(|rest| (rest % 10) as u8)
            }
            fn try_neg(self) -> Option<Self::Neg> {
                $neg_type::try_from(self).ok()
            }
        }
        impl INum for $neg_type {
            fn is_negative(self) -> bool {
                self.is_negative()
            }
            fn abs(self) -> $pos_type {
                self.unsigned_abs()
            }
        }
    };
}

implPrim!(u8, i8);
implPrim!(u16, i16);
implPrim!(u32, i32);
implPrim!(u64, i64);
implPrim!(u128, i128);
implPrim!(usize, isize);
