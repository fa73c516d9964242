//! Scalar capabilities required by the vector and matrix operations.
//!
//! Every trait here is implemented for the built-in numeric primitives it makes sense for. Using an
//! operation with a scalar type that lacks the capability is a compile-time error.

use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types that support computing their square root.
///
/// Integers return the square root truncated toward zero, and 0 for negative inputs.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support computing their absolute value.
///
/// Unsigned integers implement this as the identity.
pub trait Abs {
    fn abs(self) -> Self;
}

/// Types that can be raised to a power of type `E`.
///
/// Floats implement this for float exponents (via `powf`) and [`i32`] exponents (via `powi`).
/// Integers implement it for [`u32`] exponents.
pub trait Pow<E> {
    type Output;

    fn pow(self, exponent: E) -> Self::Output;
}

/// Floating-point rounding operations.
pub trait Round {
    /// Rounds toward zero.
    fn trunc(self) -> Self;
    /// Rounds toward negative infinity.
    fn floor(self) -> Self;
    /// Rounds toward positive infinity.
    fn ceil(self) -> Self;
    /// Rounds to the nearest integer, with halfway cases rounded away from zero.
    fn round(self) -> Self;
}

/// Rounding operations that produce an integer of type `I` directly.
///
/// Results outside the range of `I` saturate at [`I::MIN`][i32::MIN] or [`I::MAX`][i32::MAX],
/// and NaN maps to 0, matching the behavior of `as` casts.
pub trait RoundToInt<I> {
    /// Rounds toward zero.
    fn itrunc(self) -> I;
    /// Rounds toward negative infinity.
    fn ifloor(self) -> I;
    /// Rounds toward positive infinity.
    fn iceil(self) -> I;
    /// Rounds to the nearest integer, with halfway cases rounded away from zero.
    fn iround(self) -> I;
}

/// Classification of special floating-point values.
pub trait FloatClass {
    fn is_nan(&self) -> bool;
    /// Returns `true` for both positive and negative infinity.
    fn is_infinite(&self) -> bool;
}

/// Explicit numeric conversion between primitive types, with the semantics of an `as` cast.
///
/// Unlike [`Into`], this permits lossy conversions such as `f64` to `f32` or `f32` to `i32`.
pub trait Cast<U> {
    fn cast(self) -> U;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

macro_rules! int_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    if self < 1 {
                        return 0;
                    }
                    // The float estimate can be off by one for values beyond 2^53.
                    let mut root = (self as f64).sqrt() as $types;
                    while root.checked_mul(root).map_or(true, |sq| sq > self) {
                        root -= 1;
                    }
                    while (root + 1).checked_mul(root + 1).map_or(false, |sq| sq <= self) {
                        root += 1;
                    }
                    root
                }
            }

            impl Pow<u32> for $types {
                type Output = Self;

                fn pow(self, exponent: u32) -> Self {
                    <$types>::pow(self, exponent)
                }
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! signed_abs {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                fn abs(self) -> Self {
                    <$types>::abs(self)
                }
            }
        )+
    };
}
signed_abs!(i8, i16, i32, i64, i128, isize, f32, f64);

macro_rules! unsigned_abs {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                fn abs(self) -> Self {
                    self
                }
            }
        )+
    };
}
unsigned_abs!(u8, u16, u32, u64, u128, usize);

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    <$types>::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    <$types>::max(self, other)
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    <$types>::sqrt(self)
                }
            }

            impl Pow<$types> for $types {
                type Output = Self;

                fn pow(self, exponent: $types) -> Self {
                    self.powf(exponent)
                }
            }

            impl Pow<i32> for $types {
                type Output = Self;

                fn pow(self, exponent: i32) -> Self {
                    self.powi(exponent)
                }
            }

            impl Round for $types {
                fn trunc(self) -> Self {
                    <$types>::trunc(self)
                }

                fn floor(self) -> Self {
                    <$types>::floor(self)
                }

                fn ceil(self) -> Self {
                    <$types>::ceil(self)
                }

                fn round(self) -> Self {
                    <$types>::round(self)
                }
            }

            impl FloatClass for $types {
                fn is_nan(&self) -> bool {
                    <$types>::is_nan(*self)
                }

                fn is_infinite(&self) -> bool {
                    <$types>::is_infinite(*self)
                }
            }
        )+
    };
}
float_impls!(f32, f64);

// `self - t as F` is exact for any float whose integer part fits in `I`, so the fractional part
// is never rounded before it is compared.
macro_rules! round_to_int {
    ($float:ty => $($int:ty),+) => {
        $(
            impl RoundToInt<$int> for $float {
                #[inline]
                fn itrunc(self) -> $int {
                    self as $int
                }

                #[inline]
                fn ifloor(self) -> $int {
                    let t = self as $int;
                    if (t as $float) > self {
                        t.saturating_sub(1)
                    } else {
                        t
                    }
                }

                #[inline]
                fn iceil(self) -> $int {
                    let t = self as $int;
                    if (t as $float) < self {
                        t.saturating_add(1)
                    } else {
                        t
                    }
                }

                #[inline]
                fn iround(self) -> $int {
                    let t = self as $int;
                    let frac = self - t as $float;
                    if frac >= 0.5 {
                        t.saturating_add(1)
                    } else if frac <= -0.5 {
                        t.saturating_sub(1)
                    } else {
                        t
                    }
                }
            }
        )+
    };
}
round_to_int!(f32 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
round_to_int!(f64 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! cast {
    (@from $src:ty => ($($dst:ty),+)) => {
        $(
            impl Cast<$dst> for $src {
                #[inline]
                fn cast(self) -> $dst {
                    self as $dst
                }
            }
        )+
    };
    ($($src:ty),+ => $dsts:tt) => {
        $(
            cast!(@from $src => $dsts);
        )+
    };
}
cast!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
    => (u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_int() {
        assert_eq!(RoundToInt::<i32>::itrunc(3.7f32), 3);
        assert_eq!(RoundToInt::<i32>::itrunc(-3.7f32), -3);
        assert_eq!(RoundToInt::<i32>::ifloor(-3.2f64), -4);
        assert_eq!(RoundToInt::<i32>::ifloor(-3.0f64), -3);
        assert_eq!(RoundToInt::<i32>::iceil(3.2f64), 4);
        assert_eq!(RoundToInt::<i32>::iceil(-3.7f64), -3);
        assert_eq!(RoundToInt::<i32>::iround(2.5f32), 3);
        assert_eq!(RoundToInt::<i32>::iround(-2.5f32), -3);
        assert_eq!(RoundToInt::<i32>::iround(2.4999f32), 2);
    }

    #[test]
    fn round_to_int_saturates() {
        assert_eq!(RoundToInt::<u8>::ifloor(-0.5f32), 0);
        assert_eq!(RoundToInt::<u8>::iceil(300.0f32), u8::MAX);
        assert_eq!(RoundToInt::<i8>::ifloor(-1000.0f64), i8::MIN);
        assert_eq!(RoundToInt::<i8>::iround(f64::INFINITY), i8::MAX);
        assert_eq!(RoundToInt::<i32>::iround(f32::NAN), 0);
    }

    #[test]
    fn cast() {
        assert_eq!(Cast::<i32>::cast(-3.9f32), -3);
        assert_eq!(Cast::<f64>::cast(7u8), 7.0);
        assert_eq!(Cast::<u8>::cast(300i32), 44);
    }

    #[test]
    fn int_sqrt_truncates() {
        assert_eq!(Sqrt::sqrt(0u32), 0);
        assert_eq!(Sqrt::sqrt(15i32), 3);
        assert_eq!(Sqrt::sqrt(16i32), 4);
        assert_eq!(Sqrt::sqrt(-9i64), 0);
        assert_eq!(Sqrt::sqrt(u8::MAX), 15);
        assert_eq!(Sqrt::sqrt(u64::MAX), u32::MAX as u64);
        assert_eq!(Sqrt::sqrt(u128::MAX), u64::MAX as u128);
        assert_eq!(Sqrt::sqrt((1i64 << 60) - 1), (1 << 30) - 1);
    }

    #[test]
    fn float_class() {
        assert!(FloatClass::is_nan(&f32::NAN));
        assert!(!FloatClass::is_nan(&1.0f64));
        assert!(FloatClass::is_infinite(&f64::NEG_INFINITY));
    }

    #[test]
    fn abs_unsigned_is_identity() {
        assert_eq!(Abs::abs(5u32), 5);
        assert_eq!(Abs::abs(-5i64), 5);
        assert_eq!(Abs::abs(-0.5f32), 0.5);
    }
}
