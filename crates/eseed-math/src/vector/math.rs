//! Element-wise math functions.

use std::ops::{Add, Mul, Sub};

use crate::{Abs, FloatClass, Pow, Round, RoundToInt, Sqrt, Zero};

use super::{vec3, Vector};

impl<T, const N: usize> Vector<T, N> {
    /// Returns `true` if every element is positive or negative infinity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// assert!(vec2(f32::INFINITY, f32::NEG_INFINITY).all_inf());
    /// assert!(!vec2(f32::INFINITY, 0.0).all_inf());
    /// ```
    pub fn all_inf(&self) -> bool
    where
        T: FloatClass + Copy,
    {
        self.0.iter().all(|elem| elem.is_infinite())
    }

    /// Returns `true` if at least one element is positive or negative infinity.
    pub fn any_inf(&self) -> bool
    where
        T: FloatClass + Copy,
    {
        self.0.iter().any(|elem| elem.is_infinite())
    }

    /// Returns `true` if every element is NaN.
    pub fn all_nan(&self) -> bool
    where
        T: FloatClass + Copy,
    {
        self.0.iter().all(|elem| elem.is_nan())
    }

    /// Returns `true` if at least one element is NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let v = vec2(f64::NAN, 1.0);
    /// assert!(v.any_nan());
    /// assert!(!v.all_nan());
    /// ```
    pub fn any_nan(&self) -> bool
    where
        T: FloatClass + Copy,
    {
        self.0.iter().any(|elem| elem.is_nan())
    }

    /// Element-wise absolute value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// assert_eq!(vec3(-1, 0, 2).abs(), vec3(1, 0, 2));
    /// ```
    pub fn abs(self) -> Self
    where
        T: Abs,
    {
        self.map(Abs::abs)
    }

    /// Squares every element.
    pub fn sq(self) -> Self
    where
        T: Mul<Output = T> + Copy,
    {
        self.map(|elem| elem * elem)
    }

    /// Element-wise square root.
    pub fn sqrt(self) -> Self
    where
        T: Sqrt,
    {
        self.map(Sqrt::sqrt)
    }

    /// Raises every element to the power `exponent`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// assert_eq!(vec3(1, 2, 3).pow(3u32), vec3(1, 8, 27));
    /// assert_eq!(vec2(4.0, 9.0).pow(0.5), vec2(2.0, 3.0));
    /// ```
    pub fn pow<E>(self, exponent: E) -> Vector<T::Output, N>
    where
        T: Pow<E>,
        E: Copy,
    {
        self.map(|elem| elem.pow(exponent))
    }

    /// Rounds every element toward zero.
    pub fn trunc(self) -> Self
    where
        T: Round,
    {
        self.map(Round::trunc)
    }

    /// Rounds every element toward negative infinity.
    pub fn floor(self) -> Self
    where
        T: Round,
    {
        self.map(Round::floor)
    }

    /// Rounds every element toward positive infinity.
    pub fn ceil(self) -> Self
    where
        T: Round,
    {
        self.map(Round::ceil)
    }

    /// Rounds every element to the nearest integer, rounding halfway cases away from zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// assert_eq!(vec3(0.5, -0.5, 1.4).round(), vec3(1.0, -1.0, 1.0));
    /// ```
    pub fn round(self) -> Self
    where
        T: Round,
    {
        self.map(Round::round)
    }

    /// Rounds every element toward zero, converting directly to the integer type `I`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// assert_eq!(vec2(3.7, -3.7).itrunc::<i32>(), vec2(3, -3));
    /// ```
    pub fn itrunc<I>(self) -> Vector<I, N>
    where
        T: RoundToInt<I>,
    {
        self.map(RoundToInt::itrunc)
    }

    /// Rounds every element toward negative infinity, converting directly to the integer type `I`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// assert_eq!(vec2(3.7, -3.7).ifloor::<i32>(), vec2(3, -4));
    /// ```
    pub fn ifloor<I>(self) -> Vector<I, N>
    where
        T: RoundToInt<I>,
    {
        self.map(RoundToInt::ifloor)
    }

    /// Rounds every element toward positive infinity, converting directly to the integer type `I`.
    pub fn iceil<I>(self) -> Vector<I, N>
    where
        T: RoundToInt<I>,
    {
        self.map(RoundToInt::iceil)
    }

    /// Rounds every element to the nearest integer, converting directly to the integer type `I`.
    ///
    /// Halfway cases are rounded away from zero.
    pub fn iround<I>(self) -> Vector<I, N>
    where
        T: RoundToInt<I>,
    {
        self.map(RoundToInt::iround)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// The result has the type produced by multiplying the element types.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot<U>(self, other: Vector<U, N>) -> <T as Mul<U>>::Output
    where
        T: Mul<U>,
        <T as Mul<U>>::Output: Zero + Add<Output = <T as Mul<U>>::Output>,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(Zero::ZERO, |acc, (a, b)| acc + a * b)
    }
}

impl<T> Vector<T, 3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross<U>(self, other: Vector<U, 3>) -> Vector<<T as Mul<U>>::Output, 3>
    where
        T: Mul<U> + Copy,
        U: Copy,
        <T as Mul<U>>::Output: Sub<Output = <T as Mul<U>>::Output>,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}
