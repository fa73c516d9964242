use std::{array, fmt};

use itertools::Itertools;

use crate::{
    traits::{Number, Sqrt},
    Cast, MinMax, One, ShapeError, Zero,
};

mod math;
mod ops;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 1-dimensional vector with [`f32`] elements.
pub type Vec1f = Vec1<f32>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An `N`-element vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec1`], [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors
///   from provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation, and from slices of
///   the right length using [`TryFrom`].
/// - The [`Default`] implementation of [`Vector`] initializes each element with its default value.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are
///   unit vectors pointing in the given direction.
///
/// # Conversion
///
/// - [`Vector::resize`] changes the number of elements, truncating or zero-padding.
/// - [`Vector::convert`] changes the element type through a lossless [`Into`] conversion.
/// - [`Vector::cast`] changes the element type with the semantics of an `as` cast.
///
/// # Operators
///
/// All arithmetic and bitwise operators work element-wise, either between two vectors of the same
/// length or between a vector and a scalar (in either order):
///
/// ```
/// # use eseed_math::*;
/// assert_eq!(vec3(1, 2, 3) * vec3(4, 5, 6), vec3(4, 10, 18));
/// assert_eq!(vec3(1, 2, 3) + 10, vec3(11, 12, 13));
/// assert_eq!(10 - vec3(1, 2, 3), vec3(9, 8, 7));
/// assert_eq!(vec2(1u32, 2) << 4u8, vec2(16u32, 32));
/// ```
///
/// # Element Access
///
/// The [`Index`] and [`IndexMut`] impls can be used just like on arrays, and will panic when out
/// of bounds. [`Vector::get`] and [`Vector::get_mut`] return [`Option`]s instead.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 1> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let a = vec3(1, 2, 3);
    /// let b = vec3("1", "2", "3");
    /// let v = a.zip(b);
    /// assert_eq!(v, vec3((1, "1"), (2, "2"), (3, "3")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Combines corresponding elements of `self` and `other` with a closure.
    ///
    /// All binary operators on vectors are implemented in terms of this method.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let v = vec3(1, 2, 3).zip_with(vec3(4, 5, 6), |a, b| a * 10 + b);
    /// assert_eq!(v, vec3(14, 25, 36));
    /// ```
    pub fn zip_with<U, V, F>(self, other: Vector<U, N>, mut f: F) -> Vector<V, N>
    where
        F: FnMut(T, U) -> V,
    {
        self.zip(other).map(|(a, b)| f(a, b))
    }

    /// Invokes `f` with a mutable reference to each element.
    pub(crate) fn update<F>(&mut self, f: F)
    where
        F: FnMut(&mut T),
    {
        self.0.iter_mut().for_each(f);
    }

    /// Invokes `f` with a mutable reference to each element and the corresponding element of
    /// `other`.
    pub(crate) fn zip_update<U, F>(&mut self, other: Vector<U, N>, mut f: F)
    where
        F: FnMut(&mut T, U),
    {
        self.0
            .iter_mut()
            .zip(other.0)
            .for_each(|(lhs, rhs)| f(lhs, rhs));
    }

    /// Returns a reference to the element at `index`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let v = vec2(7, 8);
    /// assert_eq!(v.get(1), Some(&8));
    /// assert_eq!(v.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// assert_eq!(vec3(1, 2, 3).as_array(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_slice()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns a vector of length `M` holding the leading elements of `self`.
    ///
    /// If `M` is smaller than `N`, trailing elements are dropped. If it is larger, the additional
    /// elements are initialized with [`T::ZERO`][Zero::ZERO].
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// assert_eq!(vec3(1, 2, 3).resize::<2>(), vec2(1, 2));
    /// assert_eq!(vec2(1, 2).resize::<4>(), vec4(1, 2, 0, 0));
    /// ```
    pub fn resize<const M: usize>(self) -> Vector<T, M>
    where
        T: Zero,
    {
        if M < N {
            log::trace!("truncating {}-element vector to {} elements", N, M);
        }
        let mut iter = self.0.into_iter();
        Vector::from_fn(|_| iter.next().unwrap_or(T::ZERO))
    }

    /// Converts each element to `U` via its [`Into`] implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let v: Vec2<f64> = vec2(1u8, 200).convert();
    /// assert_eq!(v, vec2(1.0, 200.0));
    /// ```
    pub fn convert<U>(self) -> Vector<U, N>
    where
        T: Into<U>,
    {
        self.map(Into::into)
    }

    /// Converts each element to `U` like an `as` cast would.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// assert_eq!(vec2(1.9f32, -1.9).cast::<i32>(), vec2(1, -1));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: Cast<U>,
    {
        self.map(Cast::cast)
    }

    /// Adds one to every element, returning `self` for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let mut v = vec2(1, 5);
    /// assert_eq!(*v.increment(), vec2(2, 6));
    /// ```
    pub fn increment(&mut self) -> &mut Self
    where
        T: One + std::ops::AddAssign,
    {
        self.update(|elem| *elem += T::ONE);
        self
    }

    /// Subtracts one from every element, returning `self` for chaining.
    pub fn decrement(&mut self) -> &mut Self
    where
        T: One + std::ops::SubAssign,
    {
        self.update(|elem| *elem -= T::ONE);
        self
    }

    /// Adds one to every element, returning the value from before the update.
    pub fn post_increment(&mut self) -> Self
    where
        T: One + std::ops::AddAssign + Copy,
    {
        let old = *self;
        self.increment();
        old
    }

    /// Subtracts one from every element, returning the value from before the update.
    pub fn post_decrement(&mut self) -> Self
    where
        T: One + std::ops::SubAssign + Copy,
    {
        let old = *self;
        self.decrement();
        old
    }

    /// Element-wise logical negation, treating non-zero elements as `true`.
    ///
    /// For `bool` vectors, use the `!` operator instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// assert_eq!(vec3(0, 1, -4).logical_not(), vec3(true, false, false));
    /// ```
    pub fn logical_not(self) -> Vector<bool, N>
    where
        T: Zero + PartialEq,
    {
        self.map(|elem| elem == T::ZERO)
    }

    /// Element-wise logical and, treating non-zero elements as `true`.
    ///
    /// For `bool` vectors, the `&` operator is equivalent.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let v = vec3(0, 1, 2).logical_and(vec3(1.0, 0.0, 0.5));
    /// assert_eq!(v, vec3(false, false, true));
    /// ```
    pub fn logical_and<U>(self, other: Vector<U, N>) -> Vector<bool, N>
    where
        T: Zero + PartialEq,
        U: Zero + PartialEq,
    {
        self.zip_with(other, |a, b| a != T::ZERO && b != U::ZERO)
    }

    /// Element-wise logical or, treating non-zero elements as `true`.
    ///
    /// For `bool` vectors, the `|` operator is equivalent.
    pub fn logical_or<U>(self, other: Vector<U, N>) -> Vector<bool, N>
    where
        T: Zero + PartialEq,
        U: Zero + PartialEq,
    {
        self.zip_with(other, |a, b| a != T::ZERO || b != U::ZERO)
    }

    /// Element-wise logical and with a scalar, treating non-zero values as `true`.
    ///
    /// Logical and is commutative, so this also computes `scalar && vector`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// assert_eq!(vec3(0, 1, 2).logical_and_scalar(0.5), vec3(false, true, true));
    /// assert_eq!(vec3(0, 1, 2).logical_and_scalar(0), Vector::splat(false));
    /// ```
    pub fn logical_and_scalar<S>(self, scalar: S) -> Vector<bool, N>
    where
        T: Zero + PartialEq,
        S: Zero + PartialEq,
    {
        let scalar = scalar != S::ZERO;
        self.map(|elem| elem != T::ZERO && scalar)
    }

    /// Element-wise logical or with a scalar, treating non-zero values as `true`.
    ///
    /// Logical or is commutative, so this also computes `scalar || vector`.
    pub fn logical_or_scalar<S>(self, scalar: S) -> Vector<bool, N>
    where
        T: Zero + PartialEq,
        S: Zero + PartialEq,
    {
        let scalar = scalar != S::ZERO;
        self.map(|elem| elem != T::ZERO || scalar)
    }

    /// Compares two vectors with different element types, converting the elements of `self` to
    /// `U` first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// assert!(vec3(1u8, 2, 3).eq_converted(&vec3(1u64, 2, 3)));
    /// assert!(!vec2(-1i8, 0).eq_converted(&vec2(-1.0f32, 0.5)));
    /// ```
    pub fn eq_converted<U>(&self, other: &Vector<U, N>) -> bool
    where
        T: Copy + Into<U>,
        U: PartialEq,
    {
        self.0.iter().zip(&other.0).all(|(&a, b)| Into::<U>::into(a) == *b)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// assert_eq!(Vec3f::Z.length(), 1.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        let len = self.length();
        self.map(|elem| elem / len)
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax,
    {
        self.zip_with(other, MinMax::min)
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.max(b), vec3(3.0, 2.0, 0.0));
    /// ```
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax,
    {
        self.zip_with(other, MinMax::max)
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let v = vec3(-5, 2, 9).clamp(Vector::splat(0), Vector::splat(4));
    /// assert_eq!(v, vec3(0, 2, 4));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax,
    {
        self.zip(min).zip_with(max, |(v, min), max| v.clamp(min, max))
    }
}

impl<T> Vector<T, 2> {
    /// Removes the last element of this vector, yielding a vector with a single element.
    pub fn truncate(self) -> Vector<T, 1> {
        let [x, _] = self.into_array();
        Vector([x])
    }

    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        Vector([x, y, value])
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.into_array();
        Vector([x, y])
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        Vector([x, y, z, value])
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.into_array();
        Vector([x, y, z])
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

/// Copies the elements of a slice of exactly `N` elements.
///
/// # Examples
///
/// ```
/// # use eseed_math::*;
/// let v = Vec3::try_from(&[1, 2, 3][..]).unwrap();
/// assert_eq!(v, vec3(1, 2, 3));
///
/// let err = Vec3::<i32>::try_from(&[1, 2][..]).unwrap_err();
/// assert_eq!(err, ShapeError::LengthMismatch { expected: 3, found: 2 });
/// ```
impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = ShapeError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        let array = <[T; N]>::try_from(slice).map_err(|_| ShapeError::LengthMismatch {
            expected: N,
            found: slice.len(),
        })?;
        Ok(Self(array))
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Formats the vector as a parenthesized, comma-separated list of its elements.
///
/// Formatting options such as precision are applied to every element.
///
/// ```
/// # use eseed_math::*;
/// assert_eq!(vec3(1, -2, 3).to_string(), "(1, -2, 3)");
/// assert_eq!(format!("{:.1}", vec2(0.26, 1.0)), "(0.3, 1.0)");
/// ```
impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        fmt::Display::fmt(&self.0.iter().format(", "), f)?;
        f.write_str(")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use crate::test::init_logger;

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::Y[1], 1.0);
        assert_eq!(Vec4f::W[3], 1.0);

        let mut v = vec2(0, 1);
        v[0] = 777;
        assert_eq!(v, [777, 1]);
        assert_eq!(v.get(2), None);
        if let Some(elem) = v.get_mut(1) {
            *elem = 9;
        }
        assert_eq!(v, vec2(777, 9));
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let v = vec2(1, 2);
        let i = v.as_slice().len();
        let _elem = v[i];
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{}", vec1(true)), "(true)");
    }

    #[test]
    fn resize() {
        init_logger();

        assert_eq!(vec4(1, 2, 3, 4).resize::<2>(), vec2(1, 2));
        assert_eq!(vec2(1.5, 2.5).resize::<3>(), vec3(1.5, 2.5, 0.0));
        assert_eq!(vec3(1, 2, 3).resize::<3>(), vec3(1, 2, 3));
    }

    #[test]
    fn convert_and_cast() {
        let v: Vec3<i64> = vec3(1i32, -2, 3).convert();
        assert_eq!(v, vec3(1i64, -2, 3));

        assert_eq!(vec2(300i32, -1).cast::<u8>(), vec2(44u8, 255));
        assert_eq!(vec2(0.5f64, 1.5).cast::<f32>(), vec2(0.5f32, 1.5));
    }

    #[test]
    fn try_from_slice() {
        let data = [1, 2, 3, 4];
        assert_eq!(Vec4::try_from(&data[..]), Ok(vec4(1, 2, 3, 4)));
        assert_eq!(
            Vec2::<i32>::try_from(&data[..]),
            Err(ShapeError::LengthMismatch {
                expected: 2,
                found: 4
            })
        );
    }

    #[test]
    fn increment_decrement() {
        let mut v = vec3(0, 1, 2);
        let old = v.post_increment();
        assert_eq!(old, vec3(0, 1, 2));
        assert_eq!(v, vec3(1, 2, 3));

        v.decrement().decrement();
        assert_eq!(v, vec3(-1, 0, 1));

        let old = v.post_decrement();
        assert_eq!(old, vec3(-1, 0, 1));
        assert_eq!(v, vec3(-2, -1, 0));
    }

    #[test]
    fn logical() {
        let a = vec4(0, 1, 0, 3);
        let b = vec4(0, 0, 2, 3);
        assert_eq!(a.logical_and(b), vec4(false, false, false, true));
        assert_eq!(a.logical_or(b), vec4(false, true, true, true));
        assert_eq!(a.logical_not(), vec4(true, false, true, false));

        let p = vec2(true, false);
        assert_eq!(!p, vec2(false, true));
        assert_eq!(p & vec2(true, true), p);
        assert_eq!(p | vec2(false, true), vec2(true, true));

        assert_eq!(a.logical_and_scalar(2u8), vec4(false, true, false, true));
        assert_eq!(a.logical_and_scalar(0.0f32), Vector::splat(false));
        assert_eq!(a.logical_or_scalar(0), vec4(false, true, false, true));
        assert_eq!(a.logical_or_scalar(-3i64), Vector::splat(true));

        // Scalar on the left.
        assert_eq!(Vector::splat(7).logical_and(a), a.logical_and_scalar(7));
        assert_eq!(Vector::splat(0).logical_or(a), a.logical_or_scalar(0));
    }

    #[test]
    fn geometry() {
        assert_eq!(vec3(1, 3, -5).length2(), 35);
        assert_eq!(vec2(3.0, 4.0).length(), 5.0);
        assert_eq!(vec2(0.0, -2.0).normalize(), vec2(0.0, -1.0));
        assert_eq!(vec3(1, 2, 3).truncate().extend(9), vec3(1, 2, 9));
        assert_eq!(vec4(1, 2, 3, 4).truncate(), vec3(1, 2, 3));
    }

    #[test]
    fn eq_converted() {
        let v = vec3(1u16, 2, 300);
        assert!(v.eq_converted(&vec3(1u32, 2, 300)));
        assert!(v.eq_converted(&vec3(1.0f32, 2.0, 300.0)));
        assert!(!v.eq_converted(&vec3(1i32, 2, 44)));
    }

    #[cfg(feature = "bytemuck")]
    #[test]
    fn bytemuck_cast() {
        let verts = [Vec3f::X, vec3(1.0, 2.0, 3.0)];
        let floats: &[f32] = bytemuck::cast_slice(&verts);
        assert_eq!(floats, &[1.0, 0.0, 0.0, 1.0, 2.0, 3.0]);

        let back: &[Vec3f] = bytemuck::cast_slice(floats);
        assert_eq!(back, &verts);
        assert_eq!(bytemuck::bytes_of(&Vec3f::X).len(), 12);
    }
}
