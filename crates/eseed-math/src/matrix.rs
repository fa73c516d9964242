use std::{
    array, fmt,
    ops::{Add, AddAssign, Mul, SubAssign},
};

use itertools::Itertools;

use crate::{Cast, One, ShapeError, Vector, Zero};

mod ops;

/// A 1x1 matrix.
pub type Mat1<T> = Matrix<T, 1, 1>;
/// A 1x1 matrix with [`f32`] elements.
pub type Mat1f = Mat1<f32>;
/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A 1x1 matrix. Same as [`Mat1`].
pub type Mat1x1<T> = Matrix<T, 1, 1>;
/// A 2x2 matrix. Same as [`Mat2`].
pub type Mat2x2<T> = Matrix<T, 2, 2>;
/// A 3x3 matrix. Same as [`Mat3`].
pub type Mat3x3<T> = Matrix<T, 3, 3>;
/// A 4x4 matrix. Same as [`Mat4`].
pub type Mat4x4<T> = Matrix<T, 4, 4>;

/// A matrix with 1 row and 2 columns.
pub type Mat1x2<T> = Matrix<T, 1, 2>;
/// A matrix with 1 row and 3 columns.
pub type Mat1x3<T> = Matrix<T, 1, 3>;
/// A matrix with 1 row and 4 columns.
pub type Mat1x4<T> = Matrix<T, 1, 4>;
/// A matrix with 2 rows and 1 column.
pub type Mat2x1<T> = Matrix<T, 2, 1>;
/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 1 column.
pub type Mat3x1<T> = Matrix<T, 3, 1>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 1 column.
pub type Mat4x1<T> = Matrix<T, 4, 1>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// The matrix is stored as an array of `R` row [`Vector`]s with `C` elements each.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors. A nested array of rows can
///   also be converted with [`From`].
/// - A flat slice of exactly `R * C` elements can be converted in row-major order with
///   [`TryFrom`].
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::from_scalar`] places a value on the main diagonal and 0 everywhere else.
/// - For square matrices (where `R` equals `C`), [`Matrix::from_diagonal`] can be used to create a
///   matrix with a specified diagonal and zero outside of its diagonal.
/// - [`Matrix::resize`], [`Matrix::convert`] and [`Matrix::cast`] create a matrix from one with a
///   different size or element type.
///
/// Additionally, some associated constants for commonly used matrices are defined:
///
/// - [`Matrix::ZERO`] is a matrix with every element set to 0. The [`Default`] matrix of a
///   numeric type is the same.
/// - [`Matrix::IDENTITY`] has 1 on its diagonal and 0 everywhere else.
///
/// # Element Access
///
/// Indexing a [`Matrix`] with a single `usize` yields a *row*. Indexing it with a tuple of
/// `(usize, usize)` yields a single element. The first element of the tuple is the *row* (Y
/// coordinate), the second is the *column* (X coordinate), matching common mathematical notation.
/// Indices are 0-based.
///
/// ```
/// # use eseed_math::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// assert_eq!(mat[1], vec2(2, 3));
/// assert_eq!(mat.column(1), vec2(1, 3));
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`],
/// [`Matrix::get_mut`], [`Matrix::get_row`] and [`Matrix::get_column`] return [`Option`]s instead
/// and can be used for checked indexing:
///
/// ```
/// # use eseed_math::*;
/// let mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// assert_eq!(mat.get(0, 0), Some(&0));
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// assert_eq!(mat.get_row(1), None);
/// ```
///
/// # Operators
///
/// Like for [`Vector`], every operator works *element-wise*. In particular, `*` multiplies
/// corresponding elements. Use [`Matrix::matmul`] and [`Matrix::mul_vec`] for the
/// linear-algebra product.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>(pub(crate) [Vector<T, C>; R]);

#[cfg(feature = "bytemuck")]
#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([Vector::<T, C>::ZERO; R]);
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a matrix with `value` on its main diagonal and 0 everywhere else.
    ///
    /// For non-square matrices, the diagonal ends after `min(R, C)` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let mat = Mat2x3::from_scalar(5);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [5, 0, 0],
    ///     [0, 5, 0],
    /// ]));
    /// ```
    pub const fn from_scalar(value: T) -> Self {
        let mut this = Self::ZERO;
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            this.0[i].0[i] = value;
            i += 1;
        }
        this
    }
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector with this matrix via [`Matrix::mul_vec`] returns the vector
    /// unchanged.
    pub const IDENTITY: Self = Self::from_scalar(T::ONE);
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The smallest dimension of the matrix (`R` or `C`).
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// Passing the wrong number of rows, or rows of the wrong length, fails to compile.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(Into::into))
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let mat = Matrix::from_columns([
    ///     vec2(0, 3),
    ///     vec2(1, 4),
    ///     vec2(2, 5),
    /// ]);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]));
    /// ```
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Matrix::<T, C, R>::from_rows(columns).transpose()
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// Elements are visited in row-major order. This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| Vector::from_fn(|col| cb(row, col))))
    }

    /// Creates a matrix with every element set to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// assert_eq!(Mat2x3::splat(7), Matrix::from_rows([[7, 7, 7], [7, 7, 7]]));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([Vector::splat(elem); R])
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Combines corresponding elements of `self` and `other` with a closure.
    ///
    /// All binary operators on matrices are implemented in terms of this method.
    pub fn zip_with<U, V, F>(self, other: Matrix<U, R, C>, mut f: F) -> Matrix<V, R, C>
    where
        F: FnMut(T, U) -> V,
    {
        let rows = Vector(self.0).zip_with(Vector(other.0), |a, b| a.zip_with(b, &mut f));
        Matrix(rows.into_array())
    }

    /// Invokes `f` with a mutable reference to each element.
    pub(crate) fn update<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        for row in &mut self.0 {
            row.update(&mut f);
        }
    }

    /// Invokes `f` with a mutable reference to each element and the corresponding element of
    /// `other`.
    pub(crate) fn zip_update<U, F>(&mut self, other: Matrix<U, R, C>, mut f: F)
    where
        F: FnMut(&mut T, U),
    {
        for (row, other) in self.0.iter_mut().zip(other.0) {
            row.zip_update(other, &mut f);
        }
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R> {
        let mut rows = self.0.map(|row| row.into_array().into_iter());
        // `from_fn` visits the output row by row, which consumes each input row front to back.
        Matrix::from_fn(|_, col| rows[col].next().unwrap())
    }

    /// Returns a copy of the row at index `row`.
    ///
    /// # Panics
    ///
    /// This method panics if `row` is out of bounds.
    #[inline]
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        self.0[row]
    }

    /// Returns a copy of the column at index `col`, gathered from every row.
    ///
    /// # Panics
    ///
    /// This method panics if `col` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.column(2), vec2(2, 5));
    /// ```
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        assert!(
            col < C,
            "column index {} out of range for matrix with {} columns",
            col,
            C,
        );
        Vector::from_fn(|row| self.0[row][col])
    }

    /// Returns a copy of the row at index `row`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get_row(1), Some(vec3(3, 4, 5)));
    /// assert_eq!(mat.get_row(2), None);
    /// ```
    pub fn get_row(&self, row: usize) -> Option<Vector<T, C>>
    where
        T: Copy,
    {
        self.0.get(row).copied()
    }

    /// Returns a copy of the column at index `col`, or [`None`] if out of bounds.
    pub fn get_column(&self, col: usize) -> Option<Vector<T, R>>
    where
        T: Copy,
    {
        (col < C).then(|| self.column(col))
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let mut mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// if let Some(elem) = mat.get_mut(1, 0) {
    ///     *elem = 999;
    /// }
    /// if let Some(elem) = mat.get_mut(2, 0) {
    ///     *elem = 777;
    /// }
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [999, 4, 5],
    /// ]));
    /// ```
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Returns a reference to the row vectors of this matrix.
    #[inline]
    pub const fn rows(&self) -> &[Vector<T, C>; R] {
        &self.0
    }

    /// Converts this matrix into its array of row vectors.
    #[inline]
    pub fn into_rows(self) -> [Vector<T, C>; R] {
        self.0
    }

    /// Returns a matrix with the contents of `self`, but a potentially different size.
    ///
    /// The leading `min(R, R2)` rows are copied over, each resized with [`Vector::resize`]. Rows
    /// and columns not present in `self` will be initialized with [`T::ZERO`][`Zero::ZERO`], and
    /// rows and columns that don't fit into the result are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    /// ]);
    /// let resized = mat.resize::<2, 2>();
    /// assert_eq!(resized, Matrix::from_rows([
    ///     [1, 2],
    ///     [0, 0],
    /// ]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(self) -> Matrix<T, R2, C2>
    where
        T: Zero,
    {
        if R2 < R || C2 < C {
            log::trace!("truncating {}x{} matrix to {}x{}", R, C, R2, C2);
        }
        let mut rows = self.0.into_iter();
        Matrix(array::from_fn(|_| {
            rows.next().map_or(Vector::ZERO, |row| row.resize::<C2>())
        }))
    }

    /// Converts each element to `U` via its [`Into`] implementation.
    ///
    /// To change both the element type and the size, chain this with [`Matrix::resize`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let mat: Mat2<f64> = Mat2::<u8>::IDENTITY.convert();
    /// assert_eq!(mat, Mat2::<f64>::IDENTITY);
    /// ```
    pub fn convert<U>(self) -> Matrix<U, R, C>
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
    /// let mat = Matrix::from_rows([[0.5f32, -1.5]]);
    /// assert_eq!(mat.cast::<i16>(), Matrix::from_rows([[0i16, -1]]));
    /// ```
    pub fn cast<U>(self) -> Matrix<U, R, C>
    where
        T: Cast<U>,
    {
        self.map(Cast::cast)
    }

    /// Computes the matrix product of `self` and `rhs`.
    ///
    /// This is the linear-algebra product, not the element-wise product computed by `*`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let a = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// let b = Matrix::from_rows([
    ///     [1, 0],
    ///     [0, 1],
    ///     [1, 1],
    /// ]);
    /// assert_eq!(a.matmul(b), Matrix::from_rows([
    ///     [4, 5],
    ///     [10, 11],
    /// ]));
    /// ```
    pub fn matmul<U, const K: usize>(
        self,
        rhs: Matrix<U, C, K>,
    ) -> Matrix<<T as Mul<U>>::Output, R, K>
    where
        T: Mul<U> + Copy,
        U: Copy,
        <T as Mul<U>>::Output: Zero + Add<Output = <T as Mul<U>>::Output>,
    {
        let columns = rhs.transpose();
        Matrix::from_fn(|row, col| self.0[row].dot(columns.0[col]))
    }

    /// Multiplies this matrix with a column vector, returning the transformed vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat.mul_vec(vec2(4, 5)), vec2(5, 23));
    /// assert_eq!(Mat3f::IDENTITY.mul_vec(Vec3f::Y), Vec3f::Y);
    /// ```
    pub fn mul_vec<U>(self, vec: Vector<U, C>) -> Vector<<T as Mul<U>>::Output, R>
    where
        T: Mul<U> + Copy,
        U: Copy,
        <T as Mul<U>>::Output: Zero + Add<Output = <T as Mul<U>>::Output>,
    {
        Vector(self.0.map(|row| row.dot(vec)))
    }

    /// Element-wise logical negation, treating non-zero elements as `true`.
    ///
    /// For `bool` matrices, use the `!` operator instead.
    pub fn logical_not(self) -> Matrix<bool, R, C>
    where
        T: Zero + PartialEq,
    {
        Matrix(self.0.map(Vector::logical_not))
    }

    /// Element-wise logical and, treating non-zero elements as `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let a = Matrix::from_rows([[0, 1], [2, 3]]);
    /// let b = Matrix::from_rows([[1.0, 1.0], [0.0, -1.0]]);
    /// assert_eq!(a.logical_and(b), Matrix::from_rows([
    ///     [false, true],
    ///     [false, true],
    /// ]));
    /// ```
    pub fn logical_and<U>(self, other: Matrix<U, R, C>) -> Matrix<bool, R, C>
    where
        T: Zero + PartialEq,
        U: Zero + PartialEq,
    {
        self.zip_with(other, |a, b| a != T::ZERO && b != U::ZERO)
    }

    /// Element-wise logical or, treating non-zero elements as `true`.
    pub fn logical_or<U>(self, other: Matrix<U, R, C>) -> Matrix<bool, R, C>
    where
        T: Zero + PartialEq,
        U: Zero + PartialEq,
    {
        self.zip_with(other, |a, b| a != T::ZERO || b != U::ZERO)
    }

    /// Element-wise logical and with a scalar, treating non-zero values as `true`.
    ///
    /// Logical and is commutative, so this also computes `scalar && matrix`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let mat = Matrix::from_rows([[0, 1], [2, 0]]);
    /// assert_eq!(mat.logical_and_scalar(1), Matrix::from_rows([[false, true], [true, false]]));
    /// assert_eq!(mat.logical_and_scalar(0.0), Mat2::splat(false));
    /// ```
    pub fn logical_and_scalar<S>(self, scalar: S) -> Matrix<bool, R, C>
    where
        T: Zero + PartialEq,
        S: Zero + PartialEq + Copy,
    {
        Matrix(self.0.map(|row| row.logical_and_scalar(scalar)))
    }

    /// Element-wise logical or with a scalar, treating non-zero values as `true`.
    ///
    /// Logical or is commutative, so this also computes `scalar || matrix`.
    pub fn logical_or_scalar<S>(self, scalar: S) -> Matrix<bool, R, C>
    where
        T: Zero + PartialEq,
        S: Zero + PartialEq + Copy,
    {
        Matrix(self.0.map(|row| row.logical_or_scalar(scalar)))
    }

    /// Compares two matrices with different element types, converting the elements of `self` to
    /// `U` first.
    ///
    /// `==` only works between element types that implement [`PartialEq`] for each other, which
    /// no two distinct primitive types do. This method accepts any lossless conversion instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let small = Matrix::from_rows([[1u8, 2], [3, 255]]);
    /// assert!(small.eq_converted(&Matrix::from_rows([[1u32, 2], [3, 255]])));
    /// assert!(small.eq_converted(&Matrix::from_rows([[1.0f32, 2.0], [3.0, 255.0]])));
    /// assert!(!small.eq_converted(&Matrix::from_rows([[1i16, 2], [3, -1]])));
    /// ```
    pub fn eq_converted<U>(&self, other: &Matrix<U, R, C>) -> bool
    where
        T: Copy + Into<U>,
        U: PartialEq,
    {
        self.0.iter().zip(&other.0).all(|(a, b)| a.eq_converted(b))
    }

    /// Adds one to every element, returning `self` for chaining.
    pub fn increment(&mut self) -> &mut Self
    where
        T: One + AddAssign,
    {
        self.update(|elem| *elem += T::ONE);
        self
    }

    /// Subtracts one from every element, returning `self` for chaining.
    pub fn decrement(&mut self) -> &mut Self
    where
        T: One + SubAssign,
    {
        self.update(|elem| *elem -= T::ONE);
        self
    }

    /// Adds one to every element, returning the value from before the update.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let mut mat = Mat2::<i32>::IDENTITY;
    /// let old = mat.post_increment();
    /// assert_eq!(old, Mat2::<i32>::IDENTITY);
    /// assert_eq!(mat, Matrix::from_rows([[2, 1], [1, 2]]));
    /// ```
    pub fn post_increment(&mut self) -> Self
    where
        T: One + AddAssign + Copy,
    {
        let old = *self;
        self.increment();
        old
    }

    /// Subtracts one from every element, returning the value from before the update.
    pub fn post_decrement(&mut self) -> Self
    where
        T: One + SubAssign + Copy,
    {
        let old = *self;
        self.decrement();
        old
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// *Note*: This method is intentionally restricted to square matrices to allow type inference
    /// of the created [`Matrix`]. To fill the diagonal of a non-square matrix with a single value,
    /// use [`Matrix::from_scalar`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero,
    {
        let mut this = Self::ZERO;
        for (i, elem) in diag.into().into_array().into_iter().enumerate() {
            this.0[i][i] = elem;
        }
        this
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use eseed_math::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Mat3f::IDENTITY.trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Zero + Add<Output = T> + Copy,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self(rows.map(Vector))
    }
}

impl<T, const R: usize, const C: usize> From<Matrix<T, R, C>> for [[T; C]; R] {
    #[inline]
    fn from(mat: Matrix<T, R, C>) -> Self {
        mat.0.map(Vector::into_array)
    }
}

/// Fills a matrix from a slice of exactly `R * C` elements in row-major order.
///
/// # Examples
///
/// ```
/// # use eseed_math::*;
/// let mat = Mat2x3::try_from(&[1, 2, 3, 4, 5, 6][..]).unwrap();
/// assert_eq!(mat, Matrix::from_rows([
///     [1, 2, 3],
///     [4, 5, 6],
/// ]));
///
/// let err = Mat2::<i32>::try_from(&[1, 2, 3][..]).unwrap_err();
/// assert_eq!(err, ShapeError::LengthMismatch { expected: 4, found: 3 });
/// ```
impl<T: Copy, const R: usize, const C: usize> TryFrom<&[T]> for Matrix<T, R, C> {
    type Error = ShapeError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        if slice.len() != R * C {
            return Err(ShapeError::LengthMismatch {
                expected: R * C,
                found: slice.len(),
            });
        }
        Ok(Self::from_fn(|row, col| slice[row * C + col]))
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keeps each row on one line, even with `{:#?}`.
        struct FormatRow<'a, T, const C: usize>(&'a Vector<T, C>);
        impl<'a, T: fmt::Debug, const C: usize> fmt::Debug for FormatRow<'a, T, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[{:?}]", self.0.as_slice().iter().format(", "))
            }
        }

        f.debug_list()
            .entries(self.0.iter().map(FormatRow))
            .finish()
    }
}

/// Formats the matrix as a bracketed, comma-separated list of its rows.
///
/// Each row uses the [`Display`][fmt::Display] form of [`Vector`]. The output is meant for
/// diagnostics and is not parsed anywhere.
///
/// ```
/// # use eseed_math::*;
/// let mat = Matrix::from_rows([[1, 2], [3, 4]]);
/// assert_eq!(mat.to_string(), "[(1, 2), (3, 4)]");
/// ```
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        fmt::Display::fmt(&self.0.iter().format(", "), f)?;
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        test::{init_logger, random_int_matrix},
        vec2, vec3,
    };

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat2x3::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
        assert_eq!(
            Mat2x3::from([[1, 2, 3], [4, 5, 6]]),
            Mat2x3::from_rows([vec3(1, 2, 3), vec3(4, 5, 6)]),
        );
        assert_eq!(<[[i32; 2]; 1]>::from(Mat1x2::from_rows([[7, 8]])), [[7, 8]]);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Mat3::<i32>::default(), Mat3::<i32>::ZERO);
        assert_eq!(Mat2x4::<f64>::default(), Mat2x4::<f64>::ZERO);
        assert_eq!(Mat4x1::<u8>::default(), Matrix::from_fn(|_, _| 0u8));
        assert!(Mat4f::default().rows().iter().all(|row| *row == Vector::<f32, 4>::ZERO));
    }

    #[test]
    fn scalar_fills_diagonal() {
        fn check<const R: usize, const C: usize>() {
            let mat = Matrix::<i32, R, C>::from_scalar(7);
            for row in 0..R {
                for col in 0..C {
                    let expected = if row == col { 7 } else { 0 };
                    assert_eq!(mat[(row, col)], expected, "({row}, {col}) in {mat}");
                }
            }
        }

        check::<1, 1>();
        check::<2, 3>();
        check::<3, 2>();
        check::<4, 4>();
        check::<1, 4>();
        check::<4, 1>();

        assert_eq!(Mat3x2::<i32>::IDENTITY, Matrix::from_rows([[1, 0], [0, 1], [0, 0]]));
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.into_diagonal(), [1, 2]);
        assert_eq!(mat.trace(), 3);
    }

    #[test]
    fn access() {
        #[rustfmt::skip]
        let mut mat = Matrix::from_rows([
            [0, 1, 2],
            [3, 4, 5],
        ]);
        assert_eq!(mat[0], vec3(0, 1, 2));
        assert_eq!(mat.row(1), vec3(3, 4, 5));
        assert_eq!(mat.column(0), vec2(0, 3));
        assert_eq!(mat.get_column(2), Some(vec2(2, 5)));
        assert_eq!(mat.get_column(3), None);
        assert_eq!(mat.get(1, 2), Some(&5));
        assert_eq!(mat.get(1, 3), None);

        mat[1][0] = 30;
        mat[(0, 2)] = 20;
        assert_eq!(mat.into_rows(), [vec3(0, 1, 20), vec3(30, 4, 5)]);
    }

    #[test]
    #[should_panic]
    fn row_out_of_bounds() {
        let mat = Mat2::<i32>::IDENTITY;
        let i = mat.rows().len();
        let _row = mat[i];
    }

    #[test]
    #[should_panic]
    fn column_out_of_bounds() {
        let mat = Mat2x3::<i32>::ZERO;
        mat.column(3);
    }

    #[test]
    fn try_from_slice() {
        let data = [1, 2, 3, 4, 5, 6];
        assert_eq!(
            Mat3x2::try_from(&data[..]),
            Ok(Matrix::from_rows([[1, 2], [3, 4], [5, 6]])),
        );
        assert_eq!(
            Mat2::<i32>::try_from(&data[..]),
            Err(ShapeError::LengthMismatch {
                expected: 4,
                found: 6
            }),
        );
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        assert_eq!(mat.to_string(), "[(0, 1), (2, 3)]");
        assert_eq!(format!("{:.1}", Mat2f::IDENTITY), "[(1.0, 0.0), (0.0, 1.0)]");

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
    }

    #[rustfmt::skip]
    #[test]
    fn resize() {
        init_logger();

        let mat = Matrix::from_rows([
            [1, 2],
            [3, 4],
        ]);

        let larger = mat.resize::<3, 3>();
        assert_eq!(larger, Matrix::from_rows([
            [1, 2, 0],
            [3, 4, 0],
            [0, 0, 0],
        ]));

        let smaller = mat.resize::<1, 2>();
        assert_eq!(smaller, Matrix::from_rows([
            [1, 2]
        ]));

        let wide = mat.resize::<1, 3>();
        assert_eq!(wide, Matrix::from_rows([
            [1, 2, 0]
        ]));
    }

    #[test]
    fn resize_round_trip_keeps_leading_block() {
        init_logger();

        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
        ]);
        let round_trip = mat.resize::<2, 2>().resize::<3, 3>();

        #[rustfmt::skip]
        assert_eq!(round_trip, Matrix::from_rows([
            [1, 2, 0],
            [4, 5, 0],
            [0, 0, 0],
        ]));
    }

    #[test]
    fn convert_and_cast() {
        let mat: Mat2<i64> = Matrix::from_rows([[1i32, -2], [3, -4]]).convert();
        assert_eq!(mat, Matrix::from_rows([[1i64, -2], [3, -4]]));

        let mat = Matrix::from_rows([[1.75f64, -0.5], [300.0, 2.0]]);
        assert_eq!(mat.cast::<u8>(), Matrix::from_rows([[1u8, 0], [255, 2]]));

        // Size and type changes compose.
        let mat = Mat2::<f32>::IDENTITY.cast::<i32>().resize::<3, 3>();
        assert_eq!(mat, Matrix::from_diagonal([1, 1, 0]));
    }

    #[test]
    fn transpose() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..10 {
            let mat = random_int_matrix::<3, 4>(&mut rng);
            let transposed = mat.transpose();
            for row in 0..3 {
                assert_eq!(transposed.column(row), mat.row(row));
            }
            assert_eq!(transposed.transpose(), mat);
        }
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        let out = mat.mul_vec(vec);
        assert_eq!(out, [5, 23]);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a.matmul(b);
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);

        let mut rng = fastrand::Rng::with_seed(0xa11ce);
        let m = random_int_matrix::<3, 3>(&mut rng);
        assert_eq!(m.matmul(Mat3::<i32>::IDENTITY), m);
        assert_eq!(Mat3::<i32>::IDENTITY.matmul(m), m);
    }

    #[test]
    fn logical() {
        let a = Matrix::from_rows([[0, 1], [2, 0]]);
        let b = Matrix::from_rows([[0, 0], [5, 5]]);
        assert_eq!(a.logical_and(b), Matrix::from_rows([[false, false], [true, false]]));
        assert_eq!(a.logical_or(b), Matrix::from_rows([[false, true], [true, true]]));
        assert_eq!(a.logical_not(), Matrix::from_rows([[true, false], [false, true]]));

        assert_eq!(a.logical_and_scalar(1), Matrix::from_rows([[false, true], [true, false]]));
        assert_eq!(a.logical_and_scalar(0u8), Mat2::splat(false));
        assert_eq!(a.logical_or_scalar(0), Matrix::from_rows([[false, true], [true, false]]));
        assert_eq!(a.logical_or_scalar(-1.5f32), Mat2::splat(true));

        // Scalar on the left.
        assert_eq!(Mat2::splat(3).logical_and(a), a.logical_and_scalar(3));
        assert_eq!(Mat2::splat(0).logical_or(a), a.logical_or_scalar(0));
    }

    #[test]
    fn eq_converted() {
        let a = Matrix::from_rows([[1u8, 2], [3, 4]]);
        assert!(a.eq_converted(&Matrix::from_rows([[1u32, 2], [3, 4]])));
        assert!(a.eq_converted(&Matrix::from_rows([[1i64, 2], [3, 4]])));
        assert!(a.eq_converted(&Matrix::from_rows([[1.0f64, 2.0], [3.0, 4.0]])));
        assert!(!a.eq_converted(&Matrix::from_rows([[1u32, 2], [3, 260]])));

        let f = Matrix::from_rows([[0.5f32, f32::NAN]]);
        assert!(!f.eq_converted(&Matrix::from_rows([[0.5f64, f64::NAN]])));
    }

    #[cfg(feature = "bytemuck")]
    #[test]
    fn bytemuck_cast() {
        let mats = [Mat4f::IDENTITY, Mat4f::from_fn(|row, col| (row * 4 + col) as f32)];
        let floats: &[f32] = bytemuck::cast_slice(&mats);
        assert_eq!(floats.len(), 32);
        assert_eq!(&floats[..5], &[1.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(floats[16 + 6], 6.0);

        let back: &[Mat4f] = bytemuck::cast_slice(floats);
        assert_eq!(back, &mats);
        let flat: [u32; 4] = bytemuck::cast(Mat2x2::from_rows([[1u32, 2], [3, 4]]));
        assert_eq!(flat, [1, 2, 3, 4]);
    }

    #[test]
    fn square_aliases() {
        assert_eq!(Mat3x3::<i32>::IDENTITY, Mat3::<i32>::IDENTITY);
        assert_eq!(Mat4x4::<f32>::ZERO, Mat4f::ZERO);
        assert_eq!(Mat1x1::from_rows([[2]]).trace(), 2);
    }

    #[test]
    fn increment_decrement() {
        let mut mat = Mat2x3::<i32>::ZERO;
        mat.increment().increment();
        assert_eq!(mat, Matrix::from_fn(|_, _| 2));

        let old = mat.post_decrement();
        assert_eq!(old, Matrix::from_fn(|_, _| 2));
        assert_eq!(mat, Matrix::from_fn(|_, _| 1));

        mat.decrement();
        assert_eq!(mat, Mat2x3::<i32>::ZERO);
    }
}
