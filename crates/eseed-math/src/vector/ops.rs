//! Implementations of `std::ops` and comparison traits.

use std::ops::{Index, IndexMut};

use crate::ops::elementwise_ops;

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0[..] == *other
    }
}

elementwise_ops!(Vector[N]);

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, Vec2f};

    #[test]
    fn vector_vector() {
        let a = vec3(6, 7, 8);
        let b = vec3(3, 2, 5);
        assert_eq!(a + b, vec3(9, 9, 13));
        assert_eq!(a - b, vec3(3, 5, 3));
        assert_eq!(a * b, vec3(18, 14, 40));
        assert_eq!(a / b, vec3(2, 3, 1));
        assert_eq!(a % b, vec3(0, 1, 3));
        assert_eq!(a & b, vec3(2, 2, 0));
        assert_eq!(a | b, vec3(7, 7, 13));
        assert_eq!(a ^ b, vec3(5, 5, 13));
        assert_eq!(a << vec3(1u32, 2, 3), vec3(12, 28, 64));
        assert_eq!(a >> vec3(1u8, 1, 2), vec3(3, 3, 2));
    }

    #[test]
    fn vector_scalar() {
        let v = vec2(10u16, 21);
        assert_eq!(v + 1u16, vec2(11u16, 22));
        assert_eq!(v - 1u16, vec2(9u16, 20));
        assert_eq!(v * 2u16, vec2(20u16, 42));
        assert_eq!(v / 2u16, vec2(5u16, 10));
        assert_eq!(v % 4u16, vec2(2u16, 1));
        assert_eq!(v & 3u16, vec2(2u16, 1));
        assert_eq!(v | 1u16, vec2(11u16, 21));
        assert_eq!(v ^ 1u16, vec2(11u16, 20));
        assert_eq!(v << 1u32, vec2(20u16, 42));
        assert_eq!(v >> 1i8, vec2(5u16, 10));
    }

    #[test]
    fn scalar_vector() {
        let v = vec2(2.0, 4.0);
        assert_eq!(1.0 + v, vec2(3.0, 5.0));
        assert_eq!(1.0 - v, vec2(-1.0, -3.0));
        assert_eq!(3.0 * v, vec2(6.0, 12.0));
        assert_eq!(8.0 / v, vec2(4.0, 2.0));
        assert_eq!(5.0 % v, vec2(1.0, 1.0));
        assert_eq!(1u8 << vec2(1u32, 3), vec2(2u8, 8));
        assert_eq!(true & vec2(true, false), vec2(true, false));
    }

    #[test]
    fn assign() {
        let mut v = vec4(1, 2, 3, 4);
        v += vec4(1, 1, 1, 1);
        assert_eq!(v, [2, 3, 4, 5]);
        v *= 2;
        assert_eq!(v, [4, 6, 8, 10]);
        v -= vec4(4, 4, 4, 4);
        assert_eq!(v, [0, 2, 4, 6]);
        v /= 2;
        assert_eq!(v, [0, 1, 2, 3]);
        v %= 2;
        assert_eq!(v, [0, 1, 0, 1]);
        v <<= 3u32;
        assert_eq!(v, [0, 8, 0, 8]);
        v >>= vec4(0u32, 1, 0, 2);
        assert_eq!(v, [0, 4, 0, 2]);
        v |= 1;
        assert_eq!(v, [1, 5, 1, 3]);
        v &= vec4(1, 4, 0, 3);
        assert_eq!(v, [1, 4, 0, 3]);
        v ^= 7;
        assert_eq!(v, [6, 3, 7, 4]);
    }

    #[test]
    fn unary() {
        assert_eq!(-vec2(1, -2), vec2(-1, 2));
        assert_eq!(-Vec2f::X, vec2(-1.0, 0.0));
        assert_eq!(!vec2(0u8, 0xF0), vec2(0xFFu8, 0x0F));
    }

    #[test]
    fn eq() {
        assert_eq!(vec2(1, 2), [1, 2]);
        assert_eq!([1, 2], vec2(1, 2));
        assert_eq!(vec2(1, 2), [1, 2][..]);
        assert_ne!(vec2(1, 2), vec2(2, 1));
    }
}
