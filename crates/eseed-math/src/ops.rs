//! Element-wise operator generation shared by [`Vector`][crate::Vector] and
//! [`Matrix`][crate::Matrix].
//!
//! `elementwise_ops!(Container[N, ...])` implements, for a container type generic over its element
//! type followed by const dimensions:
//!
//! - `Neg` and `Not`, applied to each element.
//! - Every binary arithmetic and bitwise operator between two containers of the same dimensions,
//!   with its compound-assignment counterpart.
//! - The same operators between a container and every primitive scalar type, in both operand
//!   orders (compound assignment only with the container on the left).
//!
//! The container must provide `map`, `zip_with`, `update` and `zip_update`; every generated impl is
//! a thin wrapper around one of them. Result element types are whatever the scalar operator
//! produces (`<T as Add<U>>::Output`).

macro_rules! elementwise_ops {
    ($Ty:ident [$($N:ident),+]) => {
        $crate::ops::elementwise_ops!(@unary $Ty [$($N),+] Neg::neg);
        $crate::ops::elementwise_ops!(@unary $Ty [$($N),+] Not::not);

        $crate::ops::elementwise_ops!(@binary $Ty [$($N),+] Add::add, AddAssign::add_assign);
        $crate::ops::elementwise_ops!(@binary $Ty [$($N),+] Sub::sub, SubAssign::sub_assign);
        $crate::ops::elementwise_ops!(@binary $Ty [$($N),+] Mul::mul, MulAssign::mul_assign);
        $crate::ops::elementwise_ops!(@binary $Ty [$($N),+] Div::div, DivAssign::div_assign);
        $crate::ops::elementwise_ops!(@binary $Ty [$($N),+] Rem::rem, RemAssign::rem_assign);
        $crate::ops::elementwise_ops!(@binary $Ty [$($N),+] BitAnd::bitand, BitAndAssign::bitand_assign);
        $crate::ops::elementwise_ops!(@binary $Ty [$($N),+] BitOr::bitor, BitOrAssign::bitor_assign);
        $crate::ops::elementwise_ops!(@binary $Ty [$($N),+] BitXor::bitxor, BitXorAssign::bitxor_assign);
        $crate::ops::elementwise_ops!(@binary $Ty [$($N),+] Shl::shl, ShlAssign::shl_assign);
        $crate::ops::elementwise_ops!(@binary $Ty [$($N),+] Shr::shr, ShrAssign::shr_assign);
    };

    (@unary $Ty:ident [$($N:ident),+] $Op:ident::$op:ident) => {
        impl<T, $(const $N: usize),+> ::core::ops::$Op for $Ty<T, $($N),+>
        where
            T: ::core::ops::$Op,
        {
            type Output = $Ty<<T as ::core::ops::$Op>::Output, $($N),+>;

            #[inline]
            fn $op(self) -> Self::Output {
                self.map(<T as ::core::ops::$Op>::$op)
            }
        }
    };

    (@binary $Ty:ident [$($N:ident),+] $Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident) => {
        impl<T, U, $(const $N: usize),+> ::core::ops::$Op<$Ty<U, $($N),+>> for $Ty<T, $($N),+>
        where
            T: ::core::ops::$Op<U>,
        {
            type Output = $Ty<<T as ::core::ops::$Op<U>>::Output, $($N),+>;

            #[inline]
            fn $op(self, rhs: $Ty<U, $($N),+>) -> Self::Output {
                self.zip_with(rhs, |l, r| ::core::ops::$Op::$op(l, r))
            }
        }

        impl<T, U, $(const $N: usize),+> ::core::ops::$OpAssign<$Ty<U, $($N),+>> for $Ty<T, $($N),+>
        where
            T: ::core::ops::$OpAssign<U>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: $Ty<U, $($N),+>) {
                self.zip_update(rhs, |l, r| ::core::ops::$OpAssign::$op_assign(l, r));
            }
        }

        $crate::ops::elementwise_ops!(
            @scalar $Ty [$($N),+] $Op::$op, $OpAssign::$op_assign;
            u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool
        );
    };

    (@scalar $Ty:ident [$($N:ident),+] $Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident;) => {};

    (@scalar
        $Ty:ident [$($N:ident),+] $Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident;
        $S:ty $(, $rest:ty)*
    ) => {
        impl<T, $(const $N: usize),+> ::core::ops::$Op<$S> for $Ty<T, $($N),+>
        where
            T: ::core::ops::$Op<$S>,
        {
            type Output = $Ty<<T as ::core::ops::$Op<$S>>::Output, $($N),+>;

            #[inline]
            fn $op(self, rhs: $S) -> Self::Output {
                self.map(|l| ::core::ops::$Op::$op(l, rhs))
            }
        }

        impl<T, $(const $N: usize),+> ::core::ops::$Op<$Ty<T, $($N),+>> for $S
        where
            $S: ::core::ops::$Op<T>,
        {
            type Output = $Ty<<$S as ::core::ops::$Op<T>>::Output, $($N),+>;

            #[inline]
            fn $op(self, rhs: $Ty<T, $($N),+>) -> Self::Output {
                rhs.map(|r| ::core::ops::$Op::$op(self, r))
            }
        }

        impl<T, $(const $N: usize),+> ::core::ops::$OpAssign<$S> for $Ty<T, $($N),+>
        where
            T: ::core::ops::$OpAssign<$S>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: $S) {
                self.update(|l| ::core::ops::$OpAssign::$op_assign(l, rhs));
            }
        }

        $crate::ops::elementwise_ops!(
            @scalar $Ty [$($N),+] $Op::$op, $OpAssign::$op_assign; $($rest),*
        );
    };
}
pub(crate) use elementwise_ops;
