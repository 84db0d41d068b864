use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use crate::simd::{self, BinOp, CmpOp};
use crate::traits::{IntScalar, MaskScalar, Scalar};
use crate::vec::{MaskVec, SimdVec};

// ── Arithmetic: vector ∘ vector, vector ∘ scalar ────────────────────

macro_rules! impl_arith {
    ($Op:ident, $method:ident, $OpAssign:ident, $assign:ident, $binop:expr) => {
        impl<T: Scalar, const N: usize> $Op for SimdVec<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::new(simd::binary($binop, &self.data, &rhs.data))
            }
        }

        impl<T: Scalar, const N: usize> $Op<T> for SimdVec<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self {
                self.$method(Self::splat(rhs))
            }
        }

        impl<T: Scalar, const N: usize> $OpAssign for SimdVec<T, N> {
            #[inline]
            fn $assign(&mut self, rhs: Self) {
                *self = (*self).$method(rhs);
            }
        }

        impl<T: Scalar, const N: usize> $OpAssign<T> for SimdVec<T, N> {
            #[inline]
            fn $assign(&mut self, rhs: T) {
                *self = (*self).$method(Self::splat(rhs));
            }
        }

        forward_ref_binop!($Op, $method, $OpAssign, $assign, Scalar);
    };
}

// SimdVec is Copy, so &SimdVec ops just deref and delegate.
macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident, $OpAssign:ident, $assign:ident, $Bound:ident) => {
        impl<T: $Bound, const N: usize> $Op<SimdVec<T, N>> for &SimdVec<T, N> {
            type Output = SimdVec<T, N>;

            #[inline]
            fn $method(self, rhs: SimdVec<T, N>) -> SimdVec<T, N> {
                (*self).$method(rhs)
            }
        }

        impl<T: $Bound, const N: usize> $Op<&SimdVec<T, N>> for SimdVec<T, N> {
            type Output = SimdVec<T, N>;

            #[inline]
            fn $method(self, rhs: &SimdVec<T, N>) -> SimdVec<T, N> {
                self.$method(*rhs)
            }
        }

        impl<T: $Bound, const N: usize> $Op<&SimdVec<T, N>> for &SimdVec<T, N> {
            type Output = SimdVec<T, N>;

            #[inline]
            fn $method(self, rhs: &SimdVec<T, N>) -> SimdVec<T, N> {
                (*self).$method(*rhs)
            }
        }

        impl<T: $Bound, const N: usize> $OpAssign<&SimdVec<T, N>> for SimdVec<T, N> {
            #[inline]
            fn $assign(&mut self, rhs: &SimdVec<T, N>) {
                *self = (*self).$method(*rhs);
            }
        }
    };
}

impl_arith!(Add, add, AddAssign, add_assign, BinOp::Add);
impl_arith!(Sub, sub, SubAssign, sub_assign, BinOp::Sub);
impl_arith!(Mul, mul, MulAssign, mul_assign, BinOp::Mul);
impl_arith!(Div, div, DivAssign, div_assign, BinOp::Div);
impl_arith!(Rem, rem, RemAssign, rem_assign, BinOp::Rem);

impl<T: Scalar, const N: usize> Neg for SimdVec<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(T::lane_neg)
    }
}

impl<T: Scalar, const N: usize> Neg for &SimdVec<T, N> {
    type Output = SimdVec<T, N>;

    #[inline]
    fn neg(self) -> SimdVec<T, N> {
        -*self
    }
}

// ── scalar ∘ vector (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Add<SimdVec<$t, N>> for $t {
                type Output = SimdVec<$t, N>;

                #[inline]
                fn add(self, rhs: SimdVec<$t, N>) -> SimdVec<$t, N> {
                    SimdVec::splat(self) + rhs
                }
            }

            impl<const N: usize> Sub<SimdVec<$t, N>> for $t {
                type Output = SimdVec<$t, N>;

                #[inline]
                fn sub(self, rhs: SimdVec<$t, N>) -> SimdVec<$t, N> {
                    SimdVec::splat(self) - rhs
                }
            }

            impl<const N: usize> Mul<SimdVec<$t, N>> for $t {
                type Output = SimdVec<$t, N>;

                #[inline]
                fn mul(self, rhs: SimdVec<$t, N>) -> SimdVec<$t, N> {
                    SimdVec::splat(self) * rhs
                }
            }

            impl<const N: usize> Div<SimdVec<$t, N>> for $t {
                type Output = SimdVec<$t, N>;

                #[inline]
                fn div(self, rhs: SimdVec<$t, N>) -> SimdVec<$t, N> {
                    SimdVec::splat(self) / rhs
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// ── Increment / decrement ───────────────────────────────────────────

impl<T: Scalar, const N: usize> SimdVec<T, N> {
    /// Add one to every lane in place.
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        *self += T::one();
        self
    }

    /// Subtract one from every lane in place.
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        *self -= T::one();
        self
    }
}

// ── Bitwise (integral lanes) ────────────────────────────────────────

macro_rules! impl_bitwise {
    ($Op:ident, $method:ident, $OpAssign:ident, $assign:ident, $op:tt) => {
        impl<T: IntScalar, const N: usize> $Op for SimdVec<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::new(core::array::from_fn(|i| self.data[i] $op rhs.data[i]))
            }
        }

        impl<T: IntScalar, const N: usize> $OpAssign for SimdVec<T, N> {
            #[inline]
            fn $assign(&mut self, rhs: Self) {
                *self = (*self).$method(rhs);
            }
        }

        forward_ref_binop!($Op, $method, $OpAssign, $assign, IntScalar);
    };
}

impl_bitwise!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bitwise!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bitwise!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl<T: IntScalar, const N: usize> Not for SimdVec<T, N> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.map(|x| !x)
    }
}

// ── Shifts (integral lanes) ─────────────────────────────────────────
//
// Amounts must lie in [0, bits(T)); debug builds assert it.

macro_rules! impl_shift {
    ($Op:ident, $method:ident, $OpAssign:ident, $assign:ident, $lane:ident) => {
        impl<T: IntScalar, const N: usize> $Op for SimdVec<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::new(core::array::from_fn(|i| self.data[i].$lane(rhs.data[i].as_shift())))
            }
        }

        impl<T: IntScalar, const N: usize> $Op<u32> for SimdVec<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: u32) -> Self {
                self.map(|x| x.$lane(rhs))
            }
        }

        impl<T: IntScalar, const N: usize> $OpAssign for SimdVec<T, N> {
            #[inline]
            fn $assign(&mut self, rhs: Self) {
                *self = (*self).$method(rhs);
            }
        }

        impl<T: IntScalar, const N: usize> $OpAssign<u32> for SimdVec<T, N> {
            #[inline]
            fn $assign(&mut self, rhs: u32) {
                *self = (*self).$method(rhs);
            }
        }

        forward_ref_binop!($Op, $method, $OpAssign, $assign, IntScalar);
    };
}

impl_shift!(Shl, shl, ShlAssign, shl_assign, lane_shl);
impl_shift!(Shr, shr, ShrAssign, shr_assign, lane_shr);

// ── Comparisons ─────────────────────────────────────────────────────

impl<T: Scalar, const N: usize> SimdVec<T, N> {
    #[inline]
    fn compare(&self, op: CmpOp, rhs: &Self) -> MaskVec<T, N> {
        SimdVec::new(simd::compare(op, &self.data, &rhs.data))
    }

    /// Lane-wise `==`.
    #[inline]
    pub fn simd_eq(&self, rhs: &Self) -> MaskVec<T, N> {
        self.compare(CmpOp::Eq, rhs)
    }

    /// Lane-wise `!=`. NaN lanes compare not-equal.
    #[inline]
    pub fn simd_ne(&self, rhs: &Self) -> MaskVec<T, N> {
        self.compare(CmpOp::Ne, rhs)
    }

    #[inline]
    pub fn simd_lt(&self, rhs: &Self) -> MaskVec<T, N> {
        self.compare(CmpOp::Lt, rhs)
    }

    #[inline]
    pub fn simd_le(&self, rhs: &Self) -> MaskVec<T, N> {
        self.compare(CmpOp::Le, rhs)
    }

    #[inline]
    pub fn simd_gt(&self, rhs: &Self) -> MaskVec<T, N> {
        self.compare(CmpOp::Gt, rhs)
    }

    #[inline]
    pub fn simd_ge(&self, rhs: &Self) -> MaskVec<T, N> {
        self.compare(CmpOp::Ge, rhs)
    }

    /// Lane-wise `&&`: true where both lanes are nonzero.
    #[inline]
    pub fn logical_and(&self, rhs: &Self) -> MaskVec<T, N> {
        SimdVec::new(core::array::from_fn(|i| {
            T::Mask::from_bool(self.data[i].is_nonzero() && rhs.data[i].is_nonzero())
        }))
    }

    /// Lane-wise `||`: true where either lane is nonzero.
    #[inline]
    pub fn logical_or(&self, rhs: &Self) -> MaskVec<T, N> {
        SimdVec::new(core::array::from_fn(|i| {
            T::Mask::from_bool(self.data[i].is_nonzero() || rhs.data[i].is_nonzero())
        }))
    }

    /// Lane-wise `!`: true where the lane is zero.
    #[inline]
    pub fn logical_not(&self) -> MaskVec<T, N> {
        SimdVec::new(self.data.map(|x| T::Mask::from_bool(!x.is_nonzero())))
    }
}
