//! Portable lane kernels.
//!
//! Plain per-lane loops over [`Scalar`] arithmetic. These serve every
//! `(T, N)` shape without a native kernel, and every shape when the
//! `portable` feature is on. They are public so callers can cross-check a
//! native build against them.

use crate::simd::{BinOp, CmpOp};
use crate::traits::{MaskScalar, Scalar};

/// Lane-wise binary operation.
#[inline]
pub fn binary<T: Scalar, const N: usize>(op: BinOp, a: &[T; N], b: &[T; N]) -> [T; N] {
    let f: fn(T, T) -> T = match op {
        BinOp::Add => T::lane_add,
        BinOp::Sub => T::lane_sub,
        BinOp::Mul => T::lane_mul,
        BinOp::Div => T::lane_div,
        BinOp::Rem => T::lane_rem,
        BinOp::Min => |x, y| if x < y { x } else { y },
        BinOp::Max => |x, y| if x > y { x } else { y },
    };
    core::array::from_fn(|i| f(a[i], b[i]))
}

/// Lane-wise comparison. True lanes are all ones.
#[inline]
pub fn compare<T: Scalar, const N: usize>(op: CmpOp, a: &[T; N], b: &[T; N]) -> [T::Mask; N] {
    let f: fn(&T, &T) -> bool = match op {
        CmpOp::Eq => T::eq,
        CmpOp::Ne => T::ne,
        CmpOp::Lt => T::lt,
        CmpOp::Le => T::le,
        CmpOp::Gt => T::gt,
        CmpOp::Ge => T::ge,
    };
    core::array::from_fn(|i| T::Mask::from_bool(f(&a[i], &b[i])))
}

/// `a[i]` where `mask[i]` is nonzero, else `b[i]`.
#[inline]
pub fn select<T: Scalar, const N: usize>(mask: &[T::Mask; N], a: &[T; N], b: &[T; N]) -> [T; N] {
    core::array::from_fn(|i| if mask[i].is_nonzero() { a[i] } else { b[i] })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_follow_operand_order() {
        let a = [0.0_f64, f64::NAN];
        let b = [-0.0_f64, 2.0];
        let lo = binary(BinOp::Min, &a, &b);
        assert!(lo[0].is_sign_negative());
        assert_eq!(lo[1], 2.0);
        let hi = binary(BinOp::Max, &b, &a);
        assert!(hi[0].is_sign_positive());
        assert!(hi[1].is_nan());
    }

    #[test]
    fn integer_ops_wrap() {
        let a = [i16::MAX, 5, -9, 100];
        let b = [1_i16, 0, 2, -3];
        assert_eq!(binary(BinOp::Add, &a, &b), [i16::MIN, 5, -7, 97]);
        assert_eq!(binary(BinOp::Rem, &[7_i16, 8, -9, 10], &[2, 3, 4, 7]), [1, 2, -1, 3]);
    }

    #[test]
    fn masks_are_all_ones() {
        let m = compare(CmpOp::Le, &[1_u64, 9], &[1, 3]);
        assert_eq!(m, [-1_i64, 0]);
        assert_eq!(select(&[0_i8, 7], &[1_u8, 2], &[3, 4]), [3, 2]);
    }
}
