//! Out-parameter helpers over [`SimdVec`].
//!
//! Each function writes its result into `dst`, so kernels can keep a fixed
//! set of accumulators and update them in place. The method forms on
//! [`SimdVec`] are equivalent.

use num_traits::AsPrimitive;

use crate::traits::{MaskScalar, Scalar};
use crate::vec::{MaskVec, Permutation, Permutation2, SimdVec};

/// Set every lane of `dst` to `x`.
#[inline]
pub fn vbroadcast<T: Scalar, const N: usize>(dst: &mut SimdVec<T, N>, x: T) {
    *dst = SimdVec::splat(x);
}

/// Load the first `N` elements of `src` (any alignment).
///
/// # Panics
///
/// If `src.len() < N`.
#[inline]
pub fn vload<T: Scalar, const N: usize>(dst: &mut SimdVec<T, N>, src: &[T]) {
    *dst = SimdVec::load(src);
}

/// Store `src` into the first `N` elements of `dst` (any alignment).
///
/// # Panics
///
/// If `dst.len() < N`.
#[inline]
pub fn vstore<T: Scalar, const N: usize>(dst: &mut [T], src: &SimdVec<T, N>) {
    src.store(dst);
}

/// `dst[i] = if mask[i] != 0 { a[i] } else { b[i] }`.
#[inline]
pub fn vselect<T: Scalar, const N: usize>(
    dst: &mut SimdVec<T, N>,
    a: &SimdVec<T, N>,
    b: &SimdVec<T, N>,
    mask: &MaskVec<T, N>,
) {
    *dst = SimdVec::select(*mask, *a, *b);
}

/// `dst[i] = if a[i] < b[i] { a[i] } else { b[i] }`.
#[inline]
pub fn vmin<T: Scalar, const N: usize>(dst: &mut SimdVec<T, N>, a: &SimdVec<T, N>, b: &SimdVec<T, N>) {
    *dst = a.min(*b);
}

/// `dst[i] = if a[i] > b[i] { a[i] } else { b[i] }`.
#[inline]
pub fn vmax<T: Scalar, const N: usize>(dst: &mut SimdVec<T, N>, a: &SimdVec<T, N>, b: &SimdVec<T, N>) {
    *dst = a.max(*b);
}

/// True if any mask lane is nonzero.
#[inline]
pub fn vany<M: MaskScalar, const N: usize>(mask: &SimdVec<M, N>) -> bool {
    mask.any()
}

/// True if every mask lane is zero.
#[inline]
pub fn vnone<M: MaskScalar, const N: usize>(mask: &SimdVec<M, N>) -> bool {
    mask.none()
}

/// True if every mask lane is all ones.
#[inline]
pub fn vall<M: MaskScalar, const N: usize>(mask: &SimdVec<M, N>) -> bool {
    mask.all()
}

/// Per-lane `as` conversion. Lane counts match by construction.
#[inline]
pub fn vconvert<T, U, const N: usize>(dst: &mut SimdVec<U, N>, src: &SimdVec<T, N>)
where
    T: Scalar + AsPrimitive<U>,
    U: Scalar,
{
    *dst = src.convert();
}

/// `dst[i] = src[plan[i]]`.
#[inline]
pub fn vpermute<T: Scalar, const N: usize>(
    dst: &mut SimdVec<T, N>,
    src: &SimdVec<T, N>,
    plan: &Permutation<N>,
) {
    *dst = src.permute(plan);
}

/// `dst[i] = (a ++ b)[plan[i]]`.
#[inline]
pub fn vpermute2<T: Scalar, const N: usize>(
    dst: &mut SimdVec<T, N>,
    a: &SimdVec<T, N>,
    b: &SimdVec<T, N>,
    plan: &Permutation2<N>,
) {
    *dst = a.permute2(b, plan);
}
