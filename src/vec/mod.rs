//! Fixed-width lane vectors.
//!
//! [`SimdVec<T, N>`] holds `N` lanes of a primitive element type `T`, where
//! `N` is a non-zero power of two checked at compile time. Operators act
//! lane by lane; comparisons produce [`MaskVec`]s whose true lanes are all
//! ones. The free functions in [`func`] mirror the methods with an
//! out-parameter calling style.
//!
//! ```
//! use lanevec::SimdVec;
//!
//! let a = SimdVec::new([1.0_f32, 5.0, 3.0, 7.0]);
//! let b = SimdVec::splat(4.0_f32);
//! let lt = a.simd_lt(&b);
//! assert_eq!(lt.into_array(), [-1, 0, -1, 0]);
//! assert_eq!(SimdVec::select(lt, a, b).into_array(), [1.0, 4.0, 3.0, 4.0]);
//! ```

mod mask;
mod ops;
mod permute;

pub mod func;

pub use permute::{Permutation, Permutation2, PermutationError};

use core::fmt;
use core::ops::{Index, IndexMut};

use num_traits::AsPrimitive;

use crate::simd::{self, BinOp};
use crate::traits::Scalar;

/// `N` lanes of `T`.
///
/// Layout is exactly `[T; N]`. The lane count must be a non-zero power of
/// two; any other `N` fails to compile as soon as a vector is built or its
/// lane count is asked for.
///
/// ```compile_fail
/// use lanevec::SimdVec;
///
/// let v = SimdVec::<f32, 3>::zeros();
/// ```
///
/// ```compile_fail
/// use lanevec::SimdVec;
///
/// let n = SimdVec::<i8, 0>::LANES;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct SimdVec<T, const N: usize> {
    pub(crate) data: [T; N],
}

/// Mask vector for `SimdVec<T, N>`: signed integer lanes of the same width.
pub type MaskVec<T, const N: usize> = SimdVec<<T as Scalar>::Mask, N>;

/// Types that are lane vectors. Only [`SimdVec`] implements it, so asking
/// the lane count of anything else is a compile error.
pub trait VecType: Copy {
    /// Element type.
    type Elem: Scalar;
    /// Number of lanes.
    const LANES: usize;
}

impl<T: Scalar, const N: usize> VecType for SimdVec<T, N> {
    type Elem = T;
    const LANES: usize = {
        let () = SimdVec::<T, N>::LANES_OK;
        N
    };
}

/// Lane count of a vector type.
///
/// ```
/// use lanevec::{size, SimdVec};
///
/// assert_eq!(size::<SimdVec<u16, 8>>(), 8);
/// ```
///
/// A lane count that is not a power of two does not compile:
///
/// ```compile_fail
/// use lanevec::{size, SimdVec};
///
/// let n = size::<SimdVec<f32, 3>>();
/// ```
#[inline]
pub const fn size<V: VecType>() -> usize {
    V::LANES
}

/// Lane count of a vector value.
#[inline]
pub const fn size_of_vec<V: VecType>(_: &V) -> usize {
    V::LANES
}

impl<T: Scalar, const N: usize> SimdVec<T, N> {
    const LANES_OK: () = assert!(N.is_power_of_two(), "lane count must be a non-zero power of two");

    /// Number of lanes.
    pub const LANES: usize = {
        let () = Self::LANES_OK;
        N
    };

    /// Vector from lane values.
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        let () = Self::LANES_OK;
        Self { data }
    }

    /// All lanes zero.
    #[inline]
    pub fn zeros() -> Self {
        Self::new([T::zero(); N])
    }

    /// All lanes equal to `x`.
    #[inline]
    pub fn splat(x: T) -> Self {
        Self::new([x; N])
    }

    /// Lane `i` holds `i`.
    #[inline]
    pub fn iota() -> Self
    where
        usize: AsPrimitive<T>,
    {
        Self::new(core::array::from_fn(|i| i.as_()))
    }

    /// Copy the first `N` elements of `src`.
    ///
    /// # Panics
    ///
    /// If `src.len() < N`.
    #[inline]
    pub fn load(src: &[T]) -> Self {
        let mut data = [T::zero(); N];
        data.copy_from_slice(&src[..N]);
        Self::new(data)
    }

    /// Copy the lanes into the first `N` elements of `dst`.
    ///
    /// # Panics
    ///
    /// If `dst.len() < N`.
    #[inline]
    pub fn store(&self, dst: &mut [T]) {
        dst[..N].copy_from_slice(&self.data);
    }

    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Apply `f` to every lane.
    #[inline]
    pub fn map<U: Scalar>(self, f: impl FnMut(T) -> U) -> SimdVec<U, N> {
        SimdVec::new(self.data.map(f))
    }

    /// Per-lane `as` conversion to another element type.
    #[inline]
    pub fn convert<U: Scalar>(self) -> SimdVec<U, N>
    where
        T: AsPrimitive<U>,
    {
        SimdVec::new(self.data.map(|x| x.as_()))
    }

    /// Lane-wise `if a < b { a } else { b }`.
    #[inline]
    pub fn min(self, rhs: Self) -> Self {
        Self::new(simd::binary(BinOp::Min, &self.data, &rhs.data))
    }

    /// Lane-wise `if a > b { a } else { b }`.
    #[inline]
    pub fn max(self, rhs: Self) -> Self {
        Self::new(simd::binary(BinOp::Max, &self.data, &rhs.data))
    }

    /// `a` where `mask` is true, `b` elsewhere.
    #[inline]
    pub fn select(mask: MaskVec<T, N>, a: Self, b: Self) -> Self {
        Self::new(simd::select(&mask.data, &a.data, &b.data))
    }

    /// Smallest lane, folding left with the same rule as [`SimdVec::min`].
    #[inline]
    pub fn reduce_min(&self) -> T {
        self.data[1..].iter().fold(self.data[0], |m, &x| if x < m { x } else { m })
    }

    /// Largest lane, folding left with the same rule as [`SimdVec::max`].
    #[inline]
    pub fn reduce_max(&self) -> T {
        self.data[1..].iter().fold(self.data[0], |m, &x| if x > m { x } else { m })
    }

    /// Lane sum (wrapping for integers).
    #[inline]
    pub fn reduce_sum(&self) -> T {
        self.data.iter().fold(T::zero(), |s, &x| s.lane_add(x))
    }
}

impl<T: Scalar, const N: usize> Default for SimdVec<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for SimdVec<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T: Scalar, const N: usize> From<SimdVec<T, N>> for [T; N] {
    fn from(v: SimdVec<T, N>) -> Self {
        v.data
    }
}

impl<T, const N: usize> Index<usize> for SimdVec<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for SimdVec<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a SimdVec<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for SimdVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}
