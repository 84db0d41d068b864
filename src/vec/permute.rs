//! Lane permutations.
//!
//! A permutation is a validated plan: an index per output lane. Plans built
//! with the `const fn` constructors (or the [`vpermute!`](crate::vpermute)
//! and [`vpermute2!`](crate::vpermute2) macros) are checked during constant
//! evaluation, so an out-of-range index is a compile error. `try_new`
//! checks at run time and returns [`PermutationError`].
//!
//! ```
//! use lanevec::{vpermute, vpermute2, SimdVec};
//!
//! let a = SimdVec::new([10, 11, 12, 13]);
//! let b = SimdVec::new([20, 21, 22, 23]);
//! assert_eq!(vpermute!(a; 3, 3, 0, 1).into_array(), [13, 13, 10, 11]);
//! assert_eq!(vpermute2!(a, b; 0, 4, 1, 7).into_array(), [10, 20, 11, 23]);
//! ```

use crate::traits::Scalar;
use crate::vec::SimdVec;

/// Error from the runtime permutation constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermutationError {
    /// `index` at output lane `position` is not below `bound`.
    InvalidPermutationIndex { position: usize, index: usize, bound: usize },
}

impl core::fmt::Display for PermutationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PermutationError::InvalidPermutationIndex { position, index, bound } => write!(
                f,
                "permutation index {index} at lane {position} is out of range (must be < {bound})"
            ),
        }
    }
}

impl core::error::Error for PermutationError {}

const fn check(idx: &[usize], bound: usize) -> Result<(), PermutationError> {
    let mut i = 0;
    while i < idx.len() {
        if idx[i] >= bound {
            return Err(PermutationError::InvalidPermutationIndex {
                position: i,
                index: idx[i],
                bound,
            });
        }
        i += 1;
    }
    Ok(())
}

/// Single-source plan: output lane `i` takes source lane `indices[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permutation<const N: usize> {
    indices: [usize; N],
}

impl<const N: usize> Permutation<N> {
    /// Build a plan, panicking on an index `>= N`. In a `const` context the
    /// panic is a compile error.
    ///
    /// ```compile_fail
    /// use lanevec::Permutation;
    ///
    /// const PLAN: Permutation<2> = Permutation::new([0, 2]);
    /// let p = PLAN;
    /// ```
    pub const fn new(indices: [usize; N]) -> Self {
        if check(&indices, N).is_err() {
            panic!("permutation index out of range");
        }
        Self { indices }
    }

    /// Build a plan, rejecting any index `>= N`.
    pub const fn try_new(indices: [usize; N]) -> Result<Self, PermutationError> {
        match check(&indices, N) {
            Ok(()) => Ok(Self { indices }),
            Err(e) => Err(e),
        }
    }

    /// Lane `i` from lane `i`.
    pub const fn identity() -> Self {
        let mut indices = [0; N];
        let mut i = 0;
        while i < N {
            indices[i] = i;
            i += 1;
        }
        Self { indices }
    }

    /// Lane `i` from lane `N - 1 - i`.
    pub const fn reverse() -> Self {
        let mut indices = [0; N];
        let mut i = 0;
        while i < N {
            indices[i] = N - 1 - i;
            i += 1;
        }
        Self { indices }
    }

    pub const fn indices(&self) -> &[usize; N] {
        &self.indices
    }
}

/// Two-source plan over the concatenation `a ++ b`: indices below `N` read
/// `a`, indices in `[N, 2N)` read `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permutation2<const N: usize> {
    indices: [usize; N],
}

impl<const N: usize> Permutation2<N> {
    /// Build a plan, panicking on an index `>= 2N`.
    pub const fn new(indices: [usize; N]) -> Self {
        if check(&indices, 2 * N).is_err() {
            panic!("permutation index out of range");
        }
        Self { indices }
    }

    /// Build a plan, rejecting any index `>= 2N`.
    pub const fn try_new(indices: [usize; N]) -> Result<Self, PermutationError> {
        match check(&indices, 2 * N) {
            Ok(()) => Ok(Self { indices }),
            Err(e) => Err(e),
        }
    }

    pub const fn indices(&self) -> &[usize; N] {
        &self.indices
    }
}

impl<T: Scalar, const N: usize> SimdVec<T, N> {
    /// Rearrange lanes: output lane `i` is `self[plan[i]]`.
    #[inline]
    pub fn permute(&self, plan: &Permutation<N>) -> Self {
        Self::new(plan.indices.map(|j| self.data[j]))
    }

    /// Pick lanes from `self ++ other`.
    #[inline]
    pub fn permute2(&self, other: &Self, plan: &Permutation2<N>) -> Self {
        Self::new(plan.indices.map(|j| if j < N { self.data[j] } else { other.data[j - N] }))
    }
}

/// Permute one vector with a compile-time-checked plan.
///
/// `vpermute!(v; i0, i1, ..)` yields a vector whose lane `k` is `v[ik]`.
/// The number of indices must equal the lane count of `v`.
///
/// An index past the last lane is rejected at compile time:
///
/// ```compile_fail
/// use lanevec::{vpermute, SimdVec};
///
/// let v = SimdVec::new([1.0_f32, 2.0, 3.0, 4.0]);
/// let r = vpermute!(v; 0, 4, 1, 2);
/// ```
#[macro_export]
macro_rules! vpermute {
    ($src:expr; $($i:expr),+ $(,)?) => {{
        const PLAN: $crate::Permutation<{ [$($i),+].len() }> = $crate::Permutation::new([$($i),+]);
        ($src).permute(&PLAN)
    }};
}

/// Permute two vectors with a compile-time-checked plan over `a ++ b`.
///
/// Indices must be below twice the lane count:
///
/// ```compile_fail
/// use lanevec::{vpermute2, SimdVec};
///
/// let a = SimdVec::new([1_i32, 2, 3, 4]);
/// let b = SimdVec::new([5_i32, 6, 7, 8]);
/// let r = vpermute2!(a, b; 8, 0, 0, 0);
/// ```
#[macro_export]
macro_rules! vpermute2 {
    ($a:expr, $b:expr; $($i:expr),+ $(,)?) => {{
        const PLAN: $crate::Permutation2<{ [$($i),+].len() }> = $crate::Permutation2::new([$($i),+]);
        ($a).permute2(&($b), &PLAN)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_source() {
        let v = SimdVec::new([1.0_f32, 2.0, 3.0, 4.0]);
        assert_eq!(v.permute(&Permutation::reverse()).into_array(), [4.0, 3.0, 2.0, 1.0]);
        assert_eq!(v.permute(&Permutation::identity()), v);
        const BCAST: Permutation<4> = Permutation::new([2, 2, 2, 2]);
        assert_eq!(v.permute(&BCAST).into_array(), [3.0; 4]);
    }

    #[test]
    fn two_source() {
        let a = SimdVec::new([0_u8, 1, 2, 3, 4, 5, 6, 7]);
        let b = SimdVec::new([8_u8, 9, 10, 11, 12, 13, 14, 15]);
        let interleave = Permutation2::new([0, 8, 1, 9, 2, 10, 3, 11]);
        assert_eq!(a.permute2(&b, &interleave).into_array(), [0, 8, 1, 9, 2, 10, 3, 11]);
        let r = crate::vpermute2!(a, b; 15, 14, 13, 12, 3, 2, 1, 0);
        assert_eq!(r.into_array(), [15, 14, 13, 12, 3, 2, 1, 0]);
    }

    #[test]
    fn macro_plan() {
        let v = SimdVec::new([7_i64, 9]);
        assert_eq!(crate::vpermute!(v; 1, 0).into_array(), [9, 7]);
        assert_eq!(crate::vpermute!(v; 0, 0,).into_array(), [7, 7]);
    }

    #[test]
    fn runtime_validation() {
        assert_eq!(
            Permutation::<4>::try_new([0, 1, 4, 2]),
            Err(PermutationError::InvalidPermutationIndex { position: 2, index: 4, bound: 4 })
        );
        assert!(Permutation2::<4>::try_new([7, 0, 3, 4]).is_ok());
        assert_eq!(
            Permutation2::<2>::try_new([1, 4]),
            Err(PermutationError::InvalidPermutationIndex { position: 1, index: 4, bound: 4 })
        );
    }

    #[test]
    #[should_panic(expected = "permutation index out of range")]
    fn runtime_new_panics() {
        let idx = core::hint::black_box([0, 9]);
        let _ = Permutation::<2>::new(idx);
    }

    #[test]
    fn error_message() {
        extern crate alloc;
        use alloc::string::ToString;
        let e = PermutationError::InvalidPermutationIndex { position: 1, index: 8, bound: 4 };
        assert_eq!(e.to_string(), "permutation index 8 at lane 1 is out of range (must be < 4)");
    }
}
