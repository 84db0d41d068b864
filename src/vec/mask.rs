//! Reductions over mask vectors.
//!
//! Only vectors with [`MaskScalar`] lanes have these methods, so reducing a
//! float vector is a type error rather than a silent bit test.
//!
//! ```
//! use lanevec::SimdVec;
//!
//! let v = SimdVec::new([1.0_f32, 4.0, 2.0, 8.0]);
//! assert!(v.simd_gt(&SimdVec::splat(3.0)).any());
//! ```
//!
//! ```compile_fail
//! use lanevec::SimdVec;
//!
//! let v = SimdVec::new([1.0_f32; 4]);
//! let _ = v.any();
//! ```
//!
//! Unsigned lanes are not masks either:
//!
//! ```compile_fail
//! use lanevec::SimdVec;
//!
//! let _ = SimdVec::new([1_u32; 4]).all();
//! ```

use crate::traits::MaskScalar;
use crate::vec::SimdVec;

impl<M: MaskScalar, const N: usize> SimdVec<M, N> {
    /// Mask from booleans, true lanes all ones.
    #[inline]
    pub fn from_bools(bits: [bool; N]) -> Self {
        Self::new(bits.map(M::from_bool))
    }

    /// At least one lane is nonzero.
    #[inline]
    pub fn any(&self) -> bool {
        self.data.iter().any(|m| m.is_nonzero())
    }

    /// Every lane is zero.
    #[inline]
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Every lane equals the all-ones true sentinel.
    #[inline]
    pub fn all(&self) -> bool {
        self.data.iter().all(|&m| m == M::TRUE)
    }

    /// Index of the lowest nonzero lane.
    #[inline]
    pub fn first_set(&self) -> Option<usize> {
        self.data.iter().position(|m| m.is_nonzero())
    }

    /// Bit `i` set iff lane `i` is nonzero. Lanes past 64 are ignored.
    #[inline]
    pub fn to_bitmask(&self) -> u64 {
        self.data
            .iter()
            .take(64)
            .enumerate()
            .fold(0, |acc, (i, m)| if m.is_nonzero() { acc | (1_u64 << i) } else { acc })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reductions() {
        let none = SimdVec::<i32, 4>::zeros();
        assert!(!none.any());
        assert!(none.none());
        assert!(!none.all());

        let one = SimdVec::new([0_i32, 0, -1, 0]);
        assert!(one.any());
        assert!(!one.none());
        assert!(!one.all());
        assert_eq!(one.first_set(), Some(2));

        let all = SimdVec::<i8, 16>::from_bools([true; 16]);
        assert!(all.any());
        assert!(all.all());
        assert_eq!(all.first_set(), Some(0));
    }

    #[test]
    fn all_requires_true_sentinel() {
        let loose = SimdVec::new([1_i16, -1]);
        assert!(loose.any());
        assert!(!loose.all());
    }

    #[test]
    fn bitmask() {
        let m = SimdVec::<i64, 8>::from_bools([true, false, false, true, false, false, false, true]);
        assert_eq!(m.to_bitmask(), 0b1000_1001);
        assert_eq!(SimdVec::<i32, 1>::zeros().first_set(), None);
    }
}
