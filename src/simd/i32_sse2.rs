//! SSE2 i32 lane kernels for x86_64.
//!
//! SSE2 has 4×i32 add/sub and the signed `eq`/`lt`/`gt` compares; min, max
//! and the remaining compares are composed from those. There is no 32-bit
//! lane multiply before SSE4.1, so `Mul` falls back to the portable loop.

use core::arch::x86_64::*;

use super::{BinOp, CmpOp};

#[inline(always)]
unsafe fn blend(m: __m128i, a: __m128i, b: __m128i) -> __m128i {
    // m is all ones or all zeros per lane
    unsafe { _mm_or_si128(_mm_and_si128(m, a), _mm_andnot_si128(m, b)) }
}

/// Lane-wise arithmetic on 4×i32 (wrapping).
#[inline]
pub fn binary(op: BinOp, a: &[i32; 4], b: &[i32; 4]) -> Option<[i32; 4]> {
    let mut out = [0_i32; 4];
    unsafe {
        let va = _mm_loadu_si128(a.as_ptr() as *const __m128i);
        let vb = _mm_loadu_si128(b.as_ptr() as *const __m128i);
        let r = match op {
            BinOp::Add => _mm_add_epi32(va, vb),
            BinOp::Sub => _mm_sub_epi32(va, vb),
            BinOp::Min => blend(_mm_cmplt_epi32(va, vb), va, vb),
            BinOp::Max => blend(_mm_cmpgt_epi32(va, vb), va, vb),
            BinOp::Mul | BinOp::Div | BinOp::Rem => return None,
        };
        _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, r);
    }
    Some(out)
}

/// Lane-wise signed comparison on 4×i32, all-ones for true.
#[inline]
pub fn compare(op: CmpOp, a: &[i32; 4], b: &[i32; 4]) -> [i32; 4] {
    let mut out = [0_i32; 4];
    unsafe {
        let va = _mm_loadu_si128(a.as_ptr() as *const __m128i);
        let vb = _mm_loadu_si128(b.as_ptr() as *const __m128i);
        let ones = _mm_set1_epi32(-1);
        let r = match op {
            CmpOp::Eq => _mm_cmpeq_epi32(va, vb),
            CmpOp::Ne => _mm_xor_si128(_mm_cmpeq_epi32(va, vb), ones),
            CmpOp::Lt => _mm_cmplt_epi32(va, vb),
            CmpOp::Le => _mm_xor_si128(_mm_cmpgt_epi32(va, vb), ones),
            CmpOp::Gt => _mm_cmpgt_epi32(va, vb),
            CmpOp::Ge => _mm_xor_si128(_mm_cmplt_epi32(va, vb), ones),
        };
        _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, r);
    }
    out
}

/// `a` where `mask` is nonzero, `b` elsewhere.
#[inline]
pub fn select(mask: &[i32; 4], a: &[i32; 4], b: &[i32; 4]) -> [i32; 4] {
    let mut out = [0_i32; 4];
    unsafe {
        let m = _mm_loadu_si128(mask.as_ptr() as *const __m128i);
        let z = _mm_cmpeq_epi32(m, _mm_setzero_si128());
        let va = _mm_loadu_si128(a.as_ptr() as *const __m128i);
        let vb = _mm_loadu_si128(b.as_ptr() as *const __m128i);
        _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, blend(z, vb, va));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_signed() {
        let a = [-5, 7, i32::MIN, 0];
        let b = [3, -7, i32::MAX, 0];
        assert_eq!(binary(BinOp::Min, &a, &b), Some([-5, -7, i32::MIN, 0]));
        assert_eq!(binary(BinOp::Max, &a, &b), Some([3, 7, i32::MAX, 0]));
        assert_eq!(binary(BinOp::Mul, &a, &b), None);
    }

    #[test]
    fn composed_compares() {
        let a = [1, 2, 3, 4];
        let b = [1, 3, 2, 4];
        assert_eq!(compare(CmpOp::Ne, &a, &b), [0, -1, -1, 0]);
        assert_eq!(compare(CmpOp::Le, &a, &b), [-1, -1, 0, -1]);
        assert_eq!(compare(CmpOp::Ge, &a, &b), [-1, 0, -1, -1]);
    }
}
