//! SSE2-accelerated f32 lane kernels for x86_64.
//!
//! SSE2 provides 128-bit registers → 4×f32 lanes.

use core::arch::x86_64::*;

use super::{BinOp, CmpOp};

/// Lane-wise arithmetic on 4×f32. `None` for operations without an SSE2
/// instruction (remainder).
#[inline]
pub fn binary(op: BinOp, a: &[f32; 4], b: &[f32; 4]) -> Option<[f32; 4]> {
    let mut out = [0.0_f32; 4];
    unsafe {
        let va = _mm_loadu_ps(a.as_ptr());
        let vb = _mm_loadu_ps(b.as_ptr());
        let r = match op {
            BinOp::Add => _mm_add_ps(va, vb),
            BinOp::Sub => _mm_sub_ps(va, vb),
            BinOp::Mul => _mm_mul_ps(va, vb),
            BinOp::Div => _mm_div_ps(va, vb),
            // minps/maxps return the second operand unless the first wins
            BinOp::Min => _mm_min_ps(va, vb),
            BinOp::Max => _mm_max_ps(va, vb),
            BinOp::Rem => return None,
        };
        _mm_storeu_ps(out.as_mut_ptr(), r);
    }
    Some(out)
}

/// Lane-wise comparison on 4×f32, all-ones for true.
#[inline]
pub fn compare(op: CmpOp, a: &[f32; 4], b: &[f32; 4]) -> [i32; 4] {
    let mut out = [0_i32; 4];
    unsafe {
        let va = _mm_loadu_ps(a.as_ptr());
        let vb = _mm_loadu_ps(b.as_ptr());
        let r = match op {
            CmpOp::Eq => _mm_cmpeq_ps(va, vb),
            CmpOp::Ne => _mm_cmpneq_ps(va, vb),
            CmpOp::Lt => _mm_cmplt_ps(va, vb),
            CmpOp::Le => _mm_cmple_ps(va, vb),
            CmpOp::Gt => _mm_cmpgt_ps(va, vb),
            CmpOp::Ge => _mm_cmpge_ps(va, vb),
        };
        _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, _mm_castps_si128(r));
    }
    out
}

/// `a` where `mask` is nonzero, `b` elsewhere.
#[inline]
pub fn select(mask: &[i32; 4], a: &[f32; 4], b: &[f32; 4]) -> [f32; 4] {
    let mut out = [0.0_f32; 4];
    unsafe {
        let m = _mm_loadu_si128(mask.as_ptr() as *const __m128i);
        // Normalize: zero lanes become all ones
        let z = _mm_castsi128_ps(_mm_cmpeq_epi32(m, _mm_setzero_si128()));
        let va = _mm_loadu_ps(a.as_ptr());
        let vb = _mm_loadu_ps(b.as_ptr());
        let r = _mm_or_ps(_mm_and_ps(z, vb), _mm_andnot_ps(z, va));
        _mm_storeu_ps(out.as_mut_ptr(), r);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = [1.0_f32, 2.0, 3.0, 4.0];
        let b = [0.5_f32, -2.0, 3.0, 8.0];
        assert_eq!(binary(BinOp::Add, &a, &b), Some([1.5, 0.0, 6.0, 12.0]));
        assert_eq!(binary(BinOp::Div, &a, &b), Some([2.0, -1.0, 1.0, 0.5]));
        assert_eq!(binary(BinOp::Min, &a, &b), Some([0.5, -2.0, 3.0, 4.0]));
        assert_eq!(binary(BinOp::Rem, &a, &b), None);
    }

    #[test]
    fn select_normalizes_mask() {
        let r = select(&[0, 5, 0, -1], &[1.0, 2.0, 3.0, 4.0], &[9.0, 9.0, 9.0, 9.0]);
        assert_eq!(r, [9.0, 2.0, 9.0, 4.0]);
    }
}
