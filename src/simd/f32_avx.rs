//! AVX-accelerated f32 lane kernels for x86_64.
//!
//! AVX provides 256-bit registers → 8×f32 lanes.
//! Only compiled when `target_feature = "avx"` is enabled
//! (e.g. via `-C target-cpu=native` on Sandy Bridge+).

use core::arch::x86_64::*;

use super::{BinOp, CmpOp};

/// Lane-wise arithmetic on 8×f32.
#[inline]
pub fn binary(op: BinOp, a: &[f32; 8], b: &[f32; 8]) -> Option<[f32; 8]> {
    let mut out = [0.0_f32; 8];
    unsafe {
        let va = _mm256_loadu_ps(a.as_ptr());
        let vb = _mm256_loadu_ps(b.as_ptr());
        let r = match op {
            BinOp::Add => _mm256_add_ps(va, vb),
            BinOp::Sub => _mm256_sub_ps(va, vb),
            BinOp::Mul => _mm256_mul_ps(va, vb),
            BinOp::Div => _mm256_div_ps(va, vb),
            BinOp::Min => _mm256_min_ps(va, vb),
            BinOp::Max => _mm256_max_ps(va, vb),
            BinOp::Rem => return None,
        };
        _mm256_storeu_ps(out.as_mut_ptr(), r);
    }
    Some(out)
}

/// Lane-wise comparison on 8×f32. Ordered predicates except `Ne`, which is
/// unordered so NaN lanes compare not-equal.
#[inline]
pub fn compare(op: CmpOp, a: &[f32; 8], b: &[f32; 8]) -> [i32; 8] {
    let mut out = [0_i32; 8];
    unsafe {
        let va = _mm256_loadu_ps(a.as_ptr());
        let vb = _mm256_loadu_ps(b.as_ptr());
        let r = match op {
            CmpOp::Eq => _mm256_cmp_ps::<_CMP_EQ_OQ>(va, vb),
            CmpOp::Ne => _mm256_cmp_ps::<_CMP_NEQ_UQ>(va, vb),
            CmpOp::Lt => _mm256_cmp_ps::<_CMP_LT_OQ>(va, vb),
            CmpOp::Le => _mm256_cmp_ps::<_CMP_LE_OQ>(va, vb),
            CmpOp::Gt => _mm256_cmp_ps::<_CMP_GT_OQ>(va, vb),
            CmpOp::Ge => _mm256_cmp_ps::<_CMP_GE_OQ>(va, vb),
        };
        _mm256_storeu_si256(out.as_mut_ptr() as *mut __m256i, _mm256_castps_si256(r));
    }
    out
}

/// `a` where `mask` is nonzero, `b` elsewhere.
///
/// `blendv` keys on the sign bit only, so the mask is first turned into
/// all-ones-where-zero (AVX1 has no 256-bit integer compare).
#[inline]
pub fn select(mask: &[i32; 8], a: &[f32; 8], b: &[f32; 8]) -> [f32; 8] {
    let zero_lanes = mask.map(|m| if m == 0 { -1_i32 } else { 0 });
    let mut out = [0.0_f32; 8];
    unsafe {
        let z = _mm256_castsi256_ps(_mm256_loadu_si256(zero_lanes.as_ptr() as *const __m256i));
        let va = _mm256_loadu_ps(a.as_ptr());
        let vb = _mm256_loadu_ps(b.as_ptr());
        _mm256_storeu_ps(out.as_mut_ptr(), _mm256_blendv_ps(va, vb, z));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_nan_lanes() {
        let a = [f32::NAN, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let b = [f32::NAN, 1.0, 1.0, 4.0, 4.0, 0.0, 9.0, 7.0];
        assert_eq!(compare(CmpOp::Eq, &a, &b), [0, -1, 0, 0, -1, 0, 0, -1]);
        assert_eq!(compare(CmpOp::Ne, &a, &b), [-1, 0, -1, -1, 0, -1, -1, 0]);
        assert_eq!(compare(CmpOp::Le, &a, &b), [0, -1, 0, -1, -1, 0, -1, -1]);
    }

    #[test]
    fn select_blends() {
        let m = [0, 1, 0, -1, 0, 0, 8, 0];
        let a = [1.0_f32; 8];
        let b = [2.0_f32; 8];
        assert_eq!(select(&m, &a, &b), [2.0, 1.0, 2.0, 1.0, 2.0, 2.0, 1.0, 2.0]);
    }
}
