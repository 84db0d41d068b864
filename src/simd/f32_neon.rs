//! NEON-accelerated f32 lane kernels for aarch64.
//!
//! NEON provides 128-bit registers → 4×f32 lanes.

use core::arch::aarch64::*;

use super::{BinOp, CmpOp};

/// Lane-wise arithmetic on 4×f32.
///
/// `fmin`/`fmax` differ from the x86 operand-order rule on NaN and signed
/// zero, so min/max are built from a compare and a bit select instead.
#[inline]
pub fn binary(op: BinOp, a: &[f32; 4], b: &[f32; 4]) -> Option<[f32; 4]> {
    let mut out = [0.0_f32; 4];
    unsafe {
        let va = vld1q_f32(a.as_ptr());
        let vb = vld1q_f32(b.as_ptr());
        let r = match op {
            BinOp::Add => vaddq_f32(va, vb),
            BinOp::Sub => vsubq_f32(va, vb),
            BinOp::Mul => vmulq_f32(va, vb),
            BinOp::Div => vdivq_f32(va, vb),
            BinOp::Min => vbslq_f32(vcltq_f32(va, vb), va, vb),
            BinOp::Max => vbslq_f32(vcgtq_f32(va, vb), va, vb),
            BinOp::Rem => return None,
        };
        vst1q_f32(out.as_mut_ptr(), r);
    }
    Some(out)
}

/// Lane-wise comparison on 4×f32, all-ones for true.
#[inline]
pub fn compare(op: CmpOp, a: &[f32; 4], b: &[f32; 4]) -> [i32; 4] {
    let mut out = [0_i32; 4];
    unsafe {
        let va = vld1q_f32(a.as_ptr());
        let vb = vld1q_f32(b.as_ptr());
        let r = match op {
            CmpOp::Eq => vceqq_f32(va, vb),
            CmpOp::Ne => vmvnq_u32(vceqq_f32(va, vb)),
            CmpOp::Lt => vcltq_f32(va, vb),
            CmpOp::Le => vcleq_f32(va, vb),
            CmpOp::Gt => vcgtq_f32(va, vb),
            CmpOp::Ge => vcgeq_f32(va, vb),
        };
        vst1q_s32(out.as_mut_ptr(), vreinterpretq_s32_u32(r));
    }
    out
}

/// `a` where `mask` is nonzero, `b` elsewhere.
#[inline]
pub fn select(mask: &[i32; 4], a: &[f32; 4], b: &[f32; 4]) -> [f32; 4] {
    let mut out = [0.0_f32; 4];
    unsafe {
        let z = vceqq_s32(vld1q_s32(mask.as_ptr()), vdupq_n_s32(0));
        let r = vbslq_f32(z, vld1q_f32(b.as_ptr()), vld1q_f32(a.as_ptr()));
        vst1q_f32(out.as_mut_ptr(), r);
    }
    out
}
