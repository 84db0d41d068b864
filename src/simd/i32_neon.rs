//! NEON i32 lane kernels for aarch64.

use core::arch::aarch64::*;

use super::{BinOp, CmpOp};

/// Lane-wise arithmetic on 4×i32 (wrapping). No integer divide in NEON.
#[inline]
pub fn binary(op: BinOp, a: &[i32; 4], b: &[i32; 4]) -> Option<[i32; 4]> {
    let mut out = [0_i32; 4];
    unsafe {
        let va = vld1q_s32(a.as_ptr());
        let vb = vld1q_s32(b.as_ptr());
        let r = match op {
            BinOp::Add => vaddq_s32(va, vb),
            BinOp::Sub => vsubq_s32(va, vb),
            BinOp::Mul => vmulq_s32(va, vb),
            BinOp::Min => vminq_s32(va, vb),
            BinOp::Max => vmaxq_s32(va, vb),
            BinOp::Div | BinOp::Rem => return None,
        };
        vst1q_s32(out.as_mut_ptr(), r);
    }
    Some(out)
}

/// Lane-wise signed comparison on 4×i32, all-ones for true.
#[inline]
pub fn compare(op: CmpOp, a: &[i32; 4], b: &[i32; 4]) -> [i32; 4] {
    let mut out = [0_i32; 4];
    unsafe {
        let va = vld1q_s32(a.as_ptr());
        let vb = vld1q_s32(b.as_ptr());
        let r = match op {
            CmpOp::Eq => vceqq_s32(va, vb),
            CmpOp::Ne => vmvnq_u32(vceqq_s32(va, vb)),
            CmpOp::Lt => vcltq_s32(va, vb),
            CmpOp::Le => vcleq_s32(va, vb),
            CmpOp::Gt => vcgtq_s32(va, vb),
            CmpOp::Ge => vcgeq_s32(va, vb),
        };
        vst1q_s32(out.as_mut_ptr(), vreinterpretq_s32_u32(r));
    }
    out
}

/// `a` where `mask` is nonzero, `b` elsewhere.
#[inline]
pub fn select(mask: &[i32; 4], a: &[i32; 4], b: &[i32; 4]) -> [i32; 4] {
    let mut out = [0_i32; 4];
    unsafe {
        let z = vceqq_s32(vld1q_s32(mask.as_ptr()), vdupq_n_s32(0));
        let r = vbslq_s32(z, vld1q_s32(b.as_ptr()), vld1q_s32(a.as_ptr()));
        vst1q_s32(out.as_mut_ptr(), r);
    }
    out
}
