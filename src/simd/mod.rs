//! Lane backends with compile-time architecture dispatch.
//!
//! Every lane operation on [`SimdVec`](crate::SimdVec) funnels through the
//! dispatch functions in this module. Two backends implement them:
//!
//! - **native**: architecture intrinsics for the shapes the hardware has
//!   registers for,
//! - **portable**: per-lane loops over [`Scalar`] lane arithmetic.
//!
//! ## Dispatch strategy
//!
//! TypeId-based dispatch at monomorphization time: the `(T, N)` test is a
//! constant, so the compiler keeps exactly one branch and
//! dead-code-eliminates the rest. There is no runtime feature detection.
//!
//! ## Native coverage
//!
//! | Arch      | ISA   | Shapes                                   |
//! |-----------|-------|------------------------------------------|
//! | `x86_64`  | SSE2  | `f32 × 4`, `i32 × 4`, `f32 × 8` (halves) |
//! | `x86_64`  | AVX   | `f32 × 8`                                |
//! | `aarch64` | NEON  | `f32 × 4`, `i32 × 4`, `f32 × 8` (halves) |
//! | other     | none  | everything portable                      |
//!
//! Enable AVX via `-C target-feature=+avx` or `-C target-cpu=native`. The
//! `portable` Cargo feature disables the native backend entirely.
//!
//! Both backends agree bit for bit: `min`/`max` follow the operand order of
//! `minps`/`maxps` (`a < b ? a : b`), comparisons return all-ones lanes for
//! true, and select treats any nonzero mask lane as true.

pub mod portable;

#[cfg(all(target_arch = "x86_64", not(feature = "portable")))]
pub(crate) mod f32_sse2;
#[cfg(all(target_arch = "x86_64", not(feature = "portable")))]
pub(crate) mod i32_sse2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx", not(feature = "portable")))]
pub(crate) mod f32_avx;

#[cfg(all(target_arch = "aarch64", not(feature = "portable")))]
pub(crate) mod f32_neon;
#[cfg(all(target_arch = "aarch64", not(feature = "portable")))]
pub(crate) mod i32_neon;

use core::any::TypeId;
use core::fmt;

use crate::traits::Scalar;

/// Which lane backend this build uses for its natively supported shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Architecture intrinsics (SSE2/AVX or NEON).
    Native,
    /// Per-lane loops.
    Portable,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Native => write!(f, "native"),
            Backend::Portable => write!(f, "portable"),
        }
    }
}

/// Whether this build has a native backend at all.
///
/// `Native` only means the native kernels are compiled in: they serve the
/// `f32 × 4`, `f32 × 8` and `i32 × 4` shapes, and every other shape still
/// runs the portable loops. Use [`backend_for`] to ask about one shape.
pub const ACTIVE_BACKEND: Backend = if cfg!(all(
    any(target_arch = "x86_64", target_arch = "aarch64"),
    not(feature = "portable")
)) {
    Backend::Native
} else {
    Backend::Portable
};

/// Backend serving lane operations on `SimdVec<T, N>` in this build.
///
/// Operations without a native instruction (`i32 × 4` multiply on SSE2,
/// integer division, float remainder) fall back to the portable loop even
/// for a `Native` shape.
pub fn backend_for<T: Scalar, const N: usize>() -> Backend {
    let native_shape = (is::<T, f32>() && (N == 4 || N == 8)) || (is::<T, i32>() && N == 4);
    if ACTIVE_BACKEND == Backend::Native && native_shape {
        Backend::Native
    } else {
        Backend::Portable
    }
}

/// Lane-wise binary arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    /// `if a < b { a } else { b }`
    Min,
    /// `if a > b { a } else { b }`
    Max,
}

/// Lane-wise comparison producing a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

#[inline(always)]
#[allow(dead_code)]
fn is<T: 'static, U: 'static>() -> bool {
    TypeId::of::<T>() == TypeId::of::<U>()
}

/// Reinterpret a reference. Caller guarantees `A` and `B` are the same type
/// up to lane naming (checked by [`is`] and the lane count).
#[inline(always)]
#[allow(dead_code)]
unsafe fn view<A, B>(a: &A) -> &B {
    debug_assert_eq!(size_of::<A>(), size_of::<B>());
    unsafe { &*(a as *const A as *const B) }
}

/// Reinterpret a value, same contract as [`view`].
#[inline(always)]
#[allow(dead_code)]
unsafe fn retype<A: Copy, B: Copy>(a: A) -> B {
    debug_assert_eq!(size_of::<A>(), size_of::<B>());
    unsafe { core::mem::transmute_copy(&a) }
}

/// Split an 8-lane arithmetic operation into two 4-lane ones. `None` when
/// the 4-lane kernel has no instruction for it.
#[inline(always)]
#[allow(dead_code)]
fn halves<A: Copy + Default, B: Copy + Default>(
    a: &[A; 8],
    b: &[A; 8],
    mut f: impl FnMut(&[A; 4], &[A; 4]) -> Option<[B; 4]>,
) -> Option<[B; 8]> {
    let lo = f(&[a[0], a[1], a[2], a[3]], &[b[0], b[1], b[2], b[3]])?;
    let hi = f(&[a[4], a[5], a[6], a[7]], &[b[4], b[5], b[6], b[7]])?;
    let mut out = [B::default(); 8];
    out[..4].copy_from_slice(&lo);
    out[4..].copy_from_slice(&hi);
    Some(out)
}

// ── Native kernel selection ─────────────────────────────────────────

#[cfg(all(target_arch = "x86_64", not(feature = "portable")))]
mod native {
    use super::*;

    #[inline(always)]
    pub(super) fn f32x4_binary(op: BinOp, a: &[f32; 4], b: &[f32; 4]) -> Option<[f32; 4]> {
        f32_sse2::binary(op, a, b)
    }
    #[inline(always)]
    pub(super) fn f32x4_compare(op: CmpOp, a: &[f32; 4], b: &[f32; 4]) -> [i32; 4] {
        f32_sse2::compare(op, a, b)
    }
    #[inline(always)]
    pub(super) fn f32x4_select(m: &[i32; 4], a: &[f32; 4], b: &[f32; 4]) -> [f32; 4] {
        f32_sse2::select(m, a, b)
    }

    #[inline(always)]
    pub(super) fn i32x4_binary(op: BinOp, a: &[i32; 4], b: &[i32; 4]) -> Option<[i32; 4]> {
        i32_sse2::binary(op, a, b)
    }
    #[inline(always)]
    pub(super) fn i32x4_compare(op: CmpOp, a: &[i32; 4], b: &[i32; 4]) -> [i32; 4] {
        i32_sse2::compare(op, a, b)
    }
    #[inline(always)]
    pub(super) fn i32x4_select(m: &[i32; 4], a: &[i32; 4], b: &[i32; 4]) -> [i32; 4] {
        i32_sse2::select(m, a, b)
    }

    #[cfg(target_feature = "avx")]
    #[inline(always)]
    pub(super) fn f32x8_binary(op: BinOp, a: &[f32; 8], b: &[f32; 8]) -> Option<[f32; 8]> {
        f32_avx::binary(op, a, b)
    }
    #[cfg(target_feature = "avx")]
    #[inline(always)]
    pub(super) fn f32x8_compare(op: CmpOp, a: &[f32; 8], b: &[f32; 8]) -> [i32; 8] {
        f32_avx::compare(op, a, b)
    }
    #[cfg(target_feature = "avx")]
    #[inline(always)]
    pub(super) fn f32x8_select(m: &[i32; 8], a: &[f32; 8], b: &[f32; 8]) -> [f32; 8] {
        f32_avx::select(m, a, b)
    }

    #[cfg(not(target_feature = "avx"))]
    #[inline(always)]
    pub(super) fn f32x8_binary(op: BinOp, a: &[f32; 8], b: &[f32; 8]) -> Option<[f32; 8]> {
        halves(a, b, |x, y| f32_sse2::binary(op, x, y))
    }
    #[cfg(not(target_feature = "avx"))]
    #[inline(always)]
    pub(super) fn f32x8_compare(op: CmpOp, a: &[f32; 8], b: &[f32; 8]) -> [i32; 8] {
        let lo = f32_sse2::compare(op, &[a[0], a[1], a[2], a[3]], &[b[0], b[1], b[2], b[3]]);
        let hi = f32_sse2::compare(op, &[a[4], a[5], a[6], a[7]], &[b[4], b[5], b[6], b[7]]);
        [lo[0], lo[1], lo[2], lo[3], hi[0], hi[1], hi[2], hi[3]]
    }
    #[cfg(not(target_feature = "avx"))]
    #[inline(always)]
    pub(super) fn f32x8_select(m: &[i32; 8], a: &[f32; 8], b: &[f32; 8]) -> [f32; 8] {
        let lo = f32_sse2::select(&[m[0], m[1], m[2], m[3]], &[a[0], a[1], a[2], a[3]], &[b[0], b[1], b[2], b[3]]);
        let hi = f32_sse2::select(&[m[4], m[5], m[6], m[7]], &[a[4], a[5], a[6], a[7]], &[b[4], b[5], b[6], b[7]]);
        [lo[0], lo[1], lo[2], lo[3], hi[0], hi[1], hi[2], hi[3]]
    }
}

#[cfg(all(target_arch = "aarch64", not(feature = "portable")))]
mod native {
    use super::*;

    #[inline(always)]
    pub(super) fn f32x4_binary(op: BinOp, a: &[f32; 4], b: &[f32; 4]) -> Option<[f32; 4]> {
        f32_neon::binary(op, a, b)
    }
    #[inline(always)]
    pub(super) fn f32x4_compare(op: CmpOp, a: &[f32; 4], b: &[f32; 4]) -> [i32; 4] {
        f32_neon::compare(op, a, b)
    }
    #[inline(always)]
    pub(super) fn f32x4_select(m: &[i32; 4], a: &[f32; 4], b: &[f32; 4]) -> [f32; 4] {
        f32_neon::select(m, a, b)
    }

    #[inline(always)]
    pub(super) fn i32x4_binary(op: BinOp, a: &[i32; 4], b: &[i32; 4]) -> Option<[i32; 4]> {
        i32_neon::binary(op, a, b)
    }
    #[inline(always)]
    pub(super) fn i32x4_compare(op: CmpOp, a: &[i32; 4], b: &[i32; 4]) -> [i32; 4] {
        i32_neon::compare(op, a, b)
    }
    #[inline(always)]
    pub(super) fn i32x4_select(m: &[i32; 4], a: &[i32; 4], b: &[i32; 4]) -> [i32; 4] {
        i32_neon::select(m, a, b)
    }

    #[inline(always)]
    pub(super) fn f32x8_binary(op: BinOp, a: &[f32; 8], b: &[f32; 8]) -> Option<[f32; 8]> {
        halves(a, b, |x, y| f32_neon::binary(op, x, y))
    }
    #[inline(always)]
    pub(super) fn f32x8_compare(op: CmpOp, a: &[f32; 8], b: &[f32; 8]) -> [i32; 8] {
        let lo = f32_neon::compare(op, &[a[0], a[1], a[2], a[3]], &[b[0], b[1], b[2], b[3]]);
        let hi = f32_neon::compare(op, &[a[4], a[5], a[6], a[7]], &[b[4], b[5], b[6], b[7]]);
        [lo[0], lo[1], lo[2], lo[3], hi[0], hi[1], hi[2], hi[3]]
    }
    #[inline(always)]
    pub(super) fn f32x8_select(m: &[i32; 8], a: &[f32; 8], b: &[f32; 8]) -> [f32; 8] {
        let lo = f32_neon::select(&[m[0], m[1], m[2], m[3]], &[a[0], a[1], a[2], a[3]], &[b[0], b[1], b[2], b[3]]);
        let hi = f32_neon::select(&[m[4], m[5], m[6], m[7]], &[a[4], a[5], a[6], a[7]], &[b[4], b[5], b[6], b[7]]);
        [lo[0], lo[1], lo[2], lo[3], hi[0], hi[1], hi[2], hi[3]]
    }
}

// ── Dispatch ────────────────────────────────────────────────────────

/// Dispatch a lane-wise binary operation to native kernels or the portable
/// fallback.
#[inline]
pub(crate) fn binary<T: Scalar, const N: usize>(op: BinOp, a: &[T; N], b: &[T; N]) -> [T; N] {
    #[cfg(all(any(target_arch = "x86_64", target_arch = "aarch64"), not(feature = "portable")))]
    {
        if is::<T, f32>() && N == 4 {
            let r = native::f32x4_binary(op, unsafe { view(a) }, unsafe { view(b) });
            if let Some(r) = r {
                return unsafe { retype(r) };
            }
        } else if is::<T, f32>() && N == 8 {
            let r = native::f32x8_binary(op, unsafe { view(a) }, unsafe { view(b) });
            if let Some(r) = r {
                return unsafe { retype(r) };
            }
        } else if is::<T, i32>() && N == 4 {
            let r = native::i32x4_binary(op, unsafe { view(a) }, unsafe { view(b) });
            if let Some(r) = r {
                return unsafe { retype(r) };
            }
        }
    }
    portable::binary(op, a, b)
}

/// Dispatch a lane-wise comparison. True lanes are `T::Mask::TRUE`.
#[inline]
pub(crate) fn compare<T: Scalar, const N: usize>(
    op: CmpOp,
    a: &[T; N],
    b: &[T; N],
) -> [T::Mask; N] {
    #[cfg(all(any(target_arch = "x86_64", target_arch = "aarch64"), not(feature = "portable")))]
    {
        // f32 and i32 both mask with i32 lanes
        if is::<T, f32>() && N == 4 {
            let r = native::f32x4_compare(op, unsafe { view(a) }, unsafe { view(b) });
            return unsafe { retype(r) };
        }
        if is::<T, f32>() && N == 8 {
            let r = native::f32x8_compare(op, unsafe { view(a) }, unsafe { view(b) });
            return unsafe { retype(r) };
        }
        if is::<T, i32>() && N == 4 {
            let r = native::i32x4_compare(op, unsafe { view(a) }, unsafe { view(b) });
            return unsafe { retype(r) };
        }
    }
    portable::compare(op, a, b)
}

/// Dispatch a lane select: `a` where the mask lane is nonzero, `b` elsewhere.
#[inline]
pub(crate) fn select<T: Scalar, const N: usize>(
    mask: &[T::Mask; N],
    a: &[T; N],
    b: &[T; N],
) -> [T; N] {
    #[cfg(all(any(target_arch = "x86_64", target_arch = "aarch64"), not(feature = "portable")))]
    {
        if is::<T, f32>() && N == 4 {
            let r = native::f32x4_select(unsafe { view(mask) }, unsafe { view(a) }, unsafe { view(b) });
            return unsafe { retype(r) };
        }
        if is::<T, f32>() && N == 8 {
            let r = native::f32x8_select(unsafe { view(mask) }, unsafe { view(a) }, unsafe { view(b) });
            return unsafe { retype(r) };
        }
        if is::<T, i32>() && N == 4 {
            let r = native::i32x4_select(unsafe { view(mask) }, unsafe { view(a) }, unsafe { view(b) });
            return unsafe { retype(r) };
        }
    }
    portable::select(mask, a, b)
}
