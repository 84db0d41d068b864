//! # lanevec
//!
//! Fixed-width lane vectors with interchangeable native and portable
//! backends, and a family of argmin kernels built on them. `no_std`
//! compatible.
//!
//! ## Quick start
//!
//! ```
//! use lanevec::{SimdVec, vpermute};
//! use lanevec::argmin::{find_minimum_index, FindMinimumIndex};
//!
//! // Lane-wise arithmetic and masks
//! let a = SimdVec::new([1.0_f32, 4.0, 2.0, 8.0]);
//! let b = a * 2.0 - SimdVec::splat(3.0);
//! assert_eq!(b.into_array(), [-1.0, 5.0, 1.0, 13.0]);
//! assert!(b.simd_lt(&a).any());
//! assert_eq!(vpermute!(a; 3, 2, 1, 0).into_array(), [8.0, 2.0, 4.0, 1.0]);
//!
//! // Index of the minimum of a distance buffer
//! let mut distances = [2.0_f32; 64];
//! distances[37] = 0.25;
//! assert_eq!(find_minimum_index(FindMinimumIndex::VecAlwaysTrackIdx, &distances), 37);
//! ```
//!
//! ## Modules
//!
//! - [`vec`]: [`SimdVec<T, N>`] holds `N` lanes of a primitive integer or float,
//!   `N` a power of two checked at compile time. Arithmetic, bitwise, shift
//!   and comparison operators; [`MaskVec`] reductions (`any`/`none`/`all`);
//!   select, min/max, conversion, and permutation plans. The
//!   [`vec::func`] helpers (`vbroadcast`, `vload`, `vselect`, ...) write
//!   into an output vector.
//!
//! - [`simd`]: Lane backends. `f32 × 4`, `f32 × 8` and `i32 × 4` run on
//!   SSE2/AVX (`x86_64`) or NEON (`aarch64`); every other shape, and every
//!   shape with the `portable` feature, runs per-lane loops. Both give
//!   identical results. [`simd::ACTIVE_BACKEND`] reports the choice.
//!
//! - [`argmin`]: Index of the first minimum of an `f32` buffer with scalar
//!   and vector kernels, selected by enum ([`argmin::FindMinimumIndex`],
//!   [`argmin::IndexOfMinimum`]) or by type ([`argmin::strategy`]), with
//!   checked variants returning [`argmin::ArgMinError`].
//!
//! - [`aligned`]: [`AlignedBuffer<T>`], a 64-byte-aligned heap array with
//!   `+inf` padding for argmin inputs (requires `alloc`).
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: every lane type, with wrapping integer arithmetic
//!   - [`IntScalar`]: integral lanes (bitwise ops and shifts)
//!   - [`FloatScalar`]: `f32` / `f64`
//!   - [`MaskScalar`]: signed mask lanes, true is all ones
//!
//! ## Cargo features
//!
//! | Feature    | Default | Description |
//! |------------|---------|-------------|
//! | `std`      | yes     | Implies `alloc` |
//! | `alloc`    | via std | [`AlignedBuffer`] |
//! | `portable` | no      | Use the portable backend even where native kernels exist |
//!
//! Native 8-lane `f32` kernels need AVX at compile time
//! (`-C target-feature=+avx` or `-C target-cpu=native`); without it they
//! run as two 4-lane halves.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod aligned;
pub mod argmin;
pub mod simd;
pub mod traits;
pub mod vec;

#[cfg(feature = "alloc")]
pub use aligned::{AlignedBuffer, AllocError};
pub use argmin::{ArgMinError, FindMinimumIndex, IndexOfMinimum};
pub use simd::{ACTIVE_BACKEND, Backend, backend_for};
pub use traits::{FloatScalar, IntScalar, MaskScalar, Scalar};
pub use vec::func::{
    vall, vany, vbroadcast, vconvert, vload, vmax, vmin, vnone, vpermute, vpermute2, vselect,
    vstore,
};
pub use vec::{MaskVec, Permutation, Permutation2, PermutationError, SimdVec, VecType, size, size_of_vec};
