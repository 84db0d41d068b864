//! Index of the minimum of a dense `f32` buffer.
//!
//! Several kernels compute the same thing with different scan strategies.
//! All of them return the **smallest index** among the elements equal to the
//! minimum, so they can be swapped freely.
//!
//! | Kernel | Strategy | Width |
//! |--------|----------|-------|
//! | [`FindMinimumIndex::C`] | strict `<` scan | 1 |
//! | [`FindMinimumIndex::Stl`] | `Iterator::min_by` | 1 |
//! | [`FindMinimumIndex::VecAlwaysTrackIdx`] | 4 streams tracking values and indices | 16 |
//! | [`FindMinimumIndex::VecUpdateIdxOnNewMin`] | per-group `min` tournament, rescan the winning window | 32 |
//! | [`FindMinimumIndex::VecMinThenIdx`] | `min` pass, then equality scan | 16 |
//! | [`IndexOfMinimum::VecUnordered`] | 8-lane min-then-locate | 16 |
//! | [`IndexOfMinimum::VecBlend`] | single accumulator, index blend | 16 |
//!
//! The buffer length must be a positive multiple of the kernel width. Pad
//! with `+inf` (see `AlignedBuffer::padded`) to round a length up.
//!
//! # Entry points
//!
//! - [`find_minimum_index`] / [`index_of_minimum`]: enum-selected, contract
//!   checked with `debug_assert!` only.
//! - [`find_minimum_index_with`]: kernel chosen by a zero-sized type from
//!   [`strategy`].
//! - [`try_find_minimum_index`] / [`try_index_of_minimum`]: validate length
//!   and alignment first and return [`ArgMinError`].
//!
//! ```
//! use lanevec::argmin::{find_minimum_index, FindMinimumIndex};
//!
//! let mut data = [3.0_f32; 32];
//! data[20] = -1.0;
//! for kernel in FindMinimumIndex::ALL {
//!     assert_eq!(find_minimum_index(kernel, &data), 20);
//! }
//! ```

mod legacy;
mod scalar;
pub mod strategy;
mod vector;

#[cfg(test)]
mod tests;

use core::fmt;

pub use strategy::ArgMinStrategy;

/// Buffer alignment, in bytes, required by the vector kernels at the checked
/// entry points.
pub const VECTOR_ALIGNMENT: usize = 16;

/// Errors from the checked entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgMinError {
    /// The buffer has no elements.
    EmptyInput,
    /// `len` is not a multiple of the kernel's group width.
    InvalidInputLength { len: usize, width: usize },
    /// The buffer start is not aligned to `align` bytes.
    MisalignedBuffer { align: usize },
    /// `len` does not fit the `i32` index type.
    TooLong { len: usize },
}

impl fmt::Display for ArgMinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgMinError::EmptyInput => write!(f, "input buffer is empty"),
            ArgMinError::InvalidInputLength { len, width } => {
                write!(f, "input length {len} is not a multiple of the kernel width {width}")
            }
            ArgMinError::MisalignedBuffer { align } => {
                write!(f, "input buffer is not aligned to {align} bytes")
            }
            ArgMinError::TooLong { len } => {
                write!(f, "input length {len} exceeds the largest i32 index")
            }
        }
    }
}

impl core::error::Error for ArgMinError {}

/// Kernel selector for the current argmin family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindMinimumIndex {
    C,
    Stl,
    VecAlwaysTrackIdx,
    VecUpdateIdxOnNewMin,
    VecMinThenIdx,
}

impl FindMinimumIndex {
    pub const ALL: [Self; 5] = [
        Self::C,
        Self::Stl,
        Self::VecAlwaysTrackIdx,
        Self::VecUpdateIdxOnNewMin,
        Self::VecMinThenIdx,
    ];

    /// Group width: the input length must be a multiple of this.
    pub const fn width(self) -> usize {
        match self {
            Self::C => strategy::C::WIDTH,
            Self::Stl => strategy::Stl::WIDTH,
            Self::VecAlwaysTrackIdx => strategy::VecAlwaysTrackIdx::WIDTH,
            Self::VecUpdateIdxOnNewMin => strategy::VecUpdateIdxOnNewMin::WIDTH,
            Self::VecMinThenIdx => strategy::VecMinThenIdx::WIDTH,
        }
    }

    /// Buffer alignment the checked entry point requires.
    pub const fn alignment(self) -> usize {
        match self {
            Self::C | Self::Stl => align_of::<f32>(),
            _ => VECTOR_ALIGNMENT,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::C => strategy::C::NAME,
            Self::Stl => strategy::Stl::NAME,
            Self::VecAlwaysTrackIdx => strategy::VecAlwaysTrackIdx::NAME,
            Self::VecUpdateIdxOnNewMin => strategy::VecUpdateIdxOnNewMin::NAME,
            Self::VecMinThenIdx => strategy::VecMinThenIdx::NAME,
        }
    }
}

impl fmt::Display for FindMinimumIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kernel selector for the legacy argmin family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexOfMinimum {
    C,
    Stl,
    VecUnordered,
    VecBlend,
}

impl IndexOfMinimum {
    pub const ALL: [Self; 4] = [Self::C, Self::Stl, Self::VecUnordered, Self::VecBlend];

    pub const fn width(self) -> usize {
        match self {
            Self::C => strategy::C::WIDTH,
            Self::Stl => strategy::Stl::WIDTH,
            Self::VecUnordered => strategy::VecUnordered::WIDTH,
            Self::VecBlend => strategy::VecBlend::WIDTH,
        }
    }

    pub const fn alignment(self) -> usize {
        match self {
            Self::C | Self::Stl => align_of::<f32>(),
            _ => VECTOR_ALIGNMENT,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::C => strategy::C::NAME,
            Self::Stl => strategy::Stl::NAME,
            Self::VecUnordered => strategy::VecUnordered::NAME,
            Self::VecBlend => strategy::VecBlend::NAME,
        }
    }
}

impl fmt::Display for IndexOfMinimum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Contract checks ─────────────────────────────────────────────────

#[inline(always)]
fn debug_check(data: &[f32], width: usize) {
    debug_assert!(!data.is_empty(), "argmin input is empty");
    debug_assert!(
        data.len() % width == 0,
        "argmin input length {} is not a multiple of {width}",
        data.len()
    );
    debug_assert!(data.len() <= i32::MAX as usize, "argmin input too long for i32 indices");
}

/// Validate a buffer for a kernel of the given width and alignment.
pub fn validate(data: &[f32], width: usize, align: usize) -> Result<(), ArgMinError> {
    let len = data.len();
    if len == 0 {
        return Err(ArgMinError::EmptyInput);
    }
    if len > i32::MAX as usize {
        return Err(ArgMinError::TooLong { len });
    }
    if len % width != 0 {
        return Err(ArgMinError::InvalidInputLength { len, width });
    }
    if (data.as_ptr() as usize) % align != 0 {
        return Err(ArgMinError::MisalignedBuffer { align });
    }
    Ok(())
}

// ── Entry points ────────────────────────────────────────────────────

/// Index of the minimum element using the selected kernel.
///
/// `data.len()` must be a positive multiple of `strategy.width()` and fit in
/// `i32`; this is only checked in debug builds. NaN elements give an
/// unspecified in-bounds index.
pub fn find_minimum_index(strategy: FindMinimumIndex, data: &[f32]) -> i32 {
    debug_check(data, strategy.width());
    match strategy {
        FindMinimumIndex::C => scalar::c(data),
        FindMinimumIndex::Stl => scalar::stl(data),
        FindMinimumIndex::VecAlwaysTrackIdx => vector::always_track_idx(data),
        FindMinimumIndex::VecUpdateIdxOnNewMin => vector::update_idx_on_new_min(data),
        FindMinimumIndex::VecMinThenIdx => vector::min_then_idx(data),
    }
}

/// Same as [`find_minimum_index`] with the kernel chosen at compile time.
///
/// ```
/// use lanevec::argmin::{find_minimum_index_with, strategy::VecMinThenIdx};
///
/// let mut data = [1.0_f32; 16];
/// data[3] = 0.0;
/// assert_eq!(find_minimum_index_with::<VecMinThenIdx>(&data), 3);
/// ```
pub fn find_minimum_index_with<S: ArgMinStrategy>(data: &[f32]) -> i32 {
    debug_check(data, S::WIDTH);
    S::find(data)
}

/// Index of the minimum element using a legacy kernel. Same contract as
/// [`find_minimum_index`].
pub fn index_of_minimum(strategy: IndexOfMinimum, data: &[f32]) -> i32 {
    debug_check(data, strategy.width());
    match strategy {
        IndexOfMinimum::C => scalar::c(data),
        IndexOfMinimum::Stl => scalar::stl(data),
        IndexOfMinimum::VecUnordered => legacy::unordered(data),
        IndexOfMinimum::VecBlend => legacy::blend(data),
    }
}

/// Checked [`find_minimum_index`]: rejects empty, mis-sized, misaligned and
/// oversized buffers instead of relying on the caller.
pub fn try_find_minimum_index(strategy: FindMinimumIndex, data: &[f32]) -> Result<i32, ArgMinError> {
    validate(data, strategy.width(), strategy.alignment())
        .inspect_err(|e| log::debug!("{strategy}: rejected input: {e}"))?;
    Ok(find_minimum_index(strategy, data))
}

/// Checked [`index_of_minimum`].
pub fn try_index_of_minimum(strategy: IndexOfMinimum, data: &[f32]) -> Result<i32, ArgMinError> {
    validate(data, strategy.width(), strategy.alignment())
        .inspect_err(|e| log::debug!("{strategy}: rejected input: {e}"))?;
    Ok(index_of_minimum(strategy, data))
}
