//! Heap arrays with a guaranteed start alignment.
//!
//! The vector argmin kernels want their input on a [`VECTOR_ALIGNMENT`]
//! boundary at the checked entry points, which `Vec<f32>` does not promise.
//! [`AlignedBuffer`] always starts on a [`BUFFER_ALIGNMENT`] (64-byte)
//! boundary, enough for any lane width this crate uses.
//!
//! ```
//! use lanevec::AlignedBuffer;
//! use lanevec::argmin::{try_find_minimum_index, FindMinimumIndex};
//!
//! let distances = [4.0_f32, 2.5, 9.0, 0.75, 3.0];
//! let buf = AlignedBuffer::padded(&distances, 32).unwrap();
//! assert_eq!(buf.len(), 32);
//! let idx = try_find_minimum_index(FindMinimumIndex::VecUpdateIdxOnNewMin, &buf);
//! assert_eq!(idx, Ok(3));
//! ```
//!
//! [`VECTOR_ALIGNMENT`]: crate::argmin::VECTOR_ALIGNMENT

use alloc::alloc::{alloc, dealloc, handle_alloc_error};
use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};

use num_traits::Zero;

use crate::traits::FloatScalar;

/// Start alignment of every [`AlignedBuffer`], in bytes (at least the
/// element's own alignment).
pub const BUFFER_ALIGNMENT: usize = 64;

/// Allocation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// The requested size overflows `isize`.
    InvalidLayout,
    /// The allocator returned null.
    OutOfMemory,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocError::InvalidLayout => write!(f, "requested buffer size is too large"),
            AllocError::OutOfMemory => write!(f, "memory allocation failed"),
        }
    }
}

impl core::error::Error for AllocError {}

/// Owned, fixed-length, 64-byte-aligned array of `T`.
pub struct AlignedBuffer<T: Copy> {
    ptr: NonNull<T>,
    len: usize,
    _marker: PhantomData<T>,
}

// SAFETY: the buffer uniquely owns its elements, like `Box<[T]>`.
unsafe impl<T: Copy + Send> Send for AlignedBuffer<T> {}
// SAFETY: shared access only hands out `&[T]`.
unsafe impl<T: Copy + Sync> Sync for AlignedBuffer<T> {}

impl<T: Copy> AlignedBuffer<T> {
    fn layout(len: usize) -> Result<Layout, AllocError> {
        Layout::array::<T>(len)
            .and_then(|l| l.align_to(BUFFER_ALIGNMENT.max(align_of::<T>())))
            .map_err(|_| AllocError::InvalidLayout)
    }

    /// Allocate room for `len` elements without initializing them.
    fn allocate(len: usize) -> Result<NonNull<T>, AllocError> {
        let layout = Self::layout(len)?;
        if layout.size() == 0 {
            // Never dereferenced; aligned so the start-alignment promise holds
            return NonNull::new(ptr::without_provenance_mut(layout.align()))
                .ok_or(AllocError::InvalidLayout);
        }
        // SAFETY: layout has non-zero size.
        let raw = unsafe { alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(AllocError::OutOfMemory)?;
        log::trace!(
            "allocated {} bytes for {len} elements at {:p} (align {})",
            layout.size(),
            ptr,
            layout.align()
        );
        Ok(ptr)
    }

    /// `len` copies of `value`.
    pub fn new(len: usize, value: T) -> Result<Self, AllocError> {
        let ptr = Self::allocate(len)?;
        for i in 0..len {
            // SAFETY: i < len, inside the allocation.
            unsafe { ptr.as_ptr().add(i).write(value) };
        }
        Ok(Self { ptr, len, _marker: PhantomData })
    }

    /// Copy of `src`.
    pub fn from_slice(src: &[T]) -> Result<Self, AllocError> {
        let ptr = Self::allocate(src.len())?;
        // SAFETY: the fresh allocation holds src.len() elements and cannot
        // overlap src.
        unsafe { ptr::copy_nonoverlapping(src.as_ptr(), ptr.as_ptr(), src.len()) };
        Ok(Self { ptr, len: src.len(), _marker: PhantomData })
    }

    /// `len` zeros.
    pub fn zeroed(len: usize) -> Result<Self, AllocError>
    where
        T: Zero,
    {
        Self::new(len, T::zero())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: ptr is valid and initialized for len elements.
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and &mut self guarantees exclusivity.
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: FloatScalar> AlignedBuffer<T> {
    /// Copy `values` into a buffer whose length is rounded up to a multiple
    /// of `width` (at least one group), filling the tail with `+inf` so the
    /// padding never wins an argmin.
    pub fn padded(values: &[T], width: usize) -> Result<Self, AllocError> {
        let width = width.max(1);
        let len = values
            .len()
            .div_ceil(width)
            .max(1)
            .checked_mul(width)
            .ok_or(AllocError::InvalidLayout)?;
        let mut buf = Self::new(len, T::infinity())?;
        buf[..values.len()].copy_from_slice(values);
        Ok(buf)
    }
}

impl<T: Copy> Drop for AlignedBuffer<T> {
    fn drop(&mut self) {
        if let Ok(layout) = Self::layout(self.len) {
            if layout.size() != 0 {
                // SAFETY: allocated in `allocate` with this exact layout.
                unsafe { dealloc(self.ptr.as_ptr().cast(), layout) };
            }
        }
    }
}

impl<T: Copy> Clone for AlignedBuffer<T> {
    fn clone(&self) -> Self {
        Self::from_slice(self).unwrap_or_else(|_| {
            handle_alloc_error(Self::layout(self.len).unwrap_or(Layout::new::<T>()))
        })
    }
}

impl<T: Copy> Deref for AlignedBuffer<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Copy> DerefMut for AlignedBuffer<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for AlignedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Copy + PartialEq> PartialEq for AlignedBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_aligned<T: Copy>(buf: &AlignedBuffer<T>) -> bool {
        buf.as_ptr() as usize % BUFFER_ALIGNMENT == 0
    }

    #[test]
    fn alignment() {
        for len in [1, 3, 16, 17, 1000] {
            assert!(is_aligned(&AlignedBuffer::new(len, 1.0_f32).unwrap()), "len {len}");
            assert!(is_aligned(&AlignedBuffer::<u8>::zeroed(len).unwrap()), "len {len}");
        }
    }

    #[test]
    fn empty_does_not_allocate() {
        let buf = AlignedBuffer::<f64>::zeroed(0).unwrap();
        assert!(buf.is_empty());
        assert!(is_aligned(&buf));
        assert_eq!(buf.as_slice(), &[] as &[f64]);
        let _copy = buf.clone();
    }

    #[test]
    fn contents() {
        let mut buf = AlignedBuffer::from_slice(&[1_i32, 2, 3]).unwrap();
        assert_eq!(&*buf, &[1, 2, 3]);
        buf[1] = 20;
        let copy = buf.clone();
        buf[0] = 10;
        assert_eq!(copy.as_slice(), &[1, 20, 3]);
        assert_eq!(buf.as_slice(), &[10, 20, 3]);
        assert_ne!(copy, buf);
    }

    #[test]
    fn padding() {
        let buf = AlignedBuffer::padded(&[3.0_f32, 1.0, 2.0], 16).unwrap();
        assert_eq!(buf.len(), 16);
        assert_eq!(&buf[..3], &[3.0, 1.0, 2.0]);
        assert!(buf[3..].iter().all(|&x| x == f32::INFINITY));

        assert_eq!(AlignedBuffer::padded(&[0.0_f64; 32], 32).unwrap().len(), 32);
        assert_eq!(AlignedBuffer::padded(&[0.0_f64; 33], 32).unwrap().len(), 64);
        assert_eq!(AlignedBuffer::<f32>::padded(&[], 16).unwrap().len(), 16);
    }

    #[test]
    fn oversized_layout_is_rejected() {
        assert_eq!(
            AlignedBuffer::<u64>::new(usize::MAX / 4, 0).unwrap_err(),
            AllocError::InvalidLayout
        );
    }

    #[test]
    fn debug_format() {
        extern crate alloc;
        use alloc::format;
        let buf = AlignedBuffer::from_slice(&[1_u8, 2]).unwrap();
        assert_eq!(format!("{buf:?}"), "[1, 2]");
    }
}
