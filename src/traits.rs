use core::fmt::Debug;
use num_traits::float::FloatCore;
use num_traits::{AsPrimitive, Num, NumCast, One, PrimInt, Zero};

/// Trait for types that can be used as vector lanes.
///
/// Implemented for every primitive integer and float type. Integer lane
/// arithmetic wraps (two's complement), float lane arithmetic is IEEE 754,
/// matching what a hardware vector unit does for the same element type.
pub trait Scalar:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Default
    + Zero
    + One
    + Num
    + NumCast
    + Send
    + Sync
    + 'static
{
    /// Signed integer lane of the same width, used for comparison masks.
    type Mask: MaskScalar;

    /// Lane addition.
    fn lane_add(self, rhs: Self) -> Self;

    /// Lane subtraction.
    fn lane_sub(self, rhs: Self) -> Self;

    /// Lane multiplication.
    fn lane_mul(self, rhs: Self) -> Self;

    /// Lane division. Integer division by zero panics.
    fn lane_div(self, rhs: Self) -> Self;

    /// Lane remainder. Integer remainder by zero panics.
    fn lane_rem(self, rhs: Self) -> Self;

    /// Lane negation.
    fn lane_neg(self) -> Self;

    /// Boolean view of a lane: nonzero is true (NaN counts as nonzero).
    #[inline]
    fn is_nonzero(self) -> bool {
        self != Self::zero()
    }
}

/// Integral lanes: bitwise operators and shifts.
pub trait IntScalar: Scalar + PrimInt {
    /// Width of the lane in bits.
    const BITS: u32;

    /// Shift left by `amount` bits. `amount` must be below [`IntScalar::BITS`].
    fn lane_shl(self, amount: u32) -> Self;

    /// Shift right by `amount` bits (arithmetic for signed lanes).
    fn lane_shr(self, amount: u32) -> Self;

    /// Reinterpret a lane value as a shift amount.
    fn as_shift(self) -> u32;
}

/// Floating-point lanes.
///
/// Built on [`FloatCore`] so it is available without `std` or `libm`.
pub trait FloatScalar: Scalar + FloatCore {}

impl FloatScalar for f32 {}
impl FloatScalar for f64 {}

/// Mask lanes: signed integers whose "true" is all bits set.
///
/// Both lane backends produce [`MaskScalar::TRUE`] for a true comparison,
/// so mask reductions never depend on which backend built the mask.
pub trait MaskScalar: IntScalar {
    /// All bits set (`-1`).
    const TRUE: Self;
    /// All bits clear.
    const FALSE: Self;

    /// Canonical mask lane for a boolean.
    #[inline]
    fn from_bool(b: bool) -> Self {
        if b { Self::TRUE } else { Self::FALSE }
    }
}

macro_rules! impl_scalar_int {
    ($($t:ty => $m:ty),*) => {
        $(
            impl Scalar for $t {
                type Mask = $m;

                #[inline] fn lane_add(self, rhs: $t) -> $t { self.wrapping_add(rhs) }
                #[inline] fn lane_sub(self, rhs: $t) -> $t { self.wrapping_sub(rhs) }
                #[inline] fn lane_mul(self, rhs: $t) -> $t { self.wrapping_mul(rhs) }
                #[inline] fn lane_div(self, rhs: $t) -> $t { self.wrapping_div(rhs) }
                #[inline] fn lane_rem(self, rhs: $t) -> $t { self.wrapping_rem(rhs) }
                #[inline] fn lane_neg(self) -> $t { self.wrapping_neg() }
            }

            impl IntScalar for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn lane_shl(self, amount: u32) -> $t {
                    debug_assert!(amount < Self::BITS, "shift amount {amount} out of range");
                    self.wrapping_shl(amount)
                }

                #[inline]
                fn lane_shr(self, amount: u32) -> $t {
                    debug_assert!(amount < Self::BITS, "shift amount {amount} out of range");
                    self.wrapping_shr(amount)
                }

                #[inline]
                fn as_shift(self) -> u32 {
                    AsPrimitive::<u32>::as_(self)
                }
            }
        )*
    };
}

impl_scalar_int!(
    i8 => i8, i16 => i16, i32 => i32, i64 => i64, isize => isize,
    u8 => i8, u16 => i16, u32 => i32, u64 => i64, usize => isize
);

macro_rules! impl_scalar_float {
    ($($t:ty => $m:ty),*) => {
        $(
            impl Scalar for $t {
                type Mask = $m;

                #[inline] fn lane_add(self, rhs: $t) -> $t { self + rhs }
                #[inline] fn lane_sub(self, rhs: $t) -> $t { self - rhs }
                #[inline] fn lane_mul(self, rhs: $t) -> $t { self * rhs }
                #[inline] fn lane_div(self, rhs: $t) -> $t { self / rhs }
                #[inline] fn lane_rem(self, rhs: $t) -> $t { self % rhs }
                #[inline] fn lane_neg(self) -> $t { -self }
            }
        )*
    };
}

impl_scalar_float!(f32 => i32, f64 => i64);

macro_rules! impl_mask_scalar {
    ($($t:ty),*) => {
        $(
            impl MaskScalar for $t {
                const TRUE: $t = -1;
                const FALSE: $t = 0;
            }
        )*
    };
}

impl_mask_scalar!(i8, i16, i32, i64, isize);
