//! Earlier argmin kernels, kept for [`IndexOfMinimum`](super::IndexOfMinimum).

use crate::vec::SimdVec;

use super::vector::{F4, I4, fold_lanes};

type F8 = SimdVec<f32, 8>;

/// Min-then-locate with 8-lane vectors over 16-wide groups.
pub(crate) fn unordered(data: &[f32]) -> i32 {
    const GROUP: usize = 16;

    let mut lo = F8::load(data);
    let mut hi = F8::load(&data[8..]);
    for group in data.chunks_exact(GROUP).skip(1) {
        lo = F8::load(group).min(lo);
        hi = F8::load(&group[8..]).min(hi);
    }
    let min = lo.min(hi).reduce_min();

    let target = F8::splat(min);
    for (g, group) in data.chunks_exact(GROUP).enumerate() {
        let bits = F8::load(group).simd_eq(&target).to_bitmask()
            | F8::load(&group[8..]).simd_eq(&target).to_bitmask() << 8;
        if bits != 0 {
            return (g * GROUP) as i32 + bits.trailing_zeros() as i32;
        }
    }
    0
}

/// One 4-lane accumulator, stepping 4 elements at a time and blending the
/// index vector wherever a lane improves.
pub(crate) fn blend(data: &[f32]) -> i32 {
    let mut min = F4::load(data);
    let mut idx = I4::iota();
    let mut cur = idx;
    let step = I4::splat(4);

    for quad in data.chunks_exact(4).skip(1) {
        cur += step;
        let v = F4::load(quad);
        let lt = v.simd_lt(&min);
        idx = I4::select(lt, cur, idx);
        min = v.min(min);
    }

    fold_lanes((min, idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_kernels_locate_first_minimum() {
        let mut data = [2.0_f32; 48];
        data[41] = 0.5;
        data[9] = 0.5;
        assert_eq!(unordered(&data), 9);
        assert_eq!(blend(&data), 9);
    }

    #[test]
    fn minimum_in_high_half() {
        let mut data = [1.0_f32; 16];
        data[12] = -3.0;
        assert_eq!(unordered(&data), 12);
        assert_eq!(blend(&data), 12);
    }
}
