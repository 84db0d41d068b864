//! Vector argmin kernels over 4-lane `f32` accumulators.
//!
//! The input length is a multiple of the kernel's group width (16 or 32);
//! the dispatch layer guarantees it. Loads are unaligned copies, so the
//! kernels are correct for any buffer alignment.

use crate::vec::SimdVec;

pub(crate) type F4 = SimdVec<f32, 4>;
pub(crate) type I4 = SimdVec<i32, 4>;

/// Merge two (value, index) candidate vectors lane by lane: take `b` where
/// its value is smaller, or equal with a smaller index.
#[inline(always)]
pub(crate) fn merge(a: (F4, I4), b: (F4, I4)) -> (F4, I4) {
    let lt = b.0.simd_lt(&a.0);
    let tie = b.0.simd_eq(&a.0) & b.1.simd_lt(&a.1);
    let take = lt | tie;
    (F4::select(take, b.0, a.0), I4::select(take, b.1, a.1))
}

/// Fold the lanes of a candidate vector with the same rule as [`merge`].
#[inline(always)]
pub(crate) fn fold_lanes((min, idx): (F4, I4)) -> i32 {
    let mut best = min[0];
    let mut best_idx = idx[0];
    for lane in 1..4 {
        let (v, i) = (min[lane], idx[lane]);
        if v < best || (v == best && i < best_idx) {
            best = v;
            best_idx = i;
        }
    }
    best_idx
}

/// Bitmask of lanes in `group` equal to `target`, lane `k` of vector `j` at
/// bit `4j + k`.
#[inline(always)]
pub(crate) fn eq_bits(group: &[f32], target: F4) -> u64 {
    let mut bits = 0;
    for (j, quad) in group.chunks_exact(4).enumerate() {
        bits |= F4::load(quad).simd_eq(&target).to_bitmask() << (4 * j);
    }
    bits
}

/// Four interleaved streams per 16-element stride, each tracking its running
/// minimum and the absolute index it came from.
pub(crate) fn always_track_idx(data: &[f32]) -> i32 {
    const STRIDE: usize = 16;

    let mut mins: [F4; 4] = core::array::from_fn(|k| F4::load(&data[4 * k..]));
    let mut idxs: [I4; 4] = core::array::from_fn(|k| I4::iota() + 4 * k as i32);
    let mut cur = idxs;
    let step = I4::splat(STRIDE as i32);

    for group in data.chunks_exact(STRIDE).skip(1) {
        for k in 0..4 {
            cur[k] += step;
            let v = F4::load(&group[4 * k..]);
            let lt = v.simd_lt(&mins[k]);
            idxs[k] = I4::select(lt, cur[k], idxs[k]);
            mins[k] = v.min(mins[k]);
        }
    }

    let lo = merge((mins[0], idxs[0]), (mins[1], idxs[1]));
    let hi = merge((mins[2], idxs[2]), (mins[3], idxs[3]));
    fold_lanes(merge(lo, hi))
}

/// Running scalar minimum, refreshed only when a 32-wide group beats it.
///
/// Each group is reduced with an 8-way `min` tournament. A group whose
/// minimum is strictly below the running one becomes the candidate window;
/// the window is rescanned once at the end for its first matching element.
pub(crate) fn update_idx_on_new_min(data: &[f32]) -> i32 {
    const GROUP: usize = 32;

    let mut best = f32::INFINITY;
    let mut window = 0;

    for (g, group) in data.chunks_exact(GROUP).enumerate() {
        let v: [F4; 8] = core::array::from_fn(|k| F4::load(&group[4 * k..]));
        let m = (v[0].min(v[1]).min(v[2].min(v[3]))).min(v[4].min(v[5]).min(v[6].min(v[7])));
        let group_min = m.reduce_min();
        if group_min < best {
            best = group_min;
            window = g * GROUP;
        }
    }

    let found = data[window..window + GROUP].iter().position(|&x| x == best);
    (window + found.unwrap_or(0)) as i32
}

/// Two passes: a pure `min` tournament for the value, then a 16-wide
/// equality scan for its first position.
pub(crate) fn min_then_idx(data: &[f32]) -> i32 {
    const GROUP: usize = 16;

    let mut acc: [F4; 4] = core::array::from_fn(|k| F4::load(&data[4 * k..]));
    for group in data.chunks_exact(GROUP).skip(1) {
        for (k, a) in acc.iter_mut().enumerate() {
            *a = F4::load(&group[4 * k..]).min(*a);
        }
    }
    let min = acc[0].min(acc[1]).min(acc[2].min(acc[3])).reduce_min();

    let target = F4::splat(min);
    for (g, group) in data.chunks_exact(GROUP).enumerate() {
        let bits = eq_bits(group, target);
        if bits != 0 {
            return (g * GROUP) as i32 + bits.trailing_zeros() as i32;
        }
    }
    // Only reachable when the minimum is NaN.
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_smaller_index_on_tie() {
        let a = (F4::new([1.0, 2.0, 3.0, 4.0]), I4::new([8, 9, 10, 11]));
        let b = (F4::new([1.0, 1.0, 3.0, 5.0]), I4::new([0, 1, 20, 3]));
        let (m, i) = merge(a, b);
        assert_eq!(m.into_array(), [1.0, 1.0, 3.0, 4.0]);
        assert_eq!(i.into_array(), [0, 1, 10, 11]);
    }

    #[test]
    fn fold_lanes_tie_break() {
        let c = (F4::new([2.0, 1.0, 1.0, 3.0]), I4::new([0, 9, 5, 1]));
        assert_eq!(fold_lanes(c), 5);
    }

    #[test]
    fn eq_bits_positions() {
        let mut g = [1.0_f32; 16];
        g[5] = 0.0;
        g[14] = 0.0;
        assert_eq!(eq_bits(&g, F4::splat(0.0)), (1 << 5) | (1 << 14));
    }

    #[test]
    fn single_group() {
        let mut data = [4.0_f32; 32];
        data[19] = -1.0;
        data[27] = -1.0;
        assert_eq!(always_track_idx(&data), 19);
        assert_eq!(update_idx_on_new_min(&data), 19);
        assert_eq!(min_then_idx(&data), 19);
        assert_eq!(always_track_idx(&data[..16]), 0);
        assert_eq!(min_then_idx(&data[..16]), 0);
    }

    #[test]
    fn all_infinite() {
        let data = [f32::INFINITY; 64];
        assert_eq!(always_track_idx(&data), 0);
        assert_eq!(update_idx_on_new_min(&data), 0);
        assert_eq!(min_then_idx(&data), 0);
    }
}
