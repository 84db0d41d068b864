//! Scalar argmin kernels.

use core::cmp::Ordering;

/// Left-to-right scan with a strict `<`, so the first minimum wins.
#[inline]
pub(crate) fn c(data: &[f32]) -> i32 {
    let mut min = data[0];
    let mut idx = 0;
    for (i, &v) in data.iter().enumerate().skip(1) {
        if v < min {
            min = v;
            idx = i;
        }
    }
    idx as i32
}

/// `Iterator::min_by`, which keeps the first of equal elements. Unordered
/// pairs (NaN) compare equal so the result stays in bounds.
#[inline]
pub(crate) fn stl(data: &[f32]) -> i32 {
    data.iter()
        .enumerate()
        .min_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(Ordering::Equal))
        .map_or(0, |(i, _)| i as i32)
}
