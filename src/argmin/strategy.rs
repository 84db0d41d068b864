//! Zero-sized kernel markers for [`find_minimum_index_with`](super::find_minimum_index_with).

use super::{legacy, scalar, vector};

/// An argmin kernel selected by type.
pub trait ArgMinStrategy {
    /// Input length must be a multiple of this.
    const WIDTH: usize;
    /// Kernel name, as shown by the selector enums' `Display`.
    const NAME: &'static str;

    /// Index of the first minimum of `data`. Caller upholds the width
    /// contract.
    fn find(data: &[f32]) -> i32;
}

macro_rules! strategy {
    ($(#[$doc:meta])* $name:ident, $width:expr, $label:literal, $kernel:path) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl ArgMinStrategy for $name {
            const WIDTH: usize = $width;
            const NAME: &'static str = $label;

            #[inline]
            fn find(data: &[f32]) -> i32 {
                $kernel(data)
            }
        }
    };
}

strategy!(
    /// Strict `<` scan.
    C, 1, "C", scalar::c
);
strategy!(
    /// `Iterator::min_by` scan.
    Stl, 1, "STL", scalar::stl
);
strategy!(
    /// Four streams tracking values and indices.
    VecAlwaysTrackIdx, 16, "VecAlwaysTrackIdx", vector::always_track_idx
);
strategy!(
    /// Group tournament with a rescan of the winning window.
    VecUpdateIdxOnNewMin, 32, "VecUpdateIdxOnNewMin", vector::update_idx_on_new_min
);
strategy!(
    /// Minimum first, then its first position.
    VecMinThenIdx, 16, "VecMinThenIdx", vector::min_then_idx
);
strategy!(
    /// Legacy 8-lane min-then-locate.
    VecUnordered, 16, "VecUnordered", legacy::unordered
);
strategy!(
    /// Legacy single-accumulator blend.
    VecBlend, 16, "VecBlend", legacy::blend
);
