extern crate alloc;

use alloc::string::ToString;
use alloc::vec::Vec;

use proptest::prelude::*;

use super::strategy::{
    C, Stl, VecAlwaysTrackIdx, VecBlend, VecMinThenIdx, VecUnordered, VecUpdateIdxOnNewMin,
};
use super::*;

#[repr(C, align(64))]
struct Aligned<const N: usize>([f32; N]);

fn reference(data: &[f32]) -> i32 {
    let min = data.iter().copied().fold(f32::INFINITY, f32::min);
    data.iter().position(|&x| x == min).unwrap_or(0) as i32
}

fn all_kernels(data: &[f32]) -> Vec<(&'static str, i32)> {
    let mut out = Vec::new();
    for k in FindMinimumIndex::ALL {
        if data.len() % k.width() == 0 {
            out.push((k.name(), find_minimum_index(k, data)));
        }
    }
    for k in IndexOfMinimum::ALL {
        if data.len() % k.width() == 0 {
            out.push((k.name(), index_of_minimum(k, data)));
        }
    }
    out
}

fn assert_all(data: &[f32], expected: i32) {
    for (name, got) in all_kernels(data) {
        assert_eq!(got, expected, "{name}");
    }
}

// ── Widths and names ────────────────────────────────────────────────

#[test]
fn widths() {
    assert_eq!(FindMinimumIndex::C.width(), 1);
    assert_eq!(FindMinimumIndex::Stl.width(), 1);
    assert_eq!(FindMinimumIndex::VecAlwaysTrackIdx.width(), 16);
    assert_eq!(FindMinimumIndex::VecUpdateIdxOnNewMin.width(), 32);
    assert_eq!(FindMinimumIndex::VecMinThenIdx.width(), 16);
    assert_eq!(IndexOfMinimum::VecUnordered.width(), 16);
    assert_eq!(IndexOfMinimum::VecBlend.width(), 16);
    assert_eq!(<VecUpdateIdxOnNewMin as ArgMinStrategy>::WIDTH, 32);
}

#[test]
fn display_names() {
    assert_eq!(FindMinimumIndex::Stl.to_string(), "STL");
    assert_eq!(FindMinimumIndex::VecMinThenIdx.to_string(), "VecMinThenIdx");
    assert_eq!(IndexOfMinimum::VecBlend.to_string(), "VecBlend");
}

// ── Boundaries and ties ─────────────────────────────────────────────

#[test]
fn minimum_at_zero() {
    let mut data = [1.0_f32; 64];
    data[0] = 0.5;
    assert_all(&data, 0);
    assert_all(&data[..32], 0);
    assert_all(&data[..16], 0);
}

#[test]
fn minimum_at_last() {
    let mut data: Vec<f32> = (0..96).map(|i| 100.0 - i as f32 * 0.5).collect();
    data[95] = -7.0;
    assert_all(&data, 95);
}

#[test]
fn duplicate_minimum_takes_smallest_index() {
    // Every stream and lane position of the vector kernels
    for first in 0..64 {
        for second in [first + 1, first + 5, first + 16, first + 33] {
            if second >= 96 {
                continue;
            }
            let mut data = [2.0_f32; 96];
            data[first] = -1.0;
            data[second] = -1.0;
            assert_all(&data, first as i32);
        }
    }
}

#[test]
fn signed_zero_ties() {
    let mut data = [1.0_f32; 32];
    data[7] = 0.0;
    data[3] = -0.0;
    assert_all(&data, 3);
}

#[test]
fn infinities() {
    let mut data = [f32::INFINITY; 32];
    assert_all(&data, 0);
    data[30] = f32::NEG_INFINITY;
    data[31] = f32::NEG_INFINITY;
    assert_all(&data, 30);
}

#[test]
fn nan_gives_in_bounds_index() {
    let mut data = [3.0_f32; 64];
    data[0] = f32::NAN;
    data[40] = f32::NAN;
    for (name, got) in all_kernels(&data) {
        assert!((0..64).contains(&got), "{name}: {got}");
    }
}

#[test]
fn type_selected_matches_enum() {
    let data: Vec<f32> = (0..128).map(|i| ((i * 37) % 101) as f32).collect();
    let expected = reference(&data);
    assert_eq!(find_minimum_index_with::<C>(&data), expected);
    assert_eq!(find_minimum_index_with::<Stl>(&data), expected);
    assert_eq!(find_minimum_index_with::<VecAlwaysTrackIdx>(&data), expected);
    assert_eq!(find_minimum_index_with::<VecUpdateIdxOnNewMin>(&data), expected);
    assert_eq!(find_minimum_index_with::<VecMinThenIdx>(&data), expected);
    assert_eq!(find_minimum_index_with::<VecUnordered>(&data), expected);
    assert_eq!(find_minimum_index_with::<VecBlend>(&data), expected);
}

// ── Checked entry points ────────────────────────────────────────────

#[test]
fn checked_accepts_valid_buffer() {
    let mut buf = Aligned([5.0_f32; 64]);
    buf.0[45] = 1.0;
    for k in FindMinimumIndex::ALL {
        assert_eq!(try_find_minimum_index(k, &buf.0), Ok(45), "{k}");
    }
    for k in IndexOfMinimum::ALL {
        assert_eq!(try_index_of_minimum(k, &buf.0), Ok(45), "{k}");
    }
}

#[test]
fn checked_rejects_empty() {
    let buf = Aligned([0.0_f32; 0]);
    assert_eq!(
        try_find_minimum_index(FindMinimumIndex::C, &buf.0),
        Err(ArgMinError::EmptyInput)
    );
}

#[test]
fn checked_rejects_bad_length() {
    let buf = Aligned([0.0_f32; 48]);
    assert_eq!(
        try_find_minimum_index(FindMinimumIndex::VecUpdateIdxOnNewMin, &buf.0),
        Err(ArgMinError::InvalidInputLength { len: 48, width: 32 })
    );
    assert_eq!(
        try_index_of_minimum(IndexOfMinimum::VecBlend, &buf.0[..20]),
        Err(ArgMinError::InvalidInputLength { len: 20, width: 16 })
    );
    assert_eq!(try_find_minimum_index(FindMinimumIndex::Stl, &buf.0[..7]), Ok(0));
}

#[test]
fn checked_rejects_misaligned() {
    let buf = Aligned([0.0_f32; 40]);
    let shifted = &buf.0[1..33];
    assert_eq!(
        try_find_minimum_index(FindMinimumIndex::VecAlwaysTrackIdx, shifted),
        Err(ArgMinError::MisalignedBuffer { align: VECTOR_ALIGNMENT })
    );
    // Scalar kernels only need f32 alignment
    assert_eq!(try_find_minimum_index(FindMinimumIndex::C, shifted), Ok(0));
    // Four floats in is 16-byte aligned again
    assert_eq!(try_find_minimum_index(FindMinimumIndex::VecMinThenIdx, &buf.0[4..36]), Ok(0));
}

#[test]
fn error_display() {
    assert_eq!(ArgMinError::EmptyInput.to_string(), "input buffer is empty");
    assert_eq!(
        ArgMinError::InvalidInputLength { len: 20, width: 16 }.to_string(),
        "input length 20 is not a multiple of the kernel width 16"
    );
    assert_eq!(
        ArgMinError::MisalignedBuffer { align: 16 }.to_string(),
        "input buffer is not aligned to 16 bytes"
    );
    assert_eq!(
        ArgMinError::TooLong { len: 1 << 31 }.to_string(),
        "input length 2147483648 exceeds the largest i32 index"
    );
}

// ── Property tests ──────────────────────────────────────────────────

fn groups_of_32(values: impl Strategy<Value = f32> + Clone) -> impl Strategy<Value = Vec<f32>> {
    (1usize..=12).prop_flat_map(move |g| proptest::collection::vec(values.clone(), g * 32))
}

proptest! {
    #[test]
    fn kernels_match_reference(data in groups_of_32(-1.0e6_f32..1.0e6)) {
        let expected = reference(&data);
        for (name, got) in all_kernels(&data) {
            prop_assert_eq!(got, expected, "{}", name);
        }
    }

    #[test]
    fn kernels_match_reference_with_many_ties(
        data in groups_of_32((0u8..4).prop_map(f32::from))
    ) {
        let expected = reference(&data);
        for (name, got) in all_kernels(&data) {
            prop_assert_eq!(got, expected, "{}", name);
        }
    }

    #[test]
    fn repeated_calls_agree(data in groups_of_32(any::<i16>().prop_map(f32::from))) {
        for k in FindMinimumIndex::ALL {
            prop_assert_eq!(find_minimum_index(k, &data), find_minimum_index(k, &data));
        }
    }
}
