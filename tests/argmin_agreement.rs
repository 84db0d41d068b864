//! Every argmin kernel returns the same index on the same buffer.

use lanevec::AlignedBuffer;
use lanevec::argmin::{
    ArgMinError, FindMinimumIndex, IndexOfMinimum, find_minimum_index, index_of_minimum,
    try_find_minimum_index, try_index_of_minimum,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LEN: usize = 4096;

fn random_distances(seed: u64, len: usize) -> AlignedBuffer<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let values: Vec<f32> = (0..len).map(|_| rng.gen_range(0.001_f32..5.0)).collect();
    AlignedBuffer::from_slice(&values).unwrap()
}

fn every_kernel(data: &[f32]) -> Vec<(String, i32)> {
    let mut out: Vec<(String, i32)> = FindMinimumIndex::ALL
        .iter()
        .map(|&k| (k.to_string(), try_find_minimum_index(k, data).unwrap()))
        .collect();
    out.extend(
        IndexOfMinimum::ALL
            .iter()
            .map(|&k| (format!("legacy {k}"), try_index_of_minimum(k, data).unwrap())),
    );
    out
}

#[test]
fn planted_zeros_resolve_to_first() {
    let mut data = random_distances(0x5EED, LEN);
    for i in [17, 36, 40, 1024] {
        data[i] = 0.0;
    }
    for (name, idx) in every_kernel(&data) {
        assert_eq!(idx, 17, "{name}");
    }
}

#[test]
fn random_buffers_agree() {
    for seed in 0..20 {
        let data = random_distances(seed, 32 * (1 + seed as usize * 7));
        let expected = find_minimum_index(FindMinimumIndex::C, &data);
        for (name, idx) in every_kernel(&data) {
            assert_eq!(idx, expected, "{name}, seed {seed}");
        }
    }
}

#[test]
fn repeated_calls_are_stable() {
    let data = random_distances(99, LEN);
    let first = every_kernel(&data);
    for _ in 0..3 {
        assert_eq!(every_kernel(&data), first);
    }
}

#[test]
fn one_group_boundary() {
    for width in [16, 32] {
        let mut data = random_distances(width as u64, width);
        data[0] = 0.0;
        for k in FindMinimumIndex::ALL.into_iter().filter(|k| width % k.width() == 0) {
            assert_eq!(find_minimum_index(k, &data), 0, "{k} width {width}");
        }
        for k in IndexOfMinimum::ALL.into_iter().filter(|k| width % k.width() == 0) {
            assert_eq!(index_of_minimum(k, &data), 0, "{k} width {width}");
        }
    }
}

#[test]
fn padded_input_never_selects_padding() {
    let values = [7.0_f32, 6.0, 9.0, 6.0, 8.0];
    let data = AlignedBuffer::padded(&values, 32).unwrap();
    for (name, idx) in every_kernel(&data) {
        assert_eq!(idx, 1, "{name}");
    }
}

#[test]
fn checked_entry_rejects_contract_violations() {
    let data = random_distances(7, 64);
    assert_eq!(
        try_find_minimum_index(FindMinimumIndex::VecMinThenIdx, &data[..40]),
        Err(ArgMinError::InvalidInputLength { len: 40, width: 16 })
    );
    assert_eq!(
        try_find_minimum_index(FindMinimumIndex::VecMinThenIdx, &data[2..34]),
        Err(ArgMinError::MisalignedBuffer { align: 16 })
    );
    assert_eq!(
        try_find_minimum_index(FindMinimumIndex::VecAlwaysTrackIdx, &data[..0]),
        Err(ArgMinError::EmptyInput)
    );
}
