//! Cross-representation scenarios: every kernel must produce the same
//! numbers no matter which representation holds the data.

use veclab_core::{BufferAccess, ByteOrder};
use veclab_kernels::{
    add_lanes, add_scalar, add_unrolled, sum_lanes_accumulate, sum_lanes_reduce_each, sum_scalar,
    sum_unrolled, unchecked,
};
use veclab_repr::{expected_sum, ArrayBuf, ByteBuf, ReprKind, SegmentBuf};

const SIZE: usize = 1024;

/// Relative tolerance for shapes that sum in a different order.
fn assert_close(actual: f64, expected: f64) {
    let scale = actual.abs().max(expected.abs()).max(1.0);
    assert!(
        (actual - expected).abs() <= 1e-9 * scale,
        "{actual} differs from {expected} beyond tolerance"
    );
}

#[test]
fn add_is_exact_for_every_representation_pair() {
    for out_kind in ReprKind::ALL {
        for in_kind in ReprKind::ALL {
            let input = in_kind.sequential(SIZE);
            let mut output = out_kind.zeroed(SIZE);
            add_scalar(&mut *output, &*input).unwrap();
            for i in 0..SIZE {
                assert_eq!(
                    output.get(i),
                    i as f64,
                    "{}<-{} at {}",
                    out_kind.name(),
                    in_kind.name(),
                    i
                );
            }
        }
    }
}

#[test]
fn unrolled_and_lanes_match_scalar_for_every_pair() {
    for out_kind in ReprKind::ALL {
        for in_kind in ReprKind::ALL {
            let input = in_kind.sequential(SIZE);

            let mut unrolled_out = out_kind.zeroed(SIZE);
            add_unrolled(&mut *unrolled_out, &*input).unwrap();

            let mut lanes_out = out_kind.zeroed(SIZE);
            add_lanes(&mut *lanes_out, &*input).unwrap();

            for i in 0..SIZE {
                assert_eq!(unrolled_out.get(i), i as f64);
                assert_eq!(lanes_out.get(i), i as f64);
            }
        }
    }
}

#[test]
fn all_ones_add_for_every_pair() {
    for out_kind in ReprKind::ALL {
        for in_kind in ReprKind::ALL {
            let mut input = in_kind.zeroed(8);
            for i in 0..8 {
                input.set(i, 1.0);
            }
            let mut output = out_kind.zeroed(8);
            add_scalar(&mut *output, &*input).unwrap();
            for i in 0..8 {
                assert_eq!(output.get(i), 1.0);
            }
        }
    }
}

#[test]
fn segment_output_is_bitwise_identical_to_array_output() {
    let input = ArrayBuf::<f64>::sequential(SIZE);

    let mut array_out = ArrayBuf::<f64>::zeroed(SIZE);
    add_scalar(&mut array_out, &input).unwrap();

    let mut segment_out = SegmentBuf::<f64>::zeroed(SIZE);
    add_scalar(&mut segment_out, &input).unwrap();

    for i in 0..SIZE {
        assert_eq!(
            array_out.get(i).to_bits(),
            segment_out.get(i).to_bits(),
            "bit divergence at {i}"
        );
    }
}

#[test]
fn double_add_matches_single_add_scaled() {
    let input = ArrayBuf::<f64>::sequential(SIZE);

    let mut twice = ArrayBuf::<f64>::zeroed(SIZE);
    add_scalar(&mut twice, &input).unwrap();
    add_scalar(&mut twice, &input).unwrap();

    let mut once = ArrayBuf::<f64>::zeroed(SIZE);
    add_scalar(&mut once, &input).unwrap();

    for i in 0..SIZE {
        assert_close(twice.get(i), 2.0 * once.get(i));
    }
}

#[test]
fn every_sum_shape_matches_the_baseline_on_every_representation() {
    let baseline = sum_scalar(&ArrayBuf::<f64>::sequential(SIZE));
    assert_eq!(baseline, expected_sum::<f64>(SIZE));

    for kind in ReprKind::ALL {
        let input = kind.sequential(SIZE);
        assert_close(sum_scalar(&*input), baseline);
        assert_close(sum_unrolled(&*input).unwrap(), baseline);
        assert_close(sum_lanes_accumulate(&*input).unwrap(), baseline);
        assert_close(sum_lanes_reduce_each(&*input).unwrap(), baseline);
        assert_close(unchecked::sum_scalar(&*input), baseline);
        assert_close(unchecked::sum_unrolled(&*input).unwrap(), baseline);
    }
}

#[test]
fn unchecked_add_matches_checked_for_every_pair() {
    for out_kind in ReprKind::ALL {
        for in_kind in ReprKind::ALL {
            let input = in_kind.sequential(SIZE);

            let mut checked_out = out_kind.zeroed(SIZE);
            add_scalar(&mut *checked_out, &*input).unwrap();

            let mut raw_out = out_kind.zeroed(SIZE);
            unchecked::add_scalar(&mut *raw_out, &*input).unwrap();

            for i in 0..SIZE {
                assert_eq!(checked_out.get(i).to_bits(), raw_out.get(i).to_bits());
            }
        }
    }
}

#[test]
fn big_endian_buffers_produce_the_same_results_as_native() {
    let native_in = ByteBuf::<f64>::sequential(SIZE);
    let big_in = ByteBuf::<f64>::sequential_with_order(SIZE, ByteOrder::Big);

    let mut native_out = ByteBuf::<f64>::zeroed(SIZE);
    add_lanes(&mut native_out, &native_in).unwrap();

    let mut big_out = ByteBuf::<f64>::zeroed_with_order(SIZE, ByteOrder::Big);
    add_lanes(&mut big_out, &big_in).unwrap();

    assert_eq!(native_out.to_elements(), big_out.to_elements());
    assert_close(sum_lanes_accumulate(&big_in).unwrap(), expected_sum::<f64>(SIZE));
}

#[test]
fn mixed_pairs_support_the_lane_shape() {
    // Array output fed from a byte buffer and vice versa.
    let array_in = ArrayBuf::<f64>::sequential(SIZE);
    let bytes_in = ByteBuf::<f64>::sequential(SIZE);

    let mut bytes_out = ByteBuf::<f64>::zeroed(SIZE);
    add_lanes(&mut bytes_out, &array_in).unwrap();

    let mut array_out = ArrayBuf::<f64>::zeroed(SIZE);
    add_lanes(&mut array_out, &bytes_in).unwrap();

    for i in 0..SIZE {
        assert_eq!(bytes_out.get(i), i as f64);
        assert_eq!(array_out.get(i), i as f64);
    }
}
