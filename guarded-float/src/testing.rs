//! Sample values shared by tests.

use std::vec::Vec;

use rand::{Rng as _, SeedableRng as _};
use rand_xoshiro::Xoshiro256Plus;

const RANDOM_SAMPLES_PER_RANGE: usize = 5;

macro_rules! float_samples {
    ($name:ident, $t:ident, $seed:literal) => {
        /// Hand-picked interesting values, including NaN, followed by random values
        /// within, below and above `[-1, 1]`.
        pub(crate) fn $name() -> impl Iterator<Item = $t> + Clone {
            use core::$t::consts::{E, PI};

            let mut values: Vec<$t> = std::vec![
                1.0,
                0.5,
                0.0,
                -0.0,
                -0.5,
                -1.0,
                E * 2.0,
                E,
                E / 2.0,
                -E * 2.0,
                -E,
                -E / 2.0,
                PI * 2.0,
                PI,
                PI / 2.0,
                -PI * 2.0,
                -PI,
                -PI / 2.0,
                $t::EPSILON,
                -$t::EPSILON,
                $t::from_bits(1),
                -$t::from_bits(1),
                $t::INFINITY,
                $t::NEG_INFINITY,
                $t::NAN,
                -$t::NAN,
            ];
            let mut rng = Xoshiro256Plus::seed_from_u64($seed);
            for range in [-1.0..=0.0, 0.0..=1.0, -100.0..=-1.0, 1.0..=100.0] {
                values.extend(
                    (0..RANDOM_SAMPLES_PER_RANGE).map(|_| rng.random_range(range.clone())),
                );
            }
            values.into_iter()
        }
    };
}

float_samples!(sample_f32, f32, 0x3232);
float_samples!(sample_f64, f64, 0x6464);

/// Hand-picked interesting values followed by random values of either sign.
pub(crate) fn sample_i32() -> impl Iterator<Item = i32> + Clone {
    let mut values: Vec<i32> = std::vec![0, 1, 2, 10, -1, -2, -10, i32::MAX, i32::MIN];
    let mut rng = Xoshiro256Plus::seed_from_u64(0x1);
    for range in [-100..=-1, 1..=100] {
        values.extend((0..RANDOM_SAMPLES_PER_RANGE).map(|_| rng.random_range(range.clone())));
    }
    values.into_iter()
}

/// Returns whether `actual` is within `0.0001` of `expected`, or equal to it
/// (which covers the infinities).
pub(crate) fn close<T: Into<f64>>(actual: T, expected: T) -> bool {
    let (actual, expected) = (actual.into(), expected.into());
    actual == expected || (actual - expected).abs() <= 0.0001
}
