//! Tests of [`Guarded`] operations against the same computations on plain numbers,
//! for every combination of operand types and many sample values.

use core::cmp::Ordering;

use pretty_assertions::assert_eq;

use crate::testing::{sample_f32, sample_f64, sample_i32};
use crate::{Argument, Guarded, NanError, Operation, Promote, RawNumber, Real, compare};

/// Checks the result of a binary operation with a raw operand against the plain computation.
#[track_caller]
fn check_binary<C: Real + Promote<C>>(
    actual: Result<Guarded<C>, NanError>,
    expected: C,
    raw_is_nan: bool,
    raw_side: Argument,
    operation: Operation,
) {
    if raw_is_nan {
        assert_eq!(actual, Err(NanError::InvalidArgument(raw_side)));
    } else if expected.is_nan() {
        assert_eq!(actual, Err(NanError::Arithmetic(operation)));
    } else {
        match actual {
            Ok(value) => {
                value.consistency_check();
                assert_eq!(value.into_inner(), expected, "{operation}");
            }
            Err(e) => panic!("{operation} unexpectedly failed: {e}; expected {expected:?}"),
        }
    }
}

/// Checks a compound assignment against the binary operation it should be equivalent to.
#[track_caller]
fn check_compound<T: Real, C: Real>(
    before: Guarded<T>,
    after: Guarded<T>,
    status: Result<(), NanError>,
    binary: Result<Guarded<C>, NanError>,
) {
    match binary {
        Ok(value) => {
            assert_eq!(status, Ok(()));
            assert_eq!(after.into_inner(), value.convert::<T>().into_inner());
        }
        Err(e) => {
            assert_eq!(status, Err(e));
            assert_eq!(after.into_inner(), before.into_inner());
        }
    }
}

/// Generates tests of a guarded type combined with a raw type.
macro_rules! raw_pair_tests {
    ($module:ident: Guarded<$repr:ident>, $raw:ident => $common:ident,
     $repr_samples:ident, $raw_samples:ident) => {
        mod $module {
            use super::*;
            use pretty_assertions::assert_eq;

            #[test]
            fn construction() {
                for tv in $repr_samples() {
                    match Guarded::new(tv) {
                        Ok(x) => {
                            assert_eq!(*x, tv);
                            assert_eq!(Guarded::new(x.into_inner()), Ok(x));
                        }
                        Err(e) => {
                            assert!(tv.is_nan());
                            assert_eq!(e, NanError::InvalidArgument(Argument::Construct));
                        }
                    }
                }
            }

            #[test]
            fn assignment() {
                for tv in $repr_samples().filter(|v| !v.is_nan()) {
                    for cv in $raw_samples() {
                        let mut x = Guarded::<$repr>::new(tv).unwrap();
                        let status = x.assign(cv);
                        if cv.is_nan() {
                            assert_eq!(status, Err(NanError::InvalidArgument(Argument::Assign)));
                            assert_eq!(*x, tv);
                        } else {
                            assert_eq!(status, Ok(()));
                            assert_eq!(*x, <$repr as Real>::from_raw(cv));
                        }
                    }
                }
            }

            #[test]
            fn arithmetic() {
                for tv in $repr_samples().filter(|v| !v.is_nan()) {
                    let x = Guarded::<$repr>::new(tv).unwrap();
                    let t = <$common as Real>::from_raw(tv);
                    for cv in $raw_samples() {
                        let c = <$common as Real>::from_raw(cv);
                        let nan = cv.is_nan();

                        check_binary(x + cv, t + c, nan, Argument::Rhs, Operation::Add);
                        check_binary(x - cv, t - c, nan, Argument::Rhs, Operation::Sub);
                        check_binary(x * cv, t * c, nan, Argument::Rhs, Operation::Mul);
                        check_binary(x / cv, t / c, nan, Argument::Rhs, Operation::Div);

                        check_binary(cv + x, c + t, nan, Argument::Lhs, Operation::Add);
                        check_binary(cv - x, c - t, nan, Argument::Lhs, Operation::Sub);
                        check_binary(cv * x, c * t, nan, Argument::Lhs, Operation::Mul);
                        check_binary(cv / x, c / t, nan, Argument::Lhs, Operation::Div);

                        // Commutative operations agree in both operand orders.
                        if !nan {
                            assert_eq!(x + cv, cv + x);
                            assert_eq!(x * cv, cv * x);
                        }
                    }
                }
            }

            #[test]
            fn compound_assignment() {
                for tv in $repr_samples().filter(|v| !v.is_nan()) {
                    let x = Guarded::<$repr>::new(tv).unwrap();
                    for cv in $raw_samples() {
                        let mut y = x;
                        let status = y.try_add_assign(cv);
                        check_compound(x, y, status, x + cv);

                        let mut y = x;
                        let status = y.try_sub_assign(cv);
                        check_compound(x, y, status, x - cv);

                        let mut y = x;
                        let status = y.try_mul_assign(cv);
                        check_compound(x, y, status, x * cv);

                        let mut y = x;
                        let status = y.try_div_assign(cv);
                        check_compound(x, y, status, x / cv);
                    }
                }
            }

            #[test]
            fn comparison() {
                for tv in $repr_samples().filter(|v| !v.is_nan()) {
                    let x = Guarded::<$repr>::new(tv).unwrap();
                    let t = <$common as Real>::from_raw(tv);
                    for cv in $raw_samples() {
                        let c = <$common as Real>::from_raw(cv);
                        if cv.is_nan() {
                            let error = NanError::InvalidArgument(Argument::Compare);
                            assert_eq!(x.try_eq(cv), Err(error));
                            assert_eq!(x.try_ne(cv), Err(error));
                            assert_eq!(x.try_lt(cv), Err(error));
                            assert_eq!(x.try_le(cv), Err(error));
                            assert_eq!(x.try_gt(cv), Err(error));
                            assert_eq!(x.try_ge(cv), Err(error));
                            assert_eq!(compare(cv, x), Err(error));
                        } else {
                            assert_eq!(x.try_eq(cv), Ok(t == c));
                            assert_eq!(x.try_ne(cv), Ok(t != c));
                            assert_eq!(x.try_lt(cv), Ok(t < c));
                            assert_eq!(x.try_le(cv), Ok(t <= c));
                            assert_eq!(x.try_gt(cv), Ok(t > c));
                            assert_eq!(x.try_ge(cv), Ok(t >= c));
                            assert_eq!(compare(cv, x).map(Ordering::reverse), x.try_cmp(cv));
                            assert_eq!(compare(cv, x).ok(), c.partial_cmp(&t));
                        }
                    }
                }
            }
        }
    };
}

raw_pair_tests!(f32_i32: Guarded<f32>, i32 => f32, sample_f32, sample_i32);
raw_pair_tests!(f64_i32: Guarded<f64>, i32 => f64, sample_f64, sample_i32);
raw_pair_tests!(f32_f32: Guarded<f32>, f32 => f32, sample_f32, sample_f32);
raw_pair_tests!(f32_f64: Guarded<f32>, f64 => f64, sample_f32, sample_f64);
raw_pair_tests!(f64_f32: Guarded<f64>, f32 => f64, sample_f64, sample_f32);
raw_pair_tests!(f64_f64: Guarded<f64>, f64 => f64, sample_f64, sample_f64);

/// Generates tests of two guarded types combined with each other.
macro_rules! guarded_pair_tests {
    ($module:ident: Guarded<$lhs:ident>, Guarded<$rhs:ident> => $common:ident,
     $lhs_samples:ident, $rhs_samples:ident) => {
        mod $module {
            use super::*;
            use pretty_assertions::assert_eq;

            #[test]
            fn arithmetic() {
                for lv in $lhs_samples().filter(|v| !v.is_nan()) {
                    for rv in $rhs_samples().filter(|v| !v.is_nan()) {
                        let x = Guarded::<$lhs>::new(lv).unwrap();
                        let y = Guarded::<$rhs>::new(rv).unwrap();
                        let l = <$common as Real>::from_raw(lv);
                        let r = <$common as Real>::from_raw(rv);
                        check_binary(x + y, l + r, false, Argument::Rhs, Operation::Add);
                        check_binary(x - y, l - r, false, Argument::Rhs, Operation::Sub);
                        check_binary(x * y, l * r, false, Argument::Rhs, Operation::Mul);
                        check_binary(x / y, l / r, false, Argument::Rhs, Operation::Div);
                    }
                }
            }

            #[test]
            fn comparison() {
                for lv in $lhs_samples().filter(|v| !v.is_nan()) {
                    for rv in $rhs_samples().filter(|v| !v.is_nan()) {
                        let x = Guarded::<$lhs>::new(lv).unwrap();
                        let y = Guarded::<$rhs>::new(rv).unwrap();
                        let l = <$common as Real>::from_raw(lv);
                        let r = <$common as Real>::from_raw(rv);
                        assert_eq!(x == y, l == r);
                        assert_eq!(x != y, l != r);
                        assert_eq!(x < y, l < r);
                        assert_eq!(x <= y, l <= r);
                        assert_eq!(x > y, l > r);
                        assert_eq!(x >= y, l >= r);
                        assert_eq!(x.partial_cmp(&y), l.partial_cmp(&r));
                        assert_eq!(y.partial_cmp(&x), r.partial_cmp(&l));
                    }
                }
            }

            #[test]
            fn conversion() {
                for lv in $lhs_samples().filter(|v| !v.is_nan()) {
                    let x = Guarded::<$lhs>::new(lv).unwrap();
                    let converted: Guarded<$rhs> = x.convert();
                    converted.consistency_check();
                    assert_eq!(*converted, <$rhs as Real>::from_raw(lv));
                    let mut y = Guarded::<$rhs>::ZERO;
                    y.assign_guarded(x);
                    assert_eq!(y, converted);
                }
            }
        }
    };
}

guarded_pair_tests!(g32_g32: Guarded<f32>, Guarded<f32> => f32, sample_f32, sample_f32);
guarded_pair_tests!(g32_g64: Guarded<f32>, Guarded<f64> => f64, sample_f32, sample_f64);
guarded_pair_tests!(g64_g32: Guarded<f64>, Guarded<f32> => f64, sample_f64, sample_f32);
guarded_pair_tests!(g64_g64: Guarded<f64>, Guarded<f64> => f64, sample_f64, sample_f64);

#[rstest::rstest]
fn undefined_operations_fail_in_both_orders(
    #[values(f32::INFINITY, f32::NEG_INFINITY, 0.0, -0.0)] a: f32,
    #[values(f64::INFINITY, f64::NEG_INFINITY, 0.0, -0.0)] b: f64,
) {
    let (ga, gb) = (Guarded::new(a).unwrap(), Guarded::new(b).unwrap());
    let (wa, wb) = (f64::from(a), b);
    for (guarded_result, raw_result, reversed_result, plain, operation) in [
        (ga + gb, ga + b, a + gb, wa + wb, Operation::Add),
        (ga - gb, ga - b, a - gb, wa - wb, Operation::Sub),
        (ga * gb, ga * b, a * gb, wa * wb, Operation::Mul),
        (ga / gb, ga / b, a / gb, wa / wb, Operation::Div),
    ] {
        if plain.is_nan() {
            let expected: Result<Guarded<f64>, _> = Err(NanError::Arithmetic(operation));
            assert_eq!(guarded_result, expected);
            assert_eq!(raw_result, expected);
            assert_eq!(reversed_result, expected);
        } else {
            assert_eq!(guarded_result.map(Guarded::into_inner), Ok(plain));
            assert_eq!(raw_result, guarded_result);
            assert_eq!(reversed_result, guarded_result);
        }
    }

    // The same operations with the wider type on the left.
    for (guarded_result, raw_result, reversed_result, plain, operation) in [
        (gb + ga, gb + a, b + ga, wb + wa, Operation::Add),
        (gb - ga, gb - a, b - ga, wb - wa, Operation::Sub),
        (gb * ga, gb * a, b * ga, wb * wa, Operation::Mul),
        (gb / ga, gb / a, b / ga, wb / wa, Operation::Div),
    ] {
        if plain.is_nan() {
            let expected: Result<Guarded<f64>, _> = Err(NanError::Arithmetic(operation));
            assert_eq!(guarded_result, expected);
            assert_eq!(raw_result, expected);
            assert_eq!(reversed_result, expected);
        } else {
            assert_eq!(guarded_result.map(Guarded::into_inner), Ok(plain));
            assert_eq!(raw_result, guarded_result);
            assert_eq!(reversed_result, guarded_result);
        }
    }
}

#[test]
fn infinity_minus_infinity_message() {
    let inf = Guarded::new(f32::INFINITY).unwrap();
    let error = (inf - inf).unwrap_err();
    assert!(std::string::ToString::to_string(&error).contains("NaN"));
}
