#![no_main]

use libfuzzer_sys::fuzz_target;

use pretty_assertions::assert_eq;

use guarded_float::{Guarded, NanError};

#[derive(Debug, arbitrary::Arbitrary)]
struct Program {
    start: Guarded<f64>,
    steps: Vec<Step>,
}

#[derive(Clone, Copy, Debug, arbitrary::Arbitrary)]
enum Step {
    Add(Value),
    Sub(Value),
    Mul(Value),
    Div(Value),
    Pow(Value),
    Log(Value),
    Midpoint(Value),
    Compare(Value),
    Assign(Value),
    Sqrt,
    Ln,
    Gamma,
    Modf,
    Narrow,
}

#[derive(Clone, Copy, Debug, arbitrary::Arbitrary)]
enum Value {
    G32(Guarded<f32>),
    G64(Guarded<f64>),
    F32(f32),
    F64(f64),
    I64(i64),
}

impl Value {
    fn is_nan(self) -> bool {
        match self {
            Value::F32(v) => v.is_nan(),
            Value::F64(v) => v.is_nan(),
            Value::G32(_) | Value::G64(_) | Value::I64(_) => false,
        }
    }
}

/// Evaluates `$body` with `$operand` bound to the contents of whichever kind of [`Value`] it is.
macro_rules! with_value {
    ($value:expr, |$operand:ident| $body:expr) => {
        match $value {
            Value::G32($operand) => $body,
            Value::G64($operand) => $body,
            Value::F32($operand) => $body,
            Value::F64($operand) => $body,
            Value::I64($operand) => $body,
        }
    };
}

fuzz_target!(|program: Program| run(program));

fn run(program: Program) {
    let mut x = program.start;
    for step in program.steps {
        let before = x;
        let result: Result<(), NanError> = match step {
            Step::Add(v) => with_value!(v, |o| x.try_add_assign(o)),
            Step::Sub(v) => with_value!(v, |o| x.try_sub_assign(o)),
            Step::Mul(v) => with_value!(v, |o| x.try_mul_assign(o)),
            Step::Div(v) => with_value!(v, |o| x.try_div_assign(o)),
            Step::Pow(v) => with_value!(v, |o| x.pow(o).map(|r| x.assign_guarded(r))),
            Step::Log(v) => with_value!(v, |o| x.log(o).map(|r| x.assign_guarded(r))),
            Step::Midpoint(v) => with_value!(v, |o| x.midpoint(o).map(|r| x.assign_guarded(r))),
            Step::Compare(v) => with_value!(v, |o| x.try_cmp(o).map(|_| ())),
            Step::Assign(v) => match v {
                Value::G32(g) => {
                    x.assign_guarded(g);
                    Ok(())
                }
                Value::G64(g) => {
                    x.assign_guarded(g);
                    Ok(())
                }
                Value::F32(f) => x.assign(f),
                Value::F64(f) => x.assign(f),
                Value::I64(i) => x.assign(i),
            },
            Step::Sqrt => x.sqrt().map(|r| x = r),
            Step::Ln => x.ln().map(|r| x = r),
            Step::Gamma => x.gamma().map(|r| x = r),
            Step::Modf => {
                let mut integral = x;
                x.modf(&mut integral).map(|fractional| {
                    assert!(*fractional.abs() < 1.0 || *fractional == 0.0);
                    x = integral;
                })
            }
            Step::Narrow => {
                x = Guarded::from(x.convert::<f32>());
                Ok(())
            }
        };

        assert!(!x.is_nan(), "{step:?} produced NaN");
        match result {
            Ok(()) => {}
            Err(error) => {
                assert_eq!(x, before, "{step:?} failed but modified the value");
                match step {
                    Step::Add(v) | Step::Sub(v) | Step::Mul(v) | Step::Div(v) | Step::Pow(v)
                    | Step::Midpoint(v) | Step::Assign(v) | Step::Compare(v) | Step::Log(v)
                        if v.is_nan() =>
                    {
                        assert!(error.is_invalid_argument(), "{step:?}: {error}");
                    }
                    _ => {
                        assert!(!error.is_invalid_argument(), "{step:?}: {error}");
                    }
                }
            }
        }
    }
}
