//! Traits describing the number types [`Guarded`] may contain or be combined with,
//! and the rules for choosing the type in which a mixed operation is computed.

use core::fmt;
use core::num::ParseFloatError;
use core::ops;
use core::str::FromStr;

use num_traits::AsPrimitive;

use crate::{Argument, Guarded, NanError};

mod sealed {
    #[allow(unnameable_types)]
    pub trait Sealed {}
}
pub(crate) use sealed::Sealed;

// -------------------------------------------------------------------------------------------------

/// A primitive number type which may be used as a raw (unguarded) operand of [`Guarded`]
/// arithmetic and comparison: any of the primitive float or integer types.
///
/// This trait is sealed and cannot be implemented outside of this crate.
pub trait RawNumber:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialOrd
    + AsPrimitive<f32>
    + AsPrimitive<f64>
    + Sealed
    + 'static
{
    /// Returns whether this value is NaN. Always false for integers.
    fn is_nan(self) -> bool;
}

/// A floating-point representation which a [`Guarded`] may contain: [`f32`] or [`f64`].
///
/// The math functions of this trait are computed by [`libm`] regardless of whether the `std`
/// feature is enabled, so that results do not depend on it.
///
/// This trait is sealed and cannot be implemented outside of this crate.
pub trait Real:
    RawNumber
    + FromStr<Err = ParseFloatError>
    + fmt::LowerExp
    + fmt::UpperExp
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::Neg<Output = Self>
{
    /// Zero (positive).
    const ZERO: Self;
    /// Two, for halving.
    const TWO: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Smallest positive normal value.
    const MIN_POSITIVE: Self;
    /// Largest finite value.
    const MAX: Self;

    /// Converts any raw number to this representation with `as` cast semantics
    /// (rounding to nearest, saturating to infinity on overflow).
    fn from_raw<N: RawNumber>(value: N) -> Self;

    #[allow(missing_docs)]
    fn sqrt(self) -> Self;
    #[allow(missing_docs)]
    fn cbrt(self) -> Self;
    #[allow(missing_docs)]
    fn powf(self, exponent: Self) -> Self;
    #[allow(missing_docs)]
    fn exp(self) -> Self;
    #[allow(missing_docs)]
    fn exp2(self) -> Self;
    #[allow(missing_docs)]
    fn exp_m1(self) -> Self;
    #[allow(missing_docs)]
    fn ln(self) -> Self;
    #[allow(missing_docs)]
    fn log2(self) -> Self;
    #[allow(missing_docs)]
    fn log10(self) -> Self;
    #[allow(missing_docs)]
    fn ln_1p(self) -> Self;
    #[allow(missing_docs)]
    fn abs(self) -> Self;
    #[allow(missing_docs)]
    fn floor(self) -> Self;
    #[allow(missing_docs)]
    fn ceil(self) -> Self;
    /// Rounds half-way cases away from zero.
    fn round(self) -> Self;
    #[allow(missing_docs)]
    fn trunc(self) -> Self;
    /// Returns `self` with the sign bit of `sign`.
    fn copysign(self, sign: Self) -> Self;
    #[allow(missing_docs)]
    fn sin(self) -> Self;
    #[allow(missing_docs)]
    fn cos(self) -> Self;
    #[allow(missing_docs)]
    fn tan(self) -> Self;
    #[allow(missing_docs)]
    fn asin(self) -> Self;
    #[allow(missing_docs)]
    fn acos(self) -> Self;
    #[allow(missing_docs)]
    fn atan(self) -> Self;
    /// Four-quadrant arctangent of `self` (y) and `other` (x).
    fn atan2(self, other: Self) -> Self;
    #[allow(missing_docs)]
    fn hypot(self, other: Self) -> Self;
    /// Error function.
    fn erf(self) -> Self;
    /// Complementary error function, `1 - erf(self)`.
    fn erfc(self) -> Self;
    /// Gamma function.
    fn gamma(self) -> Self;
    /// Natural logarithm of the absolute value of the gamma function.
    fn ln_gamma(self) -> Self;

    /// Returns half the sum of `self` and `other`, without overflowing when the sum would,
    /// and without underflowing when the halves would.
    #[inline]
    fn midpoint(self, other: Self) -> Self {
        let low = Self::MIN_POSITIVE * Self::TWO;
        let high = Self::MAX / Self::TWO;
        let (abs_a, abs_b) = (self.abs(), other.abs());
        if abs_a <= high && abs_b <= high {
            // Cannot overflow, and the single rounding is correct.
            (self + other) / Self::TWO
        } else if abs_a < low {
            // `self` would underflow if halved.
            self + other / Self::TWO
        } else if abs_b < low {
            self / Self::TWO + other
        } else {
            self / Self::TWO + other / Self::TWO
        }
    }
}

macro_rules! raw_number_impls {
    (float: $($t:ty),*) => {
        $(
            impl Sealed for $t {}
            impl RawNumber for $t {
                #[inline]
                fn is_nan(self) -> bool {
                    <$t>::is_nan(self)
                }
            }
        )*
    };
    (integer: $($t:ty),*) => {
        $(
            impl Sealed for $t {}
            impl RawNumber for $t {
                #[inline]
                fn is_nan(self) -> bool {
                    false
                }
            }
        )*
    };
}

raw_number_impls!(float: f32, f64);
raw_number_impls!(integer: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! real_impl {
    (
        $t:ident,
        sqrt: $sqrt:ident, cbrt: $cbrt:ident, pow: $pow:ident,
        exp: $exp:ident, exp2: $exp2:ident, expm1: $expm1:ident,
        log: $log:ident, log2: $log2:ident, log10: $log10:ident, log1p: $log1p:ident,
        fabs: $fabs:ident, floor: $floor:ident, ceil: $ceil:ident, round: $round:ident,
        trunc: $trunc:ident, copysign: $copysign:ident,
        sin: $sin:ident, cos: $cos:ident, tan: $tan:ident,
        asin: $asin:ident, acos: $acos:ident, atan: $atan:ident, atan2: $atan2:ident,
        hypot: $hypot:ident,
        erf: $erf:ident, erfc: $erfc:ident, tgamma: $tgamma:ident, lgamma: $lgamma:ident $(,)?
    ) => {
        impl Real for $t {
            const ZERO: Self = 0.0;
            const TWO: Self = 2.0;
            const INFINITY: Self = $t::INFINITY;
            const MIN_POSITIVE: Self = $t::MIN_POSITIVE;
            const MAX: Self = $t::MAX;

            #[inline]
            fn from_raw<N: RawNumber>(value: N) -> Self {
                <N as AsPrimitive<$t>>::as_(value)
            }

            #[inline] fn sqrt(self) -> Self { libm::$sqrt(self) }
            #[inline] fn cbrt(self) -> Self { libm::$cbrt(self) }
            #[inline] fn powf(self, exponent: Self) -> Self { libm::$pow(self, exponent) }
            #[inline] fn exp(self) -> Self { libm::$exp(self) }
            #[inline] fn exp2(self) -> Self { libm::$exp2(self) }
            #[inline] fn exp_m1(self) -> Self { libm::$expm1(self) }
            #[inline] fn ln(self) -> Self { libm::$log(self) }
            #[inline] fn log2(self) -> Self { libm::$log2(self) }
            #[inline] fn log10(self) -> Self { libm::$log10(self) }
            #[inline] fn ln_1p(self) -> Self { libm::$log1p(self) }
            #[inline] fn abs(self) -> Self { libm::$fabs(self) }
            #[inline] fn floor(self) -> Self { libm::$floor(self) }
            #[inline] fn ceil(self) -> Self { libm::$ceil(self) }
            #[inline] fn round(self) -> Self { libm::$round(self) }
            #[inline] fn trunc(self) -> Self { libm::$trunc(self) }
            #[inline] fn copysign(self, sign: Self) -> Self { libm::$copysign(self, sign) }
            #[inline] fn sin(self) -> Self { libm::$sin(self) }
            #[inline] fn cos(self) -> Self { libm::$cos(self) }
            #[inline] fn tan(self) -> Self { libm::$tan(self) }
            #[inline] fn asin(self) -> Self { libm::$asin(self) }
            #[inline] fn acos(self) -> Self { libm::$acos(self) }
            #[inline] fn atan(self) -> Self { libm::$atan(self) }
            #[inline] fn atan2(self, other: Self) -> Self { libm::$atan2(self, other) }
            #[inline] fn hypot(self, other: Self) -> Self { libm::$hypot(self, other) }
            #[inline] fn erf(self) -> Self { libm::$erf(self) }
            #[inline] fn erfc(self) -> Self { libm::$erfc(self) }
            #[inline] fn gamma(self) -> Self { libm::$tgamma(self) }
            #[inline] fn ln_gamma(self) -> Self { libm::$lgamma(self) }
        }
    };
}

real_impl!(
    f32,
    sqrt: sqrtf, cbrt: cbrtf, pow: powf,
    exp: expf, exp2: exp2f, expm1: expm1f,
    log: logf, log2: log2f, log10: log10f, log1p: log1pf,
    fabs: fabsf, floor: floorf, ceil: ceilf, round: roundf,
    trunc: truncf, copysign: copysignf,
    sin: sinf, cos: cosf, tan: tanf,
    asin: asinf, acos: acosf, atan: atanf, atan2: atan2f,
    hypot: hypotf,
    erf: erff, erfc: erfcf, tgamma: tgammaf, lgamma: lgammaf,
);
real_impl!(
    f64,
    sqrt: sqrt, cbrt: cbrt, pow: pow,
    exp: exp, exp2: exp2, expm1: expm1,
    log: log, log2: log2, log10: log10, log1p: log1p,
    fabs: fabs, floor: floor, ceil: ceil, round: round,
    trunc: trunc, copysign: copysign,
    sin: sin, cos: cos, tan: tan,
    asin: asin, acos: acos, atan: atan, atan2: atan2,
    hypot: hypot,
    erf: erf, erfc: erfc, tgamma: tgamma, lgamma: lgamma,
);

// -------------------------------------------------------------------------------------------------

/// Numeric promotion: the representation in which an operation between a `Self` and a `Rhs`
/// is computed.
///
/// * Two floats promote to the wider of the two.
/// * An integer and a float promote to the float.
/// * Two integers do not promote; operations on them are not provided.
///
/// This is implemented for pairs of [`RawNumber`]s; operations on [`Guarded`] values
/// promote according to their representations.
pub trait Promote<Rhs: RawNumber>: RawNumber {
    /// The common type.
    type Output: Real;
}

macro_rules! promote_impls {
    ($($lhs:ty, $rhs:ty => $out:ty;)*) => {
        $( impl Promote<$rhs> for $lhs { type Output = $out; } )*
    };
    (integer: $($int:ty),*) => {
        $(
            promote_impls!(
                $int, f32 => f32;
                f32, $int => f32;
                $int, f64 => f64;
                f64, $int => f64;
            );
        )*
    };
}

promote_impls!(
    f32, f32 => f32;
    f32, f64 => f64;
    f64, f32 => f64;
    f64, f64 => f64;
);
promote_impls!(integer: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// -------------------------------------------------------------------------------------------------

/// Either kind of operand of a [`Guarded`] operation: a [`RawNumber`] or a [`Guarded`].
///
/// This trait is sealed and cannot be implemented outside of this crate.
pub trait Operand: Copy + Sealed {
    /// The primitive type of the operand’s value.
    type Repr: RawNumber;

    /// Whether values of this type are already known not to be NaN.
    const GUARDED: bool;

    /// Returns the operand’s value, without checking it.
    fn into_repr(self) -> Self::Repr;
}

macro_rules! raw_operand_impls {
    ($($t:ty),*) => {
        $(
            impl Operand for $t {
                type Repr = $t;
                const GUARDED: bool = false;
                #[inline]
                fn into_repr(self) -> Self::Repr {
                    self
                }
            }
        )*
    };
}

raw_operand_impls!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Real> Sealed for Guarded<T> {}
impl<T: Real> Operand for Guarded<T> {
    type Repr = T;
    const GUARDED: bool = true;
    #[inline]
    fn into_repr(self) -> Self::Repr {
        self.into_inner()
    }
}

/// The common type of two [`Operand`]s, in which operations between them are computed.
pub type Common<L, R> = <<L as Operand>::Repr as Promote<<R as Operand>::Repr>>::Output;

/// Unwraps an operand, rejecting it if it is a NaN raw number.
#[inline]
pub(crate) fn checked_repr<O: Operand>(operand: O, argument: Argument) -> Result<O::Repr, NanError> {
    let value = operand.into_repr();
    // A guarded operand cannot be NaN, so skip the check.
    if !O::GUARDED && value.is_nan() {
        Err(NanError::invalid_argument(argument))
    } else {
        Ok(value)
    }
}

/// Unwraps both operands and converts them to their [common type](Common).
///
/// Returns [`NanError::InvalidArgument`] if either operand is a NaN raw number.
///
/// ```
/// use guarded_float::{Guarded, promote};
///
/// let (a, b): (f32, f32) = promote(Guarded::new(1.5f32)?, 2_i32)?;
/// assert_eq!((a, b), (1.5, 2.0));
/// let (c, d): (f64, f64) = promote(Guarded::new(1.5f32)?, 2.0_f64)?;
/// assert_eq!((c, d), (1.5, 2.0));
/// assert!(promote(Guarded::new(1.5f32)?, f64::NAN).is_err());
/// # Ok::<(), guarded_float::NanError>(())
/// ```
#[inline]
pub fn promote<L, R>(lhs: L, rhs: R) -> Result<(Common<L, R>, Common<L, R>), NanError>
where
    L: Operand,
    R: Operand,
    L::Repr: Promote<R::Repr>,
{
    promote_as(lhs, rhs, Argument::Lhs, Argument::Rhs)
}

/// [`promote()`] with a choice of what to call the operands in errors.
#[inline]
pub(crate) fn promote_as<L, R>(
    lhs: L,
    rhs: R,
    lhs_argument: Argument,
    rhs_argument: Argument,
) -> Result<(Common<L, R>, Common<L, R>), NanError>
where
    L: Operand,
    R: Operand,
    L::Repr: Promote<R::Repr>,
{
    let lhs = checked_repr(lhs, lhs_argument)?;
    let rhs = checked_repr(rhs, rhs_argument)?;
    Ok((<Common<L, R>>::from_raw(lhs), <Common<L, R>>::from_raw(rhs)))
}
