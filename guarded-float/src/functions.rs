//! Elementary and transcendental functions of [`Guarded`] numbers.
//!
//! Each of these computes the corresponding [`Real`] function of the underlying value, and
//! fails with [`NanError::Arithmetic`] if the result is NaN (for example, the square root or
//! logarithm of a negative number). Functions which can never produce NaN from a non-NaN
//! input return [`Guarded`] directly.

use crate::repr::promote_as;
use crate::{Argument, Common, Guarded, NanError, Operand, Operation, Promote, Real};

macro_rules! fallible_unary_functions {
    ($( $(#[$attr:meta])* fn $name:ident => $operation:ident; )*) => {
        impl<T: Real> Guarded<T> {
            $(
                $(#[$attr])*
                #[inline]
                pub fn $name(self) -> Result<Self, NanError> {
                    Self::from_result(Real::$name(self.into_inner()), Operation::$operation)
                }
            )*
        }
    };
}

fallible_unary_functions! {
    /// Square root. Fails for negative numbers other than −0.
    fn sqrt => Sqrt;
    /// Cube root.
    fn cbrt => Cbrt;
    /// eˣ
    fn exp => Exp;
    /// 2ˣ
    fn exp2 => Exp2;
    /// eˣ − 1, accurate for small values.
    fn exp_m1 => ExpM1;
    /// Natural logarithm. Fails for negative numbers.
    fn ln => Ln;
    /// Base-2 logarithm. Fails for negative numbers.
    fn log2 => Log2;
    /// Base-10 logarithm. Fails for negative numbers.
    fn log10 => Log10;
    /// ln(1 + x), accurate for small values. Fails for numbers less than −1.
    fn ln_1p => Ln1p;

    /// Sine, in radians. Fails for infinities.
    fn sin => Sin;
    /// Cosine, in radians. Fails for infinities.
    fn cos => Cos;
    /// Tangent, in radians. Fails for infinities.
    fn tan => Tan;
    /// Arcsine, in radians. Fails outside of [−1, 1].
    fn asin => Asin;
    /// Arccosine, in radians. Fails outside of [−1, 1].
    fn acos => Acos;
    /// Arctangent, in radians.
    fn atan => Atan;

    /// Error function.
    fn erf => Erf;
    /// Complementary error function.
    fn erfc => Erfc;
    /// Gamma function. Fails for negative integers and −∞.
    fn gamma => Gamma;
    /// Natural logarithm of the absolute value of the gamma function.
    fn ln_gamma => LnGamma;
}

macro_rules! total_unary_functions {
    ($( $(#[$attr:meta])* fn $name:ident; )*) => {
        impl<T: Real> Guarded<T> {
            $(
                $(#[$attr])*
                #[inline]
                #[must_use]
                pub fn $name(self) -> Self {
                    Self::from_total(Real::$name(self.into_inner()))
                }
            )*
        }
    };
}

total_unary_functions! {
    /// Absolute value.
    fn abs;
    /// Rounds toward −∞.
    fn floor;
    /// Rounds toward +∞.
    fn ceil;
    /// Rounds to the nearest integer, with half-way cases rounded away from zero.
    fn round;
    /// Rounds toward zero.
    fn trunc;
}

/// Functions of two values.
///
/// These accept any [`Operand`] as the second value and return a [`Guarded`] of the
/// [common type](Common). A raw operand is checked for NaN before the computation.
impl<T: Real> Guarded<T> {
    /// Raises `self` to the power `exponent`.
    ///
    /// ```
    /// use guarded_float::{Guarded, NanError, Operation};
    ///
    /// assert_eq!(*Guarded::new(2.0f32)?.pow(10_i32)?, 1024.0);
    /// assert_eq!(
    ///     Guarded::new(-8.0f64)?.pow(1.0_f64 / 3.0),
    ///     Err(NanError::Arithmetic(Operation::Pow)),
    /// );
    /// # Ok::<(), NanError>(())
    /// ```
    #[inline]
    pub fn pow<R>(self, exponent: R) -> Result<Guarded<Common<Self, R>>, NanError>
    where
        R: Operand,
        T: Promote<R::Repr>,
    {
        self.with_value(exponent, Argument::Rhs, Operation::Pow, |a, b| a.powf(b))
    }

    /// Logarithm of `self` in the given `base`, computed as `ln(self) / ln(base)`.
    ///
    /// A NaN raw `base` is reported as [`Argument::Base`].
    #[inline]
    pub fn log<R>(self, base: R) -> Result<Guarded<Common<Self, R>>, NanError>
    where
        R: Operand,
        T: Promote<R::Repr>,
    {
        self.with_value(base, Argument::Base, Operation::Log, |a, b| a.ln() / b.ln())
    }

    /// Four-quadrant arctangent of `self` (y) and `x`, in radians.
    #[inline]
    pub fn atan2<R>(self, x: R) -> Result<Guarded<Common<Self, R>>, NanError>
    where
        R: Operand,
        T: Promote<R::Repr>,
    {
        self.with_value(x, Argument::Rhs, Operation::Atan2, |a, b| a.atan2(b))
    }

    /// Length of the hypotenuse of a right triangle with legs `self` and `other`.
    #[inline]
    pub fn hypot<R>(self, other: R) -> Result<Guarded<Common<Self, R>>, NanError>
    where
        R: Operand,
        T: Promote<R::Repr>,
    {
        self.with_value(other, Argument::Rhs, Operation::Hypot, |a, b| a.hypot(b))
    }

    /// Half of the sum of `self` and `other`, computed without intermediate overflow.
    ///
    /// Fails if the operands are infinities of opposite sign.
    #[inline]
    pub fn midpoint<R>(self, other: R) -> Result<Guarded<Common<Self, R>>, NanError>
    where
        R: Operand,
        T: Promote<R::Repr>,
    {
        self.with_value(other, Argument::Rhs, Operation::Midpoint, |a, b| a.midpoint(b))
    }

    #[inline]
    fn with_value<R>(
        self,
        rhs: R,
        argument: Argument,
        operation: Operation,
        f: impl FnOnce(Common<Self, R>, Common<Self, R>) -> Common<Self, R>,
    ) -> Result<Guarded<Common<Self, R>>, NanError>
    where
        R: Operand,
        T: Promote<R::Repr>,
    {
        let (lhs, rhs) = promote_as(self, rhs, Argument::Lhs, argument)?;
        Guarded::from_result(f(lhs, rhs), operation)
    }

    /// Splits `self` into integral and fractional parts, each with the sign of `self`.
    ///
    /// The integral part is stored in `integral` and the fractional part is returned.
    /// If `self` is infinite, the integral part is that infinity and the fractional part is
    /// zero. `integral` is only written if the operation succeeds.
    ///
    /// ```
    /// use guarded_float::{Guarded, g64};
    ///
    /// let mut integral = g64(0.0);
    /// let fractional = g64(-3.25).modf(&mut integral)?;
    /// assert_eq!((integral, fractional), (g64(-3.0), g64(-0.25)));
    /// # Ok::<(), guarded_float::NanError>(())
    /// ```
    #[inline]
    pub fn modf(self, integral: &mut Self) -> Result<Self, NanError> {
        let value = self.into_inner();
        let integral_part = value.trunc();
        let fractional_part = if integral_part == value {
            T::ZERO.copysign(value)
        } else {
            value - integral_part
        };
        let integral_part = Self::from_result(integral_part, Operation::Modf)?;
        let fractional_part = Self::from_result(fractional_part, Operation::Modf)?;
        *integral = integral_part;
        Ok(fractional_part)
    }
}
