use core::num::ParseFloatError;

/// Error from an operation on a [`Guarded`](crate::Guarded) number which was given,
/// or would have produced, NaN.
///
/// Whenever an operation returns this error, any receiver of the operation (such as the
/// target of [`Guarded::assign()`](crate::Guarded::assign)) has been left unmodified.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, displaydoc::Display)]
#[non_exhaustive]
pub enum NanError {
    /// The caller supplied a NaN value.
    #[displaydoc("{0} is NaN")]
    InvalidArgument(Argument),

    /// All inputs were valid, but the mathematical result is undefined
    /// (for example, `0 / 0`, `∞ - ∞`, or the square root of a negative number).
    #[displaydoc("result of {0} is NaN")]
    Arithmetic(Operation),
}

impl NanError {
    /// Returns whether this error was caused by a NaN input rather than a NaN result.
    #[inline]
    pub fn is_invalid_argument(self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Constructs the error and records it in the log.
    #[cold]
    #[inline(never)]
    pub(crate) fn invalid_argument(argument: Argument) -> Self {
        log::trace!(target: "guarded_float::guard", "rejected NaN {argument}");
        Self::InvalidArgument(argument)
    }

    /// Constructs the error and records it in the log.
    #[cold]
    #[inline(never)]
    pub(crate) fn arithmetic(operation: Operation) -> Self {
        log::trace!(target: "guarded_float::guard", "{operation} produced NaN");
        Self::Arithmetic(operation)
    }
}

impl core::error::Error for NanError {}

/// Which caller-supplied value was NaN, in a [`NanError::InvalidArgument`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, displaydoc::Display)]
#[non_exhaustive]
pub enum Argument {
    /// value to construct from
    Construct,
    /// assigned value
    Assign,
    /// comparison operand
    Compare,
    /// left operand
    Lhs,
    /// right operand
    Rhs,
    /// logarithm base
    Base,
}

/// Which computation produced NaN, in a [`NanError::Arithmetic`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, displaydoc::Display)]
#[non_exhaustive]
pub enum Operation {
    /// addition
    Add,
    /// subtraction
    Sub,
    /// multiplication
    Mul,
    /// division
    Div,
    /// sqrt
    Sqrt,
    /// cbrt
    Cbrt,
    /// pow
    Pow,
    /// exp
    Exp,
    /// exp2
    Exp2,
    /// `exp_m1`
    #[displaydoc("exp_m1")]
    ExpM1,
    /// ln
    Ln,
    /// log2
    Log2,
    /// log10
    Log10,
    /// `ln_1p`
    #[displaydoc("ln_1p")]
    Ln1p,
    /// log
    Log,
    /// sin
    Sin,
    /// cos
    Cos,
    /// tan
    Tan,
    /// asin
    Asin,
    /// acos
    Acos,
    /// atan
    Atan,
    /// atan2
    Atan2,
    /// hypot
    Hypot,
    /// erf
    Erf,
    /// erfc
    Erfc,
    /// gamma
    Gamma,
    /// `ln_gamma`
    #[displaydoc("ln_gamma")]
    LnGamma,
    /// modf
    Modf,
    /// midpoint
    Midpoint,
}

/// Error from parsing a [`Guarded`](crate::Guarded) number from text.
#[derive(Clone, Debug, Eq, PartialEq, displaydoc::Display)]
#[non_exhaustive]
pub enum ParseGuardedError {
    /// invalid number syntax
    Syntax(ParseFloatError),
    /// parsed value was rejected
    Nan(NanError),
}

impl core::error::Error for ParseGuardedError {
    #[allow(clippy::missing_inline_in_public_items)]
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Nan(e) => Some(e),
        }
    }
}

impl From<ParseFloatError> for ParseGuardedError {
    #[inline]
    fn from(value: ParseFloatError) -> Self {
        Self::Syntax(value)
    }
}

impl From<NanError> for ParseGuardedError {
    #[inline]
    fn from(value: NanError) -> Self {
        Self::Nan(value)
    }
}
