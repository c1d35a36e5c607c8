use core::fmt;
use core::hash;
use core::ops;
use core::str::FromStr;

use num_traits::AsPrimitive;
use ordered_float::{FloatCore, NotNan, PrimitiveFloat};

use crate::{Argument, NanError, Operation, ParseGuardedError, RawNumber, Real};

// -------------------------------------------------------------------------------------------------

/// A floating-point number which is not NaN, and whose operations fail rather than produce NaN.
///
/// `T` is the underlying representation, [`f32`] or [`f64`]. Infinities and both zeroes are
/// permitted values.
///
/// * Construct it with [`Guarded::new()`], [`Guarded::from_raw()`], [`TryFrom`], or
///   (infallibly, from small integers) [`From`]. There is no [`Default`]
///   implementation; a value must always be supplied.
/// * Read the value with [`*guarded`](ops::Deref), [`Guarded::into_inner()`], or
///   [`Guarded::cast()`].
/// * Combine it using the `+ - * /` operators, which return `Result<Guarded<_>, NanError>`,
///   or the `try_*_assign()` methods, which modify it in place.
/// * Compare it with other [`Guarded`] values using the standard comparison operators, or with
///   raw numbers using [`Guarded::try_cmp()`] and friends.
///
/// Formatting with [`fmt::Display`] and the other formatting traits produces exactly what
/// formatting the underlying value would.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Guarded<T>(T);

// --- Inherent implementations --------------------------------------------------------------------

impl<T: Real> Guarded<T> {
    /// Wraps `value`, or returns [`NanError::InvalidArgument`] if it is NaN.
    ///
    /// ```
    /// use guarded_float::Guarded;
    ///
    /// assert_eq!(*Guarded::new(1.5f32).unwrap(), 1.5);
    /// assert_eq!(*Guarded::new(f64::INFINITY).unwrap(), f64::INFINITY);
    /// assert!(Guarded::new(f64::NAN).is_err());
    /// ```
    #[inline]
    pub fn new(value: T) -> Result<Self, NanError> {
        if value.is_nan() {
            Err(NanError::invalid_argument(Argument::Construct))
        } else {
            Ok(Self(value))
        }
    }

    /// Converts `value` of any primitive number type to `T` and wraps it,
    /// or returns [`NanError::InvalidArgument`] if it is NaN.
    ///
    /// The conversion has the semantics of an `as` cast: it may lose precision, and may
    /// produce an infinity when narrowing, but never produces NaN.
    #[inline]
    pub fn from_raw<N: RawNumber>(value: N) -> Result<Self, NanError> {
        if value.is_nan() {
            Err(NanError::invalid_argument(Argument::Construct))
        } else {
            Ok(Self(T::from_raw(value)))
        }
    }

    /// Wraps the result of a computation whose inputs were all valid.
    #[inline]
    pub(crate) fn from_result(value: T, operation: Operation) -> Result<Self, NanError> {
        if value.is_nan() {
            Err(NanError::arithmetic(operation))
        } else {
            Ok(Self(value))
        }
    }

    /// Wraps the result of a computation which is known not to produce NaN from non-NaN input.
    #[inline]
    pub(crate) fn from_total(value: T) -> Self {
        debug_assert!(!value.is_nan());
        Self(value)
    }

    /// Unwraps the value without modifying it.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Replaces the value with `value` converted to `T`,
    /// or returns [`NanError::InvalidArgument`] if it is NaN, leaving `self` unchanged.
    ///
    /// ```
    /// use guarded_float::Guarded;
    ///
    /// let mut x = Guarded::new(1.0f64)?;
    /// x.assign(2u8)?;
    /// assert_eq!(*x, 2.0);
    /// assert!(x.assign(f32::NAN).is_err());
    /// assert_eq!(*x, 2.0);
    /// # Ok::<(), guarded_float::NanError>(())
    /// ```
    #[inline]
    pub fn assign<N: RawNumber>(&mut self, value: N) -> Result<(), NanError> {
        if value.is_nan() {
            return Err(NanError::invalid_argument(Argument::Assign));
        }
        self.0 = T::from_raw(value);
        Ok(())
    }

    /// Replaces the value with the value of `other`, converted to `T`.
    ///
    /// This cannot fail since `other` is already known not to be NaN.
    #[inline]
    pub fn assign_guarded<F: Real>(&mut self, other: Guarded<F>) {
        *self = other.convert();
    }

    /// Parses `text` as a `T` and assigns it.
    ///
    /// On failure, `self` is unchanged.
    #[inline]
    pub fn assign_from_str(&mut self, text: &str) -> Result<(), ParseGuardedError> {
        let value: T = text.parse()?;
        self.assign(value)?;
        Ok(())
    }

    /// Converts to a [`Guarded`] with a different representation.
    ///
    /// The conversion has the semantics of an `as` cast: narrowing may lose precision or
    /// overflow to infinity. No NaN check is performed, since converting a non-NaN value
    /// between IEEE 754 formats cannot produce NaN.
    ///
    /// ```
    /// use guarded_float::Guarded;
    ///
    /// let wide = Guarded::new(1e300f64)?;
    /// assert_eq!(*wide.convert::<f32>(), f32::INFINITY);
    /// # Ok::<(), guarded_float::NanError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn convert<F: Real>(self) -> Guarded<F> {
        Guarded(F::from_raw(self.0))
    }

    /// Converts the value to another primitive type with the semantics of an `as` cast.
    ///
    /// In particular, conversion to integers rounds toward zero and saturates, so infinities
    /// become the integer type’s minimum or maximum.
    #[inline]
    pub fn cast<A>(self) -> A
    where
        T: AsPrimitive<A>,
        A: Copy + 'static,
    {
        self.0.as_()
    }

    /// Returns whether the value is nonzero; the same as the truthiness of a float in C.
    #[inline]
    pub fn to_bool(self) -> bool {
        self.0 != T::ZERO
    }

    /// Returns whether the value is finite.
    ///
    /// Since the value is statically guaranteed not to be NaN,
    /// the only cases where this returns `false` are the infinities.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0 != T::INFINITY && self.0 != -T::INFINITY
    }

    #[cfg(test)]
    #[track_caller]
    pub(crate) fn consistency_check(self) {
        assert!(!self.0.is_nan(), "{:?}", self.0);
    }
}

// --- Non-generic macro-generated implementations -------------------------------------------------
//
// As it becomes possible, we should replace these with generic impls.

macro_rules! non_generic_impls {
    ($t:ident) => {
        impl Guarded<$t> {
            /// Zero (positive).
            pub const ZERO: Self = Self(0.0);
            /// One.
            pub const ONE: Self = Self(1.0);
            /// Positive infinity (∞).
            pub const INFINITY: Self = Self($t::INFINITY);
            /// Negative infinity (−∞).
            pub const NEG_INFINITY: Self = Self($t::NEG_INFINITY);

            /// Wraps the given value in `Guarded`, panicking if it is NaN.
            ///
            /// This is intended for constants and tests; use [`Guarded::new()`] for
            /// values which are not known in advance.
            #[track_caller]
            #[inline]
            pub const fn new_strict(value: $t) -> Self {
                if value.is_nan() {
                    guarded_nan_panic()
                } else {
                    Self(value)
                }
            }

            /// Const equivalent of [`Guarded::into_inner()`].
            #[inline]
            pub const fn get(self) -> $t {
                self.0
            }
        }

        impl From<Guarded<$t>> for $t {
            #[inline]
            fn from(value: Guarded<$t>) -> Self {
                value.0
            }
        }

        impl TryFrom<$t> for Guarded<$t> {
            type Error = NanError;

            /// Equivalent to [`Guarded::new()`].
            #[inline]
            fn try_from(value: $t) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

non_generic_impls!(f32);
non_generic_impls!(f64);

impl From<Guarded<f32>> for f64 {
    #[inline]
    fn from(value: Guarded<f32>) -> Self {
        value.0.into()
    }
}

/// Lossless widening.
impl From<Guarded<f32>> for Guarded<f64> {
    #[inline]
    fn from(value: Guarded<f32>) -> Self {
        value.convert()
    }
}

/// Integers which convert to floats without loss can be infallibly converted to `Guarded`.
mod integer_to_guarded {
    use super::*;
    macro_rules! integer_to_guarded {
        ($int:ident, $float:ident) => {
            impl From<$int> for Guarded<$float> {
                #[inline]
                fn from(value: $int) -> Guarded<$float> {
                    Guarded(value.into())
                }
            }
        };
    }
    integer_to_guarded!(i8, f32);
    integer_to_guarded!(i8, f64);
    integer_to_guarded!(i16, f32);
    integer_to_guarded!(i16, f64);
    integer_to_guarded!(u8, f32);
    integer_to_guarded!(u8, f64);
    integer_to_guarded!(u16, f32);
    integer_to_guarded!(u16, f64);
    integer_to_guarded!(i32, f64);
    integer_to_guarded!(u32, f64);
}

#[track_caller]
#[cold]
const fn guarded_nan_panic() -> ! {
    panic!("Guarded value must not be NaN")
}

/// Convenient alias for [`Guarded::<f32>::new_strict()`],
/// to be used in tests and pseudo-literals.
#[inline]
pub const fn g32(value: f32) -> Guarded<f32> {
    Guarded::<f32>::new_strict(value)
}

/// Convenient alias for [`Guarded::<f64>::new_strict()`],
/// to be used in tests and pseudo-literals.
#[inline]
pub const fn g64(value: f64) -> Guarded<f64> {
    Guarded::<f64>::new_strict(value)
}

// --- Generic trait implementations ---------------------------------------------------------------

impl<T> ops::Deref for Guarded<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Guarded<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Guarded<T> {
    #[inline(never)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Don't print the wrappers, just the value.
        let value: &T = &self.0;
        value.fmt(f)
    }
}
impl<T: fmt::Display> fmt::Display for Guarded<T> {
    #[inline(never)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value: &T = &self.0;
        value.fmt(f)
    }
}
impl<T: fmt::LowerExp> fmt::LowerExp for Guarded<T> {
    #[inline(never)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value: &T = &self.0;
        value.fmt(f)
    }
}
impl<T: fmt::UpperExp> fmt::UpperExp for Guarded<T> {
    #[inline(never)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value: &T = &self.0;
        value.fmt(f)
    }
}

impl<T: Real> FromStr for Guarded<T> {
    type Err = ParseGuardedError;

    /// Parses with the standard float syntax of `T`, then rejects NaN.
    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(text.parse()?)?)
    }
}

impl<T: Real + PrimitiveFloat> hash::Hash for Guarded<T> {
    /// Hashes consistently with [`Eq`]: both zeroes hash the same.
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        NotNan::from(*self).hash(state)
    }
}

impl<T: Real + FloatCore> From<Guarded<T>> for NotNan<T> {
    #[inline]
    fn from(value: Guarded<T>) -> Self {
        // SAFETY: `Guarded`’s restriction is the same as `NotNan`’s.
        unsafe { NotNan::new_unchecked(value.0) }
    }
}

impl<T: Real + FloatCore> From<NotNan<T>> for Guarded<T> {
    #[inline]
    fn from(value: NotNan<T>) -> Self {
        Self(value.into_inner())
    }
}

#[cfg(feature = "arbitrary")]
#[mutants::skip]
#[allow(clippy::missing_inline_in_public_items)]
impl<'a, T> arbitrary::Arbitrary<'a> for Guarded<T>
where
    T: Real + FloatCore,
    NotNan<T>: arbitrary::Arbitrary<'a>,
{
    #[inline(never)]
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self::from(NotNan::<T>::arbitrary(u)?))
    }

    #[inline(never)]
    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        NotNan::<T>::size_hint(depth)
    }
}

// -------------------------------------------------------------------------------------------------
