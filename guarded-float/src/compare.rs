//! Comparisons of [`Guarded`] values with each other and with raw numbers.
//!
//! Two [`Guarded`] values can always be compared, so they implement the standard comparison
//! traits. Comparison with a raw number fails if that number is NaN, so it is done through
//! [`compare()`] or the `try_*` methods instead.

use core::cmp::Ordering;

use crate::repr::promote_as;
use crate::{Argument, Guarded, NanError, Operand, Promote, Real};

/// Compares two operands in their [common type](crate::Common).
///
/// Returns [`NanError::InvalidArgument`] if either operand is a NaN raw number.
/// Positive and negative zero are equal.
///
/// ```
/// use core::cmp::Ordering;
/// use guarded_float::{Guarded, compare};
///
/// let x = Guarded::new(2.5f32)?;
/// assert_eq!(compare(x, 3_u8)?, Ordering::Less);
/// assert_eq!(compare(2.5_f64, x)?, Ordering::Equal);
/// assert!(compare(x, f64::NAN).is_err());
/// # Ok::<(), guarded_float::NanError>(())
/// ```
#[inline]
pub fn compare<L, R>(lhs: L, rhs: R) -> Result<Ordering, NanError>
where
    L: Operand,
    R: Operand,
    L::Repr: Promote<R::Repr>,
{
    let (lhs, rhs) = promote_as(lhs, rhs, Argument::Compare, Argument::Compare)?;
    Ok(order(lhs, rhs))
}

/// Orders two values which are known not to be NaN.
#[inline]
fn order<T: Real>(lhs: T, rhs: T) -> Ordering {
    if lhs < rhs {
        Ordering::Less
    } else if lhs > rhs {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Converts two guarded values to their common type. Infallible, unlike [`crate::promote()`].
#[inline]
fn widen<T, U>(
    lhs: Guarded<T>,
    rhs: Guarded<U>,
) -> (<T as Promote<U>>::Output, <T as Promote<U>>::Output)
where
    T: Real + Promote<U>,
    U: Real,
{
    (
        Real::from_raw(lhs.into_inner()),
        Real::from_raw(rhs.into_inner()),
    )
}

/// Comparison with any [`Operand`].
///
/// These fail only if `rhs` is a NaN raw number.
impl<T: Real> Guarded<T> {
    /// Compares `self` with `rhs`; see [`compare()`].
    #[inline]
    pub fn try_cmp<R>(self, rhs: R) -> Result<Ordering, NanError>
    where
        R: Operand,
        T: Promote<R::Repr>,
    {
        compare(self, rhs)
    }

    /// `self == rhs`
    #[inline]
    pub fn try_eq<R>(self, rhs: R) -> Result<bool, NanError>
    where
        R: Operand,
        T: Promote<R::Repr>,
    {
        self.try_cmp(rhs).map(Ordering::is_eq)
    }

    /// `self != rhs`
    #[inline]
    pub fn try_ne<R>(self, rhs: R) -> Result<bool, NanError>
    where
        R: Operand,
        T: Promote<R::Repr>,
    {
        self.try_cmp(rhs).map(Ordering::is_ne)
    }

    /// `self < rhs`
    #[inline]
    pub fn try_lt<R>(self, rhs: R) -> Result<bool, NanError>
    where
        R: Operand,
        T: Promote<R::Repr>,
    {
        self.try_cmp(rhs).map(Ordering::is_lt)
    }

    /// `self <= rhs`
    #[inline]
    pub fn try_le<R>(self, rhs: R) -> Result<bool, NanError>
    where
        R: Operand,
        T: Promote<R::Repr>,
    {
        self.try_cmp(rhs).map(Ordering::is_le)
    }

    /// `self > rhs`
    #[inline]
    pub fn try_gt<R>(self, rhs: R) -> Result<bool, NanError>
    where
        R: Operand,
        T: Promote<R::Repr>,
    {
        self.try_cmp(rhs).map(Ordering::is_gt)
    }

    /// `self >= rhs`
    #[inline]
    pub fn try_ge<R>(self, rhs: R) -> Result<bool, NanError>
    where
        R: Operand,
        T: Promote<R::Repr>,
    {
        self.try_cmp(rhs).map(Ordering::is_ge)
    }
}

impl<T, U> PartialEq<Guarded<U>> for Guarded<T>
where
    T: Real + Promote<U>,
    U: Real,
{
    #[inline]
    fn eq(&self, other: &Guarded<U>) -> bool {
        let (lhs, rhs) = widen(*self, *other);
        lhs == rhs
    }
}

impl<T, U> PartialOrd<Guarded<U>> for Guarded<T>
where
    T: Real + Promote<U>,
    U: Real,
{
    #[inline]
    fn partial_cmp(&self, other: &Guarded<U>) -> Option<Ordering> {
        let (lhs, rhs) = widen(*self, *other);
        Some(order(lhs, rhs))
    }
}

impl<T: Real + Promote<T>> Eq for Guarded<T> {}

impl<T: Real + Promote<T>> Ord for Guarded<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        order(self.into_inner(), other.into_inner())
    }
}
