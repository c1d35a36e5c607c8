//! Arithmetic operators and compound assignment for [`Guarded`].

use core::ops;

use crate::{Common, Guarded, NanError, Operand, Operation, Promote, Real, promote};

/// Performs a binary operation in the common type of `lhs` and `rhs`, rejecting NaN inputs
/// and NaN results.
#[inline]
pub(crate) fn binary<L, R>(
    lhs: L,
    rhs: R,
    operation: Operation,
    f: impl FnOnce(Common<L, R>, Common<L, R>) -> Common<L, R>,
) -> Result<Guarded<Common<L, R>>, NanError>
where
    L: Operand,
    R: Operand,
    L::Repr: Promote<R::Repr>,
{
    let (lhs, rhs) = promote(lhs, rhs)?;
    Guarded::from_result(f(lhs, rhs), operation)
}

macro_rules! binary_op {
    ($trait:ident, $method:ident, $operation:ident, $op:tt) => {
        impl<T, U> ops::$trait<Guarded<U>> for Guarded<T>
        where
            T: Real + Promote<U>,
            U: Real,
        {
            type Output = Result<Guarded<<T as Promote<U>>::Output>, NanError>;

            #[inline]
            fn $method(self, rhs: Guarded<U>) -> Self::Output {
                binary(self, rhs, Operation::$operation, |a, b| a $op b)
            }
        }

        binary_op!(
            @raw $trait, $method, $operation, $op:
            f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
        );
    };
    (@raw $trait:ident, $method:ident, $operation:ident, $op:tt: $($raw:ty),*) => {
        $(
            impl<T> ops::$trait<$raw> for Guarded<T>
            where
                T: Real + Promote<$raw>,
            {
                type Output = Result<Guarded<<T as Promote<$raw>>::Output>, NanError>;

                #[inline]
                fn $method(self, rhs: $raw) -> Self::Output {
                    binary(self, rhs, Operation::$operation, |a, b| a $op b)
                }
            }

            impl<T> ops::$trait<Guarded<T>> for $raw
            where
                T: Real,
                $raw: Promote<T>,
            {
                type Output = Result<Guarded<<$raw as Promote<T>>::Output>, NanError>;

                #[inline]
                fn $method(self, rhs: Guarded<T>) -> Self::Output {
                    binary(self, rhs, Operation::$operation, |a, b| a $op b)
                }
            }
        )*
    };
}

binary_op!(Add, add, Add, +);
binary_op!(Sub, sub, Sub, -);
binary_op!(Mul, mul, Mul, *);
binary_op!(Div, div, Div, /);

/// Compound assignment.
///
/// Each of these computes the operation exactly as the corresponding binary operator would,
/// in the common type of `self` and `rhs`, and then converts the result back to `T`
/// (which may round, or overflow to infinity, if the common type is wider).
/// If the operation fails, `self` is left unchanged.
impl<T: Real> Guarded<T> {
    /// `self = self + rhs`
    #[inline]
    pub fn try_add_assign<R>(&mut self, rhs: R) -> Result<(), NanError>
    where
        R: Operand,
        T: Promote<R::Repr>,
    {
        self.try_assign_op(rhs, Operation::Add, |a, b| a + b)
    }

    /// `self = self - rhs`
    #[inline]
    pub fn try_sub_assign<R>(&mut self, rhs: R) -> Result<(), NanError>
    where
        R: Operand,
        T: Promote<R::Repr>,
    {
        self.try_assign_op(rhs, Operation::Sub, |a, b| a - b)
    }

    /// `self = self * rhs`
    #[inline]
    pub fn try_mul_assign<R>(&mut self, rhs: R) -> Result<(), NanError>
    where
        R: Operand,
        T: Promote<R::Repr>,
    {
        self.try_assign_op(rhs, Operation::Mul, |a, b| a * b)
    }

    /// `self = self / rhs`
    #[inline]
    pub fn try_div_assign<R>(&mut self, rhs: R) -> Result<(), NanError>
    where
        R: Operand,
        T: Promote<R::Repr>,
    {
        self.try_assign_op(rhs, Operation::Div, |a, b| a / b)
    }

    #[inline]
    fn try_assign_op<R>(
        &mut self,
        rhs: R,
        operation: Operation,
        f: impl FnOnce(Common<Self, R>, Common<Self, R>) -> Common<Self, R>,
    ) -> Result<(), NanError>
    where
        R: Operand,
        T: Promote<R::Repr>,
    {
        let result = binary(*self, rhs, operation, f)?;
        *self = result.convert();
        Ok(())
    }
}

impl<T: Real> ops::Neg for Guarded<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_total(-self.into_inner())
    }
}

/// Returns whether the value is zero (of either sign), like `!` applied to a float in C.
impl<T: Real> ops::Not for Guarded<T> {
    type Output = bool;

    #[inline]
    fn not(self) -> Self::Output {
        !self.to_bool()
    }
}
