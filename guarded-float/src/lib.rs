//! A floating-point number type which is never NaN, and which reports an error instead of
//! silently producing NaN.
//!
//! [`Guarded<T>`] wraps an `f32` or `f64`. The value is checked when it is constructed, when it
//! is assigned, and at the end of every arithmetic operation or math function; any NaN is
//! reported as a [`NanError`]:
//!
//! * [`NanError::InvalidArgument`] when a value supplied by the caller is NaN, and
//! * [`NanError::Arithmetic`] when a computation with valid inputs has an undefined result,
//!   such as `0 / 0` or `∞ - ∞`.
//!
//! Infinities are permitted.
//!
//! # Example
//!
//! ```
//! use guarded_float::{Guarded, NanError};
//!
//! let mut x = (Guarded::new(12.0_f32)? + 10.0_f64)?;
//! x.try_add_assign(1.0_f64)?;
//! assert_eq!(*x, 23.0);
//!
//! let inf = Guarded::new(f32::INFINITY)?;
//! assert!(matches!(inf - inf, Err(NanError::Arithmetic(_))));
//! # Ok::<(), NanError>(())
//! ```
//!
//! # Mixed operand types
//!
//! Operations accept another [`Guarded`] of either representation, or a raw primitive number
//! (any float or integer type). The result is computed in, and wrapped as, the common type of
//! the two operands; see [`Promote`] for the rules. Operations between two raw numbers are
//! not this crate’s business.

#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![cfg_attr(
    not(any(test, feature = "arbitrary")),
    warn(clippy::std_instead_of_core, clippy::std_instead_of_alloc)
)]
#![warn(clippy::missing_inline_in_public_items)]

#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;

mod arithmetic;

mod compare;
pub use compare::compare;

mod errors;
pub use errors::*;

mod functions;

mod guarded;
pub use guarded::*;

mod repr;
pub use repr::*;

#[cfg(test)]
mod testing;
#[cfg(test)]
mod tests;
