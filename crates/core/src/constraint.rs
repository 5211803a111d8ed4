//! Type-level numeric constraints checked once at construction.
//!
//! A [`Constrained<T, C>`] value is known to satisfy the constraint `C` for as
//! long as it exists, so code receiving one never needs to re-check it.
//!
//! # Provided Constraints
//!
//! - [`StrictlyPositive`]: finite and greater than zero
//!
//! Custom invariants can be added by implementing [`Constraint<T>`] for a
//! zero-sized marker type.

use std::marker::PhantomData;

use thiserror::Error;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    Infinite,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use fluidbc_core::constraint::{Constrained, StrictlyPositive};
///
/// let eps = Constrained::<f64, StrictlyPositive>::new(1e-7).unwrap();
/// assert_eq!(eps.into_inner(), 1e-7);
///
/// assert!(Constrained::<f64, StrictlyPositive>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Marker type for values that are finite and strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<f64, StrictlyPositive>`] if the value is valid.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value is zero, negative, NaN, or infinite.
    pub fn new(value: f64) -> ConstraintResult<Constrained<f64, StrictlyPositive>> {
        Constrained::new(value)
    }
}

impl Constraint<f64> for StrictlyPositive {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else if *value < 0.0 {
            Err(ConstraintError::Negative)
        } else if *value == 0.0 {
            Err(ConstraintError::Zero)
        } else {
            Ok(())
        }
    }
}
