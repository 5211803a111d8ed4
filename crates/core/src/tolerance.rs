use glam::DVec3;

use crate::constraint::{Constrained, ConstraintError, ConstraintResult, StrictlyPositive};

/// A strictly positive linear tolerance in model units.
///
/// Vectors shorter than the tolerance are treated as degenerate: they carry no
/// usable direction and must not overwrite a previously known one.
///
/// # Examples
///
/// ```
/// use fluidbc_core::{DVec3, Tolerance};
///
/// let tol = Tolerance::default();
/// assert!(tol.is_degenerate(DVec3::ZERO));
/// assert!(tol.is_degenerate(DVec3::new(0.0, 0.0, 1e-9)));
/// assert!(!tol.is_degenerate(DVec3::Z));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Tolerance(Constrained<f64, StrictlyPositive>);

impl Tolerance {
    /// The geometric kernel's standard confusion distance.
    pub const CONFUSION: f64 = 1e-7;

    /// Creates a tolerance from a raw value.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `value` is not finite and strictly positive.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        StrictlyPositive::new(value).map(Self)
    }

    /// Returns the tolerance as a plain `f64`.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0.into_inner()
    }

    /// Returns `true` if `v` is too short, or too malformed, to define a direction.
    #[must_use]
    pub fn is_degenerate(self, v: DVec3) -> bool {
        !v.is_finite() || v.length() < self.value()
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        // Known-good value, unwrap is safe
        Self::new(Self::CONFUSION).unwrap()
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = ConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tolerance> for f64 {
    fn from(tol: Tolerance) -> Self {
        tol.value()
    }
}
