use fluidbc_core::{Tolerance, constraint::ConstraintError};
use thiserror::Error;

use crate::BoundaryCategory;

/// Configuration for a [`BoundaryController`](crate::BoundaryController).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ControllerConfig {
    tolerance: Tolerance,
    initial_category: BoundaryCategory,
    hint_from_references: bool,
}

/// Errors that can occur when validating a controller config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and strictly positive")]
    Tolerance(#[source] ConstraintError),
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            initial_category: BoundaryCategory::default(),
            hint_from_references: true,
        }
    }
}

impl ControllerConfig {
    /// Creates a config with a validated tolerance.
    ///
    /// Surface hints are derived from references, as in the default config.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and strictly positive.
    pub fn new(tolerance: f64, initial_category: BoundaryCategory) -> Result<Self, ConfigError> {
        let tolerance = Tolerance::new(tolerance).map_err(ConfigError::Tolerance)?;
        Ok(Self {
            tolerance,
            initial_category,
            ..Self::default()
        })
    }

    /// Returns `self` with the given tolerance.
    #[must_use]
    pub fn with_tolerance(self, tolerance: Tolerance) -> Self {
        Self { tolerance, ..self }
    }

    /// Returns `self` with the given initial category.
    #[must_use]
    pub fn with_initial_category(self, initial_category: BoundaryCategory) -> Self {
        Self {
            initial_category,
            ..self
        }
    }

    /// Returns `self` with hint derivation from references switched on or off.
    #[must_use]
    pub fn with_hint_from_references(self, hint_from_references: bool) -> Self {
        Self {
            hint_from_references,
            ..self
        }
    }

    /// Returns the length below which a direction counts as undefined.
    #[must_use]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Returns the category a new boundary starts with.
    ///
    /// The starting subtype domain is always this category's catalog list.
    #[must_use]
    pub fn initial_category(&self) -> BoundaryCategory {
        self.initial_category
    }

    /// Returns whether resolved references also update the surface normal hint.
    ///
    /// When enabled, the first normal of newly resolved geometry becomes the
    /// hint, which orients the boundary while no direction reference is set.
    #[must_use]
    pub fn hint_from_references(&self) -> bool {
        self.hint_from_references
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn zero_tolerance_is_rejected() {
        let err = serde_json::from_str::<ControllerConfig>(r#"{"tolerance":0.0}"#).unwrap_err();
        assert!(err.to_string().contains("value must not be zero"));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: ControllerConfig =
            serde_json::from_str(r#"{"initial_category":"wall"}"#).unwrap();

        assert_eq!(config.initial_category(), BoundaryCategory::Wall);
        assert_eq!(config.tolerance(), Tolerance::default());
        assert!(config.hint_from_references());
    }

    #[test]
    fn round_trips_through_json() {
        let config = ControllerConfig::new(0.5, BoundaryCategory::Outlet)
            .unwrap()
            .with_hint_from_references(false);

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"tolerance":0.5,"initial_category":"outlet","hint_from_references":false}"#
        );
        assert_eq!(serde_json::from_str::<ControllerConfig>(&json).unwrap(), config);
    }
}
