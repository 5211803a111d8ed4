use fluidbc_core::{BoundaryGeometry, GeometryRef};
use glam::DVec3;

use crate::{
    BoundaryCategory, Diagnostic, SubtypeCatalog,
    value::{BoundaryQuantity, interpret},
};

/// The full property set of one fluid boundary.
///
/// Read access is public; edits go through
/// [`BoundaryController`](crate::BoundaryController) so derived values stay
/// consistent with their inputs.
///
/// The `with_*` builders exist to rebuild a saved property set for
/// [`BoundaryController::restore`](crate::BoundaryController::restore).
/// They store values verbatim and do not recompute anything derived.
///
/// # Examples
///
/// ```
/// use fluidbc::{BoundaryCategory, BoundaryProperties};
/// use fluidbc_core::DVec3;
///
/// let saved = BoundaryProperties::new(BoundaryCategory::Wall)
///     .with_subtype("fixed")
///     .unwrap()
///     .with_reversed(true)
///     .with_effective_direction(DVec3::NEG_Z);
///
/// assert_eq!(saved.subtype(), "fixed");
/// assert_eq!(saved.effective_direction(), DVec3::NEG_Z);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryProperties {
    pub(super) category: BoundaryCategory,
    pub(super) subtype_domain: &'static [&'static str],
    pub(super) subtype: &'static str,
    pub(super) value: f64,
    pub(super) references: Vec<GeometryRef>,
    pub(super) direction_reference: Option<GeometryRef>,
    pub(super) reversed: bool,
    pub(super) surface_normal_hint: Option<DVec3>,
    pub(super) effective_direction: DVec3,
    pub(super) points: Vec<DVec3>,
    pub(super) normals: Vec<DVec3>,
}

impl BoundaryProperties {
    /// The effective direction before any geometry is known.
    pub const DEFAULT_DIRECTION: DVec3 = DVec3::Z;

    /// Creates the default property set for a boundary of `category`.
    #[must_use]
    pub fn new(category: BoundaryCategory) -> Self {
        Self {
            category,
            subtype_domain: SubtypeCatalog::subtypes_for(category),
            subtype: SubtypeCatalog::DEFAULT,
            value: 0.0,
            references: Vec::new(),
            direction_reference: None,
            reversed: false,
            surface_normal_hint: None,
            effective_direction: Self::DEFAULT_DIRECTION,
            points: Vec::new(),
            normals: Vec::new(),
        }
    }

    /// Returns `self` with the given subtype.
    ///
    /// # Errors
    ///
    /// Returns [`Diagnostic::UnknownSubtype`] if `subtype` is not in the
    /// domain of the current category.
    pub fn with_subtype(self, subtype: &str) -> Result<Self, Diagnostic> {
        let Some(subtype) = SubtypeCatalog::find(self.category, subtype) else {
            return Err(Diagnostic::UnknownSubtype {
                subtype: subtype.to_owned(),
                category: self.category,
            });
        };
        Ok(Self { subtype, ..self })
    }

    /// Returns `self` with the given value, keeping other fields unchanged.
    #[must_use]
    pub fn with_value(self, value: f64) -> Self {
        Self { value, ..self }
    }

    /// Returns `self` with the given references, keeping other fields unchanged.
    #[must_use]
    pub fn with_references(self, references: Vec<GeometryRef>) -> Self {
        Self { references, ..self }
    }

    /// Returns `self` with the given direction reference, keeping other fields unchanged.
    #[must_use]
    pub fn with_direction_reference(self, direction_reference: Option<GeometryRef>) -> Self {
        Self {
            direction_reference,
            ..self
        }
    }

    /// Returns `self` with the given reversal flag, keeping other fields unchanged.
    #[must_use]
    pub fn with_reversed(self, reversed: bool) -> Self {
        Self { reversed, ..self }
    }

    /// Returns `self` with the given surface normal hint, keeping other fields unchanged.
    #[must_use]
    pub fn with_surface_normal_hint(self, surface_normal_hint: Option<DVec3>) -> Self {
        Self {
            surface_normal_hint,
            ..self
        }
    }

    /// Returns `self` with the given effective direction, keeping other fields unchanged.
    #[must_use]
    pub fn with_effective_direction(self, effective_direction: DVec3) -> Self {
        Self {
            effective_direction,
            ..self
        }
    }

    /// Returns `self` with points and normals taken from `geometry`.
    #[must_use]
    pub fn with_geometry(self, geometry: BoundaryGeometry) -> Self {
        let (points, normals) = geometry.into_parts();
        Self {
            points,
            normals,
            ..self
        }
    }

    #[must_use]
    pub fn category(&self) -> BoundaryCategory {
        self.category
    }

    /// Returns the subtypes currently allowed.
    #[must_use]
    pub fn subtype_domain(&self) -> &'static [&'static str] {
        self.subtype_domain
    }

    #[must_use]
    pub fn subtype(&self) -> &'static str {
        self.subtype
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the value read as the quantity the subtype implies.
    #[must_use]
    pub fn interpreted_value(&self) -> Option<BoundaryQuantity> {
        interpret(self.subtype, self.value)
    }

    #[must_use]
    pub fn references(&self) -> &[GeometryRef] {
        &self.references
    }

    #[must_use]
    pub fn direction_reference(&self) -> Option<&GeometryRef> {
        self.direction_reference.as_ref()
    }

    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    #[must_use]
    pub fn surface_normal_hint(&self) -> Option<DVec3> {
        self.surface_normal_hint
    }

    #[must_use]
    pub fn effective_direction(&self) -> DVec3 {
        self.effective_direction
    }

    /// Returns the points where boundary markers are drawn.
    #[must_use]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Returns the normal at each of [`points`](Self::points), in the same order.
    #[must_use]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }
}

impl Default for BoundaryProperties {
    fn default() -> Self {
        Self::new(BoundaryCategory::default())
    }
}
