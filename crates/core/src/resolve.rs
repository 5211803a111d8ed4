use glam::DVec3;

use crate::{BoundaryGeometry, GeometryRef};

/// Turns a set of references into display geometry.
///
/// Implemented by the host's geometric kernel.
pub trait GeometryResolver {
    /// Samples points and outward normals on the referenced elements.
    ///
    /// Returns `None` (or empty geometry) when `references` is empty or none of
    /// them can be resolved.
    fn resolve(&self, references: &[GeometryRef]) -> Option<BoundaryGeometry>;
}

/// Turns a single reference into a direction vector.
///
/// Implemented by the host's geometric kernel.
/// For example, an edge yields its line direction and a planar face its normal.
pub trait DirectionSource {
    /// Returns the direction of `reference`, or the zero vector if it has none.
    fn resolve_direction(&self, reference: &GeometryRef) -> DVec3;
}
