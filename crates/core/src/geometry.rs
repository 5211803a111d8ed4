use std::fmt;

use glam::DVec3;
use thiserror::Error;

/// A reference to one sub-element of a host object, such as `Pipe:Face3`.
///
/// The controller treats references as opaque keys.
/// Interpreting them is the geometric kernel's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryRef {
    pub object: String,
    pub element: String,
}

/// The kind of sub-element a [`GeometryRef`] names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Face,
    Edge,
    Vertex,
    Other,
}

impl GeometryRef {
    /// Creates a reference to `element` of `object`.
    pub fn new(object: impl Into<String>, element: impl Into<String>) -> Self {
        Self {
            object: object.into(),
            element: element.into(),
        }
    }

    /// Classifies the referenced element by its name prefix.
    ///
    /// ```
    /// use fluidbc_core::{ElementKind, GeometryRef};
    ///
    /// assert_eq!(GeometryRef::new("Pipe", "Face3").kind(), ElementKind::Face);
    /// assert_eq!(GeometryRef::new("Pipe", "Edge12").kind(), ElementKind::Edge);
    /// assert_eq!(GeometryRef::new("Sketch", "Axis").kind(), ElementKind::Other);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        let prefix = self.element.trim_end_matches(|c: char| c.is_ascii_digit());
        match prefix {
            "Face" => ElementKind::Face,
            "Edge" => ElementKind::Edge,
            "Vertex" => ElementKind::Vertex,
            _ => ElementKind::Other,
        }
    }
}

impl fmt::Display for GeometryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.object, self.element)
    }
}

/// Errors that can occur when building a [`BoundaryGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("got {points} points but {normals} normals")]
    LengthMismatch { points: usize, normals: usize },
}

/// Points on a boundary and the surface normal at each point.
///
/// Points and normals are paired by position.
/// The constructor guarantees both sequences have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryGeometry {
    points: Vec<DVec3>,
    normals: Vec<DVec3>,
}

impl BoundaryGeometry {
    /// Creates geometry from paired points and normals.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::LengthMismatch`] if the sequences differ in length.
    pub fn new(points: Vec<DVec3>, normals: Vec<DVec3>) -> Result<Self, GeometryError> {
        if points.len() != normals.len() {
            return Err(GeometryError::LengthMismatch {
                points: points.len(),
                normals: normals.len(),
            });
        }
        Ok(Self { points, normals })
    }

    /// Creates geometry from an iterator of `(point, normal)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (DVec3, DVec3)>) -> Self {
        let (points, normals) = pairs.into_iter().unzip();
        Self { points, normals }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    #[must_use]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Consumes the geometry and returns `(points, normals)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<DVec3>, Vec<DVec3>) {
        (self.points, self.normals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_kinds() {
        assert_eq!(GeometryRef::new("Box", "Vertex7").kind(), ElementKind::Vertex);
        assert_eq!(GeometryRef::new("Box", "Face").kind(), ElementKind::Face);
        assert_eq!(GeometryRef::new("Box", "Solid1").kind(), ElementKind::Other);
        assert_eq!(GeometryRef::new("Box", "").kind(), ElementKind::Other);
    }

    #[test]
    fn display_joins_object_and_element() {
        assert_eq!(GeometryRef::new("Pipe", "Face3").to_string(), "Pipe:Face3");
    }

    #[test]
    fn rejects_unpaired_normals() {
        let err = BoundaryGeometry::new(vec![DVec3::ZERO, DVec3::X], vec![DVec3::Z]).unwrap_err();
        assert_eq!(
            err,
            GeometryError::LengthMismatch {
                points: 2,
                normals: 1
            }
        );
    }

    #[test]
    fn pairs_keep_order() {
        let geometry = BoundaryGeometry::from_pairs([(DVec3::X, DVec3::Z), (DVec3::Y, DVec3::NEG_Z)]);

        assert_eq!(geometry.len(), 2);
        assert_eq!(geometry.points(), &[DVec3::X, DVec3::Y]);
        assert_eq!(geometry.normals(), &[DVec3::Z, DVec3::NEG_Z]);

        let (points, normals) = geometry.into_parts();
        assert_eq!(points.len(), normals.len());
    }

    #[test]
    fn default_is_empty() {
        assert!(BoundaryGeometry::default().is_empty());
    }
}
