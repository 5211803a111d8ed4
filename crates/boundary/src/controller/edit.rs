use fluidbc_core::GeometryRef;
use glam::DVec3;

use crate::BoundaryCategory;

/// Identifies one editable property of a boundary.
///
/// This is the key of the controller's dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Category,
    Subtype,
    Value,
    References,
    DirectionReference,
    Reversed,
    SurfaceNormalHint,
}

/// A single external edit to a boundary's properties.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    Category(BoundaryCategory),
    /// A category given by name, as typed by a user or read from a document.
    CategoryName(String),
    Subtype(String),
    Value(f64),
    References(Vec<GeometryRef>),
    DirectionReference(Option<GeometryRef>),
    Reversed(bool),
    SurfaceNormalHint(Option<DVec3>),
}

impl Edit {
    /// Returns the property this edit writes.
    #[must_use]
    pub fn property(&self) -> Property {
        match self {
            Self::Category(_) | Self::CategoryName(_) => Property::Category,
            Self::Subtype(_) => Property::Subtype,
            Self::Value(_) => Property::Value,
            Self::References(_) => Property::References,
            Self::DirectionReference(_) => Property::DirectionReference,
            Self::Reversed(_) => Property::Reversed,
            Self::SurfaceNormalHint(_) => Property::SurfaceNormalHint,
        }
    }
}
