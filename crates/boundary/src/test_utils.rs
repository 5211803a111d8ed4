use std::{cell::RefCell, collections::HashMap};

use fluidbc_core::{BoundaryGeometry, DirectionSource, GeometryRef, GeometryResolver};
use glam::DVec3;

/// An in-memory kernel whose answers can be changed between calls.
#[derive(Debug, Default)]
pub(crate) struct FakeKernel {
    directions: RefCell<HashMap<GeometryRef, DVec3>>,
    faces: HashMap<GeometryRef, (DVec3, DVec3)>,
}

impl FakeKernel {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_direction(self, reference: &GeometryRef, direction: DVec3) -> Self {
        self.set_direction(reference, direction);
        self
    }

    /// Adds a face sampled at a single point.
    pub(crate) fn with_face(mut self, reference: &GeometryRef, point: DVec3, normal: DVec3) -> Self {
        self.faces.insert(reference.clone(), (point, normal));
        self
    }

    pub(crate) fn set_direction(&self, reference: &GeometryRef, direction: DVec3) {
        self.directions
            .borrow_mut()
            .insert(reference.clone(), direction);
    }
}

impl DirectionSource for FakeKernel {
    fn resolve_direction(&self, reference: &GeometryRef) -> DVec3 {
        self.directions
            .borrow()
            .get(reference)
            .copied()
            .unwrap_or(DVec3::ZERO)
    }
}

impl GeometryResolver for FakeKernel {
    fn resolve(&self, references: &[GeometryRef]) -> Option<BoundaryGeometry> {
        let geometry = BoundaryGeometry::from_pairs(
            references
                .iter()
                .filter_map(|reference| self.faces.get(reference).copied()),
        );
        (!geometry.is_empty()).then_some(geometry)
    }
}
