use std::collections::HashMap;

use fluidbc_core::{
    BoundaryGeometry, DVec3, DirectionSource, ElementKind, GeometryRef, GeometryResolver,
};

/// A geometric kernel backed by lookup tables, used for integration tests.
///
/// Faces are sampled at a fixed set of points sharing one normal.
/// Edges resolve to their stored line direction, faces to their normal.
/// Vertices and unknown references have no direction.
#[derive(Debug, Default, Clone)]
pub struct TableKernel {
    faces: HashMap<GeometryRef, Face>,
    edges: HashMap<GeometryRef, DVec3>,
}

#[derive(Debug, Clone)]
struct Face {
    samples: Vec<DVec3>,
    normal: DVec3,
}

impl TableKernel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a planar face sampled at `samples`.
    #[must_use]
    pub fn with_face(
        mut self,
        object: &str,
        element: &str,
        samples: impl IntoIterator<Item = DVec3>,
        normal: DVec3,
    ) -> Self {
        let face = Face {
            samples: samples.into_iter().collect(),
            normal,
        };
        self.faces.insert(GeometryRef::new(object, element), face);
        self
    }

    /// Adds a straight edge running along `direction`.
    #[must_use]
    pub fn with_edge(mut self, object: &str, element: &str, direction: DVec3) -> Self {
        self.edges
            .insert(GeometryRef::new(object, element), direction);
        self
    }
}

impl GeometryResolver for TableKernel {
    fn resolve(&self, references: &[GeometryRef]) -> Option<BoundaryGeometry> {
        let geometry = BoundaryGeometry::from_pairs(
            references
                .iter()
                .filter_map(|reference| self.faces.get(reference))
                .flat_map(|face| face.samples.iter().map(|&point| (point, face.normal))),
        );
        (!geometry.is_empty()).then_some(geometry)
    }
}

impl DirectionSource for TableKernel {
    fn resolve_direction(&self, reference: &GeometryRef) -> DVec3 {
        let found = match reference.kind() {
            ElementKind::Edge => self.edges.get(reference).copied(),
            ElementKind::Face => self.faces.get(reference).map(|face| face.normal),
            ElementKind::Vertex | ElementKind::Other => None,
        };
        found.unwrap_or(DVec3::ZERO)
    }
}
