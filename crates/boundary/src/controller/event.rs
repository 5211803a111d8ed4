use crate::Diagnostic;

use super::{BoundaryProperties, Property};

/// A property written by the controller as a consequence of an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Output {
    SubtypeDomain,
    Subtype,
    SurfaceNormalHint,
    Points,
    Normals,
    EffectiveDirection,
}

/// The result of one pass through the dispatch logic.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The property whose change was handled.
    pub property: Property,
    /// Derived properties rewritten during the pass, in write order.
    pub changed: Vec<Output>,
    /// A problem that caused the edit to be rejected, if any.
    pub diagnostic: Option<Diagnostic>,
}

impl Outcome {
    pub(super) fn new(property: Property) -> Self {
        Self {
            property,
            changed: Vec::new(),
            diagnostic: None,
        }
    }

    pub(super) fn rejected(property: Property, diagnostic: Diagnostic) -> Self {
        Self {
            diagnostic: Some(diagnostic),
            ..Self::new(property)
        }
    }

    /// Returns `true` if nothing derived was rewritten.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.changed.is_empty()
    }

    /// Returns `true` if `output` was rewritten during the pass.
    #[must_use]
    pub fn wrote(&self, output: Output) -> bool {
        self.changed.contains(&output)
    }
}

/// Events sent to an [`Observer`](fluidbc_core::Observer) after each pass.
///
/// `Changed` is how a host learns that it should redraw.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// A derived property was rewritten. `properties` holds the new values.
    Changed {
        output: Output,
        properties: &'a BoundaryProperties,
    },
    /// An edit was rejected.
    Diagnostic(&'a Diagnostic),
}
