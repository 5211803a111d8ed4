//! Natural and effective boundary directions.
//!
//! The *natural* direction comes straight from geometry: either the element
//! named by the direction reference, or a surface-normal hint when no
//! reference is set. The *effective* direction is the natural direction after
//! the user's reversal flag is applied, and is what gets displayed and used.
//!
//! Geometry can fail to produce a direction, for example while a reference
//! briefly points at nothing during an edit. Such a result is not an error.
//! The natural direction simply stays [`NaturalDirection::Undefined`] and is
//! retried on the next trigger that could resolve it.

use fluidbc_core::{DirectionSource, GeometryRef, Tolerance};
use glam::DVec3;

/// The cached, un-reversed direction derived from geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum NaturalDirection {
    /// No usable direction is known yet.
    #[default]
    Undefined,
    /// A direction longer than the working tolerance.
    Defined(DVec3),
}

impl NaturalDirection {
    /// Classifies a raw vector coming back from geometry.
    #[must_use]
    pub fn from_vector(v: DVec3, tolerance: Tolerance) -> Self {
        if tolerance.is_degenerate(v) {
            Self::Undefined
        } else {
            Self::Defined(v)
        }
    }

    #[must_use]
    pub fn is_defined(self) -> bool {
        matches!(self, Self::Defined(_))
    }

    /// Returns the vector, if defined.
    #[must_use]
    pub fn vector(self) -> Option<DVec3> {
        match self {
            Self::Defined(v) => Some(v),
            Self::Undefined => None,
        }
    }

    /// Returns the effective direction for the given reversal flag, if defined.
    #[must_use]
    pub fn oriented(self, reversed: bool) -> Option<DVec3> {
        self.vector().map(|v| if reversed { -v } else { v })
    }
}

/// Keeps the natural direction and derives effective directions from it.
///
/// Each handler returns `Some(v)` when the effective direction must be
/// rewritten to `v`, or `None` when it must be left alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionResolver {
    tolerance: Tolerance,
    natural: NaturalDirection,
}

impl DirectionResolver {
    /// Creates a resolver with an undefined natural direction.
    #[must_use]
    pub fn new(tolerance: Tolerance) -> Self {
        Self {
            tolerance,
            natural: NaturalDirection::Undefined,
        }
    }

    #[must_use]
    pub fn natural(&self) -> NaturalDirection {
        self.natural
    }

    #[must_use]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Handles a new direction reference.
    ///
    /// A missing or degenerate reference leaves both directions unchanged.
    pub fn on_reference_changed<S>(
        &mut self,
        source: &S,
        reference: Option<&GeometryRef>,
        reversed: bool,
    ) -> Option<DVec3>
    where
        S: DirectionSource + ?Sized,
    {
        let natural = self.resolve(source, reference);
        if !natural.is_defined() {
            tracing::debug!(
                reference = ?reference.map(ToString::to_string),
                "direction reference did not resolve, keeping previous direction"
            );
            return None;
        }
        self.natural = natural;
        natural.oriented(reversed)
    }

    /// Handles a change of the reversal flag.
    ///
    /// An undefined natural direction is first re-resolved from `reference`.
    /// The effective direction is only rewritten if it does not already point
    /// the requested way, so toggling twice restores it exactly.
    pub fn on_reversed_changed<S>(
        &mut self,
        source: &S,
        reference: Option<&GeometryRef>,
        reversed: bool,
        effective: DVec3,
    ) -> Option<DVec3>
    where
        S: DirectionSource + ?Sized,
    {
        if !self.natural.is_defined() {
            self.natural = self.resolve(source, reference);
        }

        let Some(target) = self.natural.oriented(reversed) else {
            tracing::debug!("natural direction still undefined, reversal has no effect");
            return None;
        };
        (target != effective).then_some(target)
    }

    /// Handles a new surface-normal hint.
    ///
    /// Callers only invoke this while no direction reference is set.
    /// A degenerate hint leaves both directions unchanged.
    pub fn on_fallback_hint_changed(&mut self, hint: DVec3, reversed: bool) -> Option<DVec3> {
        let natural = NaturalDirection::from_vector(hint, self.tolerance);
        if !natural.is_defined() {
            tracing::debug!(?hint, "surface normal hint is degenerate, ignoring it");
            return None;
        }
        self.natural = natural;
        natural.oriented(reversed)
    }

    fn resolve<S>(&self, source: &S, reference: Option<&GeometryRef>) -> NaturalDirection
    where
        S: DirectionSource + ?Sized,
    {
        reference.map_or(NaturalDirection::Undefined, |reference| {
            NaturalDirection::from_vector(source.resolve_direction(reference), self.tolerance)
        })
    }
}

impl Default for DirectionResolver {
    fn default() -> Self {
        Self::new(Tolerance::default())
    }
}
