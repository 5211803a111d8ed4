//! Reactive property engine for CFD fluid boundary conditions.
//!
//! A fluid boundary has a handful of user-editable properties: a category
//! (inlet, wall, ...), a category-dependent subtype, a scalar value, an
//! optional direction reference, and a reversal flag. From these it derives a
//! subtype domain, an effective direction, and display points and normals.
//! [`BoundaryController`] keeps the derived values correct whichever input
//! changed last.
//!
//! Geometry comes from the host through the
//! [`GeometryResolver`](fluidbc_core::GeometryResolver) and
//! [`DirectionSource`](fluidbc_core::DirectionSource) traits.

mod catalog;
mod config;
mod controller;
mod diagnostic;

pub mod direction;
pub mod value;

#[cfg(test)]
mod test_utils;

pub use catalog::{BoundaryCategory, SubtypeCatalog};
pub use config::{ConfigError, ControllerConfig};
pub use controller::{
    BoundaryController, BoundaryProperties, Edit, Event, Outcome, Output, Property,
};
pub use diagnostic::Diagnostic;
