//! Core types for the fluid boundary property engine.
//!
//! This crate defines the shared abstractions that the boundary controller
//! builds on and that host applications implement:
//!
//! - [`GeometryRef`] — a named sub-element (face, edge, vertex) of a host object
//! - [`BoundaryGeometry`] — sampled points and matching normals for display
//! - [`GeometryResolver`], [`DirectionSource`] — the geometric kernel seams
//! - [`Tolerance`] — the linear tolerance used to detect degenerate vectors
//! - [`Observer`] — receives change events from the controller

pub mod constraint;

mod geometry;
mod observer;
mod resolve;
mod tolerance;

pub use geometry::{BoundaryGeometry, ElementKind, GeometryError, GeometryRef};
pub use observer::Observer;
pub use resolve::{DirectionSource, GeometryResolver};
pub use tolerance::Tolerance;

pub use glam::DVec3;
