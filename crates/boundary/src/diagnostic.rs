use thiserror::Error;

use crate::BoundaryCategory;

/// A non-fatal problem reported while handling a property edit.
///
/// Diagnostics never abort a change cycle.
/// The rejected edit leaves every property as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("boundary category `{name}` is not defined")]
    UnknownCategory { name: String },

    #[error("subtype `{subtype}` is not defined for a {category} boundary")]
    UnknownSubtype {
        subtype: String,
        category: BoundaryCategory,
    },
}
