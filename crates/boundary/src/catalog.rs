use std::{fmt, str::FromStr};

use crate::Diagnostic;

const INLET: &[&str] = &[
    SubtypeCatalog::DEFAULT,
    "totalPressure",
    "uniformVelocity",
    "flowrate",
];
const WALL: &[&str] = &[SubtypeCatalog::DEFAULT, "fixed"];
const OUTLET: &[&str] = &[
    SubtypeCatalog::DEFAULT,
    "totalPressure",
    "uniformVelocity",
    "flowrate",
];
const INTERFACE: &[&str] = &[
    SubtypeCatalog::DEFAULT,
    "symmetry",
    "wedge",
    "cyclic",
    "empty",
];
const FREESTREAM: &[&str] = &[SubtypeCatalog::DEFAULT, "freestream"];

/// Top-level classification of a fluid boundary.
///
/// Variants are listed in catalog order, and the first one is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum BoundaryCategory {
    #[default]
    Inlet,
    Wall,
    Outlet,
    Interface,
    Freestream,
}

impl BoundaryCategory {
    /// Every category, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Inlet,
        Self::Wall,
        Self::Outlet,
        Self::Interface,
        Self::Freestream,
    ];

    /// Returns the category's canonical name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Inlet => "inlet",
            Self::Wall => "wall",
            Self::Outlet => "outlet",
            Self::Interface => "interface",
            Self::Freestream => "freestream",
        }
    }

    /// Returns the subtypes allowed for this category.
    #[must_use]
    pub fn subtypes(self) -> &'static [&'static str] {
        SubtypeCatalog::subtypes_for(self)
    }
}

impl fmt::Display for BoundaryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundaryCategory {
    type Err = Diagnostic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| Diagnostic::UnknownCategory { name: s.to_owned() })
    }
}

/// The fixed table of subtypes available to each boundary category.
///
/// Every list starts with [`SubtypeCatalog::DEFAULT`].
///
/// # Examples
///
/// ```
/// use fluidbc::{BoundaryCategory, SubtypeCatalog};
///
/// let wall = SubtypeCatalog::subtypes_for(BoundaryCategory::Wall);
/// assert_eq!(wall, ["unspecific", "fixed"]);
///
/// assert!(SubtypeCatalog::subtypes_for_name("outlet").is_ok());
/// assert!(SubtypeCatalog::subtypes_for_name("symmetryPlane").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtypeCatalog;

impl SubtypeCatalog {
    /// The fallback subtype that heads every list.
    pub const DEFAULT: &'static str = "unspecific";

    /// Returns the ordered subtype list for `category`.
    #[must_use]
    pub fn subtypes_for(category: BoundaryCategory) -> &'static [&'static str] {
        match category {
            BoundaryCategory::Inlet => INLET,
            BoundaryCategory::Wall => WALL,
            BoundaryCategory::Outlet => OUTLET,
            BoundaryCategory::Interface => INTERFACE,
            BoundaryCategory::Freestream => FREESTREAM,
        }
    }

    /// Returns the ordered subtype list for a category given by name.
    ///
    /// # Errors
    ///
    /// Returns [`Diagnostic::UnknownCategory`] if `name` is not a category.
    pub fn subtypes_for_name(name: &str) -> Result<&'static [&'static str], Diagnostic> {
        name.parse().map(Self::subtypes_for)
    }

    /// Looks up `subtype` in the list for `category`.
    ///
    /// Returns the catalog's own `'static` copy of the name if present.
    #[must_use]
    pub fn find(category: BoundaryCategory, subtype: &str) -> Option<&'static str> {
        Self::subtypes_for(category)
            .iter()
            .find(|name| **name == subtype)
            .copied()
    }
}
