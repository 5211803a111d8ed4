//! The reactive dispatcher that keeps a boundary's derived properties valid.
//!
//! Each [`Edit`] writes exactly one input property and then runs one pass
//! through a dispatch table keyed by [`Property`]:
//!
//! | Changed property     | Handler                                                   |
//! |----------------------|-----------------------------------------------------------|
//! | `Category`           | replace the subtype domain, keep or reset the subtype     |
//! | `References`         | replace points and normals together, maybe update the hint |
//! | `DirectionReference` | re-resolve the natural direction                          |
//! | `Reversed`           | re-orient the effective direction                         |
//! | `SurfaceNormalHint`  | use the hint as natural direction if no reference is set  |
//! | `Subtype`, `Value`   | nothing derived                                           |
//!
//! Writes made by a handler never re-enter the dispatcher, with one exception.
//! When hints are derived from references, the references handler forwards
//! the new hint to the hint handler. That is a single extra level, and the hint
//! handler dispatches nothing further.
//!
//! Nothing fails out of a pass. Rejected edits produce a [`Diagnostic`] and
//! leave all properties as they were.

mod edit;
mod event;
mod properties;


pub use edit::{Edit, Property};
pub use event::{Event, Outcome, Output};
pub use properties::BoundaryProperties;

use fluidbc_core::{DirectionSource, GeometryResolver, Observer};
use glam::DVec3;

use crate::{
    BoundaryCategory, ControllerConfig, Diagnostic, SubtypeCatalog,
    direction::{DirectionResolver, NaturalDirection},
};

/// Owns a boundary's properties and reacts to every edit.
///
/// `K` is the host's geometric kernel.
///
/// # Examples
///
/// ```
/// use fluidbc::{BoundaryCategory, BoundaryController, Edit};
/// use fluidbc_core::{BoundaryGeometry, DVec3, DirectionSource, GeometryRef, GeometryResolver};
///
/// struct Kernel;
///
/// impl GeometryResolver for Kernel {
///     fn resolve(&self, _references: &[GeometryRef]) -> Option<BoundaryGeometry> {
///         None
///     }
/// }
///
/// impl DirectionSource for Kernel {
///     fn resolve_direction(&self, _reference: &GeometryRef) -> DVec3 {
///         DVec3::X
///     }
/// }
///
/// let mut bc = BoundaryController::new(Kernel);
/// bc.apply(Edit::Category(BoundaryCategory::Wall));
/// assert_eq!(bc.properties().subtype_domain(), ["unspecific", "fixed"]);
///
/// bc.apply(Edit::DirectionReference(Some(GeometryRef::new("Pipe", "Edge1"))));
/// bc.apply(Edit::Reversed(true));
/// assert_eq!(bc.properties().effective_direction(), DVec3::NEG_X);
/// ```
#[derive(Debug)]
pub struct BoundaryController<K> {
    kernel: K,
    config: ControllerConfig,
    properties: BoundaryProperties,
    direction: DirectionResolver,
}

impl<K> BoundaryController<K>
where
    K: GeometryResolver + DirectionSource,
{
    /// Creates a controller with the default config.
    pub fn new(kernel: K) -> Self {
        Self::with_config(kernel, ControllerConfig::default())
    }

    /// Creates a controller whose properties start from `config`.
    pub fn with_config(kernel: K, config: ControllerConfig) -> Self {
        Self {
            kernel,
            config,
            properties: BoundaryProperties::new(config.initial_category()),
            direction: DirectionResolver::new(config.tolerance()),
        }
    }

    /// Creates a controller around a previously saved property set.
    ///
    /// The properties are taken as-is, including derived values such as
    /// points and the effective direction, so a boundary whose geometry no
    /// longer resolves still shows what was saved. The natural direction is
    /// working state and starts undefined; it is recovered lazily by the next
    /// handler that needs it.
    pub fn restore(kernel: K, config: ControllerConfig, properties: BoundaryProperties) -> Self {
        Self {
            kernel,
            config,
            properties,
            direction: DirectionResolver::new(config.tolerance()),
        }
    }

    #[must_use]
    pub fn properties(&self) -> &BoundaryProperties {
        &self.properties
    }

    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    #[must_use]
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Returns the cached natural direction.
    ///
    /// This is working state only and is not part of the property set.
    #[must_use]
    pub fn natural_direction(&self) -> NaturalDirection {
        self.direction.natural()
    }

    /// Applies one edit and updates every dependent property.
    pub fn apply(&mut self, edit: Edit) -> Outcome {
        self.apply_observed(edit, &mut ())
    }

    /// Applies one edit and reports each rewrite to `observer`.
    pub fn apply_observed<O>(&mut self, edit: Edit, observer: &mut O) -> Outcome
    where
        O: for<'a> Observer<Event<'a>>,
    {
        let property = edit.property();
        let outcome = match self.store(edit) {
            Ok(()) => self.dispatch(property),
            Err(diagnostic) => {
                tracing::warn!(?property, %diagnostic, "boundary edit rejected");
                Outcome::rejected(property, diagnostic)
            }
        };
        self.notify(&outcome, observer);
        outcome
    }

    /// Re-runs the handler for `property` against the stored values.
    ///
    /// Hosts call this after [`restore`](Self::restore), or when the kernel's
    /// geometry changed underneath unchanged references.
    pub fn on_changed(&mut self, property: Property) -> Outcome {
        self.on_changed_observed(property, &mut ())
    }

    /// Like [`on_changed`](Self::on_changed), reporting rewrites to `observer`.
    pub fn on_changed_observed<O>(&mut self, property: Property, observer: &mut O) -> Outcome
    where
        O: for<'a> Observer<Event<'a>>,
    {
        let outcome = self.dispatch(property);
        self.notify(&outcome, observer);
        outcome
    }

    /// Writes the edited input property, or rejects the edit.
    fn store(&mut self, edit: Edit) -> Result<(), Diagnostic> {
        let props = &mut self.properties;
        match edit {
            Edit::Category(category) => props.category = category,
            Edit::CategoryName(name) => props.category = name.parse::<BoundaryCategory>()?,
            Edit::Subtype(subtype) => {
                let Some(&name) = props.subtype_domain.iter().find(|&&name| name == subtype)
                else {
                    return Err(Diagnostic::UnknownSubtype {
                        subtype,
                        category: props.category,
                    });
                };
                props.subtype = name;
            }
            Edit::Value(value) => props.value = value,
            Edit::References(references) => props.references = references,
            Edit::DirectionReference(reference) => props.direction_reference = reference,
            Edit::Reversed(reversed) => props.reversed = reversed,
            Edit::SurfaceNormalHint(hint) => props.surface_normal_hint = hint,
        }
        Ok(())
    }

    fn dispatch(&mut self, property: Property) -> Outcome {
        let mut outcome = Outcome::new(property);
        match property {
            Property::Category => self.on_category_changed(&mut outcome),
            Property::References => self.on_references_changed(&mut outcome),
            Property::DirectionReference => self.on_direction_reference_changed(&mut outcome),
            Property::Reversed => self.on_reversed_changed(&mut outcome),
            Property::SurfaceNormalHint => self.on_hint_changed(&mut outcome),
            Property::Subtype | Property::Value => {}
        }
        tracing::debug!(?property, changed = ?outcome.changed, "boundary property handled");
        outcome
    }

    fn on_category_changed(&mut self, outcome: &mut Outcome) {
        let props = &mut self.properties;
        props.subtype_domain = SubtypeCatalog::subtypes_for(props.category);
        outcome.changed.push(Output::SubtypeDomain);

        let subtype = SubtypeCatalog::find(props.category, props.subtype)
            .unwrap_or(SubtypeCatalog::DEFAULT);
        if subtype != props.subtype {
            tracing::debug!(
                previous = props.subtype,
                category = %props.category,
                "subtype not available for new category, resetting"
            );
            props.subtype = subtype;
            outcome.changed.push(Output::Subtype);
        }
    }

    fn on_references_changed(&mut self, outcome: &mut Outcome) {
        let Some(geometry) = self
            .kernel
            .resolve(&self.properties.references)
            .filter(|geometry| !geometry.is_empty())
        else {
            tracing::debug!(
                references = self.properties.references.len(),
                "references did not resolve, keeping previous points"
            );
            return;
        };

        let (points, normals) = geometry.into_parts();
        let first_normal = normals.first().copied();
        self.properties.points = points;
        self.properties.normals = normals;
        outcome.changed.extend([Output::Points, Output::Normals]);

        if self.config.hint_from_references()
            && let Some(normal) = first_normal
        {
            self.properties.surface_normal_hint = Some(normal);
            outcome.changed.push(Output::SurfaceNormalHint);
            self.on_hint_changed(outcome);
        }
    }

    fn on_direction_reference_changed(&mut self, outcome: &mut Outcome) {
        let props = &self.properties;
        let effective = self.direction.on_reference_changed(
            &self.kernel,
            props.direction_reference.as_ref(),
            props.reversed,
        );
        self.write_effective(effective, outcome);
    }

    fn on_reversed_changed(&mut self, outcome: &mut Outcome) {
        let props = &self.properties;
        let effective = self.direction.on_reversed_changed(
            &self.kernel,
            props.direction_reference.as_ref(),
            props.reversed,
            props.effective_direction,
        );
        self.write_effective(effective, outcome);
    }

    fn on_hint_changed(&mut self, outcome: &mut Outcome) {
        let props = &self.properties;
        if props.direction_reference.is_some() {
            tracing::debug!("direction reference is set, ignoring surface normal hint");
            return;
        }
        let Some(hint) = props.surface_normal_hint else {
            return;
        };
        let effective = self.direction.on_fallback_hint_changed(hint, props.reversed);
        self.write_effective(effective, outcome);
    }

    fn write_effective(&mut self, effective: Option<DVec3>, outcome: &mut Outcome) {
        if let Some(effective) = effective {
            self.properties.effective_direction = effective;
            outcome.changed.push(Output::EffectiveDirection);
        }
    }

    fn notify<O>(&self, outcome: &Outcome, observer: &mut O)
    where
        O: for<'a> Observer<Event<'a>>,
    {
        for &output in &outcome.changed {
            observer.observe(&Event::Changed {
                output,
                properties: &self.properties,
            });
        }
        if let Some(diagnostic) = &outcome.diagnostic {
            observer.observe(&Event::Diagnostic(diagnostic));
        }
    }
}
