//! Unit-aware reading of a boundary's scalar value.
//!
//! A boundary stores its value as a bare `f64` in SI units.
//! What that number means depends on the subtype: a `totalPressure` inlet
//! carries a pressure, a `uniformVelocity` inlet a speed, and so on.

use std::fmt;

use uom::si::{
    f64::{Pressure, Velocity, VolumeRate},
    pressure::pascal,
    velocity::meter_per_second,
    volume_rate::cubic_meter_per_second,
};

/// A boundary value read as a physical quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryQuantity {
    Pressure(Pressure),
    Velocity(Velocity),
    VolumeRate(VolumeRate),
}

impl fmt::Display for BoundaryQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pressure(p) => write!(f, "{} Pa", p.get::<pascal>()),
            Self::Velocity(v) => write!(f, "{} m/s", v.get::<meter_per_second>()),
            Self::VolumeRate(q) => write!(f, "{} m³/s", q.get::<cubic_meter_per_second>()),
        }
    }
}

/// Reads `value` (SI units) as the quantity implied by `subtype`.
///
/// Returns `None` for subtypes that do not carry a scalar, such as
/// `unspecific`, `fixed`, or `symmetry`.
/// The value itself is not checked for physical plausibility.
///
/// # Examples
///
/// ```
/// use fluidbc::value::{BoundaryQuantity, interpret};
/// use uom::si::velocity::meter_per_second;
///
/// let Some(BoundaryQuantity::Velocity(v)) = interpret("uniformVelocity", 2.5) else {
///     panic!("expected a velocity");
/// };
/// assert_eq!(v.get::<meter_per_second>(), 2.5);
///
/// assert!(interpret("fixed", 2.5).is_none());
/// ```
#[must_use]
pub fn interpret(subtype: &str, value: f64) -> Option<BoundaryQuantity> {
    match subtype {
        "totalPressure" => Some(BoundaryQuantity::Pressure(Pressure::new::<pascal>(value))),
        "uniformVelocity" => Some(BoundaryQuantity::Velocity(
            Velocity::new::<meter_per_second>(value),
        )),
        "flowrate" => Some(BoundaryQuantity::VolumeRate(VolumeRate::new::<
            cubic_meter_per_second,
        >(value))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        pressure::kilopascal, velocity::kilometer_per_hour, volume_rate::liter_per_second,
    };

    #[test]
    fn total_pressure_is_pascal() {
        let Some(BoundaryQuantity::Pressure(p)) = interpret("totalPressure", 101_325.0) else {
            panic!("expected a pressure");
        };
        assert_relative_eq!(p.get::<kilopascal>(), 101.325);
    }

    #[test]
    fn uniform_velocity_is_meters_per_second() {
        let Some(BoundaryQuantity::Velocity(v)) = interpret("uniformVelocity", 10.0) else {
            panic!("expected a velocity");
        };
        assert_relative_eq!(v.get::<kilometer_per_hour>(), 36.0, epsilon = 1e-12);
    }

    #[test]
    fn flowrate_is_cubic_meters_per_second() {
        let Some(BoundaryQuantity::VolumeRate(q)) = interpret("flowrate", 0.002) else {
            panic!("expected a volume rate");
        };
        assert_relative_eq!(q.get::<liter_per_second>(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn descriptive_subtypes_have_no_quantity() {
        for subtype in ["unspecific", "fixed", "symmetry", "wedge", "freestream"] {
            assert!(interpret(subtype, 1.0).is_none(), "{subtype}");
        }
    }

    #[test]
    fn display_uses_si_units() {
        let q = interpret("totalPressure", 50.0).unwrap();
        assert_eq!(q.to_string(), "50 Pa");
    }
}
