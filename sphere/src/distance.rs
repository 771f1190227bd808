//! Length units used in navigation

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const NAUTICAL_MILES_IN_METER: f64 = 0.000_539_957;
const MILES_IN_METER: f64 = 0.000_621_371_418_416_45;

/// Convert meters to the statute miles
pub fn meters_to_miles(meters: f64) -> f64 {
    meters * MILES_IN_METER
}

/// Convert meters to the nautical miles
pub fn meters_to_nautical_miles(meters: f64) -> f64 {
    meters * NAUTICAL_MILES_IN_METER
}

/// The distance expressed in all the supported units at once
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceUnits {
    meters: f64,
    nautical_miles: f64,
    miles: f64,
}

impl DistanceUnits {
    /// Derive all the units from meters
    pub fn from_meters(meters: f64) -> Self {
        Self {
            meters,
            nautical_miles: meters_to_nautical_miles(meters),
            miles: meters_to_miles(meters),
        }
    }

    /// The distance in meters
    pub fn meters(&self) -> f64 {
        self.meters
    }

    /// The distance in nautical miles (1852 m)
    pub fn nautical_miles(&self) -> f64 {
        self.nautical_miles
    }

    /// The distance in statute miles (1609.344 m)
    pub fn miles(&self) -> f64 {
        self.miles
    }
}

impl fmt::Display for DistanceUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(
                f,
                "{:.3} m ({:.3} nmi, {:.3} mi)",
                self.meters, self.nautical_miles, self.miles
            )
        } else {
            write!(f, "{:.3} m", self.meters)
        }
    }
}

/// Express the distance in meters, nautical miles and statute miles
pub fn meters_to_all_units(meters: f64) -> DistanceUnits {
    DistanceUnits::from_meters(meters)
}
