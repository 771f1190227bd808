use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::AngleUnits;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The point on the surface of a sphere, represented as the pair (latitude, longitude)
/// with both angles expressed in all the notations
pub struct PointUnits {
    latitude: AngleUnits,
    longitude: AngleUnits,
}

impl PointUnits {
    /// Construct a point from the signed latitude and longitude in decimal degrees
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        Self {
            latitude: AngleUnits::latitude(lat),
            longitude: AngleUnits::longitude(lon),
        }
    }

    /// Construct a point from the signed latitude and longitude in radians
    pub fn from_radians(lat: f64, lon: f64) -> Self {
        Self::from_degrees(lat.to_degrees(), lon.to_degrees())
    }

    /// The angle between the equatorial plane and the point
    pub fn latitude(&self) -> &AngleUnits {
        &self.latitude
    }

    /// The angle between the prime meridian and the point
    pub fn longitude(&self) -> &AngleUnits {
        &self.longitude
    }
}

impl fmt::Display for PointUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "Lat: {:#}, Long: {:#}", self.latitude, self.longitude)
        } else {
            write!(f, "({},{})", self.latitude, self.longitude)
        }
    }
}
