use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    degrees_to_radians,
    dms::{degrees_to_dms_string, latitude_to_dms_string, longitude_to_dms_string},
};

/// The angle expressed in all the supported notations at once
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngleUnits {
    decimal: f64,
    radian: f64,
    dms: String,
}

impl AngleUnits {
    fn with_dms_formatter(degrees: f64, dms: fn(f64) -> String) -> Self {
        Self {
            decimal: degrees,
            radian: degrees_to_radians(degrees),
            dms: dms(degrees),
        }
    }

    /// Generic angle, e.g. a bearing
    pub fn new(degrees: f64) -> Self {
        Self::with_dms_formatter(degrees, degrees_to_dms_string)
    }

    /// The DMS notation ends with the `N` or `S`
    pub fn latitude(degrees: f64) -> Self {
        Self::with_dms_formatter(degrees, latitude_to_dms_string)
    }

    /// The DMS notation ends with the `E` or `W`
    pub fn longitude(degrees: f64) -> Self {
        Self::with_dms_formatter(degrees, longitude_to_dms_string)
    }

    /// Signed decimal degrees
    pub fn decimal(&self) -> f64 {
        self.decimal
    }

    /// Signed radians
    pub fn radian(&self) -> f64 {
        self.radian
    }

    /// Degree-Minute-Second notation
    pub fn dms(&self) -> &str {
        &self.dms
    }
}

impl fmt::Display for AngleUnits {
    /// Use the `{:#}` to show the DMS notation instead of the decimal degrees
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.dms)
        } else {
            write!(f, "{}°", self.decimal)
        }
    }
}

/// Express the angle in decimal degrees, radians and DMS
pub fn degrees_to_all_units(degrees: f64) -> AngleUnits {
    AngleUnits::new(degrees)
}

/// Express the latitude in decimal degrees, radians and DMS (with the hemisphere)
pub fn latitude_to_all_units(degrees: f64) -> AngleUnits {
    AngleUnits::latitude(degrees)
}

/// Express the longitude in decimal degrees, radians and DMS (with the hemisphere)
pub fn longitude_to_all_units(degrees: f64) -> AngleUnits {
    AngleUnits::longitude(degrees)
}
