//! Angle notations and the conversions between them

mod consts;
mod dms;
mod errors;
mod parse;
mod units;

pub use self::{
    dms::{
        degrees_to_dms_string, dms_string_to_degrees, latitude_to_dms_string,
        longitude_to_dms_string, Dms,
    },
    errors::ParseAngleError,
    parse::{parse_angle, AngleInput},
    units::{degrees_to_all_units, latitude_to_all_units, longitude_to_all_units, AngleUnits},
};

pub(crate) use self::consts::{FULL_TURN_DEG, HALF_TURN_DEG};

/// Convert the angle from degrees to radians
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Convert the angle from radians to degrees
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}
