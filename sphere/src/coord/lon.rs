use std::{convert::TryFrom, error::Error, fmt, ops::Neg};

use crate::bool_enum;

bool_enum!(RotationalDirection: East and West; parse from 'E':'W' with ParseDirectionError);

impl RotationalDirection {
    /// The direction from the prime meridian to the given signed longitude (in degrees).
    ///
    /// The prime meridian itself is considered eastern.
    pub fn of_longitude(degrees: f64) -> Self {
        if degrees < 0.0 {
            West
        } else {
            East
        }
    }
}
