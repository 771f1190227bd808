use std::{convert::TryFrom, error::Error, fmt, ops::Neg};

use crate::bool_enum;

bool_enum!(Pole: North and South; parse from 'N':'S' with ParsePoleError);

impl Pole {
    /// Which pole are closer to the given signed latitude (in degrees).
    ///
    /// The equator (and anything not comparable, e.g. NaN) belongs to the north.
    pub fn of_latitude(degrees: f64) -> Self {
        if degrees < 0.0 {
            South
        } else {
            North
        }
    }
}
