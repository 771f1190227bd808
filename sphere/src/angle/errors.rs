use std::{
    error::Error,
    fmt,
    num::{ParseFloatError, ParseIntError},
};

use crate::enum_trivial_from_impl;

/// The textual angle cannot be converted into the decimal degrees
#[derive(Debug, Clone, PartialEq)]
pub enum ParseAngleError {
    /// Nothing left after stripping the sign and the hemisphere
    Empty,
    /// Only degrees, minutes and seconds are allowed (1..=3 parts)
    Components(usize),
    /// Some part is not a number
    Float(ParseFloatError),
    /// Some part of the DMS string is not an integer
    Int(ParseIntError),
    /// The degree or the arc minute sign is missing
    DmsNotation,
}

enum_trivial_from_impl!(ParseFloatError => ParseAngleError:Float);
enum_trivial_from_impl!(ParseIntError => ParseAngleError:Int);

impl fmt::Display for ParseAngleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse angle: ")?;
        match self {
            Self::Empty => write!(f, "no degrees found"),
            Self::Components(n) => write!(
                f,
                "expected degrees, minutes and seconds at most, but got {n} parts"
            ),
            Self::Float(inner) => write!(f, "{inner}"),
            Self::Int(inner) => write!(f, "{inner}"),
            Self::DmsNotation => write!(f, "not a Degree-Minute-Second notation"),
        }
    }
}

impl Error for ParseAngleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Float(inner) => Some(inner),
            Self::Int(inner) => Some(inner),
            Self::Empty | Self::Components(_) | Self::DmsNotation => None,
        }
    }
}
