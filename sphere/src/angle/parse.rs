//! Lenient parsing of the angles written by humans:
//! decimal degrees (`-73.986389`), or up to three DMS components
//! separated by any non-numeric characters (`40°26'46"N`, `40 26.77`, `73d59m11sW`).

use lazy_static::lazy_static;
use regex::Regex;

use crate::{coord::Hemisphere, utils::StripChar};

use super::{
    consts::{DEGREE_SIGN, MINUTES_IN_DEGREE, SECONDS_IN_DEGREE},
    dms::dms_string_to_degrees,
    errors::ParseAngleError,
};

lazy_static! {
    /// Anything between the numbers of DMS
    static ref RE_SEPARATOR: Regex = Regex::new(r"[^0-9.]+").expect("Separator regex is valid");
}

/// Parse the textual angle into signed decimal degrees.
///
/// A plain number is returned as is.
/// Otherwise the angle is treated as degrees with optional minutes and seconds
/// (any of them can be fractional) separated by arbitrary delimiters.
/// The angle is negative when it starts with the `-` sign
/// or ends with the `S` or `W` hemisphere letter (in any case).
///
/// # Examples
///
/// ```
/// use geod_sphere::parse_angle;
///
/// assert_eq!(parse_angle("40.446").unwrap(), 40.446);
/// assert!((parse_angle("73°59′11″W").unwrap() + 73.986_389).abs() < 1e-6);
/// ```
///
/// # Errors
/// - nothing left after stripping the sign and the hemisphere letter;
/// - more than three numeric parts;
/// - some part is not a valid number.
pub fn parse_angle(s: &str) -> Result<f64, ParseAngleError> {
    let s = s.trim();
    if let Some(number) = parse_decimal(s) {
        return Ok(number);
    }

    let (unsigned, minus) = s.strip_first('-').map_or((s, false), |rest| (rest, true));
    let (body, hemisphere) = match unsigned.split_last() {
        Some((rest, last)) => {
            Hemisphere::from_letter(last).map_or((unsigned, None), |h| (rest, Some(h)))
        }
        None => (unsigned, None),
    };

    let mut parts: Vec<_> = RE_SEPARATOR.split(body).collect();
    // the trailing arcsecond (or arcminute) sign produces an empty part
    if parts.last() == Some(&"") {
        let _ = parts.pop();
    }

    let degrees = match parts.as_slice() {
        [] => return Err(ParseAngleError::Empty),
        [deg] => deg.parse::<f64>()?,
        [deg, min] => leading_part(deg)? + min.parse::<f64>()? / f64::from(MINUTES_IN_DEGREE),
        [deg, min, sec] => {
            leading_part(deg)?
                + min.parse::<f64>()? / f64::from(MINUTES_IN_DEGREE)
                + sec.parse::<f64>()? / f64::from(SECONDS_IN_DEGREE)
        }
        more => return Err(ParseAngleError::Components(more.len())),
    };

    let negative = minus || hemisphere.map_or(false, Hemisphere::is_negative);
    Ok(if negative { -degrees } else { degrees })
}

/// The leading delimiter (like in `°30′`) means no whole degrees
fn leading_part(s: &str) -> Result<f64, ParseAngleError> {
    if s.is_empty() {
        Ok(0.0)
    } else {
        Ok(s.parse()?)
    }
}

/// Only the finite numbers, so the `NaN` or `inf` fall through to the DMS parsing
fn parse_decimal(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// The angle as given by the caller: either already in decimal degrees
/// or in any textual notation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AngleInput<'a> {
    /// Signed decimal degrees
    Degrees(f64),
    /// Textual representation of the angle
    Text(&'a str),
}

impl AngleInput<'_> {
    /// Resolve the angle into the decimal degrees.
    ///
    /// The text containing the degree sign (`°`) is treated as the strict DMS
    /// (as produced by the [`degrees_to_dms_string`](crate::degrees_to_dms_string)),
    /// any other text is parsed leniently with the [`parse_angle`].
    ///
    /// # Errors
    /// The text cannot be parsed as an angle.
    pub fn to_degrees(self) -> Result<f64, ParseAngleError> {
        match self {
            Self::Degrees(degrees) => Ok(degrees),
            Self::Text(s) if s.contains(DEGREE_SIGN) => dms_string_to_degrees(s),
            Self::Text(s) => parse_angle(s),
        }
    }
}

impl From<f64> for AngleInput<'_> {
    fn from(degrees: f64) -> Self {
        Self::Degrees(degrees)
    }
}

impl<'a> From<&'a str> for AngleInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}
