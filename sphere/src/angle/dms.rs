//! Fixed-width Degree-Minute-Second notation, e.g. `040°26′46″`.
//!
//! Only the whole arc seconds are kept, so the conversion from the decimal degrees
//! is lossy: the seconds are rounded (and carried up to the minutes and degrees).

use std::{fmt, str::FromStr};

use num_traits::ToPrimitive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    coord::{Pole, RotationalDirection},
    utils::{div_mod, StripChar},
};

use super::{
    consts::{
        ARC_MINUTE_SIGN, ARC_SECOND_SIGN, ASCII_ARC_MINUTE_SIGN, DEGREE_SIGN, MINUTES_IN_DEGREE,
        SECONDS_IN_DEGREE, SECONDS_IN_MINUTE,
    },
    errors::ParseAngleError,
};

/// An angle rounded to the whole arc seconds
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dms {
    negative: bool,
    degrees: u32,
    minutes: u8,
    seconds: u8,
}

impl Dms {
    /// Split the decimal degrees into degrees, minutes and (rounded) seconds.
    ///
    /// Returns `None` if the value is not finite or has too many degrees.
    pub fn from_degrees(value: f64) -> Option<Self> {
        let magnitude = value.abs();
        let total_seconds = magnitude * f64::from(SECONDS_IN_DEGREE);
        let (total_minutes, seconds) = div_mod(total_seconds, f64::from(SECONDS_IN_MINUTE));
        // degrees from the same product as minutes, so the `41 - 1ulp` does not lose a degree
        let (degrees, minutes) = div_mod(total_minutes.floor(), f64::from(MINUTES_IN_DEGREE));

        let mut degrees = degrees.floor().to_u32()?;
        let mut minutes = minutes.to_u8()?;
        let mut seconds = seconds.round().to_u8()?;

        if seconds == SECONDS_IN_MINUTE {
            seconds = 0;
            minutes += 1;
        }

        if minutes == MINUTES_IN_DEGREE {
            minutes = 0;
            degrees = degrees.checked_add(1)?;
        }

        Some(Self {
            negative: value < 0.0,
            degrees,
            minutes,
            seconds,
        })
    }

    /// The whole degrees of the absolute angle
    pub fn degrees(self) -> u32 {
        self.degrees
    }

    /// The arc minutes component of the angle
    pub fn minutes(self) -> u8 {
        self.minutes
    }

    /// The arc seconds component of the angle
    pub fn seconds(self) -> u8 {
        self.seconds
    }

    /// Is the angle less than zero
    pub fn is_negative(self) -> bool {
        self.negative
    }

    /// The same angle without the sign
    pub fn unsigned(self) -> Self {
        Self {
            negative: false,
            ..self
        }
    }

    /// Combine the parts back into the signed decimal degrees
    pub fn to_degrees(self) -> f64 {
        let degrees = f64::from(self.degrees)
            + f64::from(self.minutes) / f64::from(MINUTES_IN_DEGREE)
            + f64::from(self.seconds) / f64::from(SECONDS_IN_DEGREE);

        if self.negative {
            -degrees
        } else {
            degrees
        }
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }

        write!(
            f,
            "{:03}{}{:02}{}{:02}{}",
            self.degrees, DEGREE_SIGN, self.minutes, ARC_MINUTE_SIGN, self.seconds, ARC_SECOND_SIGN
        )
    }
}

impl FromStr for Dms {
    type Err = ParseAngleError;

    /// Parse the `DDD°MM′SS″` notation.
    ///
    /// Anything after the seconds' digits (e.g. the hemisphere letter) is ignored.
    /// The ASCII apostrophe (`'`) is accepted as the arc minute sign.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (unsigned, negative) = s.strip_first('-').map_or((s, false), |rest| (rest, true));

        let (degrees, rest) = unsigned
            .split_once(DEGREE_SIGN)
            .ok_or(ParseAngleError::DmsNotation)?;
        let (minutes, rest) = rest
            .split_once(|c: char| c == ARC_MINUTE_SIGN || c == ASCII_ARC_MINUTE_SIGN)
            .ok_or(ParseAngleError::DmsNotation)?;
        let seconds = rest.trim_start().leading_digits();

        Ok(Self {
            negative,
            degrees: degrees.trim().parse()?,
            minutes: minutes.trim().parse()?,
            seconds: seconds.parse()?,
        })
    }
}

/// Format the angle as the fixed-width `DDD°MM′SS″` string.
///
/// The negative angle gets the `-` prefix.
/// The angle that cannot be represented as DMS (e.g. NaN) is formatted as a number.
///
/// ```
/// use geod_sphere::degrees_to_dms_string;
///
/// assert_eq!(degrees_to_dms_string(40.446_111), "040°26′46″");
/// ```
pub fn degrees_to_dms_string(degrees: f64) -> String {
    Dms::from_degrees(degrees).map_or_else(|| degrees.to_string(), |dms| dms.to_string())
}

/// Format the latitude as the `DDD°MM′SS″` string followed by the `N` or `S`
pub fn latitude_to_dms_string(degrees: f64) -> String {
    Dms::from_degrees(degrees).map_or_else(
        || degrees.to_string(),
        |dms| format!("{}{}", dms.unsigned(), Pole::of_latitude(degrees)),
    )
}

/// Format the longitude as the `DDD°MM′SS″` string followed by the `E` or `W`
pub fn longitude_to_dms_string(degrees: f64) -> String {
    Dms::from_degrees(degrees).map_or_else(
        || degrees.to_string(),
        |dms| {
            format!(
                "{}{}",
                dms.unsigned(),
                RotationalDirection::of_longitude(degrees)
            )
        },
    )
}

/// Convert the `DDD°MM′SS″` string back to the decimal degrees.
///
/// The hemisphere letter is not interpreted, use the [`parse_angle`](crate::parse_angle) for that.
///
/// # Errors
/// The degree or arc minute sign is missing, or some part is not an integer.
pub fn dms_string_to_degrees(dms: &str) -> Result<f64, ParseAngleError> {
    dms.parse::<Dms>().map(Dms::to_degrees)
}


#[cfg(test)]
mod parse_tests {
    use super::*;
    use crate::test_utils::assert_close;

    #[test]
    fn unicode() {
        assert_close!(dms_string_to_degrees("040°26′46″").unwrap(), 40.446_111, 1e-6);
    }

    #[test]
    fn hemisphere_is_ignored() {
        assert_close!(
            dms_string_to_degrees("073°59′11″W").unwrap(),
            73.986_389,
            1e-6
        );
    }

    #[test]
    fn ascii_minutes() {
        assert_close!(
            dms_string_to_degrees("40°26'46\"").unwrap(),
            40.446_111,
            1e-6
        );
    }

    #[test]
    fn negative() {
        assert_close!(
            dms_string_to_degrees("-073°59′11″").unwrap(),
            -73.986_389,
            1e-6
        );
    }

    #[test]
    fn spaces_between_parts() {
        let dms: Dms = " 12° 05′ 09″ ".parse().unwrap();
        assert_eq!(dms.degrees(), 12);
        assert_eq!(dms.minutes(), 5);
        assert_eq!(dms.seconds(), 9);
        assert!(!dms.is_negative());
    }

    #[test]
    #[should_panic(expected = "DmsNotation")]
    fn no_degree_sign() {
        let _d = dms_string_to_degrees("40 26′46″").unwrap();
    }

    #[test]
    #[should_panic(expected = "DmsNotation")]
    fn no_minute_sign() {
        let _d = dms_string_to_degrees("40°26").unwrap();
    }

    #[test]
    #[should_panic(expected = "Int")]
    fn no_seconds() {
        let _d = dms_string_to_degrees("40°26′").unwrap();
    }

    #[test]
    #[should_panic(expected = "Int")]
    fn fractional_degrees() {
        let _d = dms_string_to_degrees("40.5°26′0″").unwrap();
    }

    #[test]
    fn round_trip_within_arc_second() {
        let arc_second = 1.0 / 3600.0;
        let mut deg = 0.0;
        while deg < 360.0 {
            let restored = dms_string_to_degrees(&degrees_to_dms_string(deg)).unwrap();
            assert!(
                (restored - deg).abs() <= arc_second,
                "{deg} -> {restored}"
            );

            let restored = dms_string_to_degrees(&degrees_to_dms_string(-deg)).unwrap();
            assert!(
                (restored + deg).abs() <= arc_second,
                "{} -> {restored}",
                -deg
            );

            deg += 0.013_7;
        }
    }

    #[test]
    fn display_from_str_agree() {
        let dms = Dms::from_degrees(-8.0125).unwrap();
        assert_eq!(dms.to_string(), "-008°00′45″");
        assert_eq!(dms.to_string().parse::<Dms>().unwrap(), dms);
    }
}
