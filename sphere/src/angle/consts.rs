pub(crate) const MINUTES_IN_DEGREE: u8 = 60;
pub(crate) const SECONDS_IN_MINUTE: u8 = 60;
pub(crate) const SECONDS_IN_DEGREE: u16 = 3600;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '′';
pub(crate) const ARC_SECOND_SIGN: char = '″';
pub(crate) const ASCII_ARC_MINUTE_SIGN: char = '\'';

pub(crate) const FULL_TURN_DEG: f64 = 360.0;
pub(crate) const HALF_TURN_DEG: f64 = 180.0;
