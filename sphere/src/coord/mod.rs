pub use self::{
    lat::{ParsePoleError, Pole},
    lon::{ParseDirectionError, RotationalDirection},
    point::PointUnits,
};

mod lat;
mod lon;
mod point;

/// The letter following the angle which reveals its direction: N, S, E or W
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Hemisphere {
    Latitude(Pole),
    Longitude(RotationalDirection),
}

impl Hemisphere {
    /// Detect the hemisphere letter (in any case)
    pub(crate) fn from_letter(c: char) -> Option<Self> {
        Pole::try_from(c)
            .map(Self::Latitude)
            .or_else(|_| RotationalDirection::try_from(c).map(Self::Longitude))
            .ok()
    }

    /// Southern and western angles are negative
    pub(crate) fn is_negative(self) -> bool {
        matches!(
            self,
            Self::Latitude(Pole::South) | Self::Longitude(RotationalDirection::West)
        )
    }
}

#[doc(hidden)]
#[macro_export]
/// Implements simple two variants enum associated with the boolean type
macro_rules! bool_enum {
    ($name:ident: $truthy:ident and $falsy:ident; parse from $true_ch:literal:$false_ch:literal with $parse_err:ident) => {
        use self::$name::{$falsy, $truthy};

        #[derive(Debug, Copy, Clone, PartialEq, Eq)]
        #[allow(missing_docs)]
        pub enum $name {
            $truthy,
            $falsy,
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                match self {
                    $falsy => $truthy,
                    $truthy => $falsy,
                }
            }
        }

        impl From<bool> for $name {
            fn from(val: bool) -> Self {
                if val {
                    $truthy
                } else {
                    $falsy
                }
            }
        }

        #[derive(Debug, Copy, Clone, PartialEq, Eq)]
        /// The character is not a valid direction letter
        pub struct $parse_err {
            failed: char,
        }

        impl fmt::Display for $parse_err {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "Cannot parse {} from {:?}",
                    stringify!($name),
                    self.failed
                )
            }
        }

        impl Error for $parse_err {}

        impl TryFrom<char> for $name {
            type Error = $parse_err;

            /// The letter is case-insensitive
            fn try_from(c: char) -> Result<Self, Self::Error> {
                match c.to_ascii_uppercase() {
                    $true_ch => Ok($truthy),
                    $false_ch => Ok($falsy),
                    _ => Err($parse_err { failed: c }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let symbol = match self {
                    $truthy => $true_ch,
                    $falsy => $false_ch,
                };
                write!(f, "{}", symbol)
            }
        }
    };
}
