//! Utilities functions which do not linked to domain

use std::ops::{Div, Rem};

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Strip or split off single characters from the ends of a string slice
pub(crate) trait StripChar<'a> {
    /// Drop the first character if it equals to the given one
    fn strip_first(self, ch: char) -> Option<&'a str>;
    /// Split into the rest of the string and the last character
    fn split_last(self) -> Option<(&'a str, char)>;
    /// The longest prefix made of ASCII digits
    fn leading_digits(self) -> &'a str;
}

impl<'a> StripChar<'a> for &'a str {
    fn strip_first(self, ch: char) -> Option<&'a str> {
        self.strip_prefix(ch)
    }

    fn split_last(self) -> Option<(&'a str, char)> {
        let tail = self.chars().last()?;
        let rest = &self[..self.len() - tail.len_utf8()];
        Some((rest, tail))
    }

    fn leading_digits(self) -> &'a str {
        let end = self
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.len());
        &self[..end]
    }
}

/// Division and remainder in one step
pub fn div_mod<T>(divider: T, divisor: T) -> (T, T)
where
    T: Copy + Div<Output = T> + Rem<Output = T>,
{
    (divider / divisor, divider % divisor)
}
