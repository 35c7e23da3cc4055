//! Native implementation of the ISO 8601 format options.
//!
//! A set of [`FormatOptions`] decides which calendar and time components
//! are written or read, and how they are punctuated. The bit values are a
//! stable wire contract and must never be renumbered.

use bitflags::bitflags;

mod resolved;

pub(crate) use resolved::ResolvedFields;

bitflags! {
    /// `FormatOptions` maps the components and separators of an ISO 8601 string.
    ///
    /// The default is [`FormatOptions::INTERNET_DATE_TIME`], the RFC 3339
    /// pattern `yyyy-MM-ddTHH:mm:ssXXXXX`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FormatOptions: u32 {
        /// Represents the `yyyy` year field
        const YEAR = 1 << 0;
        /// Represents the `MM` month field
        const MONTH = 1 << 1;
        /// Represents the `Www` week of year field
        const WEEK_OF_YEAR = 1 << 2;
        /// Represents the day field
        const DAY = 1 << 3;
        /// Represents the `HH:mm:ss` time field
        const TIME = 1 << 4;
        /// Represents the UTC offset field
        const TIME_ZONE = 1 << 5;
        /// Use a space instead of `T` between date and time
        const SPACE_BETWEEN_DATE_AND_TIME = 1 << 6;
        /// Use `-` between date fields
        const DASH_SEPARATOR_IN_DATE = 1 << 7;
        /// Use `:` between time fields
        const COLON_SEPARATOR_IN_TIME = 1 << 8;
        /// Use `:` between UTC offset fields
        const COLON_SEPARATOR_IN_TIME_ZONE = 1 << 9;
        /// Represents the `.SSS` milliseconds field
        const FRACTIONAL_SECONDS = 1 << 10;

        /// `yyyy-MM-dd`
        const FULL_DATE = Self::YEAR.bits()
            | Self::MONTH.bits()
            | Self::DAY.bits()
            | Self::DASH_SEPARATOR_IN_DATE.bits();
        /// `HH:mm:ssXXXXX`
        const FULL_TIME = Self::TIME.bits()
            | Self::TIME_ZONE.bits()
            | Self::COLON_SEPARATOR_IN_TIME.bits()
            | Self::COLON_SEPARATOR_IN_TIME_ZONE.bits();
        /// `yyyy-MM-ddTHH:mm:ssXXXXX`
        const INTERNET_DATE_TIME = Self::FULL_DATE.bits() | Self::FULL_TIME.bits();
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::INTERNET_DATE_TIME
    }
}

impl FormatOptions {
    /// Returns whether these options carry enough bits to delimit fields.
    ///
    /// An empty set or a set with exactly one bit is degenerate, and both
    /// formatting and parsing refuse it.
    #[inline]
    #[must_use]
    pub const fn is_usable(&self) -> bool {
        let bits = self.bits();
        bits & bits.wrapping_sub(1) != 0
    }

    /// Returns whether every component of an internet date-time is present,
    /// in which case the week of year is never shown.
    #[inline]
    #[must_use]
    pub const fn is_full_internet_date_time(&self) -> bool {
        self.contains(Self::INTERNET_DATE_TIME)
    }

    /// Validates that the options are empty or only contain recognized bits
    /// that the provided capabilities support.
    #[must_use]
    pub const fn is_valid(bits: u32, capabilities: Capabilities) -> bool {
        let mut mask = Self::all();
        if !capabilities.fractional_seconds {
            mask = mask.difference(Self::FRACTIONAL_SECONDS);
        }
        bits & !mask.bits() == 0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FormatOptions {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FormatOptions {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = <u32 as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_bits(bits)
            .ok_or_else(|| serde::de::Error::custom("unrecognized format option bits"))
    }
}

// ==== Capabilities ====

/// Explicit feature gates for the formatter.
///
/// When fractional seconds are not supported, the
/// [`FormatOptions::FRACTIONAL_SECONDS`] bit is ignored by both formatting
/// and parsing.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capabilities {
    pub fractional_seconds: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::ALL
    }
}

impl Capabilities {
    /// Every capability enabled.
    pub const ALL: Self = Self {
        fractional_seconds: true,
    };

    /// No optional capability enabled.
    pub const NONE: Self = Self {
        fractional_seconds: false,
    };

    /// Removes the option bits these capabilities do not support.
    #[inline]
    #[must_use]
    pub(crate) const fn restrict(&self, options: FormatOptions) -> FormatOptions {
        if self.fractional_seconds {
            options
        } else {
            options.difference(FormatOptions::FRACTIONAL_SECONDS)
        }
    }
}
