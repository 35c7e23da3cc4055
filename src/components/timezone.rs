//! This module implements `UtcOffset` and `TimeZone`.

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    format::FormattableUtcOffset, iso::IsoDateTime, provider::TimeZoneProvider, Instant,
    IsoError, IsoResult,
};

const SECONDS_PER_HOUR: i32 = 3_600;
const SECONDS_PER_MINUTE: i32 = 60;
const MAX_OFFSET_SECONDS: i32 = 86_399;

/// A signed count of seconds a wall clock reads ahead of UTC.
///
/// Offsets are limited to less than a day in either direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
pub struct UtcOffset(i32);

impl UtcOffset {
    pub const UTC: Self = Self(0);

    /// Creates a validated `UtcOffset` from seconds east of UTC.
    pub fn try_from_seconds(seconds: i32) -> IsoResult<Self> {
        if !(-MAX_OFFSET_SECONDS..=MAX_OFFSET_SECONDS).contains(&seconds) {
            return Err(IsoError::range().with_message("UTC offset must be less than a day."));
        }
        Ok(Self(seconds))
    }

    /// Creates a `UtcOffset` from its sign and the hour, minute and second
    /// fields of its text form.
    pub fn try_from_hms(negative: bool, hour: i32, minute: i32, second: i32) -> IsoResult<Self> {
        if !(0..=23).contains(&hour) || !(0..=59).contains(&minute) || !(0..=59).contains(&second)
        {
            return Err(IsoError::invalid_date().with_message("UTC offset field is out of range."));
        }
        let seconds = hour * SECONDS_PER_HOUR + minute * SECONDS_PER_MINUTE + second;
        Self::try_from_seconds(if negative { -seconds } else { seconds })
    }

    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> i32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_utc(&self) -> bool {
        self.0 == 0
    }

    pub(crate) const fn to_formattable(self, include_sep: bool) -> FormattableUtcOffset {
        FormattableUtcOffset {
            seconds: self.0,
            include_sep,
        }
    }
}

impl TryFrom<i32> for UtcOffset {
    type Error = IsoError;
    fn try_from(seconds: i32) -> Result<Self, Self::Error> {
        Self::try_from_seconds(seconds)
    }
}

impl From<UtcOffset> for i32 {
    fn from(value: UtcOffset) -> Self {
        value.0
    }
}

/// Writes `Z` or the extended form, e.g. `+05:30`.
impl Writeable for UtcOffset {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.to_formattable(true).write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.to_formattable(true).writeable_length_hint()
    }
}

impl_display_with_writeable!(UtcOffset);

// ==== TimeZone ====

/// The time zone a formatter reads wall clocks in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeZone {
    /// Coordinated Universal Time.
    #[default]
    Utc,
    /// A zone whose offset never changes.
    Fixed(UtcOffset),
}

impl TimeZone {
    /// Returns the `TimeZone` for `offset`, collapsing zero to `Utc`.
    #[must_use]
    pub const fn from_offset(offset: UtcOffset) -> Self {
        if offset.is_utc() {
            Self::Utc
        } else {
            Self::Fixed(offset)
        }
    }

    /// Returns the offset this zone observes at every instant.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> UtcOffset {
        match self {
            Self::Utc => UtcOffset::UTC,
            Self::Fixed(offset) => *offset,
        }
    }
}

impl From<UtcOffset> for TimeZone {
    fn from(value: UtcOffset) -> Self {
        Self::from_offset(value)
    }
}

impl TimeZoneProvider for TimeZone {
    fn offset_for_instant(&self, _: Instant) -> IsoResult<UtcOffset> {
        Ok(self.offset())
    }

    fn offset_for_local(&self, _: &IsoDateTime) -> IsoResult<UtcOffset> {
        Ok(self.offset())
    }
}

#[cfg(test)]
mod tests {
    use super::{TimeZone, UtcOffset};
    use crate::{iso::IsoDateTime, provider::TimeZoneProvider, ErrorKind, Instant};

    #[test]
    fn offset_limits() {
        assert!(UtcOffset::try_from_seconds(86_399).is_ok());
        assert!(UtcOffset::try_from_seconds(-86_399).is_ok());
        assert_eq!(
            UtcOffset::try_from_seconds(86_400).unwrap_err().kind(),
            ErrorKind::Range
        );
        assert!(UtcOffset::try_from(i32::MIN).is_err());
    }

    #[test]
    fn offset_from_fields() {
        let offset = UtcOffset::try_from_hms(false, 5, 30, 15).unwrap();
        assert_eq!(offset.seconds(), 19_815);
        let offset = UtcOffset::try_from_hms(true, 8, 0, 0).unwrap();
        assert_eq!(offset.seconds(), -28_800);
        assert!(UtcOffset::try_from_hms(false, 24, 0, 0).is_err());
        assert!(UtcOffset::try_from_hms(false, 1, 60, 0).is_err());
        assert!(UtcOffset::try_from_hms(false, 1, 0, 60).is_err());
    }

    #[test]
    fn offset_display() {
        assert_eq!(UtcOffset::UTC.to_string(), "Z");
        assert_eq!(UtcOffset::try_from_seconds(19_800).unwrap().to_string(), "+05:30");
        assert_eq!(UtcOffset::try_from_seconds(19_815).unwrap().to_string(), "+05:30:15");
        assert_eq!(UtcOffset::try_from_seconds(-3_600).unwrap().to_string(), "-01:00");
        assert_eq!(UtcOffset::try_from_seconds(-59).unwrap().to_string(), "-00:00:59");
    }

    #[test]
    fn fixed_zone_provider() {
        let offset = UtcOffset::try_from_seconds(-18_000).unwrap();
        let zone = TimeZone::from(offset);
        assert_eq!(zone, TimeZone::Fixed(offset));
        assert_eq!(zone.offset_for_instant(Instant::EPOCH), Ok(offset));
        assert_eq!(zone.offset_for_local(&IsoDateTime::default()), Ok(offset));
        assert_eq!(TimeZone::from(UtcOffset::UTC), TimeZone::Utc);
        assert_eq!(TimeZone::default().offset(), UtcOffset::UTC);
    }
}
