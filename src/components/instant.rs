//! An implementation of a millisecond precision `Instant`.

use core::str::FromStr;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    format::FormattableIso, options::FormatOptions, parsers::parse, primitive::FiniteF64,
    IsoError, IsoResult, UtcOffset, MS_MAX_INSTANT, MS_MIN_INSTANT,
};

const MS_PER_SECOND: f64 = 1_000.0;

/// A point on the UTC timeline with millisecond resolution.
///
/// The supported range spans 100,000,000 days on either side of the epoch,
/// which reaches well beyond the years `1..=9999`.
///
/// ```rust
/// use iso8601_rs::Instant;
///
/// let instant = Instant::from_seconds_f64(1_536_853_212.5).unwrap();
/// assert_eq!(instant.epoch_milliseconds(), 1_536_853_212_500);
/// assert_eq!(instant.to_string(), "2018-09-13T15:40:12Z");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(i64);

// ==== Private API ====

impl Instant {
    #[inline]
    pub(crate) const fn new_unchecked(epoch_milliseconds: i64) -> Self {
        Self(epoch_milliseconds)
    }
}

// ==== Public API ====

impl Instant {
    /// The instant 1970-01-01T00:00:00Z.
    pub const EPOCH: Self = Self(0);

    /// Create a new validated `Instant` from milliseconds since the epoch.
    #[inline]
    pub fn try_new(epoch_milliseconds: i64) -> IsoResult<Self> {
        if !is_valid_epoch_milliseconds(epoch_milliseconds) {
            return Err(
                IsoError::range().with_message("instant is outside of the supported range.")
            );
        }
        Ok(Self::new_unchecked(epoch_milliseconds))
    }

    /// Alias of [`Instant::try_new`].
    #[inline]
    pub fn from_epoch_milliseconds(epoch_milliseconds: i64) -> IsoResult<Self> {
        Self::try_new(epoch_milliseconds)
    }

    /// Create an `Instant` from floating point seconds since the epoch.
    ///
    /// The fractional second is rounded to the nearest millisecond. A
    /// fraction that rounds up to a whole second is held at `999` so that
    /// the whole seconds never change, and fractions of instants before
    /// the epoch are measured forward from the preceding whole second.
    pub fn from_seconds_f64(seconds: f64) -> IsoResult<Self> {
        let seconds = FiniteF64::try_from(seconds)?;
        let millisecond = seconds
            .positive_fraction()
            .checked_mul(MS_PER_SECOND)?
            .round_to_i64()?
            .min(999);
        let whole = seconds.floor().round_to_i64()?;
        whole
            .checked_mul(1_000)
            .and_then(|ms| ms.checked_add(millisecond))
            .ok_or(IsoError::range().with_message("instant is outside of the supported range."))
            .and_then(Self::try_new)
    }

    /// Returns the milliseconds since the epoch.
    #[inline]
    #[must_use]
    pub const fn epoch_milliseconds(&self) -> i64 {
        self.0
    }

    /// Returns the whole seconds since the epoch, rounded toward negative
    /// infinity.
    #[inline]
    #[must_use]
    pub const fn epoch_seconds(&self) -> i64 {
        self.0.div_euclid(1_000)
    }

    /// Returns the seconds since the epoch as a floating point value.
    #[inline]
    #[must_use]
    pub fn as_seconds_f64(&self) -> f64 {
        // Every supported instant is exactly representable.
        self.0 as f64 / MS_PER_SECOND
    }

    /// Returns the current system time as an `Instant`.
    #[cfg(feature = "sys")]
    pub fn now() -> IsoResult<Self> {
        crate::sys::get_system_milliseconds().and_then(Self::try_new)
    }
}

// ==== Utility Functions ====

/// Utility for determining if the milliseconds are within a valid range.
#[inline]
#[must_use]
pub(crate) const fn is_valid_epoch_milliseconds(milliseconds: i64) -> bool {
    MS_MIN_INSTANT <= milliseconds && milliseconds <= MS_MAX_INSTANT
}

// ==== Trait impls ====

impl TryFrom<f64> for Instant {
    type Error = IsoError;
    fn try_from(seconds: f64) -> Result<Self, Self::Error> {
        Self::from_seconds_f64(seconds)
    }
}

impl From<Instant> for i64 {
    fn from(value: Instant) -> Self {
        value.0
    }
}

/// Parses an internet date-time such as `2018-09-13T15:40:12+02:00`.
impl FromStr for Instant {
    type Err = IsoError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s.as_bytes(), FormatOptions::default(), UtcOffset::UTC)
    }
}

/// Writes the instant as an internet date-time at UTC.
impl Writeable for Instant {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        match FormattableIso::try_new(*self, FormatOptions::default(), UtcOffset::UTC) {
            Ok(formattable) => formattable.write_to(sink),
            Err(_) => Ok(()),
        }
    }

    fn writeable_length_hint(&self) -> LengthHint {
        FormattableIso::try_new(*self, FormatOptions::default(), UtcOffset::UTC)
            .map_or(LengthHint::exact(0), |f| f.writeable_length_hint())
    }
}

impl_display_with_writeable!(Instant);

// ==== Instant Tests ====
