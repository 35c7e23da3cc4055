//! The configurable `Iso8601Formatter`.

use crate::{
    format::{format_with_capabilities, FormatBuffer},
    options::{Capabilities, FormatOptions},
    parsers::parse_record_with_capabilities,
    provider::TimeZoneProvider,
    Instant, IsoError, IsoResult, TimeZone,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A reusable ISO 8601 formatter and parser.
///
/// The formatter holds a set of [`FormatOptions`], the [`TimeZone`] wall
/// clocks are read in, and the [`Capabilities`] it runs with. The options
/// always stay valid for the capabilities.
///
/// ```rust
/// use iso8601_rs::{FormatOptions, Instant, Iso8601Formatter, TimeZone, UtcOffset};
///
/// let mut formatter = Iso8601Formatter::new();
/// let instant = Instant::try_new(1_536_853_212_345).unwrap();
/// assert_eq!(formatter.format(instant).as_str(), "2018-09-13T15:40:12Z");
///
/// formatter.set_options(FormatOptions::default() | FormatOptions::FRACTIONAL_SECONDS).unwrap();
/// formatter.set_time_zone(TimeZone::from(UtcOffset::try_from_seconds(-4 * 3600).unwrap()));
/// let text = formatter.format(instant);
/// assert_eq!(text.as_str(), "2018-09-13T11:40:12.345-04:00");
/// assert_eq!(formatter.parse(&text).unwrap(), instant);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "FormatterRecord"))]
pub struct Iso8601Formatter {
    options: FormatOptions,
    time_zone: TimeZone,
    capabilities: Capabilities,
}

impl Iso8601Formatter {
    /// Creates a formatter writing internet date-times at UTC.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a formatter with `capabilities`.
    #[must_use]
    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        let mut formatter = Self::new();
        formatter.set_capabilities(capabilities);
        formatter
    }

    #[inline]
    #[must_use]
    pub const fn options(&self) -> FormatOptions {
        self.options
    }

    /// Replaces the options, rejecting bits that are unrecognized or
    /// unsupported by the capabilities.
    pub fn set_options(&mut self, options: FormatOptions) -> IsoResult<()> {
        if !FormatOptions::is_valid(options.bits(), self.capabilities) {
            return Err(IsoError::invalid_options()
                .with_message("options contain bits the formatter does not support."));
        }
        self.options = options;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn time_zone(&self) -> TimeZone {
        self.time_zone
    }

    #[inline]
    pub fn set_time_zone(&mut self, time_zone: TimeZone) {
        self.time_zone = time_zone;
    }

    #[inline]
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Replaces the capabilities, dropping any option bit they no longer
    /// support.
    pub fn set_capabilities(&mut self, capabilities: Capabilities) {
        if !capabilities.fractional_seconds
            && self.options.contains(FormatOptions::FRACTIONAL_SECONDS)
        {
            #[cfg(feature = "log")]
            log::warn!("fractional seconds are not supported, dropping them from the options");
            self.options.remove(FormatOptions::FRACTIONAL_SECONDS);
        }
        self.capabilities = capabilities;
    }

    // ==== Formatting ====

    /// Formats `instant` in the formatter's time zone.
    #[must_use]
    pub fn format(&self, instant: Instant) -> FormatBuffer {
        format_with_capabilities(
            instant,
            self.options,
            self.time_zone.offset(),
            self.capabilities,
        )
    }

    /// Formats `instant` using the offset `provider` reports for it.
    pub fn format_with_provider(
        &self,
        instant: Instant,
        provider: &impl TimeZoneProvider,
    ) -> IsoResult<FormatBuffer> {
        let offset = provider.offset_for_instant(instant)?;
        Ok(format_with_capabilities(
            instant,
            self.options,
            offset,
            self.capabilities,
        ))
    }

    #[must_use]
    pub fn format_to_string(&self, instant: Instant) -> alloc::string::String {
        self.format(instant).as_str().into()
    }

    /// Formats `instant` once without keeping a formatter around.
    #[must_use]
    pub fn format_with(instant: Instant, time_zone: TimeZone, options: FormatOptions) -> FormatBuffer {
        let formatter = Self {
            options,
            time_zone,
            capabilities: Capabilities::ALL,
        };
        formatter.format(instant)
    }

    /// Formats the current system time.
    #[cfg(feature = "sys")]
    pub fn format_now(&self) -> IsoResult<FormatBuffer> {
        Instant::now().map(|instant| self.format(instant))
    }

    // ==== Parsing ====

    /// Parses `text`, reading it in the formatter's time zone when it
    /// carries no UTC offset.
    pub fn parse(&self, text: impl AsRef<[u8]>) -> IsoResult<Instant> {
        self.parse_with_provider(text, &self.time_zone)
    }

    /// Parses `text`, asking `provider` for the offset of the local time
    /// when the text carries no UTC offset.
    pub fn parse_with_provider(
        &self,
        text: impl AsRef<[u8]>,
        provider: &impl TimeZoneProvider,
    ) -> IsoResult<Instant> {
        let record = parse_record_with_capabilities(text.as_ref(), self.options, self.capabilities)?;
        let offset = match record.offset {
            Some(offset) => offset,
            None => provider.offset_for_local(&record.date_time)?,
        };
        record.to_instant(offset)
    }
}

// ==== Archival ====

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct FormatterRecord {
    options: FormatOptions,
    time_zone: TimeZone,
    capabilities: Capabilities,
}

#[cfg(feature = "serde")]
impl TryFrom<FormatterRecord> for Iso8601Formatter {
    type Error = IsoError;

    fn try_from(record: FormatterRecord) -> Result<Self, Self::Error> {
        let mut formatter = Self {
            capabilities: record.capabilities,
            time_zone: record.time_zone,
            ..Self::default()
        };
        formatter.set_options(record.options)?;
        Ok(formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::Iso8601Formatter;
    use crate::{
        iso::IsoDateTime, Capabilities, ErrorKind, FormatOptions as O, Instant, IsoResult,
        TimeZone, TimeZoneProvider, UtcOffset,
    };

    /// A zone one hour ahead of UTC from March through October.
    struct SummerTime;

    impl SummerTime {
        const WINTER: i32 = 0;
        const SUMMER: i32 = 3_600;

        fn offset_for_month(month: u8) -> IsoResult<UtcOffset> {
            let seconds = if (3..=10).contains(&month) {
                Self::SUMMER
            } else {
                Self::WINTER
            };
            UtcOffset::try_from_seconds(seconds)
        }
    }

    impl TimeZoneProvider for SummerTime {
        fn offset_for_instant(&self, instant: Instant) -> IsoResult<UtcOffset> {
            let local = IsoDateTime::from_local_milliseconds(instant.epoch_milliseconds());
            Self::offset_for_month(local.date.month)
        }

        fn offset_for_local(&self, local: &IsoDateTime) -> IsoResult<UtcOffset> {
            Self::offset_for_month(local.date.month)
        }
    }

    fn reference() -> Instant {
        Instant::try_new(1_536_853_212_345).unwrap()
    }

    #[test]
    fn defaults() {
        let formatter = Iso8601Formatter::new();
        assert_eq!(formatter.options(), O::INTERNET_DATE_TIME);
        assert_eq!(formatter.time_zone(), TimeZone::Utc);
        assert_eq!(formatter.capabilities(), Capabilities::ALL);
        assert_eq!(formatter.format_to_string(reference()), "2018-09-13T15:40:12Z");
    }

    #[test]
    fn option_validation() {
        let mut formatter = Iso8601Formatter::new();
        assert!(formatter.set_options(O::empty()).is_ok());
        assert!(formatter.format(reference()).is_empty());

        let unknown = O::from_bits_retain(1 << 20);
        assert_eq!(
            formatter.set_options(unknown).unwrap_err().kind(),
            ErrorKind::InvalidOptions
        );
        assert_eq!(formatter.options(), O::empty());

        let mut formatter = Iso8601Formatter::with_capabilities(Capabilities::NONE);
        let fractional = O::default() | O::FRACTIONAL_SECONDS;
        assert_eq!(
            formatter.set_options(fractional).unwrap_err().kind(),
            ErrorKind::InvalidOptions
        );
    }

    #[test]
    fn dropping_the_fraction_capability() {
        let mut formatter = Iso8601Formatter::new();
        formatter
            .set_options(O::default() | O::FRACTIONAL_SECONDS)
            .unwrap();
        assert_eq!(formatter.format(reference()).as_str(), "2018-09-13T15:40:12.345Z");

        formatter.set_capabilities(Capabilities::NONE);
        assert_eq!(formatter.options(), O::default());
        assert_eq!(formatter.format(reference()).as_str(), "2018-09-13T15:40:12Z");
    }

    #[test]
    fn one_shot_formatting() {
        let zone = TimeZone::from(UtcOffset::try_from_seconds(19_800).unwrap());
        let text = Iso8601Formatter::format_with(reference(), zone, O::FULL_TIME);
        assert_eq!(text.as_str(), "21:10:12+05:30");
    }

    #[test]
    fn provider_offsets() {
        let formatter = Iso8601Formatter::new();
        let summer = formatter.format_with_provider(reference(), &SummerTime).unwrap();
        assert_eq!(summer.as_str(), "2018-09-13T16:40:12+01:00");

        let winter = Instant::try_new(1_515_000_000_000).unwrap();
        let text = formatter.format_with_provider(winter, &SummerTime).unwrap();
        assert_eq!(text.as_str(), "2018-01-03T17:20:00Z");
        assert_eq!(formatter.parse(&text).unwrap(), winter);
    }

    #[test]
    fn local_time_parsing() {
        let mut formatter = Iso8601Formatter::new();
        formatter
            .set_options(O::FULL_DATE | O::TIME | O::COLON_SEPARATOR_IN_TIME)
            .unwrap();

        // No offset in the text, so the provider resolves the local time.
        let instant = formatter
            .parse_with_provider("2018-09-13T16:40:12", &SummerTime)
            .unwrap();
        assert_eq!(instant.epoch_milliseconds(), 1_536_853_212_000);

        let zone = TimeZone::from(UtcOffset::try_from_seconds(-7_200).unwrap());
        formatter.set_time_zone(zone);
        let instant = formatter.parse("2018-09-13T13:40:12").unwrap();
        assert_eq!(instant.epoch_milliseconds(), 1_536_853_212_000);
    }

    #[test]
    fn text_offset_wins_over_zone() {
        let mut formatter = Iso8601Formatter::new();
        formatter.set_time_zone(TimeZone::from(UtcOffset::try_from_seconds(3_600).unwrap()));
        let instant = formatter.parse(b"2018-09-13T15:40:12Z").unwrap();
        assert_eq!(instant.epoch_milliseconds(), 1_536_853_212_000);
        assert_eq!(instant.to_string(), "2018-09-13T15:40:12Z");
    }

    #[test]
    fn parse_errors_propagate() {
        let formatter = Iso8601Formatter::new();
        assert_eq!(
            formatter.parse("2018-09-13 15:40:12Z").unwrap_err().kind(),
            ErrorKind::MalformedSeparator
        );
        assert_eq!(
            formatter.parse("").unwrap_err().kind(),
            ErrorKind::MalformedNumber
        );
    }

    #[cfg(feature = "sys")]
    #[test]
    fn current_time() {
        let text = Iso8601Formatter::new().format_now().unwrap();
        assert_eq!(text.len(), 20);
        assert!(text.ends_with('Z'));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn archival() {
        let mut formatter = Iso8601Formatter::new();
        formatter.set_options(O::FULL_DATE | O::TIME_ZONE).unwrap();
        formatter.set_time_zone(TimeZone::from(UtcOffset::try_from_seconds(-3_600).unwrap()));

        let json = serde_json::to_string(&formatter).unwrap();
        let restored: Iso8601Formatter = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, formatter);

        let unsupported = r#"{"options":1979,"time_zone":"Utc","capabilities":{"fractional_seconds":false}}"#;
        assert!(serde_json::from_str::<Iso8601Formatter>(unsupported).is_err());
    }
}
