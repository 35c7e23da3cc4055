//! This module implements ISO 8601 formatting.
//!
//! Formatting resolves an instant to [`CalendarComponents`] at a UTC
//! offset and writes the fields selected by the [`FormatOptions`] in a
//! fixed order: year, month, week of year, day, time, UTC offset.
//!
//! Each part of the output is a small `Writeable` record, so the same
//! records back the allocation free [`FormatBuffer`] and `Display`.

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    iso::CalendarComponents,
    options::{Capabilities, FormatOptions, ResolvedFields},
    utils::write_fixed_width,
    Instant, IsoResult, UtcOffset,
};

mod buffer;


pub use buffer::{FormatBuffer, FORMAT_BUFFER_CAPACITY};

/// Formats `instant` as read at `offset`.
///
/// Degenerate options, those with fewer than two bits set, produce an
/// empty buffer.
///
/// ```rust
/// use iso8601_rs::{format, FormatOptions, Instant, UtcOffset};
///
/// let instant = Instant::try_new(1_536_853_212_000).unwrap();
/// let offset = UtcOffset::try_from_seconds(2 * 3600).unwrap();
///
/// let text = format(instant, FormatOptions::default(), offset);
/// assert_eq!(text.as_str(), "2018-09-13T17:40:12+02:00");
///
/// assert!(format(instant, FormatOptions::YEAR, offset).is_empty());
/// ```
#[must_use]
pub fn format(instant: Instant, options: FormatOptions, offset: UtcOffset) -> FormatBuffer {
    format_with_capabilities(instant, options, offset, Capabilities::ALL)
}

/// Formats `instant` as read at `offset`, ignoring any option bits the
/// `capabilities` do not support.
#[must_use]
pub fn format_with_capabilities(
    instant: Instant,
    options: FormatOptions,
    offset: UtcOffset,
    capabilities: Capabilities,
) -> FormatBuffer {
    FormattableIso::try_new_with_capabilities(instant, options, offset, capabilities)
        .map(|formattable| FormatBuffer::from_writeable(&formattable))
        .unwrap_or_default()
}

// ==== Formattable records ====

/// A complete ISO 8601 string for one instant and one set of options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattableIso {
    pub(crate) date: Option<FormattableDate>,
    pub(crate) time: Option<(Option<char>, FormattableTime)>,
    pub(crate) utc_offset: Option<FormattableUtcOffset>,
}

impl FormattableIso {
    /// Prepares `instant` at `offset` for writing with `options`.
    pub fn try_new(instant: Instant, options: FormatOptions, offset: UtcOffset) -> IsoResult<Self> {
        Self::try_new_with_capabilities(instant, options, offset, Capabilities::ALL)
    }

    pub fn try_new_with_capabilities(
        instant: Instant,
        options: FormatOptions,
        offset: UtcOffset,
        capabilities: Capabilities,
    ) -> IsoResult<Self> {
        let fields = ResolvedFields::resolve(options, capabilities)?;
        let components = CalendarComponents::from_instant(instant, offset);
        Ok(Self::from_components(&fields, &components))
    }

    pub(crate) fn from_components(fields: &ResolvedFields, components: &CalendarComponents) -> Self {
        let date = fields
            .date()
            .then(|| FormattableDate::from_components(fields, components));
        let time = fields.time.then(|| {
            let time = components.date_time.time;
            let formattable = FormattableTime {
                hour: time.hour,
                minute: time.minute,
                second: time.second,
                millisecond: fields.fractional_seconds.then_some(time.millisecond),
                include_sep: fields.colon_in_time,
            };
            // The date and time separator only appears between the two.
            let separator = date.is_some().then(|| fields.date_time_separator());
            (separator, formattable)
        });
        let utc_offset = fields
            .time_zone
            .then(|| components.offset.to_formattable(fields.colon_in_time_zone));
        Self {
            date,
            time,
            utc_offset,
        }
    }
}

impl Writeable for FormattableIso {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if let Some(date) = &self.date {
            date.write_to(sink)?;
        }
        if let Some((separator, time)) = &self.time {
            if let Some(separator) = separator {
                sink.write_char(*separator)?;
            }
            time.write_to(sink)?;
        }
        if let Some(offset) = &self.utc_offset {
            offset.write_to(sink)?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let date = self
            .date
            .map_or(LengthHint::exact(0), |d| d.writeable_length_hint());
        let time = self.time.map_or(LengthHint::exact(0), |(separator, t)| {
            t.writeable_length_hint() + usize::from(separator.is_some())
        });
        let offset = self
            .utc_offset
            .map_or(LengthHint::exact(0), |o| o.writeable_length_hint());
        date + time + offset
    }
}

/// How the day field of a date reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormattableDay {
    /// ISO weekday `01` (Monday) to `07` (Sunday), used with a week.
    Weekday(u8),
    /// Two digit day of the month.
    Month(u8),
    /// Three digit day of the year.
    Ordinal(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattableDate {
    pub year: Option<i32>,
    pub month: Option<u8>,
    pub week: Option<u8>,
    pub day: Option<FormattableDay>,
    pub include_sep: bool,
}

impl FormattableDate {
    fn from_components(fields: &ResolvedFields, components: &CalendarComponents) -> Self {
        let date = components.date_time.date;
        let week = fields.week_of_year.then(|| components.iso_week());
        // Week dates are written with the year that owns the week.
        let year = week.map_or(date.year, |w| w.year);
        let day = if week.is_some() {
            FormattableDay::Weekday(components.weekday + 1)
        } else if fields.month {
            FormattableDay::Month(date.day)
        } else {
            FormattableDay::Ordinal(components.day_of_year)
        };
        Self {
            year: fields.year.then_some(year),
            month: fields.month.then_some(date.month),
            week: week.map(|w| w.week),
            day: fields.day.then_some(day),
            include_sep: fields.dash_in_date,
        }
    }

    fn write_separator<W: core::fmt::Write + ?Sized>(
        &self,
        written: bool,
        sink: &mut W,
    ) -> core::fmt::Result {
        if written && self.include_sep {
            sink.write_char('-')?;
        }
        Ok(())
    }

    fn separators(&self) -> usize {
        if !self.include_sep {
            return 0;
        }
        let fields = usize::from(self.year.is_some())
            + usize::from(self.month.is_some())
            + usize::from(self.week.is_some())
            + usize::from(self.day.is_some());
        fields.saturating_sub(1)
    }
}

impl Writeable for FormattableDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let mut written = false;
        if let Some(year) = self.year {
            write_fixed_width(sink, year, 4)?;
            written = true;
        }
        if let Some(month) = self.month {
            self.write_separator(written, sink)?;
            write_fixed_width(sink, i32::from(month), 2)?;
            written = true;
        }
        if let Some(week) = self.week {
            self.write_separator(written, sink)?;
            sink.write_char('W')?;
            write_fixed_width(sink, i32::from(week), 2)?;
            written = true;
        }
        if let Some(day) = self.day {
            self.write_separator(written, sink)?;
            match day {
                FormattableDay::Weekday(day) | FormattableDay::Month(day) => {
                    write_fixed_width(sink, i32::from(day), 2)?;
                }
                FormattableDay::Ordinal(day) => write_fixed_width(sink, i32::from(day), 3)?,
            }
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let year = self.year.map_or(0, year_length);
        let month = if self.month.is_some() { 2 } else { 0 };
        let week = if self.week.is_some() { 3 } else { 0 };
        let day = match self.day {
            Some(FormattableDay::Ordinal(_)) => 3,
            Some(_) => 2,
            None => 0,
        };
        LengthHint::exact(year + month + week + day + self.separators())
    }
}

/// Returns the length of `year` written at a width of 4.
fn year_length(year: i32) -> usize {
    let digits = year.unsigned_abs().checked_ilog10().map_or(1, |d| d as usize + 1);
    (digits + usize::from(year < 0)).max(4)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattableTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: Option<u16>,
    pub include_sep: bool,
}

impl Writeable for FormattableTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_fixed_width(sink, i32::from(self.hour), 2)?;
        if self.include_sep {
            sink.write_char(':')?;
        }
        write_fixed_width(sink, i32::from(self.minute), 2)?;
        if self.include_sep {
            sink.write_char(':')?;
        }
        write_fixed_width(sink, i32::from(self.second), 2)?;
        if let Some(millisecond) = self.millisecond {
            sink.write_char('.')?;
            write_fixed_width(sink, i32::from(millisecond), 3)?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let sep = usize::from(self.include_sep);
        let fraction = if self.millisecond.is_some() { 4 } else { 0 };
        LengthHint::exact(6 + sep * 2 + fraction)
    }
}

/// `Z` for UTC, otherwise `±hh[:]mm`, followed by `[:]ss` only when the
/// offset has a seconds remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattableUtcOffset {
    pub seconds: i32,
    pub include_sep: bool,
}

impl FormattableUtcOffset {
    const fn fields(&self) -> (i32, i32, i32) {
        let magnitude = self.seconds.abs();
        (magnitude / 3600, magnitude % 3600 / 60, magnitude % 60)
    }
}

impl Writeable for FormattableUtcOffset {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if self.seconds == 0 {
            return sink.write_char('Z');
        }
        sink.write_char(if self.seconds < 0 { '-' } else { '+' })?;
        let (hour, minute, second) = self.fields();
        write_fixed_width(sink, hour, 2)?;
        if self.include_sep {
            sink.write_char(':')?;
        }
        write_fixed_width(sink, minute, 2)?;
        if second != 0 {
            if self.include_sep {
                sink.write_char(':')?;
            }
            write_fixed_width(sink, second, 2)?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if self.seconds == 0 {
            return LengthHint::exact(1);
        }
        let sep = usize::from(self.include_sep);
        let (_, _, second) = self.fields();
        let seconds = if second != 0 { 2 + sep } else { 0 };
        LengthHint::exact(5 + sep + seconds)
    }
}

impl_display_with_writeable!(FormattableIso);
impl_display_with_writeable!(FormattableDate);
impl_display_with_writeable!(FormattableTime);
impl_display_with_writeable!(FormattableUtcOffset);
