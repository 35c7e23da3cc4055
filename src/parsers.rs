//! This module implements ISO 8601 parsing.
//!
//! Parsing accepts exactly what [`format`](crate::format()) writes for the
//! same options. Fields are read in formatting order and every separator
//! the formatter would emit must be present, with no backtracking. The
//! only leniencies are that numeric fields may carry fewer digits than
//! their formatted width, fractional seconds may follow a `,` as well as a
//! `.` and may carry more than three digits, and a trailing UTC offset may
//! be left out.

use crate::{
    iso::{IsoDate, IsoDateTime, IsoTime},
    options::{Capabilities, FormatOptions, ResolvedFields},
    utils::{read_digits, read_unsigned_digits},
    Instant, IsoError, IsoResult, UtcOffset,
};

mod timezone;


/// The year assumed when the text has no year field.
const PLACEHOLDER_YEAR: i32 = 2000;

/// Returns `$err`, logging it along with the byte position it occurred at.
macro_rules! parse_bail {
    ($position:expr, $err:expr $(,)?) => {{
        let err: IsoError = $err;
        #[cfg(feature = "log")]
        log::debug!("ISO 8601 parse failed at byte {}: {}", $position, err);
        #[cfg(not(feature = "log"))]
        let _ = $position;
        return Err(err);
    }};
}

pub(crate) use parse_bail;

/// A parsed wall-clock reading and the UTC offset found in the text, if any.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDateTime {
    pub date_time: IsoDateTime,
    pub offset: Option<UtcOffset>,
}

impl ParsedDateTime {
    /// Returns the milliseconds since the epoch of the wall-clock reading
    /// taken as UTC.
    #[inline]
    #[must_use]
    pub fn local_milliseconds(&self) -> i64 {
        self.date_time.to_local_milliseconds()
    }

    /// Resolves the reading to an `Instant`, using `default_offset` when
    /// the text carried no offset.
    pub fn to_instant(&self, default_offset: UtcOffset) -> IsoResult<Instant> {
        let offset = self.offset.unwrap_or(default_offset);
        Instant::try_new(self.local_milliseconds() - i64::from(offset.seconds()) * 1_000)
    }
}

/// Parses `text` into an `Instant`.
///
/// `default_offset` applies when the text carries no UTC offset, either
/// because the options do not include one or because the text ends
/// before it.
///
/// ```rust
/// use iso8601_rs::{parse, FormatOptions, UtcOffset};
///
/// let options = FormatOptions::default();
/// let instant = parse(b"2018-09-13T17:40:12+02:00", options, UtcOffset::UTC).unwrap();
/// assert_eq!(instant.epoch_milliseconds(), 1_536_853_212_000);
///
/// assert!(parse(b"2018-09-13T17:40:12+02:00", FormatOptions::YEAR, UtcOffset::UTC).is_err());
/// ```
pub fn parse(text: &[u8], options: FormatOptions, default_offset: UtcOffset) -> IsoResult<Instant> {
    parse_with_capabilities(text, options, default_offset, Capabilities::ALL)
}

/// Parses `text` into an `Instant`, ignoring any option bits the
/// `capabilities` do not support.
pub fn parse_with_capabilities(
    text: &[u8],
    options: FormatOptions,
    default_offset: UtcOffset,
    capabilities: Capabilities,
) -> IsoResult<Instant> {
    parse_record_with_capabilities(text, options, capabilities)?.to_instant(default_offset)
}

/// Parses `text` into its wall-clock reading and optional UTC offset.
pub fn parse_record(text: &[u8], options: FormatOptions) -> IsoResult<ParsedDateTime> {
    parse_record_with_capabilities(text, options, Capabilities::ALL)
}

pub fn parse_record_with_capabilities(
    text: &[u8],
    options: FormatOptions,
    capabilities: Capabilities,
) -> IsoResult<ParsedDateTime> {
    let fields = ResolvedFields::resolve(options, capabilities)?;
    let mut cursor = Cursor::new(text);
    if cursor.is_end() {
        parse_bail!(0, IsoError::malformed_number().with_message("input is empty."));
    }

    let date = parse_date(&mut cursor, &fields)?;
    let time = if fields.time {
        if fields.date() {
            cursor.expect(fields.date_time_separator())?;
        }
        parse_time(&mut cursor, &fields)?
    } else {
        IsoTime::default()
    };
    let offset = if fields.time_zone && !cursor.is_end() {
        Some(timezone::parse_utc_offset(
            &mut cursor,
            fields.colon_in_time_zone,
        )?)
    } else {
        None
    };

    if !cursor.is_end() {
        parse_bail!(
            cursor.position(),
            IsoError::malformed_separator().with_message("unexpected trailing characters.")
        );
    }

    Ok(ParsedDateTime {
        date_time: IsoDateTime::new_unchecked(date, time),
        offset,
    })
}

fn parse_date(cursor: &mut Cursor<'_>, fields: &ResolvedFields) -> IsoResult<IsoDate> {
    let mut year = PLACEHOLDER_YEAR;
    let mut month = None;
    let mut week = None;
    let mut day = None;

    let mut read_field = false;
    if fields.year {
        year = cursor.signed_number(4)?;
        read_field = true;
    }
    if fields.month {
        cursor.date_separator(fields, read_field)?;
        month = Some(cursor.number(Some(2))?);
        read_field = true;
    }
    if fields.week_of_year {
        cursor.date_separator(fields, read_field)?;
        cursor.expect('W')?;
        week = Some(cursor.number(Some(2))?);
        read_field = true;
    }
    if fields.day {
        cursor.date_separator(fields, read_field)?;
        // Weekday and day of month take two digits, day of year takes any.
        let width = (week.is_some() || month.is_some()).then_some(2);
        day = Some(cursor.number(width)?);
    }

    let start = cursor.position();
    let date = match (week, month, day) {
        // The week date decides the calendar year, which may differ from
        // the year field near year boundaries.
        (Some(week), _, weekday) => IsoDate::from_iso_week_date(year, week, weekday.unwrap_or(1)),
        (None, Some(month), day) => IsoDate::try_new(year, month, day.unwrap_or(1)),
        (None, None, Some(ordinal)) => IsoDate::from_ordinal(year, ordinal),
        (None, None, None) => IsoDate::try_new(year, 1, 1),
    };
    match date {
        Ok(date) => Ok(date),
        Err(err) => parse_bail!(start, err),
    }
}

fn parse_time(cursor: &mut Cursor<'_>, fields: &ResolvedFields) -> IsoResult<IsoTime> {
    let start = cursor.position();
    let hour = cursor.number(Some(2))?;
    if fields.colon_in_time {
        cursor.expect(':')?;
    }
    let minute = cursor.number(Some(2))?;
    if fields.colon_in_time {
        cursor.expect(':')?;
    }
    let second = cursor.number(Some(2))?;

    let millisecond = if fields.fractional_seconds {
        if !(cursor.next_if(b'.') || cursor.next_if(b',')) {
            parse_bail!(
                cursor.position(),
                IsoError::malformed_separator().with_message("expected a fraction separator.")
            );
        }
        parse_milliseconds(cursor)?
    } else {
        0
    };

    match IsoTime::try_new(hour, minute, second, millisecond) {
        Ok(time) => Ok(time),
        Err(err) => parse_bail!(start, err),
    }
}

/// Reads up to three significant fraction digits, scaled to milliseconds,
/// and discards any further digits.
fn parse_milliseconds(cursor: &mut Cursor<'_>) -> IsoResult<i32> {
    let start = cursor.position();
    let value = cursor.number(Some(3))?;
    let digits = cursor.position() - start;
    while cursor.peek().is_some_and(|byte| byte.is_ascii_digit()) {
        cursor.advance();
    }
    Ok(value * 10_i32.pow(3 - digits as u32))
}

// ==== Cursor ====

/// A forward only reader over the input bytes.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) const fn new(source: &'a [u8]) -> Self {
        Self { source, pos: 0 }
    }

    #[inline]
    pub(crate) const fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) const fn is_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    fn remaining(&self) -> &'a [u8] {
        self.source.get(self.pos..).unwrap_or_default()
    }

    /// Consumes `byte` if it is next.
    pub(crate) fn next_if(&mut self, byte: u8) -> bool {
        let matched = self.peek() == Some(byte);
        if matched {
            self.advance();
        }
        matched
    }

    /// Consumes `expected` or fails with a malformed separator.
    pub(crate) fn expect(&mut self, expected: char) -> IsoResult<()> {
        let matches = u8::try_from(expected).is_ok_and(|byte| self.next_if(byte));
        if !matches {
            parse_bail!(
                self.pos,
                IsoError::malformed_separator().with_message("expected separator was not found.")
            );
        }
        Ok(())
    }

    fn date_separator(&mut self, fields: &ResolvedFields, after_field: bool) -> IsoResult<()> {
        if fields.dash_in_date && after_field {
            self.expect('-')?;
        }
        Ok(())
    }

    /// Reads an unsigned number of at most `max_digits` digits.
    pub(crate) fn number(&mut self, max_digits: Option<usize>) -> IsoResult<i32> {
        match read_unsigned_digits(self.remaining(), max_digits) {
            Ok((value, consumed)) => {
                self.pos += consumed;
                Ok(value)
            }
            Err(err) => parse_bail!(self.pos, err),
        }
    }

    /// Reads a number of at most `max_digits` digits after an optional `-`.
    pub(crate) fn signed_number(&mut self, max_digits: usize) -> IsoResult<i32> {
        match read_digits(self.remaining(), Some(max_digits)) {
            Ok((value, consumed)) => {
                self.pos += consumed;
                Ok(value)
            }
            Err(err) => parse_bail!(self.pos, err),
        }
    }
}
