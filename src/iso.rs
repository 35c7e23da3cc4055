//! This module implements the ISO calendar components.
//!
//! The main records are:
//!   - `IsoDate`
//!   - `IsoTime`
//!   - `IsoDateTime`
//!   - `CalendarComponents`
//!
//! An `IsoDateTime` is a wall-clock reading in the proleptic Gregorian
//! calendar. `CalendarComponents` extends it with the derived day of year,
//! weekday and the UTC offset the reading was taken at, which is everything
//! the formatter needs to write a string.

use date_equations::{
    day_of_year_to_month_day, days_in_month, epoch_days_from_ymd, iso_week_date_to_calendar_date,
    iso_week_of, month_day_to_day_of_year, weekday_of, weeks_in_iso_year, ymd_from_epoch_days,
    IsoWeek,
};

use crate::{Instant, IsoError, IsoResult, UtcOffset, MS_PER_DAY};

const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// `IsoDateTime` is the record of an `IsoDate` and an `IsoTime`.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
}

impl IsoDateTime {
    /// Creates a new `IsoDateTime` without any validation.
    pub(crate) const fn new_unchecked(date: IsoDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Splits local epoch milliseconds into a wall-clock reading.
    pub(crate) fn from_local_milliseconds(milliseconds: i64) -> Self {
        let days = milliseconds.div_euclid(MS_PER_DAY);
        let time = IsoTime::from_milliseconds_of_day(milliseconds.rem_euclid(MS_PER_DAY));
        // Local instants stay within a day of the instant range.
        let (year, month, day) = ymd_from_epoch_days(days as i32);
        Self::new_unchecked(IsoDate::new_unchecked(year, month, day), time)
    }

    /// Returns the milliseconds since the epoch of this reading as if it
    /// were taken at UTC.
    ///
    /// A leap second of `60` folds into the following minute.
    #[must_use]
    pub fn to_local_milliseconds(&self) -> i64 {
        self.date.to_epoch_days() * MS_PER_DAY + self.time.to_milliseconds()
    }
}

// ==== `IsoDate` section ====

/// `IsoDate` serves as a record for a proleptic Gregorian calendar date.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl Default for IsoDate {
    fn default() -> Self {
        Self::new_unchecked(1970, 1, 1)
    }
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `IsoDate`, rejecting dates that do not exist.
    pub fn try_new(year: i32, month: i32, day: i32) -> IsoResult<Self> {
        let (Ok(month), Ok(day)) = (u8::try_from(month), u8::try_from(day)) else {
            return Err(IsoError::invalid_date().with_message("month or day is out of range."));
        };
        if day == 0 || day > days_in_month(year, month) {
            return Err(IsoError::invalid_date().with_message("date does not exist."));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Creates an `IsoDate` from a 1-based day of `year`.
    pub fn from_ordinal(year: i32, day_of_year: i32) -> IsoResult<Self> {
        u16::try_from(day_of_year)
            .ok()
            .and_then(|day_of_year| day_of_year_to_month_day(year, day_of_year))
            .map(|(month, day)| Self::new_unchecked(year, month, day))
            .ok_or(IsoError::invalid_date().with_message("day of year is out of range."))
    }

    /// Creates an `IsoDate` from an ISO week date.
    ///
    /// `weekday` is numbered from `1` (Monday) to `7` (Sunday). The
    /// resulting year differs from `iso_year` for weeks that straddle a
    /// year boundary.
    pub fn from_iso_week_date(iso_year: i32, week: i32, weekday: i32) -> IsoResult<Self> {
        if week < 1 || week > i32::from(weeks_in_iso_year(iso_year)) {
            return Err(IsoError::invalid_date().with_message("week of year is out of range."));
        }
        if !(1..=7).contains(&weekday) {
            return Err(IsoError::invalid_date().with_message("weekday is out of range."));
        }
        let (year, month, day) =
            iso_week_date_to_calendar_date(iso_year, week as u8, weekday as u8);
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Returns the days since 1970-01-01.
    #[inline]
    #[must_use]
    pub const fn to_epoch_days(self) -> i64 {
        epoch_days_from_ymd(self.year, self.month, self.day)
    }

    /// Returns the 1-based day of the year.
    #[inline]
    #[must_use]
    pub const fn day_of_year(self) -> u16 {
        match month_day_to_day_of_year(self.year, self.month, self.day) {
            Some(day_of_year) => day_of_year,
            None => 0,
        }
    }

    /// Returns the ISO weekday where `0` is Monday and `6` is Sunday.
    #[inline]
    #[must_use]
    pub const fn weekday(self) -> u8 {
        weekday_of(self.year, self.month, self.day)
    }
}

// ==== `IsoTime` section ====

/// An `IsoTime` record that contains the time of day up to milliseconds.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl IsoTime {
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, second: u8, millisecond: u16) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Creates a new `IsoTime`, accepting a leap second of `60`.
    pub fn try_new(hour: i32, minute: i32, second: i32, millisecond: i32) -> IsoResult<Self> {
        if !(0..=23).contains(&hour)
            || !(0..=59).contains(&minute)
            || !(0..=60).contains(&second)
            || !(0..=999).contains(&millisecond)
        {
            return Err(IsoError::invalid_date().with_message("time of day is out of range."));
        }
        Ok(Self::new_unchecked(
            hour as u8,
            minute as u8,
            second as u8,
            millisecond as u16,
        ))
    }

    pub(crate) fn from_milliseconds_of_day(milliseconds: i64) -> Self {
        debug_assert!((0..MS_PER_DAY).contains(&milliseconds));
        Self::new_unchecked(
            (milliseconds / MS_PER_HOUR) as u8,
            (milliseconds % MS_PER_HOUR / MS_PER_MINUTE) as u8,
            (milliseconds % MS_PER_MINUTE / MS_PER_SECOND) as u8,
            (milliseconds % MS_PER_SECOND) as u16,
        )
    }

    /// Returns the milliseconds elapsed since midnight.
    #[inline]
    #[must_use]
    pub fn to_milliseconds(self) -> i64 {
        i64::from(self.hour) * MS_PER_HOUR
            + i64::from(self.minute) * MS_PER_MINUTE
            + i64::from(self.second) * MS_PER_SECOND
            + i64::from(self.millisecond)
    }
}

// ==== `CalendarComponents` section ====

/// The broken down fields of an instant at a UTC offset.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarComponents {
    pub date_time: IsoDateTime,
    /// The 1-based day of the year.
    pub day_of_year: u16,
    /// The ISO weekday, `0` being Monday.
    pub weekday: u8,
    pub offset: UtcOffset,
}

impl CalendarComponents {
    /// Resolves `instant` to a wall-clock reading at `offset`.
    #[must_use]
    pub fn from_instant(instant: Instant, offset: UtcOffset) -> Self {
        let local = instant.epoch_milliseconds() + i64::from(offset.seconds()) * MS_PER_SECOND;
        let date_time = IsoDateTime::from_local_milliseconds(local);
        Self {
            date_time,
            day_of_year: date_time.date.day_of_year(),
            weekday: date_time.date.weekday(),
            offset,
        }
    }

    /// Returns the ISO week and its owning year.
    #[inline]
    #[must_use]
    pub fn iso_week(&self) -> IsoWeek {
        iso_week_of(self.date_time.date.year, self.day_of_year, self.weekday)
    }
}
