//! Gregorian Date Calculations
//!
//! This module contains the proleptic Gregorian equations: leap years,
//! ordinal days, weekdays and the conversion between epoch days and
//! year-month-day triples.
//!
//! All weekdays use the ISO numbering with Monday as `0` and Sunday as `6`.
//! Ordinal days (day of year) are 1-based.
pub mod neri_schneider;

/// Days before the first of each month in a common year.
const CUMULATIVE_DAYS: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// 1970-01-01 was a Thursday.
const EPOCH_WEEKDAY: i64 = 3;

/// Returns whether `year` is a leap year in the proleptic Gregorian calendar.
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

#[inline]
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the number of days in `month` of `year`, or `0` for a month
/// outside of `1..=12`.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

const fn days_before_month(year: i32, month: u8) -> u16 {
    let leap_day = (month > 2 && is_leap_year(year)) as u16;
    CUMULATIVE_DAYS[(month - 1) as usize] + leap_day
}

/// Converts an ordinal day of `year` into a `(month, day)` pair.
///
/// Returns `None` when `day_of_year` is outside of `1..=days_in_year(year)`.
pub const fn day_of_year_to_month_day(year: i32, day_of_year: u16) -> Option<(u8, u8)> {
    if day_of_year == 0 || day_of_year > days_in_year(year) {
        return None;
    }
    let mut month = 12;
    while days_before_month(year, month) >= day_of_year {
        month -= 1;
    }
    let day = day_of_year - days_before_month(year, month);
    Some((month, day as u8))
}

/// Converts a `(month, day)` pair of `year` into an ordinal day.
///
/// Returns `None` when the month and day do not name a real date.
pub const fn month_day_to_day_of_year(year: i32, month: u8, day: u8) -> Option<u16> {
    if month == 0 || month > 12 || day == 0 || day > days_in_month(year, month) {
        return None;
    }
    Some(days_before_month(year, month) + day as u16)
}

/// Returns the ISO weekday (`0` = Monday) for a count of days since 1970-01-01.
#[inline]
pub const fn weekday_from_epoch_days(epoch_days: i64) -> u8 {
    (epoch_days + EPOCH_WEEKDAY).rem_euclid(7) as u8
}

/// Returns the ISO weekday (`0` = Monday) of a calendar date.
#[inline]
pub const fn weekday_of(year: i32, month: u8, day: u8) -> u8 {
    weekday_from_epoch_days(epoch_days_from_ymd(year, month, day))
}

/// Returns the number of days between 1970-01-01 and the provided date.
///
/// The date is not validated, so out of range days roll over into the
/// following months.
#[inline]
pub const fn epoch_days_from_ymd(year: i32, month: u8, day: u8) -> i64 {
    neri_schneider::epoch_days_from_gregorian_date(year, month, day)
}

/// Returns the `(year, month, day)` for a count of days since 1970-01-01.
///
/// Valid for `epoch_days.abs() <= 536_000_000`.
#[inline]
pub const fn ymd_from_epoch_days(epoch_days: i32) -> (i32, u8, u8) {
    neri_schneider::ymd_from_epoch_days(epoch_days)
}
