//! ISO 8601 week-date equations.
//!
//! An ISO year is made up of 52 or 53 weeks starting on Monday. Week 1 is the
//! week that contains the first Thursday of the year, or equivalently the
//! week containing January 4. Dates at the edges of a civil year can therefore
//! belong to the last week of the previous ISO year or to week 1 of the next.

use crate::gregorian::{
    days_in_year, epoch_days_from_ymd, is_leap_year, weekday_from_epoch_days, weekday_of,
    ymd_from_epoch_days,
};

/// The ISO week a calendar date belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoWeek {
    /// The week-owning year, which may differ from the civil year.
    pub year: i32,
    /// The 1-based week number.
    pub week: u8,
}

/// Computes the ISO week of a date given its civil `year`, 1-based
/// `day_of_year` and ISO `weekday` (`0` = Monday).
pub const fn iso_week_of(year: i32, day_of_year: u16, weekday: u8) -> IsoWeek {
    let yday = day_of_year as i32 - 1;
    let days_after_first_weekday = weekday as i32;

    let use_previous_year = days_after_first_weekday - yday > 3;
    let use_next_year = yday - days_after_first_weekday + 7 - days_in_year(year) as i32 >= 4;
    if use_next_year {
        return IsoWeek {
            year: year + 1,
            week: 1,
        };
    }

    let mut days_to_divide = yday - days_after_first_weekday;
    let mut week_year = year;
    if use_previous_year {
        days_to_divide += days_in_year(year - 1) as i32;
        week_year -= 1;
    }
    // Whether the first days of the year counted toward this year or the previous one.
    let mut week = days_to_divide / 7;
    if days_to_divide % 7 >= 4 {
        week += 1;
    }

    IsoWeek {
        year: week_year,
        week: (week + 1) as u8,
    }
}

/// Returns the number of weeks in the ISO year `iso_year`.
pub const fn weeks_in_iso_year(iso_year: i32) -> u8 {
    let jan_first = weekday_of(iso_year, 1, 1);
    if jan_first == 3 || (jan_first == 2 && is_leap_year(iso_year)) {
        53
    } else {
        52
    }
}

/// Converts an ISO week date into a calendar `(year, month, day)`.
///
/// `iso_day_of_week` uses the ISO numbering of `1` (Monday) to `7` (Sunday).
/// The returned year may differ from `iso_year` for weeks that straddle a
/// year boundary.
pub const fn iso_week_date_to_calendar_date(
    iso_year: i32,
    iso_week: u8,
    iso_day_of_week: u8,
) -> (i32, u8, u8) {
    // January 4 is always in week 1.
    let jan_fourth = epoch_days_from_ymd(iso_year, 1, 4);
    let week_one_monday = jan_fourth - weekday_from_epoch_days(jan_fourth) as i64;
    let target = week_one_monday + 7 * (iso_week as i64 - 1) + (iso_day_of_week as i64 - 1);
    ymd_from_epoch_days(target as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gregorian::month_day_to_day_of_year;

    fn week_of(year: i32, month: u8, day: u8) -> (i32, u8) {
        let day_of_year = month_day_to_day_of_year(year, month, day).unwrap();
        let week = iso_week_of(year, day_of_year, weekday_of(year, month, day));
        (week.year, week.week)
    }

    #[test]
    fn year_boundary_weeks() {
        assert_eq!(week_of(2023, 1, 1), (2022, 52));
        assert_eq!(week_of(2023, 1, 2), (2023, 1));
        assert_eq!(week_of(2024, 12, 31), (2025, 1));
        assert_eq!(week_of(2024, 12, 29), (2024, 52));
        assert_eq!(week_of(2021, 1, 3), (2020, 53));
        assert_eq!(week_of(2020, 12, 31), (2020, 53));
        assert_eq!(week_of(2021, 1, 4), (2021, 1));
        assert_eq!(week_of(2021, 12, 31), (2021, 52));
        assert_eq!(week_of(2026, 1, 1), (2026, 1));
    }

    #[test]
    fn mid_year_weeks() {
        assert_eq!(week_of(2018, 9, 13), (2018, 37));
        assert_eq!(week_of(1970, 1, 1), (1970, 1));
        assert_eq!(week_of(2000, 2, 29), (2000, 9));
    }

    #[test]
    fn weeks_per_year() {
        assert_eq!(weeks_in_iso_year(2020), 53);
        assert_eq!(weeks_in_iso_year(2015), 53);
        assert_eq!(weeks_in_iso_year(2026), 53);
        assert_eq!(weeks_in_iso_year(2021), 52);
        assert_eq!(weeks_in_iso_year(2024), 52);
    }

    #[test]
    fn week_date_to_calendar() {
        assert_eq!(iso_week_date_to_calendar_date(2022, 52, 7), (2023, 1, 1));
        assert_eq!(iso_week_date_to_calendar_date(2025, 1, 2), (2024, 12, 31));
        assert_eq!(iso_week_date_to_calendar_date(2020, 53, 7), (2021, 1, 3));
        assert_eq!(iso_week_date_to_calendar_date(2018, 37, 4), (2018, 9, 13));
        assert_eq!(iso_week_date_to_calendar_date(2009, 1, 1), (2008, 12, 29));
    }

    #[test]
    fn week_date_inverse() {
        for year in [1999, 2000, 2020, 2021, 2024] {
            for day_of_year in 1..=days_in_year(year) {
                let (month, day) = crate::day_of_year_to_month_day(year, day_of_year).unwrap();
                let weekday = weekday_of(year, month, day);
                let week = iso_week_of(year, day_of_year, weekday);
                assert_eq!(
                    iso_week_date_to_calendar_date(week.year, week.week, weekday + 1),
                    (year, month, day)
                );
            }
        }
    }
}
