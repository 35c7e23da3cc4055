//! # Date Equations
//!
//! Date Equations is a small library of `const` calendar calculations for the
//! proleptic Gregorian calendar and the ISO 8601 week-date system.
//!
//! Epoch day conversion is informed by the work done by Cassio Neri and
//! Lorenz Schneider on applying Euclidean affine functions to calendar
//! algorithms.
//!
//! ```rust
//! use date_equations::{gregorian, iso_week};
//!
//! assert_eq!(gregorian::ymd_from_epoch_days(0), (1970, 1, 1));
//!
//! // 2023-01-01 is a Sunday and belongs to the last ISO week of 2022.
//! let week = iso_week::iso_week_of(2023, 1, 6);
//! assert_eq!((week.year, week.week), (2022, 52));
//! ```
#![no_std]

pub mod gregorian;
pub mod iso_week;

pub use gregorian::{
    day_of_year_to_month_day, days_in_month, days_in_year, epoch_days_from_ymd, is_leap_year,
    month_day_to_day_of_year, weekday_from_epoch_days, weekday_of, ymd_from_epoch_days,
};
pub use iso_week::{iso_week_date_to_calendar_date, iso_week_of, weeks_in_iso_year, IsoWeek};
