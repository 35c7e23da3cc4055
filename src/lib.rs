//! The `iso8601_rs` crate is an allocation free ISO 8601 formatter and
//! parser for millisecond precision instants.
//!
//! ```rust
//! use iso8601_rs::{format, parse, FormatOptions, Instant, UtcOffset};
//!
//! let instant = Instant::from_seconds_f64(1_536_853_212.345).unwrap();
//! let options = FormatOptions::default() | FormatOptions::FRACTIONAL_SECONDS;
//!
//! let text = format(instant, options, UtcOffset::UTC);
//! assert_eq!(text.as_str(), "2018-09-13T15:40:12.345Z");
//! assert_eq!(parse(text.as_bytes(), options, UtcOffset::UTC).unwrap(), instant);
//! ```
//!
//! Output is shaped by a [`FormatOptions`] bitmask selecting the fields
//! (year, month, week of year, day, time, UTC offset) and their separators.
//! Formatting writes into a fixed capacity [`FormatBuffer`] without
//! touching the heap, and parsing reads back exactly what the formatter
//! writes for the same options.
//!
//! Time zone rules are deliberately outside the codec: format and parse
//! calls take a resolved [`UtcOffset`], and [`Iso8601Formatter`] looks one
//! up through a [`TimeZoneProvider`].
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,

    // It may be worth to look if we can fix the issues highlighted by these lints.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod format;
pub mod iso;
pub mod options;
pub mod parsers;
pub(crate) mod primitive;
pub mod provider;
pub mod utils;

mod components;

#[cfg(feature = "sys")]
pub(crate) mod sys;

/// Re-export of the proleptic Gregorian and ISO week calendar math.
pub use date_equations as calendar;

#[doc(inline)]
pub use error::{ErrorKind, IsoError};

/// The `iso8601_rs` result type
pub type IsoResult<T> = Result<T, IsoError>;

pub use crate::components::{Instant, Iso8601Formatter, TimeZone, UtcOffset};
pub use crate::format::{format, FormatBuffer};
pub use crate::options::{Capabilities, FormatOptions};
pub use crate::parsers::{parse, parse_record};
pub use crate::provider::TimeZoneProvider;

// Relevant numeric constants
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
/// Max Instant millisecond constant
pub const MS_MAX_INSTANT: i64 = MS_PER_DAY * 100_000_000;
/// Min Instant millisecond constant
pub const MS_MIN_INSTANT: i64 = -MS_MAX_INSTANT;
