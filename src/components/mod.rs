//! The primary value types provided by `iso8601_rs`.
//!
//! An [`Instant`] is a point on the UTC timeline, a [`UtcOffset`] or
//! [`TimeZone`] says how that point reads on a wall clock, and
//! [`Iso8601Formatter`] ties both to a set of format options.

mod formatter;
mod instant;
mod timezone;

#[doc(inline)]
pub use formatter::Iso8601Formatter;
#[doc(inline)]
pub use instant::Instant;
#[doc(inline)]
pub use timezone::{TimeZone, UtcOffset};
