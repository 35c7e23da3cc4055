//! This module implements the `IsoError`.

use core::fmt;

/// `IsoError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// The options carry fewer than two set bits.
    DegenerateOptions,
    /// The options carry bits that are not recognized.
    InvalidOptions,
    /// Expected digits were absent, or a non-digit appeared where a number
    /// was required.
    MalformedNumber,
    /// An expected literal character was absent.
    MalformedSeparator,
    /// The parsed fields do not describe a real date or time of day.
    InvalidCalendarDate,
    /// A value is outside of the supported range.
    Range,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::DegenerateOptions => "DegenerateOptions",
            Self::InvalidOptions => "InvalidOptions",
            Self::MalformedNumber => "MalformedNumber",
            Self::MalformedSeparator => "MalformedSeparator",
            Self::InvalidCalendarDate => "InvalidCalendarDate",
            Self::Range => "RangeError",
        }
        .fmt(f)
    }
}

/// The error type for `iso8601_rs`.
///
/// Messages are static so that producing an error never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoError {
    kind: ErrorKind,
    msg: &'static str,
}

impl IsoError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self { kind, msg: "" }
    }

    /// Create a generic error
    #[inline]
    #[must_use]
    pub const fn general(msg: &'static str) -> Self {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create a degenerate options error.
    #[inline]
    #[must_use]
    pub const fn degenerate_options() -> Self {
        Self::new(ErrorKind::DegenerateOptions)
    }

    /// Create an invalid options error.
    #[inline]
    #[must_use]
    pub const fn invalid_options() -> Self {
        Self::new(ErrorKind::InvalidOptions)
    }

    /// Create a malformed number error.
    #[inline]
    #[must_use]
    pub const fn malformed_number() -> Self {
        Self::new(ErrorKind::MalformedNumber)
    }

    /// Create a malformed separator error.
    #[inline]
    #[must_use]
    pub const fn malformed_separator() -> Self {
        Self::new(ErrorKind::MalformedSeparator)
    }

    /// Create an invalid calendar date error.
    #[inline]
    #[must_use]
    pub const fn invalid_date() -> Self {
        Self::new(ErrorKind::InvalidCalendarDate)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub const fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = msg;
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.msg
    }
}

impl fmt::Display for IsoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for IsoError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn error_display() {
        let err = IsoError::range().with_message("instant is outside of the supported range");
        assert_eq!(
            err.to_string(),
            "RangeError: instant is outside of the supported range"
        );
        assert_eq!(err.kind(), ErrorKind::Range);

        let bare = IsoError::degenerate_options();
        assert_eq!(bare.to_string(), "DegenerateOptions");
        assert!(bare.message().is_empty());
    }
}
