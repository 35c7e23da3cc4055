use crate::{
    options::{Capabilities, FormatOptions},
    IsoError, IsoResult,
};

/// The effective fields of a [`FormatOptions`] set, shared by the formatter
/// and the parser so that both agree on what text looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct ResolvedFields {
    pub(crate) year: bool,
    pub(crate) month: bool,
    pub(crate) week_of_year: bool,
    pub(crate) day: bool,
    pub(crate) time: bool,
    pub(crate) time_zone: bool,
    pub(crate) fractional_seconds: bool,
    pub(crate) space_before_time: bool,
    pub(crate) dash_in_date: bool,
    pub(crate) colon_in_time: bool,
    pub(crate) colon_in_time_zone: bool,
}

impl ResolvedFields {
    /// Resolves the fields of `options`, refusing degenerate sets.
    ///
    /// The degenerate check applies to the bits as given. Capabilities only
    /// remove the bits they do not support afterwards.
    pub(crate) fn resolve(options: FormatOptions, capabilities: Capabilities) -> IsoResult<Self> {
        if !options.is_usable() {
            return Err(IsoError::degenerate_options()
                .with_message("options must contain at least two components."));
        }
        let options = capabilities.restrict(options);
        Ok(Self {
            year: options.contains(FormatOptions::YEAR),
            month: options.contains(FormatOptions::MONTH),
            week_of_year: options.contains(FormatOptions::WEEK_OF_YEAR)
                && !options.is_full_internet_date_time(),
            day: options.contains(FormatOptions::DAY),
            time: options.contains(FormatOptions::TIME),
            time_zone: options.contains(FormatOptions::TIME_ZONE),
            fractional_seconds: options.contains(FormatOptions::FRACTIONAL_SECONDS),
            space_before_time: options.contains(FormatOptions::SPACE_BETWEEN_DATE_AND_TIME),
            dash_in_date: options.contains(FormatOptions::DASH_SEPARATOR_IN_DATE),
            colon_in_time: options.contains(FormatOptions::COLON_SEPARATOR_IN_TIME),
            colon_in_time_zone: options.contains(FormatOptions::COLON_SEPARATOR_IN_TIME_ZONE),
        })
    }

    #[inline]
    pub(crate) const fn date(&self) -> bool {
        self.year || self.month || self.week_of_year || self.day
    }

    #[inline]
    pub(crate) const fn date_time_separator(&self) -> char {
        if self.space_before_time {
            ' '
        } else {
            'T'
        }
    }
}
