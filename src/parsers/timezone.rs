//! UTC offset parsing.

use crate::{IsoError, IsoResult, UtcOffset};

use super::{parse_bail, Cursor};

/// Parses `Z` or a signed `hh[:]mm` offset with an optional `[:]ss`.
///
/// Seconds are only read when more input follows the minutes in the form
/// the separator setting calls for.
pub(crate) fn parse_utc_offset(cursor: &mut Cursor<'_>, include_sep: bool) -> IsoResult<UtcOffset> {
    let start = cursor.position();
    let negative = match cursor.peek() {
        Some(b'Z') => {
            cursor.advance();
            return Ok(UtcOffset::UTC);
        }
        Some(b'+') => false,
        Some(b'-') => true,
        _ => parse_bail!(
            start,
            IsoError::malformed_separator().with_message("expected `Z`, `+` or `-` offset sign.")
        ),
    };
    cursor.advance();

    let hour = cursor.number(Some(2))?;
    if include_sep {
        cursor.expect(':')?;
    }
    let minute = cursor.number(Some(2))?;

    let has_seconds = if include_sep {
        cursor.next_if(b':')
    } else {
        cursor.peek().is_some_and(|byte| byte.is_ascii_digit())
    };
    let second = if has_seconds {
        cursor.number(Some(2))?
    } else {
        0
    };

    match UtcOffset::try_from_hms(negative, hour, minute, second) {
        Ok(offset) => Ok(offset),
        Err(err) => parse_bail!(start, err),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_utc_offset;
    use crate::{parsers::Cursor, ErrorKind};

    fn offset_seconds(text: &str, include_sep: bool) -> Result<i32, ErrorKind> {
        let mut cursor = Cursor::new(text.as_bytes());
        let offset = parse_utc_offset(&mut cursor, include_sep).map_err(|e| e.kind())?;
        assert!(cursor.is_end(), "{text} was not fully consumed");
        Ok(offset.seconds())
    }

    #[test]
    fn extended_offsets() {
        assert_eq!(offset_seconds("Z", true), Ok(0));
        assert_eq!(offset_seconds("+05:30", true), Ok(19_800));
        assert_eq!(offset_seconds("+05:30:15", true), Ok(19_815));
        assert_eq!(offset_seconds("-08:00", true), Ok(-28_800));
        assert_eq!(offset_seconds("-00:00:59", true), Ok(-59));
        assert_eq!(offset_seconds("+0530", true), Err(ErrorKind::MalformedSeparator));
    }

    #[test]
    fn basic_offsets() {
        assert_eq!(offset_seconds("+0530", false), Ok(19_800));
        assert_eq!(offset_seconds("+053015", false), Ok(19_815));
        assert_eq!(offset_seconds("-0800", false), Ok(-28_800));
    }

    #[test]
    fn malformed_offsets() {
        assert_eq!(offset_seconds("x05:00", true), Err(ErrorKind::MalformedSeparator));
        assert_eq!(offset_seconds("+", true), Err(ErrorKind::MalformedNumber));
        assert_eq!(offset_seconds("+05:", true), Err(ErrorKind::MalformedNumber));
        assert_eq!(offset_seconds("+05:30:", true), Err(ErrorKind::MalformedNumber));
        assert_eq!(offset_seconds("+24:00", true), Err(ErrorKind::InvalidCalendarDate));
        assert_eq!(offset_seconds("+05:60", true), Err(ErrorKind::InvalidCalendarDate));
    }
}
