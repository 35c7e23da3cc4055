//! Fixed width number writing and digit reading.
//!
//! Writing goes through a compile time table of zero padded 4 digit strings
//! for the values `0..3000`, which covers the hour, minute, second,
//! millisecond and day fields as well as every year in common use. Other
//! values fall back to a generic sign and zero pad routine with the same
//! output.

use core::fmt;

use crate::{IsoError, IsoResult};

const TABLE_LEN: usize = 3000;

/// Zero padded 4 digit ASCII renderings of `0..3000`.
static PADDED_DIGITS: [[u8; 4]; TABLE_LEN] = build_padded_digits();

const fn build_padded_digits() -> [[u8; 4]; TABLE_LEN] {
    let mut table = [[b'0'; 4]; TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN {
        table[i] = [
            b'0' + (i / 1000) as u8,
            b'0' + (i / 100 % 10) as u8,
            b'0' + (i / 10 % 10) as u8,
            b'0' + (i % 10) as u8,
        ];
        i += 1;
    }
    table
}

/// Writes `value` zero padded to `width` characters.
///
/// A leading `-` counts toward the width. Values with more digits than
/// `width` are written in full and never truncated.
///
/// ```rust
/// use iso8601_rs::utils::write_fixed_width;
///
/// let mut out = String::new();
/// write_fixed_width(&mut out, 7, 2).unwrap();
/// write_fixed_width(&mut out, -44, 4).unwrap();
/// write_fixed_width(&mut out, 12345, 4).unwrap();
/// assert_eq!(out, "07-04412345");
/// ```
pub fn write_fixed_width<W: fmt::Write + ?Sized>(
    sink: &mut W,
    value: i32,
    width: usize,
) -> fmt::Result {
    if (1..=4).contains(&width) && (0..TABLE_LEN as i32).contains(&value) {
        let entry = &PADDED_DIGITS[value as usize];
        if value < 10_i32.pow(width as u32) {
            return write_ascii(sink, &entry[4 - width..]);
        }
    }
    write_padded(sink, value, width)
}

fn write_padded<W: fmt::Write + ?Sized>(sink: &mut W, value: i32, width: usize) -> fmt::Result {
    let mut digits = [0u8; 10];
    let mut magnitude = value.unsigned_abs();
    let mut start = digits.len();
    loop {
        start -= 1;
        digits[start] = b'0' + (magnitude % 10) as u8;
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }
    let digits = &digits[start..];

    let sign = usize::from(value < 0);
    if sign == 1 {
        sink.write_char('-')?;
    }
    for _ in (sign + digits.len())..width {
        sink.write_char('0')?;
    }
    write_ascii(sink, digits)
}

#[inline]
fn write_ascii<W: fmt::Write + ?Sized>(sink: &mut W, bytes: &[u8]) -> fmt::Result {
    bytes
        .iter()
        .try_for_each(|&byte| sink.write_char(char::from(byte)))
}

/// Reads an optional `-` followed by up to `max_digits` ASCII digits from
/// the start of `bytes`.
///
/// `None` reads every leading digit. Returns the value along with the
/// number of bytes consumed, sign included.
///
/// ```rust
/// use iso8601_rs::utils::read_digits;
///
/// assert_eq!(read_digits(b"2023-01", Some(4)), Ok((2023, 4)));
/// assert_eq!(read_digits(b"-0044", Some(4)), Ok((-44, 5)));
/// assert_eq!(read_digits(b"123456", None), Ok((123_456, 6)));
/// assert!(read_digits(b"-x", Some(2)).is_err());
/// ```
pub fn read_digits(bytes: &[u8], max_digits: Option<usize>) -> IsoResult<(i32, usize)> {
    let negative = bytes.first() == Some(&b'-');
    let sign = usize::from(negative);
    let (value, digits) = read_unsigned_digits(&bytes[sign..], max_digits)?;
    let value = if negative { -value } else { value };
    Ok((value, sign + digits))
}

/// Reads up to `max_digits` ASCII digits from the start of `bytes` without
/// accepting a sign.
pub fn read_unsigned_digits(bytes: &[u8], max_digits: Option<usize>) -> IsoResult<(i32, usize)> {
    let limit = max_digits.map_or(bytes.len(), |max| max.min(bytes.len()));
    let mut value: i32 = 0;
    let mut consumed = 0;
    for &byte in bytes[..limit].iter().take_while(|byte| byte.is_ascii_digit()) {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(i32::from(byte - b'0')))
            .ok_or(IsoError::range().with_message("numeric field exceeds the supported range."))?;
        consumed += 1;
    }
    if consumed == 0 {
        return Err(IsoError::malformed_number().with_message("expected at least one digit."));
    }
    Ok((value, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use alloc::string::String;

    fn fixed(value: i32, width: usize) -> String {
        let mut out = String::new();
        write_fixed_width(&mut out, value, width).unwrap();
        out
    }

    #[test]
    fn table_entries() {
        assert_eq!(&PADDED_DIGITS[0], b"0000");
        assert_eq!(&PADDED_DIGITS[7], b"0007");
        assert_eq!(&PADDED_DIGITS[1970], b"1970");
        assert_eq!(&PADDED_DIGITS[2999], b"2999");
    }

    #[test]
    fn fixed_width_fast_path() {
        assert_eq!(fixed(0, 2), "00");
        assert_eq!(fixed(9, 2), "09");
        assert_eq!(fixed(59, 2), "59");
        assert_eq!(fixed(7, 3), "007");
        assert_eq!(fixed(366, 3), "366");
        assert_eq!(fixed(999, 3), "999");
        assert_eq!(fixed(2023, 4), "2023");
        assert_eq!(fixed(5, 1), "5");
    }

    #[test]
    fn fixed_width_fallback_matches_padding() {
        assert_eq!(fixed(3000, 4), "3000");
        assert_eq!(fixed(9999, 4), "9999");
        assert_eq!(fixed(12345, 4), "12345");
        assert_eq!(fixed(275_760, 4), "275760");
        assert_eq!(fixed(100, 2), "100");
        assert_eq!(fixed(1000, 3), "1000");
        assert_eq!(fixed(-1, 4), "-001");
        assert_eq!(fixed(-44, 4), "-044");
        assert_eq!(fixed(-12345, 4), "-12345");
        assert_eq!(fixed(i32::MIN, 4), "-2147483648");
        assert_eq!(fixed(0, 0), "0");
        assert_eq!(fixed(42, 6), "000042");
    }

    #[test]
    fn fast_path_agrees_with_fallback() {
        for width in 1..=4 {
            for value in 0..TABLE_LEN as i32 {
                let mut slow = String::new();
                write_padded(&mut slow, value, width).unwrap();
                assert_eq!(fixed(value, width), slow);
            }
        }
    }

    #[test]
    fn digit_limits() {
        assert_eq!(read_digits(b"20231", Some(4)), Ok((2023, 4)));
        assert_eq!(read_digits(b"7a", Some(2)), Ok((7, 1)));
        assert_eq!(read_digits(b"0", Some(2)), Ok((0, 1)));
        assert_eq!(read_digits(b"", None).unwrap_err().kind(), ErrorKind::MalformedNumber);
        assert_eq!(read_digits(b"-", None).unwrap_err().kind(), ErrorKind::MalformedNumber);
        assert_eq!(read_digits(b"12", Some(0)).unwrap_err().kind(), ErrorKind::MalformedNumber);
        assert_eq!(read_unsigned_digits(b"-12", None).unwrap_err().kind(), ErrorKind::MalformedNumber);
    }

    #[test]
    fn digit_overflow() {
        assert_eq!(read_digits(b"2147483647", None), Ok((i32::MAX, 10)));
        assert_eq!(
            read_digits(b"2147483648", None).unwrap_err().kind(),
            ErrorKind::Range
        );
        assert_eq!(
            read_digits(b"99999999999999999999", None).unwrap_err().kind(),
            ErrorKind::Range
        );
    }
}
