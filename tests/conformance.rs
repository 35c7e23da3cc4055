//! Checks that internet date-time output is accepted by an independent
//! RFC 9557 parser.

use ixdtf::parsers::IxdtfParser;
use iso8601_rs::{format, FormatOptions, Instant, UtcOffset, MS_MAX_INSTANT};

fn instants() -> impl Iterator<Item = Instant> {
    // Every 37 days and 11 hours from 1900 through 2100.
    let step = (37 * 24 + 11) * 3_600_000 + 123;
    (-2_208_988_800_000_i64..4_102_444_800_000)
        .step_by(step)
        .map(|ms| Instant::try_new(ms).unwrap())
}

#[test]
fn internet_date_time_is_rfc3339() {
    let offsets = [0, 19_800, -28_800, 3_600 * 14, -3_600 * 12];
    for instant in instants() {
        for seconds in offsets {
            let offset = UtcOffset::try_from_seconds(seconds).unwrap();
            for options in [
                FormatOptions::INTERNET_DATE_TIME,
                FormatOptions::INTERNET_DATE_TIME | FormatOptions::FRACTIONAL_SECONDS,
            ] {
                let text = format(instant, options, offset);
                let record = IxdtfParser::from_utf8(text.as_bytes())
                    .parse()
                    .unwrap_or_else(|e| panic!("{text} was rejected: {e:?}"));
                assert!(record.offset.is_some(), "{text}");

                let expected = iso8601_rs::parse_record(text.as_bytes(), options).unwrap();
                let date = record.date.unwrap();
                assert_eq!(
                    (date.year, date.month, date.day),
                    (
                        expected.date_time.date.year,
                        expected.date_time.date.month,
                        expected.date_time.date.day
                    ),
                    "{text}"
                );
                let time = record.time.unwrap();
                assert_eq!(
                    (time.hour, time.minute, time.second),
                    (
                        expected.date_time.time.hour,
                        expected.date_time.time.minute,
                        expected.date_time.time.second
                    ),
                    "{text}"
                );
            }
        }
    }
}

#[test]
fn extended_years_are_not_rfc3339() {
    let far_future = Instant::try_new(MS_MAX_INSTANT).unwrap();
    let text = format(far_future, FormatOptions::INTERNET_DATE_TIME, UtcOffset::UTC);
    assert_eq!(text.as_str(), "275760-09-13T00:00:00Z");
    assert!(IxdtfParser::from_utf8(text.as_bytes()).parse().is_err());
}
