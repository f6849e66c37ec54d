use core::fmt::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// The default format of temporal fields, `YYYY-MM-DD hh:mm:ss`.
pub const DEFAULT_TEMPORAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const FALLBACK_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a date-time string.
///
/// Tries `format` first, then RFC 3339 (converted to UTC), then
/// `%Y-%m-%dT%H:%M:%S%.f`, `%Y-%m-%d %H:%M:%S%.f` and finally a bare
/// `%Y-%m-%d` at midnight.
///
/// # Examples
///
/// ```
/// use om_object::assemble::parse_temporal;
///
/// let a = parse_temporal("2020-01-01 12:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let b = parse_temporal("2020-01-01T14:30:00+02:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(a, b);
///
/// assert!(parse_temporal("yesterday", "%Y-%m-%d %H:%M:%S").is_none());
/// ```
pub fn parse_temporal(input: &str, format: &str) -> Option<NaiveDateTime> {
    let input = input.trim();

    if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
        return Some(parsed);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.naive_utc());
    }
    for fallback in FALLBACK_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, fallback) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Formats `value` with `format`.
///
/// An invalid `format` falls back to [`DEFAULT_TEMPORAL_FORMAT`].
pub fn format_temporal(value: &NaiveDateTime, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", value.format(format)).is_ok() {
        return out;
    }
    log::warn!("invalid temporal format `{format}`, using `{DEFAULT_TEMPORAL_FORMAT}`");
    value.format(DEFAULT_TEMPORAL_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{DEFAULT_TEMPORAL_FORMAT, format_temporal, parse_temporal};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, s).unwrap()
    }

    #[test]
    fn accepted_formats() {
        let expected = at(2020, 1, 1, 0, 0, 0);
        for input in [
            "2020-01-01 00:00:00",
            "2020-01-01T00:00:00",
            "2020-01-01T00:00:00.000",
            "2020-01-01T00:00:00Z",
            "2020-01-01",
            " 2020-01-01 00:00:00 ",
        ] {
            assert_eq!(parse_temporal(input, DEFAULT_TEMPORAL_FORMAT), Some(expected), "{input}");
        }
    }

    #[test]
    fn custom_format_first() {
        assert_eq!(
            parse_temporal("01/02/2020 10:00", "%d/%m/%Y %H:%M"),
            Some(at(2020, 2, 1, 10, 0, 0)),
        );
        assert!(parse_temporal("2020-13-01", DEFAULT_TEMPORAL_FORMAT).is_none());
    }

    #[test]
    fn format_falls_back() {
        let value = at(2021, 6, 15, 8, 5, 0);
        assert_eq!(format_temporal(&value, "%d.%m.%Y"), "15.06.2021");
        assert_eq!(format_temporal(&value, "%Q"), "2021-06-15 08:05:00");
    }
}
