use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%Y/%m/%dT%H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
];

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f %:z", "%Y-%m-%d %H:%M:%S%.f%z"];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%Y%m%d"];

/// Zone suffixes that mean UTC.
const UTC_SUFFIXES: &[&str] = &[" UTC", "UTC", " GMT", "Z", "z"];

/// Parse an `execution_end` value. Offsets are normalised to UTC.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, fmt) {
            return Some(dt.naive_utc());
        }
    }

    let local = UTC_SUFFIXES
        .iter()
        .find_map(|suffix| value.strip_suffix(suffix))
        .map(str::trim_end)
        .unwrap_or(value);

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(local, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(local, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, mi, s).unwrap()
    }

    #[test]
    fn test_common_formats() {
        let expected = ymd_hms(2024, 1, 2, 13, 45, 0);
        assert_eq!(parse_timestamp("2024-01-02 13:45:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-02T13:45:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-02 13:45"), Some(expected));
        assert_eq!(parse_timestamp("01/02/2024 13:45"), Some(expected));
        assert_eq!(parse_timestamp(" 2024-01-02 13:45:00 "), Some(expected));
        assert_eq!(parse_timestamp("2024/01/02 13:45"), Some(expected));
        assert_eq!(parse_timestamp("2024/01/02 13:45:00"), Some(expected));
        assert_eq!(parse_timestamp("2024/01/02T13:45:00"), Some(expected));
        assert_eq!(parse_timestamp("2024/01/02T13:45"), Some(expected));
        assert_eq!(parse_timestamp("1/2/2024 13:45:00"), Some(expected));
    }

    #[test]
    fn test_utc_suffixes() {
        let expected = ymd_hms(2024, 1, 2, 13, 45, 0);
        assert_eq!(parse_timestamp("2024-01-02 13:45:00 UTC"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-02 13:45:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-02T13:45Z"), Some(expected));
        assert_eq!(parse_timestamp("2024/01/02 13:45 GMT"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-02 UTC"), Some(ymd_hms(2024, 1, 2, 0, 0, 0)));
    }

    #[test]
    fn test_space_separated_offset() {
        assert_eq!(parse_timestamp("2024-01-02 15:45:00+02:00"), Some(ymd_hms(2024, 1, 2, 13, 45, 0)));
        assert_eq!(parse_timestamp("2024-01-02 15:45:00 +02:00"), Some(ymd_hms(2024, 1, 2, 13, 45, 0)));
    }

    #[test]
    fn test_rfc3339_normalised_to_utc() {
        assert_eq!(parse_timestamp("2024-01-02T15:45:00+02:00"), Some(ymd_hms(2024, 1, 2, 13, 45, 0)));
    }

    #[test]
    fn test_date_only() {
        assert_eq!(parse_timestamp("2024-01-02"), Some(ymd_hms(2024, 1, 2, 0, 0, 0)));
        assert_eq!(parse_timestamp("20240102"), Some(ymd_hms(2024, 1, 2, 0, 0, 0)));
    }

    #[test]
    fn test_fractional_seconds() {
        let parsed = parse_timestamp("2024-01-02 13:45:00.250").unwrap();
        assert_eq!(parsed.and_utc().timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_garbage() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2024-13-45"), None);
    }
}
