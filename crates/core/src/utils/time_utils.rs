use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Returns the trailing `count` calendar months ending with the month
/// containing `now`, oldest first, as `(year, month)` pairs.
///
/// Months are taken on the UTC calendar; this is the single source of truth
/// for the revenue chart window.
pub fn trailing_months(now: DateTime<Utc>, count: usize) -> Vec<(i32, u32)> {
    let serial = now.year() as i64 * 12 + (now.month() as i64 - 1);
    (0..count as i64)
        .rev()
        .map(|offset| {
            let m = serial - offset;
            (m.div_euclid(12) as i32, (m.rem_euclid(12) + 1) as u32)
        })
        .collect()
}

/// First instant of the given month, UTC.
pub fn month_start_utc(year: i32, month: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        // Unreachable for month in 1..=12
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_trailing_months_within_year() {
        let now = Utc.with_ymd_and_hms(2024, 12, 15, 10, 0, 0).unwrap();
        let months = trailing_months(now, 3);
        assert_eq!(months, vec![(2024, 10), (2024, 11), (2024, 12)]);
    }

    #[test]
    fn test_trailing_months_crosses_year_boundary() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let months = trailing_months(now, 12);
        assert_eq!(months.len(), 12);
        assert_eq!(months.first(), Some(&(2024, 4)));
        assert_eq!(months.last(), Some(&(2025, 3)));
    }

    #[test]
    fn test_trailing_months_are_consecutive() {
        let now = Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap();
        let months = trailing_months(now, 12);
        for pair in months.windows(2) {
            let (y0, m0) = pair[0];
            let (y1, m1) = pair[1];
            let expected = if m0 == 12 { (y0 + 1, 1) } else { (y0, m0 + 1) };
            assert_eq!((y1, m1), expected);
        }
    }

    #[test]
    fn test_month_start_utc() {
        let start = month_start_utc(2024, 5);
        assert_eq!(start.to_rfc3339(), "2024-05-01T00:00:00+00:00");
    }
}
