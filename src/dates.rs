// src/dates.rs
use chrono::NaiveDate;

use crate::error::{Error, Result};

/// First game on basketball-reference with play-by-play data.
pub const FIRST_PBP_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1996, 11, 1) {
    Some(d) => d,
    None => panic!("static cutoff date"),
};

const DATE_FMT: &str = "%Y-%m-%d";

pub fn parse_day(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FMT)
        .map_err(|e| Error::MalformedDateRange(format!("{s}: {e} (expected YYYY-MM-DD)")))
}

/// Expand [start, end] into every calendar day, inclusive.
/// Fatal before any network activity: end before start, or a start earlier
/// than the play-by-play cutoff.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
    if end < start {
        return Err(Error::MalformedDateRange(format!(
            "end {end} is before start {start}"
        )));
    }
    if start < FIRST_PBP_DATE {
        return Err(Error::MalformedDateRange(format!(
            "start {start} predates play-by-play data (first available: {FIRST_PBP_DATE})"
        )));
    }
    Ok(start.iter_days().take_while(|d| *d <= end).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        parse_day(s).unwrap()
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let days = date_range(day("2022-01-05"), day("2022-01-07")).unwrap();
        assert_eq!(days.len(), 3);
        assert_eq!(days[0], day("2022-01-05"));
        assert_eq!(days[2], day("2022-01-07"));
    }

    #[test]
    fn single_day_range() {
        let days = date_range(day("2022-01-05"), day("2022-01-05")).unwrap();
        assert_eq!(days, vec![day("2022-01-05")]);
    }

    #[test]
    fn end_before_start_is_fatal() {
        let err = date_range(day("2022-01-07"), day("2022-01-05")).unwrap_err();
        assert!(matches!(err, Error::MalformedDateRange(_)));
    }

    #[test]
    fn start_before_cutoff_is_fatal() {
        let err = date_range(day("1995-03-01"), day("1995-03-02")).unwrap_err();
        assert!(matches!(err, Error::MalformedDateRange(_)));
    }

    #[test]
    fn garbage_date_string_is_fatal() {
        assert!(matches!(
            parse_day("01/05/2022"),
            Err(Error::MalformedDateRange(_))
        ));
    }
}
