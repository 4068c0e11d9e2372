use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;

use crate::{PARAM_DELIMITER, PARAM_NAME_DELIMITER, UTC_DESIGNATOR};

lazy_static! {
    static ref RE_TIMESTAMP: Regex =
        Regex::new(r"^([0-9]{4})([0-9]{2})([0-9]{2})T([0-9]{2})([0-9]{2})([0-9]{2})$").unwrap();
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("{0:?} is not of the form YYYYMMDDTHHMMSS")]
    InvalidFormat(String),
    #[error("{0:?} is not a valid date and time")]
    OutOfRange(String),
}

/// Parse a `YYYYMMDDTHHMMSS` timestamp.
///
/// A trailing `Z` is dropped without converting the time, the wall-clock value is used
/// as written.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, TimestampError> {
    let local = value.strip_suffix(UTC_DESIGNATOR).unwrap_or(value);
    let captures = RE_TIMESTAMP
        .captures(local)
        .ok_or_else(|| TimestampError::InvalidFormat(value.to_owned()))?;

    // All groups are fixed-width ASCII digits
    let field = |idx: usize| captures[idx].parse::<u32>().unwrap_or_default();
    let year = captures[1].parse::<i32>().unwrap_or_default();

    NaiveDate::from_ymd_opt(year, field(2), field(3))
        .and_then(|date| date.and_hms_opt(field(4), field(5), field(6)))
        .ok_or_else(|| TimestampError::OutOfRange(value.to_owned()))
}

/// Find the `UNTIL=` part of a recurrence rule and return its date.
///
/// `Ok(None)` means the rule has no end date.
pub fn parse_until(rrule: &str) -> Result<Option<NaiveDate>, TimestampError> {
    let until = rrule.split(PARAM_DELIMITER).find_map(|part| {
        part.split_once(PARAM_NAME_DELIMITER)
            .filter(|(name, _)| *name == "UNTIL")
            .map(|(_, value)| value)
    });

    until
        .map(|until| parse_timestamp(until).map(|datetime| datetime.date()))
        .transpose()
}
