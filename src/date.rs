//! Formatting of dump date stamps.

use time::{Date, Month, macros::format_description};

/// Errors that may occur when converting a date stamp.
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    /// The date stamp was not eight ASCII digits.
    #[error("invalid date format '{0}': expected YYYYMMDD")]
    InvalidFormat(String),

    /// The date stamp was well-formed but is not a real date.
    #[error("invalid date '{0}': {1}")]
    InvalidDate(String, #[source] time::error::ComponentRange),

    /// The formatter failed.
    #[error("format error: {0}")]
    Format(#[from] time::error::Format),
}

/// Converts a `YYYYMMDD` date stamp, as used in dump directory names, into
/// a long-form English date like “October 10, 2012”.
pub fn convert_date(token: &str) -> Result<String, DateError> {
    let date = parse_date(token)?;
    Ok(date.format(format_description!("[month repr:long] [day], [year]"))?)
}

/// Parses a `YYYYMMDD` date stamp.
pub fn parse_date(token: &str) -> Result<Date, DateError> {
    if token.len() != 8 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::InvalidFormat(token.to_string()));
    }

    let invalid = |err| DateError::InvalidDate(token.to_string(), err);
    let year = digits(token, 0..4)?;
    let month = Month::try_from(digits::<u8>(token, 4..6)?).map_err(invalid)?;
    let day = digits(token, 6..8)?;

    Date::from_calendar_date(year, month, day).map_err(invalid)
}

/// Parses the digits at `range` of an already validated date stamp.
fn digits<T: core::str::FromStr>(
    token: &str,
    range: core::ops::Range<usize>,
) -> Result<T, DateError> {
    token[range]
        .parse()
        .map_err(|_| DateError::InvalidFormat(token.to_string()))
}
