//! Scalar converters for the compact string encodings used in player data.
//!
//! Football reference data stores heights as `"6-2"` (feet-inches) and ages
//! as `"23-120"` (years-days). These functions turn those strings, and the
//! ISO birth date, into plain numbers a model can consume. Missing heights
//! and ages stay missing; a missing or malformed birth date is an error.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::ConvertError;

/// Format accepted for `birth_date` values
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Days per year used for the fractional part of an age
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Number of full years between `date` (YYYY-MM-DD) and `today`.
///
/// A birthday later in the calendar year than `today` has not happened yet,
/// so one year is subtracted from the plain year difference. The comparison
/// is made on `(month, day)` tuples.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use nfl_cleaner::transformations::converters::birth_date_to_age;
///
/// let today = NaiveDate::from_ymd_opt(2017, 12, 4).unwrap();
/// assert_eq!(birth_date_to_age("1990-12-05", today).unwrap(), 26);
/// assert_eq!(birth_date_to_age("1990-12-04", today).unwrap(), 27);
/// ```
pub fn birth_date_to_age(date: &str, today: NaiveDate) -> Result<i64, ConvertError> {
    let birth = NaiveDate::parse_from_str(date, BIRTH_DATE_FORMAT)
        .map_err(|_| ConvertError::InvalidDate(date.to_string()))?;

    let before_birthday = (today.month(), today.day()) < (birth.month(), birth.day());

    Ok(i64::from(today.year() - birth.year()) - i64::from(before_birthday))
}

/// Current age in full years, relative to the local date.
pub fn current_age(date: &str) -> Result<i64, ConvertError> {
    birth_date_to_age(date, Local::now().date_naive())
}

/// Convert a `"<feet>-<inches>"` height to inches.
///
/// Absent or empty input is returned as `None`. Anything after the second
/// dash-separated part must still be numeric but is ignored.
///
/// # Examples
///
/// ```
/// use nfl_cleaner::transformations::converters::height_in_inches;
///
/// assert_eq!(height_in_inches(Some("6-2")).unwrap(), Some(74.0));
/// assert_eq!(height_in_inches(None).unwrap(), None);
/// assert!(height_in_inches(Some("6")).is_err());
/// ```
pub fn height_in_inches(height: Option<&str>) -> Result<Option<f64>, ConvertError> {
    let Some(raw) = height.filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let invalid = || ConvertError::InvalidHeight(raw.to_string());
    let parts = parse_dash_separated(raw).ok_or_else(invalid)?;

    match parts.as_slice() {
        [feet, inches, ..] => Ok(Some(feet * 12.0 + inches)),
        _ => Err(invalid()),
    }
}

/// Convert a `"<years>"` or `"<years>-<days>"` age to fractional years.
///
/// # Examples
///
/// ```
/// use nfl_cleaner::transformations::converters::age_str_to_float;
///
/// assert_eq!(age_str_to_float(Some("30")).unwrap(), Some(30.0));
/// let age = age_str_to_float(Some("30-200")).unwrap().unwrap();
/// assert!((age - 30.547945).abs() < 1e-6);
/// assert_eq!(age_str_to_float(Some("")).unwrap(), None);
/// ```
pub fn age_str_to_float(age: Option<&str>) -> Result<Option<f64>, ConvertError> {
    let Some(raw) = age.filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let parts = parse_dash_separated(raw).ok_or_else(|| ConvertError::InvalidAge(raw.to_string()))?;

    let years = parts[0];
    let days = parts.get(1).map_or(0.0, |days| days / DAYS_PER_YEAR);

    Ok(Some(years + days))
}

/// Parse every `-`-separated part as a float; `None` if any part fails.
fn parse_dash_separated(raw: &str) -> Option<Vec<f64>> {
    raw.split('-')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect()
}
