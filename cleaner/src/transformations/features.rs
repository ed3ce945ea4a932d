//! Column-level feature engineering on the merged player-game DataFrame.
//!
//! Each step takes the table produced by the previous one. Missing required
//! columns surface as [`CleanError::Schema`], converter failures as
//! [`CleanError::Parse`] with the offending row.

use chrono::NaiveDate;
use polars::prelude::*;

use crate::core::columns::{
    AGE, BIRTH_DATE, CURRENT_AGE, DEATH_DATE, DROPPED_COLUMNS, HEIGHT, OPPONENT_SCORE,
    PLAYER_TEAM_SCORE, SCORE_DIFF, WIN,
};
use crate::error::{CleanError, CleanResult, ConvertError};
use crate::transformations::converters::{age_str_to_float, birth_date_to_age, height_in_inches};

/// Look up a column, reporting absence as a schema error
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> CleanResult<&'a Column> {
    df.column(name).map_err(|_| CleanError::missing_column(name))
}

/// Column values as strings; all-null or numeric columns are cast first.
fn string_column(df: &DataFrame, name: &str) -> CleanResult<StringChunked> {
    let column = require_column(df, name)?.cast(&DataType::String)?;
    Ok(column.str()?.clone())
}

/// Run a converter over every value of a column, stopping at the first failure
fn convert_column<T, F>(df: &DataFrame, name: &str, convert: F) -> CleanResult<Vec<T>>
where
    F: Fn(Option<&str>) -> Result<T, ConvertError>,
{
    let values = string_column(df, name)?;

    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            convert(value).map_err(|source| CleanError::Parse {
                column: name.to_string(),
                row,
                source,
            })
        })
        .collect()
}

/// Append `current_age`, in full years at `today`, computed from `birth_date`.
///
/// `birth_date` itself is left in place. A null birth date is an error.
pub fn add_current_age(df: &mut DataFrame, today: NaiveDate) -> CleanResult<()> {
    let ages: Vec<i64> = convert_column(df, BIRTH_DATE, |value| match value {
        Some(date) => birth_date_to_age(date, today),
        None => Err(ConvertError::MissingDate),
    })?;

    df.with_column(Series::new(CURRENT_AGE.into(), ages))?;
    Ok(())
}

/// Replace the `"feet-inches"` height strings with inches
pub fn convert_height(df: &mut DataFrame) -> CleanResult<()> {
    let inches: Vec<Option<f64>> = convert_column(df, HEIGHT, height_in_inches)?;
    df.with_column(Series::new(HEIGHT.into(), inches))?;
    Ok(())
}

/// Replace the `"years-days"` age strings with fractional years
pub fn convert_age(df: &mut DataFrame) -> CleanResult<()> {
    let years: Vec<Option<f64>> = convert_column(df, AGE, age_str_to_float)?;
    df.with_column(Series::new(AGE.into(), years))?;
    Ok(())
}

/// Apply the three field converters: `current_age`, `height`, `age`.
pub fn transform_variables(df: &mut DataFrame, today: NaiveDate) -> CleanResult<()> {
    add_current_age(df, today)?;
    convert_height(df)?;
    convert_age(df)?;
    Ok(())
}

/// Add `win` (team outscored the opponent) and `score_diff`.
///
/// A null score gives a null `score_diff` and `win = false`.
pub fn derive_outcome(df: DataFrame) -> CleanResult<DataFrame> {
    require_column(&df, PLAYER_TEAM_SCORE)?;
    require_column(&df, OPPONENT_SCORE)?;

    let df = df
        .lazy()
        .with_columns([
            col(PLAYER_TEAM_SCORE)
                .gt(col(OPPONENT_SCORE))
                .fill_null(lit(false))
                .alias(WIN),
            (col(PLAYER_TEAM_SCORE) - col(OPPONENT_SCORE)).alias(SCORE_DIFF),
        ])
        .collect()?;

    Ok(df)
}

/// Keep only rows for living players (`death_date` is null).
pub fn remove_deceased(df: DataFrame) -> CleanResult<DataFrame> {
    require_column(&df, DEATH_DATE)?;

    let df = df.lazy().filter(col(DEATH_DATE).is_null()).collect()?;
    Ok(df)
}

/// Drop the identifier and raw date columns that are not model inputs
pub fn drop_unused_columns(df: &mut DataFrame) -> CleanResult<()> {
    for name in DROPPED_COLUMNS {
        df.drop_in_place(name)
            .map_err(|_| CleanError::missing_column(name))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_column_missing_is_schema_error() {
        let df = df! { "a" => [1i64] }.unwrap();
        assert!(require_column(&df, "a").is_ok());
        assert!(matches!(
            require_column(&df, "b"),
            Err(CleanError::Schema(msg)) if msg.contains("'b'")
        ));
    }

    #[test]
    fn test_string_column_casts_null_column() {
        let df = DataFrame::new(vec![Column::full_null(
            "age".into(),
            2,
            &DataType::Null,
        )])
        .unwrap();

        let values = string_column(&df, "age").unwrap();
        assert_eq!(values.null_count(), 2);
    }
}
