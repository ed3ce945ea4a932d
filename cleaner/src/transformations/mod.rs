//! Feature engineering for the merged player-game table.
//!
//! # Modules
//!
//! - [`converters`]: scalar converters for birth dates, heights and ages
//! - [`features`]: apply the converters to columns, derive outcomes, filter and project
//!
//! # Example
//!
//! ```no_run
//! use nfl_cleaner::transformations::{derive_outcome, remove_deceased};
//! use polars::prelude::*;
//!
//! # fn example(df: DataFrame) -> nfl_cleaner::error::CleanResult<()> {
//! let with_outcome = derive_outcome(df)?;
//! let living = remove_deceased(with_outcome)?;
//! # Ok(())
//! # }
//! ```

pub mod converters;
pub mod features;


pub use converters::{age_str_to_float, birth_date_to_age, current_age, height_in_inches};
pub use features::{
    add_current_age, convert_age, convert_height, derive_outcome, drop_unused_columns,
    remove_deceased, require_column, transform_variables,
};
