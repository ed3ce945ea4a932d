//! Cleans NFL game and player-profile records into a training dataset.
//!
//! The pipeline joins the two record sets, converts the compact height/age
//! strings to numbers, derives `current_age`, `win` and `score_diff`, drops
//! rows for deceased players and writes the result as CSV.
//!
//! ```no_run
//! use nfl_cleaner::{CleanConfig, CleaningPipeline};
//!
//! let report = CleaningPipeline::with_config(CleanConfig::default())
//!     .run()
//!     .expect("cleaning failed");
//! println!("{} rows written", report.written_rows);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod preprocessing;
pub mod transformations;

pub use config::CleanConfig;
pub use error::{CleanError, CleanResult, ConvertError};
pub use preprocessing::{clean_dataset, CleanReport, CleanedData, CleaningPipeline};
