//! Orchestration of the cleaning steps.
//!
//! - [`merge`]: natural inner join of games and profiles
//! - [`pipeline`]: the end-to-end run, from input files to training CSV

pub mod merge;
pub mod pipeline;

pub use merge::natural_inner_join;
pub use pipeline::{clean_dataset, CleanReport, CleanedData, CleaningPipeline};
