//! Reading the raw records and writing the training data.
//!
//! # Example
//!
//! ```no_run
//! use nfl_cleaner::io::loaders::{RecordSource, RecordsLoader};
//! use std::path::Path;
//!
//! let result = RecordsLoader::load_from_file(Path::new("games.json"), RecordSource::Games)
//!     .expect("Failed to load");
//! println!("Loaded {} games", result.num_records);
//! ```

pub mod loaders;
pub mod writer;


pub use loaders::{RecordSource, RecordsLoadResult, RecordsLoader};
pub use writer::write_training_csv;
