use polars::io::mmap::MmapBytesReader;
use polars::prelude::*;
use std::fs::File;
use std::io::Cursor;
use std::path::Path;

use crate::error::{CleanError, CleanResult};

/// Which side of the join a table comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    Games,
    Profiles,
}

/// Result of loading one records file
#[derive(Debug)]
pub struct RecordsLoadResult {
    pub dataframe: DataFrame,
    pub source: RecordSource,
    pub num_records: usize,
}

impl RecordsLoadResult {
    pub fn new(dataframe: DataFrame, source: RecordSource) -> Self {
        let num_records = dataframe.height();
        Self {
            dataframe,
            source,
            num_records,
        }
    }
}

/// Loads JSON record arrays (`[{...}, {...}]`) into DataFrames
pub struct RecordsLoader;

impl RecordsLoader {
    /// Load a records file from disk
    pub fn load_from_file(path: &Path, source: RecordSource) -> CleanResult<RecordsLoadResult> {
        let file = File::open(path).map_err(|e| CleanError::io(path, e))?;
        let df = read_json_records(file)?;

        log::info!(
            "Loaded {} {:?} records from {}",
            df.height(),
            source,
            path.display()
        );

        Ok(RecordsLoadResult::new(df, source))
    }

    /// Load records from a JSON string
    pub fn load_from_str(json_str: &str, source: RecordSource) -> CleanResult<RecordsLoadResult> {
        let df = read_json_records(Cursor::new(json_str.as_bytes()))?;
        Ok(RecordsLoadResult::new(df, source))
    }
}

/// Decode a JSON array of objects, inferring the schema from every record
fn read_json_records<R: MmapBytesReader>(reader: R) -> CleanResult<DataFrame> {
    let df = JsonReader::new(reader)
        .with_json_format(JsonFormat::Json)
        .infer_schema_len(None)
        .finish()?;
    Ok(df)
}
