use chrono::NaiveDate;
use polars::prelude::*;
use std::path::{Path, PathBuf};

use crate::config::CleanConfig;
use crate::error::{CleanError, CleanResult};
use crate::io::loaders::{RecordSource, RecordsLoader};
use crate::io::writer::write_training_csv;
use crate::preprocessing::merge::natural_inner_join;
use crate::transformations::features::{
    derive_outcome, drop_unused_columns, remove_deceased, transform_variables,
};

/// Cleaned table plus the row counts seen along the way
#[derive(Debug)]
pub struct CleanedData {
    /// Training rows, led by the row-index column
    pub dataframe: DataFrame,
    /// Rows produced by the join
    pub merged_rows: usize,
    /// Joined rows removed because the player has died
    pub deceased_rows: usize,
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct CleanReport {
    pub merged_rows: usize,
    pub deceased_rows: usize,
    pub written_rows: usize,
    pub columns: Vec<String>,
    pub output_path: PathBuf,
}

/// Games + profiles -> training data pipeline
pub struct CleaningPipeline {
    config: CleanConfig,
}

impl CleaningPipeline {
    /// Create a new pipeline with default configuration
    pub fn new() -> Self {
        Self {
            config: CleanConfig::default(),
        }
    }

    /// Create a pipeline with custom configuration
    pub fn with_config(config: CleanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CleanConfig {
        &self.config
    }

    /// Load both inputs, clean them and write the training CSV.
    ///
    /// Nothing is written unless every step succeeds.
    pub fn run(&self) -> CleanResult<CleanReport> {
        let paths = &self.config.paths;

        let games = RecordsLoader::load_from_file(&paths.games, RecordSource::Games)?;
        let profiles = RecordsLoader::load_from_file(&paths.profiles, RecordSource::Profiles)?;

        let mut cleaned = self.clean(&games.dataframe, &profiles.dataframe)?;

        println!("\tWriting to csv...");
        write_training_csv(&mut cleaned.dataframe, &paths.output)?;

        Ok(CleanReport {
            merged_rows: cleaned.merged_rows,
            deceased_rows: cleaned.deceased_rows,
            written_rows: cleaned.dataframe.height(),
            columns: column_names(&cleaned.dataframe),
            output_path: paths.output.clone(),
        })
    }

    /// Join, transform, filter and project in memory.
    ///
    /// # Arguments
    /// * `games` - One row per player-game
    /// * `profiles` - One row per player
    ///
    /// # Returns
    /// `CleanedData` whose DataFrame starts with the row-index column. The
    /// index is the row position after the join, so filtered rows leave gaps.
    pub fn clean(&self, games: &DataFrame, profiles: &DataFrame) -> CleanResult<CleanedData> {
        self.clean_at(games, profiles, self.config.today())
    }

    fn clean_at(
        &self,
        games: &DataFrame,
        profiles: &DataFrame,
        today: NaiveDate,
    ) -> CleanResult<CleanedData> {
        // Step 1: Join
        println!("\tMerging datasets...");
        let merged = natural_inner_join(games, profiles)?;
        let merged_rows = merged.height();
        log::info!(
            "Merged {} games with {} profiles into {} rows",
            games.height(),
            profiles.height(),
            merged_rows
        );

        let index_label = self.config.output.index_label.as_str();
        if merged.column(index_label).is_ok() {
            return Err(CleanError::Schema(format!(
                "input column '{}' clashes with output.index_label; choose another label",
                index_label
            )));
        }
        let mut df = merged.with_row_index(index_label.into(), None)?;

        // Step 2-3: Field conversions and outcome features
        println!("\tTransforming variables...");
        transform_variables(&mut df, today)?;
        let df = derive_outcome(df)?;

        // Step 4: Living players only
        let mut df = remove_deceased(df)?;
        let deceased_rows = merged_rows - df.height();
        log::info!("Removed {} rows for deceased players", deceased_rows);

        // Step 5: Projection
        println!("\tRemoving unnecessary features...");
        drop_unused_columns(&mut df)?;
        log::debug!("Training columns: {:?}", column_names(&df));

        Ok(CleanedData {
            dataframe: df,
            merged_rows,
            deceased_rows,
        })
    }
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to clean explicit input files into `output_path`
pub fn clean_dataset(
    games_path: &Path,
    profiles_path: &Path,
    output_path: &Path,
) -> CleanResult<CleanReport> {
    let config = CleanConfig::with_paths(games_path, profiles_path, output_path);
    CleaningPipeline::with_config(config).run()
}

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2017, 12, 4).unwrap()
    }

    fn games() -> DataFrame {
        df! {
            "player_id" => [1i64, 2, 1],
            "age" => ["23-120", "30", "23-127"],
            "player_team_score" => [21i64, 10, 3],
            "opponent_score" => [14i64, 17, 3],
        }
        .unwrap()
    }

    fn profiles() -> DataFrame {
        df! {
            "player_id" => [1i64, 2],
            "height" => [Some("6-2"), None],
            "birth_date" => ["1990-12-05", "1950-01-01"],
            "death_date" => [None, Some("2001-05-05")],
            "hof_induction_year" => [None, Some(1995i64)],
        }
        .unwrap()
    }

    #[test]
    fn test_clean_filters_and_projects() {
        let pipeline = CleaningPipeline::new();
        let cleaned = pipeline.clean_at(&games(), &profiles(), today()).unwrap();

        assert_eq!(cleaned.merged_rows, 3);
        assert_eq!(cleaned.deceased_rows, 1);

        let df = &cleaned.dataframe;
        assert_eq!(df.height(), 2);
        assert_eq!(
            column_names(df),
            vec![
                "index",
                "age",
                "player_team_score",
                "opponent_score",
                "height",
                "current_age",
                "win",
                "score_diff"
            ]
        );
    }

    #[test]
    fn test_clean_index_keeps_merged_positions() {
        let pipeline = CleaningPipeline::new();
        let cleaned = pipeline.clean_at(&games(), &profiles(), today()).unwrap();

        let index: Vec<Option<IdxSize>> = cleaned
            .dataframe
            .column("index")
            .unwrap()
            .idx()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(index, vec![Some(0), Some(2)]);
    }

    #[test]
    fn test_clean_feature_values() {
        let pipeline = CleaningPipeline::new();
        let cleaned = pipeline.clean_at(&games(), &profiles(), today()).unwrap();
        let df = &cleaned.dataframe;

        let current_age = df.column("current_age").unwrap().i64().unwrap();
        assert_eq!(current_age.get(0), Some(26));

        let height = df.column("height").unwrap().f64().unwrap();
        assert_eq!(height.get(0), Some(74.0));

        let age = df.column("age").unwrap().f64().unwrap();
        assert!((age.get(0).unwrap() - (23.0 + 120.0 / 365.0)).abs() < 1e-12);

        let win = df.column("win").unwrap().bool().unwrap();
        assert_eq!(win.get(0), Some(true));
        assert_eq!(win.get(1), Some(false));

        let diff = df.column("score_diff").unwrap().i64().unwrap();
        assert_eq!(diff.get(0), Some(7));
        assert_eq!(diff.get(1), Some(0));
    }

    #[test]
    fn test_clean_parse_error_reports_row() {
        let mut games = games();
        games
            .with_column(Series::new("age".into(), ["23-120", "30", "old"]))
            .unwrap();

        let err = CleaningPipeline::new()
            .clean_at(&games, &profiles(), today())
            .unwrap_err();

        match err {
            CleanError::Parse { column, row, source } => {
                assert_eq!(column, "age");
                // third merged row: the second game of player 1
                assert_eq!(row, 2);
                assert_eq!(source, ConvertError::InvalidAge("old".to_string()));
            }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_clean_missing_column_is_schema_error() {
        let profiles = profiles().drop("hof_induction_year").unwrap();

        let err = CleaningPipeline::new()
            .clean_at(&games(), &profiles, today())
            .unwrap_err();
        assert!(matches!(err, CleanError::Schema(msg) if msg.contains("hof_induction_year")));
    }

    #[test]
    fn test_clean_null_birth_date_is_parse_error() {
        let mut profiles = profiles();
        profiles
            .with_column(Series::new("birth_date".into(), [Some("1990-12-05"), None::<&str>]))
            .unwrap();

        let err = CleaningPipeline::new()
            .clean_at(&games(), &profiles, today())
            .unwrap_err();
        assert!(matches!(
            err,
            CleanError::Parse { source: ConvertError::MissingDate, .. }
        ));
    }

    #[test]
    fn test_clean_index_label_clash_is_schema_error() {
        let mut games = games();
        games
            .with_column(Series::new("index".into(), [10i64, 11, 12]))
            .unwrap();

        let err = CleaningPipeline::new()
            .clean_at(&games, &profiles(), today())
            .unwrap_err();
        assert!(matches!(err, CleanError::Schema(msg) if msg.contains("output.index_label")));
    }

    #[test]
    fn test_clean_custom_index_label_avoids_clash() {
        let mut games = games();
        games
            .with_column(Series::new("index".into(), [10i64, 11, 12]))
            .unwrap();

        let mut config = CleanConfig::default();
        config.output.index_label = "row".to_string();
        let cleaned = CleaningPipeline::with_config(config)
            .clean_at(&games, &profiles(), today())
            .unwrap();

        let names = column_names(&cleaned.dataframe);
        assert_eq!(names[0], "row");
        assert!(names.contains(&"index".to_string()));
    }
}
