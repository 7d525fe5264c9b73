use std::path::Path;

use regex::Regex;

use crate::batting::BattingRecord;
use crate::bowling::BowlingRecord;
use crate::config::Config;
use crate::criterion::{BattingCriterion, BowlingCriterion, Criterion};
use crate::error::AnalysisError;
use crate::loader::load;
use crate::record_shape::RecordShape;
use crate::serialize::to_json;
use crate::sort::sort;

/// Load a factsheet, order it and render it as JSON in one call
///
/// # Examples
/// ```no_run
/// use std::path::PathBuf;
/// use cricket_stats_sort::analyser::Analyser;
/// use cricket_stats_sort::criterion::{BattingCriterion, BowlingCriterion};
///
/// fn report(most_runs: PathBuf, most_wickets: PathBuf) -> Result<(), cricket_stats_sort::error::AnalysisError> {
///     let mut analyser = Analyser::new();
///     analyser.with_pretty(true);
///     println!("{}", analyser.sort_batting(&most_runs, BattingCriterion::AverageAndSr)?);
///     println!("{}", analyser.sort_bowling(&most_wickets, BowlingCriterion::Economy)?);
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Analyser {
    config: Config,
}

impl Analyser {
    /// Create a default Analyser.
    ///
    /// * The default field separator is a comma (',')
    /// * rows whose first cell starts with '#' are ignored
    /// * JSON output is compact
    pub fn new() -> Analyser {
        Analyser {
            config: Config::default(),
        }
    }

    /// Create an Analyser from a prepared [Config]
    pub fn from_config(config: Config) -> Analyser {
        Analyser {
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Set the field separator. The default is ','
    pub fn with_field_separator(&mut self, field_separator: u8) {
        self.config = self.config.clone().with_field_separator(field_separator);
    }

    /// Specify which rows to ignore. Each row whose first cell matches the regex is skipped.
    pub fn with_ignore_rows(&mut self, r: Regex) {
        self.config = self.config.clone().with_ignore_rows(Some(r));
    }

    /// Keep every row, including those starting with '#'
    pub fn with_all_rows(&mut self) {
        self.config = self.config.clone().with_ignore_rows(None);
    }

    /// Render indented JSON
    pub fn with_pretty(&mut self, pretty: bool) {
        self.config = self.config.clone().with_pretty(pretty);
    }

    /// Number of records of shape `R` in a file
    pub fn load_count<R: RecordShape>(&self, path: &Path) -> Result<usize, AnalysisError> {
        Ok(load::<R>(path, &self.config)?.len())
    }

    pub fn load_batting(&self, path: &Path) -> Result<Vec<BattingRecord>, AnalysisError> {
        load::<BattingRecord>(path, &self.config)
    }

    pub fn load_bowling(&self, path: &Path) -> Result<Vec<BowlingRecord>, AnalysisError> {
        load::<BowlingRecord>(path, &self.config)
    }

    /// Load the records a criterion applies to and order them
    pub fn sorted<C: Criterion>(&self, path: &Path, criterion: C) -> Result<Vec<C::Record>, AnalysisError> {
        let records = load::<C::Record>(path, &self.config)?;
        sort(&records, criterion)
    }

    /// Load, order and serialize a batting factsheet
    pub fn sort_batting(&self, path: &Path, criterion: BattingCriterion) -> Result<String, AnalysisError> {
        let sorted = self.sorted(path, criterion)?;
        to_json(&sorted, self.config.pretty())
    }

    /// Load, order and serialize a bowling factsheet
    pub fn sort_bowling(&self, path: &Path, criterion: BowlingCriterion) -> Result<String, AnalysisError> {
        let sorted = self.sorted(path, criterion)?;
        to_json(&sorted, self.config.pretty())
    }

    /// Same as [Analyser::sort_batting] with the criterion given by name, for example "AVERAGE_AND_SR"
    pub fn sort_batting_by_name(&self, path: &Path, criterion: &str) -> Result<String, AnalysisError> {
        self.sort_batting(path, BattingCriterion::from_name(criterion)?)
    }

    /// Same as [Analyser::sort_bowling] with the criterion given by name, for example "ECONOMY"
    pub fn sort_bowling_by_name(&self, path: &Path, criterion: &str) -> Result<String, AnalysisError> {
        self.sort_bowling(path, BowlingCriterion::from_name(criterion)?)
    }
}
