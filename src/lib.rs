//! This crate loads cricket statistics factsheets from delimited text files and orders them by
//! named criteria. For example the IPL "most runs" and "most wickets" tables published as CSV.
//!
//! A factsheet is a file of delimited rows whose first row names the columns ("POS", "PLAYER",
//! "Mat", "Avg", "SR", "Econ", "4w", ...). Rows are mapped to [batting::BattingRecord] or
//! [bowling::BowlingRecord] by column name, so the column order does not matter. Cells that do
//! not hold a valid number, such as the "-" placeholder for an undefined average, take a default
//! value instead of failing the load.
//!
//! The records are then ordered by a [criterion::BattingCriterion] or
//! [criterion::BowlingCriterion]. Every criterion orders "higher is better" descending, except
//! economy where fewer runs per over is better. Composite criteria break ties on the primary key
//! with a secondary key, each key in its own direction, and records tied on every key keep their
//! file order.
//!
//! # Examples
//! ```no_run
//! use std::path::PathBuf;
//! use cricket_stats_sort::analyser::Analyser;
//! use cricket_stats_sort::criterion::BowlingCriterion;
//!
//! fn best_economy(most_wickets: PathBuf) -> Result<String, cricket_stats_sort::error::AnalysisError> {
//!     let mut analyser = Analyser::new();
//!
//!     // tab separated input. The default is a comma.
//!     analyser.with_field_separator(b'\t');
//!
//!     // JSON array of bowling records, lowest economy first
//!     analyser.sort_bowling(&most_wickets, BowlingCriterion::Economy)
//! }
//! ```
//!

pub mod analyser;
pub mod batting;
pub mod bowling;
pub mod config;
pub mod criterion;
pub mod error;
pub mod field;
pub mod field_type;
pub mod key;
pub mod loader;
pub mod mapping;
pub mod order;
pub mod record_shape;
pub mod serialize;
pub mod sort;
