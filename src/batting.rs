use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::field_type::FieldType;
use crate::mapping::MappedRow;
use crate::record_shape::RecordShape;

pub const POS: &str = "POS";
pub const PLAYER: &str = "PLAYER";
pub const MATCHES: &str = "Mat";
pub const INNINGS: &str = "Inns";
pub const NOT_OUTS: &str = "NO";
pub const RUNS: &str = "Runs";
pub const HIGHEST_SCORE: &str = "HS";
pub const AVERAGE: &str = "Avg";
pub const BALLS_FACED: &str = "BF";
pub const STRIKE_RATE: &str = "SR";
pub const HUNDREDS: &str = "100";
pub const FIFTIES: &str = "50";
pub const FOURS: &str = "4s";
pub const SIXES: &str = "6s";

/// One row of a "most runs" batting factsheet.
///
/// `boundaries` is not read from the file, it is always fours plus sixes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattingRecord {
    pub position: String,
    pub player: String,
    pub matches: u32,
    pub innings: u32,
    pub not_outs: u32,
    pub runs: u32,
    pub highest_score: String,
    pub average: f64,
    pub balls_faced: u32,
    pub strike_rate: f64,
    pub hundreds: u32,
    pub fifties: u32,
    pub fours: u32,
    pub sixes: u32,
    pub boundaries: u32,
}

impl BattingRecord {
    /// Numeric part of the highest score, "100*" (not out) gives 100.
    pub fn highest_score_runs(&self) -> u32 {
        self.highest_score
            .trim_end_matches('*')
            .trim()
            .parse()
            .unwrap_or(0)
    }

    /// Whether the highest score was made not out.
    pub fn highest_score_not_out(&self) -> bool {
        self.highest_score.trim_end().ends_with('*')
    }
}

impl RecordShape for BattingRecord {
    const SHAPE: &'static str = "batting";

    fn fields() -> Vec<Field> {
        vec![
            Field::new(POS, FieldType::Text),
            Field::new(PLAYER, FieldType::Text).with_required(true),
            Field::new(MATCHES, FieldType::Integer),
            Field::new(INNINGS, FieldType::Integer),
            Field::new(NOT_OUTS, FieldType::Integer).with_signature(true),
            Field::new(RUNS, FieldType::Integer),
            Field::new(HIGHEST_SCORE, FieldType::Text).with_signature(true),
            Field::new(AVERAGE, FieldType::Number),
            Field::new(BALLS_FACED, FieldType::Integer).with_signature(true),
            Field::new(STRIKE_RATE, FieldType::Number),
            Field::new(HUNDREDS, FieldType::Integer).with_signature(true),
            Field::new(FIFTIES, FieldType::Integer).with_signature(true),
            Field::new(FOURS, FieldType::Integer).with_signature(true),
            Field::new(SIXES, FieldType::Integer).with_signature(true),
        ]
    }

    fn from_row(row: &MappedRow) -> Self {
        let fours = row.count(FOURS);
        let sixes = row.count(SIXES);
        BattingRecord {
            position: row.text(POS),
            player: row.text(PLAYER),
            matches: row.count(MATCHES),
            innings: row.count(INNINGS),
            not_outs: row.count(NOT_OUTS),
            runs: row.count(RUNS),
            highest_score: row.text(HIGHEST_SCORE),
            average: row.number(AVERAGE),
            balls_faced: row.count(BALLS_FACED),
            strike_rate: row.number(STRIKE_RATE),
            hundreds: row.count(HUNDREDS),
            fifties: row.count(FIFTIES),
            fours,
            sixes,
            boundaries: fours.saturating_add(sixes),
        }
    }

    fn player(&self) -> &str {
        &self.player
    }
}

#[cfg(test)]
mod tests {
    use csv::StringRecord;

    use crate::batting::BattingRecord;
    use crate::mapping::{ColumnIndex, MappedRow};
    use crate::record_shape::RecordShape;

    fn map(header: Vec<&str>, row: Vec<&str>) -> BattingRecord {
        let header = StringRecord::from(header);
        let record = StringRecord::from(row);
        let index = ColumnIndex::new(&header, BattingRecord::fields());
        BattingRecord::from_row(&MappedRow::new(&index, &record))
    }

    #[test]
    fn test_from_row() {
        let record = map(
            vec!["POS", "PLAYER", "Mat", "Inns", "NO", "Runs", "HS", "Avg", "BF", "SR", "100", "50", "4s", "6s"],
            vec!["1", "David Warner", "12", "12", "2", "692", "100*", "69.2", "481", "143.86", "1", "8", "57", "21"],
        );
        assert_eq!(record.player, "David Warner");
        assert_eq!(record.runs, 692);
        assert_eq!(record.average, 69.2);
        assert_eq!(record.strike_rate, 143.86);
        assert_eq!(record.hundreds, 1);
        assert_eq!(record.fifties, 8);
        assert_eq!(record.boundaries, 78);
        assert_eq!(record.highest_score_runs(), 100);
        assert!(record.highest_score_not_out());
    }

    #[test]
    fn test_undefined_average_defaults_to_zero() {
        let record = map(
            vec!["PLAYER", "Inns", "NO", "Avg", "SR"],
            vec!["Alzarri Joseph", "1", "1", "-", "187.5"],
        );
        assert_eq!(record.average, 0.0);
        assert_eq!(record.strike_rate, 187.5);
    }

    #[test]
    fn test_boundaries_ignore_dedicated_column() {
        let record = map(
            vec!["PLAYER", "4s", "6s", "Boundaries"],
            vec!["Andre Russell", "31", "52", "99"],
        );
        assert_eq!(record.boundaries, 83);
    }
}
