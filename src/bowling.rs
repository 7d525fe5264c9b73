use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::field_type::FieldType;
use crate::mapping::MappedRow;
use crate::record_shape::RecordShape;

pub const POS: &str = "POS";
pub const PLAYER: &str = "PLAYER";
pub const MATCHES: &str = "Mat";
pub const INNINGS: &str = "Inns";
pub const OVERS: &str = "Ov";
pub const RUNS: &str = "Runs";
pub const WICKETS: &str = "Wkts";
pub const BEST_BOWLING: &str = "BBI";
pub const AVERAGE: &str = "Avg";
pub const ECONOMY: &str = "Econ";
pub const STRIKE_RATE: &str = "SR";
pub const FOUR_WICKETS: &str = "4w";
pub const FIVE_WICKETS: &str = "5w";

/// One row of a "most wickets" bowling factsheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BowlingRecord {
    pub position: String,
    pub player: String,
    pub matches: u32,
    pub innings: u32,
    /// Overs in cricket notation, 64.2 is 64 overs and 2 balls
    pub overs: f64,
    pub runs: u32,
    pub wickets: u32,
    /// Best bowling in an innings as "wickets/runs"
    pub best_bowling: String,
    pub average: f64,
    pub economy: f64,
    pub strike_rate: f64,
    pub four_wickets: u32,
    pub five_wickets: u32,
}

impl BowlingRecord {
    /// Four and five wicket hauls combined.
    pub fn hauls(&self) -> u32 {
        self.four_wickets.saturating_add(self.five_wickets)
    }

    /// Balls bowled, derived from the overs notation.
    pub fn balls_bowled(&self) -> u32 {
        let overs = self.overs.trunc();
        let balls = ((self.overs - overs) * 10.0).round();
        (overs * 6.0 + balls) as u32
    }

    /// Best bowling split into (wickets, runs), None when the cell is not in "w/r" form.
    pub fn best_bowling_figures(&self) -> Option<(u32, u32)> {
        let (wickets, runs) = self.best_bowling.split_once('/')?;
        Some((wickets.trim().parse().ok()?, runs.trim().parse().ok()?))
    }
}

impl RecordShape for BowlingRecord {
    const SHAPE: &'static str = "bowling";

    fn fields() -> Vec<Field> {
        vec![
            Field::new(POS, FieldType::Text),
            Field::new(PLAYER, FieldType::Text).with_required(true),
            Field::new(MATCHES, FieldType::Integer),
            Field::new(INNINGS, FieldType::Integer),
            Field::new(OVERS, FieldType::Number).with_signature(true),
            Field::new(RUNS, FieldType::Integer),
            Field::new(WICKETS, FieldType::Integer).with_signature(true),
            Field::new(BEST_BOWLING, FieldType::Text).with_signature(true),
            Field::new(AVERAGE, FieldType::Number),
            Field::new(ECONOMY, FieldType::Number).with_signature(true),
            Field::new(STRIKE_RATE, FieldType::Number),
            Field::new(FOUR_WICKETS, FieldType::Integer).with_signature(true),
            Field::new(FIVE_WICKETS, FieldType::Integer).with_signature(true),
        ]
    }

    fn from_row(row: &MappedRow) -> Self {
        BowlingRecord {
            position: row.text(POS),
            player: row.text(PLAYER),
            matches: row.count(MATCHES),
            innings: row.count(INNINGS),
            overs: row.number(OVERS),
            runs: row.count(RUNS),
            wickets: row.count(WICKETS),
            best_bowling: row.text(BEST_BOWLING),
            average: row.number(AVERAGE),
            economy: row.number(ECONOMY),
            strike_rate: row.number(STRIKE_RATE),
            four_wickets: row.count(FOUR_WICKETS),
            five_wickets: row.count(FIVE_WICKETS),
        }
    }

    fn player(&self) -> &str {
        &self.player
    }
}
