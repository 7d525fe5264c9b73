use std::cmp::Ordering;
use std::fmt::Debug;
use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::batting::BattingRecord;
use crate::bowling::BowlingRecord;
use crate::error::AnalysisError;
use crate::key::Key;
use crate::order::Order;
use crate::record_shape::RecordShape;

/// One ordering key of a criterion: a field read from the record and the direction to order it in.
pub struct SortKey<R> {
    name: &'static str,
    extract: fn(&R) -> Key,
    order: Order,
}

impl<R> SortKey<R> {
    pub fn new(name: &'static str, extract: fn(&R) -> Key, order: Order) -> SortKey<R> {
        SortKey {
            name,
            extract,
            order,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn key(&self, record: &R) -> Key {
        (self.extract)(record)
    }

    /// Compare two records on this key alone, in this key's direction.
    pub fn compare(&self, a: &R, b: &R) -> Ordering {
        self.order.apply(self.key(a).cmp(&self.key(b)))
    }
}

/// Compare two records key by key. A later key only decides between records that are equal on
/// every earlier key.
pub fn compare<R>(keys: &[SortKey<R>], a: &R, b: &R) -> Ordering {
    for key in keys {
        let ordering = key.compare(a, b);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// A named rule ordering the records of one shape.
pub trait Criterion: Copy + Debug + std::fmt::Display {
    type Record: RecordShape;

    /// The keys of this criterion, most significant first.
    fn sort_keys(&self) -> Vec<SortKey<Self::Record>>;

    /// Parse a criterion name such as "AVERAGE_AND_SR".
    fn from_name(name: &str) -> Result<Self, AnalysisError>
    where
        Self: FromStr + IntoEnumIterator,
    {
        Self::from_str(name.trim()).map_err(|_| AnalysisError::UnknownCriterion {
            shape: <Self::Record as RecordShape>::SHAPE,
            name: name.to_string(),
            expected: Self::names().join(", "),
        })
    }

    /// Canonical names of every criterion of this kind, in declaration order.
    fn names() -> Vec<String>
    where
        Self: IntoEnumIterator,
    {
        Self::iter().map(|criterion| criterion.to_string()).collect()
    }
}

/// Orderings of batting records. Every key is descending, higher is better.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum BattingCriterion {
    #[strum(to_string = "AVERAGE")]
    Average,
    #[strum(to_string = "STRIKE_RATE", serialize = "SR")]
    StrikeRate,
    #[strum(to_string = "BOUNDARIES")]
    Boundaries,
    #[strum(to_string = "SR_AND_BOUNDARIES")]
    SrAndBoundaries,
    #[strum(to_string = "AVERAGE_AND_SR")]
    AverageAndSr,
    #[strum(to_string = "RUNS_AND_AVERAGE", serialize = "RUN_AND_AVERAGE")]
    RunsAndAverage,
    #[strum(to_string = "HUNDREDS_AND_AVERAGE")]
    HundredsAndAverage,
    #[strum(to_string = "FIFTY_HUNDRED_AND_AVERAGE")]
    FiftyHundredAndAverage,
}

fn batting_average(record: &BattingRecord) -> Key {
    Key::from(record.average)
}

fn batting_strike_rate(record: &BattingRecord) -> Key {
    Key::from(record.strike_rate)
}

fn batting_boundaries(record: &BattingRecord) -> Key {
    Key::from(record.boundaries)
}

fn batting_runs(record: &BattingRecord) -> Key {
    Key::from(record.runs)
}

fn batting_hundreds(record: &BattingRecord) -> Key {
    Key::from(record.hundreds)
}

impl Criterion for BattingCriterion {
    type Record = BattingRecord;

    fn sort_keys(&self) -> Vec<SortKey<BattingRecord>> {
        let average = SortKey::new("average", batting_average, Order::Desc);
        let strike_rate = SortKey::new("strike_rate", batting_strike_rate, Order::Desc);
        let boundaries = SortKey::new("boundaries", batting_boundaries, Order::Desc);
        let runs = SortKey::new("runs", batting_runs, Order::Desc);
        let hundreds = SortKey::new("hundreds", batting_hundreds, Order::Desc);
        match self {
            BattingCriterion::Average => vec![average],
            BattingCriterion::StrikeRate => vec![strike_rate],
            BattingCriterion::Boundaries => vec![boundaries],
            BattingCriterion::SrAndBoundaries => vec![strike_rate, boundaries],
            BattingCriterion::AverageAndSr => vec![average, strike_rate],
            BattingCriterion::RunsAndAverage => vec![runs, average],
            BattingCriterion::HundredsAndAverage => vec![hundreds, average],
            BattingCriterion::FiftyHundredAndAverage => vec![hundreds, average],
        }
    }
}

/// Orderings of bowling records. Every key is descending except economy, where fewer runs per
/// over is better and the order is ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum BowlingCriterion {
    #[strum(to_string = "AVERAGE")]
    Average,
    #[strum(to_string = "STRIKE_RATE", serialize = "SR")]
    StrikeRate,
    #[strum(to_string = "ECONOMY")]
    Economy,
    #[strum(to_string = "SR_AND_5W4W", serialize = "SR_AND_5W_4W")]
    SrAnd5w4w,
    #[strum(to_string = "AVERAGE_AND_SR")]
    AverageAndSr,
    #[strum(to_string = "WICKETS_AND_AVERAGE", serialize = "WICKETS_AND_AVG")]
    WicketsAndAverage,
}

fn bowling_average(record: &BowlingRecord) -> Key {
    Key::from(record.average)
}

fn bowling_strike_rate(record: &BowlingRecord) -> Key {
    Key::from(record.strike_rate)
}

fn bowling_economy(record: &BowlingRecord) -> Key {
    Key::from(record.economy)
}

fn bowling_hauls(record: &BowlingRecord) -> Key {
    Key::from(record.hauls())
}

fn bowling_wickets(record: &BowlingRecord) -> Key {
    Key::from(record.wickets)
}

impl Criterion for BowlingCriterion {
    type Record = BowlingRecord;

    fn sort_keys(&self) -> Vec<SortKey<BowlingRecord>> {
        let average = SortKey::new("average", bowling_average, Order::Desc);
        let strike_rate = SortKey::new("strike_rate", bowling_strike_rate, Order::Desc);
        let economy = SortKey::new("economy", bowling_economy, Order::Asc);
        let hauls = SortKey::new("hauls", bowling_hauls, Order::Desc);
        let wickets = SortKey::new("wickets", bowling_wickets, Order::Desc);
        match self {
            BowlingCriterion::Average => vec![average],
            BowlingCriterion::StrikeRate => vec![strike_rate],
            BowlingCriterion::Economy => vec![economy],
            BowlingCriterion::SrAnd5w4w => vec![strike_rate, hauls],
            BowlingCriterion::AverageAndSr => vec![average, strike_rate],
            BowlingCriterion::WicketsAndAverage => vec![wickets, average],
        }
    }
}
