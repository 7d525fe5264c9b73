use std::path::PathBuf;

use rand::seq::SliceRandom;
use strum::IntoEnumIterator;

use cricket_stats_sort::batting::BattingRecord;
use cricket_stats_sort::config::Config;
use cricket_stats_sort::criterion::{BattingCriterion, Criterion};
use cricket_stats_sort::loader::load;
use cricket_stats_sort::order::Order;
use cricket_stats_sort::sort::{check, sort};

mod common;

fn most_runs() -> Result<Vec<BattingRecord>, anyhow::Error> {
    Ok(load::<BattingRecord>(&PathBuf::from(common::MOST_RUNS), &Config::default())?)
}

fn first_player(criterion: BattingCriterion) -> Result<BattingRecord, anyhow::Error> {
    let sorted = sort(&most_runs()?, criterion)?;
    Ok(sorted[0].clone())
}

#[test]
fn test_highest_average_first() -> Result<(), anyhow::Error> {
    let first = first_player(BattingCriterion::Average)?;
    assert_eq!(first.player, "MS Dhoni");
    assert_eq!(first.average, 83.2);
    Ok(())
}

#[test]
fn test_highest_strike_rate_first() -> Result<(), anyhow::Error> {
    let first = first_player(BattingCriterion::StrikeRate)?;
    assert_eq!(first.player, "Ishant Sharma");
    assert_eq!(first.strike_rate, 333.33);
    Ok(())
}

#[test]
fn test_most_boundaries_first() -> Result<(), anyhow::Error> {
    let first = first_player(BattingCriterion::Boundaries)?;
    assert_eq!(first.player, "Andre Russell");
    assert_eq!(first.boundaries, 83);
    Ok(())
}

#[test]
fn test_composite_leaders() -> Result<(), anyhow::Error> {
    assert_eq!(first_player(BattingCriterion::SrAndBoundaries)?.player, "Ishant Sharma");
    assert_eq!(first_player(BattingCriterion::AverageAndSr)?.player, "MS Dhoni");
    assert_eq!(first_player(BattingCriterion::RunsAndAverage)?.player, "David Warner");
    assert_eq!(first_player(BattingCriterion::HundredsAndAverage)?.player, "David Warner");
    Ok(())
}

#[test]
fn test_hundreds_group_ordered_by_average() -> Result<(), anyhow::Error> {
    let sorted = sort(&most_runs()?, BattingCriterion::HundredsAndAverage)?;
    let centurions: Vec<&str> = sorted
        .iter()
        .take_while(|r| r.hundreds == 1)
        .map(|r| r.player.as_str())
        .collect();
    assert_eq!(
        centurions,
        vec!["David Warner", "Jonny Bairstow", "KL Rahul", "Sanju Samson", "Virat Kohli", "Ajinkya Rahane"]
    );
    assert!(sorted[centurions.len()..].iter().all(|r| r.hundreds == 0));
    Ok(())
}

#[test]
fn test_every_criterion_orders_its_keys() -> Result<(), anyhow::Error> {
    let records = most_runs()?;
    for criterion in BattingCriterion::iter() {
        let sorted = sort(&records, criterion)?;
        assert!(check(&sorted, criterion), "{}", criterion);

        // permutation of the input
        let mut input: Vec<&str> = records.iter().map(|r| r.player.as_str()).collect();
        let mut output: Vec<&str> = sorted.iter().map(|r| r.player.as_str()).collect();
        input.sort();
        output.sort();
        assert_eq!(input, output, "{}", criterion);

        let keys = criterion.sort_keys();
        let primary = &keys[0];
        assert_eq!(primary.order(), Order::Desc);
        for pair in sorted.windows(2) {
            assert!(primary.key(&pair[0]) >= primary.key(&pair[1]), "{}", criterion);
            if keys.len() > 1 && primary.key(&pair[0]) == primary.key(&pair[1]) {
                assert!(keys[1].key(&pair[0]) >= keys[1].key(&pair[1]), "{}", criterion);
            }
        }
    }
    Ok(())
}

#[test]
fn test_ties_keep_input_order() -> Result<(), anyhow::Error> {
    let mut records = most_runs()?;
    for record in records.iter_mut() {
        record.average = 40.0;
        record.strike_rate = 120.0;
    }
    records.shuffle(&mut rand::thread_rng());
    let sorted = sort(&records, BattingCriterion::AverageAndSr)?;
    assert_eq!(sorted, records);
    Ok(())
}
