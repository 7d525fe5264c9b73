use std::path::PathBuf;

use anyhow::{anyhow, Error};
use simple_logger::SimpleLogger;

use cricket_stats_sort::analyser::Analyser;
use cricket_stats_sort::criterion::{BattingCriterion, BowlingCriterion, Criterion};

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn usage() -> Error {
    anyhow!(
        "usage: sort_ipl_stats <batting|bowling> <file> <criterion>\n  batting criteria: {}\n  bowling criteria: {}",
        BattingCriterion::names().join(", "),
        BowlingCriterion::names().join(", "),
    )
}

// cargo run -r --example sort_ipl_stats -- batting ./tests/fixtures/ipl-2019-most-runs.csv AVERAGE_AND_SR
// cargo run -r --example sort_ipl_stats -- bowling ./tests/fixtures/ipl-2019-most-wickets.csv ECONOMY
pub fn main() -> Result<(), Error> {
    SimpleLogger::new().with_level(log::LevelFilter::Info).init()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 3 {
        return Err(usage());
    }
    let path = PathBuf::from(&args[1]);

    let mut analyser = Analyser::new();
    analyser.with_pretty(true);
    let json = match args[0].as_str() {
        "batting" => analyser.sort_batting_by_name(&path, &args[2])?,
        "bowling" => analyser.sort_bowling_by_name(&path, &args[2])?,
        _ => return Err(usage()),
    };
    println!("{}", json);
    Ok(())
}
