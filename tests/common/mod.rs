use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use data_encoding::HEXLOWER;

#[allow(dead_code)]
pub const MOST_RUNS: &str = "./tests/fixtures/ipl-2019-most-runs.csv";
#[allow(dead_code)]
pub const MOST_WICKETS: &str = "./tests/fixtures/ipl-2019-most-wickets.csv";

#[allow(dead_code)]
pub fn setup() {
    let results_dir_path = PathBuf::from_str("./target/results/").unwrap();

    if !results_dir_path.exists() {
        fs::create_dir_all(&results_dir_path).unwrap_or_else(|_|
            panic!("Failed to create results directory: {:?}", results_dir_path)
        );
    }
}

#[allow(dead_code)]
pub fn temp_file_name(dir: &str) -> PathBuf {
    let mut result = PathBuf::from(dir);
    let name = HEXLOWER.encode(&rand::random::<[u8; 16]>());
    result.push(name);
    result.set_extension("csv");
    result
}

#[allow(dead_code)]
pub fn write_lines(lines: &[&str]) -> Result<PathBuf, anyhow::Error> {
    let path = temp_file_name("./target/results/");
    let mut writer = BufWriter::new(File::create(&path)?);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(path)
}
