use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim};

use crate::config::Config;
use crate::error::AnalysisError;
use crate::mapping::{ColumnIndex, MappedRow};
use crate::record_shape::RecordShape;

/// Load all records of shape `R` from a delimited file whose first row names the columns.
///
/// Records are returned in file row order. Columns are matched to fields by header name, so their
/// order in the file does not matter and a missing optional column leaves its field at the
/// default. Each cell is decoded on its own: a cell that is not valid UTF-8 reads as empty and
/// its field takes the default. A row without a usable player name is skipped with a warning. Rows
/// matching [Config::ignore_rows] are dropped silently.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
/// use cricket_stats_sort::batting::BattingRecord;
/// use cricket_stats_sort::config::Config;
/// use cricket_stats_sort::loader::load;
///
/// fn most_runs(path: &Path) -> Result<Vec<BattingRecord>, cricket_stats_sort::error::AnalysisError> {
///     load::<BattingRecord>(path, &Config::default())
/// }
/// ```
pub fn load<R: RecordShape>(path: &Path, config: &Config) -> Result<Vec<R>, AnalysisError> {
    let file = File::open(path).map_err(|source| AnalysisError::IoError {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .delimiter(config.field_separator())
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(BufReader::new(file));

    let header = reader
        .headers()
        .map_err(|e| structural_error::<R>(path, e))?
        .clone();
    let index = reconcile::<R>(path, &header)?;

    let mut records = Vec::new();
    let mut bytes = ByteRecord::new();
    loop {
        match reader.read_byte_record(&mut bytes) {
            Ok(true) => {}
            Ok(false) => {
                break;
            }
            Err(e) => {
                if e.is_io_error() {
                    return Err(structural_error::<R>(path, e));
                }
                log::warn!("file: {}, skipping unreadable row: {}", path.to_string_lossy(), e);
                continue;
            }
        }
        let row = decode(path, &bytes);

        if let Some(r) = config.ignore_rows() {
            if r.is_match(row.get(0).unwrap_or_default()) {
                log::debug!("file: {}, ignoring row: {:?}", path.to_string_lossy(), row);
                continue;
            }
        }

        let mapped_row = MappedRow::new(&index, &row);
        if mapped_row.cell(R::PLAYER_COLUMN).unwrap_or_default().is_empty() {
            log::warn!(
                "file: {}, line: {}, skipping {} row without a player name",
                path.to_string_lossy(),
                mapped_row.line(),
                R::SHAPE,
            );
            continue;
        }
        records.push(R::from_row(&mapped_row));
    }

    log::info!("Loaded {} {} records from {}", records.len(), R::SHAPE, path.to_string_lossy());
    Ok(records)
}

fn reconcile<R: RecordShape>(path: &Path, header: &StringRecord) -> Result<ColumnIndex, AnalysisError> {
    let schema_mismatch = |reason: String| AnalysisError::SchemaMismatch {
        path: path.to_path_buf(),
        shape: R::SHAPE,
        reason,
    };

    if header.iter().all(|name| name.trim().is_empty()) {
        return Err(schema_mismatch("the file has no header row".to_string()));
    }

    let index = ColumnIndex::new(header, R::fields());
    let missing = index.missing_required();
    if !missing.is_empty() {
        return Err(schema_mismatch(format!("missing required columns: {}", missing.join(", "))));
    }

    if !index.has_signature() {
        let expected: Vec<&str> = index
            .fields()
            .iter()
            .filter(|field| field.signature())
            .map(|field| field.name())
            .collect();
        return Err(schema_mismatch(format!("none of the columns {} is present", expected.join(", "))));
    }
    Ok(index)
}

fn decode(path: &Path, bytes: &ByteRecord) -> StringRecord {
    let mut row = StringRecord::with_capacity(bytes.as_slice().len(), bytes.len());
    for (position, cell) in bytes.iter().enumerate() {
        match std::str::from_utf8(cell) {
            Ok(cell) => row.push_field(cell),
            Err(e) => {
                log::debug!(
                    "file: {}, line: {}, column: {}, undecodable cell: {}",
                    path.to_string_lossy(),
                    bytes.position().map(|p| p.line()).unwrap_or(0),
                    position,
                    e,
                );
                row.push_field("");
            }
        }
    }
    row.set_position(bytes.position().cloned());
    row
}

fn structural_error<R: RecordShape>(path: &Path, e: csv::Error) -> AnalysisError {
    let reason = format!("the header row cannot be read: {}", e);
    match e.into_kind() {
        csv::ErrorKind::Io(source) => {
            AnalysisError::IoError {
                path: path.to_path_buf(),
                source,
            }
        }
        _ => {
            AnalysisError::SchemaMismatch {
                path: path.to_path_buf(),
                shape: R::SHAPE,
                reason,
            }
        }
    }
}
