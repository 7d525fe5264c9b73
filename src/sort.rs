use std::cmp::Ordering;

use crate::criterion::{compare, Criterion};
use crate::error::AnalysisError;
use crate::record_shape::RecordShape;

/// Order records by a criterion.
///
/// Returns a new vector, the input is left untouched. Each key of the criterion is ordered in its
/// own direction and the sort is stable, so records equal on every key keep their input order.
///
/// # Examples
/// ```
/// use cricket_stats_sort::batting::BattingRecord;
/// use cricket_stats_sort::criterion::BattingCriterion;
/// use cricket_stats_sort::sort::sort;
///
/// fn best_average_first(records: &[BattingRecord]) -> Result<Vec<BattingRecord>, cricket_stats_sort::error::AnalysisError> {
///     sort(records, BattingCriterion::Average)
/// }
/// ```
pub fn sort<C: Criterion>(records: &[C::Record], criterion: C) -> Result<Vec<C::Record>, AnalysisError> {
    if records.is_empty() {
        return Err(
            AnalysisError::EmptyInput {
                shape: <C::Record as RecordShape>::SHAPE,
            }
        );
    }

    log::info!("Start sorting {} {} records by {}", records.len(), <C::Record as RecordShape>::SHAPE, criterion);
    let keys = criterion.sort_keys();
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare(&keys, a, b));
    log::info!("Finish sorting by {}", criterion);
    Ok(sorted)
}

/// Check whether records are already ordered by a criterion. Ties are allowed in any order.
pub fn check<C: Criterion>(records: &[C::Record], criterion: C) -> bool {
    let keys = criterion.sort_keys();
    let mut previous: Option<&C::Record> = None;
    for current in records {
        if let Some(previous_record) = previous {
            if compare(&keys, previous_record, current) == Ordering::Greater {
                return false;
            }
        }
        previous = Some(current);
    }
    true
}
