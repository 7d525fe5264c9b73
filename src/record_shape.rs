use crate::field::Field;
use crate::mapping::MappedRow;

/// Layout of one kind of record in a delimited file.
///
/// Each implementation declares its column bindings once, in [RecordShape::fields], and builds
/// a record from a mapped row in [RecordShape::from_row].
pub trait RecordShape: Clone + Sized {
    /// Human readable name of the shape, used in logs and errors.
    const SHAPE: &'static str;

    /// Name of the column holding the player name.
    const PLAYER_COLUMN: &'static str = "PLAYER";

    /// The column to field bindings of this shape.
    fn fields() -> Vec<Field>;

    /// Build a record from one row. Never fails, cells that do not coerce take their default.
    fn from_row(row: &MappedRow) -> Self;

    /// The player name of this record.
    fn player(&self) -> &str;
}
