use std::collections::HashMap;

use csv::StringRecord;

use crate::field::Field;
use crate::field_type::FieldType;
use crate::key::Key;

/// Column positions of a header row, restricted to the fields a record shape declares.
#[derive(Debug)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
    fields: Vec<Field>,
}

impl ColumnIndex {
    /// Locate each declared field in the header. Fields whose column is absent are kept but have
    /// no position, undeclared columns are ignored.
    pub fn new(header: &StringRecord, fields: Vec<Field>) -> ColumnIndex {
        let mut positions = HashMap::new();
        for (position, name) in header.iter().enumerate() {
            let name = name.trim();
            if fields.iter().any(|field| field.name() == name) {
                // first occurrence wins when a header repeats a column
                positions.entry(name.to_string()).or_insert(position);
            }
        }
        ColumnIndex {
            positions,
            fields,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn fields(&self) -> &Vec<Field> {
        &self.fields
    }

    /// Names of required fields that have no column in the header.
    pub fn missing_required(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|field| field.required() && !self.contains(field.name()))
            .map(|field| field.name())
            .collect()
    }

    /// Whether the header carries at least one column specific to the record shape.
    pub fn has_signature(&self) -> bool {
        self.fields
            .iter()
            .any(|field| field.signature() && self.contains(field.name()))
    }

    fn field_type(&self, name: &str) -> FieldType {
        debug_assert!(
            self.fields.iter().any(|field| field.name() == name),
            "field {} is not declared by the record shape",
            name,
        );
        self.fields
            .iter()
            .find(|field| field.name() == name)
            .map(|field| field.field_type())
            .unwrap_or(FieldType::Text)
    }
}

/// One data row viewed through a [ColumnIndex].
///
/// Every accessor is infallible: a missing column or a cell that does not coerce to the declared
/// [FieldType] yields that type's default.
pub struct MappedRow<'a> {
    index: &'a ColumnIndex,
    record: &'a StringRecord,
}

impl<'a> MappedRow<'a> {
    pub fn new(index: &'a ColumnIndex, record: &'a StringRecord) -> MappedRow<'a> {
        MappedRow {
            index,
            record,
        }
    }

    /// The raw, trimmed cell of a column, if the column exists and the row is long enough.
    pub fn cell(&self, name: &str) -> Option<&'a str> {
        let position = *self.index.positions.get(name)?;
        self.record.get(position).map(|cell| cell.trim())
    }

    pub fn key(&self, name: &str) -> Key {
        let field_type = self.index.field_type(name);
        match self.cell(name) {
            None => {
                Key::default_for(field_type)
            }
            Some(cell) => {
                Key::new(cell, field_type).unwrap_or_else(|| {
                    log::debug!(
                        "line: {}, field: {}, value: {:?} is not a valid {:?}, using default",
                        self.line(),
                        name,
                        cell,
                        field_type,
                    );
                    Key::default_for(field_type)
                })
            }
        }
    }

    pub fn text(&self, name: &str) -> String {
        self.key(name)
            .as_str()
            .map(|s| s.to_string())
            .unwrap_or_default()
    }

    pub fn count(&self, name: &str) -> u32 {
        self.key(name)
            .as_integer()
            .and_then(|i| u32::try_from(i).ok())
            .unwrap_or(0)
    }

    pub fn number(&self, name: &str) -> f64 {
        self.key(name)
            .as_number()
            .unwrap_or(0.0)
    }

    /// Line of the row in the source file, 0 when unknown.
    pub fn line(&self) -> u64 {
        self.record
            .position()
            .map(|position| position.line())
            .unwrap_or(0)
    }
}
