use crate::field_type::FieldType;

/// Binds a named column of a delimited file to a field of a record.
///
/// Column names are matched against the header row exactly, including case.
///
/// # Examples
/// ```
/// // the "Avg" column holds a floating point number
/// use cricket_stats_sort::field::Field;
/// use cricket_stats_sort::field_type::FieldType;
/// let field = Field::new("Avg", FieldType::Number);
/// ```
#[derive(Clone, Debug)]
pub struct Field {
    name: String,
    field_type: FieldType,
    required: bool,
    signature: bool,
}

impl Field {
    /// Create a new [Field]
    ///
    /// # Arguments
    /// * `name` - the column name as it appears in the header row
    /// * `field_type` - the type of the field. See [FieldType] for supported types
    pub fn new(name: &str, field_type: FieldType) -> Field {
        Field {
            name: name.to_string(),
            field_type,
            required: false,
            signature: false,
        }
    }

    /// Get the column name for this field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the [FieldType] for this field.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Get the required setting for this field.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Get the signature setting for this field.
    pub fn signature(&self) -> bool {
        self.signature
    }

    /// Specify whether the column must be present in the header. A file without a required column
    /// cannot be loaded as this record shape.
    pub fn with_required(mut self, required: bool) -> Field {
        self.required = required;
        self
    }

    /// Specify whether the column is specific to this record shape. A file must carry at least one
    /// signature column of a shape to be loaded as that shape.
    pub fn with_signature(mut self, signature: bool) -> Field {
        self.signature = signature;
        self
    }
}
