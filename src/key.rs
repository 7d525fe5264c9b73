use std::cmp::Ordering;
use std::str::FromStr;

use crate::field_type::FieldType;

/// A typed, totally ordered value.
///
/// Keys are produced when a cell is coerced to the type its [crate::field::Field] declares, and
/// when a sort criterion reads a field from a record.
#[derive(Clone, Debug)]
pub enum Key {
    Text {
        s: String
    },
    Integer {
        i: i64
    },
    Number {
        n: f64
    },
}

impl Key {
    /// Coerce a raw cell to `field_type`. Returns None when the cell does not hold a valid value
    /// of that type, for example a blank cell or the "-" placeholder used for undefined averages.
    pub fn new(cell: &str, field_type: FieldType) -> Option<Key> {
        let cell = cell.trim();
        match field_type {
            FieldType::Text => {
                Some(
                    Key::Text {
                        s: cell.to_string()
                    }
                )
            }
            FieldType::Integer => {
                let i = i64::from_str(cell).ok()?;
                if i < 0 {
                    return None;
                }
                Some(
                    Key::Integer {
                        i
                    }
                )
            }
            FieldType::Number => {
                let n = f64::from_str(cell).ok()?;
                if !n.is_finite() {
                    return None;
                }
                Some(
                    Key::Number {
                        n
                    }
                )
            }
        }
    }

    /// The value a field of `field_type` takes when its cell is missing or cannot be coerced.
    pub fn default_for(field_type: FieldType) -> Key {
        match field_type {
            FieldType::Text => {
                Key::Text { s: String::new() }
            }
            FieldType::Integer => {
                Key::Integer { i: 0 }
            }
            FieldType::Number => {
                Key::Number { n: 0.0 }
            }
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Text { s } => { Some(s.as_str()) }
            Key::Integer { .. } => {
                None
            }
            Key::Number { .. } => {
                None
            }
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Key::Text { .. } => {
                None
            }
            Key::Integer { i } => {
                Some(*i)
            }
            Key::Number { .. } => {
                None
            }
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Key::Text { .. } => {
                None
            }
            Key::Integer { .. } => {
                None
            }
            Key::Number { n } => {
                Some(*n)
            }
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Key::Text { .. } => { 0 }
            Key::Integer { .. } => { 1 }
            Key::Number { .. } => { 2 }
        }
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Integer { i: value as i64 }
    }
}

impl From<f64> for Key {
    fn from(value: f64) -> Self {
        Key::Number { n: value }
    }
}

impl Eq for Key {}

impl PartialEq<Self> for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd<Self> for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Key::Text { s }, Key::Text { s: o }) => { s.as_str().cmp(o.as_str()) }
            (Key::Integer { i }, Key::Integer { i: o }) => { i.cmp(o) }
            (Key::Number { n }, Key::Number { n: o }) => {
                if n.is_nan() && o.is_nan() {
                    Ordering::Equal
                } else if !n.is_nan() && o.is_nan() {
                    Ordering::Greater
                } else if n.is_nan() && !o.is_nan() {
                    Ordering::Less
                } else {
                    n.partial_cmp(o).unwrap_or(Ordering::Equal)
                }
            }
            // keys of different types never share a sort position, order them by type
            _ => { self.rank().cmp(&other.rank()) }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use crate::field_type::FieldType;
    use crate::key::Key;

    #[test]
    fn test_coerce_number() {
        assert_eq!(Key::new(" 83.2 ", FieldType::Number).unwrap().as_number(), Some(83.2));
        assert_eq!(Key::new("333.33", FieldType::Number).unwrap().as_number(), Some(333.33));
        assert!(Key::new("-", FieldType::Number).is_none());
        assert!(Key::new("", FieldType::Number).is_none());
        assert!(Key::new("NaN", FieldType::Number).is_none());
        assert!(Key::new("inf", FieldType::Number).is_none());
        assert!(Key::new("83,2", FieldType::Number).is_none());
    }

    #[test]
    fn test_coerce_integer() {
        assert_eq!(Key::new("692", FieldType::Integer).unwrap().as_integer(), Some(692));
        assert!(Key::new("100*", FieldType::Integer).is_none());
        assert!(Key::new("-3", FieldType::Integer).is_none());
        assert!(Key::new("4.5", FieldType::Integer).is_none());
    }

    #[test]
    fn test_coerce_text() {
        assert_eq!(Key::new(" MS Dhoni ", FieldType::Text).unwrap().as_str(), Some("MS Dhoni"));
        assert_eq!(Key::default_for(FieldType::Text).as_str(), Some(""));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Key::default_for(FieldType::Integer).as_integer(), Some(0));
        assert_eq!(Key::default_for(FieldType::Number).as_number(), Some(0.0));
    }

    #[test]
    fn test_number_ordering_with_nan() {
        let nan = Key::Number { n: f64::NAN };
        let one = Key::from(1.0);
        assert_eq!(nan.cmp(&nan), Ordering::Equal);
        assert_eq!(one.cmp(&nan), Ordering::Greater);
        assert_eq!(nan.cmp(&one), Ordering::Less);
        assert_eq!(Key::from(4.8).cmp(&Key::from(9.0)), Ordering::Less);
    }

    #[test]
    fn test_mixed_types_do_not_panic() {
        assert_eq!(Key::from(7u32).cmp(&Key::from(1.0)), Ordering::Less);
        assert_eq!(Key::from(7u32).cmp(&Key::from(7u32)), Ordering::Equal);
    }
}
