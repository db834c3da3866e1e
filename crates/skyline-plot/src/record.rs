//! Input records as handed over by the (external) parsing layer.

use std::fmt;

use skyline_core::alloc::HashMap;

/// A single field value in an uploaded row.
///
/// The upstream parser produces either text or numbers; the pipeline never
/// sees richer types. Numeric-looking text (`"42"`) is coerced on demand via
/// [`FieldValue::as_number`], matching how spreadsheet exports frequently
/// stringify numeric columns.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Interpret this value as a finite number, if possible.
    ///
    /// Returns `None` for non-numeric text and for NaN/infinite numbers, so
    /// callers get a single "usable or not" answer.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if n.is_finite() => Some(*n),
            FieldValue::Number(_) => None,
            FieldValue::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Some(n),
                _ => None,
            },
        }
    }

    /// True when [`as_number`](Self::as_number) would succeed.
    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

/// One input row: a flat string-keyed map of field values.
///
/// Records are immutable once handed to the pipeline; every stage operates on
/// borrowed data and allocates fresh output.
///
/// # Example
///
/// ```
/// use skyline_plot::Record;
///
/// let row = Record::new()
///     .with("region", "EMEA")
///     .with("quarter", "Q3")
///     .with("revenue", 1250.0);
/// assert!(row.get("revenue").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, FieldValue>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Look up a field by name.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Number of fields in this record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(FieldValue::Number(3.5).as_number(), Some(3.5));
        assert_eq!(FieldValue::Text(" 42 ".into()).as_number(), Some(42.0));
        assert_eq!(FieldValue::Text("west".into()).as_number(), None);
        assert_eq!(FieldValue::Number(f64::NAN).as_number(), None);
        assert_eq!(FieldValue::Number(f64::INFINITY).as_number(), None);
    }

    #[test]
    fn test_record_builder() {
        let row = Record::new().with("a", 1.0).with("b", "two");
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("a"), Some(&FieldValue::Number(1.0)));
        assert_eq!(row.get("missing"), None);
    }
}
