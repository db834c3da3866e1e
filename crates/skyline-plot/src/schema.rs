//! One-shot schema inference over the configured axis fields.
//!
//! Instead of sniffing the type of every field value while normalizing each
//! record, the pipeline classifies each configured axis field exactly once
//! over the whole dataset. Categorical fields get a stable ordinal index in
//! first-seen order, so the same label always maps to the same coordinate
//! within a run.

use indexmap::IndexMap;

use crate::record::Record;

/// The three configured axis field names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisFields {
    pub x: String,
    pub y: String,
    pub z: String,
}

impl AxisFields {
    pub fn new(x: impl Into<String>, y: impl Into<String>, z: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }
}

/// Ordinal mapping for a categorical field.
///
/// Distinct values are indexed in first-seen order, yielding the dense range
/// `[0, distinct_count)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoricalIndex {
    ordinals: IndexMap<String, usize>,
}

impl CategoricalIndex {
    /// Build the index from every value of `field` across the dataset.
    pub fn build(records: &[Record], field: &str) -> Self {
        let mut ordinals = IndexMap::new();
        for record in records {
            if let Some(value) = record.get(field) {
                let key = value.to_string();
                let next = ordinals.len();
                ordinals.entry(key).or_insert(next);
            }
        }
        Self { ordinals }
    }

    /// Ordinal for a label, if it occurred in the dataset.
    pub fn ordinal(&self, label: &str) -> Option<usize> {
        self.ordinals.get(label).copied()
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.ordinals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordinals.is_empty()
    }

    /// Labels in ordinal order, for axis tick annotation.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.ordinals.keys().map(String::as_str)
    }
}

/// Inferred kind of one axis field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Every present value coerces to a finite number.
    Numeric,
    /// At least one value is non-numeric; carries the ordinal index.
    Categorical(CategoricalIndex),
}

impl FieldKind {
    fn infer(records: &[Record], field: &str) -> Self {
        let all_numeric = records
            .iter()
            .filter_map(|r| r.get(field))
            .all(|v| v.is_numeric());
        // A field that never occurs counts as numeric; the missing-value
        // policy handles the absent values.
        if all_numeric {
            FieldKind::Numeric
        } else {
            FieldKind::Categorical(CategoricalIndex::build(records, field))
        }
    }
}

/// The inferred kinds of the three configured axis fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSchema {
    pub x: FieldKind,
    pub y: FieldKind,
    pub z: FieldKind,
}

impl DatasetSchema {
    /// Classify the three axis fields over the whole dataset.
    pub fn infer(records: &[Record], axes: &AxisFields) -> Self {
        Self {
            x: FieldKind::infer(records, &axes.x),
            y: FieldKind::infer(records, &axes.y),
            z: FieldKind::infer(records, &axes.z),
        }
    }
}
