use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde_derive::{Deserialize, Serialize};

/// How a row's extracted key is normalized before any mapping is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KeyCleaning {
    #[default]
    AsIs,
    /// Strip leading and trailing `*` marker characters (and surrounding
    /// whitespace).
    StripMarkers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValueTransform {
    #[default]
    Signed,
    Absolute,
}

/// Treatment of keys that are not listed in `merge_map`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnmappedKeys {
    /// One independent entry per row, never deduplicated.
    #[default]
    PerRow,
    /// Rows sharing a label are summed into a single bucket.
    Accumulate,
}

/// Configuration of a single category breakdown. Key and value extraction
/// are supplied by the caller; everything else lives here so that call sites
/// can be declared as data (and loaded from RON).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    pub key_cleaning: KeyCleaning,
    /// Raw key -> canonical label. Labels reached through this map always
    /// accumulate.
    pub merge_map: BTreeMap<String, String>,
    /// Raw key -> display label, without forcing accumulation.
    pub label_map: BTreeMap<String, String>,
    pub unmapped: UnmappedKeys,
    pub accumulated_value: ValueTransform,
    pub per_row_value: ValueTransform,
    /// Labels pinned to the head of the output, in this order.
    pub priority_order: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBucket<T> {
    pub label: String,
    pub total: Decimal,
    pub members: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub label: String,
    pub amount: Decimal,
}

// --

impl AggregationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strip_markers(mut self) -> Self {
        self.key_cleaning = KeyCleaning::StripMarkers;
        self
    }

    pub fn merge<I, K>(mut self, keys: I, label: &str) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.merge_map
            .extend(keys.into_iter().map(|k| (k.into(), label.to_string())));
        self
    }

    pub fn label(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.label_map.insert(key.into(), label.into());
        self
    }

    pub fn accumulate_unmapped(mut self) -> Self {
        self.unmapped = UnmappedKeys::Accumulate;
        self
    }

    pub fn accumulated_value(mut self, transform: ValueTransform) -> Self {
        self.accumulated_value = transform;
        self
    }

    pub fn per_row_value(mut self, transform: ValueTransform) -> Self {
        self.per_row_value = transform;
        self
    }

    pub fn priority<I, L>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.priority_order = labels.into_iter().map(Into::into).collect();
        self
    }
}

impl KeyCleaning {
    pub fn apply<'k>(&self, key: &'k str) -> &'k str {
        match self {
            KeyCleaning::AsIs => key,
            KeyCleaning::StripMarkers => key.trim().trim_matches('*').trim(),
        }
    }
}

impl ValueTransform {
    pub fn apply(&self, value: Decimal) -> Decimal {
        match self {
            ValueTransform::Signed => value,
            ValueTransform::Absolute => value.abs(),
        }
    }
}

impl<T> From<&CategoryBucket<T>> for ExpenseLine {
    fn from(bucket: &CategoryBucket<T>) -> Self {
        ExpenseLine {
            label: bucket.label.clone(),
            amount: bucket.total,
        }
    }
}

impl ExpenseLine {
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Display total of a breakdown: every line contributes its absolute value,
/// regardless of whether the breakdown kept signs.
pub fn abs_total(lines: &[ExpenseLine]) -> Decimal {
    lines.iter().map(|l| l.amount.abs()).sum()
}
