use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::entities::{AggregationConfig, CategoryBucket, ExpenseLine, UnmappedKeys};

/// Groups rows under canonical labels according to an `AggregationConfig`.
///
/// Output order:
///   1. labels listed in `priority_order`, in that order;
///   2. everything else in encounter order, where per-row entries are emitted
///      as rows are consumed and accumulated buckets follow once the pass is
///      complete (ordered by the first row that reached each of them).
pub(crate) struct CategoryAggregator<'c> {
    config: &'c AggregationConfig,
}

enum Resolution<'k> {
    /// Label forced to accumulate through `merge_map`.
    Merged(&'k str),
    /// Label of a key `merge_map` does not cover.
    Unmapped(&'k str),
}

struct FoldState<T> {
    per_row: Vec<CategoryBucket<T>>,
    accumulated: Vec<CategoryBucket<T>>,
    accumulated_index: HashMap<String, usize>,
}

impl<T> FoldState<T> {
    fn new() -> Self {
        Self {
            per_row: Vec::new(),
            accumulated: Vec::new(),
            accumulated_index: HashMap::new(),
        }
    }

    fn accumulate(&mut self, label: &str, value: Decimal, row: T) {
        match self.accumulated_index.get(label) {
            Some(&i) => {
                let bucket = &mut self.accumulated[i];
                bucket.total += value;
                bucket.members.push(row);
            }
            None => {
                self.accumulated_index
                    .insert(label.to_string(), self.accumulated.len());
                self.accumulated.push(CategoryBucket {
                    label: label.to_string(),
                    total: value,
                    members: vec![row],
                });
            }
        }
    }

    fn push_per_row(&mut self, label: &str, value: Decimal, row: T) {
        self.per_row.push(CategoryBucket {
            label: label.to_string(),
            total: value,
            members: vec![row],
        });
    }

    fn finish(self) -> Vec<CategoryBucket<T>> {
        self.per_row.into_iter().chain(self.accumulated).collect()
    }
}

impl<'c> CategoryAggregator<'c> {
    pub(crate) fn new(config: &'c AggregationConfig) -> Self {
        Self { config }
    }

    pub(crate) fn aggregate<T, K, V>(
        &self,
        rows: &[T],
        key_of: K,
        value_of: V,
    ) -> Vec<CategoryBucket<T>>
    where
        T: Clone,
        K: Fn(&T) -> &str,
        V: Fn(&T) -> Decimal,
    {
        let state = rows.iter().fold(FoldState::new(), |mut state, row| {
            let value = value_of(row);
            match self.resolve(key_of(row)) {
                Resolution::Merged(label) => {
                    let value = self.config.accumulated_value.apply(value);
                    state.accumulate(label, value, row.clone());
                }
                Resolution::Unmapped(label) => match self.config.unmapped {
                    UnmappedKeys::PerRow => {
                        let value = self.config.per_row_value.apply(value);
                        state.push_per_row(label, value, row.clone());
                    }
                    UnmappedKeys::Accumulate => {
                        let value = self.config.accumulated_value.apply(value);
                        state.accumulate(label, value, row.clone());
                    }
                },
            }
            state
        });
        debug!(
            rows = rows.len(),
            per_row_entries = state.per_row.len(),
            accumulated_buckets = state.accumulated.len(),
            "aggregated category rows"
        );
        self.prioritize(state.finish())
    }

    pub(crate) fn aggregate_lines<T, K, V>(
        &self,
        rows: &[T],
        key_of: K,
        value_of: V,
    ) -> Vec<ExpenseLine>
    where
        T: Clone,
        K: Fn(&T) -> &str,
        V: Fn(&T) -> Decimal,
    {
        self.aggregate(rows, key_of, value_of)
            .iter()
            .map(ExpenseLine::from)
            .collect()
    }

    fn resolve<'k>(&'k self, raw_key: &'k str) -> Resolution<'k> {
        let key = self.config.key_cleaning.apply(raw_key);
        match self.config.merge_map.get(key) {
            Some(label) => Resolution::Merged(label),
            None => Resolution::Unmapped(
                self.config
                    .label_map
                    .get(key)
                    .map_or(key, String::as_str),
            ),
        }
    }

    /// Stable partition: pinned labels first (in priority order), then the
    /// rest untouched.
    fn prioritize<T>(&self, entries: Vec<CategoryBucket<T>>) -> Vec<CategoryBucket<T>> {
        if self.config.priority_order.is_empty() {
            return entries;
        }
        let mut remaining: Vec<Option<CategoryBucket<T>>> =
            entries.into_iter().map(Some).collect();
        let mut ordered = Vec::with_capacity(remaining.len());
        for label in &self.config.priority_order {
            ordered.extend(
                remaining
                    .iter_mut()
                    .filter_map(|slot| slot.take_if(|b| b.label == *label)),
            );
        }
        ordered.extend(remaining.into_iter().flatten());
        ordered
    }
}
