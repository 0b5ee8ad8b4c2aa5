use rust_decimal::Decimal;
use serde_derive::Serialize;

use super::{ledger_row::LedgerRow, partition::Partition};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalancedRow {
    #[serde(flatten)]
    pub row: LedgerRow,
    pub opening_balance: Decimal,
    pub amount: Decimal,
    pub closing_balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionResult {
    pub opening_total: Decimal,
    /// Chronological order. Use `most_recent_first` for display.
    pub rows: Vec<BalancedRow>,
    pub closing_total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub group1: PartitionResult,
    pub mtf: PartitionResult,
    pub mtff: PartitionResult,
}

// --

impl PartitionResult {
    pub fn empty() -> Self {
        Self::from_rows(Decimal::ZERO, Vec::new())
    }

    pub(crate) fn from_rows(opening_total: Decimal, rows: Vec<BalancedRow>) -> Self {
        let closing_total = rows
            .last()
            .map_or(opening_total, |last| last.closing_balance);
        Self {
            opening_total,
            rows,
            closing_total,
        }
    }

    pub fn most_recent_first(&self) -> impl Iterator<Item = &BalancedRow> {
        self.rows.iter().rev()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Reconciliation {
    pub fn get(&self, partition: Partition) -> &PartitionResult {
        match partition {
            Partition::Group1 => &self.group1,
            Partition::Mtf => &self.mtf,
            Partition::Mtff => &self.mtff,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Partition, &PartitionResult)> {
        Partition::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}
