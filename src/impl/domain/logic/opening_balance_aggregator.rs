use rust_decimal::Decimal;

use crate::entities::{LedgerRow, Partition, RowRole};

pub(crate) struct OpeningBalanceAggregator;

impl OpeningBalanceAggregator {
    /// Sum of the signed amounts of the partition's opening-balance rows.
    pub(crate) fn opening_total(partition: Partition, rows: &[&LedgerRow]) -> Decimal {
        rows.iter()
            .filter(|row| partition.role_of(row) == Some(RowRole::Opening))
            .map(|row| row.amount())
            .sum()
    }
}
