use tracing::{debug, instrument};

use crate::entities::{LedgerRow, Partition, PartitionResult, Reconciliation, RowRole};

use super::{
    book_partitioner::{BookPartitioner, PartitionedRows},
    opening_balance_aggregator::OpeningBalanceAggregator,
    running_balance_scanner::RunningBalanceScanner,
};

pub(crate) struct LedgerReconciler<'a> {
    rows: &'a [LedgerRow],
}

impl<'a> LedgerReconciler<'a> {
    pub(crate) fn new(rows: &'a [LedgerRow]) -> Self {
        Self { rows }
    }

    #[instrument(name = "reconcile", skip_all, fields(rows = self.rows.len()))]
    pub(crate) fn process(self) -> Reconciliation {
        let partitioned = BookPartitioner::partition(self.rows);
        Reconciliation {
            group1: Self::reconcile_partition(&partitioned, Partition::Group1),
            mtf: Self::reconcile_partition(&partitioned, Partition::Mtf),
            mtff: Self::reconcile_partition(&partitioned, Partition::Mtff),
        }
    }

    fn reconcile_partition(partitioned: &PartitionedRows<'_>, partition: Partition) -> PartitionResult {
        let members = partitioned.get(partition);
        let opening_total = OpeningBalanceAggregator::opening_total(partition, members);
        let running: Vec<&LedgerRow> = members
            .iter()
            .copied()
            .filter(|row| partition.role_of(row) == Some(RowRole::Running))
            .collect();
        let result = PartitionResult::from_rows(
            opening_total,
            RunningBalanceScanner::scan(&running, opening_total),
        );
        debug!(
            %partition,
            members = members.len(),
            running = result.rows.len(),
            opening_total = %result.opening_total,
            closing_total = %result.closing_total,
            "reconciled partition"
        );
        result
    }
}
