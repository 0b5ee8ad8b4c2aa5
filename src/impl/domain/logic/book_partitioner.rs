use tracing::debug;

use crate::entities::{LedgerRow, Partition};

#[derive(Debug, Default)]
pub(crate) struct PartitionedRows<'a> {
    pub(crate) group1: Vec<&'a LedgerRow>,
    pub(crate) mtf: Vec<&'a LedgerRow>,
    pub(crate) mtff: Vec<&'a LedgerRow>,
    /// Rows that belong to no partition (ICL book).
    pub(crate) dropped: usize,
}

pub(crate) struct BookPartitioner;

impl BookPartitioner {
    /// Splits rows into the three sub-ledgers, preserving input order within
    /// each. Unclassifiable rows are dropped without error.
    pub(crate) fn partition(rows: &[LedgerRow]) -> PartitionedRows<'_> {
        let partitioned = rows
            .iter()
            .fold(PartitionedRows::default(), |mut acc, row| {
                match Partition::of(row) {
                    Some(Partition::Group1) => acc.group1.push(row),
                    Some(Partition::Mtf) => acc.mtf.push(row),
                    Some(Partition::Mtff) => acc.mtff.push(row),
                    None => acc.dropped += 1,
                }
                acc
            });
        debug!(
            group1 = partitioned.group1.len(),
            mtf = partitioned.mtf.len(),
            mtff = partitioned.mtff.len(),
            dropped = partitioned.dropped,
            "partitioned ledger rows"
        );
        partitioned
    }
}

impl<'a> PartitionedRows<'a> {
    pub(crate) fn get(&self, partition: Partition) -> &[&'a LedgerRow] {
        match partition {
            Partition::Group1 => &self.group1,
            Partition::Mtf => &self.mtf,
            Partition::Mtff => &self.mtff,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn row(book_code: &str, account_code: &str) -> LedgerRow {
        LedgerRow::new(book_code, account_code, "BILL", Decimal::ONE, Decimal::ZERO)
    }

    #[test]
    fn classifies_by_book_and_suffix() {
        let rows = vec![
            row("NSE", "C001"),
            row("MTF", "C001"),
            row("MTF", "C001_F"),
            row("ICL", "C001"),
            row("BSE", "C001_F"),
        ];
        let partitioned = BookPartitioner::partition(&rows);
        assert_eq!(partitioned.group1, vec![&rows[0], &rows[4]]);
        assert_eq!(partitioned.mtf, vec![&rows[1]]);
        assert_eq!(partitioned.mtff, vec![&rows[2]]);
        assert_eq!(partitioned.dropped, 1);
    }

    #[test]
    fn every_row_lands_in_at_most_one_partition() {
        let rows = vec![
            row("MTF", "A_F"),
            row("MTF", "A_FX"),
            row("ICL", "A_F"),
            row("", ""),
            row("mtf", "A"),
        ];
        let partitioned = BookPartitioner::partition(&rows);
        for r in &rows {
            let hits = Partition::ALL
                .iter()
                .filter(|p| partitioned.get(**p).iter().any(|m| std::ptr::eq(*m, r)))
                .count();
            if r.book_code == "ICL" {
                assert_eq!(hits, 0);
            } else {
                assert_eq!(hits, 1);
            }
        }
        // Book codes are case-sensitive: "mtf" is an ordinary GROUP1 book.
        assert_eq!(partitioned.group1.len(), 2);
    }
}
