use rust_decimal::Decimal;

use crate::entities::{BalancedRow, LedgerRow};

pub(crate) struct RunningBalanceScanner;

impl RunningBalanceScanner {
    /// Threads a running balance through `rows` (non-opening rows of a single
    /// partition, in chronological order), starting from `seed`.
    ///
    /// Strictly sequential: each row's opening balance is the previous row's
    /// closing balance.
    pub(crate) fn scan(rows: &[&LedgerRow], seed: Decimal) -> Vec<BalancedRow> {
        rows.iter()
            .scan(seed, |carry, row| {
                let opening_balance = *carry;
                let amount = row.amount();
                let closing_balance = opening_balance + amount;
                *carry = closing_balance;
                Some(BalancedRow {
                    row: (*row).clone(),
                    opening_balance,
                    amount,
                    closing_balance,
                })
            })
            .collect()
    }
}
