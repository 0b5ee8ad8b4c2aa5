use rust_decimal::Decimal;
use serde_derive::Serialize;

use super::{
    category::{abs_total, CategoryBucket, ExpenseLine},
    ledger_row::SettlementKey,
    report_rows::PnlRow,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementBreakdown {
    pub settlement: SettlementKey,
    pub lines: Vec<ExpenseLine>,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnualReport {
    pub type_groups: Vec<CategoryBucket<PnlRow>>,
    pub expense_lines: Vec<ExpenseLine>,
    pub expense_total: Decimal,
}

// --

impl SettlementBreakdown {
    pub(crate) fn new(settlement: SettlementKey, lines: Vec<ExpenseLine>) -> Self {
        let total = abs_total(&lines);
        Self {
            settlement,
            lines,
            total,
        }
    }
}

impl AnnualReport {
    pub(crate) fn new(type_groups: Vec<CategoryBucket<PnlRow>>, expense_lines: Vec<ExpenseLine>) -> Self {
        let expense_total = abs_total(&expense_lines);
        Self {
            type_groups,
            expense_lines,
            expense_total,
        }
    }
}
