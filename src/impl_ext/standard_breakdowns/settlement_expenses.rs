use std::sync::LazyLock;

use crate::{
    domain::logic::category_aggregator::CategoryAggregator,
    entities::{AggregationConfig, ExpenseLine, ExpenseRow, ValueTransform},
};

pub const GST: &str = "GST";
pub const TRANSACTION_CHARGES: &str = "Transaction Charges";
pub const SEBI_FEES: &str = "SEBI FEES";
pub const BROKERAGE: &str = "Brokerage";

/// Charge lines of a single contract note. Taxes and exchange transaction
/// charges are merged (by absolute value); every other charge is listed once
/// per line, sign preserved.
pub static SETTLEMENT_EXPENSES: LazyLock<AggregationConfig> = LazyLock::new(|| {
    AggregationConfig::new()
        .merge(["CGST", "SGST"], GST)
        .merge(["DEF4NSE", "DEF4BSE"], TRANSACTION_CHARGES)
        .label("ACCOUNT732", SEBI_FEES)
        .label("BRK", BROKERAGE)
        .accumulated_value(ValueTransform::Absolute)
        .per_row_value(ValueTransform::Signed)
        .priority(["STT", "STAMP DUTY", GST])
});

/// Keyed by the scrip-data code of each row.
pub fn settlement_expense_breakdown(rows: &[ExpenseRow]) -> Vec<ExpenseLine> {
    CategoryAggregator::new(&SETTLEMENT_EXPENSES).aggregate_lines(
        rows,
        |r| r.scrip_data_code.as_str(),
        |r| r.net_amount,
    )
}
