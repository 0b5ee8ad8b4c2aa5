use std::sync::LazyLock;

use crate::{
    domain::logic::category_aggregator::CategoryAggregator,
    entities::{AggregationConfig, CategoryBucket, ExpenseLine, ExpenseRow, PnlRow, ValueTransform},
};

use super::settlement_expenses::GST;

pub const OP_ASSETS: &str = "OP_ASSETS";
pub const ASSETS: &str = "ASSETS";
pub const LONGTERM: &str = "LONGTERM";
pub const SHORTTERM: &str = "SHORTTERM";

/// Yearly charges of the equity and derivatives P&L reports. Unlike the
/// contract-note breakdown every repeated code is summed (by absolute value);
/// CGST and SGST are reported together as GST.
pub static ANNUAL_REPORT_EXPENSES: LazyLock<AggregationConfig> = LazyLock::new(|| {
    AggregationConfig::new()
        .strip_markers()
        .merge(["CGST", "SGST"], GST)
        .accumulate_unmapped()
        .accumulated_value(ValueTransform::Absolute)
        .priority(["STT", "STAMP DUTY", GST])
});

/// Realized P&L grouped by transaction type, with opening-position variants
/// of the holding-period types folded into their regular counterparts.
pub static TRANSACTION_TYPES: LazyLock<AggregationConfig> = LazyLock::new(|| {
    AggregationConfig::new()
        .merge(["OP LONGTERM", LONGTERM], LONGTERM)
        .merge(["OP_SHORTTERM", SHORTTERM], SHORTTERM)
        .accumulate_unmapped()
        .accumulated_value(ValueTransform::Signed)
        .priority([OP_ASSETS, ASSETS])
});

/// Keyed by the company code of each row, `*` markers removed.
pub fn annual_report_expense_breakdown(rows: &[ExpenseRow]) -> Vec<ExpenseLine> {
    CategoryAggregator::new(&ANNUAL_REPORT_EXPENSES).aggregate_lines(
        rows,
        |r| r.company_code.as_str(),
        |r| r.net_amount,
    )
}

pub fn transaction_type_groups(rows: &[PnlRow]) -> Vec<CategoryBucket<PnlRow>> {
    CategoryAggregator::new(&TRANSACTION_TYPES).aggregate(
        rows,
        |r| r.transaction_type.as_str(),
        PnlRow::grouping_value,
    )
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;

    fn expense(company_code: &str, amount: Decimal) -> ExpenseRow {
        ExpenseRow {
            company_code: company_code.to_string(),
            ..ExpenseRow::new("", amount)
        }
    }

    #[test]
    fn repeated_codes_accumulate_by_absolute_value() {
        let rows = vec![
            expense("*BROKERAGE*", dec!(-100)),
            expense("CGST", dec!(-9)),
            expense("BROKERAGE", dec!(-50)),
            expense("STT", dec!(-30)),
            expense("SGST", dec!(9)),
        ];
        let lines: Vec<(String, Decimal)> = annual_report_expense_breakdown(&rows)
            .into_iter()
            .map(|l| (l.label, l.amount))
            .collect();
        assert_eq!(
            lines,
            vec![
                ("STT".to_string(), dec!(30)),
                ("GST".to_string(), dec!(18)),
                ("BROKERAGE".to_string(), dec!(150)),
            ]
        );
    }

    #[test]
    fn transaction_types_pin_assets_first() {
        let rows = vec![
            PnlRow::new("SHORTTERM", dec!(120), dec!(1000)),
            PnlRow::new("ASSETS", dec!(5), dec!(0)),
            PnlRow::new("OP LONGTERM", dec!(-40), dec!(800)),
            PnlRow::new("LIABILITIES", dec!(7), dec!(300)),
            PnlRow::new("OP_SHORTTERM", dec!(-20), dec!(500)),
            PnlRow::new("OP_ASSETS", dec!(2), dec!(0)),
            PnlRow::new("LONGTERM", dec!(60), dec!(900)),
        ];
        let groups = transaction_type_groups(&rows);
        let summary: Vec<(&str, Decimal, usize)> = groups
            .iter()
            .map(|g| (g.label.as_str(), g.total, g.members.len()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (OP_ASSETS, dec!(2), 1),
                (ASSETS, dec!(5), 1),
                (SHORTTERM, dec!(100), 2),
                (LONGTERM, dec!(20), 2),
                ("LIABILITIES", dec!(300), 1),
            ]
        );
    }
}
