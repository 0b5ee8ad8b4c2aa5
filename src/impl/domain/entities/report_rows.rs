use rust_decimal::Decimal;
use serde_derive::{Deserialize, Serialize};

use super::ledger_row::SettlementKey;

pub const LIABILITIES_TRANSACTION_TYPE: &str = "LIABILITIES";

/// Charge line of a contract note / annual statement (brokerage, taxes,
/// exchange fees...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRow {
    pub company_code: String,
    pub scrip_data_code: String,
    pub net_amount: Decimal,
    /// Set on charge lines that do not contribute to trading profit.
    pub not_profit: bool,
    pub market_type: Option<String>,
    pub settlement_no: Option<String>,
}

/// Realized P&L line of an annual equity or derivatives report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PnlRow {
    pub transaction_type: String,
    pub company_code: String,
    pub pnl_amount: Decimal,
    pub sale_amount: Decimal,
}

// --

impl ExpenseRow {
    pub fn new(scrip_data_code: impl Into<String>, net_amount: Decimal) -> Self {
        let code = scrip_data_code.into();
        Self {
            company_code: code.clone(),
            scrip_data_code: code,
            net_amount,
            not_profit: true,
            market_type: None,
            settlement_no: None,
        }
    }

    pub fn in_settlement(&self, key: &SettlementKey) -> bool {
        self.market_type.as_deref() == Some(key.market_type.as_str())
            && self.settlement_no.as_deref() == Some(key.settlement_no.as_str())
    }
}

impl PnlRow {
    pub fn new(transaction_type: impl Into<String>, pnl_amount: Decimal, sale_amount: Decimal) -> Self {
        Self {
            transaction_type: transaction_type.into(),
            company_code: String::new(),
            pnl_amount,
            sale_amount,
        }
    }

    /// Amount a row contributes to its transaction-type group. Liabilities
    /// are reported at sale value; every other type at realized P&L.
    pub fn grouping_value(&self) -> Decimal {
        if self.transaction_type == LIABILITIES_TRANSACTION_TYPE {
            self.sale_amount
        } else {
            self.pnl_amount
        }
    }
}
