use serde_derive::Deserialize;

use crate::entities::{ExpenseRow, PnlRow};

use super::{accounting_amount_model::AccountingAmountModel, flag_model::FlagModel, text_model::TextModel};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ExpenseRowModel {
    #[serde(alias = "COMPANY_CODE")]
    company_code: TextModel,
    #[serde(rename = "SCRIPDATACOL")]
    scrip_data_code: TextModel,
    #[serde(rename = "NET_AMOUNT")]
    net_amount: AccountingAmountModel,
    #[serde(rename = "NOT_PROFIT")]
    not_profit: FlagModel,
    #[serde(rename = "MKT_TYPE", alias = "MARKET_TYPE")]
    market_type: TextModel,
    #[serde(rename = "SETTLEMENT_NO", alias = "SETT_NO")]
    settlement_no: TextModel,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct PnlRowModel {
    #[serde(rename = "TRANSACTION_TYPE", alias = "TRANS_TYPE")]
    transaction_type: TextModel,
    #[serde(alias = "COMPANY_CODE")]
    company_code: TextModel,
    #[serde(rename = "PNL", alias = "PNL_AMOUNT")]
    pnl_amount: AccountingAmountModel,
    #[serde(rename = "SALE_AMOUNT", alias = "SALE_AMT")]
    sale_amount: AccountingAmountModel,
}

impl Into<ExpenseRow> for ExpenseRowModel {
    fn into(self) -> ExpenseRow {
        ExpenseRow {
            company_code: self.company_code.into(),
            scrip_data_code: self.scrip_data_code.into(),
            net_amount: self.net_amount.into(),
            not_profit: self.not_profit.into(),
            market_type: self.market_type.non_empty(),
            settlement_no: self.settlement_no.non_empty(),
        }
    }
}

impl Into<PnlRow> for PnlRowModel {
    fn into(self) -> PnlRow {
        PnlRow {
            transaction_type: self.transaction_type.into(),
            company_code: self.company_code.into(),
            pnl_amount: self.pnl_amount.into(),
            sale_amount: self.sale_amount.into(),
        }
    }
}
