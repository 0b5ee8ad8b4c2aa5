use serde_derive::Deserialize;

use crate::entities::LedgerRow;

use super::{
    accounting_amount_model::AccountingAmountModel, bill_date_model::BillDateModel,
    text_model::TextModel,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct LedgerRowModel {
    #[serde(rename = "COCD")]
    pub(crate) book_code: TextModel,
    #[serde(rename = "ACCOUNTCODE")]
    pub(crate) account_code: TextModel,
    #[serde(rename = "NARRATION")]
    pub(crate) narration: TextModel,
    #[serde(rename = "CR_AMT")]
    pub(crate) credit_amount: AccountingAmountModel,
    #[serde(rename = "DR_AMT")]
    pub(crate) debit_amount: AccountingAmountModel,
    #[serde(rename = "BILL_DATE", alias = "BILLDATE")]
    pub(crate) bill_date: BillDateModel,
    #[serde(rename = "MKT_TYPE", alias = "MARKET_TYPE")]
    pub(crate) market_type: TextModel,
    #[serde(rename = "SETTLEMENT_NO", alias = "SETT_NO")]
    pub(crate) settlement_no: TextModel,
}

impl Into<LedgerRow> for LedgerRowModel {
    fn into(self) -> LedgerRow {
        LedgerRow {
            book_code: self.book_code.into(),
            account_code: self.account_code.into(),
            narration: self.narration.into(),
            credit_amount: self.credit_amount.into(),
            debit_amount: self.debit_amount.into(),
            bill_date: self.bill_date.into(),
            market_type: self.market_type.non_empty(),
            settlement_no: self.settlement_no.non_empty(),
        }
    }
}
