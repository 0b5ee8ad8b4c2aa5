use fractic_server_error::ServerError;

use crate::{
    data::models::{
        accounting_amount_model::AccountingAmountModel, bill_date_model::BillDateModel,
        ledger_row_model::LedgerRowModel, text_model::TextModel,
    },
    entities::LedgerRow,
    errors::{InvalidCsv, MissingCsvColumn},
};

const REQUIRED_COLUMNS: [&str; 5] = ["COCD", "ACCOUNTCODE", "NARRATION", "CR_AMT", "DR_AMT"];

/// Ledger-book export with the same column names as the API payload. Column
/// order is free; optional columns may be absent.
pub(crate) trait LedgerRowsCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<LedgerRow>, ServerError>;
}

pub(crate) struct LedgerRowsCsvDatasourceImpl;

impl LedgerRowsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

struct ColumnIndex {
    headers: csv::StringRecord,
}

impl ColumnIndex {
    fn position(&self, names: &[&str]) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
    }

    fn require(&self, name: &str) -> Result<usize, ServerError> {
        self.position(&[name])
            .ok_or_else(|| MissingCsvColumn::new(name))
    }
}

impl LedgerRowsCsvDatasource for LedgerRowsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<LedgerRow>, ServerError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(s.as_bytes());
        let columns = ColumnIndex {
            headers: reader.headers().map_err(|e| InvalidCsv::with_debug(&e))?.clone(),
        };
        let [book_code, account_code, narration, credit, debit] =
            REQUIRED_COLUMNS.map(|c| columns.require(c));
        let (book_code, account_code, narration, credit, debit) =
            (book_code?, account_code?, narration?, credit?, debit?);
        let bill_date = columns.position(&["BILL_DATE", "BILLDATE"]);
        let market_type = columns.position(&["MKT_TYPE", "MARKET_TYPE"]);
        let settlement_no = columns.position(&["SETTLEMENT_NO", "SETT_NO"]);

        reader
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).map(|r| {
                    // Extract from CSV record.
                    let get = |i: usize| r.get(i).unwrap_or("");
                    let get_opt = |i: Option<usize>| i.map_or("", get);

                    // Parse (leniently) and build.
                    let row: LedgerRow = LedgerRowModel {
                        book_code: TextModel::from_raw(get(book_code)),
                        account_code: TextModel::from_raw(get(account_code)),
                        narration: TextModel::from_raw(get(narration)),
                        credit_amount: AccountingAmountModel::from_raw(get(credit)),
                        debit_amount: AccountingAmountModel::from_raw(get(debit)),
                        bill_date: BillDateModel::from_raw(get_opt(bill_date)),
                        market_type: TextModel::from_raw(get_opt(market_type)),
                        settlement_no: TextModel::from_raw(get_opt(settlement_no)),
                    }
                    .into();
                    row
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn reads_export_in_any_column_order() {
        let csv = "NARRATION,CR_AMT,DR_AMT,COCD,ACCOUNTCODE,BILL_DATE\n\
                   OPENING BALANCE,\"1,500.00\",0,NSE,C1,01-04-2024\n\
                   BILL NO 7,,(20.25),NSE,C1,\n";
        let rows = LedgerRowsCsvDatasourceImpl::new().from_string(csv).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].credit_amount, dec!(1500));
        assert!(rows[0].bill_date.is_some());
        assert_eq!(rows[1].debit_amount, dec!(-20.25));
        assert_eq!(rows[1].market_type, None);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let csv = "COCD,ACCOUNTCODE,NARRATION,CR_AMT\nNSE,C1,BILL,1\n";
        assert!(LedgerRowsCsvDatasourceImpl::new().from_string(csv).is_err());
    }
}
