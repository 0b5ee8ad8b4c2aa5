use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_derive::{Deserialize, Serialize};

pub const OPENING_BALANCE_NARRATION: &str = "OPENING BALANCE";
pub const ASSOCIATE_OPENING_BALANCE_NARRATION: &str = "ASSOCIATE OPENING BALANCE";

/// A single ledger-book line as supplied by the back-office API, after
/// validation at the ingestion boundary (amounts are never malformed here).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    pub book_code: String,
    pub account_code: String,
    pub narration: String,
    pub credit_amount: Decimal,
    pub debit_amount: Decimal,
    pub bill_date: Option<NaiveDate>,
    pub market_type: Option<String>,
    pub settlement_no: Option<String>,
}

/// Identifies a single clearing settlement batch (a "bill").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SettlementKey {
    pub market_type: String,
    pub settlement_no: String,
}

// --

impl LedgerRow {
    pub fn new(
        book_code: impl Into<String>,
        account_code: impl Into<String>,
        narration: impl Into<String>,
        credit_amount: Decimal,
        debit_amount: Decimal,
    ) -> Self {
        Self {
            book_code: book_code.into(),
            account_code: account_code.into(),
            narration: narration.into(),
            credit_amount,
            debit_amount,
            bill_date: None,
            market_type: None,
            settlement_no: None,
        }
    }

    /// Signed contribution of the row to its account balance.
    pub fn amount(&self) -> Decimal {
        self.credit_amount - self.debit_amount
    }

    pub fn is_opening_balance(&self) -> bool {
        self.narration == OPENING_BALANCE_NARRATION
    }

    pub fn is_associate_opening_balance(&self) -> bool {
        self.narration == ASSOCIATE_OPENING_BALANCE_NARRATION
    }

    /// The settlement this row was booked against, if the API supplied both
    /// halves of the key.
    pub fn settlement(&self) -> Option<SettlementKey> {
        match (&self.market_type, &self.settlement_no) {
            (Some(market_type), Some(settlement_no)) => Some(SettlementKey {
                market_type: market_type.clone(),
                settlement_no: settlement_no.clone(),
            }),
            _ => None,
        }
    }
}

impl SettlementKey {
    pub fn new(market_type: impl Into<String>, settlement_no: impl Into<String>) -> Self {
        Self {
            market_type: market_type.into(),
            settlement_no: settlement_no.into(),
        }
    }
}

impl std::fmt::Display for SettlementKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.market_type, self.settlement_no)
    }
}
