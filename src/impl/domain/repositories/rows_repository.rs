use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{AggregationConfig, ExpenseRow, LedgerRow, PnlRow};

#[async_trait]
pub trait RowsRepository: Send + Sync {
    fn ledger_rows_from_string(&self, json: &str) -> Result<Vec<LedgerRow>, ServerError>;

    /// CSV exports are recognized by their `.csv` extension; anything else is
    /// read as the JSON API payload.
    async fn ledger_rows_from_file<P>(&self, path: P) -> Result<Vec<LedgerRow>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn expense_rows_from_string(&self, json: &str) -> Result<Vec<ExpenseRow>, ServerError>;

    async fn expense_rows_from_file<P>(&self, path: P) -> Result<Vec<ExpenseRow>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn pnl_rows_from_string(&self, json: &str) -> Result<Vec<PnlRow>, ServerError>;

    async fn pnl_rows_from_file<P>(&self, path: P) -> Result<Vec<PnlRow>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn aggregation_config_from_string(&self, ron: &str) -> Result<AggregationConfig, ServerError>;

    async fn aggregation_config_from_file<P>(&self, path: P) -> Result<AggregationConfig, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
