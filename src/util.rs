use fractic_server_error::ServerError;
use rust_decimal::Decimal;

use crate::{
    data::repositories::rows_repository_impl::RowsRepositoryImpl,
    domain::{
        logic::category_aggregator::CategoryAggregator,
        repositories::rows_repository::RowsRepository as _,
        usecases::{
            breakdown_usecase::{BreakdownConfigs, BreakdownUsecase as _, BreakdownUsecaseImpl},
            reconcile_usecase::{ReconcileUsecase as _, ReconcileUsecaseImpl},
        },
    },
    entities::{
        AggregationConfig, AnnualReport, CategoryBucket, ExpenseLine, ExpenseRow, LedgerRow,
        PnlRow, Reconciliation, SettlementBreakdown, SettlementKey,
    },
    ext::standard_breakdowns::{ANNUAL_REPORT_EXPENSES, SETTLEMENT_EXPENSES, TRANSACTION_TYPES},
};

/// Entry point of the library: ledger-book reconciliation, contract-note
/// breakdowns and annual P&L reports, from already-parsed rows or straight
/// from the back-office payloads.
pub struct BrokerageLedgerUtil {
    reconcile_usecase: ReconcileUsecaseImpl,
    breakdown_usecase: BreakdownUsecaseImpl,
    rows_repository: RowsRepositoryImpl,
}

impl BrokerageLedgerUtil {
    pub fn new() -> Self {
        Self {
            reconcile_usecase: ReconcileUsecaseImpl::new(),
            breakdown_usecase: BreakdownUsecaseImpl::new(BreakdownConfigs {
                settlement_expenses: &SETTLEMENT_EXPENSES,
                annual_expenses: &ANNUAL_REPORT_EXPENSES,
                transaction_types: &TRANSACTION_TYPES,
            }),
            rows_repository: RowsRepositoryImpl::new(),
        }
    }

    // Ledger book.
    // ---

    pub fn reconcile(&self, rows: &[LedgerRow]) -> Reconciliation {
        self.reconcile_usecase.from_rows(rows)
    }

    pub async fn reconcile_from_string(&self, ledger_json: &str) -> Result<Reconciliation, ServerError> {
        self.reconcile_usecase.from_string(ledger_json).await
    }

    /// Accepts the JSON API payload or a `.csv` export.
    pub async fn reconcile_from_file<T>(&self, ledger: T) -> Result<Reconciliation, ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        self.reconcile_usecase.from_file(ledger).await
    }

    // Contract notes.
    // ---

    pub fn settlement_breakdown(
        &self,
        expense_rows: &[ExpenseRow],
        settlement: &SettlementKey,
    ) -> SettlementBreakdown {
        self.breakdown_usecase
            .settlement_from_rows(expense_rows, settlement)
    }

    pub async fn settlement_breakdown_from_string(
        &self,
        expenses_json: &str,
        settlement: &SettlementKey,
    ) -> Result<SettlementBreakdown, ServerError> {
        self.breakdown_usecase
            .settlement_from_string(expenses_json, settlement)
            .await
    }

    // Annual reports.
    // ---

    pub fn annual_report(&self, pnl_rows: &[PnlRow], expense_rows: &[ExpenseRow]) -> AnnualReport {
        self.breakdown_usecase
            .annual_report_from_rows(pnl_rows, expense_rows)
    }

    pub async fn annual_report_from_string(
        &self,
        pnl_json: &str,
        expenses_json: &str,
    ) -> Result<AnnualReport, ServerError> {
        self.breakdown_usecase
            .annual_report_from_string(pnl_json, expenses_json)
            .await
    }

    pub async fn annual_report_from_file<T1, T2>(
        &self,
        pnl: T1,
        expenses: T2,
    ) -> Result<AnnualReport, ServerError>
    where
        T1: AsRef<std::path::Path> + Send,
        T2: AsRef<std::path::Path> + Send,
    {
        self.breakdown_usecase
            .annual_report_from_file(pnl, expenses)
            .await
    }

    // Custom breakdowns.
    // ---

    pub fn aggregate<R, K, V>(
        &self,
        rows: &[R],
        config: &AggregationConfig,
        key_of: K,
        value_of: V,
    ) -> Vec<CategoryBucket<R>>
    where
        R: Clone,
        K: Fn(&R) -> &str,
        V: Fn(&R) -> Decimal,
    {
        CategoryAggregator::new(config).aggregate(rows, key_of, value_of)
    }

    pub fn aggregate_lines<R, K, V>(
        &self,
        rows: &[R],
        config: &AggregationConfig,
        key_of: K,
        value_of: V,
    ) -> Vec<ExpenseLine>
    where
        R: Clone,
        K: Fn(&R) -> &str,
        V: Fn(&R) -> Decimal,
    {
        CategoryAggregator::new(config).aggregate_lines(rows, key_of, value_of)
    }

    pub fn aggregation_config_from_string(&self, ron: &str) -> Result<AggregationConfig, ServerError> {
        self.rows_repository.aggregation_config_from_string(ron)
    }

    pub async fn aggregation_config_from_file<T>(&self, path: T) -> Result<AggregationConfig, ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        self.rows_repository.aggregation_config_from_file(path).await
    }
}

impl Default for BrokerageLedgerUtil {
    fn default() -> Self {
        Self::new()
    }
}
