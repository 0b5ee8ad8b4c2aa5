use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::instrument;

use crate::{
    data::repositories::rows_repository_impl::RowsRepositoryImpl,
    domain::{
        logic::category_aggregator::CategoryAggregator,
        repositories::rows_repository::RowsRepository,
    },
    entities::{
        AggregationConfig, AnnualReport, ExpenseRow, PnlRow, SettlementBreakdown, SettlementKey,
    },
};

#[async_trait]
pub trait BreakdownUsecase: Send + Sync {
    fn settlement_from_rows(
        &self,
        expense_rows: &[ExpenseRow],
        settlement: &SettlementKey,
    ) -> SettlementBreakdown;

    async fn settlement_from_string(
        &self,
        expenses_json: &str,
        settlement: &SettlementKey,
    ) -> Result<SettlementBreakdown, ServerError>;

    fn annual_report_from_rows(&self, pnl_rows: &[PnlRow], expense_rows: &[ExpenseRow])
        -> AnnualReport;

    async fn annual_report_from_string(
        &self,
        pnl_json: &str,
        expenses_json: &str,
    ) -> Result<AnnualReport, ServerError>;

    async fn annual_report_from_file<P1, P2>(
        &self,
        pnl: P1,
        expenses: P2,
    ) -> Result<AnnualReport, ServerError>
    where
        P1: AsRef<std::path::Path> + Send,
        P2: AsRef<std::path::Path> + Send;
}

/// Aggregation configs driving each breakdown.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BreakdownConfigs<'c> {
    /// Contract-note charges, keyed by scrip-data code.
    pub(crate) settlement_expenses: &'c AggregationConfig,
    /// Yearly charges, keyed by company code.
    pub(crate) annual_expenses: &'c AggregationConfig,
    /// P&L rows, keyed by transaction type.
    pub(crate) transaction_types: &'c AggregationConfig,
}

pub(crate) struct BreakdownUsecaseImpl<
    R1 = RowsRepositoryImpl, // Default.
> where
    R1: RowsRepository,
{
    rows_repository: R1,
    configs: BreakdownConfigs<'static>,
}

#[async_trait]
impl<R1> BreakdownUsecase for BreakdownUsecaseImpl<R1>
where
    R1: RowsRepository,
{
    /// Only the non-profit (charge) lines booked against the given bill take
    /// part in its breakdown.
    #[instrument(skip_all, fields(settlement = %settlement))]
    fn settlement_from_rows(
        &self,
        expense_rows: &[ExpenseRow],
        settlement: &SettlementKey,
    ) -> SettlementBreakdown {
        let bill_rows: Vec<ExpenseRow> = expense_rows
            .iter()
            .filter(|r| r.not_profit && r.in_settlement(settlement))
            .cloned()
            .collect();
        let lines = CategoryAggregator::new(self.configs.settlement_expenses).aggregate_lines(
            &bill_rows,
            |r| r.scrip_data_code.as_str(),
            |r| r.net_amount,
        );
        SettlementBreakdown::new(settlement.clone(), lines)
    }

    async fn settlement_from_string(
        &self,
        expenses_json: &str,
        settlement: &SettlementKey,
    ) -> Result<SettlementBreakdown, ServerError> {
        let rows = self.rows_repository.expense_rows_from_string(expenses_json)?;
        Ok(self.settlement_from_rows(&rows, settlement))
    }

    #[instrument(skip_all, fields(pnl_rows = pnl_rows.len(), expense_rows = expense_rows.len()))]
    fn annual_report_from_rows(
        &self,
        pnl_rows: &[PnlRow],
        expense_rows: &[ExpenseRow],
    ) -> AnnualReport {
        let type_groups = CategoryAggregator::new(self.configs.transaction_types).aggregate(
            pnl_rows,
            |r| r.transaction_type.as_str(),
            PnlRow::grouping_value,
        );
        let expense_lines = CategoryAggregator::new(self.configs.annual_expenses).aggregate_lines(
            expense_rows,
            |r| r.company_code.as_str(),
            |r| r.net_amount,
        );
        AnnualReport::new(type_groups, expense_lines)
    }

    async fn annual_report_from_string(
        &self,
        pnl_json: &str,
        expenses_json: &str,
    ) -> Result<AnnualReport, ServerError> {
        let pnl_rows = self.rows_repository.pnl_rows_from_string(pnl_json)?;
        let expense_rows = self.rows_repository.expense_rows_from_string(expenses_json)?;
        Ok(self.annual_report_from_rows(&pnl_rows, &expense_rows))
    }

    async fn annual_report_from_file<P1, P2>(
        &self,
        pnl: P1,
        expenses: P2,
    ) -> Result<AnnualReport, ServerError>
    where
        P1: AsRef<std::path::Path> + Send,
        P2: AsRef<std::path::Path> + Send,
    {
        let (pnl_rows, expense_rows) = futures::try_join!(
            self.rows_repository.pnl_rows_from_file(pnl),
            self.rows_repository.expense_rows_from_file(expenses),
        )?;
        Ok(self.annual_report_from_rows(&pnl_rows, &expense_rows))
    }
}

impl BreakdownUsecaseImpl {
    pub(crate) fn new(configs: BreakdownConfigs<'static>) -> Self {
        BreakdownUsecaseImpl {
            rows_repository: RowsRepositoryImpl::new(),
            configs,
        }
    }
}
