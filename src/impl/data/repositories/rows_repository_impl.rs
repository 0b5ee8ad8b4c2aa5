use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    data::{
        datasources::{
            aggregation_config_ron_datasource::{
                AggregationConfigRonDatasource, AggregationConfigRonDatasourceImpl,
            },
            ledger_rows_csv_datasource::{LedgerRowsCsvDatasource, LedgerRowsCsvDatasourceImpl},
            rows_json_datasource::{RowsJsonDatasource, RowsJsonDatasourceImpl},
        },
        models::{
            ledger_row_model::LedgerRowModel,
            report_row_models::{ExpenseRowModel, PnlRowModel},
        },
    },
    domain::repositories::rows_repository::RowsRepository,
    entities::{AggregationConfig, ExpenseRow, LedgerRow, PnlRow},
    errors::ReadError,
};

pub(crate) struct RowsRepositoryImpl {
    ledger_json_datasource: RowsJsonDatasourceImpl<LedgerRowModel>,
    ledger_csv_datasource: LedgerRowsCsvDatasourceImpl,
    expense_json_datasource: RowsJsonDatasourceImpl<ExpenseRowModel>,
    pnl_json_datasource: RowsJsonDatasourceImpl<PnlRowModel>,
    config_ron_datasource: AggregationConfigRonDatasourceImpl,
}

async fn read_to_string<P>(path: P) -> Result<String, ServerError>
where
    P: AsRef<std::path::Path>,
{
    debug!(path = %path.as_ref().display(), "reading rows");
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ReadError::with_debug(&e))
}

fn is_csv(path: &std::path::Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

#[async_trait]
impl RowsRepository for RowsRepositoryImpl {
    fn ledger_rows_from_string(&self, json: &str) -> Result<Vec<LedgerRow>, ServerError> {
        self.ledger_json_datasource.from_string(json)
    }

    async fn ledger_rows_from_file<P>(&self, path: P) -> Result<Vec<LedgerRow>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let csv = is_csv(path.as_ref());
        let content = read_to_string(path).await?;
        if csv {
            self.ledger_csv_datasource.from_string(&content)
        } else {
            self.ledger_json_datasource.from_string(&content)
        }
    }

    fn expense_rows_from_string(&self, json: &str) -> Result<Vec<ExpenseRow>, ServerError> {
        self.expense_json_datasource.from_string(json)
    }

    async fn expense_rows_from_file<P>(&self, path: P) -> Result<Vec<ExpenseRow>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.expense_json_datasource
            .from_string(&read_to_string(path).await?)
    }

    fn pnl_rows_from_string(&self, json: &str) -> Result<Vec<PnlRow>, ServerError> {
        self.pnl_json_datasource.from_string(json)
    }

    async fn pnl_rows_from_file<P>(&self, path: P) -> Result<Vec<PnlRow>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.pnl_json_datasource
            .from_string(&read_to_string(path).await?)
    }

    fn aggregation_config_from_string(&self, ron: &str) -> Result<AggregationConfig, ServerError> {
        self.config_ron_datasource.from_string(ron)
    }

    async fn aggregation_config_from_file<P>(&self, path: P) -> Result<AggregationConfig, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.config_ron_datasource
            .from_string(&read_to_string(path).await?)
    }
}

impl RowsRepositoryImpl {
    pub(crate) fn new() -> Self {
        RowsRepositoryImpl {
            ledger_json_datasource: RowsJsonDatasourceImpl::new(),
            ledger_csv_datasource: LedgerRowsCsvDatasourceImpl::new(),
            expense_json_datasource: RowsJsonDatasourceImpl::new(),
            pnl_json_datasource: RowsJsonDatasourceImpl::new(),
            config_ron_datasource: AggregationConfigRonDatasourceImpl::new(),
        }
    }
}
