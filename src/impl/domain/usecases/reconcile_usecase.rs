use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::rows_repository_impl::RowsRepositoryImpl,
    domain::{logic::ledger_reconciler::LedgerReconciler, repositories::rows_repository::RowsRepository},
    entities::{LedgerRow, Reconciliation},
};

#[async_trait]
pub trait ReconcileUsecase: Send + Sync {
    fn from_rows(&self, rows: &[LedgerRow]) -> Reconciliation;

    async fn from_string(&self, ledger_json: &str) -> Result<Reconciliation, ServerError>;

    async fn from_file<P>(&self, ledger: P) -> Result<Reconciliation, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ReconcileUsecaseImpl<
    R1 = RowsRepositoryImpl, // Default.
> where
    R1: RowsRepository,
{
    rows_repository: R1,
}

#[async_trait]
impl<R1> ReconcileUsecase for ReconcileUsecaseImpl<R1>
where
    R1: RowsRepository,
{
    fn from_rows(&self, rows: &[LedgerRow]) -> Reconciliation {
        LedgerReconciler::new(rows).process()
    }

    async fn from_string(&self, ledger_json: &str) -> Result<Reconciliation, ServerError> {
        let rows = self.rows_repository.ledger_rows_from_string(ledger_json)?;
        Ok(LedgerReconciler::new(&rows).process())
    }

    async fn from_file<P>(&self, ledger: P) -> Result<Reconciliation, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let rows = self.rows_repository.ledger_rows_from_file(ledger).await?;
        Ok(LedgerReconciler::new(&rows).process())
    }
}

impl ReconcileUsecaseImpl {
    pub(crate) fn new() -> Self {
        ReconcileUsecaseImpl {
            rows_repository: RowsRepositoryImpl::new(),
        }
    }
}
