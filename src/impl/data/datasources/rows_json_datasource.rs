use fractic_server_error::ServerError;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{InvalidJson, InvalidJsonRow};

/// Reads the JSON array payload returned by the back-office API into domain
/// rows, going through the lenient model `M`.
pub(crate) trait RowsJsonDatasource<E> {
    fn from_string(&self, s: &str) -> Result<Vec<E>, ServerError>;
}

pub(crate) struct RowsJsonDatasourceImpl<M> {
    _phantom: std::marker::PhantomData<M>,
}

impl<M> RowsJsonDatasourceImpl<M> {
    pub(crate) fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<M, E> RowsJsonDatasource<E> for RowsJsonDatasourceImpl<M>
where
    M: DeserializeOwned + Into<E>,
{
    fn from_string(&self, s: &str) -> Result<Vec<E>, ServerError> {
        let values: Vec<Value> = serde_json::from_str(s).map_err(|e| InvalidJson::with_debug(&e))?;
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                if !v.is_object() {
                    return Err(InvalidJsonRow::new(i));
                }
                serde_json::from_value::<M>(v)
                    .map(Into::into)
                    .map_err(|e| InvalidJsonRow::with_debug(i, &e))
            })
            .collect()
    }
}
