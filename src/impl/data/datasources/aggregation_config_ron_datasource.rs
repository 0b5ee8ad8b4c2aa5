use fractic_server_error::ServerError;
use ron::from_str;

use crate::{entities::AggregationConfig, errors::InvalidRon};

/// Breakdown configurations declared as data, e.g.
///
/// ```ron
/// (
///     merge_map: { "CGST": "GST", "SGST": "GST" },
///     unmapped: Accumulate,
///     accumulated_value: Absolute,
///     priority_order: ["STT", "GST"],
/// )
/// ```
pub(crate) trait AggregationConfigRonDatasource {
    fn from_string(&self, s: &str) -> Result<AggregationConfig, ServerError>;
}

pub(crate) struct AggregationConfigRonDatasourceImpl;

impl AggregationConfigRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl AggregationConfigRonDatasource for AggregationConfigRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<AggregationConfig, ServerError> {
        from_str(s).map_err(|e| InvalidRon::with_debug("AggregationConfig", &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{KeyCleaning, UnmappedKeys, ValueTransform};

    #[test]
    fn reads_partial_config_with_defaults() {
        let config = AggregationConfigRonDatasourceImpl::new()
            .from_string(
                r#"(
                    key_cleaning: StripMarkers,
                    merge_map: { "CGST": "GST", "SGST": "GST" },
                    unmapped: Accumulate,
                    accumulated_value: Absolute,
                    priority_order: ["STT", "GST"],
                )"#,
            )
            .unwrap();

        assert_eq!(config.key_cleaning, KeyCleaning::StripMarkers);
        assert_eq!(config.merge_map.get("SGST").map(String::as_str), Some("GST"));
        assert!(config.label_map.is_empty());
        assert_eq!(config.unmapped, UnmappedKeys::Accumulate);
        assert_eq!(config.per_row_value, ValueTransform::Signed);
        assert_eq!(config.priority_order, vec!["STT", "GST"]);
    }

    #[test]
    fn rejects_unknown_variants() {
        assert!(AggregationConfigRonDatasourceImpl::new()
            .from_string("(unmapped: Sometimes)")
            .is_err());
    }
}
