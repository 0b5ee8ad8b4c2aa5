use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%d-%b-%Y"];
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Bill date of a ledger row. Dates are informational only (rows arrive
/// already in chronological order), so unreadable values are logged and
/// dropped instead of rejecting the whole row set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BillDateModel(pub Option<NaiveDate>);

impl BillDateModel {
    pub(crate) fn from_raw(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self(None);
        }
        let parsed = DATE_FORMATS
            .iter()
            .find_map(|f| NaiveDate::parse_from_str(raw, f).ok())
            .or_else(|| {
                DATE_TIME_FORMATS
                    .iter()
                    .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
                    .map(|dt| dt.date())
            });
        if parsed.is_none() {
            warn!(raw, "unreadable bill date ignored");
        }
        Self(parsed)
    }
}

impl<'de> Deserialize<'de> for BillDateModel {
    fn deserialize<D>(deserializer: D) -> Result<BillDateModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Self::from_raw(&s),
            _ => Self::default(),
        })
    }
}

impl Into<Option<NaiveDate>> for BillDateModel {
    fn into(self) -> Option<NaiveDate> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_back_office_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 4, 1);
        assert_eq!(BillDateModel::from_raw("2024-04-01").0, expected);
        assert_eq!(BillDateModel::from_raw("01-04-2024").0, expected);
        assert_eq!(BillDateModel::from_raw("01/04/2024").0, expected);
        assert_eq!(BillDateModel::from_raw("01-Apr-2024").0, expected);
        assert_eq!(BillDateModel::from_raw("2024-04-01T00:00:00").0, expected);
        assert_eq!(BillDateModel::from_raw("2024-04-01 10:15:00.000").0, expected);
        assert_eq!(BillDateModel::from_raw("someday").0, None);
        assert_eq!(BillDateModel::from_raw("  ").0, None);
    }
}
