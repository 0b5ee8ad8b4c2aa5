use serde::Deserialize;
use serde_json::Value;

/// Yes/no marker. Accepts booleans, `1`/`0` and `Y`/`N`/`TRUE`/`FALSE` in any
/// case; anything else reads as unset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FlagModel(pub bool);

impl FlagModel {
    pub(crate) fn from_raw(raw: &str) -> Self {
        Self(matches!(
            raw.trim().to_ascii_uppercase().as_str(),
            "Y" | "YES" | "TRUE" | "1"
        ))
    }
}

impl<'de> Deserialize<'de> for FlagModel {
    fn deserialize<D>(deserializer: D) -> Result<FlagModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Bool(b) => Self(b),
            Value::Number(n) => Self(n.as_f64().is_some_and(|v| v != 0.0)),
            Value::String(s) => Self::from_raw(&s),
            _ => Self::default(),
        })
    }
}

impl Into<bool> for FlagModel {
    fn into(self) -> bool {
        self.0
    }
}
