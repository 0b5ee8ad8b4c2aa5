use serde::Deserialize;
use serde_json::Value;

/// Free-text or code field. The API is inconsistent about sending codes as
/// strings or numbers, so both are accepted; surrounding whitespace is
/// dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct TextModel(pub String);

impl TextModel {
    pub(crate) fn from_raw(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// `None` for absent or blank fields.
    pub(crate) fn non_empty(self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for TextModel {
    fn deserialize<D>(deserializer: D) -> Result<TextModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Self::from_raw(&s),
            Value::Number(n) => Self(n.to_string()),
            Value::Bool(b) => Self(b.to_string()),
            _ => Self::default(),
        })
    }
}

impl Into<String> for TextModel {
    fn into(self) -> String {
        self.0
    }
}
