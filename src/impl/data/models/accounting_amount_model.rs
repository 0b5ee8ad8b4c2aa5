use std::str::FromStr as _;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Largest magnitude accepted for a single ledger cell (one quadrillion).
/// Anything beyond is treated as a corrupt value, keeping every running sum
/// far inside the `Decimal` range.
const MAX_ABS_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Monetary field as sent by the back-office API. Never fails: anything that
/// cannot be read as a decimal amount, or is out of range, is coerced to zero,
/// so a single bad cell cannot poison a running balance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AccountingAmountModel(pub Decimal);

impl AccountingAmountModel {
    pub(crate) fn from_raw(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|| {
            warn!(raw, "malformed amount coerced to zero");
            Self(Decimal::ZERO)
        })
    }

    /// Accepts thousands separators and accounting-style negatives, e.g.
    /// `(1,234.50)`. Empty cells read as zero.
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.replace(',', "");
        let raw = raw.trim();
        if raw.is_empty() {
            return Some(Self(Decimal::ZERO));
        }
        let is_negative = raw.starts_with('(') && raw.ends_with(')');
        let numeric_part = raw.trim_matches(|c| c == '(' || c == ')').trim();
        let amount = Decimal::from_str(numeric_part)
            .or_else(|_| Decimal::from_scientific(numeric_part))
            .ok()
            .filter(|a| a.abs() <= MAX_ABS_AMOUNT)?;
        Some(Self(if is_negative { -amount } else { amount }))
    }
}

impl<'de> Deserialize<'de> for AccountingAmountModel {
    fn deserialize<D>(deserializer: D) -> Result<AccountingAmountModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => Self(Decimal::ZERO),
            Value::Number(n) => Self::from_raw(&n.to_string()),
            Value::String(s) => Self::from_raw(&s),
            other => {
                warn!(raw = %other, "non-numeric amount coerced to zero");
                Self(Decimal::ZERO)
            }
        })
    }
}

impl Into<Decimal> for AccountingAmountModel {
    fn into(self) -> Decimal {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn amount(json: &str) -> Decimal {
        serde_json::from_str::<AccountingAmountModel>(json)
            .map(Into::into)
            .unwrap()
    }

    #[test]
    fn reads_numbers_and_numeric_strings() {
        assert_eq!(amount("1250.75"), dec!(1250.75));
        assert_eq!(amount("\"1,250.75\""), dec!(1250.75));
        assert_eq!(amount("\"(40.10)\""), dec!(-40.10));
        assert_eq!(amount("-3"), dec!(-3));
        assert_eq!(amount("1e3"), dec!(1000));
    }

    #[test]
    fn malformed_values_become_zero() {
        assert_eq!(amount("\"NaN\""), Decimal::ZERO);
        assert_eq!(amount("\"abc\""), Decimal::ZERO);
        assert_eq!(amount("\"\""), Decimal::ZERO);
        assert_eq!(amount("null"), Decimal::ZERO);
        assert_eq!(amount("true"), Decimal::ZERO);
        assert_eq!(amount("[1]"), Decimal::ZERO);
    }

    #[test]
    fn out_of_range_values_become_zero() {
        assert_eq!(MAX_ABS_AMOUNT, Decimal::from(1_000_000_000_000_000i64));
        assert_eq!(amount("\"1,000,000,000,000,000\""), MAX_ABS_AMOUNT);
        assert_eq!(amount("\"(1000000000000000)\""), -MAX_ABS_AMOUNT);
        assert_eq!(amount("\"1000000000000000.01\""), Decimal::ZERO);
        assert_eq!(amount("\"50000000000000000000000000000\""), Decimal::ZERO);
        assert_eq!(amount("5e28"), Decimal::ZERO);
        assert_eq!(amount("\"-79228162514264337593543950335\""), Decimal::ZERO);
    }
}
