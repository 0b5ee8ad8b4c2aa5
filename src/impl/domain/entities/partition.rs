use serde_derive::{Deserialize, Serialize};

use super::ledger_row::LedgerRow;

pub const MTF_BOOK_CODE: &str = "MTF";
pub const ICL_BOOK_CODE: &str = "ICL";
pub const MTF_FUNDED_ACCOUNT_SUFFIX: &str = "_F";

/// Logical sub-ledger a ledger row is reconciled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Partition {
    Group1,
    Mtf,
    Mtff,
}

/// What a row contributes to once it has been assigned a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRole {
    /// Summed into the partition's opening total.
    Opening,
    /// Threaded through the running balance.
    Running,
    /// Member of the partition but part of neither total.
    Excluded,
}

// --

impl Partition {
    pub const ALL: [Partition; 3] = [Partition::Group1, Partition::Mtf, Partition::Mtff];

    /// Partition membership of a row. ICL-booked rows belong to none.
    pub fn of(row: &LedgerRow) -> Option<Partition> {
        match row.book_code.as_str() {
            MTF_BOOK_CODE if row.account_code.ends_with(MTF_FUNDED_ACCOUNT_SUFFIX) => {
                Some(Partition::Mtff)
            }
            MTF_BOOK_CODE => Some(Partition::Mtf),
            ICL_BOOK_CODE => None,
            _ => Some(Partition::Group1),
        }
    }

    /// Role of a row within this partition, or `None` if the row does not
    /// belong here at all.
    ///
    /// Associate opening balances are only dropped for GROUP1; MTF books carry
    /// them as ordinary running rows.
    pub fn role_of(&self, row: &LedgerRow) -> Option<RowRole> {
        if Partition::of(row) != Some(*self) {
            return None;
        }
        Some(if row.is_opening_balance() {
            RowRole::Opening
        } else if *self == Partition::Group1 && row.is_associate_opening_balance() {
            RowRole::Excluded
        } else {
            RowRole::Running
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Partition::Group1 => "GROUP1",
            Partition::Mtf => "MTF",
            Partition::Mtff => "MTFF",
        }
    }
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
