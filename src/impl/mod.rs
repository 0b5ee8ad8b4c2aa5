// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod aggregation_config_ron_datasource;
        pub(crate) mod ledger_rows_csv_datasource;
        pub(crate) mod rows_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod accounting_amount_model;
        pub(crate) mod bill_date_model;
        pub(crate) mod flag_model;
        pub(crate) mod ledger_row_model;
        pub(crate) mod report_row_models;
        pub(crate) mod text_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod rows_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod breakdown;
        pub(crate) mod category;
        pub(crate) mod ledger_row;
        pub(crate) mod partition;
        pub(crate) mod reconciliation;
        pub(crate) mod report_rows;
    }
    pub(crate) mod logic {
        pub(crate) mod book_partitioner;
        pub(crate) mod category_aggregator;
        pub(crate) mod ledger_reconciler;
        pub(crate) mod opening_balance_aggregator;
        pub(crate) mod running_balance_scanner;
    }
    pub(crate) mod repositories {
        pub(crate) mod rows_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod breakdown_usecase;
        pub(crate) mod reconcile_usecase;
    }
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::breakdown::*;
        pub use crate::domain::entities::category::*;
        pub use crate::domain::entities::ledger_row::*;
        pub use crate::domain::entities::partition::*;
        pub use crate::domain::entities::reconciliation::*;
        pub use crate::domain::entities::report_rows::*;
    }
}
