// Crate-internal.
// ---

pub(crate) mod standard_breakdowns {
    pub(crate) mod annual_report;
    pub(crate) mod settlement_expenses;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod standard_breakdowns {
        pub use crate::impl_ext::standard_breakdowns::annual_report::*;
        pub use crate::impl_ext::standard_breakdowns::settlement_expenses::*;
    }
}
