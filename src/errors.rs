use fractic_server_error::define_client_error;

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidJson, "Invalid JSON: expected an array of rows.");
define_client_error!(
    InvalidJsonRow,
    "Invalid JSON row at index {index}: expected an object.",
    { index: usize }
);
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(
    MissingCsvColumn,
    "Invalid CSV header: missing required column '{column}'.",
    { column: &str }
);
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
