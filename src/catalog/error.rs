//! Catalog loading errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while loading or validating a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read the catalog file.
    #[error("failed to read catalog '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The catalog document is not valid JSON or has the wrong shape.
    #[error("failed to parse catalog: {0}")]
    ParseFailed(#[from] serde_json::Error),

    /// Two schemas share a name.
    #[error("duplicate schema '{0}'")]
    DuplicateSchema(String),

    /// Two tables in one schema share a name.
    #[error("duplicate table '{table}' in schema '{schema}'")]
    DuplicateTable { schema: String, table: String },

    /// Two columns in one table share a name.
    #[error("duplicate column '{column}' in table '{schema}.{table}'")]
    DuplicateColumn {
        schema: String,
        table: String,
        column: String,
    },

    /// Two tables in different schemas join to the same `schema.table` key.
    #[error("tables in different schemas share the key '{key}'")]
    AmbiguousTableKey { key: String },
}
