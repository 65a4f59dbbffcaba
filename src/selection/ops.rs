//! Recorded selection operations.
//!
//! Each UI event maps to one [`Operation`]. A session can be stored as a JSON
//! array and replayed against a catalog:
//!
//! ```json
//! [
//!   { "op": "select_all_in_schema", "schema": "public" },
//!   { "op": "clear_table_selection", "schema": "public", "table": "orders" },
//!   { "op": "toggle_column_selection", "schema": "analytics", "table": "events", "column": "type" }
//! ]
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use super::engine::SelectionEngine;
use super::state::Selection;

/// Result type for script operations.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Errors that can occur while loading an operation script.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("failed to read script '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse script: {0}")]
    ParseFailed(#[from] serde_json::Error),
}

/// One selection operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    SelectAll,
    DeselectAll,
    SelectAllInSchema {
        schema: String,
    },
    ClearSchemaSelection {
        schema: String,
    },
    ToggleSchemaSelection {
        schema: String,
    },
    SelectAllInTable {
        schema: String,
        table: String,
    },
    ClearTableSelection {
        schema: String,
        table: String,
    },
    ToggleTableSelection {
        schema: String,
        table: String,
    },
    ToggleColumnSelection {
        schema: String,
        table: String,
        column: String,
    },
}

impl Operation {
    /// Apply the operation. Returns false when it referenced a name the
    /// engine's catalog does not know.
    pub fn apply(&self, engine: &SelectionEngine<'_>, selection: &mut Selection) -> bool {
        match self {
            Operation::SelectAll => {
                *selection = engine.select_all();
                true
            }
            Operation::DeselectAll => {
                engine.deselect_all(selection);
                true
            }
            Operation::SelectAllInSchema { schema } => {
                engine.select_all_in_schema(selection, schema)
            }
            Operation::ClearSchemaSelection { schema } => {
                engine.clear_schema_selection(selection, schema)
            }
            Operation::ToggleSchemaSelection { schema } => {
                engine.toggle_schema_selection(selection, schema)
            }
            Operation::SelectAllInTable { schema, table } => {
                engine.select_all_in_table(selection, schema, table)
            }
            Operation::ClearTableSelection { schema, table } => {
                engine.clear_table_selection(selection, schema, table)
            }
            Operation::ToggleTableSelection { schema, table } => {
                engine.toggle_table_selection(selection, schema, table)
            }
            Operation::ToggleColumnSelection {
                schema,
                table,
                column,
            } => engine.toggle_column_selection(selection, schema, table, column),
        }
    }
}

/// Outcome of replaying a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Operations whose references resolved.
    pub applied: usize,
    /// Operations ignored because they referenced unknown names.
    pub ignored: usize,
}

/// Apply operations in order.
pub fn replay(
    engine: &SelectionEngine<'_>,
    selection: &mut Selection,
    operations: &[Operation],
) -> ReplayReport {
    let mut report = ReplayReport::default();
    for (index, operation) in operations.iter().enumerate() {
        if operation.apply(engine, selection) {
            trace!(index, ?operation, "applied operation");
            report.applied += 1;
        } else {
            debug!(index, ?operation, "operation referenced unknown names");
            report.ignored += 1;
        }
    }
    report
}

/// Parse a JSON array of operations.
pub fn parse_script(json: &str) -> ScriptResult<Vec<Operation>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a script file.
pub fn load_script(path: &Path) -> ScriptResult<Vec<Operation>> {
    let content = fs::read_to_string(path).map_err(|source| ScriptError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&content)
}
