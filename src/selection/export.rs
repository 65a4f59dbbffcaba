//! Export shape consumed by sync tasks, migrations and LGPD templates.
//!
//! ```json
//! {
//!   "schemas": ["public"],
//!   "tables": { "public": ["orders", "users"] },
//!   "columns": { "public.orders": ["id", "total"], "public.users": ["email", "id"] }
//! }
//! ```
//!
//! Names within every list are sorted, so exports of equal selections are
//! byte-identical.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::Selection;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors raised at the export boundary.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to serialize selection: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to parse selection: {0}")]
    Parse(#[source] serde_json::Error),

    /// Nothing is selected; consumers refuse to save such a configuration.
    #[error("at least one schema, table or column must be selected")]
    EmptySelection,
}

/// Serialized form of a [`Selection`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionExport {
    #[serde(default)]
    pub schemas: Vec<String>,
    #[serde(default)]
    pub tables: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub columns: BTreeMap<String, Vec<String>>,
}

impl SelectionExport {
    /// True when no name is present in any of the three collections.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
            && self.tables.values().all(Vec::is_empty)
            && self.columns.values().all(Vec::is_empty)
    }

    /// Precondition applied before a consuming form is submitted.
    pub fn ensure_non_empty(&self) -> ExportResult<()> {
        if self.is_empty() {
            return Err(ExportError::EmptySelection);
        }
        Ok(())
    }

    pub fn to_json(&self) -> ExportResult<String> {
        serde_json::to_string(self).map_err(ExportError::Serialize)
    }

    pub fn to_json_pretty(&self) -> ExportResult<String> {
        serde_json::to_string_pretty(self).map_err(ExportError::Serialize)
    }

    pub fn from_json(json: &str) -> ExportResult<Self> {
        serde_json::from_str(json).map_err(ExportError::Parse)
    }
}

impl From<&Selection> for SelectionExport {
    fn from(selection: &Selection) -> Self {
        Self {
            schemas: selection.schemas.iter().cloned().collect(),
            tables: selection
                .tables
                .iter()
                .map(|(schema, tables)| (schema.clone(), tables.iter().cloned().collect()))
                .collect(),
            columns: selection
                .columns
                .iter()
                .map(|(key, columns)| (key.clone(), columns.iter().cloned().collect()))
                .collect(),
        }
    }
}

impl From<SelectionExport> for Selection {
    /// Restore a persisted selection verbatim.
    ///
    /// Names are not checked against any catalog; follow with
    /// [`SelectionEngine::retain_known`](super::SelectionEngine::retain_known)
    /// when the record may predate the current catalog.
    fn from(export: SelectionExport) -> Self {
        Self {
            schemas: export.schemas.into_iter().collect(),
            tables: export
                .tables
                .into_iter()
                .map(|(schema, tables)| (schema, tables.into_iter().collect()))
                .collect(),
            columns: export
                .columns
                .into_iter()
                .map(|(key, columns)| (key, columns.into_iter().collect()))
                .collect(),
        }
    }
}

impl Selection {
    /// Export the selection in the persisted record shape.
    pub fn export(&self) -> SelectionExport {
        SelectionExport::from(self)
    }

    /// Restore a selection from its persisted record shape.
    pub fn from_export(export: SelectionExport) -> Self {
        Self::from(export)
    }
}
