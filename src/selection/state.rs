//! Selection state: three independent membership levels.
//!
//! Schemas, tables and columns are tracked as separate sets. Cascades between
//! the levels are applied by the engine, never inferred here.

use std::collections::{BTreeMap, BTreeSet};

pub use crate::catalog::table_key;

/// Which schemas, tables and columns are currently selected.
///
/// Owned by the configuration session and mutated only through
/// [`SelectionEngine`](super::SelectionEngine).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub(crate) schemas: BTreeSet<String>,
    pub(crate) tables: BTreeMap<String, BTreeSet<String>>,
    pub(crate) columns: BTreeMap<String, BTreeSet<String>>,
}

impl Selection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no schema, table or column name is selected.
    ///
    /// Empty table or column entries left behind by a clear do not count.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
            && self.tables.values().all(BTreeSet::is_empty)
            && self.columns.values().all(BTreeSet::is_empty)
    }

    pub fn is_schema_selected(&self, schema: &str) -> bool {
        self.schemas.contains(schema)
    }

    pub fn is_table_selected(&self, schema: &str, table: &str) -> bool {
        self.tables
            .get(schema)
            .is_some_and(|tables| tables.contains(table))
    }

    pub fn is_column_selected(&self, schema: &str, table: &str, column: &str) -> bool {
        self.columns
            .get(&table_key(schema, table))
            .is_some_and(|columns| columns.contains(column))
    }

    /// Selected schema names.
    pub fn schemas(&self) -> impl Iterator<Item = &str> {
        self.schemas.iter().map(String::as_str)
    }

    /// The table entry for a schema, if one exists.
    pub fn tables(&self, schema: &str) -> Option<&BTreeSet<String>> {
        self.tables.get(schema)
    }

    /// The column entry for a table, if one exists.
    pub fn columns(&self, schema: &str, table: &str) -> Option<&BTreeSet<String>> {
        self.columns.get(&table_key(schema, table))
    }

    /// All table entries keyed by schema name.
    pub fn table_entries(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.tables
    }

    /// All column entries keyed by `"<schema>.<table>"`.
    pub fn column_entries(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.columns
    }

    pub(crate) fn clear(&mut self) {
        self.schemas.clear();
        self.tables.clear();
        self.columns.clear();
    }
}
