//! Selection engine.
//!
//! Every operation borrows the catalog, mutates a caller-owned [`Selection`]
//! and returns whether its reference resolved against the catalog. A name
//! the catalog does not know is ignored and leaves the selection untouched.
//!
//! Cascades only flow downward:
//!
//! ```text
//! schema ──► all tables of the schema ──► all columns of each table
//!                       table ──► all columns of the table
//!                                          column (no cascade)
//! ```
//!
//! Selecting a table never marks its schema, and toggling a column never
//! marks its table.

use std::collections::BTreeSet;

use tracing::debug;

use super::state::{table_key, Selection};
use crate::catalog::{Catalog, Schema, Table};

/// Applies selection operations against one catalog.
#[derive(Debug, Clone, Copy)]
pub struct SelectionEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> SelectionEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// A selection holding every schema, table and column of the catalog.
    pub fn select_all(&self) -> Selection {
        let mut selection = Selection::new();
        for schema in self.catalog.schemas() {
            fill_schema(&mut selection, schema);
        }
        selection
    }

    /// Reset to the empty selection.
    pub fn deselect_all(&self, selection: &mut Selection) {
        selection.clear();
    }

    /// Select a schema with all of its tables and their columns.
    ///
    /// Replaces whatever subset of the schema was selected before.
    pub fn select_all_in_schema(&self, selection: &mut Selection, schema: &str) -> bool {
        let Some(found) = self.resolve_schema(schema) else {
            return false;
        };
        fill_schema(selection, found);
        true
    }

    /// Deselect a schema, dropping its table entry and the column entries of
    /// all of its tables.
    pub fn clear_schema_selection(&self, selection: &mut Selection, schema: &str) -> bool {
        let Some(found) = self.resolve_schema(schema) else {
            return false;
        };

        selection.schemas.remove(schema);
        selection.tables.remove(schema);
        for table in &found.tables {
            selection.columns.remove(&table_key(schema, &table.name));
        }
        true
    }

    /// Flip schema membership: clear when selected, full cascade otherwise.
    pub fn toggle_schema_selection(&self, selection: &mut Selection, schema: &str) -> bool {
        if self.resolve_schema(schema).is_none() {
            return false;
        }

        if selection.is_schema_selected(schema) {
            self.clear_schema_selection(selection, schema)
        } else {
            self.select_all_in_schema(selection, schema)
        }
    }

    /// Select a table with all of its columns. The schema level is untouched.
    pub fn select_all_in_table(&self, selection: &mut Selection, schema: &str, table: &str) -> bool {
        let Some(found) = self.resolve_table(schema, table) else {
            return false;
        };

        selection
            .tables
            .entry(schema.to_string())
            .or_default()
            .insert(table.to_string());
        selection
            .columns
            .insert(table_key(schema, table), column_set(found));
        true
    }

    /// Deselect a table and drop its column entry. Sibling tables keep their
    /// entries; the schema's table entry stays in place, possibly empty.
    pub fn clear_table_selection(&self, selection: &mut Selection, schema: &str, table: &str) -> bool {
        if self.resolve_table(schema, table).is_none() {
            return false;
        }

        selection
            .tables
            .entry(schema.to_string())
            .or_default()
            .remove(table);
        selection.columns.remove(&table_key(schema, table));
        true
    }

    /// Flip table membership using the select/clear table semantics.
    pub fn toggle_table_selection(&self, selection: &mut Selection, schema: &str, table: &str) -> bool {
        if self.resolve_table(schema, table).is_none() {
            return false;
        }

        if selection.is_table_selected(schema, table) {
            self.clear_table_selection(selection, schema, table)
        } else {
            self.select_all_in_table(selection, schema, table)
        }
    }

    /// Flip a single column. Creates the table's column entry if needed but
    /// never adds the table or schema themselves.
    pub fn toggle_column_selection(
        &self,
        selection: &mut Selection,
        schema: &str,
        table: &str,
        column: &str,
    ) -> bool {
        let Some(found) = self.resolve_table(schema, table) else {
            return false;
        };
        if found.column(column).is_none() {
            debug!(schema = %schema, table = %table, column = %column, "ignoring unknown column");
            return false;
        }

        let columns = selection.columns.entry(table_key(schema, table)).or_default();
        if !columns.remove(column) {
            columns.insert(column.to_string());
        }
        true
    }

    /// Drop every name that no longer resolves against the catalog.
    ///
    /// Used when restoring a selection saved against an older catalog.
    /// Returns the number of schema, table, column and entry names removed.
    pub fn retain_known(&self, selection: &mut Selection) -> usize {
        let mut dropped = 0;

        let before = selection.schemas.len();
        selection
            .schemas
            .retain(|schema| self.catalog.schema(schema).is_some());
        dropped += before - selection.schemas.len();

        selection.tables.retain(|schema, tables| {
            let Some(found) = self.catalog.schema(schema) else {
                dropped += 1 + tables.len();
                return false;
            };
            let before = tables.len();
            tables.retain(|table| found.table(table).is_some());
            dropped += before - tables.len();
            true
        });

        selection.columns.retain(|key, columns| {
            let Some(found) = self.table_for_key(key) else {
                dropped += 1 + columns.len();
                return false;
            };
            let before = columns.len();
            columns.retain(|column| found.column(column).is_some());
            dropped += before - columns.len();
            true
        });

        if dropped > 0 {
            debug!(dropped, "pruned selection entries unknown to the catalog");
        }
        dropped
    }

    fn resolve_schema(&self, schema: &str) -> Option<&'a Schema> {
        let found = self.catalog.schema(schema);
        if found.is_none() {
            debug!(schema = %schema, "ignoring unknown schema");
        }
        found
    }

    fn resolve_table(&self, schema: &str, table: &str) -> Option<&'a Table> {
        let found = self.catalog.table(schema, table);
        if found.is_none() {
            debug!(schema = %schema, table = %table, "ignoring unknown table");
        }
        found
    }

    fn table_for_key(&self, key: &str) -> Option<&'a Table> {
        self.catalog.schemas().iter().find_map(|schema| {
            schema
                .tables
                .iter()
                .find(|table| table_key(&schema.name, &table.name) == key)
        })
    }
}

fn fill_schema(selection: &mut Selection, schema: &Schema) {
    selection.schemas.insert(schema.name.clone());
    selection.tables.insert(
        schema.name.clone(),
        schema.table_names().map(str::to_string).collect(),
    );
    for table in &schema.tables {
        selection
            .columns
            .insert(table_key(&schema.name, &table.name), column_set(table));
    }
}

fn column_set(table: &Table) -> BTreeSet<String> {
    table.column_names().map(str::to_string).collect()
}
