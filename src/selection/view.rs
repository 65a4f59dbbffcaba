//! Derived, read-only views over a selection.
//!
//! Check states and counts are computed on demand from catalog + selection
//! and never stored back into the selection.

use serde::Serialize;

use super::state::Selection;
use crate::catalog::{Catalog, Schema, Table};

/// Visual state of a checkbox in a three-level tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckState {
    Unchecked,
    Partial,
    Checked,
}

/// Selected vs. total names at one level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub selected: usize,
    pub total: usize,
}

/// Counts across all three levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SelectionSummary {
    pub schemas: Tally,
    pub tables: Tally,
    pub columns: Tally,
}

/// Read-only view pairing a catalog with a selection made against it.
#[derive(Debug, Clone, Copy)]
pub struct SelectionView<'a> {
    catalog: &'a Catalog,
    selection: &'a Selection,
}

impl<'a> SelectionView<'a> {
    pub fn new(catalog: &'a Catalog, selection: &'a Selection) -> Self {
        Self { catalog, selection }
    }

    /// Check state of a table, from how many of its columns are selected.
    ///
    /// A table without columns is checked when the table itself is selected.
    pub fn table_state(&self, schema: &str, table: &str) -> Option<CheckState> {
        let found = self.catalog.table(schema, table)?;
        Some(self.state_of_table(schema, found))
    }

    /// Check state of a schema, aggregated from its tables.
    ///
    /// A schema without tables is checked when the schema itself is selected.
    pub fn schema_state(&self, schema: &str) -> Option<CheckState> {
        let found = self.catalog.schema(schema)?;
        Some(self.state_of_schema(found))
    }

    /// Selected vs. total counts. Names unknown to the catalog are not counted.
    pub fn summary(&self) -> SelectionSummary {
        let mut summary = SelectionSummary::default();

        for schema in self.catalog.schemas() {
            summary.schemas.total += 1;
            if self.selection.is_schema_selected(&schema.name) {
                summary.schemas.selected += 1;
            }

            for table in &schema.tables {
                summary.tables.total += 1;
                if self.selection.is_table_selected(&schema.name, &table.name) {
                    summary.tables.selected += 1;
                }
                summary.columns.total += table.columns.len();
                summary.columns.selected += self.selected_column_count(&schema.name, table);
            }
        }

        summary
    }

    fn state_of_schema(&self, schema: &Schema) -> CheckState {
        if schema.tables.is_empty() {
            return if self.selection.is_schema_selected(&schema.name) {
                CheckState::Checked
            } else {
                CheckState::Unchecked
            };
        }

        let states: Vec<CheckState> = schema
            .tables
            .iter()
            .map(|table| self.state_of_table(&schema.name, table))
            .collect();

        if states.iter().all(|s| *s == CheckState::Checked) {
            CheckState::Checked
        } else if states.iter().all(|s| *s == CheckState::Unchecked) {
            CheckState::Unchecked
        } else {
            CheckState::Partial
        }
    }

    fn state_of_table(&self, schema: &str, table: &Table) -> CheckState {
        if table.columns.is_empty() {
            return if self.selection.is_table_selected(schema, &table.name) {
                CheckState::Checked
            } else {
                CheckState::Unchecked
            };
        }

        match self.selected_column_count(schema, table) {
            0 => CheckState::Unchecked,
            n if n == table.columns.len() => CheckState::Checked,
            _ => CheckState::Partial,
        }
    }

    fn selected_column_count(&self, schema: &str, table: &Table) -> usize {
        self.selection
            .columns(schema, &table.name)
            .map(|selected| {
                table
                    .columns
                    .iter()
                    .filter(|c| selected.contains(&c.name))
                    .count()
            })
            .unwrap_or(0)
    }
}
