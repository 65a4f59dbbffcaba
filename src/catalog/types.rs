//! Catalog types: schemas, tables and columns of a relational source.
//!
//! The JSON form mirrors what the introspection collaborator hands over:
//! column fields are `name`, `type` and `recordCount`.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::{CatalogError, CatalogResult};

/// A column of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Database-specific type name.
    #[serde(rename = "type")]
    pub data_type: String,
    /// Row-count hint, informational only.
    ///
    /// Introspection may report estimates: fractions are truncated and
    /// negative values read as 0.
    #[serde(rename = "recordCount", default, deserialize_with = "record_count_hint")]
    pub record_count: u64,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>, record_count: u64) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            record_count,
        }
    }
}

fn record_count_hint<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Hint {
        Exact(u64),
        Estimate(f64),
    }

    Ok(match Hint::deserialize(deserializer)? {
        Hint::Exact(count) => count,
        Hint::Estimate(count) if count.is_finite() && count > 0.0 => count as u64,
        Hint::Estimate(_) => 0,
    })
}

/// A table within a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table name, unique within its schema.
    pub name: String,
    /// Columns in source order.
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in source order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Record count shown for the table.
    ///
    /// Taken from the first column's hint; a table without columns reports 0.
    pub fn record_count(&self) -> u64 {
        self.columns.first().map(|c| c.record_count).unwrap_or(0)
    }
}

/// A schema (namespace) of the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Schema name, unique within the catalog.
    pub name: String,
    /// Tables in source order.
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn new(name: impl Into<String>, tables: Vec<Table>) -> Self {
        Self {
            name: name.into(),
            tables,
        }
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Table names in source order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.name.as_str())
    }

    /// Sum of the record counts of every table in the schema.
    pub fn record_count(&self) -> u64 {
        self.tables.iter().map(Table::record_count).sum()
    }
}

/// Composite key for a table: `"<schema>.<table>"`.
///
/// Selection records key column entries this way, so a catalog must map each
/// key to exactly one table.
pub fn table_key(schema: &str, table: &str) -> String {
    format!("{}.{}", schema, table)
}

/// Accepted JSON layouts for a catalog document.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Bare(Vec<Schema>),
    Wrapped { schemas: Vec<Schema> },
}

/// Immutable description of a relational source.
///
/// Names are validated unique at each level and composite table keys unique
/// across schemas on construction, so lookups by name or key are unambiguous
/// for the lifetime of a selection session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    schemas: Vec<Schema>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names at any level and tables
    /// whose composite keys collide across schemas (`a` / `b.c` vs `a.b` / `c`).
    pub fn new(schemas: Vec<Schema>) -> CatalogResult<Self> {
        let mut schema_names = HashSet::new();
        let mut table_keys: HashSet<String> = HashSet::new();
        for schema in &schemas {
            if !schema_names.insert(schema.name.as_str()) {
                return Err(CatalogError::DuplicateSchema(schema.name.clone()));
            }

            let mut table_names = HashSet::new();
            for table in &schema.tables {
                if !table_names.insert(table.name.as_str()) {
                    return Err(CatalogError::DuplicateTable {
                        schema: schema.name.clone(),
                        table: table.name.clone(),
                    });
                }

                let key = table_key(&schema.name, &table.name);
                if table_keys.contains(&key) {
                    return Err(CatalogError::AmbiguousTableKey { key });
                }
                table_keys.insert(key);

                let mut column_names = HashSet::new();
                for column in &table.columns {
                    if !column_names.insert(column.name.as_str()) {
                        return Err(CatalogError::DuplicateColumn {
                            schema: schema.name.clone(),
                            table: table.name.clone(),
                            column: column.name.clone(),
                        });
                    }
                }
            }
        }

        Ok(Self { schemas })
    }

    /// Parse a catalog from JSON.
    ///
    /// Accepts either `{"schemas": [...]}` or a bare array of schemas.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let schemas = match serde_json::from_str::<CatalogDocument>(json)? {
            CatalogDocument::Bare(schemas) => schemas,
            CatalogDocument::Wrapped { schemas } => schemas,
        };
        Self::new(schemas)
    }

    /// All schemas in source order.
    pub fn schemas(&self) -> &[Schema] {
        &self.schemas
    }

    /// Look up a schema by name.
    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.iter().find(|s| s.name == name)
    }

    /// Look up a table by schema and table name.
    pub fn table(&self, schema: &str, table: &str) -> Option<&Table> {
        self.schema(schema)?.table(table)
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn table_count(&self) -> usize {
        self.schemas.iter().map(|s| s.tables.len()).sum()
    }

    pub fn column_count(&self) -> usize {
        self.schemas
            .iter()
            .flat_map(|s| &s.tables)
            .map(|t| t.columns.len())
            .sum()
    }
}
