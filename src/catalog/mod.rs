//! Schema catalog module.
//!
//! A catalog is the read-only description of a relational source that a
//! selection session scopes over:
//!
//! ```text
//! Catalog
//!   └── Schema      (name unique in catalog)
//!         └── Table   (name unique in schema)
//!               └── Column (name, type, recordCount)
//! ```
//!
//! # Example
//!
//! ```
//! use datascope::catalog::{Catalog, CatalogSource, StaticSource};
//!
//! let catalog = Catalog::from_json_str(
//!     r#"[{"name": "public", "tables": [{"name": "users", "columns": [
//!         {"name": "id", "type": "uuid", "recordCount": 10}
//!     ]}]}]"#,
//! )
//! .unwrap();
//!
//! let loaded = StaticSource(catalog).load().unwrap();
//! assert_eq!(loaded.table_count(), 1);
//! ```

mod error;
mod source;
mod types;

pub use error::{CatalogError, CatalogResult};
pub use source::{CatalogSource, JsonFileSource, StaticSource};
pub use types::{table_key, Catalog, Column, Schema, Table};
