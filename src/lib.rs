//! # datascope
//!
//! Hierarchical selection of schemas, tables and columns of a relational
//! data source, for scoping downstream jobs (LGPD scans, sync tasks,
//! migrations).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                Catalog (read-only input)                 │
//! │          schemas → tables → columns (+ hints)            │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [SelectionEngine]
//! ┌─────────────────────────────────────────────────────────┐
//! │                     Selection                            │
//! │   schemas: {S}   tables: {S → {T}}   columns: {S.T → {C}}│
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [export]
//! ┌─────────────────────────────────────────────────────────┐
//! │        SelectionExport (persisted record shape)          │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Cascades flow strictly downward: selecting a schema selects all of its
//! tables and columns, selecting a table selects all of its columns, and
//! nothing ever propagates upward.

pub mod catalog;
pub mod config;
pub mod selection;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::catalog::{Catalog, CatalogSource, Column, JsonFileSource, Schema, Table};
    pub use crate::selection::{
        CheckState, Operation, Selection, SelectionEngine, SelectionExport, SelectionView,
    };
}

pub use catalog::Catalog;
pub use selection::{Selection, SelectionEngine, SelectionExport};
