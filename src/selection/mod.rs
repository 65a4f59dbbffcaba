//! Hierarchical selection module.
//!
//! Tracks which schemas, tables and columns of a [`Catalog`](crate::catalog::Catalog)
//! are in scope for a downstream job.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   borrows   ┌──────────────────┐   mutates   ┌─────────────┐
//! │   Catalog    │ ◄────────── │  SelectionEngine │ ──────────► │  Selection  │
//! └──────────────┘             └──────────────────┘             └─────────────┘
//!                                       ▲                              │
//!                                       │ Operation::apply             │ export()
//!                              ┌──────────────────┐             ┌─────────────────┐
//!                              │  ops (scripts)   │             │ SelectionExport │
//!                              └──────────────────┘             └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use datascope::catalog::{Catalog, Column, Schema, Table};
//! use datascope::selection::{Selection, SelectionEngine};
//!
//! let catalog = Catalog::new(vec![Schema::new(
//!     "public",
//!     vec![Table::new("users", vec![Column::new("id", "uuid", 10)])],
//! )])
//! .unwrap();
//!
//! let engine = SelectionEngine::new(&catalog);
//! let mut selection = Selection::new();
//! engine.select_all_in_table(&mut selection, "public", "users");
//!
//! assert!(selection.is_table_selected("public", "users"));
//! assert!(!selection.is_schema_selected("public"));
//! ```

mod engine;
mod export;
pub mod ops;
mod state;
mod view;

pub use engine::SelectionEngine;
pub use export::{ExportError, ExportResult, SelectionExport};
pub use ops::{Operation, ReplayReport};
pub use state::{table_key, Selection};
pub use view::{CheckState, SelectionSummary, SelectionView, Tally};
