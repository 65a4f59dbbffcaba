//! Catalog sources.
//!
//! A `CatalogSource` hands the selection engine the structure of a data
//! source. Live introspection lives outside this crate; the sources here
//! cover JSON exports and catalogs built in memory.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::{CatalogError, CatalogResult};
use super::types::Catalog;

/// Trait for anything that can produce a catalog.
pub trait CatalogSource {
    /// Load the catalog.
    fn load(&self) -> CatalogResult<Catalog>;
}

/// Catalog stored as a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    fn load(&self) -> CatalogResult<Catalog> {
        let content = fs::read_to_string(&self.path).map_err(|source| CatalogError::ReadFailed {
            path: self.path.clone(),
            source,
        })?;

        let catalog = Catalog::from_json_str(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            schemas = catalog.schemas().len(),
            tables = catalog.table_count(),
            columns = catalog.column_count(),
            "loaded catalog"
        );
        Ok(catalog)
    }
}

/// Catalog that already lives in memory (fixtures, tests, embedding hosts).
#[derive(Debug, Clone, Default)]
pub struct StaticSource(pub Catalog);

impl CatalogSource for StaticSource {
    fn load(&self) -> CatalogResult<Catalog> {
        Ok(self.0.clone())
    }
}
