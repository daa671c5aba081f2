//! Catalog construction and validation.
//!
//! The built-in catalog is compiled in. Alternate catalogs are TOML files with
//! one `[[structures]]` table per record, using the same keys as the built-in
//! records (`name`, `type`, ..., `zeroDiv`, ..., `summary`).

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use algebra_model::StructureRecord;
use serde::Deserialize;
use tracing::{debug, info};

use crate::builtin::builtin_structures;
use crate::error::CatalogError;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    structures: Vec<StructureRecord>,
}

/// An ordered, validated list of structure records.
///
/// Names are non-blank and unique; the list is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    structures: Vec<StructureRecord>,
}

impl Catalog {
    /// The compiled-in catalog of eight structures.
    pub fn builtin() -> Self {
        Self {
            structures: builtin_structures(),
        }
    }

    /// Build a catalog from records, checking the naming invariants.
    pub fn from_records(structures: Vec<StructureRecord>) -> Result<Self, CatalogError> {
        if structures.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for (index, record) in structures.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(CatalogError::BlankName { index });
            }
            if !seen.insert(record.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    name: record.name.clone(),
                });
            }
        }
        Ok(Self { structures })
    }

    /// Parse TOML catalog content. `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content).map_err(|source| CatalogError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(count = file.structures.len(), "parsed catalog records");
        Self::from_records(file.structures)
    }

    /// Read and parse a TOML catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&content, path)?;
        info!(path = %path.display(), count = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Records in catalog order.
    pub fn structures(&self) -> &[StructureRecord] {
        &self.structures
    }

    pub fn len(&self) -> usize {
        self.structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    /// Find a record by exact name.
    pub fn find(&self, name: &str) -> Option<&StructureRecord> {
        self.structures.iter().find(|record| record.name == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
