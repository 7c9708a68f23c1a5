//! Material Catalog
//!
//! Read-only lookup table from alloy id to [`AlloyConstant`]. Entries are
//! validated once when the catalog is built; after that every lookup hands
//! out entries the formula engine can divide by safely.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::alloy::AlloyConstant;
use crate::errors::{CalcError, CalcResult};

/// Validated alloy catalog, preserving declaration order.
///
/// Serializes as a plain JSON array of entries. Deserializing runs the same
/// validation as [`MaterialCatalog::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AlloyConstant>", into = "Vec<AlloyConstant>")]
pub struct MaterialCatalog {
    entries: Vec<AlloyConstant>,
    index: HashMap<String, usize>,
}

impl MaterialCatalog {
    /// Build a catalog from entries in declaration order.
    ///
    /// # Errors
    ///
    /// * `CalcError::InvalidCatalogEntry` - an entry has Ms == 0 (or another
    ///   unusable value), an empty id, or an id that appears twice
    ///
    /// # Example
    ///
    /// ```rust
    /// use gurney_core::materials::{AlloyConstant, MaterialCatalog};
    ///
    /// let catalog = MaterialCatalog::new(vec![
    ///     AlloyConstant::new("45KH", 19.6, 7190.0, 3.4),
    /// ]).unwrap();
    /// assert_eq!(catalog.list_ids(), vec!["45KH"]);
    /// ```
    pub fn new(entries: Vec<AlloyConstant>) -> CalcResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            entry.validate()?;
            if index.insert(entry.id.clone(), i).is_some() {
                return Err(CalcError::invalid_catalog_entry(
                    &entry.id,
                    "Duplicate alloy id",
                ));
            }
        }
        Ok(MaterialCatalog { entries, index })
    }

    /// Catalog of the reference deployment (45KH, 40CrMnSiMoV)
    pub fn reference() -> Self {
        let entries = AlloyConstant::reference_entries();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
        MaterialCatalog { entries, index }
    }

    /// Look up an alloy by id.
    ///
    /// # Errors
    ///
    /// * `CalcError::UnknownAlloy` - id is not a configured key
    pub fn lookup(&self, alloy_id: &str) -> CalcResult<&AlloyConstant> {
        self.index
            .get(alloy_id)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| CalcError::unknown_alloy(alloy_id))
    }

    /// Alloy ids in declaration order, for populating choice widgets
    pub fn list_ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn contains(&self, alloy_id: &str) -> bool {
        self.index.contains_key(alloy_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlloyConstant> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        MaterialCatalog::reference()
    }
}

impl TryFrom<Vec<AlloyConstant>> for MaterialCatalog {
    type Error = CalcError;

    fn try_from(entries: Vec<AlloyConstant>) -> CalcResult<Self> {
        MaterialCatalog::new(entries)
    }
}

impl From<MaterialCatalog> for Vec<AlloyConstant> {
    fn from(catalog: MaterialCatalog) -> Self {
        catalog.entries
    }
}
