//! # Result Store
//!
//! Session-scoped container for computed results.
//!
//! ## Structure
//!
//! ```text
//! ResultStore
//! ├── records: Vec<ResultRecord> (insertion order, newest last)
//! ├── selected: BTreeSet<RecordId> (always a subset of record ids)
//! └── next_id: u64 (monotonic, never reused)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use gurney_core::{Calculator, ResultStore};
//!
//! let calculator = Calculator::reference();
//! let mut store = ResultStore::new();
//!
//! let input = calculator.parse_input("45KH", "50000", "1000").unwrap();
//! let id = store.append(calculator.compute(&input).unwrap());
//!
//! store.toggle_select(id).unwrap();
//! assert_eq!(store.selected().len(), 1);
//!
//! assert!(store.delete(id));
//! assert!(store.selected().is_empty());
//! ```

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::CalculationOutput;
use crate::errors::{CalcError, CalcResult};

/// Identifier of a stored result, unique within its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A computed result as kept by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Store-assigned id
    pub id: RecordId,

    /// When the result was added to the store
    pub created_at: DateTime<Utc>,

    /// Catalog key of the casing alloy
    pub alloy_id: String,

    /// Ms (kg)
    pub ms_kg: f64,

    /// C (kg)
    pub c_kg: f64,

    /// Gurney fragment velocity (m/s)
    pub velocity_m_s: f64,

    /// Fragment size ratio d/t
    pub fragment_ratio: f64,

    /// Efficiency C/Ms
    pub efficiency: f64,

    /// Inner diameter d (nm)
    pub inner_diameter_nm: f64,

    /// Wall thickness t (nm)
    pub wall_thickness_nm: f64,
}

impl ResultRecord {
    fn from_output(id: RecordId, output: CalculationOutput) -> Self {
        ResultRecord {
            id,
            created_at: Utc::now(),
            alloy_id: output.alloy_id,
            ms_kg: output.ms_kg,
            c_kg: output.c_kg,
            velocity_m_s: output.velocity_m_s,
            fragment_ratio: output.fragment_ratio,
            efficiency: output.efficiency,
            inner_diameter_nm: output.inner_diameter_nm,
            wall_thickness_nm: output.wall_thickness_nm,
        }
    }
}

/// Ordered result collection with multi-select.
///
/// Owned by a single session; all mutations take `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    records: Vec<ResultRecord>,
    selected: BTreeSet<RecordId>,
    next_id: u64,
}

impl ResultStore {
    /// Create an empty store.
    pub fn new() -> Self {
        ResultStore::default()
    }

    /// Add a result to the end of the store.
    ///
    /// Returns the id assigned to the record. Ids come from a counter owned
    /// by the store, so rapid successive calls never collide.
    pub fn append(&mut self, output: CalculationOutput) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        self.records.push(ResultRecord::from_output(id, output));
        tracing::debug!(%id, count = self.records.len(), "Result appended");
        id
    }

    /// Remove a result and its selection entry.
    ///
    /// Returns whether a record was removed. Deleting an absent id is a
    /// no-op, not an error.
    pub fn delete(&mut self, id: RecordId) -> bool {
        let Some(pos) = self.records.iter().position(|r| r.id == id) else {
            return false;
        };
        self.records.remove(pos);
        self.selected.remove(&id);
        tracing::debug!(%id, count = self.records.len(), "Result deleted");
        true
    }

    /// Flip the selection state of a stored result.
    ///
    /// # Errors
    ///
    /// * `CalcError::UnknownRecord` - id is not in the store (the caller's
    ///   view is out of sync)
    pub fn toggle_select(&mut self, id: RecordId) -> CalcResult<()> {
        if !self.contains(id) {
            tracing::warn!(%id, "Selection toggle for unknown record");
            return Err(CalcError::UnknownRecord { id: id.0 });
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        Ok(())
    }

    /// Selected results, in store (insertion) order rather than selection order.
    pub fn selected(&self) -> Vec<&ResultRecord> {
        self.records
            .iter()
            .filter(|r| self.selected.contains(&r.id))
            .collect()
    }

    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Deselect everything; records are untouched.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// All results in insertion order
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&ResultRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Owned copy of the store contents for renderers.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            records: self.records.clone(),
            selected: self.selected.iter().copied().collect(),
        }
    }
}

/// Point-in-time copy of a [`ResultStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// All records in insertion order
    pub records: Vec<ResultRecord>,

    /// Selected ids, ascending
    pub selected: Vec<RecordId>,
}

impl StoreSnapshot {
    /// Selected records in insertion order
    pub fn selected_records(&self) -> Vec<&ResultRecord> {
        self.records
            .iter()
            .filter(|r| self.selected.contains(&r.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(alloy: &str, efficiency: f64) -> CalculationOutput {
        CalculationOutput {
            alloy_id: alloy.to_string(),
            ms_kg: 19.6,
            c_kg: 3.4,
            velocity_m_s: 1130.67,
            fragment_ratio: 50.0,
            efficiency,
            inner_diameter_nm: 50_000.0,
            wall_thickness_nm: 1_000.0,
        }
    }

    #[test]
    fn test_append_assigns_distinct_ids_in_order() {
        let mut store = ResultStore::new();
        let ids: Vec<RecordId> = (0..5)
            .map(|i| store.append(output(&format!("A{}", i), 0.1)))
            .collect();

        assert_eq!(store.len(), 5);
        let unique: BTreeSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 5);

        let stored: Vec<&str> = store.records().iter().map(|r| r.alloy_id.as_str()).collect();
        assert_eq!(stored, vec!["A0", "A1", "A2", "A3", "A4"]);
        assert_eq!(store.records().iter().map(|r| r.id).collect::<Vec<_>>(), ids);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = ResultStore::new();
        let a = store.append(output("A", 0.1));
        let b = store.append(output("B", 0.1));
        assert!(store.delete(b));
        let c = store.append(output("C", 0.1));
        assert_ne!(c, b);
        assert_ne!(c, a);
    }

    #[test]
    fn test_delete_twice() {
        let mut store = ResultStore::new();
        let id = store.append(output("A", 0.1));
        store.append(output("B", 0.1));

        assert!(store.delete(id));
        assert_eq!(store.len(), 1);
        assert!(!store.delete(id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut store = ResultStore::new();
        store.append(output("A", 0.1));
        assert!(!store.delete(RecordId(42)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut store = ResultStore::new();
        let id = store.append(output("A", 0.1));

        assert!(!store.is_selected(id));
        store.toggle_select(id).unwrap();
        assert!(store.is_selected(id));
        store.toggle_select(id).unwrap();
        assert!(!store.is_selected(id));
    }

    #[test]
    fn test_toggle_unknown_record() {
        let mut store = ResultStore::new();
        assert_eq!(
            store.toggle_select(RecordId(7)).unwrap_err(),
            CalcError::UnknownRecord { id: 7 }
        );
        assert_eq!(store.selected_count(), 0);
    }

    #[test]
    fn test_delete_prunes_selection() {
        let mut store = ResultStore::new();
        let a = store.append(output("A", 0.1));
        let b = store.append(output("B", 0.2));
        store.toggle_select(a).unwrap();
        store.toggle_select(b).unwrap();

        assert!(store.delete(a));
        let selected: Vec<RecordId> = store.selected().iter().map(|r| r.id).collect();
        assert_eq!(selected, vec![b]);
        assert_eq!(store.selected_count(), 1);
        assert!(!store.is_selected(a));
    }

    #[test]
    fn test_selected_in_insertion_order() {
        let mut store = ResultStore::new();
        let a = store.append(output("A", 0.1));
        let b = store.append(output("B", 0.2));
        let c = store.append(output("C", 0.3));

        // Select out of order
        store.toggle_select(c).unwrap();
        store.toggle_select(a).unwrap();

        let selected: Vec<RecordId> = store.selected().iter().map(|r| r.id).collect();
        assert_eq!(selected, vec![a, c]);
        assert!(!store.is_selected(b));
    }

    #[test]
    fn test_clear_selection() {
        let mut store = ResultStore::new();
        let a = store.append(output("A", 0.1));
        store.toggle_select(a).unwrap();
        store.clear_selection();
        assert!(store.selected().is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_snapshot() {
        let mut store = ResultStore::new();
        let a = store.append(output("A", 0.1));
        let b = store.append(output("B", 0.2));
        store.toggle_select(b).unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.records.len(), 2);
        assert_eq!(snapshot.selected, vec![b]);
        let selected: Vec<RecordId> = snapshot.selected_records().iter().map(|r| r.id).collect();
        assert_eq!(selected, vec![b]);

        // Snapshot is detached from later mutations
        store.delete(a);
        assert_eq!(snapshot.records.len(), 2);

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"selected\":[1]"));
    }

    #[test]
    fn test_record_keeps_full_precision() {
        let mut store = ResultStore::new();
        let id = store.append(output("A", 0.173469387755102));
        assert_eq!(store.get(id).unwrap().efficiency, 0.173469387755102);
    }
}
