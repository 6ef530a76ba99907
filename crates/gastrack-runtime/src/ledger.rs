use chrono::NaiveDate;
use gastrack_store::EntryStore;
use gastrack_types::{ComputedEntry, DashboardStats, EntryId, FuelEntry};

use crate::draft::EntryDraft;
use crate::{Error, Result};

/// Entry store plus metrics engine.
///
/// Every mutation loads a snapshot, builds the new entry set, persists it
/// whole through `save_all`, and leaves recomputation to the next read.
pub struct Ledger<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> Ledger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn entries(&self) -> Result<Vec<FuelEntry>> {
        Ok(self.store.load_all()?)
    }

    /// Computed timeline, newest fill first
    pub fn timeline(&self) -> Result<Vec<ComputedEntry>> {
        Ok(gastrack_engine::compute_entries(&self.entries()?))
    }

    /// Dashboard statistics with `today` deciding the current month
    pub fn stats(&self, today: NaiveDate) -> Result<DashboardStats> {
        Ok(gastrack_engine::calculate_stats(&self.entries()?, today))
    }

    /// Highest recorded odometer reading, or 0 for an empty ledger
    pub fn last_odometer(&self) -> Result<f64> {
        Ok(max_odometer(&self.entries()?))
    }

    /// Look an entry up by full id or unique id prefix
    pub fn find(&self, id: &str) -> Result<FuelEntry> {
        let entries = self.entries()?;
        let index = resolve_index(&entries, id)?;
        Ok(entries[index].clone())
    }

    /// Record a new fill.
    ///
    /// The odometer must exceed every reading already stored.
    pub fn add(&self, draft: EntryDraft, today: NaiveDate) -> Result<FuelEntry> {
        let mut entries = self.entries()?;
        let entry = draft.into_entry(EntryId::generate(), today)?;

        let last = max_odometer(&entries);
        if last > 0.0 && entry.odometer <= last {
            return Err(Error::Validation(format!(
                "odometer must be greater than the previous reading ({} km)",
                last
            )));
        }

        entries.push(entry.clone());
        self.persist(entries)?;
        tracing::info!(id = %entry.id, odometer = entry.odometer, "added entry");

        Ok(entry)
    }

    /// Apply edits to an existing fill, keeping its id.
    ///
    /// Odometer ordering is not re-checked: a correction may legitimately
    /// move a reading below a later one.
    pub fn update(&self, id: &str, edit: EntryDraft) -> Result<FuelEntry> {
        let mut entries = self.entries()?;
        let index = resolve_index(&entries, id)?;
        let existing = &entries[index];

        let updated = edit
            .over(existing)
            .into_entry(existing.id.clone(), existing.date)?;
        entries[index] = updated.clone();

        self.persist(entries)?;
        tracing::info!(id = %updated.id, "updated entry");

        Ok(updated)
    }

    /// Remove a fill, returning what was removed
    pub fn delete(&self, id: &str) -> Result<FuelEntry> {
        let mut entries = self.entries()?;
        let index = resolve_index(&entries, id)?;
        let removed = entries.remove(index);

        self.persist(entries)?;
        tracing::info!(id = %removed.id, "deleted entry");

        Ok(removed)
    }

    fn persist(&self, mut entries: Vec<FuelEntry>) -> Result<()> {
        // Stored newest-first so the raw payload reads like the history view
        entries.sort_by(|a, b| b.odometer.total_cmp(&a.odometer));
        self.store.save_all(&entries)?;
        Ok(())
    }
}

fn max_odometer(entries: &[FuelEntry]) -> f64 {
    entries
        .iter()
        .map(|e| e.odometer)
        .fold(0.0, f64::max)
}

fn resolve_index(entries: &[FuelEntry], id: &str) -> Result<usize> {
    if let Some(index) = entries.iter().position(|e| e.id.as_str() == id) {
        return Ok(index);
    }

    if id.is_empty() {
        return Err(Error::NotFound(id.to_string()));
    }

    let mut matches = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.id.as_str().starts_with(id))
        .map(|(index, _)| index);

    match (matches.next(), matches.next()) {
        (Some(index), None) => Ok(index),
        (Some(_), Some(_)) => Err(Error::Ambiguous(id.to_string())),
        (None, _) => Err(Error::NotFound(id.to_string())),
    }
}
