use gastrack_types::FuelEntry;
use std::cell::{Cell, RefCell};

use crate::{EntryStore, Result};

/// In-process store, for tests and embedders that manage persistence elsewhere
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<Vec<FuelEntry>>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<FuelEntry>) -> Self {
        Self {
            entries: RefCell::new(entries),
            saves: Cell::new(0),
        }
    }

    /// Number of `save_all` calls so far
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl EntryStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<FuelEntry>> {
        Ok(self.entries.borrow().clone())
    }

    fn save_all(&self, entries: &[FuelEntry]) -> Result<()> {
        *self.entries.borrow_mut() = entries.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
