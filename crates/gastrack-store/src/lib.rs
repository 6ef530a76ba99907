// Entry store: durable home of the fuel entry set
// Whole-set semantics only; create/update/delete live one layer up

mod error;
mod memory;
mod record;
mod schema;
mod sqlite;

// Public API
pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use sqlite::{ENTRIES_KEY, SqliteStore};

use gastrack_types::FuelEntry;

/// Load-all / replace-all persistence for fuel entries.
///
/// Implementations hand out a snapshot: callers own the returned vector and
/// later writes never reach into it.
pub trait EntryStore {
    /// Load the full current entry set
    fn load_all(&self) -> Result<Vec<FuelEntry>>;

    /// Persist `entries` as the new full entry set
    fn save_all(&self, entries: &[FuelEntry]) -> Result<()>;
}
