pub mod config;
pub mod draft;
pub mod error;
pub mod ledger;
pub mod workspace;

pub use config::{Config, StoreConfig, resolve_workspace_path};
pub use draft::EntryDraft;
pub use error::{Error, Result};
pub use ledger::Ledger;
pub use workspace::Workspace;
