use gastrack_store::SqliteStore;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::ledger::Ledger;
use crate::Result;

/// A data directory holding `config.toml` and the entry database
#[derive(Debug, Clone)]
pub struct Workspace {
    data_dir: PathBuf,
    config: Config,
}

impl Workspace {
    /// Open an existing (or not yet initialized) data directory.
    ///
    /// A missing config file means defaults; nothing is written.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let config = Config::load_from(&data_dir.join(Config::FILE_NAME))?;
        Ok(Self { data_dir, config })
    }

    /// Create the data directory, a default config and the database.
    ///
    /// Returns whether a new config file was written; an existing one is left as is.
    pub fn init(data_dir: impl Into<PathBuf>) -> Result<(Self, bool)> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;

        let config_path = data_dir.join(Config::FILE_NAME);
        let created = !config_path.exists();
        if created {
            Config::default().save_to(&config_path)?;
            tracing::info!(path = %config_path.display(), "wrote default config");
        }

        let workspace = Self::open(data_dir)?;
        SqliteStore::open(&workspace.database_path())?;

        Ok((workspace, created))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(Config::FILE_NAME)
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.config.store.database)
    }

    pub fn ledger(&self) -> Result<Ledger<SqliteStore>> {
        let store = SqliteStore::open(&self.database_path())?;
        Ok(Ledger::new(store))
    }
}
