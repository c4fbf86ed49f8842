use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use directories::BaseDirs;
use rusqlite::Connection;
use tracing::debug;

use crate::error::{Result, StoreError};

/// Folder name used beneath the user's home directory for the league store.
const DATA_DIR_NAME: &str = ".league-stats";
/// SQLite file name stored inside the data directory.
const DB_FILE_NAME: &str = "league.sqlite";
/// Environment variable that overrides the default database location.
pub const DB_PATH_ENV: &str = "LEAGUE_DB_PATH";

/// Handle naming the SQLite file every access function connects to.
///
/// The handle itself holds no open connection. Each access function calls
/// [`Database::connect`], runs one statement and lets the connection drop at
/// the end of its scope, so the file is released on every exit path.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Target an explicit database file.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the database location from `LEAGUE_DB_PATH`, falling back to a
    /// file inside the user's home directory. The parent directory is created
    /// so the first connection can create the file itself.
    pub fn from_env() -> anyhow::Result<Self> {
        let path = match env::var_os(DB_PATH_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => default_db_path()?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("failed to create data directory")?;
        }

        Ok(Self::open(path))
    }

    /// Location of the SQLite file this handle connects to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection with foreign key enforcement switched on.
    /// SQLite leaves `foreign_keys` off per connection, and the cascading
    /// deletes depend on it.
    pub fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)
            .map_err(|err| StoreError::Connection(err.to_string()))?;
        conn.execute_batch("PRAGMA foreign_keys = ON")
            .map_err(|err| StoreError::Connection(err.to_string()))?;
        debug!(path = %self.path.display(), "opened connection");
        Ok(conn)
    }

    /// Run `f` against a scoped connection, translating store failures.
    pub(crate) fn with_connection<T>(
        &self,
        f: impl FnOnce(&Connection) -> rusqlite::Result<T>,
    ) -> Result<T> {
        let conn = self.connect()?;
        let value = f(&conn)?;
        Ok(value)
    }

    /// Execute a single parameterized statement and report affected rows.
    pub(crate) fn execute(&self, sql: &str, params: impl rusqlite::Params) -> Result<usize> {
        self.with_connection(|conn| conn.execute(sql, params))
    }
}

/// Resolve the absolute path to the database inside the user's home.
fn default_db_path() -> anyhow::Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}
