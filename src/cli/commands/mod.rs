pub mod config;
pub mod correct;
pub mod dashboard;
pub mod db;
pub mod employee;
pub mod export;
pub mod holiday;
pub mod init;
pub mod justify;
pub mod log;
pub mod month;
pub mod punch;
pub mod status;
pub mod week;

use crate::config::Config;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;

/// Open the configured database, applying pending migrations.
pub(crate) fn open_store(cfg: &Config) -> AppResult<SqliteStore> {
    SqliteStore::open(&cfg.database)
}
