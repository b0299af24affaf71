use crate::api::{ShelfApi, ShelfPaths};
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::session::Session;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the data directory, mostly for tests and portable installs.
pub const HOME_ENV: &str = "SHELF_HOME";

pub struct ShelfContext {
    pub api: ShelfApi<FileStore>,
    pub config: ShelfConfig,
}

/// Resolves the data directory: `$SHELF_HOME` if set, else the platform data dir.
pub fn data_dir(home_override: Option<&Path>) -> Result<PathBuf> {
    if let Some(home) = home_override {
        return Ok(home.to_path_buf());
    }
    ProjectDirs::from("com", "bookshelf", "bookshelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Config("Could not determine data directory".to_string()))
}

pub fn initialize(home_override: Option<&Path>) -> Result<ShelfContext> {
    let data_dir = data_dir(home_override)?;
    let config = ShelfConfig::load(&data_dir)?;
    debug!(data_dir = %data_dir.display(), key = %config.storage_key, "opening shelf");

    let store = FileStore::new(&data_dir);
    let session = Session::open(store, config.storage_key.clone());
    let api = ShelfApi::new(session, ShelfPaths { data_dir });

    Ok(ShelfContext { api, config })
}
