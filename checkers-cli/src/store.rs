//! JSON state file holding one stored game between CLI invocations.

use std::path::{Path, PathBuf};

use checkers::GameRecord;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no game stored at {0}")]
    NotFound(PathBuf),
    #[error("a game is already stored at {0} (pass --force to replace it)")]
    AlreadyExists(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single game record stored as pretty-printed JSON.
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> Result<GameRecord, StoreError> {
        if !self.exists() {
            return Err(StoreError::NotFound(self.path.clone()));
        }
        let contents = std::fs::read_to_string(&self.path)?;
        let record = serde_json::from_str(&contents)?;
        tracing::debug!("Loaded game from {:?}", self.path);
        Ok(record)
    }

    pub fn save(&self, record: &GameRecord) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(record)?;
        std::fs::write(&self.path, json)?;
        tracing::debug!("Saved game to {:?}", self.path);
        Ok(())
    }

    /// Save a fresh record, refusing to clobber an existing one unless `force`.
    pub fn create(&self, record: &GameRecord, force: bool) -> Result<(), StoreError> {
        if self.exists() && !force {
            return Err(StoreError::AlreadyExists(self.path.clone()));
        }
        self.save(record)
    }
}
