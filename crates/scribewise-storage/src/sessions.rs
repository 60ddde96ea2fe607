use std::path::{Path, PathBuf};

use scribewise_core::models::session::SessionRecord;
use scribewise_core::models::style::WritingStyle;
use uuid::Uuid;

use crate::error::StorageError;

/// Persisted list of recent sessions, newest first.
pub trait SessionRepository {
    fn list(&self) -> Result<Vec<SessionRecord>, StorageError>;

    /// Prepend a record.
    fn add(&mut self, record: SessionRecord) -> Result<(), StorageError>;

    /// Remove by id. Returns whether anything was removed.
    fn remove(&mut self, id: Uuid) -> Result<bool, StorageError>;

    fn get(&self, id: Uuid) -> Result<SessionRecord, StorageError> {
        self.list()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(StorageError::NotFound { id })
    }

    /// Record a new session with the given style and return it.
    fn create(&mut self, writing_style: WritingStyle) -> Result<SessionRecord, StorageError> {
        let record = SessionRecord::new(writing_style);
        self.add(record.clone())?;
        Ok(record)
    }
}

/// In-memory backend. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    records: Vec<SessionRecord>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRepository for MemorySessionStore {
    fn list(&self) -> Result<Vec<SessionRecord>, StorageError> {
        Ok(self.records.clone())
    }

    fn add(&mut self, record: SessionRecord) -> Result<(), StorageError> {
        self.records.insert(0, record);
        Ok(())
    }

    fn remove(&mut self, id: Uuid) -> Result<bool, StorageError> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        Ok(before != self.records.len())
    }
}

/// JSON file backend. Every mutation rewrites the whole file atomically
/// (tmp + rename). A missing file is an empty index.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn load(&self) -> Result<Vec<SessionRecord>, StorageError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no session index yet");
            return Ok(Vec::new());
        }
        let json = std::fs::read(&self.path).map_err(|e| self.io_error(e))?;
        Ok(serde_json::from_slice(&json)?)
    }

    fn flush(&self, records: &[SessionRecord]) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(records)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &json).map_err(|e| self.io_error(e))?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "session index flushed");
        Ok(())
    }
}

impl SessionRepository for FileSessionStore {
    fn list(&self) -> Result<Vec<SessionRecord>, StorageError> {
        self.load()
    }

    fn add(&mut self, record: SessionRecord) -> Result<(), StorageError> {
        let mut records = self.load()?;
        tracing::info!(id = %record.id, style = %record.writing_style, "session added");
        records.insert(0, record);
        self.flush(&records)
    }

    fn remove(&mut self, id: Uuid) -> Result<bool, StorageError> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.flush(&records)?;
        tracing::info!(%id, "session removed");
        Ok(true)
    }
}
