//! Persistence backend contract and the in-memory implementation.

use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BackendResult<T> = Result<T, BackendError>;

/// Transport-level failure raised by a storage backend.
#[derive(Debug)]
pub enum BackendError {
    Io(std::io::Error),
    Sqlite(rusqlite::Error),
}

impl Display for BackendError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage i/o failure: {err}"),
            Self::Sqlite(err) => write!(f, "storage database failure: {err}"),
        }
    }
}

impl Error for BackendError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for BackendError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<rusqlite::Error> for BackendError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Storage medium for the serialized resident collection.
///
/// A backend holds exactly one payload, the JSON array addressed by
/// [`crate::store::STORAGE_KEY`]. `read` returns `None` when nothing has
/// been written yet; `write` replaces the payload wholesale.
pub trait StorageBackend {
    fn read(&self) -> BackendResult<Option<String>>;
    fn write(&self, payload: &str) -> BackendResult<()>;
}

/// Volatile in-process backend for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    payload: RefCell<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self) -> BackendResult<Option<String>> {
        Ok(self.payload.borrow().clone())
    }

    fn write(&self, payload: &str) -> BackendResult<()> {
        *self.payload.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}
