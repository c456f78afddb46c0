//! The animal store
//!
//! Holds the collection in memory and owns its backing document.
//!
//! - Reads take a snapshot under the read lock.
//! - `append` is the only mutator. It holds the write lock across id
//!   assignment, the in-memory push and the document rewrite, so writers in
//!   this process are serialized and ids never collide.
//! - The document is rewritten and fsynced before `append` returns.
//!
//! Writers in other processes sharing the same document are not coordinated.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::document::{create_document, read_document, write_document};
use super::errors::StorageResult;
use super::record::{Animal, NewAnimal};
use crate::observability::Logger;
use crate::query::{filter_by_query, find_by_id, AnimalQuery};

/// In-memory animal collection synced to a JSON document.
#[derive(Debug)]
pub struct AnimalStore {
    path: PathBuf,
    animals: RwLock<Vec<Animal>>,
}

impl AnimalStore {
    /// Load the store from an existing document.
    ///
    /// # Errors
    ///
    /// `Io` if the document cannot be read, `Corrupt` if it does not parse.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let doc = read_document(&path)?;

        Logger::info(
            "STORE_LOADED",
            &[
                ("path", path.display().to_string().as_str()),
                ("records", doc.animals.len().to_string().as_str()),
            ],
        );

        Ok(Self {
            path,
            animals: RwLock::new(doc.animals),
        })
    }

    /// Create a new empty document at `path` and open it.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` if a file is already at `path`.
    pub fn create(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        create_document(&path)?;

        Logger::info("STORE_CREATED", &[("path", path.display().to_string().as_str())]);

        Ok(Self {
            path,
            animals: RwLock::new(Vec::new()),
        })
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Snapshot of every record in insertion order
    pub fn all(&self) -> Vec<Animal> {
        self.read().clone()
    }

    /// Records matching `query`, in insertion order
    pub fn find(&self, query: &AnimalQuery) -> Vec<Animal> {
        let animals = self.read();
        filter_by_query(query, &animals).into_iter().cloned().collect()
    }

    /// First record with the given id
    pub fn get(&self, id: &str) -> Option<Animal> {
        find_by_id(id, &self.read()).cloned()
    }

    /// Assign an id, append, and rewrite the document.
    ///
    /// The id is the stringified length of the collection before the append.
    /// Identical inputs therefore produce distinct records.
    ///
    /// # Errors
    ///
    /// `WriteFailed` if the document cannot be rewritten. The record stays in
    /// memory; the next successful write brings the document back in sync.
    pub fn append(&self, animal: NewAnimal) -> StorageResult<Animal> {
        let mut animals = self.write();

        let created = animal.with_id(animals.len().to_string());
        animals.push(created.clone());

        write_document(&self.path, &animals)?;

        Logger::info(
            "ANIMAL_APPENDED",
            &[("id", created.id.as_str()), ("name", created.name.as_str())],
        );

        Ok(created)
    }

    /// Rewrite the backing document from memory.
    pub fn persist(&self) -> StorageResult<()> {
        // The write lock keeps an append from interleaving with this rewrite.
        let animals = self.write();
        write_document(&self.path, &animals)
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Animal>> {
        self.animals.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Animal>> {
        self.animals.write().unwrap_or_else(PoisonError::into_inner)
    }
}
