//! Animal storage
//!
//! The collection lives in memory and in a single JSON document. The
//! document is the only persistent state; it is rewritten whole on every
//! append.
//!
//! # Guarantees
//!
//! - Ids are the stringified insertion index, unique within a process
//! - An append is acknowledged only after the document is fsynced
//! - A failed rewrite leaves the record in memory (no rollback)

mod document;
mod errors;
mod record;
mod store;

pub use document::{create_document, read_document, write_document};
pub use errors::{StorageError, StorageResult};
pub use record::{Animal, AnimalDocument, NewAnimal};
pub use store::AnimalStore;
