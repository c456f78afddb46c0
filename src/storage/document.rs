//! Backing document I/O
//!
//! The whole collection lives in one pretty-printed JSON file:
//!
//! ```text
//! {
//!   "animals": [ ... ]
//! }
//! ```
//!
//! Every write replaces the entire file and fsyncs it before returning.
//! There is no incremental append and no atomic rename.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use super::errors::{StorageError, StorageResult};
use super::record::{Animal, AnimalDocument};

/// Read and parse the document at `path`.
pub fn read_document(path: &Path) -> StorageResult<AnimalDocument> {
    let content = fs::read_to_string(path).map_err(|e| StorageError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Overwrite the document at `path` with `animals`.
pub fn write_document(path: &Path, animals: &[Animal]) -> StorageResult<()> {
    let write_failed = |e| StorageError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    };

    let body = render(animals);
    let mut file = File::create(path).map_err(write_failed)?;
    file.write_all(body.as_bytes()).map_err(write_failed)?;
    file.sync_all().map_err(write_failed)?;

    Ok(())
}

/// Create a new empty document at `path`. Parent directories are created.
///
/// Fails with `AlreadyExists` rather than truncating an existing file.
pub fn create_document(path: &Path) -> StorageResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StorageError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::AlreadyExists => StorageError::AlreadyExists {
                path: path.to_path_buf(),
            },
            _ => StorageError::WriteFailed {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

    let write_failed = |e| StorageError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    };
    file.write_all(render(&[]).as_bytes()).map_err(write_failed)?;
    file.sync_all().map_err(write_failed)?;

    Ok(())
}

/// Serialize the collection exactly as it is stored on disk.
fn render(animals: &[Animal]) -> String {
    #[derive(serde::Serialize)]
    struct DocumentRef<'a> {
        animals: &'a [Animal],
    }

    // Serializing plain strings and vectors cannot fail.
    serde_json::to_string_pretty(&DocumentRef { animals }).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::record::NewAnimal;
    use tempfile::TempDir;

    fn animal(id: &str, name: &str) -> Animal {
        NewAnimal::new(name, "bear", "omnivore", vec!["hungry".to_string()]).with_id(id)
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("animals.json");

        let animals = vec![animal("0", "Novak"), animal("1", "Erica")];
        write_document(&path, &animals).unwrap();

        let doc = read_document(&path).unwrap();
        assert_eq!(doc.animals, animals);
    }

    #[test]
    fn test_write_is_pretty_printed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("animals.json");

        write_document(&path, &[animal("0", "Novak")]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("{\n  \"animals\": ["));
    }

    #[test]
    fn test_write_replaces_whole_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("animals.json");

        write_document(&path, &[animal("0", "A"), animal("1", "B")]).unwrap();
        write_document(&path, &[animal("0", "A")]).unwrap();

        assert_eq!(read_document(&path).unwrap().animals.len(), 1);
    }

    #[test]
    fn test_read_missing_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_document(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.code(), "ZOO_STORE_IO_ERROR");
    }

    #[test]
    fn test_read_without_animals_field_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("animals.json");
        fs::write(&path, r#"{"zookeepers": []}"#).unwrap();

        let err = read_document(&path).unwrap_err();
        assert_eq!(err.code(), "ZOO_STORE_CORRUPT");
    }

    #[test]
    fn test_create_makes_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("animals.json");

        create_document(&path).unwrap();

        assert!(read_document(&path).unwrap().animals.is_empty());
    }

    #[test]
    fn test_create_refuses_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("animals.json");
        write_document(&path, &[animal("0", "Novak")]).unwrap();

        let err = create_document(&path).unwrap_err();
        assert_eq!(err.code(), "ZOO_STORE_ALREADY_EXISTS");
        assert_eq!(read_document(&path).unwrap().animals.len(), 1);
    }
}
