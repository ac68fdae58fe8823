//! File I/O for year files and settings
//!
//! Year files are rewritten whole on every save. Writes go through a sibling
//! temp file and a rename, so a reader sees either the previous year or the
//! new one and never a half-written file.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::HabitError;

/// Read a JSON document, or `T::default()` when the file has never been written
///
/// A file that exists but does not parse is a `Storage` error naming the file.
pub fn read_json<T, P>(path: P) -> Result<T, HabitError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => {
            return Err(HabitError::Io(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_slice(&bytes)
        .map_err(|e| HabitError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Replace `path` with the pretty-printed document
///
/// The document is rendered before anything touches the disk, then written
/// to `<name>.tmp` next to the target, synced and renamed over it.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), HabitError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let mut document = serde_json::to_vec_pretty(data).map_err(|e| {
        HabitError::Storage(format!("Failed to serialize {}: {}", path.display(), e))
    })?;
    document.push(b'\n');

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            HabitError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    let written = File::create(&temp_path).and_then(|mut file| {
        file.write_all(&document)?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(HabitError::Storage(format!(
            "Failed to write {}: {}",
            temp_path.display(),
            e
        )));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        HabitError::Storage(format!("Failed to replace {}: {}", path.display(), e))
    })
}

// Same directory as the target, so the rename never crosses filesystems.
fn temp_path_for(path: &Path) -> Result<PathBuf, HabitError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| HabitError::Storage(format!("Not a file: {}", path.display())))?;
    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}

/// Move a file aside as `<name>.corrupt-<timestamp>`, returning the new path
pub fn quarantine<P: AsRef<Path>>(path: P) -> Result<PathBuf, HabitError> {
    let path = path.as_ref();
    let mut target_name = path
        .file_name()
        .ok_or_else(|| HabitError::Storage(format!("Not a file: {}", path.display())))?
        .to_os_string();
    target_name.push(format!(".corrupt-{}", Utc::now().format("%Y%m%d-%H%M%S%3f")));
    let target = path.with_file_name(target_name);

    fs::rename(path, &target).map_err(|e| {
        HabitError::Storage(format!("Failed to move {} aside: {}", path.display(), e))
    })?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: TestData = read_json(&path).unwrap();
        assert_eq!(data, TestData::default());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        write_json_atomic(&path, &data).unwrap();
        let loaded: TestData = read_json(&path).unwrap();
        assert_eq!(data, loaded);
    }

    #[test]
    fn test_written_json_is_pretty_printed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &TestData::default()).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\n  \"name\""));
    }

    #[test]
    fn test_written_json_ends_with_newline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("2024.json");

        write_json_atomic(&path, &TestData::default()).unwrap();
        assert!(fs::read_to_string(&path).unwrap().ends_with("}\n"));
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &TestData::default()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("test.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &TestData::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_invalid_json_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "not json at all").unwrap();

        let result: Result<TestData, _> = read_json(&path);
        assert!(matches!(result, Err(HabitError::Storage(_))));
    }

    #[test]
    fn test_quarantine_moves_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("2024.json");
        fs::write(&path, "{ broken").unwrap();

        let moved = quarantine(&path).unwrap();

        assert!(!path.exists());
        assert_eq!(fs::read_to_string(&moved).unwrap(), "{ broken");
        assert!(moved
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("2024.json.corrupt-"));
    }
}
