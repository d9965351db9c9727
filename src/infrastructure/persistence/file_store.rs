use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use tokio::fs::{self as tokio_fs, create_dir_all, read_to_string};

use crate::domain::errors::DomainError;
use crate::infrastructure::logging::logger;

/// Read a JSON document and deserialize it. `Ok(None)` means the document
/// does not exist; any other I/O problem is a storage failure.
pub async fn read_json_document<T: DeserializeOwned>(
    path: &Path,
) -> Result<Option<T>, DomainError> {
    logger::debug(&format!("Reading JSON document: {:?}", path));

    let contents = match read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            logger::error(&format!("Failed to read document {:?}: {}", path, e));
            return Err(DomainError::Storage(format!(
                "Failed to read document: {}",
                e
            )));
        }
    };

    serde_json::from_str(&contents).map(Some).map_err(|e| {
        logger::error(&format!("Failed to parse JSON from {:?}: {}", path, e));
        DomainError::InvalidData(format!("Invalid JSON: {}", e))
    })
}

/// Write a batch of records as one commit. Every record is serialized
/// before anything touches disk, then staged to a temporary sibling, and
/// the originals are only replaced in the rename phase, after every
/// staging write has succeeded. A failure before the rename phase removes
/// the staged files and leaves the collection exactly as it was.
pub async fn commit_json_documents<T: Serialize>(
    documents: &[(PathBuf, &T)],
) -> Result<(), DomainError> {
    logger::debug(&format!("Committing {} JSON documents", documents.len()));

    let mut serialized = Vec::with_capacity(documents.len());
    for (path, data) in documents {
        let json = serde_json::to_string_pretty(data).map_err(|e| {
            logger::error(&format!("Failed to serialize record for {:?}: {}", path, e));
            DomainError::InvalidData(format!("Failed to serialize to JSON: {}", e))
        })?;
        serialized.push((path, json));
    }

    let mut staged: Vec<PathBuf> = Vec::with_capacity(serialized.len());

    for (path, json) in &serialized {
        if let Some(parent) = path.parent() {
            if let Err(e) = create_dir_all(parent).await {
                logger::error(&format!(
                    "Failed to create parent directory for {:?}: {}",
                    path, e
                ));
                discard_staged(&staged).await;
                return Err(DomainError::Storage(format!(
                    "Failed to create directory: {}",
                    e
                )));
            }
        }

        let staging = staging_path(path);
        if let Err(e) = tokio_fs::write(&staging, json).await {
            logger::error(&format!("Failed to stage document {:?}: {}", staging, e));
            discard_staged(&staged).await;
            return Err(DomainError::Storage(format!(
                "Failed to stage document: {}",
                e
            )));
        }
        staged.push(staging);
    }

    for (staging, (path, _)) in staged.iter().zip(&serialized) {
        if let Err(e) = tokio_fs::rename(staging, path).await {
            logger::error(&format!("Failed to commit document {:?}: {}", path, e));
            discard_staged(&staged).await;
            return Err(DomainError::Storage(format!(
                "Failed to commit document: {}",
                e
            )));
        }
    }

    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}

async fn discard_staged(staged: &[PathBuf]) {
    for staging in staged {
        // Best effort; a staged file that was already renamed is gone.
        let _ = tokio_fs::remove_file(staging).await;
    }
}

/// List regular files with the given extension. A missing directory is an
/// empty collection, not an error. Staged `.tmp` siblings never match.
pub async fn list_documents(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, DomainError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut entries = tokio_fs::read_dir(dir).await.map_err(|e| {
        logger::error(&format!("Failed to read directory {:?}: {}", dir, e));
        DomainError::Storage(format!("Failed to read directory: {}", e))
    })?;

    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(|e| {
        logger::error(&format!("Failed to read directory entry: {}", e));
        DomainError::Storage(format!("Failed to read directory entry: {}", e))
    })? {
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path);
        }
    }

    Ok(files)
}

/// Delete a document. `Ok(false)` when there was nothing to delete.
pub async fn delete_document(path: &Path) -> Result<bool, DomainError> {
    logger::debug(&format!("Deleting document: {:?}", path));

    if !path.exists() {
        return Ok(false);
    }

    tokio_fs::remove_file(path).await.map_err(|e| {
        logger::error(&format!("Failed to delete document {:?}: {}", path, e));
        DomainError::Storage(format!("Failed to delete document: {}", e))
    })?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::{commit_json_documents, delete_document, list_documents, read_json_document};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        name: String,
    }

    #[tokio::test]
    async fn documents_round_trip_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("doc.json");

        let doc = Doc {
            name: "sample".to_string(),
        };
        commit_json_documents(&[(path.clone(), &doc)])
            .await
            .expect("commit");

        let loaded: Option<Doc> = read_json_document(&path).await.expect("read");
        assert_eq!(loaded, Some(doc));
    }

    #[tokio::test]
    async fn committed_batches_leave_no_staging_files_behind() {
        let dir = tempfile::tempdir().expect("tempdir");
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.json");

        let doc = Doc {
            name: "x".to_string(),
        };
        commit_json_documents(&[(first, &doc), (second, &doc)])
            .await
            .expect("commit");

        let tmp_files = list_documents(dir.path(), "tmp").await.expect("list");
        assert!(tmp_files.is_empty());
        assert_eq!(list_documents(dir.path(), "json").await.expect("list").len(), 2);
    }

    #[tokio::test]
    async fn missing_document_reads_as_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loaded: Option<Doc> = read_json_document(&dir.path().join("missing.json"))
            .await
            .expect("read");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn missing_directory_lists_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let files = list_documents(&dir.path().join("nope"), "json")
            .await
            .expect("list");
        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn delete_reports_whether_anything_existed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("doc.json");
        commit_json_documents(&[(
            path.clone(),
            &Doc {
                name: "x".to_string(),
            },
        )])
        .await
        .expect("commit");

        assert!(delete_document(&path).await.expect("delete"));
        assert!(!delete_document(&path).await.expect("delete again"));
    }
}
