use std::marker::PhantomData;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::domain::audit::Audited;
use crate::domain::errors::DomainError;
use crate::infrastructure::logging::logger;
use crate::infrastructure::persistence::context::StorageBackend;
use crate::infrastructure::persistence::context_factory::DEFAULT_SCHEMA;
use crate::infrastructure::persistence::file_store::{
    commit_json_documents, delete_document, list_documents, read_json_document,
};
use crate::infrastructure::persistence::naming::to_snake_case;

/// JSON-document storage driver: one pretty-printed file per record, laid
/// out as `<root>/<schema>/<collection>/<id>.json` with the collection
/// name snake-cased.
pub struct FileStorageBackend<E> {
    collection_dir: PathBuf,
    _entity: PhantomData<fn() -> E>,
}

impl<E> FileStorageBackend<E> {
    pub fn new(root: impl Into<PathBuf>, collection: &str) -> Self {
        let collection_dir = root
            .into()
            .join(DEFAULT_SCHEMA)
            .join(to_snake_case(collection));

        Self {
            collection_dir,
            _entity: PhantomData,
        }
    }

    fn record_path(&self, id: &Uuid) -> PathBuf {
        self.collection_dir.join(format!("{}.json", id))
    }
}

#[async_trait]
impl<E> StorageBackend<E> for FileStorageBackend<E>
where
    E: Audited + Serialize + DeserializeOwned + Send + Sync,
{
    async fn load_all(&self, ct: &CancellationToken) -> Result<Vec<E>, DomainError> {
        if ct.is_cancelled() {
            return Err(DomainError::Cancelled);
        }

        let paths = list_documents(&self.collection_dir, "json").await?;
        let mut records = Vec::with_capacity(paths.len());

        for path in paths {
            match read_json_document::<E>(&path).await {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(e) => {
                    // A single unreadable document must not hide the rest
                    // of the collection.
                    logger::error(&format!("Skipping unreadable record {:?}: {}", path, e));
                }
            }
        }

        Ok(records)
    }

    async fn load(&self, id: &Uuid, ct: &CancellationToken) -> Result<Option<E>, DomainError> {
        if ct.is_cancelled() {
            return Err(DomainError::Cancelled);
        }
        read_json_document(&self.record_path(id)).await
    }

    async fn persist(
        &self,
        inserts: &[E],
        updates: &[E],
        ct: &CancellationToken,
    ) -> Result<(), DomainError> {
        if ct.is_cancelled() {
            return Err(DomainError::Cancelled);
        }

        // The whole batch is one commit: stage everything, then rename
        // into place, so a failure leaves no record of the batch on disk.
        let documents: Vec<_> = inserts
            .iter()
            .chain(updates)
            .map(|record| (self.record_path(&record.id()), record))
            .collect();

        commit_json_documents(&documents).await
    }

    async fn remove(&self, id: &Uuid, ct: &CancellationToken) -> Result<bool, DomainError> {
        if ct.is_cancelled() {
            return Err(DomainError::Cancelled);
        }
        delete_document(&self.record_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde::{Deserialize, Serialize};
    use tokio_util::sync::CancellationToken;

    use super::FileStorageBackend;
    use crate::domain::audit::{AuditStamp, Audited};
    use crate::infrastructure::persistence::context::StorageBackend;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Widget {
        #[serde(flatten)]
        audit: AuditStamp,
        label: String,
    }

    impl Audited for Widget {
        fn audit(&self) -> &AuditStamp {
            &self.audit
        }

        fn audit_mut(&mut self) -> &mut AuditStamp {
            &mut self.audit
        }
    }

    fn widget(label: &str) -> Widget {
        Widget {
            audit: AuditStamp::new(),
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn persisted_records_can_be_loaded_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let backend: Arc<FileStorageBackend<Widget>> =
            Arc::new(FileStorageBackend::new(dir.path(), "Widget"));
        let ct = CancellationToken::new();

        let first = widget("first");
        let second = widget("second");
        backend
            .persist(&[first.clone(), second.clone()], &[], &ct)
            .await
            .expect("persist");

        let all = backend.load_all(&ct).await.expect("load_all");
        assert_eq!(all.len(), 2);

        let loaded = backend.load(&first.id(), &ct).await.expect("load");
        assert_eq!(loaded.expect("record exists").label, "first");
    }

    #[tokio::test]
    async fn collection_directory_is_schema_qualified_and_snake_cased() {
        let dir = tempfile::tempdir().expect("tempdir");
        let backend: Arc<FileStorageBackend<Widget>> =
            Arc::new(FileStorageBackend::new(dir.path(), "AuditWidget"));
        let ct = CancellationToken::new();

        backend.persist(&[widget("w")], &[], &ct).await.expect("persist");

        assert!(dir.path().join("crudkit").join("audit_widget").is_dir());
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Fragile {
        #[serde(flatten)]
        audit: AuditStamp,
        #[serde(serialize_with = "refuse_broken")]
        label: String,
    }

    impl Audited for Fragile {
        fn audit(&self) -> &AuditStamp {
            &self.audit
        }

        fn audit_mut(&mut self) -> &mut AuditStamp {
            &mut self.audit
        }
    }

    fn refuse_broken<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if value == "broken" {
            return Err(serde::ser::Error::custom("label refused serialization"));
        }
        serializer.serialize_str(value)
    }

    fn fragile(label: &str) -> Fragile {
        Fragile {
            audit: AuditStamp::new(),
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn failing_batch_persists_none_of_its_records() {
        let dir = tempfile::tempdir().expect("tempdir");
        let backend: Arc<FileStorageBackend<Fragile>> =
            Arc::new(FileStorageBackend::new(dir.path(), "Fragile"));
        let ct = CancellationToken::new();

        let good = fragile("good");
        let bad = fragile("broken");

        let error = backend
            .persist(&[good.clone(), bad], &[], &ct)
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            crate::domain::errors::DomainError::InvalidData(_)
        ));

        let leftover = backend.load(&good.id(), &ct).await.expect("load");
        assert!(leftover.is_none());
        assert!(backend.load_all(&ct).await.expect("load_all").is_empty());
    }

    #[tokio::test]
    async fn removing_an_unknown_record_reports_false() {
        let dir = tempfile::tempdir().expect("tempdir");
        let backend: Arc<FileStorageBackend<Widget>> =
            Arc::new(FileStorageBackend::new(dir.path(), "Widget"));
        let ct = CancellationToken::new();

        let removed = backend.remove(&uuid::Uuid::new_v4(), &ct).await.expect("remove");
        assert!(!removed);
    }
}
