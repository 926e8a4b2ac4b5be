use crate::errors::StoreError;
use crate::models::{VisitLog, VisitRecord};
use crate::store::VisitStore;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::{fs, sync::Mutex};
use tracing::error;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    log: Mutex<VisitLog>,
}

impl FileStore {
    pub async fn open(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let log = load_log(&path).await;
        Ok(Self {
            path,
            log: Mutex::new(log),
        })
    }
}

#[async_trait]
impl VisitStore for FileStore {
    async fn upsert(&self, record: VisitRecord) -> Result<(), StoreError> {
        let mut log = self.log.lock().await;
        let mut next = log.clone();
        next.days.insert(record.date, record.count);
        persist_log(&self.path, &next).await?;
        *log = next;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<VisitRecord>, StoreError> {
        Ok(self.log.lock().await.records())
    }
}

pub async fn load_log(path: &Path) -> VisitLog {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(log) => log,
            Err(err) => {
                error!("failed to parse visit file: {err}");
                VisitLog::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => VisitLog::default(),
        Err(err) => {
            error!("failed to read visit file: {err}");
            VisitLog::default()
        }
    }
}

async fn persist_log(path: &Path, log: &VisitLog) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(log)?;
    fs::write(path, payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn temp_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("portfolio_site_{name}_{}_{nanos}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_file_starts_empty() {
        let store = FileStore::open(temp_path("missing")).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn upserts_survive_reopen() {
        let path = temp_path("reopen");
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let store = FileStore::open(path.clone()).await.unwrap();
        store.upsert(VisitRecord::new(date, 1)).await.unwrap();
        store.upsert(VisitRecord::new(date, 1)).await.unwrap();
        drop(store);

        let reopened = FileStore::open(path.clone()).await.unwrap();
        assert_eq!(
            reopened.list().await.unwrap(),
            vec![VisitRecord::new(date, 1)]
        );
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn failed_save_leaves_rows_unchanged() {
        let path = temp_path("unwritable");
        let kept = VisitRecord::new(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(), 4);

        let store = FileStore::open(path.clone()).await.unwrap();
        store.upsert(kept).await.unwrap();
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(store.upsert(VisitRecord::new(date, 1)).await.is_err());
        assert_eq!(store.list().await.unwrap(), vec![kept]);
        let _ = std::fs::remove_dir(path);
    }

    #[tokio::test]
    async fn corrupt_file_is_treated_as_empty() {
        let path = temp_path("corrupt");
        std::fs::write(&path, b"{not json").unwrap();

        let log = load_log(&path).await;
        assert!(log.days.is_empty());
        let _ = std::fs::remove_file(path);
    }
}
