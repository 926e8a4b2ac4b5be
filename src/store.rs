use crate::config::Backend;
use crate::errors::StoreError;
use crate::models::VisitRecord;
use crate::storage::FileStore;
use crate::supabase::SupabaseStore;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// `list` returns every row; implementations are not required to order them.
#[async_trait]
pub trait VisitStore: Send + Sync {
    async fn upsert(&self, record: VisitRecord) -> Result<(), StoreError>;

    async fn list(&self) -> Result<Vec<VisitRecord>, StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<VisitRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<VisitRecord>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

#[async_trait]
impl VisitStore for MemoryStore {
    async fn upsert(&self, record: VisitRecord) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().await;
        match rows.iter().position(|row| row.date == record.date) {
            Some(index) => rows[index] = record,
            None => rows.push(record),
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<VisitRecord>, StoreError> {
        Ok(self.rows.lock().await.clone())
    }
}

pub async fn open_store(backend: &Backend) -> Result<Arc<dyn VisitStore>, StoreError> {
    let store: Arc<dyn VisitStore> = match backend {
        Backend::Supabase(config) => {
            info!(table = %config.table, "using supabase visit store");
            Arc::new(SupabaseStore::new(config.clone())?)
        }
        Backend::File(path) => {
            info!(path = %path.display(), "using file visit store");
            Arc::new(FileStore::open(path.clone()).await?)
        }
        Backend::Memory => {
            info!("using in-memory visit store");
            Arc::new(MemoryStore::new())
        }
    };
    Ok(store)
}
