use crate::errors::StoreError;
use crate::models::VisitRecord;
use crate::store::VisitStore;
use tracing::warn;

pub async fn fetch_visits(store: &dyn VisitStore) -> Result<Vec<VisitRecord>, StoreError> {
    let mut rows = store.list().await?;
    rows.sort_by_key(|row| row.date);
    Ok(rows)
}

pub async fn load_visits(store: &dyn VisitStore) -> Vec<VisitRecord> {
    match fetch_visits(store).await {
        Ok(rows) => rows,
        Err(err) => {
            warn!("failed to load visit history: {err}");
            Vec::new()
        }
    }
}
