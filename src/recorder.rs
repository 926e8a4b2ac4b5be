use crate::errors::StoreError;
use crate::models::VisitRecord;
use crate::store::VisitStore;
use chrono::{NaiveDate, Utc};

/// Count written on every visit. Repeat visits on the same day overwrite the
/// row with this value rather than adding to it.
pub const VISIT_COUNT: u64 = 1;

pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

pub async fn record_visit(
    store: &dyn VisitStore,
    today: NaiveDate,
) -> Result<VisitRecord, StoreError> {
    let record = VisitRecord::new(today, VISIT_COUNT);
    store.upsert(record).await?;
    Ok(record)
}
