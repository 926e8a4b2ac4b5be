use crate::analytics::load_visits;
use crate::config::VisitOrdering;
use crate::models::VisitRecord;
use crate::recorder::record_visit;
use crate::store::VisitStore;
use chrono::NaiveDate;
use tracing::{debug, warn};

pub async fn page_load(
    store: &dyn VisitStore,
    today: NaiveDate,
    ordering: VisitOrdering,
) -> Vec<VisitRecord> {
    match ordering {
        VisitOrdering::Concurrent => {
            let ((), visits) = tokio::join!(record_and_log(store, today), load_visits(store));
            visits
        }
        VisitOrdering::ReadAfterWrite => {
            record_and_log(store, today).await;
            load_visits(store).await
        }
    }
}

async fn record_and_log(store: &dyn VisitStore, today: NaiveDate) {
    match record_visit(store, today).await {
        Ok(record) => debug!(date = %record.date, "visit recorded"),
        Err(err) => warn!(date = %today, "failed to record visit: {err}"),
    }
}
