use crate::config::VisitOrdering;
use crate::store::VisitStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VisitStore>,
    pub ordering: VisitOrdering,
}

impl AppState {
    pub fn new(store: Arc<dyn VisitStore>, ordering: VisitOrdering) -> Self {
        Self { store, ordering }
    }
}
