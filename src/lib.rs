pub mod analytics;
pub mod app;
pub mod chart;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod profile;
pub mod recorder;
pub mod state;
pub mod storage;
pub mod store;
pub mod supabase;
pub mod ui;

pub use app::router;
pub use config::AppConfig;
pub use state::AppState;
pub use store::{open_store, MemoryStore, VisitStore};
