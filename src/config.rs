use std::{env, fmt, path::PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TABLE: &str = "visits";
const DEFAULT_DATA_PATH: &str = "data/visits.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub backend: Backend,
    pub ordering: VisitOrdering,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Backend {
    Supabase(SupabaseConfig),
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    pub table: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitOrdering {
    #[default]
    Concurrent,
    ReadAfterWrite,
}

#[derive(Debug, Error)]
#[error("{0}")]
pub struct ConfigError(String);

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = lookup("PORT")
            .and_then(|value| {
                value
                    .parse::<u16>()
                    .map_err(|err| warn!("invalid PORT {value:?}: {err}"))
                    .ok()
            })
            .unwrap_or(DEFAULT_PORT);

        let backend_name = lookup("VISITS_BACKEND").unwrap_or_else(|| "supabase".to_string());
        let backend = match backend_name.trim().to_ascii_lowercase().as_str() {
            "supabase" => Backend::Supabase(SupabaseConfig {
                url: or_empty(&lookup, "SUPABASE_URL"),
                anon_key: or_empty(&lookup, "SUPABASE_ANON_KEY"),
                table: lookup("VISITS_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string()),
            }),
            "file" => Backend::File(PathBuf::from(
                lookup("APP_DATA_PATH").unwrap_or_else(|| DEFAULT_DATA_PATH.to_string()),
            )),
            "memory" => Backend::Memory,
            other => {
                return Err(ConfigError(format!(
                    "unknown VISITS_BACKEND {other:?}, expected supabase, file or memory"
                )));
            }
        };

        let read_after_write = lookup("VISIT_READ_AFTER_WRITE")
            .map(|value| value.trim().to_ascii_lowercase())
            .unwrap_or_default();
        let ordering = match read_after_write.as_str() {
            "1" | "true" | "yes" => VisitOrdering::ReadAfterWrite,
            _ => VisitOrdering::Concurrent,
        };

        Ok(Self {
            port,
            backend,
            ordering,
        })
    }
}

fn or_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> String {
    lookup(key).unwrap_or_else(|| {
        warn!("{key} not set, storage calls will fail");
        String::new()
    })
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Supabase(config) => write!(f, "supabase ({})", config.table),
            Backend::File(path) => write!(f, "file ({})", path.display()),
            Backend::Memory => f.write_str("memory"),
        }
    }
}

impl AppConfig {
    pub fn log_summary(&self) {
        info!(
            port = self.port,
            backend = %self.backend,
            ordering = ?self.ordering,
            "configuration loaded"
        );
    }
}
