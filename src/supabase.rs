use crate::config::SupabaseConfig;
use crate::errors::StoreError;
use crate::models::VisitRecord;
use crate::store::VisitStore;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

const CONFLICT_TARGET: &str = "date";
const UPSERT_PREFERENCE: &str = "resolution=merge-duplicates,return=minimal";

pub struct SupabaseStore {
    client: Client,
    config: SupabaseConfig,
}

impl SupabaseStore {
    pub fn new(config: SupabaseConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .user_agent(concat!("portfolio_site/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.url.trim_end_matches('/'),
            self.config.table
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
    }
}

#[async_trait]
impl VisitStore for SupabaseStore {
    async fn upsert(&self, record: VisitRecord) -> Result<(), StoreError> {
        let request = self
            .client
            .post(self.table_url())
            .query(&[("on_conflict", CONFLICT_TARGET)])
            .header("Prefer", UPSERT_PREFERENCE)
            .json(&record);

        let response = self.authorize(request).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<VisitRecord>, StoreError> {
        let request = self
            .client
            .get(self.table_url())
            .query(&[("select", "*"), ("order", "date.asc")]);

        let response = self.authorize(request).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

async fn check_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Status {
        status: status.as_u16(),
        body,
    })
}
