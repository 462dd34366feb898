//! The remote record store collaborator.
//!
//! The store exposes independently queryable collections with boolean filter
//! expressions (`~` contains, `&&`/`||`) over named fields and offset-based
//! pagination per collection. There is no cross-collection join or global
//! pagination; everything above this module exists to compensate for that.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::StoreConfig;

/// One per-collection query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub filter: String,
    pub page: u32,
    pub page_size: u32,
    pub sort: String,
    /// Optional field projection, e.g. `"id"` for count-only queries.
    pub fields: Option<String>,
}

/// One per-collection result page as reported by the store.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage {
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
    #[serde(default)]
    pub total_items: u64,
}

/// The single capability the aggregation core requires of the store. The
/// client must be safe for concurrent use by multiple in-flight queries.
pub trait RecordStore: Send + Sync {
    fn query(
        &self,
        collection: &str,
        req: &QueryRequest,
    ) -> impl std::future::Future<Output = Result<QueryPage>> + Send;
}

/// HTTP client for the record store's JSON API.
pub struct HttpRecordStore {
    client: reqwest::Client,
    config: StoreConfig,
}

impl HttpRecordStore {
    pub fn new(config: StoreConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .timeout(std::time::Duration::from_secs(config.timeout_secs.min(30)))
            .build()?;
        Ok(Self { client, config })
    }
}

impl RecordStore for HttpRecordStore {
    async fn query(&self, collection: &str, req: &QueryRequest) -> Result<QueryPage> {
        let url = format!(
            "{}/collections/{}/records",
            self.config.base_url.trim_end_matches('/'),
            collection
        );

        let page = req.page.to_string();
        let page_size = req.page_size.to_string();
        let mut params: Vec<(&str, &str)> = vec![
            ("filter", req.filter.as_str()),
            ("page", page.as_str()),
            ("pageSize", page_size.as_str()),
            ("sort", req.sort.as_str()),
        ];
        if let Some(fields) = req.fields.as_deref() {
            params.push(("fields", fields));
        }

        let mut request = self.client.get(&url).query(&params);
        if let Some(key) = self.config.api_key.as_deref() {
            request = request.header("Authorization", format!("Bearer {key}"));
        }

        let resp = request
            .send()
            .await
            .with_context(|| format!("Failed to reach record store for '{collection}'"))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Record store returned {status} for '{collection}': {body}");
        }

        let page: QueryPage = resp
            .json()
            .await
            .with_context(|| format!("Failed to parse record store response for '{collection}'"))?;

        Ok(page)
    }
}
