use std::sync::Arc;

use crate::config::Config;
use crate::store::HttpRecordStore;

/// Shared application state. The search core itself is stateless; the only
/// shared resource is the record-store client, which is safe for concurrent
/// use by all in-flight queries.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<HttpRecordStore>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = HttpRecordStore::new(config.store.clone())?;
        Ok(Self {
            config,
            store: Arc::new(store),
        })
    }
}
