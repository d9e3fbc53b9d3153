//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::datastore::DataServiceClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the hosted data service client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    datastore: DataServiceClient,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let datastore = DataServiceClient::new(&config.data_service);

        Self {
            inner: Arc::new(AppStateInner { config, datastore }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the data service client.
    #[must_use]
    pub fn datastore(&self) -> &DataServiceClient {
        &self.inner.datastore
    }
}
