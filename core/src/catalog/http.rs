use super::CatalogClient;
use crate::prelude::{CatalogError, CatalogResult};
use log::debug;
use reqwest::StatusCode;
use std::time::Duration;
use tokio::runtime::{Builder as TokioBuilder, Runtime};

/// Blocking client for the `gp.php` element endpoint.
///
/// Requests run on a private current-thread runtime and are bounded by a
/// hard timeout.
pub struct HttpCatalogClient {
    base_url: String,
    client: reqwest::Client,
    runtime: Runtime,
}

impl HttpCatalogClient {
    pub fn new(base_url: &str, timeout: Duration) -> CatalogResult<Self> {
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| CatalogError::Transport(format!("creating runtime: {}", e)))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        Ok(Self {
            base_url: base_url.to_string(),
            client,
            runtime,
        })
    }
}

impl CatalogClient for HttpCatalogClient {
    fn get_group(&self, group: &str) -> CatalogResult<String> {
        debug!("GET {} GROUP={}", self.base_url, group);
        self.runtime.block_on(async {
            let response = self
                .client
                .get(&self.base_url)
                .query(&[("GROUP", group), ("FORMAT", "tle")])
                .send()
                .await
                .map_err(|e| CatalogError::Transport(e.to_string()))?;
            let status = response.status();
            if status != StatusCode::OK {
                return Err(CatalogError::Status(status.as_u16()));
            }
            response
                .text()
                .await
                .map_err(|e| CatalogError::Body(e.to_string()))
        })
    }
}
