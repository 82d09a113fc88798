use crate::core::{Catalog, CatalogSource};
use crate::utils::error::{ConfiguratorError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Fetches the catalog document with a single GET. No retry.
pub struct HttpCatalogSource {
    url: String,
    client: Client,
    timeout: Option<Duration>,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> Result<Catalog> {
        tracing::debug!("Making catalog request to: {}", self.url);

        let mut request = self.client.get(&self.url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Catalog response status: {}", status);

        if !status.is_success() {
            return Err(ConfiguratorError::CatalogLoadError {
                source_name: self.describe(),
                message: format!("HTTP status {}", status),
            });
        }

        let body = response.bytes().await?;
        Catalog::from_json_slice(&body).map_err(|e| ConfiguratorError::CatalogLoadError {
            source_name: self.describe(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_catalog() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/components.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "cpu": [{"id": 1, "name": "Ryzen 5 5600X", "price": 199, "performance": 70, "socket": "AM4", "img": "cpu.png"}],
                    "psu": [{"id": 1, "name": "Corsair RM650", "price": 89, "img": "psu.png"}]
                }));
        });

        let source = HttpCatalogSource::new(server.url("/components.json"))
            .with_timeout(Duration::from_secs(5));
        let catalog = source.load().await.unwrap();

        api_mock.assert();
        assert_eq!(catalog.cpu[0].performance, Some(70.0));
        assert_eq!(catalog.psu[0].name, "Corsair RM650");
        assert!(catalog.gpu.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_catalog_load_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/components.json");
            then.status(404);
        });

        let result = HttpCatalogSource::new(server.url("/components.json")).load().await;

        api_mock.assert_hits(1);
        match result {
            Err(ConfiguratorError::CatalogLoadError { message, .. }) => {
                assert!(message.contains("404"));
            }
            other => panic!("expected CatalogLoadError, got {:?}", other.map(|_| ())),
        }
    }
}
