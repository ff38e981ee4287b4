//! Spare rider API client
//!
//! Issues authenticated `GET` requests against the riders endpoint. One call
//! to [`RiderSource::fetch_page`] is one HTTP request; there is no retry.

use super::models::RiderPage;
use super::source::RiderSource;
use crate::config::{ApiConfig, SecretString};
use crate::domain::{ApiError, ExportError, Result};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use std::time::Duration;

/// HTTP client for the Spare riders endpoint
pub struct SpareLabsClient {
    /// Riders endpoint URL
    base_url: String,

    /// HTTP client for making requests
    client: Client,

    /// Bearer token
    token: SecretString,
}

impl SpareLabsClient {
    /// Create a new client from API configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ExportError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
            token: config.token.clone(),
        })
    }

    fn auth_header_value(&self) -> String {
        let token: &str = self.token.expose_secret().as_ref();
        format!("Bearer {token}")
    }
}

#[async_trait]
impl RiderSource for SpareLabsClient {
    async fn fetch_page(&self, limit: usize, skip: usize) -> Result<RiderPage> {
        tracing::debug!(url = %self.base_url, limit, skip, "Requesting riders page");

        let resp = self
            .client
            .get(&self.base_url)
            .header(AUTHORIZATION, self.auth_header_value())
            .header(CONTENT_TYPE, "application/json")
            .query(&[("limit", limit), ("skip", skip)])
            .send()
            .await
            .map_err(|e| ApiError::ConnectionFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                "Failed to fetch data: {} - {}",
                status.as_u16(),
                body
            );
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::ConnectionFailed(e.to_string()))?;

        RiderPage::from_body(&body)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;
    use mockito::Matcher;

    fn api_config(base_url: String) -> ApiConfig {
        let mut config = ApiConfig::new(secret_string("test-token".to_string()));
        config.base_url = base_url;
        config
    }

    #[tokio::test]
    async fn test_fetch_page_sends_auth_and_cursor() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/riders")
            .match_header("authorization", "Bearer test-token")
            .match_header("content-type", "application/json")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "50".into()),
                Matcher::UrlEncoded("skip".into(), "100".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"data": [{"externalNumericId": 7}]}"#)
            .create_async()
            .await;

        let client = SpareLabsClient::new(&api_config(format!("{}/v1/riders", server.url()))).unwrap();
        let page = client.fetch_page(50, 100).await.unwrap();

        mock.assert_async().await;
        assert_eq!(page.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_page_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/riders")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body("invalid token")
            .create_async()
            .await;

        let client = SpareLabsClient::new(&api_config(format!("{}/v1/riders", server.url()))).unwrap();
        let result = client.fetch_page(50, 0).await;

        match result {
            Err(ExportError::Api(ApiError::RequestFailed { status, body })) => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid token");
            }
            other => panic!("Expected RequestFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_page_connection_failure() {
        // Nothing listens on the discard port
        let mut config = api_config("http://127.0.0.1:9/v1/riders".to_string());
        config.timeout_seconds = 2;
        let client = SpareLabsClient::new(&config).unwrap();
        let result = client.fetch_page(50, 0).await;
        assert!(matches!(result, Err(ExportError::Api(ApiError::ConnectionFailed(_)))));
    }

    #[test]
    fn test_base_url() {
        let client = SpareLabsClient::new(&api_config("https://api.sparelabs.com/v1/riders".to_string())).unwrap();
        assert_eq!(client.base_url(), "https://api.sparelabs.com/v1/riders");
    }
}
