use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use super::PingOneError;
use crate::connectors::parse_response;
use super::types::{APPLICATION, Application, GROUP, Group, POPULATION, Population, Region};

#[derive(Clone)]
pub struct PingOneClient {
    client: reqwest::Client,
    base_url: String,
}

impl PingOneClient {
    pub fn new(token: String, region: Region) -> Result<Self, PingOneError> {
        Self::with_base_url(token, region.api_base_url())
    }

    /// NOTE: Primarily used for testing with mock servers.
    pub fn with_base_url(token: String, base_url: String) -> Result<Self, PingOneError> {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", token);
        let header_value = HeaderValue::from_str(&auth_value).map_err(|_| PingOneError::Auth {
            message: "Invalid token format".to_string(),
        })?;
        headers.insert(AUTHORIZATION, header_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(PingOneError::Network)?;

        Ok(Self { client, base_url })
    }

    pub fn api_base(&self) -> &str {
        &self.base_url
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, PingOneError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        Ok(parse_response(path, status, &text)?)
    }

    /// Lists `/environments/{id}/{collection}`, reading `_embedded.{collection}`.
    async fn list_embedded<T: DeserializeOwned>(
        &self,
        environment_id: &str,
        collection: &str,
        resource_type: &str,
    ) -> Result<Vec<T>, PingOneError> {
        let path = format!(
            "/environments/{}/{}",
            urlencoding::encode(environment_id),
            collection
        );
        let body: serde_json::Value = self.get_json(&path).await?;

        let items = body
            .get("_embedded")
            .and_then(|e| e.get(collection))
            .cloned()
            .unwrap_or_else(|| serde_json::Value::Array(Vec::new()));

        serde_json::from_value(items).map_err(|e| PingOneError::DiscoveryFailed {
            resource_type: resource_type.to_string(),
            message: e.to_string(),
        })
    }

    pub async fn list_populations(
        &self,
        environment_id: &str,
    ) -> Result<Vec<Population>, PingOneError> {
        self.list_embedded(environment_id, "populations", POPULATION)
            .await
    }

    pub async fn list_groups(&self, environment_id: &str) -> Result<Vec<Group>, PingOneError> {
        self.list_embedded(environment_id, "groups", GROUP).await
    }

    pub async fn list_applications(
        &self,
        environment_id: &str,
    ) -> Result<Vec<Application>, PingOneError> {
        self.list_embedded(environment_id, "applications", APPLICATION)
            .await
    }
}

impl std::fmt::Debug for PingOneClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PingOneClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
