use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

use super::PingFederateError;
use crate::connectors::parse_response;
use super::types::{
    IDP_ADAPTER, IDP_TO_SP_ADAPTER_MAPPING, IdpAdapter, IdpToSpAdapterMapping, ItemsResponse,
    OAUTH_CLIENT, OAuthClient,
};

const PINGFEDERATE_API_PATH: &str = "/pf-admin-api/v1";

// Required by the admin API on every request as CSRF protection.
const XSRF_HEADER: &str = "x-xsrf-header";

#[derive(Clone)]
pub struct PingFederateClient {
    client: reqwest::Client,
    username: String,
    password: String,
    base_url: String,
}

impl PingFederateClient {
    /// `server_url` is the admin console origin, e.g. `https://localhost:9999`.
    pub fn new(
        server_url: &str,
        username: String,
        password: String,
    ) -> Result<Self, PingFederateError> {
        let base_url = format!(
            "{}{}",
            server_url.trim_end_matches('/'),
            PINGFEDERATE_API_PATH
        );
        Self::with_base_url(username, password, base_url)
    }

    /// NOTE: Primarily used for testing with mock servers.
    pub fn with_base_url(
        username: String,
        password: String,
        base_url: String,
    ) -> Result<Self, PingFederateError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(XSRF_HEADER),
            HeaderValue::from_static("PingFederate"),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(PingFederateError::Network)?;

        Ok(Self {
            client,
            username,
            password,
            base_url,
        })
    }

    pub fn api_base(&self) -> &str {
        &self.base_url
    }

    /// GETs `path` and decodes the body, mapping non-2xx statuses to errors.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, PingFederateError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        Ok(parse_response(path, status, &text)?)
    }

    async fn list_items<T: DeserializeOwned>(
        &self,
        path: &str,
        resource_type: &str,
    ) -> Result<Vec<T>, PingFederateError> {
        let body: serde_json::Value = self.get_json(path).await?;

        let response: ItemsResponse<T> =
            serde_json::from_value(body).map_err(|e| PingFederateError::DiscoveryFailed {
                resource_type: resource_type.to_string(),
                message: e.to_string(),
            })?;

        Ok(response.items)
    }

    pub async fn list_oauth_clients(&self) -> Result<Vec<OAuthClient>, PingFederateError> {
        self.list_items("/oauth/clients", OAUTH_CLIENT).await
    }

    pub async fn list_idp_adapters(&self) -> Result<Vec<IdpAdapter>, PingFederateError> {
        self.list_items("/idp/adapters", IDP_ADAPTER).await
    }

    pub async fn list_idp_to_sp_adapter_mappings(
        &self,
    ) -> Result<Vec<IdpToSpAdapterMapping>, PingFederateError> {
        self.list_items("/idpToSpAdapterMapping", IDP_TO_SP_ADAPTER_MAPPING)
            .await
    }
}

impl std::fmt::Debug for PingFederateClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PingFederateClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
