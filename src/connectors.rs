pub mod pingfederate;
pub mod pingone;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::error::ExportError;
use crate::import_block::ImportBlock;

pub use pingone::Region;

/// Names accepted by [`get_connector`].
pub const CONNECTORS: &[&str] = &["pingfederate", "pingone"];

#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("unknown connector: {0}")]
    UnknownConnector(String),
    #[error("unknown resource type for {connector}: {resource_type}")]
    UnknownResourceType {
        connector: String,
        resource_type: String,
    },
    #[error("authentication error: {0}")]
    Auth(String),
    #[error("missing setting: {0}")]
    MissingSetting(String),
    #[error("pingfederate error: {0}")]
    PingFederate(String),
    #[error("pingone error: {0}")]
    PingOne(String),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Connection settings collected from flags and environment variables.
///
/// Each connector reads only the fields it needs.
#[derive(Clone, Default)]
pub struct ConnectorSettings {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub environment_id: Option<String>,
    pub region: Option<Region>,
    pub token: Option<String>,
}

impl std::fmt::Debug for ConnectorSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("ConnectorSettings")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("environment_id", &self.environment_id)
            .field("region", &self.region)
            .field("token", &redact(&self.token))
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Resource types to export. Empty means all of them.
    pub resource_types: Vec<String>,
}

impl ExportOptions {
    pub fn selects(&self, resource_type: &str) -> bool {
        self.resource_types.is_empty() || self.resource_types.iter().any(|t| t == resource_type)
    }
}

#[async_trait]
pub trait Connector: Send + Sync {
    fn name(&self) -> &str;
    fn resource_types(&self) -> Vec<&'static str>;
    /// Exports import blocks grouped by resource type, in `resource_types()` order.
    async fn export(&self, options: &ExportOptions) -> Result<Vec<ImportBlock>, ConnectorError>;
}

pub fn get_connector(
    name: &str,
    settings: ConnectorSettings,
) -> Result<Box<dyn Connector>, ConnectorError> {
    match name {
        "pingfederate" => Ok(Box::new(pingfederate::PingFederateConnector::new(settings))),
        "pingone" => Ok(Box::new(pingone::PingOneConnector::new(settings))),
        other => Err(ConnectorError::UnknownConnector(other.to_string())),
    }
}

/// Resolves the export filter against a connector's supported types.
pub(crate) fn select_resource_types(
    connector: &str,
    supported: &[&'static str],
    options: &ExportOptions,
) -> Result<Vec<&'static str>, ConnectorError> {
    if let Some(unknown) = options
        .resource_types
        .iter()
        .find(|requested| !supported.iter().any(|s| s == requested))
    {
        return Err(ConnectorError::UnknownResourceType {
            connector: connector.to_string(),
            resource_type: unknown.clone(),
        });
    }

    Ok(supported
        .iter()
        .copied()
        .filter(|t| options.selects(t))
        .collect())
}

/// Why an admin API response could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    Unauthorized { message: String },
    Status { status: u16, message: String },
    Decode { path: String, message: String },
}

/// Checks the status of a response to `path` and decodes its body.
///
/// Error messages come from the body's `message` field when it is JSON,
/// otherwise from the status reason phrase.
pub(crate) fn parse_response<T: DeserializeOwned>(
    path: &str,
    status: StatusCode,
    body: &str,
) -> Result<T, ResponseError> {
    if !status.is_success() {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(|m| m.as_str())
                    .map(|m| m.to_string())
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        if status == StatusCode::UNAUTHORIZED {
            return Err(ResponseError::Unauthorized { message });
        }

        return Err(ResponseError::Status {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(body).map_err(|e| ResponseError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })
}
