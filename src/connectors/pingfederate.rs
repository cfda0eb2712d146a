mod client;
mod error;
mod types;

pub use client::PingFederateClient;
pub use error::PingFederateError;
pub use types::{
    IDP_ADAPTER, IDP_TO_SP_ADAPTER_MAPPING, IdpAdapter, IdpToSpAdapterMapping, OAUTH_CLIENT,
    OAuthClient, RESOURCE_TYPES, SERVER_SETTINGS, server_settings_import_block,
};

use async_trait::async_trait;

use super::{
    Connector, ConnectorError, ConnectorSettings, ExportOptions, select_resource_types,
};
use crate::import_block::ImportBlock;
use crate::validation::validate_unique;

pub struct PingFederateConnector {
    settings: ConnectorSettings,
}

impl PingFederateConnector {
    pub fn new(settings: ConnectorSettings) -> Self {
        Self { settings }
    }

    fn client(&self) -> Result<PingFederateClient, ConnectorError> {
        let url = self.settings.url.as_deref().ok_or_else(|| {
            ConnectorError::MissingSetting(
                "No PingFederate URL provided. Set PINGFEDERATE_URL or use --url flag"
                    .to_string(),
            )
        })?;

        let username = self.settings.username.clone().ok_or_else(|| {
            ConnectorError::Auth(
                "No username provided. Set PINGFEDERATE_USERNAME or use --username flag"
                    .to_string(),
            )
        })?;

        let password = self.settings.password.clone().ok_or_else(|| {
            ConnectorError::Auth(
                "No password provided. Set PINGFEDERATE_PASSWORD or use --password flag"
                    .to_string(),
            )
        })?;

        Ok(PingFederateClient::new(url, username, password)?)
    }
}

#[async_trait]
impl Connector for PingFederateConnector {
    fn name(&self) -> &str {
        "pingfederate"
    }

    async fn export(&self, options: &ExportOptions) -> Result<Vec<ImportBlock>, ConnectorError> {
        let selected = select_resource_types(self.name(), RESOURCE_TYPES, options)?;
        let client = self.client()?;

        tracing::info!(base_url = %client.api_base(), "exporting PingFederate configuration");

        let mut blocks = Vec::new();

        for resource_type in selected {
            let batch: Vec<ImportBlock> = match resource_type {
                OAUTH_CLIENT => client
                    .list_oauth_clients()
                    .await?
                    .into_iter()
                    .map(OAuthClient::into_import_block)
                    .collect(),
                IDP_ADAPTER => client
                    .list_idp_adapters()
                    .await?
                    .into_iter()
                    .map(IdpAdapter::into_import_block)
                    .collect(),
                IDP_TO_SP_ADAPTER_MAPPING => client
                    .list_idp_to_sp_adapter_mappings()
                    .await?
                    .into_iter()
                    .map(IdpToSpAdapterMapping::into_import_block)
                    .collect(),
                SERVER_SETTINGS => vec![server_settings_import_block()],
                other => {
                    return Err(ConnectorError::UnknownResourceType {
                        connector: self.name().to_string(),
                        resource_type: other.to_string(),
                    });
                }
            };

            validate_unique(&batch)?;

            tracing::info!(resource_type, count = batch.len(), "resources exported");

            blocks.extend(batch);
        }

        Ok(blocks)
    }

    fn resource_types(&self) -> Vec<&'static str> {
        RESOURCE_TYPES.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_export_missing_password() {
        let connector = PingFederateConnector::new(ConnectorSettings {
            url: Some("https://localhost:9999".to_string()),
            username: Some("administrator".to_string()),
            ..Default::default()
        });

        match connector.export(&ExportOptions::default()).await {
            Err(ConnectorError::Auth(msg)) => assert!(msg.contains("--password")),
            other => panic!("expected Auth error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_export_rejects_unknown_filter_before_connecting() {
        let connector = PingFederateConnector::new(ConnectorSettings::default());
        let options = ExportOptions {
            resource_types: vec!["pingone_group".to_string()],
        };

        assert!(matches!(
            connector.export(&options).await,
            Err(ConnectorError::UnknownResourceType { .. })
        ));
    }

    #[tokio::test]
    async fn test_export_server_settings_only_makes_no_requests() {
        // Unroutable URL: any request would fail with a network error.
        let connector = PingFederateConnector::new(ConnectorSettings {
            url: Some("http://127.0.0.1:1".to_string()),
            username: Some("administrator".to_string()),
            password: Some("secret".to_string()),
            ..Default::default()
        });
        let options = ExportOptions {
            resource_types: vec![SERVER_SETTINGS.to_string()],
        };

        let blocks = connector.export(&options).await.unwrap();
        assert_eq!(blocks, vec![server_settings_import_block()]);
    }
}
