mod client;
mod error;
mod types;

pub use client::PingOneClient;
pub use error::PingOneError;
pub use types::{
    APPLICATION, Application, BRANDING_SETTINGS, GROUP, Group, POPULATION, Population,
    RESOURCE_TYPES, Region, branding_settings_import_block,
};

use async_trait::async_trait;

use super::{
    Connector, ConnectorError, ConnectorSettings, ExportOptions, select_resource_types,
};
use crate::import_block::ImportBlock;
use crate::validation::validate_unique;

pub struct PingOneConnector {
    settings: ConnectorSettings,
}

impl PingOneConnector {
    pub fn new(settings: ConnectorSettings) -> Self {
        Self { settings }
    }

    fn environment_id(&self) -> Result<&str, ConnectorError> {
        self.settings.environment_id.as_deref().ok_or_else(|| {
            ConnectorError::MissingSetting(
                "No environment ID provided. Set PINGONE_ENVIRONMENT_ID or use --environment-id flag"
                    .to_string(),
            )
        })
    }

    // An explicit URL overrides the regional endpoint.
    fn client(&self) -> Result<PingOneClient, ConnectorError> {
        let token = self.settings.token.clone().ok_or_else(|| {
            ConnectorError::Auth(
                "No access token provided. Set PINGONE_ACCESS_TOKEN or use --token flag"
                    .to_string(),
            )
        })?;

        let client = match &self.settings.url {
            Some(url) => PingOneClient::with_base_url(token, url.trim_end_matches('/').to_string())?,
            None => PingOneClient::new(token, self.settings.region.unwrap_or_default())?,
        };

        Ok(client)
    }
}

#[async_trait]
impl Connector for PingOneConnector {
    fn name(&self) -> &str {
        "pingone"
    }

    async fn export(&self, options: &ExportOptions) -> Result<Vec<ImportBlock>, ConnectorError> {
        let selected = select_resource_types(self.name(), RESOURCE_TYPES, options)?;
        let environment_id = self.environment_id()?;
        let client = self.client()?;

        tracing::info!(
            environment_id,
            base_url = %client.api_base(),
            "exporting PingOne environment"
        );

        let mut blocks = Vec::new();

        for resource_type in selected {
            let batch: Vec<ImportBlock> = match resource_type {
                POPULATION => client
                    .list_populations(environment_id)
                    .await?
                    .into_iter()
                    .map(|p| p.into_import_block(environment_id))
                    .collect(),
                GROUP => client
                    .list_groups(environment_id)
                    .await?
                    .into_iter()
                    .map(|g| g.into_import_block(environment_id))
                    .collect(),
                APPLICATION => client
                    .list_applications(environment_id)
                    .await?
                    .into_iter()
                    .map(|a| a.into_import_block(environment_id))
                    .collect(),
                BRANDING_SETTINGS => vec![branding_settings_import_block(environment_id)],
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
    async fn test_export_missing_environment_id() {
        let connector = PingOneConnector::new(ConnectorSettings {
            token: Some("token".to_string()),
            ..Default::default()
        });

        match connector.export(&ExportOptions::default()).await {
            Err(ConnectorError::MissingSetting(msg)) => {
                assert!(msg.contains("PINGONE_ENVIRONMENT_ID"))
            }
            other => panic!("expected MissingSetting, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_export_branding_only_makes_no_requests() {
        let connector = PingOneConnector::new(ConnectorSettings {
            url: Some("http://127.0.0.1:1".to_string()),
            environment_id: Some("env-abc".to_string()),
            token: Some("token".to_string()),
            ..Default::default()
        });
        let options = ExportOptions {
            resource_types: vec![BRANDING_SETTINGS.to_string()],
        };

        let blocks = connector.export(&options).await.unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].resource_id(), "env-abc");
    }
}
