use serde::Deserialize;

use crate::import_block::ImportBlock;

pub const OAUTH_CLIENT: &str = "pingfederate_oauth_client";
pub const IDP_ADAPTER: &str = "pingfederate_idp_adapter";
pub const IDP_TO_SP_ADAPTER_MAPPING: &str = "pingfederate_idp_to_sp_adapter_mapping";
pub const SERVER_SETTINGS: &str = "pingfederate_server_settings";

pub const RESOURCE_TYPES: &[&str] = &[
    OAUTH_CLIENT,
    IDP_ADAPTER,
    IDP_TO_SP_ADAPTER_MAPPING,
    SERVER_SETTINGS,
];

const SERVER_SETTINGS_ID: &str = "server_settings_singleton_id";

/// Envelope used by every PingFederate collection endpoint.
#[derive(Debug, Deserialize)]
pub struct ItemsResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthClient {
    pub client_id: String,
    pub name: String,
}

impl OAuthClient {
    pub fn into_import_block(self) -> ImportBlock {
        ImportBlock::new(OAUTH_CLIENT, &self.name, self.client_id.as_str())
            .with_comment("Resource Type", OAUTH_CLIENT)
            .with_comment("OAuth Client Name", self.name)
            .with_comment("OAuth Client ID", self.client_id)
    }
}

#[derive(Debug, Deserialize)]
pub struct IdpAdapter {
    pub id: String,
    pub name: String,
}

impl IdpAdapter {
    pub fn into_import_block(self) -> ImportBlock {
        ImportBlock::new(IDP_ADAPTER, &self.name, self.id.as_str())
            .with_comment("Resource Type", IDP_ADAPTER)
            .with_comment("IdP Adapter Name", self.name)
            .with_comment("IdP Adapter ID", self.id)
    }
}

/// Maps an IdP adapter (source) onto an SP adapter (target).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdpToSpAdapterMapping {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
}

impl IdpToSpAdapterMapping {
    pub fn into_import_block(self) -> ImportBlock {
        let name = format!("{}_to_{}", self.source_id, self.target_id);
        ImportBlock::new(IDP_TO_SP_ADAPTER_MAPPING, &name, self.id.as_str())
            .with_comment("Resource Type", IDP_TO_SP_ADAPTER_MAPPING)
            .with_comment("IdP Adapter ID", self.source_id)
            .with_comment("SP Adapter ID", self.target_id)
            .with_comment("Mapping ID", self.id)
    }
}

pub fn server_settings_import_block() -> ImportBlock {
    ImportBlock::new(SERVER_SETTINGS, "server_settings", SERVER_SETTINGS_ID)
        .with_comment("Resource Type", SERVER_SETTINGS)
        .with_comment("Singleton ID", SERVER_SETTINGS_ID)
}
