//! pingcli - Terraform import block exporter
//!
//! Reads existing PingFederate and PingOne configuration and emits Terraform
//! `import` blocks with sanitized, namespaced resource names.

pub mod connectors;
pub mod error;
pub mod import_block;
pub mod output;
pub mod validation;

pub use connectors::pingfederate::{PingFederateClient, PingFederateError};
pub use connectors::pingone::{PingOneClient, PingOneError, Region};
pub use connectors::{
    Connector, ConnectorError, ConnectorSettings, ExportOptions, get_connector,
};
pub use error::ExportError;
pub use import_block::{ImportBlock, NAME_PREFIX, escape_char, sanitize_name};
pub use validation::validate_unique;
