use clap::{Parser, Subcommand};

use pingcli::{ConnectorSettings, Region};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export existing configuration as Terraform import blocks
    Export {
        #[command(subcommand)]
        command: ExportCommand,
    },
    /// List connectors and the resource types they export
    Resources,
}

#[derive(Subcommand, Debug)]
pub enum ExportCommand {
    Pingfederate(PingFederateArgs),
    Pingone(PingOneArgs),
}

impl ExportCommand {
    /// Connector name, its settings, and the shared export flags.
    pub fn into_parts(self) -> (&'static str, ConnectorSettings, ExportArgs) {
        match self {
            ExportCommand::Pingfederate(args) => (
                "pingfederate",
                ConnectorSettings {
                    url: args.url,
                    username: args.username,
                    password: args.password,
                    ..Default::default()
                },
                args.export,
            ),
            ExportCommand::Pingone(args) => (
                "pingone",
                ConnectorSettings {
                    url: args.url,
                    environment_id: args.environment_id,
                    region: args.region,
                    token: args.token,
                    ..Default::default()
                },
                args.export,
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Hcl,
    Json,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Only export these resource types (repeatable)
    #[arg(long = "resource-type", value_name = "TYPE")]
    pub resource_types: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Hcl)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct PingFederateArgs {
    /// Admin console origin, e.g. https://localhost:9999
    #[arg(long, env = "PINGFEDERATE_URL")]
    pub url: Option<String>,

    #[arg(long, env = "PINGFEDERATE_USERNAME")]
    pub username: Option<String>,

    #[arg(long, env = "PINGFEDERATE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(clap::Args, Debug)]
pub struct PingOneArgs {
    #[arg(long, env = "PINGONE_ENVIRONMENT_ID")]
    pub environment_id: Option<String>,

    #[arg(long, env = "PINGONE_REGION", value_enum)]
    pub region: Option<Region>,

    #[arg(long, env = "PINGONE_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Override the regional API base URL
    #[arg(long, env = "PINGONE_API_URL")]
    pub url: Option<String>,

    #[command(flatten)]
    pub export: ExportArgs,
}
