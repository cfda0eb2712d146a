mod cli;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, OutputFormat};
use pingcli::{ExportOptions, get_connector, output};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Export { command } => {
            let (name, settings, export) = command.into_parts();
            let connector = get_connector(name, settings)?;
            let options = ExportOptions {
                resource_types: export.resource_types,
            };

            let blocks = connector.export(&options).await?;

            match export.format {
                OutputFormat::Hcl => print!("{}", output::render_hcl(&blocks)),
                OutputFormat::Json => println!("{}", output::render_json(&blocks)?),
            }

            eprintln!("{}", output::summary_table(&blocks));
            tracing::info!(connector = name, count = blocks.len(), "export complete");
        }
        Command::Resources => {
            println!("{}", output::connector_tree()?);
        }
    }

    Ok(())
}
