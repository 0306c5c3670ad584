use clap::Parser;

use cep_lookup::cli::{self, Cli, Command};
use cep_lookup::client::CepClient;
use cep_lookup::http::ReqwestConnector;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Set up tracing
    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    // The client opens a fresh session (own cookie jar) per operation.
    let client = CepClient::new(Box::new(ReqwestConnector::new()));

    match args.command {
        Command::Query { criteria } => cli::query::query(&client, criteria.into()).await?,
        Command::Download {
            criteria,
            format,
            output,
        } => cli::download::download(&client, criteria.into(), &format, &output).await?,
        Command::Details { criteria, json } => {
            cli::details::details(&client, criteria.into(), json).await?
        }
        Command::Banks { find } => cli::banks::banks(&client, find.as_deref()).await?,
    }

    Ok(())
}
