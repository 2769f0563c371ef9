use apod_gallery::cli::{Cli, Commands};
use apod_gallery::Config;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apod_gallery=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let load_config = || -> anyhow::Result<Config> {
        let mut config = Config::load(&cli.config)?;
        if let Some(key) = &cli.api_key {
            config.apod.api_key = key.clone();
        }
        Ok(config)
    };

    match &cli.command {
        Some(Commands::Init { path, force }) => {
            apod_gallery::cli::init::run(path.clone(), *force).await?;
        }
        Some(Commands::Serve { host, port }) => {
            apod_gallery::cli::serve::run(load_config()?, host.clone(), *port).await?;
        }
        Some(Commands::Fetch { start, end, json }) => {
            apod_gallery::cli::fetch::run(&load_config()?, start, end, *json).await?;
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
