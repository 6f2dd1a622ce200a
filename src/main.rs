mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zlanddoc=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Update {
            path,
            file_descriptions,
            extension,
        } => {
            cli::update(&path, cli.config.as_deref(), &extension, file_descriptions)?;
        }
        Commands::Check {
            path,
            file_descriptions,
            extension,
        } => {
            let stale = cli::check(&path, cli.config.as_deref(), &extension, file_descriptions)?;
            if !stale.is_empty() {
                std::process::exit(1);
            }
        }
        Commands::Scan {
            path,
            format,
            file_descriptions,
            extension,
        } => {
            cli::scan(
                &path,
                cli.config.as_deref(),
                &extension,
                file_descriptions,
                &format,
            )?;
        }
    }

    Ok(())
}
