mod cli;
mod commands;
mod config;
mod dispatch;
mod display;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

/// Log filter used when `RUST_LOG` is unset
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "eternum=warn",
        1 => "eternum=info",
        _ => "eternum=debug",
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(cli.verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load()?;
    let prices = || {
        let prices = config.resolve_prices(cli.prices.as_deref());
        tracing::debug!(
            lords_usd = prices.lords_usd,
            strk_usd = prices.strk_usd,
            "using prices"
        );
        prices
    };

    match cli.command {
        Commands::Victory(args) => commands::victory::handle(&config, &prices(), &args)?,

        Commands::Achievements { command } => {
            dispatch::dispatch_achievements(&config, &prices(), command)?
        }

        Commands::Revenue { table, format } => {
            commands::revenue::handle(table.as_deref(), &prices(), format)?
        }

        Commands::SeasonPass { sales, format } => {
            commands::season_pass::handle(&config, &prices(), sales.as_deref(), format)?
        }

        Commands::Address { command } => dispatch::dispatch_address(&config, command)?,

        Commands::Configure {
            data_dir,
            lords_price,
            strk_price,
            show,
        } => commands::configure::handle(data_dir, lords_price, strk_price, show)?,
    }

    Ok(())
}
