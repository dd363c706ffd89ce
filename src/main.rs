//! Ames Housing - Main Entry Point
//!
//! Dataset explorer and price estimator with subcommands and an interactive menu.

use clap::Parser;
use ames_housing::cli::{
    cmd_correlations, cmd_info, cmd_interactive, cmd_missing, cmd_predict, cmd_table, load_context, load_dataset,
    Cli, Commands,
};
use ames_housing::estimator::FeatureInput;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so tables and JSON on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ames_housing=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.app_config()?;

    let result = match cli.command {
        Some(Commands::Table { rows, columns }) => {
            let rows = rows.unwrap_or(config.display.preview_rows);
            load_dataset(&config).and_then(|ds| cmd_table(&ds, rows, &columns))
        }
        Some(Commands::Correlations { top }) => {
            let top = top.unwrap_or(config.display.top_correlations);
            load_dataset(&config).and_then(|ds| cmd_correlations(&ds, top))
        }
        Some(Commands::Missing { top }) => {
            let top = top.unwrap_or(config.display.top_missing);
            load_dataset(&config).and_then(|ds| cmd_missing(&ds, top))
        }
        Some(Commands::Predict { area, year_built, basement_area, quality, garage_cars, json }) => {
            let input = FeatureInput {
                area,
                year_built,
                overall_quality: quality,
                garage_cars,
                basement_area,
            };
            load_context(config).and_then(|ctx| cmd_predict(&ctx, &input, json))
        }
        Some(Commands::Info) => load_dataset(&config).and_then(|ds| cmd_info(&ds)),
        None => load_context(config).and_then(|ctx| cmd_interactive(&ctx)),
    };

    if let Err(err) = &result {
        eprintln!();
        tracing::error!("{:#}", err);
    }

    result
}
