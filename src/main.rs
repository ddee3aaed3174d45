use clap::Parser;
use snapfeed::cli::Cli;
use snapfeed::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let log_path = init_tracing(&config.logging)?;
    tracing::info!(log = %log_path.display(), "Starting snapfeed v{}", env!("CARGO_PKG_VERSION"));

    snapfeed::ui::run(&config)?;
    Ok(())
}
