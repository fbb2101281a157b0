use blockdecree_domain::CliOverrides;
use clap::Parser;
use tracing::info;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "blockdecree")]
#[command(version)]
#[command(about = "Consolidates published blocking decisions into one domain blocklist")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Document manifest path
    #[arg(short = 'm', long, value_name = "FILE")]
    manifest: Option<String>,

    /// Seed blocklist (repeatable)
    #[arg(long, value_name = "FILE")]
    seed: Vec<String>,

    /// Output blocklist path
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<String>,

    /// Domain the decisions are published on; never blocked
    #[arg(long)]
    source_domain: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Shorthand for --log-level debug
    #[arg(short = 'd', long)]
    debug: bool,

    /// Resolve and report without writing the output file
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        Some("debug".to_string())
    } else {
        cli.log_level.clone()
    };

    let cli_overrides = CliOverrides {
        manifest: cli.manifest.clone(),
        seed_files: (!cli.seed.is_empty()).then(|| cli.seed.clone()),
        output_file: cli.output.clone(),
        source_domain: cli.source_domain.clone(),
        log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting blockdecree v{}", env!("CARGO_PKG_VERSION"));

    let adapters = di::Adapters::new(&config);
    let use_cases = di::UseCases::new(&config, &adapters)?;

    let report = use_cases.consolidate.execute(cli.dry_run).await?;

    info!(
        documents = report.documents_processed,
        skipped = report.documents_skipped,
        seeded = report.seeded,
        accepted = report.candidates_accepted,
        rejected = report.rejected_total(),
        blocked = report.blocked_total,
        written = report.written,
        output = %config.storage.output_file,
        "Done"
    );
    Ok(())
}
